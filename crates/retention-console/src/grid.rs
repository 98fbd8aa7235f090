//! Column/row projection handed to the generic data grid renderer.
//!
//! The grid itself is an external collaborator; this module only describes
//! what to draw. Cell content stays structured (icon kind, action target,
//! test ids) so the renderer decides the actual markup.

use retention_core::channel::{Channel, ChannelKind};
use retention_core::messages::{self, Message};

use crate::pagination::PageWindow;

pub const FIELD_NAME: &str = "name";
pub const FIELD_TEAM: &str = "team";
pub const FIELD_REMOVE: &str = "remove";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

/// Column descriptor for the data grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: Option<Message>,
    pub field: &'static str,
    pub text_align: TextAlign,
    pub fixed: bool,
}

/// Icon shown next to a channel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelIcon {
    Globe,
    Lock,
    Archive,
}

impl ChannelIcon {
    /// Archived wins over visibility so the operator sees the channel is gone.
    #[must_use]
    pub fn for_channel(channel: &Channel) -> Self {
        if channel.is_archived() {
            return Self::Archive;
        }
        match channel.kind {
            ChannelKind::Public => Self::Globe,
            ChannelKind::Private => Self::Lock,
        }
    }
}

/// Structured cell content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    ChannelName {
        icon: ChannelIcon,
        display_name: String,
        /// Test id on the archive icon, present only for archived channels.
        archive_test_id: Option<String>,
    },
    Text(String),
    RemoveLink {
        channel_id: String,
        test_id: String,
        label: Message,
    },
}

/// One grid row: ordered field/cell pairs plus the channel id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub cells: Vec<(&'static str, Cell)>,
}

/// Everything the data grid needs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub window: PageWindow,
    pub page: usize,
    pub loading: bool,
}

/// The fixed column set: name, team, trailing remove action.
#[must_use]
pub fn columns() -> Vec<Column> {
    vec![
        Column {
            name: Some(messages::NAME_HEADER),
            field: FIELD_NAME,
            text_align: TextAlign::Left,
            fixed: true,
        },
        Column {
            name: Some(messages::TEAM_HEADER),
            field: FIELD_TEAM,
            text_align: TextAlign::Left,
            fixed: true,
        },
        Column {
            name: None,
            field: FIELD_REMOVE,
            text_align: TextAlign::Right,
            fixed: true,
        },
    ]
}

/// Project a channel into its grid row.
#[must_use]
pub fn row_for(channel: &Channel) -> Row {
    let archive_test_id = channel
        .is_archived()
        .then(|| format!("{}-archive-icon", channel.name));
    Row {
        id: channel.id.clone(),
        cells: vec![
            (
                FIELD_NAME,
                Cell::ChannelName {
                    icon: ChannelIcon::for_channel(channel),
                    display_name: channel.display_name.clone(),
                    archive_test_id,
                },
            ),
            (FIELD_TEAM, Cell::Text(channel.team_display_name.clone())),
            (
                FIELD_REMOVE,
                Cell::RemoveLink {
                    channel_id: channel.id.clone(),
                    test_id: format!("{}edit", channel.display_name),
                    label: messages::REMOVE_ACTION,
                },
            ),
        ],
    }
}
