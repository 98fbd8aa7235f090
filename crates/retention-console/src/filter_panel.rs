//! Filter dropdown composition for the channel list.
//!
//! The dropdown widget itself is external; this module describes the groups
//! it shows and turns the operator's selection into the search options the
//! server understands.

use retention_core::messages::{self, Message};
use retention_core::search::ChannelSearchOpts;

/// What the operator has ticked in the filter dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub public: bool,
    pub private: bool,
    pub archived: bool,
    pub team_ids: Vec<String>,
}

impl FilterSelection {
    /// Search options for the current selection.
    ///
    /// Predicates are only forwarded when at least one box is ticked or a
    /// team is selected; an all-default selection means "no filter" and
    /// yields the empty options payload.
    #[must_use]
    pub fn compose(&self) -> ChannelSearchOpts {
        if self.public || self.private || self.archived || !self.team_ids.is_empty() {
            ChannelSearchOpts {
                public: self.public,
                private: self.private,
                deleted: self.archived,
                team_ids: self.team_ids.clone(),
            }
        } else {
            ChannelSearchOpts::default()
        }
    }
}

/// A checkbox inside a filter group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCheckbox {
    pub key: &'static str,
    pub label: Message,
}

/// One section of the filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterGroup {
    /// Team multi-select backed by the team filter dropdown widget.
    Teams { key: &'static str, label: Message },
    Checkboxes {
        label: Message,
        options: Vec<FilterCheckbox>,
    },
}

/// The dropdown layout: team picker first, then visibility checkboxes.
#[must_use]
pub fn filter_groups() -> Vec<FilterGroup> {
    vec![
        FilterGroup::Teams {
            key: "team_ids",
            label: messages::FILTER_TEAMS,
        },
        FilterGroup::Checkboxes {
            label: messages::FILTER_CHANNELS,
            options: vec![
                FilterCheckbox {
                    key: "public",
                    label: messages::FILTER_PUBLIC,
                },
                FilterCheckbox {
                    key: "private",
                    label: messages::FILTER_PRIVATE,
                },
                FilterCheckbox {
                    key: "deleted",
                    label: messages::FILTER_ARCHIVED,
                },
            ],
        },
    ]
}
