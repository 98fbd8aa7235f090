//! Message descriptors for localized admin-console labels.
//!
//! Localization is an explicit dependency here: renderers receive a
//! `MessageCatalog` instead of relying on an ambient context, so content
//! rendered outside the main tree resolves the same translations.

/// A translatable label: stable id plus the source-language fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub id: &'static str,
    pub default_text: &'static str,
}

impl Message {
    #[must_use]
    pub fn resolve(&self, catalog: &dyn MessageCatalog) -> String {
        catalog
            .lookup(self.id)
            .unwrap_or_else(|| self.default_text.to_owned())
    }
}

/// Translation lookup. Returning `None` falls back to the default text.
pub trait MessageCatalog {
    fn lookup(&self, id: &str) -> Option<String>;
}

/// Catalog with no translations; every message resolves to its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl MessageCatalog for DefaultCatalog {
    fn lookup(&self, _id: &str) -> Option<String> {
        None
    }
}

pub const NAME_HEADER: Message = Message {
    id: "admin.channel_list.nameHeader",
    default_text: "Name",
};

pub const TEAM_HEADER: Message = Message {
    id: "admin.channel_list.teamHeader",
    default_text: "Team",
};

pub const REMOVE_ACTION: Message = Message {
    id: "admin.data_retention.custom_policy.channels.remove",
    default_text: "Remove",
};

pub const FILTER_TEAMS: Message = Message {
    id: "admin.team_settings.title",
    default_text: "Teams",
};

pub const FILTER_CHANNELS: Message = Message {
    id: "admin.channel_settings.title",
    default_text: "Channels",
};

pub const FILTER_PUBLIC: Message = Message {
    id: "admin.channel_list.public",
    default_text: "Public",
};

pub const FILTER_PRIVATE: Message = Message {
    id: "admin.channel_list.private",
    default_text: "Private",
};

pub const FILTER_ARCHIVED: Message = Message {
    id: "admin.channel_list.archived",
    default_text: "Archived",
};
