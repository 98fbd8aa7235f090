//! Search/filter options forwarded to the channel search endpoint.

use serde::{Deserialize, Serialize};

/// Structured filter predicates for a channel search.
///
/// An all-default value means "no filter" and serializes to an empty object,
/// which is what the server expects when no predicate is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSearchOpts {
    #[serde(default, skip_serializing_if = "is_false")]
    pub public: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub private: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team_ids: Vec<String>,
}

impl ChannelSearchOpts {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.public && !self.private && !self.deleted && self.team_ids.is_empty()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::ChannelSearchOpts;

    #[test]
    fn default_opts_serialize_to_empty_object() {
        let payload = serde_json::to_string(&ChannelSearchOpts::default())
            .expect("serialize opts");
        assert_eq!(payload, "{}");
    }

    #[test]
    fn active_predicates_are_forwarded() {
        let opts = ChannelSearchOpts {
            private: true,
            team_ids: vec!["team-1".to_owned()],
            ..ChannelSearchOpts::default()
        };
        assert!(!opts.is_empty());
        let payload = serde_json::to_string(&opts).expect("serialize opts");
        assert_eq!(payload, r#"{"private":true,"team_ids":["team-1"]}"#);
    }

    #[test]
    fn equality_is_structural() {
        let left = ChannelSearchOpts {
            public: true,
            ..ChannelSearchOpts::default()
        };
        let right = ChannelSearchOpts {
            public: true,
            ..ChannelSearchOpts::default()
        };
        assert_eq!(left, right);
        assert_ne!(left, ChannelSearchOpts::default());
    }
}
