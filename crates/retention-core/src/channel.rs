//! Channel records as returned by the data-retention policy API.

use serde::{Deserialize, Serialize};

/// Channel visibility as encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelKind {
    #[serde(rename = "O")]
    Public,
    #[serde(rename = "P")]
    Private,
}

impl ChannelKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// A channel row with the team context the admin console displays alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    /// URL slug, stable across renames of the display name.
    pub name: String,
    pub display_name: String,
    pub team_display_name: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    /// Epoch millis of archival; zero means the channel is live.
    #[serde(default)]
    pub delete_at: i64,
}

impl Channel {
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.delete_at != 0
    }
}

#[cfg(test)]
mod tests {
    use super::{Channel, ChannelKind};

    fn channel(kind: ChannelKind, delete_at: i64) -> Channel {
        Channel {
            id: "ch-1".to_owned(),
            name: "town-square".to_owned(),
            display_name: "Town Square".to_owned(),
            team_display_name: "Core".to_owned(),
            kind,
            delete_at,
        }
    }

    #[test]
    fn archived_iff_delete_at_is_set() {
        assert!(!channel(ChannelKind::Public, 0).is_archived());
        assert!(channel(ChannelKind::Public, 1_700_000_000_000).is_archived());
    }

    #[test]
    fn kind_round_trips_wire_encoding() {
        let encoded = serde_json::to_string(&channel(ChannelKind::Private, 0))
            .expect("serialize channel");
        assert!(encoded.contains("\"type\":\"P\""));
        let decoded: Channel = serde_json::from_str(&encoded).expect("decode channel");
        assert_eq!(decoded.kind, ChannelKind::Private);
    }

    #[test]
    fn delete_at_defaults_to_live() {
        let decoded: Channel = serde_json::from_str(
            r#"{"id":"c","name":"n","display_name":"N","team_display_name":"T","type":"O"}"#,
        )
        .expect("decode channel");
        assert!(!decoded.is_archived());
    }
}
