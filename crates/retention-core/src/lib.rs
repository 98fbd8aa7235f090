//! retention-core: domain model shared by the data-retention admin surfaces.
//!
//! Channel records as the policy API returns them, search/filter options,
//! the staged add/remove edit set, the remote error taxonomy, and message
//! descriptors for localized labels.

pub mod channel;
pub mod error;
pub mod messages;
pub mod pending;
pub mod search;

pub use channel::{Channel, ChannelKind};
pub use error::ApiError;
pub use pending::PendingEdits;
pub use search::ChannelSearchOpts;
