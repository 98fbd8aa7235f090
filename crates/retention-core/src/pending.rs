//! Staged add/remove edits held by the coordinator until the policy is saved.

use indexmap::IndexMap;

use crate::channel::Channel;

/// Channels staged for inclusion or exclusion, keyed by channel id.
///
/// Insertion order of `to_add` is preserved because staged additions are
/// displayed ahead of authoritative rows in the order the operator picked
/// them. The two key sets are kept disjoint: staging one direction drops any
/// stale stage in the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEdits {
    to_add: IndexMap<String, Channel>,
    to_remove: IndexMap<String, Channel>,
}

impl PendingEdits {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a channel for addition, cancelling any staged removal of it.
    pub fn stage_add(&mut self, channel: Channel) {
        self.to_remove.shift_remove(&channel.id);
        self.to_add.insert(channel.id.clone(), channel);
    }

    /// Stage a channel for removal, cancelling any staged addition of it.
    ///
    /// A channel that was only ever staged for addition is simply unstaged;
    /// it never reached the authoritative set, so there is nothing to remove.
    pub fn stage_remove(&mut self, channel: Channel) {
        if self.to_add.shift_remove(&channel.id).is_some() {
            return;
        }
        self.to_remove.insert(channel.id.clone(), channel);
    }

    #[must_use]
    pub fn added(&self) -> impl Iterator<Item = &Channel> {
        self.to_add.values()
    }

    #[must_use]
    pub fn add_count(&self) -> usize {
        self.to_add.len()
    }

    #[must_use]
    pub fn remove_count(&self) -> usize {
        self.to_remove.len()
    }

    #[must_use]
    pub fn is_removal_staged(&self, channel_id: &str) -> bool {
        self.to_remove.contains_key(channel_id)
    }

    /// The staged removal entry for an id, if any.
    #[must_use]
    pub fn staged_removal(&self, channel_id: &str) -> Option<&Channel> {
        self.to_remove.get(channel_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Net change to the server-side total if the staged edits were committed.
    #[must_use]
    pub fn net_delta(&self) -> isize {
        self.to_add.len() as isize - self.to_remove.len() as isize
    }
}
