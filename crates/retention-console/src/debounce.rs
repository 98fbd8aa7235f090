//! Generation-counted debounce gate.
//!
//! Arming hands out a ticket; re-arming supersedes every earlier ticket.
//! A timer callback that fires with a stale ticket must treat itself as
//! cancelled, since clearing a scheduled task does not guarantee its
//! callback never runs.

/// Token identifying one debounce cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
    armed: bool,
}

impl DebounceGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new debounce cycle, superseding any earlier one.
    pub fn arm(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        DebounceTicket(self.generation)
    }

    /// Cancel the pending cycle without starting a new one.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Whether the ticket belongs to the one live cycle.
    #[must_use]
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.armed && ticket.0 == self.generation
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
