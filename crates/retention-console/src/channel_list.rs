//! Channel list state engine for retention-policy membership editing.
//!
//! The owning coordinator supplies authoritative rows, the staged edit set,
//! and the current search inputs on every cycle; this model owns only its
//! page index, loading flag, fetch high-water mark, and debounce gate.
//! Update handlers are pure transitions returning a [`Command`] for the
//! async driver, so there is no implicit re-render trigger anywhere.

use retention_core::channel::Channel;
use retention_core::pending::PendingEdits;
use retention_core::search::ChannelSearchOpts;

use crate::debounce::{DebounceGate, DebounceTicket};
use crate::grid::{columns, row_for, GridView};
use crate::pagination::{effective_total, window, PageWindow, INITIAL_FETCH_MULTIPLIER, PAGE_SIZE};

/// Pause after the last keystroke before the search request goes out.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Inputs supplied by the owning coordinator on every cycle.
///
/// The authoritative channel slice and total are owned by the external
/// store; the model never mutates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInputs {
    /// Materialized rows for the pages fetched so far, in server order.
    pub channels: Vec<Channel>,
    /// Total row count reported by the server.
    pub total: usize,
    pub pending: PendingEdits,
    pub search_term: String,
    pub filters: ChannelSearchOpts,
    /// Absent while the policy is still being created; fetches are skipped.
    pub policy_id: Option<String>,
}

/// Effect requested by an update handler, executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    /// Fetch one authoritative page into the store.
    LoadPage { page: usize, per_page: usize },
    /// Run the remote search with the latest term and filters.
    Search {
        term: String,
        opts: ChannelSearchOpts,
    },
    /// Fire [`ChannelListModel::debounce_fired`] after the debounce pause.
    ScheduleSearch { ticket: DebounceTicket },
    /// Hand a staged removal to the coordinator (`onRemoveCallback`).
    StageRemove(Channel),
    /// Hand staged additions to the coordinator (`onAddCallback`).
    StageAdd(Vec<Channel>),
}

impl Command {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// State owned exclusively by the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelListModel {
    page: usize,
    loading: bool,
    /// Highest page index ever requested; only advances, so a window that is
    /// short purely because removals shrank it does not refetch forever.
    highest_page_requested: usize,
    gate: DebounceGate,
    last_term: String,
    last_filters: ChannelSearchOpts,
}

impl ChannelListModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// First fetch: two pages worth, so the first next-page is already local.
    pub fn init(&mut self, inputs: &ListInputs) -> Command {
        self.request_page(inputs, 0, PAGE_SIZE * INITIAL_FETCH_MULTIPLIER)
    }

    /// Total as if the staged edits were already committed.
    #[must_use]
    pub fn effective_total(&self, inputs: &ListInputs) -> usize {
        effective_total(
            inputs.total,
            inputs.pending.add_count(),
            inputs.pending.remove_count(),
        )
    }

    /// Display bounds for the current page, recomputed on every call.
    #[must_use]
    pub fn pagination(&self, inputs: &ListInputs) -> PageWindow {
        window(self.page, PAGE_SIZE, self.effective_total(inputs))
    }

    pub fn next_page(&mut self, inputs: &ListInputs) -> Command {
        self.page += 1;
        // Prefetch one page past the one now shown.
        self.request_page(inputs, self.page + 1, PAGE_SIZE)
    }

    pub fn previous_page(&mut self, inputs: &ListInputs) -> Command {
        self.page = self.page.saturating_sub(1);
        self.request_page(inputs, self.page + 1, PAGE_SIZE)
    }

    /// Channels for the current window, merged with staged edits.
    ///
    /// Staged additions are shown first regardless of server order; staged
    /// removals are dropped. When the window comes up short and the server
    /// still holds unfetched rows, a backfill fetch is requested at most
    /// once per page index.
    pub fn visible_rows(&mut self, inputs: &ListInputs) -> (Vec<Channel>, Command) {
        let win = self.pagination(inputs);

        let mut merged: Vec<Channel> = inputs.pending.added().cloned().collect();
        merged.extend(
            inputs
                .channels
                .iter()
                .filter(|c| !inputs.pending.is_removal_staged(&c.id))
                .cloned(),
        );

        // Both bounds clamp to what is materialized, start last: a page
        // stranded past a shrunken total must yield an empty window, not an
        // inverted slice.
        let end = win.end.min(merged.len());
        let start = (win.start - 1).min(end);
        let rows = merged[start..end].to_vec();

        let mut command = Command::None;
        if rows.len() < PAGE_SIZE && inputs.channels.len() < inputs.total {
            let pages_removed = inputs.pending.remove_count() / PAGE_SIZE;
            let page_to_load = self.page + pages_removed + 1;
            if page_to_load > self.highest_page_requested {
                self.highest_page_requested = page_to_load;
                command = self.request_page(inputs, page_to_load, PAGE_SIZE);
            }
        }

        (rows, command)
    }

    /// Stage removal of a channel.
    ///
    /// No-op when an equal channel is already staged for removal, so a
    /// double-click cannot fire the callback twice. Steps the page back when
    /// the removal would strand the view on a now-empty trailing page.
    pub fn remove_channel(&mut self, inputs: &ListInputs, channel: &Channel) -> Command {
        if inputs.pending.staged_removal(&channel.id) == Some(channel) {
            return Command::None;
        }

        let win = self.pagination(inputs);
        let total_after = self.effective_total(inputs).saturating_sub(1);
        if win.end > total_after && win.end % PAGE_SIZE == 1 && self.page > 0 {
            self.page -= 1;
        }

        Command::StageRemove(channel.clone())
    }

    /// Stage additions picked in the channel selector.
    pub fn add_channels(&mut self, channels: Vec<Channel>) -> Command {
        if channels.is_empty() {
            return Command::None;
        }
        Command::StageAdd(channels)
    }

    /// Search/filter reconciliation, run whenever new inputs arrive.
    ///
    /// Term or filter changes (deep comparison) cancel any pending debounce
    /// cycle. A cleared term takes the synchronous path: changed filters go
    /// straight to the server with the empty term, otherwise the list
    /// reloads page zero at the initial fetch size. A non-empty term arms
    /// the debounce gate and asks the driver to call back after the pause.
    pub fn observe_inputs(&mut self, inputs: &ListInputs) -> Command {
        let term_changed = inputs.search_term != self.last_term;
        let filters_changed = inputs.filters != self.last_filters;
        if !term_changed && !filters_changed {
            return Command::None;
        }
        self.last_term = inputs.search_term.clone();
        self.last_filters = inputs.filters.clone();

        self.loading = true;
        self.gate.disarm();

        if inputs.search_term.is_empty() {
            let command = if filters_changed && inputs.policy_id.is_some() {
                Command::Search {
                    term: String::new(),
                    opts: inputs.filters.clone(),
                }
            } else {
                self.page = 0;
                self.request_page(inputs, 0, PAGE_SIZE * INITIAL_FETCH_MULTIPLIER)
            };
            if command.is_none() {
                // Nothing will settle later; the flag must not stick.
                self.loading = false;
            }
            return command;
        }

        let ticket = self.gate.arm();
        Command::ScheduleSearch { ticket }
    }

    /// Debounce pause elapsed. Stale tickets are discarded whole: they do
    /// not search, clear loading, or touch the gate.
    pub fn debounce_fired(&mut self, inputs: &ListInputs, ticket: DebounceTicket) -> Command {
        if !self.gate.is_current(ticket) {
            return Command::None;
        }
        self.gate.disarm();

        if inputs.policy_id.is_none() {
            self.loading = false;
            return Command::None;
        }

        Command::Search {
            term: self.last_term.clone(),
            opts: self.last_filters.clone(),
        }
    }

    /// A remote call settled, successfully or not. Loading must never stick.
    pub fn command_settled(&mut self) {
        self.loading = false;
    }

    /// Full projection for the data grid, plus any backfill fetch it needs.
    pub fn grid_view(&mut self, inputs: &ListInputs) -> (GridView, Command) {
        let (channels, command) = self.visible_rows(inputs);
        let view = GridView {
            columns: columns(),
            rows: channels.iter().map(row_for).collect(),
            window: self.pagination(inputs),
            page: self.page,
            loading: self.loading,
        };
        (view, command)
    }

    fn request_page(&mut self, inputs: &ListInputs, page: usize, per_page: usize) -> Command {
        if inputs.policy_id.is_none() {
            return Command::None;
        }
        self.loading = true;
        Command::LoadPage { page, per_page }
    }
}
