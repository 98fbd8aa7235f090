//! Async command executor bridging the pure list model to the remote API.
//!
//! The model decides, the driver performs: remote calls go through the
//! [`ChannelApi`] trait, results land in the owning [`ChannelStore`], and
//! every remote path ends in `command_settled` so the loading flag cannot
//! stick when a call fails.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{sleep_until, Instant};
use tracing::warn;

use retention_core::channel::Channel;
use retention_core::error::ApiError;
use retention_core::search::ChannelSearchOpts;

use crate::channel_list::{ChannelListModel, Command, ListInputs, SEARCH_DEBOUNCE_MS};
use crate::debounce::DebounceTicket;
use crate::filter_panel::FilterSelection;
use crate::grid::GridView;

/// Remote endpoints for policy channel data. No retry policy here; failures
/// surface to the store and the engine only clears its loading flag.
#[async_trait]
pub trait ChannelApi: Send + Sync {
    async fn search_channels(
        &self,
        policy_id: &str,
        term: &str,
        opts: &ChannelSearchOpts,
    ) -> Result<Vec<Channel>, ApiError>;

    async fn get_policy_channels(
        &self,
        policy_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<Channel>, ApiError>;
}

/// The owning store: source of the per-cycle input snapshot and sink for
/// fetch results, staged edits, and errors.
pub trait ChannelStore: Send {
    fn snapshot(&self) -> ListInputs;
    fn apply_page(&mut self, page: usize, channels: Vec<Channel>);
    fn apply_search_results(&mut self, channels: Vec<Channel>);
    fn set_search_term(&mut self, term: &str);
    fn set_filters(&mut self, filters: ChannelSearchOpts);
    fn stage_remove(&mut self, channel: Channel);
    fn stage_add(&mut self, channels: Vec<Channel>);
    fn record_error(&mut self, error: &ApiError);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub debounce: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
        }
    }
}

/// Drives a [`ChannelListModel`] against an API and a store.
pub struct ListDriver<A, S> {
    api: A,
    store: S,
    config: DriverConfig,
    model: ChannelListModel,
    /// The one live debounce handle; re-arming replaces it outright.
    pending_search: Option<(DebounceTicket, Instant)>,
}

impl<A: ChannelApi, S: ChannelStore> ListDriver<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self::with_config(api, store, DriverConfig::default())
    }

    pub fn with_config(api: A, store: S, config: DriverConfig) -> Self {
        Self {
            api,
            store,
            config,
            model: ChannelListModel::new(),
            pending_search: None,
        }
    }

    #[must_use]
    pub fn model(&self) -> &ChannelListModel {
        &self.model
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn has_pending_debounce(&self) -> bool {
        self.pending_search.is_some()
    }

    /// Initial load of the first two pages.
    pub async fn start(&mut self) {
        let inputs = self.store.snapshot();
        let command = self.model.init(&inputs);
        self.execute(command).await;
    }

    /// One cycle: reconcile the latest inputs, run what they demand, and
    /// hand back the grid projection (plus any backfill it triggered).
    pub async fn pump(&mut self) -> GridView {
        let inputs = self.store.snapshot();
        let command = self.model.observe_inputs(&inputs);
        self.execute(command).await;

        let inputs = self.store.snapshot();
        let (view, backfill) = self.model.grid_view(&inputs);
        self.execute(backfill).await;
        view
    }

    /// Wait out the debounce pause, then fire the search if the handle is
    /// still current. Callers race this against new input; superseded
    /// handles complete as no-ops.
    pub async fn wait_debounce(&mut self) {
        let Some((ticket, deadline)) = self.pending_search.take() else {
            return;
        };
        sleep_until(deadline).await;
        let inputs = self.store.snapshot();
        let command = self.model.debounce_fired(&inputs, ticket);
        self.execute(command).await;
    }

    /// The operator typed in the search box; the store owns the term.
    pub fn search_input(&mut self, term: &str) {
        self.store.set_search_term(term);
    }

    /// The operator applied the filter dropdown.
    pub fn filter_input(&mut self, selection: &FilterSelection) {
        self.store.set_filters(selection.compose());
    }

    pub async fn next_page(&mut self) {
        let inputs = self.store.snapshot();
        let command = self.model.next_page(&inputs);
        self.execute(command).await;
    }

    pub async fn previous_page(&mut self) {
        let inputs = self.store.snapshot();
        let command = self.model.previous_page(&inputs);
        self.execute(command).await;
    }

    pub async fn remove_channel(&mut self, channel: &Channel) {
        let inputs = self.store.snapshot();
        let command = self.model.remove_channel(&inputs, channel);
        self.execute(command).await;
    }

    pub async fn add_channels(&mut self, channels: Vec<Channel>) {
        let command = self.model.add_channels(channels);
        self.execute(command).await;
    }

    /// Run one command to completion.
    pub async fn execute(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::StageRemove(channel) => self.store.stage_remove(channel),
            Command::StageAdd(channels) => self.store.stage_add(channels),
            Command::ScheduleSearch { ticket } => {
                self.pending_search = Some((ticket, Instant::now() + self.config.debounce));
            }
            Command::LoadPage { page, per_page } => {
                let inputs = self.store.snapshot();
                if let Some(policy_id) = inputs.policy_id {
                    match self.api.get_policy_channels(&policy_id, page, per_page).await {
                        Ok(channels) => self.store.apply_page(page, channels),
                        Err(err) => {
                            warn!(page, error = %err, "policy channel page fetch failed");
                            self.store.record_error(&err);
                        }
                    }
                }
                self.model.command_settled();
            }
            Command::Search { term, opts } => {
                let inputs = self.store.snapshot();
                if let Some(policy_id) = inputs.policy_id {
                    match self.api.search_channels(&policy_id, &term, &opts).await {
                        Ok(channels) => self.store.apply_search_results(channels),
                        Err(err) => {
                            warn!(term = %term, error = %err, "channel search failed");
                            self.store.record_error(&err);
                        }
                    }
                }
                self.model.command_settled();
            }
        }
    }
}
