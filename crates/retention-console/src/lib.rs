//! retention-console: headless state engine for the retention-policy
//! channel list in the admin console.
//!
//! The list pages and filters an authoritative channel set held by a remote
//! API, merges it with staged add/remove edits, debounces search input, and
//! projects rows/columns for a generic data grid. State transitions are
//! pure functions returning [`channel_list::Command`] values; the async
//! [`driver`] executes them.

pub mod channel_list;
pub mod debounce;
pub mod driver;
pub mod filter_panel;
pub mod grid;
pub mod overlay;
pub mod pagination;

pub use channel_list::{ChannelListModel, Command, ListInputs, SEARCH_DEBOUNCE_MS};
pub use driver::{ChannelApi, ChannelStore, DriverConfig, ListDriver};
pub use filter_panel::FilterSelection;
pub use grid::GridView;
pub use pagination::{PageWindow, PAGE_SIZE};
