//! TUI state model.

mod app_state;

pub(crate) use app_state::{AppState, ConnectRequest, SelectorMode};
