//! Interactive profile selector.

mod app;
mod features;
mod state;
mod ui;

pub(crate) use state::{AppState, ConnectRequest, SelectorMode};

pub use app::run_selector;
