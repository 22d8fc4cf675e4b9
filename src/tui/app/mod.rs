//! Selector lifecycle: terminal setup, event loop, and client handoff.

mod events;
mod run;

pub use run::run_selector;
