//! Shared UI helpers.

pub(crate) mod theme;
