//! Feature-sliced TUI behavior.

pub(crate) mod profile_list;
