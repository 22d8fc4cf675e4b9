//! Core selector state and transitions.

use crate::config::{ClientKind, ConnectionProfile, ProfileStore};
use crate::process::ClientError;
use crate::{log_debug, log_warn};

/// Where the selector is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorMode {
    /// Rendering the list and reacting to keys.
    Browsing,
    /// A client was requested or is running and owns the terminal.
    RunningClient,
}

/// Launch request emitted by confirming a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConnectRequest {
    pub(crate) client: ClientKind,
    pub(crate) profile_index: usize,
}

/// Main application state.
pub struct AppState {
    pub(crate) store: ProfileStore,
    pub(crate) cursor: usize,
    pub(crate) last_error: Option<ClientError>,
    pub(crate) should_exit: bool,
    pub(crate) pending_connect: Option<ConnectRequest>,
    mode: SelectorMode,
}

impl AppState {
    pub fn new(store: ProfileStore) -> Self {
        Self {
            store,
            cursor: 0,
            last_error: None,
            should_exit: false,
            pending_connect: None,
            mode: SelectorMode::Browsing,
        }
    }

    pub(crate) fn mode(&self) -> SelectorMode {
        self.mode
    }

    pub(crate) fn selected_profile(&self) -> &ConnectionProfile {
        &self.store.profiles()[self.cursor]
    }

    // Browsing transitions.
    pub(crate) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        if self.cursor < self.store.last_index() {
            self.cursor += 1;
        }
    }

    pub(crate) fn confirm_selection(&mut self) {
        if self.mode != SelectorMode::Browsing {
            return;
        }

        self.last_error = None;
        let request = ConnectRequest {
            client: self.store.client(),
            profile_index: self.cursor,
        };
        log_debug!("Selected {} via {}", self.selected_profile().display_name(), request.client);
        self.pending_connect = Some(request);
        self.mode = SelectorMode::RunningClient;
    }

    pub(crate) fn request_exit(&mut self) {
        self.should_exit = true;
    }

    // Handoff transitions.
    pub(crate) fn take_connect_request(&mut self) -> Option<ConnectRequest> {
        self.pending_connect.take()
    }

    /// Return to browsing after the client exits.
    ///
    /// A successful run leaves `last_error` as it is; only a new confirm clears it.
    pub(crate) fn finish_client(&mut self, result: Result<(), ClientError>) {
        if self.mode != SelectorMode::RunningClient {
            log_warn!("Ignoring client completion while not running a client");
            return;
        }

        self.pending_connect = None;
        self.mode = SelectorMode::Browsing;
        if let Err(err) = result {
            log_debug!("Client failed: {}", err);
            self.last_error = Some(err);
        }
    }
}

#[cfg(test)]
#[path = "../../test/tui/state/app_state.rs"]
mod tests;
