//! Shared application state behind the IPC commands.
//!
//! Wrapped in `Arc` at startup and managed by Tauri. Holds the session
//! repository and the backend URL table; a fresh token-bearing client is
//! built per operation from whatever session is currently stored, so a
//! login or logout is picked up by the next call without coordination.

use crate::api::HttpApiClient;
use crate::config::Endpoints;
use crate::session::SessionStore;

pub struct CoreState {
    session_store: SessionStore,
    endpoints: Endpoints,
}

impl CoreState {
    /// State with the default session location and env-derived endpoints.
    pub fn new() -> Self {
        Self {
            session_store: SessionStore::at_default_location(),
            endpoints: Endpoints::from_env(),
        }
    }

    /// State over explicit parts (tests).
    pub fn with_parts(session_store: SessionStore, endpoints: Endpoints) -> Self {
        Self { session_store, endpoints }
    }

    pub fn store(&self) -> &SessionStore {
        &self.session_store
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Client carrying the current session's bearer token, when present.
    pub fn client(&self) -> HttpApiClient {
        HttpApiClient::new(self.session_store.token())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}
