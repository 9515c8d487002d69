//! Application-wide store lifecycle.
//!
//! Feature stores live for their feature's UI lifetime; the auth store is
//! the one approved session-wide store. [`AppCore`] scopes it explicitly:
//! constructed at application start, passed by reference to whatever
//! consumes it, closed at application exit. Never an ambient global.

use std::sync::Arc;

use crate::auth::{auth_store, AuthEvent, AuthRepository, AuthState, SessionStorage};
use crate::store::Store;

pub struct AppCore {
    auth: Store<AuthState, AuthEvent>,
}

impl AppCore {
    /// Build the long-lived stores and probe the persisted session.
    ///
    /// The auth store starts at `Unauthenticated`; the `CheckRequested`
    /// probe promotes it to `Authenticated` if a valid session was
    /// persisted by a previous run.
    pub fn start(repository: Arc<dyn AuthRepository>, storage: Arc<dyn SessionStorage>) -> Self {
        let auth = auth_store("auth", repository, storage);
        auth.dispatch(AuthEvent::CheckRequested);
        Self { auth }
    }

    pub fn auth(&self) -> &Store<AuthState, AuthEvent> {
        &self.auth
    }

    /// Tear down the long-lived stores. Idempotent.
    pub fn shutdown(&self) {
        self.auth.close();
    }
}
