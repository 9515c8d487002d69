//! Authentication session feature.
//!
//! Login, register, logout, and persisted-session probing against injected
//! collaborators ([`AuthRepository`], [`SessionStorage`]). The session
//! lifecycle:
//!
//! ```text
//! Unauthenticated ──login/register──→ Authenticating ──→ Authenticated
//!        ↑                                   │              │
//!        │                                   └──→ Error     │
//!        └───────────────── logout ─────────────────────────┘
//! ```
//!
//! All session-mutating handlers go through the same storage collaborator;
//! the store's FIFO discipline means no two of them ever run concurrently
//! within one store instance.

mod credentials;
mod event;
mod handler;
pub mod memory;
mod repository;
mod session;
mod state;

pub use event::AuthEvent;
pub use handler::AuthHandler;
pub use repository::{AuthRepository, SessionStorage};
pub use session::{AuthSession, User};
pub use state::AuthState;

use std::sync::Arc;

use crate::store::{HandlerRegistry, Store};

/// Build an auth store wired to the given collaborators, starting at
/// [`AuthState::Unauthenticated`].
pub fn auth_store(
    name: &'static str,
    repository: Arc<dyn AuthRepository>,
    storage: Arc<dyn SessionStorage>,
) -> Store<AuthState, AuthEvent> {
    let registry = HandlerRegistry::new().register(AuthHandler::new(repository, storage));
    Store::create(name, AuthState::Unauthenticated, registry)
}
