//! Collaborator contracts for the auth feature.
//!
//! Implemented outside this core (HTTP client, on-device secure storage);
//! the in-memory versions in [`super::memory`] back the demo binary and
//! tests.

use async_trait::async_trait;

use crate::failure::Failure;

use super::session::AuthSession;

/// Remote authentication backend.
///
/// Implementations classify their own errors into the [`Failure`]
/// taxonomy: unreachable backend → `Network`, application-level error →
/// `Server`, rejected credentials or malformed success payload → `Auth`,
/// anything else → `Unexpected`.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, Failure>;

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthSession, Failure>;
}

/// Persisted session mirror.
///
/// Every call is best-effort from the caller's point of view: the auth
/// handlers log storage failures and carry on, so an implementation should
/// report failures honestly rather than hide them.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn save_token(&self, token: &str) -> Result<(), Failure>;

    /// Persist the user snapshot as JSON.
    async fn save_user(&self, user_json: &str) -> Result<(), Failure>;

    /// The persisted user snapshot, if a session exists.
    async fn persisted_user(&self) -> Result<Option<String>, Failure>;

    /// Drop the persisted token and snapshot.
    async fn clear(&self) -> Result<(), Failure>;
}
