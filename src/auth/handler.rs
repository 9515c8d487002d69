use std::sync::Arc;

use async_trait::async_trait;

use crate::store::{Emitter, EventHandler};

use super::credentials;
use super::repository::{AuthRepository, SessionStorage};
use super::session::AuthSession;
use super::{AuthEvent, AuthState};

/// Handler set for the auth session lifecycle.
///
/// Login and register share a shape: validate locally, emit
/// `Authenticating`, call the repository, persist best-effort, emit the
/// outcome. Logout and session-check never emit `Error` — absence of a
/// session is not a failure, and losing a best-effort storage write must
/// not block the user-visible transition.
pub struct AuthHandler {
    repository: Arc<dyn AuthRepository>,
    storage: Arc<dyn SessionStorage>,
}

impl AuthHandler {
    pub fn new(repository: Arc<dyn AuthRepository>, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    async fn login(&self, email: String, password: String, emit: &Emitter<AuthState>) {
        if let Err(failure) = credentials::validate(&email, &password) {
            emit.emit(AuthState::Error {
                message: failure.to_string(),
            });
            return;
        }
        emit.emit(AuthState::Authenticating);
        match self.repository.login(&email, &password).await {
            Ok(session) => {
                self.persist(&session).await;
                emit.emit(AuthState::Authenticated { user: session.user });
            }
            Err(failure) => {
                tracing::warn!(%failure, "login failed");
                emit.emit(AuthState::Error {
                    message: failure.to_string(),
                });
            }
        }
    }

    async fn register(
        &self,
        email: String,
        password: String,
        name: String,
        emit: &Emitter<AuthState>,
    ) {
        if let Err(failure) = credentials::validate(&email, &password) {
            emit.emit(AuthState::Error {
                message: failure.to_string(),
            });
            return;
        }
        emit.emit(AuthState::Authenticating);
        match self.repository.register(&email, &password, &name).await {
            Ok(session) => {
                self.persist(&session).await;
                emit.emit(AuthState::Authenticated { user: session.user });
            }
            Err(failure) => {
                tracing::warn!(%failure, "registration failed");
                emit.emit(AuthState::Error {
                    message: failure.to_string(),
                });
            }
        }
    }

    async fn logout(&self, emit: &Emitter<AuthState>) {
        // Best-effort: logout never fails outward.
        if let Err(failure) = self.storage.clear().await {
            tracing::warn!(%failure, "failed to clear persisted session");
        }
        emit.emit(AuthState::Unauthenticated);
    }

    async fn check(&self, emit: &Emitter<AuthState>) {
        match self.storage.persisted_user().await {
            Ok(Some(user_json)) => match serde_json::from_str(&user_json) {
                Ok(user) => emit.emit(AuthState::Authenticated { user }),
                Err(err) => {
                    tracing::warn!(error = %err, "persisted user snapshot unreadable");
                    emit.emit(AuthState::Unauthenticated);
                }
            },
            Ok(None) => emit.emit(AuthState::Unauthenticated),
            Err(failure) => {
                tracing::warn!(%failure, "session storage unavailable during check");
                emit.emit(AuthState::Unauthenticated);
            }
        }
    }

    /// Mirror the session into persisted storage. Failures are logged and
    /// swallowed; a successful login is never downgraded to an error.
    async fn persist(&self, session: &AuthSession) {
        if let Err(failure) = self.storage.save_token(&session.token).await {
            tracing::warn!(%failure, "failed to persist session token");
        }
        match serde_json::to_string(&session.user) {
            Ok(user_json) => {
                if let Err(failure) = self.storage.save_user(&user_json).await {
                    tracing::warn!(%failure, "failed to persist user snapshot");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode user snapshot");
            }
        }
    }
}

#[async_trait]
impl EventHandler<AuthState, AuthEvent> for AuthHandler {
    fn tags(&self) -> &'static [&'static str] {
        AuthEvent::TAGS
    }

    async fn handle(&self, _state: AuthState, event: AuthEvent, emit: &Emitter<AuthState>) {
        match event {
            AuthEvent::LoginRequested { email, password } => {
                self.login(email, password, emit).await;
            }
            AuthEvent::RegisterRequested {
                email,
                password,
                name,
            } => {
                self.register(email, password, name, emit).await;
            }
            AuthEvent::LogoutRequested => self.logout(emit).await,
            AuthEvent::CheckRequested => self.check(emit).await,
        }
    }
}
