//! In-memory collaborator implementations.
//!
//! Back the demo binary and double as test fixtures; production deployments
//! substitute an HTTP repository and on-device secure storage behind the
//! same traits.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::failure::Failure;

use super::repository::{AuthRepository, SessionStorage};
use super::session::{AuthSession, User};

struct Account {
    user: User,
    password: String,
}

/// Seeded user table. Wrong credentials classify as `Auth`, duplicate
/// registration as `Server`, matching what a real backend would return.
#[derive(Default)]
pub struct InMemoryAuthRepository {
    accounts: Mutex<HashMap<String, Account>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account, returning the repository for chaining.
    pub fn with_account(self, email: &str, password: &str, name: &str) -> Self {
        self.accounts.lock().insert(
            email.to_string(),
            Account {
                user: User {
                    id: Uuid::new_v4().to_string(),
                    email: email.to_string(),
                    name: name.to_string(),
                },
                password: password.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl AuthRepository for InMemoryAuthRepository {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, Failure> {
        let accounts = self.accounts.lock();
        let account = accounts
            .get(email)
            .filter(|account| account.password == password)
            .ok_or_else(|| Failure::Auth("invalid email or password".into()))?;
        Ok(AuthSession {
            user: account.user.clone(),
            token: Uuid::new_v4().to_string(),
        })
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthSession, Failure> {
        let mut accounts = self.accounts.lock();
        if accounts.contains_key(email) {
            return Err(Failure::Server(format!(
                "account '{email}' already exists"
            )));
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
        };
        accounts.insert(
            email.to_string(),
            Account {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        Ok(AuthSession {
            user,
            token: Uuid::new_v4().to_string(),
        })
    }
}

#[derive(Default)]
struct StoredSession {
    token: Option<String>,
    user_json: Option<String>,
}

/// Single-cell session mirror.
#[derive(Default)]
pub struct InMemorySessionStorage {
    session: Mutex<StoredSession>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a persisted session, as if a previous run logged in.
    pub fn with_persisted_user(self, user_json: &str, token: &str) -> Self {
        {
            let mut session = self.session.lock();
            session.token = Some(token.to_string());
            session.user_json = Some(user_json.to_string());
        }
        self
    }

    pub fn persisted_token(&self) -> Option<String> {
        self.session.lock().token.clone()
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn save_token(&self, token: &str) -> Result<(), Failure> {
        self.session.lock().token = Some(token.to_string());
        Ok(())
    }

    async fn save_user(&self, user_json: &str) -> Result<(), Failure> {
        self.session.lock().user_json = Some(user_json.to_string());
        Ok(())
    }

    async fn persisted_user(&self) -> Result<Option<String>, Failure> {
        Ok(self.session.lock().user_json.clone())
    }

    async fn clear(&self) -> Result<(), Failure> {
        *self.session.lock() = StoredSession::default();
        Ok(())
    }
}
