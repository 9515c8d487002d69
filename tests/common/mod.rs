//! Shared test utilities and mock collaborators.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use flowstore::auth::{AuthRepository, AuthSession, SessionStorage, User};
use flowstore::dashboard::{DashboardData, DashboardItem, DashboardRepository};
use flowstore::failure::Failure;
use flowstore::store::{Store, StoreEvent, StoreState, Subscription};

/// Subscribe to a store and feed every committed state into a channel.
pub fn record_states<S: StoreState, E: StoreEvent>(
    store: &Store<S, E>,
) -> (Subscription, mpsc::UnboundedReceiver<S>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let subscription = store.subscribe(move |state: &S| {
        let _ = tx.send(state.clone());
    });
    (subscription, rx)
}

/// Next recorded state, failing the test after two seconds.
pub async fn next_state<S: Send>(rx: &mut mpsc::UnboundedReceiver<S>) -> S {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a state")
        .expect("recorder channel closed")
}

/// Assert that no further state arrives within a grace period.
pub async fn assert_no_state<S: Send + std::fmt::Debug>(rx: &mut mpsc::UnboundedReceiver<S>) {
    tokio::time::sleep(Duration::from_millis(100)).await;
    if let Ok(state) = rx.try_recv() {
        panic!("unexpected state: {state:?}");
    }
}

pub fn test_user() -> User {
    User {
        id: "user-1".to_string(),
        email: "ada@example.com".to_string(),
        name: "Ada".to_string(),
    }
}

pub fn test_session() -> AuthSession {
    AuthSession {
        user: test_user(),
        token: "token-1".to_string(),
    }
}

/// Auth repository with a scripted outcome, call counting, and an
/// optional delay to simulate a slow backend.
pub struct ScriptedAuthRepository {
    result: Result<AuthSession, Failure>,
    delay: Duration,
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
}

impl ScriptedAuthRepository {
    pub fn succeeding(session: AuthSession) -> Self {
        Self {
            result: Ok(session),
            delay: Duration::ZERO,
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            result: Err(failure),
            delay: Duration::ZERO,
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthRepository for ScriptedAuthRepository {
    async fn login(&self, _email: &str, _password: &str) -> Result<AuthSession, Failure> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.result.clone()
    }

    async fn register(
        &self,
        _email: &str,
        _password: &str,
        _name: &str,
    ) -> Result<AuthSession, Failure> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.result.clone()
    }
}

/// Session storage whose writes always fail. Reads report no session.
pub struct FailingSessionStorage;

#[async_trait]
impl SessionStorage for FailingSessionStorage {
    async fn save_token(&self, _token: &str) -> Result<(), Failure> {
        Err(Failure::Unexpected("secure storage unavailable".into()))
    }

    async fn save_user(&self, _user_json: &str) -> Result<(), Failure> {
        Err(Failure::Unexpected("secure storage unavailable".into()))
    }

    async fn persisted_user(&self) -> Result<Option<String>, Failure> {
        Ok(None)
    }

    async fn clear(&self) -> Result<(), Failure> {
        Err(Failure::Unexpected("secure storage unavailable".into()))
    }
}

pub fn sample_dashboard_data() -> DashboardData {
    DashboardData {
        items: vec![
            DashboardItem {
                title: "Open orders".to_string(),
                count: 12,
            },
            DashboardItem {
                title: "Messages".to_string(),
                count: 3,
            },
        ],
    }
}

/// Dashboard repository with a scripted outcome.
pub struct ScriptedDashboardRepository {
    result: Result<DashboardData, Failure>,
    fetch_calls: AtomicUsize,
}

impl ScriptedDashboardRepository {
    pub fn succeeding(data: DashboardData) -> Self {
        Self {
            result: Ok(data),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            result: Err(failure),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardRepository for ScriptedDashboardRepository {
    async fn fetch(&self) -> Result<DashboardData, Failure> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
