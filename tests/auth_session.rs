mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{
    assert_no_state, next_state, record_states, test_session, test_user, FailingSessionStorage,
    ScriptedAuthRepository,
};
use flowstore::app::AppCore;
use flowstore::auth::memory::{InMemoryAuthRepository, InMemorySessionStorage};
use flowstore::auth::{auth_store, AuthEvent, AuthState, SessionStorage};
use flowstore::failure::Failure;

#[tokio::test]
async fn empty_email_is_rejected_without_collaborator_call() {
    let repository = Arc::new(ScriptedAuthRepository::succeeding(test_session()));
    let storage = Arc::new(InMemorySessionStorage::new());
    let store = auth_store("auth", repository.clone(), storage);
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::LoginRequested {
        email: "".into(),
        password: "x".into(),
    });

    let state = next_state(&mut states).await;
    match state {
        AuthState::Error { message } => assert!(message.contains("validation"), "{message}"),
        other => panic!("expected Error, got {other:?}"),
    }
    assert_no_state(&mut states).await;
    assert_eq!(repository.login_calls(), 0);
}

#[tokio::test]
async fn short_password_is_rejected_locally() {
    let repository = Arc::new(ScriptedAuthRepository::succeeding(test_session()));
    let storage = Arc::new(InMemorySessionStorage::new());
    let store = auth_store("auth", repository.clone(), storage);
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::LoginRequested {
        email: "ada@example.com".into(),
        password: "short".into(),
    });

    assert!(matches!(
        next_state(&mut states).await,
        AuthState::Error { .. }
    ));
    assert_eq!(repository.login_calls(), 0);
}

#[tokio::test]
async fn successful_login_persists_session_and_authenticates() {
    let repository = Arc::new(ScriptedAuthRepository::succeeding(test_session()));
    let storage = Arc::new(InMemorySessionStorage::new());
    let store = auth_store("auth", repository, storage.clone());
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::LoginRequested {
        email: "ada@example.com".into(),
        password: "enchantress".into(),
    });

    assert_eq!(next_state(&mut states).await, AuthState::Authenticating);
    assert_eq!(
        next_state(&mut states).await,
        AuthState::Authenticated { user: test_user() }
    );
    assert_eq!(storage.persisted_token(), Some("token-1".to_string()));
    let persisted = storage.persisted_user().await.unwrap().unwrap();
    assert_eq!(
        serde_json::from_str::<flowstore::auth::User>(&persisted).unwrap(),
        test_user()
    );
}

#[tokio::test]
async fn rejected_credentials_classify_as_auth_failure() {
    let repository = Arc::new(ScriptedAuthRepository::failing(Failure::Auth(
        "invalid email or password".into(),
    )));
    let storage = Arc::new(InMemorySessionStorage::new());
    let store = auth_store("auth", repository, storage);
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::LoginRequested {
        email: "ada@example.com".into(),
        password: "enchantress".into(),
    });

    assert_eq!(next_state(&mut states).await, AuthState::Authenticating);
    match next_state(&mut states).await {
        AuthState::Error { message } => {
            assert!(message.contains("authentication failed"), "{message}");
        }
        other => panic!("expected Error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_classifies_as_network_failure() {
    let repository = Arc::new(ScriptedAuthRepository::failing(Failure::Network(
        "connection refused".into(),
    )));
    let storage = Arc::new(InMemorySessionStorage::new());
    let store = auth_store("auth", repository, storage);
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::LoginRequested {
        email: "ada@example.com".into(),
        password: "enchantress".into(),
    });

    assert_eq!(next_state(&mut states).await, AuthState::Authenticating);
    match next_state(&mut states).await {
        AuthState::Error { message } => {
            assert!(message.contains("network unavailable"), "{message}");
        }
        other => panic!("expected Error, got {other:?}"),
    }
}

#[tokio::test]
async fn login_then_logout_commits_in_order_even_with_slow_backend() {
    let repository = Arc::new(
        ScriptedAuthRepository::succeeding(test_session()).with_delay(Duration::from_millis(300)),
    );
    let storage = Arc::new(InMemorySessionStorage::new());
    let store = auth_store("auth", repository, storage.clone());
    let (_sub, mut states) = record_states(&store);

    // Same tick: logout queues behind the slow login and runs only after
    // its Authenticated state has committed.
    store.dispatch(AuthEvent::LoginRequested {
        email: "ada@example.com".into(),
        password: "enchantress".into(),
    });
    store.dispatch(AuthEvent::LogoutRequested);

    assert_eq!(next_state(&mut states).await, AuthState::Authenticating);
    assert_eq!(
        next_state(&mut states).await,
        AuthState::Authenticated { user: test_user() }
    );
    assert_eq!(next_state(&mut states).await, AuthState::Unauthenticated);
    assert_eq!(storage.persisted_token(), None);
    assert_eq!(store.current(), AuthState::Unauthenticated);
}

#[tokio::test]
async fn persistence_failure_does_not_downgrade_login() {
    let repository = Arc::new(ScriptedAuthRepository::succeeding(test_session()));
    let store = auth_store("auth", repository, Arc::new(FailingSessionStorage));
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::LoginRequested {
        email: "ada@example.com".into(),
        password: "enchantress".into(),
    });

    assert_eq!(next_state(&mut states).await, AuthState::Authenticating);
    assert_eq!(
        next_state(&mut states).await,
        AuthState::Authenticated { user: test_user() }
    );
}

#[tokio::test]
async fn logout_never_fails_outward() {
    let repository = Arc::new(ScriptedAuthRepository::succeeding(test_session()));
    let store = auth_store("auth", repository, Arc::new(FailingSessionStorage));
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::LoginRequested {
        email: "ada@example.com".into(),
        password: "enchantress".into(),
    });
    store.dispatch(AuthEvent::LogoutRequested);

    assert_eq!(next_state(&mut states).await, AuthState::Authenticating);
    assert_eq!(
        next_state(&mut states).await,
        AuthState::Authenticated { user: test_user() }
    );
    // clear() fails, the transition still lands.
    assert_eq!(next_state(&mut states).await, AuthState::Unauthenticated);
}

#[tokio::test]
async fn check_restores_persisted_session() {
    let repository = Arc::new(ScriptedAuthRepository::succeeding(test_session()));
    let user_json = serde_json::to_string(&test_user()).unwrap();
    let storage =
        Arc::new(InMemorySessionStorage::new().with_persisted_user(&user_json, "token-1"));
    let store = auth_store("auth", repository, storage);
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::CheckRequested);

    assert_eq!(
        next_state(&mut states).await,
        AuthState::Authenticated { user: test_user() }
    );
}

#[tokio::test]
async fn check_without_session_commits_nothing_new() {
    let repository = Arc::new(ScriptedAuthRepository::succeeding(test_session()));
    let storage = Arc::new(InMemorySessionStorage::new());
    let store = auth_store("auth", repository, storage);
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::CheckRequested);

    // Absence of a session is not a failure; the resulting
    // Unauthenticated equals the initial state and is suppressed.
    assert_no_state(&mut states).await;
    assert_eq!(store.current(), AuthState::Unauthenticated);
}

#[tokio::test]
async fn corrupt_snapshot_is_treated_as_absent() {
    let repository = Arc::new(ScriptedAuthRepository::succeeding(test_session()));
    let storage =
        Arc::new(InMemorySessionStorage::new().with_persisted_user("not json", "token-1"));
    let store = auth_store("auth", repository, storage);
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::CheckRequested);

    assert_no_state(&mut states).await;
    assert_eq!(store.current(), AuthState::Unauthenticated);
}

#[tokio::test]
async fn register_success_authenticates_and_persists() {
    let repository = Arc::new(InMemoryAuthRepository::new());
    let storage = Arc::new(InMemorySessionStorage::new());
    let store = auth_store("auth", repository, storage.clone());
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::RegisterRequested {
        email: "grace@example.com".into(),
        password: "hopperhopper".into(),
        name: "Grace".into(),
    });

    assert_eq!(next_state(&mut states).await, AuthState::Authenticating);
    match next_state(&mut states).await {
        AuthState::Authenticated { user } => assert_eq!(user.email, "grace@example.com"),
        other => panic!("expected Authenticated, got {other:?}"),
    }
    assert!(storage.persisted_token().is_some());
}

#[tokio::test]
async fn duplicate_registration_classifies_as_server_failure() {
    let repository = Arc::new(InMemoryAuthRepository::new().with_account(
        "grace@example.com",
        "hopperhopper",
        "Grace",
    ));
    let storage = Arc::new(InMemorySessionStorage::new());
    let store = auth_store("auth", repository, storage);
    let (_sub, mut states) = record_states(&store);

    store.dispatch(AuthEvent::RegisterRequested {
        email: "grace@example.com".into(),
        password: "hopperhopper".into(),
        name: "Grace".into(),
    });

    assert_eq!(next_state(&mut states).await, AuthState::Authenticating);
    match next_state(&mut states).await {
        AuthState::Error { message } => assert!(message.contains("server error"), "{message}"),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[tokio::test]
async fn app_core_probes_persisted_session_at_start() {
    let repository = Arc::new(ScriptedAuthRepository::succeeding(test_session()));
    let user_json = serde_json::to_string(&test_user()).unwrap();
    let storage =
        Arc::new(InMemorySessionStorage::new().with_persisted_user(&user_json, "token-1"));

    let core = AppCore::start(repository, storage);
    let (_sub, mut states) = record_states(core.auth());

    // The startup probe may commit before or after we attach; accept
    // either observation.
    if core.auth().current() != (AuthState::Authenticated { user: test_user() }) {
        assert_eq!(
            next_state(&mut states).await,
            AuthState::Authenticated { user: test_user() }
        );
    }

    core.shutdown();
    core.auth().dispatch(AuthEvent::LogoutRequested);
    assert_no_state(&mut states).await;
}
