use serde::{Deserialize, Serialize};

/// Authenticated user snapshot.
///
/// Serialized to JSON when mirrored into persisted storage, so the shape
/// must stay stable across versions of the persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// What a successful login or register returns: the user plus the token
/// to persist. Held transiently; the store's state only ever carries the
/// user, never the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}
