use crate::store::StoreState;

use super::session::User;

/// Auth session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    /// A login or register call is in flight.
    Authenticating,
    Authenticated {
        user: User,
    },
    Error {
        message: String,
    },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }
}

impl StoreState for AuthState {}
