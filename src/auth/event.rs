use crate::store::StoreEvent;

/// Auth intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    LoginRequested {
        email: String,
        password: String,
    },
    RegisterRequested {
        email: String,
        password: String,
        name: String,
    },
    LogoutRequested,
    /// Probe the persisted session, typically dispatched at startup.
    CheckRequested,
}

impl AuthEvent {
    pub const TAGS: &'static [&'static str] = &[
        "auth.login",
        "auth.register",
        "auth.logout",
        "auth.check",
    ];
}

impl StoreEvent for AuthEvent {
    fn tag(&self) -> &'static str {
        match self {
            AuthEvent::LoginRequested { .. } => "auth.login",
            AuthEvent::RegisterRequested { .. } => "auth.register",
            AuthEvent::LogoutRequested => "auth.logout",
            AuthEvent::CheckRequested => "auth.check",
        }
    }
}
