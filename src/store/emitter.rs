//! State emission handle passed to event handlers.

use std::sync::Arc;

use super::handler::StoreState;
use super::StoreInner;

/// Commits states produced by a handler.
///
/// A handler may emit any number of states per event (an interim
/// `Authenticating` followed by `Authenticated`, for example); each commit
/// is delivered to subscribers before the handler resumes.
pub struct Emitter<S: StoreState> {
    inner: Arc<StoreInner<S>>,
}

impl<S: StoreState> Emitter<S> {
    pub(crate) fn new(inner: Arc<StoreInner<S>>) -> Self {
        Self { inner }
    }

    /// Commit `next` as the store's current state.
    ///
    /// Transitions equal to the current state are suppressed, so
    /// subscribers see each distinct state exactly once. Emissions into a
    /// closed store are dropped; a collaborator result that resolves after
    /// `close()` never reaches subscribers.
    pub fn emit(&self, next: S) {
        self.inner.commit(next);
    }

    /// Cooperative cancellation check for handlers that do extra work
    /// between await points.
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_closed()
    }
}
