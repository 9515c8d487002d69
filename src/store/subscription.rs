//! Subscriber-side handle for a store registration.

/// Handle returned by `Store::subscribe`.
///
/// The store owns its subscriber list; this handle is the subscriber's
/// responsibility to release. Dropping it (or calling [`cancel`]) removes
/// the callback from the store.
///
/// [`cancel`]: Subscription::cancel
pub struct Subscription {
    remove: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub(crate) fn new(remove: impl FnOnce() + Send + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }

    /// Remove the callback now instead of at drop.
    pub fn cancel(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}
