//! flowstore: a unidirectional reactive state-management core.
//!
//! Every feature owns a [`store::Store`]: events go in, an async handler
//! runs per event (strictly one at a time, in arrival order), and
//! immutable states come out to subscribers. The crate ships the generic
//! engine plus the three policies that exercise its hardest edges:
//! bounded-counter arithmetic, the auth session lifecycle, and
//! dashboard tab/payload orthogonality.

pub mod app;
pub mod auth;
pub mod config;
pub mod counter;
pub mod dashboard;
pub mod failure;
pub mod logging;
pub mod store;
