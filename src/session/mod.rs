//! Per-user conversation session state.
//!
//! Sessions are ephemeral by design: they live in an in-memory store and are
//! lost on restart. At most one Degree or one Tonality is pinned at a time,
//! and the pin lives inside the state enum so an invalid pin is not
//! representable.

mod state;
mod store;

pub use state::{FlowState, StateKind, UserSession};
pub use store::{InMemorySessionStore, SessionStore, StoreError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the user (chat) a session belongs to, as assigned by the
/// messaging platform.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
