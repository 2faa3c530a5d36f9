//! Session storage behind a swappable trait.
//!
//! The dispatch boundary only sees [`SessionStore`], so the in-memory map can
//! be replaced by an external store without touching the flow logic. The
//! platform serializes delivery per chat, so a handler invocation is the sole
//! writer of its user's entry; the mutex only coordinates distinct users.

use super::state::UserSession;
use super::UserId;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Errors surfaced by a session store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store lock poisoned")]
    Poisoned,
}

/// Per-user session storage with single-owner-per-session semantics.
pub trait SessionStore: Send + Sync {
    /// Fetch the user's session; absent entries read as a fresh Idle session.
    fn get(&self, user: UserId) -> Result<UserSession, StoreError>;

    /// Store the user's session, replacing any previous entry.
    fn put(&self, user: UserId, session: UserSession) -> Result<(), StoreError>;

    /// Drop the user's session. Clearing an absent entry is a no-op.
    fn clear(&self, user: UserId) -> Result<(), StoreError>;
}

/// Mutex-guarded map implementation, the only one this process needs.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<UserId, UserSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked sessions, for diagnostics.
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, user: UserId) -> Result<UserSession, StoreError> {
        let sessions = self.sessions.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(sessions.get(&user).cloned().unwrap_or_default())
    }

    fn put(&self, user: UserId, session: UserSession) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().map_err(|_| StoreError::Poisoned)?;
        sessions.insert(user, session);
        Ok(())
    }

    fn clear(&self, user: UserId) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().map_err(|_| StoreError::Poisoned)?;
        sessions.remove(&user);
        Ok(())
    }
}
