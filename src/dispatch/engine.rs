//! The imperative shell around the flow machine.
//!
//! `dispatch` wraps one read-apply-write round against the session store in
//! an effect over [`BotEnv`]; [`Dispatcher::handle`] is the outermost
//! boundary that logs faults, answers with a generic apology, and resets the
//! session to Idle so no flow is left in an undefined state.

use super::command::Inbound;
use super::reply::Reply;
use super::text;
use crate::flow::{Event, FlowMachine, StepOutcome};
use crate::session::{InMemorySessionStore, SessionStore, StoreError, UserId};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use tracing::{debug, error};

/// Errors crossing the dispatch boundary. Invalid user input is not an
/// error; it is answered by the flow with a re-prompt.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("session store failure: {0}")]
    Store(#[from] StoreError),
}

/// Environment the dispatch effect runs against: the rule table plus the
/// session store.
#[derive(Clone)]
pub struct BotEnv {
    machine: Arc<FlowMachine>,
    sessions: Arc<dyn SessionStore>,
}

impl BotEnv {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            machine: Arc::new(FlowMachine::standard()),
            sessions,
        }
    }

    /// Environment over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySessionStore::new()))
    }

    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    pub fn machine(&self) -> &FlowMachine {
        &self.machine
    }
}

/// One dispatch round as an effect: load the session, apply the machine,
/// store the resulting state, return the replies to deliver.
pub fn dispatch(user: UserId, event: Event) -> BoxedEffect<Vec<Reply>, DispatchError, BotEnv> {
    from_fn(move |env: &BotEnv| {
        let session = env.sessions().get(user)?;
        let outcome = env
            .machine()
            .apply(&session.state, &event, &mut rand::thread_rng());
        let next = outcome.next_state(&session.state);
        debug!(
            %user,
            from = session.state.name(),
            to = next.name(),
            event = ?event.kind(),
            "flow step"
        );
        // Ignored events leave no trace; everything else refreshes the entry.
        if !matches!(outcome, StepOutcome::Ignored) {
            env.sessions().put(user, session.advanced_to(next))?;
        }
        Ok(outcome.replies().to_vec())
    })
    .boxed()
}

/// Outermost handler boundary. Never fails: faults are logged and converted
/// into the generic apology while the session falls back to Idle.
pub struct Dispatcher {
    env: BotEnv,
}

impl Dispatcher {
    pub fn new(env: BotEnv) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &BotEnv {
        &self.env
    }

    pub async fn handle(&self, user: UserId, inbound: &Inbound) -> Vec<Reply> {
        let Some(event) = inbound.event() else {
            debug!(%user, input = ?inbound, "unrecognized input dropped");
            return Vec::new();
        };
        match dispatch(user, event).run(&self.env).await {
            Ok(replies) => replies,
            Err(err) => {
                error!(%user, error = %err, "dispatch failed, resetting session");
                if let Err(clear_err) = self.env.sessions().clear(user) {
                    error!(%user, error = %clear_err, "session reset failed");
                }
                vec![Reply::text(text::GENERIC_FAILURE)]
            }
        }
    }
}
