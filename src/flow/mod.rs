//! The conversation flow machine.
//!
//! An explicit finite-state machine: an enum of states ([`crate::session::FlowState`]),
//! an enum of events, and an enumerable rule table matched by
//! (state kind, event kind) with first-match-wins ordering. The machine is
//! pure apart from the injected RNG, so every legal transition is testable
//! without the platform dispatch loop.

mod event;
mod machine;
mod outcome;

pub use event::{Event, EventKind};
pub use machine::{FlowMachine, Rule};
pub use outcome::StepOutcome;
