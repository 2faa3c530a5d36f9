//! Result of applying one event to the flow machine.

use crate::dispatch::Reply;
use crate::session::FlowState;

/// What a rule decided for one event.
///
/// `Stayed` covers both state-preserving commands and invalid-input
/// re-prompts; `Ignored` means no rule applied and the platform sends
/// nothing.
#[derive(Clone, PartialEq, Debug)]
pub enum StepOutcome {
    /// Move to a new state and send the replies.
    Transitioned { to: FlowState, replies: Vec<Reply> },

    /// Keep the current state and send the replies.
    Stayed { replies: Vec<Reply> },

    /// No applicable rule; nothing to send.
    Ignored,
}

impl StepOutcome {
    /// The replies to deliver, empty when ignored.
    pub fn replies(&self) -> &[Reply] {
        match self {
            Self::Transitioned { replies, .. } | Self::Stayed { replies } => replies,
            Self::Ignored => &[],
        }
    }

    /// The state the session should hold afterwards.
    pub fn next_state(&self, current: &FlowState) -> FlowState {
        match self {
            Self::Transitioned { to, .. } => to.clone(),
            Self::Stayed { .. } | Self::Ignored => current.clone(),
        }
    }
}
