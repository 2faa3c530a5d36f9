//! Conversation flow states and the per-user session record.

use crate::theory::{Degree, Tonality};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of one user in the conversation flow.
///
/// The legal moves are:
/// `Idle → AwaitingDegree → DegreePinned` and symmetrically
/// `Idle → AwaitingTonality → TonalityPinned`, with `cancel` returning to
/// `Idle` from anywhere. A pinned value is always one that passed parsing,
/// since the variants only carry validated theory types.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum FlowState {
    #[default]
    Idle,
    AwaitingDegree,
    AwaitingTonality,
    DegreePinned(Degree),
    TonalityPinned(Tonality),
}

/// Discriminant of [`FlowState`], used to match rules without comparing
/// pinned payloads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StateKind {
    Idle,
    AwaitingDegree,
    AwaitingTonality,
    DegreePinned,
    TonalityPinned,
}

impl FlowState {
    /// State name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingDegree => "AwaitingDegree",
            Self::AwaitingTonality => "AwaitingTonality",
            Self::DegreePinned(_) => "DegreePinned",
            Self::TonalityPinned(_) => "TonalityPinned",
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            Self::Idle => StateKind::Idle,
            Self::AwaitingDegree => StateKind::AwaitingDegree,
            Self::AwaitingTonality => StateKind::AwaitingTonality,
            Self::DegreePinned(_) => StateKind::DegreePinned,
            Self::TonalityPinned(_) => StateKind::TonalityPinned,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The pinned degree, if the flow holds one.
    pub fn pinned_degree(&self) -> Option<Degree> {
        match self {
            Self::DegreePinned(degree) => Some(*degree),
            _ => None,
        }
    }

    /// The pinned tonality, if the flow holds one.
    pub fn pinned_tonality(&self) -> Option<Tonality> {
        match self {
            Self::TonalityPinned(tonality) => Some(*tonality),
            _ => None,
        }
    }
}

/// One user's conversation session.
///
/// Timestamps track when the session was first created and last touched;
/// they exist for logging and diagnostics only, there is no expiry.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserSession {
    pub state: FlowState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSession {
    /// A fresh Idle session.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            state: FlowState::Idle,
            created_at: now,
            updated_at: now,
        }
    }

    /// Return a copy advanced to `state`, refreshing the update timestamp.
    pub fn advanced_to(&self, state: FlowState) -> Self {
        Self {
            state,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}

impl Default for UserSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert!(FlowState::default().is_idle());
        assert!(UserSession::new().state.is_idle());
    }

    #[test]
    fn state_names_cover_every_variant() {
        let pinned = FlowState::DegreePinned(Degree::V);
        assert_eq!(pinned.name(), "DegreePinned");
        assert_eq!(FlowState::AwaitingTonality.name(), "AwaitingTonality");
    }

    #[test]
    fn pin_accessors_are_mutually_exclusive() {
        let degree_pin = FlowState::DegreePinned(Degree::V);
        assert_eq!(degree_pin.pinned_degree(), Some(Degree::V));
        assert_eq!(degree_pin.pinned_tonality(), None);

        let tonality = Tonality::parse("C-dur").unwrap();
        let tonality_pin = FlowState::TonalityPinned(tonality);
        assert_eq!(tonality_pin.pinned_tonality(), Some(tonality));
        assert_eq!(tonality_pin.pinned_degree(), None);

        assert_eq!(FlowState::Idle.pinned_degree(), None);
        assert_eq!(FlowState::Idle.pinned_tonality(), None);
    }

    #[test]
    fn advancing_keeps_creation_time() {
        let session = UserSession::new();
        let advanced = session.advanced_to(FlowState::AwaitingDegree);
        assert_eq!(advanced.created_at, session.created_at);
        assert_eq!(advanced.state, FlowState::AwaitingDegree);
        assert!(advanced.updated_at >= session.updated_at);
    }

    #[test]
    fn session_serializes_with_pinned_state() {
        let session = UserSession::new().advanced_to(FlowState::DegreePinned(Degree::III));
        let json = serde_json::to_string(&session).unwrap();
        let back: UserSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.state, session.state);
    }
}
