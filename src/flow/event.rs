//! Events the flow machine reacts to.

use crate::theory::{Degree, Tonality};

/// A parsed inbound interaction.
///
/// Commands carry no payload; free text arrives as [`Event::Text`] and is
/// validated by the rule that consumes it; button callbacks arrive already
/// validated, carrying the chosen value.
#[derive(Clone, PartialEq, Debug)]
pub enum Event {
    Start,
    Modulate,
    SelectStep,
    SelectTonality,
    Next,
    NextTonality,
    Cancel,
    Text(String),
    PickDegree(Degree),
    PickTonality(Tonality),
}

/// Discriminant of [`Event`] for rule matching.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventKind {
    Start,
    Modulate,
    SelectStep,
    SelectTonality,
    Next,
    NextTonality,
    Cancel,
    Text,
    PickDegree,
    PickTonality,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Start => EventKind::Start,
            Self::Modulate => EventKind::Modulate,
            Self::SelectStep => EventKind::SelectStep,
            Self::SelectTonality => EventKind::SelectTonality,
            Self::Next => EventKind::Next,
            Self::NextTonality => EventKind::NextTonality,
            Self::Cancel => EventKind::Cancel,
            Self::Text(_) => EventKind::Text,
            Self::PickDegree(_) => EventKind::PickDegree,
            Self::PickTonality(_) => EventKind::PickTonality,
        }
    }
}
