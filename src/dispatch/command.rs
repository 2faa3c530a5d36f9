//! Inbound interactions as delivered by the platform collaborator.

use crate::flow::Event;
use crate::theory::{Degree, Tonality};

/// Raw inbound item: a named command, free message text, or a button
/// callback payload. The platform tags each with the originating user.
#[derive(Clone, PartialEq, Debug)]
pub enum Inbound {
    /// Command name without the leading slash, e.g. `select_step`.
    Command(String),
    /// Free message text.
    Text(String),
    /// Callback payload, e.g. `degree_V` or `tonality_C-dur`.
    Callback(String),
}

impl Inbound {
    /// Parse into a flow event. Unknown commands and malformed callback
    /// payloads yield `None` and are dropped by the boundary.
    pub fn event(&self) -> Option<Event> {
        match self {
            Self::Command(name) => match name.as_str() {
                "start" => Some(Event::Start),
                "modulate" => Some(Event::Modulate),
                "select_step" => Some(Event::SelectStep),
                "select_tonality" => Some(Event::SelectTonality),
                "next" => Some(Event::Next),
                "next_tonality" => Some(Event::NextTonality),
                "cancel" => Some(Event::Cancel),
                _ => None,
            },
            Self::Text(text) => Some(Event::Text(text.clone())),
            Self::Callback(payload) => {
                if let Some(value) = payload.strip_prefix("degree_") {
                    Degree::parse(value).map(Event::PickDegree)
                } else if let Some(value) = payload.strip_prefix("tonality_") {
                    Tonality::parse(value).map(Event::PickTonality)
                } else {
                    None
                }
            }
        }
    }
}
