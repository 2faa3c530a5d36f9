//! Outbound reply shapes handed to the platform collaborator.

use crate::theory::{Degree, Tonality};
use serde::{Deserialize, Serialize};

/// One outgoing message: text plus an optional button grid.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// Grid of selectable buttons attached to a reply.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

/// A single button: visible label plus the callback payload the platform
/// echoes back when the button is pressed.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub payload: String,
}

impl Keyboard {
    /// All degree labels, payloads `degree_<label>`.
    pub fn degrees() -> Self {
        Self::grid(
            Degree::ALL
                .iter()
                .map(|d| (d.label().to_string(), format!("degree_{}", d.label()))),
            3,
        )
    }

    /// All tonality names, majors first, payloads `tonality_<name>`.
    pub fn tonalities() -> Self {
        Self::grid(
            Tonality::all().map(|t| (t.name().to_string(), format!("tonality_{}", t.name()))),
            5,
        )
    }

    fn grid(buttons: impl Iterator<Item = (String, String)>, per_row: usize) -> Self {
        let mut rows: Vec<Vec<Button>> = Vec::new();
        for (label, payload) in buttons {
            if rows.last().map_or(true, |row| row.len() >= per_row) {
                rows.push(Vec::new());
            }
            if let Some(row) = rows.last_mut() {
                row.push(Button { label, payload });
            }
        }
        Self { rows }
    }
}
