//! Musical mode classification.

use serde::{Deserialize, Serialize};

/// The two modes every tonality and degree is classified under.
///
/// # Example
///
/// ```rust
/// use cadenza::theory::Mode;
///
/// assert_eq!(Mode::Major.name(), "major");
/// assert_eq!(Mode::ALL.len(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Both modes, in display order.
    pub const ALL: [Mode; 2] = [Mode::Major, Mode::Minor];

    /// Lowercase mode name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
        }
    }
}
