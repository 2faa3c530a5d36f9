//! Scale-degree labels and their per-mode applicability.
//!
//! The major set is II–VI and the minor set is III–VII; the overlap (III–VI)
//! applies to both modes. A degree supplied to the generator therefore draws
//! tonalities from the union of every mode it applies to.

use super::mode::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A roman-numeral scale-degree label.
///
/// # Example
///
/// ```rust
/// use cadenza::theory::{Degree, Mode};
///
/// let d = Degree::parse(" v ").unwrap();
/// assert_eq!(d, Degree::V);
/// assert!(d.applies_to(Mode::Major));
/// assert!(d.applies_to(Mode::Minor));
///
/// assert!(Degree::parse("IX").is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Degree {
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

/// Degrees applicable in major keys.
pub const MAJOR_DEGREES: [Degree; 5] = [Degree::II, Degree::III, Degree::IV, Degree::V, Degree::VI];

/// Degrees applicable in minor keys.
pub const MINOR_DEGREES: [Degree; 5] = [
    Degree::III,
    Degree::IV,
    Degree::V,
    Degree::VI,
    Degree::VII,
];

impl Degree {
    /// Every degree label, in ascending order.
    pub const ALL: [Degree; 6] = [
        Degree::II,
        Degree::III,
        Degree::IV,
        Degree::V,
        Degree::VI,
        Degree::VII,
    ];

    /// Parse a degree from user text. Input is trimmed and upper-cased,
    /// matching the original free-text entry behavior.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_uppercase().as_str() {
            "II" => Some(Self::II),
            "III" => Some(Self::III),
            "IV" => Some(Self::IV),
            "V" => Some(Self::V),
            "VI" => Some(Self::VI),
            "VII" => Some(Self::VII),
            _ => None,
        }
    }

    /// The roman-numeral label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
            Self::VI => "VI",
            Self::VII => "VII",
        }
    }

    /// The mode(s) this degree applies to.
    pub fn modes(&self) -> &'static [Mode] {
        match self {
            Self::II => &[Mode::Major],
            Self::VII => &[Mode::Minor],
            _ => &[Mode::Major, Mode::Minor],
        }
    }

    /// Whether this degree is valid in the given mode.
    pub fn applies_to(&self, mode: Mode) -> bool {
        self.modes().contains(&mode)
    }
}

impl Mode {
    /// The degree set for this mode.
    pub fn degrees(&self) -> &'static [Degree] {
        match self {
            Mode::Major => &MAJOR_DEGREES,
            Mode::Minor => &MINOR_DEGREES,
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
