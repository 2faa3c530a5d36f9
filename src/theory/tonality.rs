//! Fixed tonality tables and the validated `Tonality` type.
//!
//! The tables are immutable for the process lifetime. A `Tonality` can only
//! be obtained through [`Tonality::parse`] or the tables themselves, so a
//! constructed value is always a member of exactly one mode's table.

use super::mode::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A musical key name classified as major or minor.
///
/// Serializes as its display name (e.g. `"C-dur"`) and deserializes back
/// through table lookup, so an invalid name never round-trips.
///
/// # Example
///
/// ```rust
/// use cadenza::theory::{Mode, Tonality};
///
/// let t = Tonality::parse("C-dur").unwrap();
/// assert_eq!(t.mode(), Mode::Major);
/// assert_eq!(t.to_string(), "C-dur");
///
/// assert!(Tonality::parse("Z-dur").is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tonality {
    #[serde(skip)]
    name: &'static str,
    mode: Mode,
}

/// All major tonalities, in display order.
pub const MAJOR_TONALITIES: [Tonality; 15] = [
    Tonality::major("C-dur"),
    Tonality::major("F-dur"),
    Tonality::major("D-dur"),
    Tonality::major("B-dur"),
    Tonality::major("A-dur"),
    Tonality::major("Es-dur"),
    Tonality::major("E-dur"),
    Tonality::major("As-dur"),
    Tonality::major("H-dur"),
    Tonality::major("Des-dur"),
    Tonality::major("Fis-dur"),
    Tonality::major("Ges-dur"),
    Tonality::major("Cis-dur"),
    Tonality::major("Ces-dur"),
    Tonality::major("G-dur"),
];

/// All minor tonalities, in display order.
pub const MINOR_TONALITIES: [Tonality; 15] = [
    Tonality::minor("a-moll"),
    Tonality::minor("g-moll"),
    Tonality::minor("h-moll"),
    Tonality::minor("c-moll"),
    Tonality::minor("fis-moll"),
    Tonality::minor("f-moll"),
    Tonality::minor("cis-moll"),
    Tonality::minor("b-moll"),
    Tonality::minor("gis-moll"),
    Tonality::minor("es-moll"),
    Tonality::minor("dis-moll"),
    Tonality::minor("as-moll"),
    Tonality::minor("ais-moll"),
    Tonality::minor("e-moll"),
    Tonality::minor("d-moll"),
];

impl Tonality {
    const fn major(name: &'static str) -> Self {
        Self {
            name,
            mode: Mode::Major,
        }
    }

    const fn minor(name: &'static str) -> Self {
        Self {
            name,
            mode: Mode::Minor,
        }
    }

    /// Look up a tonality by its exact display name.
    ///
    /// Returns `None` for names outside the fixed tables. Matching is
    /// case-sensitive: `C-dur` and `c-moll` are distinct keys and the
    /// capitalization carries the mode convention.
    pub fn parse(input: &str) -> Option<Self> {
        let name = input.trim();
        Self::all().find(|t| t.name == name)
    }

    /// The tonality's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The mode this tonality belongs to.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Every known tonality, majors first.
    pub fn all() -> impl Iterator<Item = Tonality> {
        MAJOR_TONALITIES.into_iter().chain(MINOR_TONALITIES)
    }
}

impl Mode {
    /// The tonality table for this mode.
    pub fn tonalities(&self) -> &'static [Tonality] {
        match self {
            Mode::Major => &MAJOR_TONALITIES,
            Mode::Minor => &MINOR_TONALITIES,
        }
    }
}

impl fmt::Display for Tonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Error produced when deserializing a name outside the fixed tables.
#[derive(Debug, Error)]
#[error("unknown tonality '{0}'")]
pub struct UnknownTonality(String);

impl TryFrom<String> for Tonality {
    type Error = UnknownTonality;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(UnknownTonality(value))
    }
}

impl From<Tonality> for String {
    fn from(tonality: Tonality) -> Self {
        tonality.name.to_string()
    }
}
