//! Musical theory tables and modulation generation.
//!
//! This module contains the pure core of the bot:
//! - Fixed tonality tables classified by [`Mode`]
//! - Scale-degree labels with per-mode applicability
//! - Uniform random [`Modulation`] generation
//!
//! All randomness is injected through a caller-supplied RNG, so every
//! function here is deterministic under test. Nothing in this module
//! performs I/O or touches session state.

mod degree;
mod mode;
mod modulation;
mod tonality;

pub use degree::{Degree, MAJOR_DEGREES, MINOR_DEGREES};
pub use mode::Mode;
pub use modulation::{generate_modulation, generate_step_for_tonality, Modulation};
pub use tonality::{Tonality, UnknownTonality, MAJOR_TONALITIES, MINOR_TONALITIES};
