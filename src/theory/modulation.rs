//! Random modulation generation over the fixed tables.
//!
//! Both generators take the RNG by reference so callers decide the source of
//! randomness: `thread_rng` at the dispatch boundary, a seeded `StdRng` in
//! tests. The `"{tonality}, {degree} ступень"` rendering is the bot's reply
//! contract and must not change shape.

use super::degree::Degree;
use super::mode::Mode;
use super::tonality::Tonality;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated (tonality, degree) pair.
///
/// Created on demand for a single reply, never stored. The invariant that
/// the degree applies to the tonality's mode is upheld by construction in
/// the generators below.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Modulation {
    pub tonality: Tonality,
    pub degree: Degree,
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} ступень", self.tonality, self.degree)
    }
}

/// Generate a random modulation.
///
/// Without a degree: picks a mode uniformly, then a tonality and a degree
/// uniformly within that mode, so the pair is always mode-consistent.
///
/// With a degree: picks a tonality uniformly from the union of the tables of
/// every mode the degree applies to. Returns `None` only when the degree
/// matches no mode, which callers must surface as an invalid-input reply.
///
/// # Example
///
/// ```rust
/// use cadenza::theory::{generate_modulation, Degree};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let m = generate_modulation(&mut rng, Some(Degree::II)).unwrap();
/// assert_eq!(m.degree, Degree::II);
/// assert!(m.to_string().ends_with("II ступень"));
/// ```
pub fn generate_modulation<R: Rng + ?Sized>(
    rng: &mut R,
    degree: Option<Degree>,
) -> Option<Modulation> {
    match degree {
        Some(degree) => {
            let pool: Vec<Tonality> = degree
                .modes()
                .iter()
                .flat_map(|mode| mode.tonalities().iter().copied())
                .collect();
            let tonality = *pool.choose(rng)?;
            Some(Modulation { tonality, degree })
        }
        None => {
            let mode = *Mode::ALL.choose(rng)?;
            let tonality = *mode.tonalities().choose(rng)?;
            let degree = *mode.degrees().choose(rng)?;
            Some(Modulation { tonality, degree })
        }
    }
}

/// Generate a random degree for an already-validated tonality.
///
/// Draws uniformly from the degree set of the tonality's mode. Unrecognized
/// tonality names never reach here; they fail at [`Tonality::parse`].
pub fn generate_step_for_tonality<R: Rng + ?Sized>(
    rng: &mut R,
    tonality: Tonality,
) -> Option<Modulation> {
    let degree = *tonality.mode().degrees().choose(rng)?;
    Some(Modulation { tonality, degree })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn free_modulation_is_mode_consistent() {
        for seed in 0..64 {
            let m = generate_modulation(&mut rng(seed), None).unwrap();
            assert!(
                m.degree.applies_to(m.tonality.mode()),
                "degree {} drawn for inapplicable mode {}",
                m.degree,
                m.tonality.mode().name()
            );
        }
    }

    #[test]
    fn free_modulation_has_contract_shape() {
        let m = generate_modulation(&mut rng(1), None).unwrap();
        let text = m.to_string();
        assert!(text.contains(", "));
        assert!(text.ends_with("ступень"));
    }

    #[test]
    fn pinned_degree_is_kept() {
        for degree in Degree::ALL {
            let m = generate_modulation(&mut rng(3), Some(degree)).unwrap();
            assert_eq!(m.degree, degree);
        }
    }

    #[test]
    fn pinned_degree_draws_only_applicable_tonalities() {
        for degree in Degree::ALL {
            for seed in 0..32 {
                let m = generate_modulation(&mut rng(seed), Some(degree)).unwrap();
                assert!(degree.applies_to(m.tonality.mode()));
            }
        }
    }

    #[test]
    fn exclusive_degrees_never_cross_modes() {
        for seed in 0..64 {
            let major_only = generate_modulation(&mut rng(seed), Some(Degree::II)).unwrap();
            assert_eq!(major_only.tonality.mode(), Mode::Major);

            let minor_only = generate_modulation(&mut rng(seed), Some(Degree::VII)).unwrap();
            assert_eq!(minor_only.tonality.mode(), Mode::Minor);
        }
    }

    #[test]
    fn shared_degree_reaches_both_modes() {
        let mut saw_major = false;
        let mut saw_minor = false;
        for seed in 0..256 {
            let m = generate_modulation(&mut rng(seed), Some(Degree::V)).unwrap();
            match m.tonality.mode() {
                Mode::Major => saw_major = true,
                Mode::Minor => saw_minor = true,
            }
        }
        assert!(saw_major && saw_minor);
    }

    #[test]
    fn step_for_tonality_keeps_tonality_and_mode() {
        for tonality in Tonality::all() {
            let m = generate_step_for_tonality(&mut rng(9), tonality).unwrap();
            assert_eq!(m.tonality, tonality);
            assert!(m.degree.applies_to(tonality.mode()));
        }
    }

    #[test]
    fn rendering_contains_both_parts() {
        let tonality = Tonality::parse("h-moll").unwrap();
        let m = Modulation {
            tonality,
            degree: Degree::VII,
        };
        assert_eq!(m.to_string(), "h-moll, VII ступень");
    }
}
