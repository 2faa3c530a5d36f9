//! Cadenza: conversation engine for a random musical modulation trainer bot.
//!
//! The core is split "pure core, imperative shell":
//!
//! - [`theory`]: fixed tonality/degree tables and uniform random modulation
//!   generation, deterministic under an injected RNG
//! - [`session`]: per-user flow state behind a swappable [`session::SessionStore`]
//! - [`flow`]: an explicit finite-state machine with an enumerable rule table
//! - [`dispatch`]: the effectful boundary that parses inbound commands, applies
//!   the machine against the user's session, and returns replies
//! - [`config`]: startup credential handling
//!
//! The messaging-platform transport itself is an external collaborator; it
//! feeds [`dispatch::Inbound`] items in and delivers [`dispatch::Reply`]
//! values back out.
//!
//! # Example
//!
//! ```rust
//! use cadenza::flow::{Event, FlowMachine};
//! use cadenza::session::FlowState;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let machine = FlowMachine::standard();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let outcome = machine.apply(&FlowState::Idle, &Event::SelectStep, &mut rng);
//! assert_eq!(outcome.next_state(&FlowState::Idle), FlowState::AwaitingDegree);
//!
//! let outcome = machine.apply(&FlowState::AwaitingDegree, &Event::Text("V".into()), &mut rng);
//! assert!(outcome.replies()[0].text.contains("V ступень"));
//! ```

pub mod config;
pub mod dispatch;
pub mod flow;
pub mod session;
pub mod theory;

// Re-export commonly used types
pub use config::BotConfig;
pub use dispatch::{BotEnv, Dispatcher, Inbound, Reply};
pub use flow::{Event, FlowMachine, StepOutcome};
pub use session::{FlowState, SessionStore, UserId, UserSession};
pub use theory::{Degree, Modulation, Mode, Tonality};
