//! Command dispatch: the imperative shell over the pure flow core.
//!
//! Inbound commands, text, and button callbacks are parsed into flow events,
//! applied against the user's session, and answered with replies. Faults are
//! caught and logged here; nothing below this module touches I/O.

mod command;
mod engine;
mod reply;
pub mod text;

pub use command::Inbound;
pub use engine::{dispatch, BotEnv, DispatchError, Dispatcher};
pub use reply::{Button, Keyboard, Reply};
