//! Trait definitions for the Relay text generation client.
//!
//! A provider driver implements [`TextGenerator`]; the retry invoker only
//! ever sees that one operation and the [`AttemptOutcome`] it is tagged into.

mod generator;
mod outcome;

pub use generator::TextGenerator;
pub use outcome::AttemptOutcome;
