//! Play resolution: orchestrates mapping, yardage, clock and state machine
//! into one atomic transition.
//!
//! Resolution is pure and synchronous. The only input with side effects is
//! the random source, and a seeded [`GameRng`](crate::core::GameRng) makes
//! every play reproducible.

pub mod engine;
pub mod result;

pub use engine::{resolve_play, PlayEngine, PlayResolver};
pub use result::ResolvedPlay;
