//! Core engine types: sides, scoreboard, game state, RNG, configuration.
//!
//! This module holds the state machine and everything it is made of. Play
//! calls and the resolution pipeline live in sibling modules and only ever
//! consume these types.

pub mod config;
pub mod error;
pub mod rng;
pub mod score;
pub mod side;
pub mod state;

pub use config::{
    ClockConfig, ConfigError, EngineConfig, ScoringConfig, FIRST_DOWN_DISTANCE, QUARTER_SECONDS,
    TIMEOUTS_PER_HALF,
};
pub use error::ParseError;
pub use rng::{GameRng, GameRngState, RollSource};
pub use score::ScoreByQuarter;
pub use side::Side;
pub use state::{FieldAdvance, GameState, GoalLine, HashMark, TeamInfo, FIELD_LENGTH};
