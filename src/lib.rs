//! # rust-gridiron
//!
//! Play resolution for a turn-based American football simulation.
//!
//! ## Design Principles
//!
//! 1. **Canonical Families**: Any number of concrete play types and defensive
//!    flavors collapse onto ~10 canonical families. The yardage and clock
//!    models only ever see the families.
//!
//! 2. **Immutable State**: `GameState` is a value. Every play produces a new
//!    one; earlier snapshots stay valid for replay and undo.
//!
//! 3. **Total Resolution**: Any state and play call resolve. Unknown
//!    identifiers fall back to default families instead of failing.
//!
//! ## Architecture
//!
//! - **Deterministic RNG**: A seeded ChaCha8 stream behind the one-method
//!   `RollSource` trait makes games reproducible.
//!
//! - **Persistent Scoreboard**: `im` vectors keep state copies O(1).
//!
//! ## Modules
//!
//! - `core`: Sides, scoreboard, game state machine, RNG, configuration
//! - `calls`: Offensive and defensive play selections
//! - `mapping`: Concrete selections → canonical families
//! - `model`: Yardage bands and clock runoff
//! - `resolve`: The play resolver

pub mod calls;
pub mod core;
pub mod mapping;
pub mod model;
pub mod resolve;

// Re-export commonly used types
pub use crate::core::{
    ClockConfig, ConfigError, EngineConfig, FieldAdvance, GameRng, GameRngState, GameState,
    GoalLine, HashMark, ParseError, RollSource, ScoreByQuarter, ScoringConfig, Side, TeamInfo,
};

pub use crate::calls::{
    CoverageShell, DefenseFront, DefensePlayFlavor, DefensivePlayCall, OffensePlayType,
    OffensivePlayCall, PassDepth, PersonnelGroup, PlayCall, PlayDirection, TargetType,
};

pub use crate::mapping::{
    defense_family_for, offense_family_for, CoreDefenseFamily, CoreOffenseFamily,
};

pub use crate::model::{band, clock_runoff, ClockModel, YardageBand};

pub use crate::resolve::{resolve_play, PlayEngine, PlayResolver, ResolvedPlay};
