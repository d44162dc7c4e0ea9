//! Play calls: what each side chose for one snap.
//!
//! Calls are built by external collaborators (a play-selection UI, a
//! playbook lookup, a simple AI) and handed to the resolver. Every choice is
//! a closed enum, so an invalid selection cannot be constructed.

pub mod defense;
pub mod offense;

pub use defense::{CoverageShell, DefenseFront, DefensePlayFlavor, DefensivePlayCall};
pub use offense::{
    OffensePlayType, OffensivePlayCall, PassDepth, PersonnelGroup, PlayDirection, TargetType,
};

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Both sides' selections for one play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayCall {
    pub offense: OffensivePlayCall,
    pub defense: DefensivePlayCall,
}

impl PlayCall {
    pub fn new(offense: OffensivePlayCall, defense: DefensivePlayCall) -> Self {
        Self { offense, defense }
    }

    /// Side the offensive caller declared.
    ///
    /// May be stale; the resolver trusts `GameState::possession` instead.
    #[must_use]
    pub fn offense_side(&self) -> Side {
        self.offense.side
    }

    /// Side the defensive caller declared.
    #[must_use]
    pub fn defense_side(&self) -> Side {
        self.defense.side
    }
}
