//! Defensive play selections.
//!
//! Only `flavor` influences resolution. Front and coverage are display only.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{ParseError, Side};

/// Defensive front / package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenseFront {
    FourThree,
    ThreeFour,
    Nickel,
    Dime,
    /// Seven defensive backs.
    Quarter,
    GoalLine,
}

/// Concrete defensive flavors a caller can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefensePlayFlavor {
    Base,
    RunFocus,
    RunBlitz,
    GoalLineSoldOut,
    PassFocus,
    PassBlitz,
    AllOutBlitz,
    Prevent,
    Contain,
    QbSpy,
}

impl DefensePlayFlavor {
    /// Every flavor, in catalog order.
    pub const ALL: [DefensePlayFlavor; 10] = [
        DefensePlayFlavor::Base,
        DefensePlayFlavor::RunFocus,
        DefensePlayFlavor::RunBlitz,
        DefensePlayFlavor::GoalLineSoldOut,
        DefensePlayFlavor::PassFocus,
        DefensePlayFlavor::PassBlitz,
        DefensePlayFlavor::AllOutBlitz,
        DefensePlayFlavor::Prevent,
        DefensePlayFlavor::Contain,
        DefensePlayFlavor::QbSpy,
    ];

    /// Upper snake case identifier, e.g. `"RUN_BLITZ"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DefensePlayFlavor::Base => "BASE",
            DefensePlayFlavor::RunFocus => "RUN_FOCUS",
            DefensePlayFlavor::RunBlitz => "RUN_BLITZ",
            DefensePlayFlavor::GoalLineSoldOut => "GOAL_LINE_SOLD_OUT",
            DefensePlayFlavor::PassFocus => "PASS_FOCUS",
            DefensePlayFlavor::PassBlitz => "PASS_BLITZ",
            DefensePlayFlavor::AllOutBlitz => "ALL_OUT_BLITZ",
            DefensePlayFlavor::Prevent => "PREVENT",
            DefensePlayFlavor::Contain => "CONTAIN",
            DefensePlayFlavor::QbSpy => "QB_SPY",
        }
    }
}

impl std::fmt::Display for DefensePlayFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DefensePlayFlavor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = crate::mapping::normalize_identifier(s);
        DefensePlayFlavor::ALL
            .into_iter()
            .find(|flavor| flavor.name() == wanted)
            .ok_or_else(|| ParseError::UnknownFlavor(s.to_string()))
    }
}

/// Coverage shell behind the front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageShell {
    Zero,
    Cover1,
    Cover2,
    Tampa2,
    Cover3,
    Cover4,
    /// Quarter-quarter-half.
    Cover6,
}

/// The defense's full selection for one play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensivePlayCall {
    /// Side the caller believes is on defense.
    pub side: Side,
    pub front: DefenseFront,
    pub flavor: DefensePlayFlavor,
    pub coverage: CoverageShell,
    pub token_id: Option<String>,
}

impl DefensivePlayCall {
    pub fn new(
        side: Side,
        front: DefenseFront,
        flavor: DefensePlayFlavor,
        coverage: CoverageShell,
    ) -> Self {
        Self {
            side,
            front,
            flavor,
            coverage,
            token_id: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }
}
