//! Offensive play selections.
//!
//! Only `play_type` influences resolution. Personnel, direction, depth and
//! target are carried through for display.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{ParseError, Side};

/// Offensive personnel grouping in NFL shorthand.
///
/// First digit = running backs, second = tight ends. Receivers fill the
/// remaining five skill spots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonnelGroup {
    P00,
    P01,
    P02,
    P03,
    P04,
    P10,
    P11,
    P12,
    P13,
    P20,
    P21,
    P22,
    P23,
    P30,
    P31,
    P32,
}

impl PersonnelGroup {
    /// Running backs on the field.
    #[must_use]
    pub const fn rb(self) -> u8 {
        self.digits().0
    }

    /// Tight ends on the field.
    #[must_use]
    pub const fn te(self) -> u8 {
        self.digits().1
    }

    /// Wide receivers on the field.
    #[must_use]
    pub const fn wr(self) -> u8 {
        5 - self.rb() - self.te()
    }

    const fn digits(self) -> (u8, u8) {
        match self {
            PersonnelGroup::P00 => (0, 0),
            PersonnelGroup::P01 => (0, 1),
            PersonnelGroup::P02 => (0, 2),
            PersonnelGroup::P03 => (0, 3),
            PersonnelGroup::P04 => (0, 4),
            PersonnelGroup::P10 => (1, 0),
            PersonnelGroup::P11 => (1, 1),
            PersonnelGroup::P12 => (1, 2),
            PersonnelGroup::P13 => (1, 3),
            PersonnelGroup::P20 => (2, 0),
            PersonnelGroup::P21 => (2, 1),
            PersonnelGroup::P22 => (2, 2),
            PersonnelGroup::P23 => (2, 3),
            PersonnelGroup::P30 => (3, 0),
            PersonnelGroup::P31 => (3, 1),
            PersonnelGroup::P32 => (3, 2),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayDirection {
    Left,
    Middle,
    Right,
}

/// Intended pass depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassDepth {
    /// 0-3 yards
    Quick,
    /// 4-10 yards
    Short,
    /// 11-19 yards
    Intermediate,
    /// 20+ yards
    Deep,
}

/// Primary target or ball carrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    Rb1,
    Rb2,
    Wr1,
    Wr2,
    Wr3,
    Wr4,
    Wr5,
    Te1,
    Te2,
    Qb,
}

/// Concrete offensive play types a caller can select.
///
/// The resolver never looks at these directly; see
/// [`crate::mapping::offense_family_for`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OffensePlayType {
    // Runs
    InsideZone,
    OutsideZone,
    Power,
    Counter,
    Trap,
    Iso,
    Sweep,
    Toss,

    // Specialty runs
    Draw,
    Delay,
    QbSneak,
    QbKeeper,
    ReadOption,
    SpeedOption,
    JetSweep,
    Reverse,

    // Quick game and screens
    QuickSlant,
    QuickOut,
    QuickHitch,
    BubbleScreen,
    SmokeScreen,
    RbScreen,
    TeScreen,

    // Intermediate
    Dig,
    Comeback,
    DeepOut,
    Crossers,
    Mesh,
    Seam,

    // Deep
    Go,
    Post,
    Corner,
    Fade,
    DeepCross,

    // Play-action and movement
    PlayActionShort,
    PlayActionShot,
    Bootleg,
    RollOut,

    // Game management
    Spike,
    Kneel,
}

impl OffensePlayType {
    /// Every play type, in catalog order.
    pub const ALL: [OffensePlayType; 40] = [
        OffensePlayType::InsideZone,
        OffensePlayType::OutsideZone,
        OffensePlayType::Power,
        OffensePlayType::Counter,
        OffensePlayType::Trap,
        OffensePlayType::Iso,
        OffensePlayType::Sweep,
        OffensePlayType::Toss,
        OffensePlayType::Draw,
        OffensePlayType::Delay,
        OffensePlayType::QbSneak,
        OffensePlayType::QbKeeper,
        OffensePlayType::ReadOption,
        OffensePlayType::SpeedOption,
        OffensePlayType::JetSweep,
        OffensePlayType::Reverse,
        OffensePlayType::QuickSlant,
        OffensePlayType::QuickOut,
        OffensePlayType::QuickHitch,
        OffensePlayType::BubbleScreen,
        OffensePlayType::SmokeScreen,
        OffensePlayType::RbScreen,
        OffensePlayType::TeScreen,
        OffensePlayType::Dig,
        OffensePlayType::Comeback,
        OffensePlayType::DeepOut,
        OffensePlayType::Crossers,
        OffensePlayType::Mesh,
        OffensePlayType::Seam,
        OffensePlayType::Go,
        OffensePlayType::Post,
        OffensePlayType::Corner,
        OffensePlayType::Fade,
        OffensePlayType::DeepCross,
        OffensePlayType::PlayActionShort,
        OffensePlayType::PlayActionShot,
        OffensePlayType::Bootleg,
        OffensePlayType::RollOut,
        OffensePlayType::Spike,
        OffensePlayType::Kneel,
    ];

    /// Upper snake case identifier, e.g. `"INSIDE_ZONE"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OffensePlayType::InsideZone => "INSIDE_ZONE",
            OffensePlayType::OutsideZone => "OUTSIDE_ZONE",
            OffensePlayType::Power => "POWER",
            OffensePlayType::Counter => "COUNTER",
            OffensePlayType::Trap => "TRAP",
            OffensePlayType::Iso => "ISO",
            OffensePlayType::Sweep => "SWEEP",
            OffensePlayType::Toss => "TOSS",
            OffensePlayType::Draw => "DRAW",
            OffensePlayType::Delay => "DELAY",
            OffensePlayType::QbSneak => "QB_SNEAK",
            OffensePlayType::QbKeeper => "QB_KEEPER",
            OffensePlayType::ReadOption => "READ_OPTION",
            OffensePlayType::SpeedOption => "SPEED_OPTION",
            OffensePlayType::JetSweep => "JET_SWEEP",
            OffensePlayType::Reverse => "REVERSE",
            OffensePlayType::QuickSlant => "QUICK_SLANT",
            OffensePlayType::QuickOut => "QUICK_OUT",
            OffensePlayType::QuickHitch => "QUICK_HITCH",
            OffensePlayType::BubbleScreen => "BUBBLE_SCREEN",
            OffensePlayType::SmokeScreen => "SMOKE_SCREEN",
            OffensePlayType::RbScreen => "RB_SCREEN",
            OffensePlayType::TeScreen => "TE_SCREEN",
            OffensePlayType::Dig => "DIG",
            OffensePlayType::Comeback => "COMEBACK",
            OffensePlayType::DeepOut => "DEEP_OUT",
            OffensePlayType::Crossers => "CROSSERS",
            OffensePlayType::Mesh => "MESH",
            OffensePlayType::Seam => "SEAM",
            OffensePlayType::Go => "GO",
            OffensePlayType::Post => "POST",
            OffensePlayType::Corner => "CORNER",
            OffensePlayType::Fade => "FADE",
            OffensePlayType::DeepCross => "DEEP_CROSS",
            OffensePlayType::PlayActionShort => "PLAY_ACTION_SHORT",
            OffensePlayType::PlayActionShot => "PLAY_ACTION_SHOT",
            OffensePlayType::Bootleg => "BOOTLEG",
            OffensePlayType::RollOut => "ROLL_OUT",
            OffensePlayType::Spike => "SPIKE",
            OffensePlayType::Kneel => "KNEEL",
        }
    }
}

impl std::fmt::Display for OffensePlayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OffensePlayType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = crate::mapping::normalize_identifier(s);
        OffensePlayType::ALL
            .into_iter()
            .find(|play_type| play_type.name() == wanted)
            .ok_or_else(|| ParseError::UnknownPlayType(s.to_string()))
    }
}

/// The offense's full selection for one play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffensivePlayCall {
    /// Side the caller believes is on offense.
    pub side: Side,
    pub personnel: PersonnelGroup,
    pub play_type: OffensePlayType,
    pub direction: Option<PlayDirection>,
    pub pass_depth: Option<PassDepth>,
    pub primary_target: Option<TargetType>,
    /// Opaque reference for hidden-selection front ends.
    pub token_id: Option<String>,
}

impl OffensivePlayCall {
    /// Create a call with no display hints.
    pub fn new(side: Side, personnel: PersonnelGroup, play_type: OffensePlayType) -> Self {
        Self {
            side,
            personnel,
            play_type,
            direction: None,
            pass_depth: None,
            primary_target: None,
            token_id: None,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: PlayDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    #[must_use]
    pub fn with_pass_depth(mut self, depth: PassDepth) -> Self {
        self.pass_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetType) -> Self {
        self.primary_target = Some(target);
        self
    }

    #[must_use]
    pub fn with_token(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personnel_counts() {
        assert_eq!(
            (PersonnelGroup::P11.rb(), PersonnelGroup::P11.te(), PersonnelGroup::P11.wr()),
            (1, 1, 3)
        );
        assert_eq!(PersonnelGroup::P00.wr(), 5);
        assert_eq!(PersonnelGroup::P23.wr(), 0);
        assert_eq!(PersonnelGroup::P32.wr(), 0);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = OffensePlayType::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OffensePlayType::ALL.len());
    }

    #[test]
    fn test_parse() {
        assert_eq!("INSIDE_ZONE".parse(), Ok(OffensePlayType::InsideZone));
        assert_eq!("play-action shot".parse(), Ok(OffensePlayType::PlayActionShot));
        assert_eq!(
            "FLEA_FLICKER".parse::<OffensePlayType>(),
            Err(ParseError::UnknownPlayType("FLEA_FLICKER".to_string()))
        );
    }

    #[test]
    fn test_call_builder() {
        let call = OffensivePlayCall::new(Side::Home, PersonnelGroup::P11, OffensePlayType::Post)
            .with_direction(PlayDirection::Left)
            .with_pass_depth(PassDepth::Deep)
            .with_target(TargetType::Wr1)
            .with_token("card-7");

        assert_eq!(call.direction, Some(PlayDirection::Left));
        assert_eq!(call.pass_depth, Some(PassDepth::Deep));
        assert_eq!(call.primary_target, Some(TargetType::Wr1));
        assert_eq!(call.token_id.as_deref(), Some("card-7"));
    }
}
