//! Game state: the immutable snapshot replaced on every play.
//!
//! ## Field Coordinates
//!
//! `yard_line` runs 0..=100 from HOME's goal line regardless of who has the
//! ball. The offense-perspective spot flips the field for AWAY so that the
//! offense always advances toward 100.
//!
//! ## Transitions
//!
//! Every operation takes `&self` and returns a new `GameState`. Nothing is
//! mutated in place, so any earlier snapshot stays valid for replay or undo.
//! The scoreboard is an `im` persistent vector, so these copies are cheap.

use serde::{Deserialize, Serialize};

use super::config::{FIRST_DOWN_DISTANCE, QUARTER_SECONDS, TIMEOUTS_PER_HALF};
use super::score::ScoreByQuarter;
use super::side::Side;

/// Length of the field in yards, goal line to goal line.
pub const FIELD_LENGTH: i32 = 100;

/// Offense-perspective spot at which the red zone begins.
pub const RED_ZONE_START: i32 = 80;

/// Team identity carried for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub abbr: String,
}

impl TeamInfo {
    pub fn new(name: impl Into<String>, abbr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbr: abbr.into(),
        }
    }
}

/// Hash the ball is spotted on. Display only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashMark {
    Left,
    #[default]
    Middle,
    Right,
}

/// Which goal line a play ended on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalLine {
    /// The defense's goal line: a touchdown.
    Opponent,
    /// The offense's own goal line.
    Own,
}

/// Where a gain of some yards puts the ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldAdvance {
    /// New absolute spot, clamped to the field.
    pub yard_line: i32,
    /// Set when the new spot is exactly on a goal line.
    pub goal: Option<GoalLine>,
}

impl FieldAdvance {
    /// True when the ball reached the defense's goal line.
    #[must_use]
    pub fn is_touchdown(&self) -> bool {
        self.goal == Some(GoalLine::Opponent)
    }
}

/// Snapshot of a game between plays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Teams ===
    pub home_name: String,
    pub home_abbr: String,
    pub away_name: String,
    pub away_abbr: String,

    // === Game Progress ===
    /// Quarter, starting at 1. 5 and above are overtime periods.
    pub quarter: u8,
    /// Seconds left in the current quarter (0..=900).
    pub time_remaining: u32,
    /// Side with the ball.
    pub possession: Side,

    // === Field ===
    /// Down, 1..=4.
    pub down: u8,
    /// Yards needed for a first down.
    pub distance: i32,
    /// Spot in 0..=100 measured from HOME's goal line.
    pub yard_line: i32,
    pub hash_mark: HashMark,

    // === Timeouts ===
    pub home_timeouts: u8,
    pub away_timeouts: u8,

    pub scores: ScoreByQuarter,

    // === Current Drive ===
    pub current_drive_play_count: u32,
    pub current_drive_yards: i32,
    pub current_drive_start_yard_line: i32,

    // === Flags ===
    pub clock_running: bool,
    pub game_over: bool,
}

impl GameState {
    /// Create a fresh game at 1st & 10 on the receiving team's own 25.
    #[must_use]
    pub fn initial(home: TeamInfo, away: TeamInfo, home_receives: bool) -> Self {
        let receiving_side = if home_receives { Side::Home } else { Side::Away };
        let yard_line = absolute_spot(receiving_side, 25);

        Self {
            home_name: home.name,
            home_abbr: home.abbr,
            away_name: away.name,
            away_abbr: away.abbr,
            quarter: 1,
            time_remaining: QUARTER_SECONDS,
            possession: receiving_side,
            down: 1,
            distance: FIRST_DOWN_DISTANCE,
            yard_line,
            hash_mark: HashMark::Middle,
            home_timeouts: TIMEOUTS_PER_HALF,
            away_timeouts: TIMEOUTS_PER_HALF,
            scores: ScoreByQuarter::initial(),
            current_drive_play_count: 0,
            current_drive_yards: 0,
            current_drive_start_yard_line: yard_line,
            clock_running: false,
            game_over: false,
        }
    }

    // === Queries ===

    /// Side with the ball.
    #[must_use]
    pub fn offense_side(&self) -> Side {
        self.possession
    }

    /// Side without the ball.
    #[must_use]
    pub fn defense_side(&self) -> Side {
        self.possession.opponent()
    }

    /// Spot from the offense's own goal line (0) toward the defense's (100).
    #[must_use]
    pub fn offense_perspective_yard_line(&self) -> i32 {
        offense_spot(self.possession, self.yard_line)
    }

    /// Timeouts remaining for a side.
    #[must_use]
    pub fn timeouts(&self, side: Side) -> u8 {
        match side {
            Side::Home => self.home_timeouts,
            Side::Away => self.away_timeouts,
        }
    }

    /// Total points for a side.
    #[must_use]
    pub fn score_total(&self, side: Side) -> u32 {
        self.scores.total(side)
    }

    #[must_use]
    pub fn is_first_down(&self) -> bool {
        self.down == 1
    }

    /// Offense inside the opponent's 20.
    #[must_use]
    pub fn is_red_zone(&self) -> bool {
        (RED_ZONE_START..=FIELD_LENGTH).contains(&self.offense_perspective_yard_line())
    }

    /// Where a gain of `yards_gained` by the current offense puts the ball.
    ///
    /// This is the single goal-line check: the resolver's touchdown flag and
    /// the state machine's goal-line branch both come from here.
    #[must_use]
    pub fn advance(&self, yards_gained: i32) -> FieldAdvance {
        let delta = match self.possession {
            Side::Home => yards_gained,
            Side::Away => -yards_gained,
        };
        let yard_line = (self.yard_line + delta).clamp(0, FIELD_LENGTH);

        let goal = match offense_spot(self.possession, yard_line) {
            FIELD_LENGTH => Some(GoalLine::Opponent),
            0 => Some(GoalLine::Own),
            _ => None,
        };

        FieldAdvance { yard_line, goal }
    }

    // === Transitions ===

    /// Return a new state with `points` added to `side` in the current quarter.
    #[must_use]
    pub fn with_added_points(&self, side: Side, points: u32) -> Self {
        let period_index = usize::from(self.quarter.saturating_sub(1));
        Self {
            scores: self.scores.with_points(side, period_index, points),
            ..self.clone()
        }
    }

    /// Return a new state with down/distance/spot/drive updated for a play.
    ///
    /// A play ending on either goal line only moves the ball; the caller
    /// decides what the arrival means and resets the series itself.
    #[must_use]
    pub fn next_down_after_play(
        &self,
        yards_gained: i32,
        first_down_gained: bool,
        touchdown: bool,
        turnover: bool,
    ) -> Self {
        let advance = self.advance(yards_gained);
        let new_yard_line = advance.yard_line;

        if touchdown || advance.goal.is_some() {
            return Self {
                yard_line: new_yard_line,
                ..self.clone()
            };
        }

        if turnover {
            return self.with_possession_change(new_yard_line);
        }

        if first_down_gained {
            return Self {
                down: 1,
                distance: FIRST_DOWN_DISTANCE,
                yard_line: new_yard_line,
                current_drive_play_count: self.current_drive_play_count + 1,
                current_drive_yards: self.current_drive_yards + yards_gained,
                ..self.clone()
            };
        }

        let next_down = self.down + 1;
        if next_down > 4 {
            // Turnover on downs
            return self.with_possession_change(new_yard_line);
        }

        Self {
            down: next_down,
            distance: (self.distance - yards_gained).max(1),
            yard_line: new_yard_line,
            current_drive_play_count: self.current_drive_play_count + 1,
            current_drive_yards: self.current_drive_yards + yards_gained,
            ..self.clone()
        }
    }

    /// Return a new state with `receiving_side` set up after a kickoff.
    ///
    /// `kickoff_spot` is measured from the receiving side's own goal line.
    #[must_use]
    pub fn with_kickoff(&self, receiving_side: Side, kickoff_spot: i32) -> Self {
        let yard_line = absolute_spot(receiving_side, kickoff_spot);
        Self {
            possession: receiving_side,
            down: 1,
            distance: FIRST_DOWN_DISTANCE,
            yard_line,
            current_drive_play_count: 0,
            current_drive_yards: 0,
            current_drive_start_yard_line: yard_line,
            clock_running: false,
            ..self.clone()
        }
    }

    /// Return a new state with `seconds` taken off the clock, floored at zero.
    #[must_use]
    pub fn with_clock_runoff(&self, seconds: u32) -> Self {
        Self {
            time_remaining: self.time_remaining.saturating_sub(seconds),
            ..self.clone()
        }
    }

    fn with_possession_change(&self, yard_line: i32) -> Self {
        Self {
            possession: self.defense_side(),
            down: 1,
            distance: FIRST_DOWN_DISTANCE,
            yard_line,
            current_drive_play_count: 0,
            current_drive_yards: 0,
            current_drive_start_yard_line: yard_line,
            ..self.clone()
        }
    }
}

/// Offense-perspective spot for an absolute spot.
fn offense_spot(possession: Side, yard_line: i32) -> i32 {
    match possession {
        Side::Home => yard_line,
        Side::Away => FIELD_LENGTH - yard_line,
    }
}

/// Absolute spot for a spot measured from `side`'s own goal line.
fn absolute_spot(side: Side, own_spot: i32) -> i32 {
    match side {
        Side::Home => own_spot,
        Side::Away => FIELD_LENGTH - own_spot,
    }
}
