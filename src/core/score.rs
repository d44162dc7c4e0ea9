//! Per-period scoreboard.
//!
//! Index 0 = Q1, 1 = Q2, 2 = Q3, 3 = Q4, 4+ = overtime periods.
//! Both sides always hold the same number of periods.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::side::Side;

/// Regulation periods created at kickoff.
pub const REGULATION_PERIODS: usize = 4;

/// Points per period for both teams.
///
/// Uses `im::Vector` so a `GameState` clone shares the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreByQuarter {
    home: Vector<u32>,
    away: Vector<u32>,
}

impl ScoreByQuarter {
    /// Four zeroed quarters per side.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            home: Vector::from(vec![0; REGULATION_PERIODS]),
            away: Vector::from(vec![0; REGULATION_PERIODS]),
        }
    }

    /// Return a scoreboard with `points` added to `side` at `period_index`.
    ///
    /// Periods past the current end are created (zeroed) for both sides.
    #[must_use]
    pub fn with_points(&self, side: Side, period_index: usize, points: u32) -> Self {
        let mut next = self.clone();
        while period_index >= next.home.len() {
            next.home.push_back(0);
            next.away.push_back(0);
        }

        let periods = match side {
            Side::Home => &mut next.home,
            Side::Away => &mut next.away,
        };
        periods[period_index] += points;
        next
    }

    /// Per-period points for one side.
    #[must_use]
    pub fn for_side(&self, side: Side) -> &Vector<u32> {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Points scored by `side` in one period (0 for periods not yet played).
    #[must_use]
    pub fn period(&self, side: Side, period_index: usize) -> u32 {
        self.for_side(side).get(period_index).copied().unwrap_or(0)
    }

    /// Sum of all periods for one side.
    #[must_use]
    pub fn total(&self, side: Side) -> u32 {
        self.for_side(side).iter().sum()
    }

    #[must_use]
    pub fn home_total(&self) -> u32 {
        self.total(Side::Home)
    }

    #[must_use]
    pub fn away_total(&self) -> u32 {
        self.total(Side::Away)
    }

    /// Number of periods tracked (4 until overtime is scored in).
    #[must_use]
    pub fn period_count(&self) -> usize {
        self.home.len()
    }
}

impl Default for ScoreByQuarter {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        let score = ScoreByQuarter::initial();
        assert_eq!(score.period_count(), 4);
        assert_eq!(score.home_total(), 0);
        assert_eq!(score.away_total(), 0);
    }

    #[test]
    fn test_with_points_is_pure() {
        let score = ScoreByQuarter::initial();
        let scored = score.with_points(Side::Home, 1, 6);

        assert_eq!(score.home_total(), 0);
        assert_eq!(scored.period(Side::Home, 1), 6);
        assert_eq!(scored.home_total(), 6);
        assert_eq!(scored.away_total(), 0);
    }

    #[test]
    fn test_overtime_grows_both_sides() {
        let score = ScoreByQuarter::initial().with_points(Side::Away, 5, 6);

        assert_eq!(score.period_count(), 6);
        assert_eq!(score.for_side(Side::Home).len(), 6);
        assert_eq!(score.period(Side::Away, 4), 0);
        assert_eq!(score.period(Side::Away, 5), 6);
        assert_eq!(score.away_total(), 6);
    }

    #[test]
    fn test_unplayed_period_reads_zero() {
        let score = ScoreByQuarter::initial();
        assert_eq!(score.period(Side::Home, 9), 0);
    }
}
