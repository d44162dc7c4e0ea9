//! Yardage bands per family matchup and sampling.
//!
//! ## Computation
//!
//! 1. Base band from the offense family
//! 2. Additive adjustment from the defense family
//! 3. Clamp to [`YARDS_FLOOR`]..=[`YARDS_CEILING`], swapping if inverted
//!
//! Sampling draws uniformly over the closed band.

use serde::{Deserialize, Serialize};

use crate::core::RollSource;
use crate::mapping::{CoreDefenseFamily, CoreOffenseFamily};

/// Largest loss any play can produce.
pub const YARDS_FLOOR: i32 = -15;

/// Largest gain any play can produce.
pub const YARDS_CEILING: i32 = 50;

/// Inclusive range of possible yards for a matchup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YardageBand {
    pub min: i32,
    pub max: i32,
}

impl YardageBand {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// True if `yards` lies in the band, endpoints included.
    #[must_use]
    pub fn contains(&self, yards: i32) -> bool {
        (self.min..=self.max).contains(&yards)
    }

    /// Number of distinct outcomes.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.max.abs_diff(self.min) + 1
    }

    /// Clamp into the global floor/ceiling and keep the band well ordered.
    fn clamped(self) -> Self {
        let min = self.min.max(YARDS_FLOOR);
        let max = self.max.min(YARDS_CEILING);
        if min > max {
            Self::new(max, min)
        } else {
            Self::new(min, max)
        }
    }
}

/// Unadjusted band for an offense family.
#[must_use]
pub const fn base_band(offense: CoreOffenseFamily) -> YardageBand {
    match offense {
        CoreOffenseFamily::InsideRun => YardageBand::new(-2, 6),
        CoreOffenseFamily::OutsideRun => YardageBand::new(-3, 8),
        CoreOffenseFamily::OptionRun => YardageBand::new(-3, 10),
        CoreOffenseFamily::QuickPass => YardageBand::new(-4, 10),
        CoreOffenseFamily::ShortPass => YardageBand::new(-5, 12),
        CoreOffenseFamily::IntermediatePass => YardageBand::new(-8, 18),
        CoreOffenseFamily::DeepPass => YardageBand::new(-10, 35),
        CoreOffenseFamily::ScreenPass => YardageBand::new(-6, 18),
        CoreOffenseFamily::PlayAction => YardageBand::new(-5, 25),
        CoreOffenseFamily::Spike => YardageBand::new(0, 0),
        CoreOffenseFamily::Kneel => YardageBand::new(-1, -1),
    }
}

/// Band for an offense family against a defense family.
///
/// Always satisfies `YARDS_FLOOR <= min <= max <= YARDS_CEILING`.
#[must_use]
pub fn band(offense: CoreOffenseFamily, defense: CoreDefenseFamily) -> YardageBand {
    let YardageBand { mut min, mut max } = base_band(offense);

    match defense {
        CoreDefenseFamily::Base | CoreDefenseFamily::QbSpy => {}
        CoreDefenseFamily::RunFocus => {
            if offense.is_run() {
                min -= 2;
                max -= 1;
            } else {
                max += 3;
            }
        }
        CoreDefenseFamily::RunBlitz => {
            if offense.is_run() {
                min -= 3;
                max += 1;
            } else {
                // Sack risk
                min -= 6;
            }
        }
        CoreDefenseFamily::PassFocus => {
            if offense.is_pass() {
                min -= 3;
                max -= 3;
            } else {
                max += 4;
            }
        }
        CoreDefenseFamily::PassBlitz => {
            if offense.is_pass() {
                min -= 8;
                max += 8;
            } else {
                min -= 2;
            }
        }
        CoreDefenseFamily::AllOutBlitz => {
            min -= 10;
            max += 15;
        }
        CoreDefenseFamily::Prevent => {
            if offense.is_underneath() {
                max += 4;
            } else {
                min -= 3;
                max -= 5;
            }
        }
        CoreDefenseFamily::Contain => {
            min = min.max(-3);
            max = max.min(12);
        }
    }

    let adjusted = YardageBand::new(min, max).clamped();
    log::trace!("band {offense} vs {defense}: {}..={}", adjusted.min, adjusted.max);
    adjusted
}

/// Draw one yardage value from `band`.
pub fn sample<R: RollSource + ?Sized>(band: YardageBand, rng: &mut R) -> i32 {
    rng.roll_inclusive(band.min, band.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_base_bands() {
        assert_eq!(base_band(CoreOffenseFamily::InsideRun), YardageBand::new(-2, 6));
        assert_eq!(base_band(CoreOffenseFamily::DeepPass), YardageBand::new(-10, 35));
        assert_eq!(base_band(CoreOffenseFamily::Spike), YardageBand::new(0, 0));
        assert_eq!(base_band(CoreOffenseFamily::Kneel), YardageBand::new(-1, -1));
    }

    #[test]
    fn test_base_and_qb_spy_are_unadjusted() {
        for offense in CoreOffenseFamily::ALL {
            assert_eq!(band(offense, CoreDefenseFamily::Base), base_band(offense));
            assert_eq!(band(offense, CoreDefenseFamily::QbSpy), base_band(offense));
        }
    }

    #[test]
    fn test_run_focus() {
        assert_eq!(
            band(CoreOffenseFamily::InsideRun, CoreDefenseFamily::RunFocus),
            YardageBand::new(-4, 5)
        );
        assert_eq!(
            band(CoreOffenseFamily::ShortPass, CoreDefenseFamily::RunFocus),
            YardageBand::new(-5, 15)
        );
    }

    #[test]
    fn test_run_blitz() {
        assert_eq!(
            band(CoreOffenseFamily::OutsideRun, CoreDefenseFamily::RunBlitz),
            YardageBand::new(-6, 9)
        );
        assert_eq!(
            band(CoreOffenseFamily::DeepPass, CoreDefenseFamily::RunBlitz),
            YardageBand::new(-15, 35)
        );
    }

    #[test]
    fn test_pass_focus() {
        assert_eq!(
            band(CoreOffenseFamily::QuickPass, CoreDefenseFamily::PassFocus),
            YardageBand::new(-7, 7)
        );
        assert_eq!(
            band(CoreOffenseFamily::OptionRun, CoreDefenseFamily::PassFocus),
            YardageBand::new(-3, 14)
        );
    }

    #[test]
    fn test_pass_blitz() {
        assert_eq!(
            band(CoreOffenseFamily::PlayAction, CoreDefenseFamily::PassBlitz),
            YardageBand::new(-13, 33)
        );
        assert_eq!(
            band(CoreOffenseFamily::InsideRun, CoreDefenseFamily::PassBlitz),
            YardageBand::new(-4, 6)
        );
    }

    #[test]
    fn test_all_out_blitz_hits_floor_and_ceiling() {
        assert_eq!(
            band(CoreOffenseFamily::DeepPass, CoreDefenseFamily::AllOutBlitz),
            YardageBand::new(-15, 50)
        );
        assert_eq!(
            band(CoreOffenseFamily::InsideRun, CoreDefenseFamily::AllOutBlitz),
            YardageBand::new(-12, 21)
        );
    }

    #[test]
    fn test_prevent() {
        assert_eq!(
            band(CoreOffenseFamily::ScreenPass, CoreDefenseFamily::Prevent),
            YardageBand::new(-6, 22)
        );
        assert_eq!(
            band(CoreOffenseFamily::DeepPass, CoreDefenseFamily::Prevent),
            YardageBand::new(-13, 30)
        );
    }

    #[test]
    fn test_contain() {
        assert_eq!(
            band(CoreOffenseFamily::DeepPass, CoreDefenseFamily::Contain),
            YardageBand::new(-3, 12)
        );
        assert_eq!(
            band(CoreOffenseFamily::InsideRun, CoreDefenseFamily::Contain),
            YardageBand::new(-2, 6)
        );
    }

    #[test]
    fn test_inverted_band_is_swapped() {
        // Kneel (-1..-1) under prevent becomes (-4..-6) before ordering
        assert_eq!(
            band(CoreOffenseFamily::Kneel, CoreDefenseFamily::Prevent),
            YardageBand::new(-6, -4)
        );
    }

    #[test]
    fn test_every_matchup_is_bounded() {
        for offense in CoreOffenseFamily::ALL {
            for defense in CoreDefenseFamily::ALL {
                let b = band(offense, defense);
                assert!(YARDS_FLOOR <= b.min, "{offense} vs {defense}");
                assert!(b.min <= b.max, "{offense} vs {defense}");
                assert!(b.max <= YARDS_CEILING, "{offense} vs {defense}");
            }
        }
    }

    #[test]
    fn test_width() {
        assert_eq!(YardageBand::new(-2, 6).width(), 9);
        assert_eq!(YardageBand::new(0, 0).width(), 1);
    }

    #[test]
    fn test_sample_stays_in_band() {
        let mut rng = GameRng::new(42);
        let b = band(CoreOffenseFamily::ScreenPass, CoreDefenseFamily::PassBlitz);

        for _ in 0..1000 {
            assert!(b.contains(sample(b, &mut rng)));
        }
    }
}
