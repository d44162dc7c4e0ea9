//! Clock runoff per play.
//!
//! Coarse on purpose: no two-minute warning, out-of-bounds or penalty
//! stoppages. Spikes and kneels take a fixed short runoff, everything else
//! depends only on whether the play gained ground.

use crate::core::ClockConfig;
use crate::mapping::CoreOffenseFamily;

/// Computes seconds consumed by a play.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockModel {
    config: ClockConfig,
}

impl ClockModel {
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    /// Seconds consumed by a play of `offense` that gained `yards_gained`.
    #[must_use]
    pub fn runoff(&self, offense: CoreOffenseFamily, yards_gained: i32) -> u32 {
        if offense.is_clock_management() {
            self.config.spike_kneel_seconds
        } else if yards_gained <= 0 {
            self.config.no_gain_seconds
        } else {
            self.config.gain_seconds
        }
    }
}

/// Runoff under the default clock rules (5 / 15 / 25 seconds).
#[must_use]
pub fn clock_runoff(offense: CoreOffenseFamily, yards_gained: i32) -> u32 {
    ClockModel::default().runoff(offense, yards_gained)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runoff() {
        assert_eq!(clock_runoff(CoreOffenseFamily::Spike, 0), 5);
        assert_eq!(clock_runoff(CoreOffenseFamily::Kneel, -1), 5);
        assert_eq!(clock_runoff(CoreOffenseFamily::InsideRun, 0), 15);
        assert_eq!(clock_runoff(CoreOffenseFamily::DeepPass, -8), 15);
        assert_eq!(clock_runoff(CoreOffenseFamily::ShortPass, 1), 25);
        assert_eq!(clock_runoff(CoreOffenseFamily::PlayAction, 40), 25);
    }

    #[test]
    fn test_configured_runoff() {
        let model = ClockModel::new(ClockConfig {
            spike_kneel_seconds: 3,
            no_gain_seconds: 10,
            gain_seconds: 40,
        });

        assert_eq!(model.runoff(CoreOffenseFamily::Spike, 0), 3);
        assert_eq!(model.runoff(CoreOffenseFamily::OptionRun, -2), 10);
        assert_eq!(model.runoff(CoreOffenseFamily::OptionRun, 2), 40);
    }
}
