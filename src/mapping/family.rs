//! Canonical offense and defense families.

use serde::{Deserialize, Serialize};

/// Canonical offensive category the yardage model reasons about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreOffenseFamily {
    InsideRun,
    OutsideRun,
    OptionRun,
    QuickPass,
    ShortPass,
    IntermediatePass,
    DeepPass,
    ScreenPass,
    PlayAction,
    Spike,
    Kneel,
}

impl CoreOffenseFamily {
    pub const ALL: [CoreOffenseFamily; 11] = [
        CoreOffenseFamily::InsideRun,
        CoreOffenseFamily::OutsideRun,
        CoreOffenseFamily::OptionRun,
        CoreOffenseFamily::QuickPass,
        CoreOffenseFamily::ShortPass,
        CoreOffenseFamily::IntermediatePass,
        CoreOffenseFamily::DeepPass,
        CoreOffenseFamily::ScreenPass,
        CoreOffenseFamily::PlayAction,
        CoreOffenseFamily::Spike,
        CoreOffenseFamily::Kneel,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CoreOffenseFamily::InsideRun => "INSIDE_RUN",
            CoreOffenseFamily::OutsideRun => "OUTSIDE_RUN",
            CoreOffenseFamily::OptionRun => "OPTION_RUN",
            CoreOffenseFamily::QuickPass => "QUICK_PASS",
            CoreOffenseFamily::ShortPass => "SHORT_PASS",
            CoreOffenseFamily::IntermediatePass => "INTERMEDIATE_PASS",
            CoreOffenseFamily::DeepPass => "DEEP_PASS",
            CoreOffenseFamily::ScreenPass => "SCREEN_PASS",
            CoreOffenseFamily::PlayAction => "PLAY_ACTION",
            CoreOffenseFamily::Spike => "SPIKE",
            CoreOffenseFamily::Kneel => "KNEEL",
        }
    }

    /// Designed runs.
    #[must_use]
    pub const fn is_run(self) -> bool {
        matches!(
            self,
            CoreOffenseFamily::InsideRun | CoreOffenseFamily::OutsideRun | CoreOffenseFamily::OptionRun
        )
    }

    /// Passes, including screens and play-action.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(
            self,
            CoreOffenseFamily::QuickPass
                | CoreOffenseFamily::ShortPass
                | CoreOffenseFamily::IntermediatePass
                | CoreOffenseFamily::DeepPass
                | CoreOffenseFamily::ScreenPass
                | CoreOffenseFamily::PlayAction
        )
    }

    /// Plays that attack underneath a prevent shell.
    #[must_use]
    pub const fn is_underneath(self) -> bool {
        matches!(
            self,
            CoreOffenseFamily::QuickPass
                | CoreOffenseFamily::ShortPass
                | CoreOffenseFamily::ScreenPass
                | CoreOffenseFamily::InsideRun
        )
    }

    /// Spike and kneel: fixed yardage, no roll.
    #[must_use]
    pub const fn is_clock_management(self) -> bool {
        matches!(self, CoreOffenseFamily::Spike | CoreOffenseFamily::Kneel)
    }
}

impl std::fmt::Display for CoreOffenseFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical defensive category the yardage model reasons about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreDefenseFamily {
    Base,
    RunFocus,
    RunBlitz,
    PassFocus,
    PassBlitz,
    AllOutBlitz,
    Prevent,
    Contain,
    QbSpy,
}

impl CoreDefenseFamily {
    pub const ALL: [CoreDefenseFamily; 9] = [
        CoreDefenseFamily::Base,
        CoreDefenseFamily::RunFocus,
        CoreDefenseFamily::RunBlitz,
        CoreDefenseFamily::PassFocus,
        CoreDefenseFamily::PassBlitz,
        CoreDefenseFamily::AllOutBlitz,
        CoreDefenseFamily::Prevent,
        CoreDefenseFamily::Contain,
        CoreDefenseFamily::QbSpy,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CoreDefenseFamily::Base => "BASE",
            CoreDefenseFamily::RunFocus => "RUN_FOCUS",
            CoreDefenseFamily::RunBlitz => "RUN_BLITZ",
            CoreDefenseFamily::PassFocus => "PASS_FOCUS",
            CoreDefenseFamily::PassBlitz => "PASS_BLITZ",
            CoreDefenseFamily::AllOutBlitz => "ALL_OUT_BLITZ",
            CoreDefenseFamily::Prevent => "PREVENT",
            CoreDefenseFamily::Contain => "CONTAIN",
            CoreDefenseFamily::QbSpy => "QB_SPY",
        }
    }
}

impl std::fmt::Display for CoreDefenseFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_and_pass_partition() {
        for family in CoreOffenseFamily::ALL {
            let classes = [family.is_run(), family.is_pass(), family.is_clock_management()];
            assert_eq!(
                classes.iter().filter(|&&c| c).count(),
                1,
                "{family} must be exactly one of run, pass, clock management"
            );
        }
    }

    #[test]
    fn test_underneath_set() {
        let underneath: Vec<_> = CoreOffenseFamily::ALL
            .into_iter()
            .filter(|f| f.is_underneath())
            .collect();
        assert_eq!(
            underneath,
            vec![
                CoreOffenseFamily::InsideRun,
                CoreOffenseFamily::QuickPass,
                CoreOffenseFamily::ShortPass,
                CoreOffenseFamily::ScreenPass,
            ]
        );
    }
}
