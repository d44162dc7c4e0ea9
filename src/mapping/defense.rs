//! Defense flavor → [`CoreDefenseFamily`].

use super::family::CoreDefenseFamily;
use super::normalize_identifier;
use crate::calls::DefensePlayFlavor;

/// Family used when nothing matches.
pub const FALLBACK: CoreDefenseFamily = CoreDefenseFamily::Base;

/// Map any defense flavor identifier to its family. Never fails.
#[must_use]
pub fn defense_family_for(identifier: &str) -> CoreDefenseFamily {
    let name = normalize_identifier(identifier);
    match name.as_str() {
        "BASE" => CoreDefenseFamily::Base,
        "RUN_FOCUS" | "GOAL_LINE_SOLD_OUT" => CoreDefenseFamily::RunFocus,
        "RUN_BLITZ" => CoreDefenseFamily::RunBlitz,
        "PASS_FOCUS" => CoreDefenseFamily::PassFocus,
        "PASS_BLITZ" => CoreDefenseFamily::PassBlitz,
        "ALL_OUT_BLITZ" => CoreDefenseFamily::AllOutBlitz,
        "PREVENT" => CoreDefenseFamily::Prevent,
        "CONTAIN" => CoreDefenseFamily::Contain,
        "QB_SPY" => CoreDefenseFamily::QbSpy,
        _ => {
            log::trace!("unrecognized defense flavor {identifier:?}, using {FALLBACK}");
            FALLBACK
        }
    }
}

impl From<DefensePlayFlavor> for CoreDefenseFamily {
    fn from(flavor: DefensePlayFlavor) -> Self {
        match flavor {
            DefensePlayFlavor::Base => CoreDefenseFamily::Base,
            DefensePlayFlavor::RunFocus | DefensePlayFlavor::GoalLineSoldOut => {
                CoreDefenseFamily::RunFocus
            }
            DefensePlayFlavor::RunBlitz => CoreDefenseFamily::RunBlitz,
            DefensePlayFlavor::PassFocus => CoreDefenseFamily::PassFocus,
            DefensePlayFlavor::PassBlitz => CoreDefenseFamily::PassBlitz,
            DefensePlayFlavor::AllOutBlitz => CoreDefenseFamily::AllOutBlitz,
            DefensePlayFlavor::Prevent => CoreDefenseFamily::Prevent,
            DefensePlayFlavor::Contain => CoreDefenseFamily::Contain,
            DefensePlayFlavor::QbSpy => CoreDefenseFamily::QbSpy,
        }
    }
}
