//! One-shot result of a resolved play.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::mapping::{CoreDefenseFamily, CoreOffenseFamily};

/// What happened on one play.
///
/// The `new_*` fields mirror the returned `GameState` so display code does
/// not have to re-derive them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPlay {
    /// Offense as determined by possession, not by the call.
    pub offense_side: Side,
    pub defense_side: Side,
    pub offense_family: CoreOffenseFamily,
    pub defense_family: CoreDefenseFamily,

    /// Signed yards from the offense's perspective.
    pub yards_gained: i32,
    /// Play-by-play line.
    pub description: String,

    pub first_down: bool,
    /// Interception or fumble. Never set by the current model.
    pub turnover: bool,
    pub touchdown: bool,

    /// Seconds taken off the clock.
    pub clock_runoff: u32,

    // === Snapshot after the play ===
    pub new_down: u8,
    pub new_distance: i32,
    pub new_yard_line: i32,
    pub new_time_remaining: u32,
}

/// `"PLAY_ACTION_SHOT"` → `"Play Action Shot"`.
pub(crate) fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("INSIDE_ZONE"), "Inside Zone");
        assert_eq!(title_case("QB_SNEAK"), "Qb Sneak");
        assert_eq!(title_case("GO"), "Go");
        assert_eq!(title_case(""), "");
    }
}
