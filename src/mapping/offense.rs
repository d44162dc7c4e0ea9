//! Offense play type → [`CoreOffenseFamily`].
//!
//! ## Order
//!
//! 1. Exact legacy identifiers (the simplified names of older front ends)
//! 2. Ordered keyword rules, first match wins
//! 3. `ShortPass` fallback
//!
//! Keywords overlap (`ROLL_OUT` contains `OUT`, `QB_DRAW` contains `QB_`),
//! so rule order is part of the contract. Screens and play-action are
//! claimed before any run keyword, runs before any pass-depth keyword.

use super::family::CoreOffenseFamily;
use super::normalize_identifier;
use crate::calls::OffensePlayType;

/// Identifiers used by earlier, simpler play catalogs.
///
/// `QB_SNEAK` is treated as a fixed no-gain play like a spike.
const LEGACY: &[(&str, CoreOffenseFamily)] = &[
    ("INSIDE_RUN", CoreOffenseFamily::InsideRun),
    ("OUTSIDE_RUN", CoreOffenseFamily::OutsideRun),
    ("DRAW", CoreOffenseFamily::InsideRun),
    ("QB_SNEAK", CoreOffenseFamily::Spike),
    ("QB_KEEPER", CoreOffenseFamily::OptionRun),
    ("SHORT_PASS", CoreOffenseFamily::ShortPass),
    ("INTERMEDIATE_PASS", CoreOffenseFamily::IntermediatePass),
    ("DEEP_SHOT", CoreOffenseFamily::DeepPass),
    ("SCREEN_PASS", CoreOffenseFamily::ScreenPass),
    ("PLAY_ACTION", CoreOffenseFamily::PlayAction),
    ("SPIKE", CoreOffenseFamily::Spike),
    ("KNEEL", CoreOffenseFamily::Kneel),
];

/// How a rule tests a normalized identifier.
#[derive(Clone, Copy, Debug)]
enum Matcher {
    /// Identifier equals one of these.
    Exact(&'static [&'static str]),
    /// Identifier contains one of these.
    Contains(&'static [&'static str]),
}

impl Matcher {
    fn matches(self, name: &str) -> bool {
        match self {
            Matcher::Exact(names) => names.contains(&name),
            Matcher::Contains(keywords) => keywords.iter().any(|k| name.contains(k)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Rule {
    matcher: Matcher,
    family: CoreOffenseFamily,
}

const fn rule(matcher: Matcher, family: CoreOffenseFamily) -> Rule {
    Rule { matcher, family }
}

const RULES: &[Rule] = &[
    // Game management
    rule(Matcher::Exact(&["SPIKE"]), CoreOffenseFamily::Spike),
    rule(Matcher::Exact(&["KNEEL"]), CoreOffenseFamily::Kneel),
    // Screens
    rule(Matcher::Contains(&["SCREEN"]), CoreOffenseFamily::ScreenPass),
    // Play-action and movement
    rule(Matcher::Contains(&["PLAY_ACTION"]), CoreOffenseFamily::PlayAction),
    rule(Matcher::Exact(&["BOOTLEG", "ROLL_OUT"]), CoreOffenseFamily::PlayAction),
    // Runs
    rule(
        Matcher::Contains(&["INSIDE", "POWER", "COUNTER", "TRAP", "ISO", "DRAW", "DELAY"]),
        CoreOffenseFamily::InsideRun,
    ),
    rule(
        Matcher::Contains(&["OUTSIDE", "SWEEP", "TOSS", "JET", "REVERSE"]),
        CoreOffenseFamily::OutsideRun,
    ),
    rule(
        Matcher::Contains(&["OPTION", "KEEPER", "SNEAK", "QB_"]),
        CoreOffenseFamily::OptionRun,
    ),
    // Passes by depth
    rule(
        Matcher::Contains(&["QUICK", "HITCH", "SLANT", "BUBBLE", "SMOKE"]),
        CoreOffenseFamily::QuickPass,
    ),
    rule(
        Matcher::Contains(&["MESH", "OUT", "CROSS", "SEAM"]),
        CoreOffenseFamily::ShortPass,
    ),
    rule(
        Matcher::Contains(&["DIG", "COMEBACK", "DEEP_OUT", "CROSSERS"]),
        CoreOffenseFamily::IntermediatePass,
    ),
    rule(
        Matcher::Contains(&["GO", "POST", "CORNER", "FADE", "DEEP"]),
        CoreOffenseFamily::DeepPass,
    ),
];

/// Family used when nothing matches.
pub const FALLBACK: CoreOffenseFamily = CoreOffenseFamily::ShortPass;

/// Map any offense play identifier to its family. Never fails.
#[must_use]
pub fn offense_family_for(identifier: &str) -> CoreOffenseFamily {
    let name = normalize_identifier(identifier);
    classify(&name).unwrap_or_else(|| {
        log::trace!("unrecognized play type {identifier:?}, using {FALLBACK}");
        FALLBACK
    })
}

/// Classify an already-normalized name.
fn classify(name: &str) -> Option<CoreOffenseFamily> {
    if let Some(&(_, family)) = LEGACY.iter().find(|(legacy, _)| *legacy == name) {
        return Some(family);
    }

    RULES
        .iter()
        .find(|rule| rule.matcher.matches(name))
        .map(|rule| rule.family)
}

impl From<OffensePlayType> for CoreOffenseFamily {
    fn from(play_type: OffensePlayType) -> Self {
        classify(play_type.name()).unwrap_or(FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_identifiers() {
        assert_eq!(offense_family_for("INSIDE_RUN"), CoreOffenseFamily::InsideRun);
        assert_eq!(offense_family_for("DEEP_SHOT"), CoreOffenseFamily::DeepPass);
        assert_eq!(offense_family_for("QB_KEEPER"), CoreOffenseFamily::OptionRun);
        assert_eq!(offense_family_for("QB_SNEAK"), CoreOffenseFamily::Spike);
        assert_eq!(offense_family_for("screen_pass"), CoreOffenseFamily::ScreenPass);
    }

    #[test]
    fn test_catalog_runs() {
        use OffensePlayType::*;

        for play in [InsideZone, Power, Counter, Trap, Iso, Draw, Delay] {
            assert_eq!(CoreOffenseFamily::from(play), CoreOffenseFamily::InsideRun, "{play}");
        }
        for play in [OutsideZone, Sweep, Toss, JetSweep, Reverse] {
            assert_eq!(CoreOffenseFamily::from(play), CoreOffenseFamily::OutsideRun, "{play}");
        }
        for play in [QbKeeper, ReadOption, SpeedOption] {
            assert_eq!(CoreOffenseFamily::from(play), CoreOffenseFamily::OptionRun, "{play}");
        }
    }

    #[test]
    fn test_catalog_passes() {
        use OffensePlayType::*;

        for play in [QuickSlant, QuickOut, QuickHitch] {
            assert_eq!(CoreOffenseFamily::from(play), CoreOffenseFamily::QuickPass, "{play}");
        }
        for play in [BubbleScreen, SmokeScreen, RbScreen, TeScreen] {
            assert_eq!(CoreOffenseFamily::from(play), CoreOffenseFamily::ScreenPass, "{play}");
        }
        for play in [Dig, Comeback] {
            assert_eq!(
                CoreOffenseFamily::from(play),
                CoreOffenseFamily::IntermediatePass,
                "{play}"
            );
        }
        for play in [Go, Post, Corner, Fade] {
            assert_eq!(CoreOffenseFamily::from(play), CoreOffenseFamily::DeepPass, "{play}");
        }
        for play in [PlayActionShort, PlayActionShot, Bootleg, RollOut] {
            assert_eq!(CoreOffenseFamily::from(play), CoreOffenseFamily::PlayAction, "{play}");
        }
    }

    #[test]
    fn test_earlier_rules_win_on_overlap() {
        // The short-pass keywords precede the intermediate and deep ones
        assert_eq!(CoreOffenseFamily::from(OffensePlayType::DeepOut), CoreOffenseFamily::ShortPass);
        assert_eq!(CoreOffenseFamily::from(OffensePlayType::Crossers), CoreOffenseFamily::ShortPass);
        assert_eq!(CoreOffenseFamily::from(OffensePlayType::DeepCross), CoreOffenseFamily::ShortPass);
        assert_eq!(CoreOffenseFamily::from(OffensePlayType::Mesh), CoreOffenseFamily::ShortPass);
        assert_eq!(CoreOffenseFamily::from(OffensePlayType::Seam), CoreOffenseFamily::ShortPass);

        // Runs are claimed before the QB_ option rule and any pass keyword
        assert_eq!(offense_family_for("QB_DRAW"), CoreOffenseFamily::InsideRun);
        assert_eq!(offense_family_for("DRAW_SCREEN"), CoreOffenseFamily::ScreenPass);
        assert_eq!(offense_family_for("QB_POWER_OUT"), CoreOffenseFamily::InsideRun);
    }

    #[test]
    fn test_game_management() {
        assert_eq!(CoreOffenseFamily::from(OffensePlayType::Spike), CoreOffenseFamily::Spike);
        assert_eq!(CoreOffenseFamily::from(OffensePlayType::Kneel), CoreOffenseFamily::Kneel);
        assert_eq!(CoreOffenseFamily::from(OffensePlayType::QbSneak), CoreOffenseFamily::Spike);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(offense_family_for("FLEA_FLICKER"), CoreOffenseFamily::ShortPass);
        assert_eq!(offense_family_for(""), CoreOffenseFamily::ShortPass);
    }

    #[test]
    fn test_catalog_and_string_paths_agree() {
        for play in OffensePlayType::ALL {
            assert_eq!(CoreOffenseFamily::from(play), offense_family_for(play.name()));
        }
    }
}
