//! The play resolver: (state, call, rng) → (new state, result).
//!
//! ## Pipeline
//!
//! 1. Offense and defense come from `state.possession`, never the call
//! 2. Both selections collapse to canonical families
//! 3. Spike and kneel take fixed yardage; everything else samples its band
//! 4. Touchdown and first down are decided from the field advance
//! 5. The state machine moves downs, distance and the ball
//! 6. A touchdown credits points and restarts with a kickoff
//! 7. The clock runs off
//!
//! Resolution is total: any `GameState` / `PlayCall` pair produces a result.

use crate::calls::PlayCall;
use crate::core::{ConfigError, EngineConfig, GameRng, GameState, RollSource};
use crate::mapping::{CoreDefenseFamily, CoreOffenseFamily};
use crate::model::{band, sample, ClockModel};

use super::result::{title_case, ResolvedPlay};

/// Anything that can turn a play call into a new game state.
///
/// Implementations must draw all randomness from `rng` so a seeded source
/// replays identically.
pub trait PlayResolver {
    /// Resolve one play.
    fn resolve_play(
        &self,
        state: &GameState,
        call: &PlayCall,
        rng: &mut dyn RollSource,
    ) -> (GameState, ResolvedPlay);

    /// Resolve a series of plays, feeding each new state into the next.
    ///
    /// Returns the final state and one result per call.
    fn resolve_series(
        &self,
        state: &GameState,
        calls: &[PlayCall],
        rng: &mut dyn RollSource,
    ) -> (GameState, Vec<ResolvedPlay>) {
        let mut current = state.clone();
        let mut results = Vec::with_capacity(calls.len());

        for call in calls {
            let (next, result) = self.resolve_play(&current, call, rng);
            current = next;
            results.push(result);
        }

        (current, results)
    }
}

/// Standard family-based resolver.
#[derive(Clone, Debug, Default)]
pub struct PlayEngine {
    config: EngineConfig,
    clock: ClockModel,
}

impl PlayEngine {
    /// Create an engine after checking the config.
    pub fn try_new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            clock: ClockModel::new(config.clock.clone()),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve one play using `rng` for the yardage roll.
    pub fn resolve(
        &self,
        state: &GameState,
        call: &PlayCall,
        rng: &mut dyn RollSource,
    ) -> (GameState, ResolvedPlay) {
        let offense_side = state.offense_side();
        let defense_side = state.defense_side();
        if call.offense_side() != offense_side {
            log::debug!(
                "play call declares {} on offense but {} has the ball; trusting game state",
                call.offense_side(),
                offense_side
            );
        }

        let offense_family = CoreOffenseFamily::from(call.offense.play_type);
        let defense_family = CoreDefenseFamily::from(call.defense.flavor);

        let yards_gained = match offense_family {
            CoreOffenseFamily::Spike => 0,
            CoreOffenseFamily::Kneel => -1,
            _ => sample(band(offense_family, defense_family), rng),
        };

        let touchdown = state.advance(yards_gained).is_touchdown();
        let first_down = !touchdown && yards_gained >= state.distance;
        // No interception or fumble model yet
        let turnover = false;

        let after_downs =
            state.next_down_after_play(yards_gained, first_down, touchdown, turnover);

        let scored = if touchdown {
            log::info!(
                "{} touchdown on {} ({:+} yards)",
                offense_side,
                call.offense.play_type,
                yards_gained
            );
            after_downs
                .with_added_points(offense_side, self.config.scoring.touchdown_points)
                .with_kickoff(defense_side, self.config.scoring.kickoff_spot)
        } else {
            after_downs
        };

        let clock_runoff = self.clock.runoff(offense_family, yards_gained);
        let next = scored.with_clock_runoff(clock_runoff);

        let mut description = format!(
            "{} {} (core={}) vs {} (core={}) for {:+} yards",
            offense_side,
            title_case(call.offense.play_type.name()),
            offense_family,
            title_case(call.defense.flavor.name()),
            defense_family,
            yards_gained
        );
        if touchdown {
            description.push_str(" - TOUCHDOWN");
        }
        log::debug!("{description}");

        let result = ResolvedPlay {
            offense_side,
            defense_side,
            offense_family,
            defense_family,
            yards_gained,
            description,
            first_down,
            turnover,
            touchdown,
            clock_runoff,
            new_down: next.down,
            new_distance: next.distance,
            new_yard_line: next.yard_line,
            new_time_remaining: next.time_remaining,
        };

        (next, result)
    }

    /// Resolve one play with a freshly seeded, non-deterministic RNG.
    pub fn resolve_with_entropy(&self, state: &GameState, call: &PlayCall) -> (GameState, ResolvedPlay) {
        let mut rng = GameRng::from_entropy();
        self.resolve(state, call, &mut rng)
    }
}

impl PlayResolver for PlayEngine {
    fn resolve_play(
        &self,
        state: &GameState,
        call: &PlayCall,
        rng: &mut dyn RollSource,
    ) -> (GameState, ResolvedPlay) {
        self.resolve(state, call, rng)
    }
}

/// Resolve one play under the default rules.
pub fn resolve_play(
    state: &GameState,
    call: &PlayCall,
    rng: &mut dyn RollSource,
) -> (GameState, ResolvedPlay) {
    PlayEngine::default().resolve(state, call, rng)
}
