//! Game controller
//!
//! Owns the state, the layout, the spawn timer, the RNG and the pending
//! level-advance timer. Every callback (frame, pointer, reset) goes through
//! `&mut Game`, so a pointer pass can never interleave with a spawn tick.

use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::hit::{HitOutcome, hit_test};
use super::layout::Layout;
use super::spawn::{SpawnScheduler, spawn_spot};
use super::state::{GameEvent, GameState};
use crate::consts::LEVEL_TRANSITION_MS;

/// Delay between the level-clear banner appearing and the next level starting
pub const LEVEL_TRANSITION: Duration = Duration::from_millis(LEVEL_TRANSITION_MS);

/// The single owner of all mutable game state
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    layout: Layout,
    spawner: SpawnScheduler,
    rng: Pcg32,
    /// Time left before the post-banner advance fires
    pending_advance: Option<Duration>,
}

impl Game {
    /// Create a game on a surface of the given size, starting at level 1
    pub fn new(seed: u64, surface_width: f32, surface_height: f32) -> Self {
        let state = GameState::new();
        let spawner = SpawnScheduler::new(state.config.spawn_interval());
        let mut game = Self {
            state,
            layout: Layout::new(surface_width, surface_height),
            spawner,
            rng: Pcg32::seed_from_u64(seed),
            pending_advance: None,
        };
        game.reset();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn spawn_interval(&self) -> Duration {
        self.spawner.interval()
    }

    /// Whether a post-banner level advance is scheduled
    pub fn advance_pending(&self) -> bool {
        self.pending_advance.is_some()
    }

    /// Back to level 1 with an empty registry. Cancels any pending advance.
    pub fn reset(&mut self) {
        if self.pending_advance.take().is_some() {
            log::debug!("Cancelled pending level advance");
        }
        self.start_level(1);
    }

    /// Advance virtual time: fire due spawn ticks and the delayed level advance
    pub fn tick(&mut self, dt: Duration) {
        match self.pending_advance {
            Some(remaining) if dt >= remaining => {
                self.run_spawner(remaining);
                self.pending_advance = None;
                let next = self.state.level().saturating_add(1);
                self.start_level(next);
                // Time past the advance belongs to the new level's timer
                self.run_spawner(dt - remaining);
            }
            Some(remaining) => {
                self.pending_advance = Some(remaining - dt);
                self.run_spawner(dt);
            }
            None => self.run_spawner(dt),
        }
    }

    /// Handle a pointer at `point` (surface coordinates)
    pub fn pointer(&mut self, point: Vec2) -> HitOutcome {
        let outcome = hit_test(&mut self.state, point);
        if outcome.level_cleared {
            self.pending_advance = Some(LEVEL_TRANSITION);
        }
        outcome
    }

    /// Take all side-effect events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    fn run_spawner(&mut self, dt: Duration) {
        let fired = self.spawner.advance(dt);
        for _ in 0..fired {
            spawn_spot(&mut self.state, &self.layout.spawn_region, &mut self.rng);
        }
    }

    fn start_level(&mut self, level: u32) {
        self.state.enter_level(level);
        self.spawner.rearm(self.state.config.spawn_interval());
        self.state.events.push(GameEvent::LevelStarted {
            level: self.state.level(),
        });
        log::info!(
            "Level {} started: spawn every {} ms, quota {:?}",
            self.state.level(),
            self.state.config.spawn_interval_ms,
            self.state.config.quota
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::sim::hit::spot_center;
    use crate::sim::level::Quota;
    use crate::sim::state::{Phase, SpotVariant};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Clear one spot by placing it and hitting its center
    fn clear_one(game: &mut Game) -> HitOutcome {
        let pos = game.layout().spawn_region.center();
        game.state.add_spot(pos, SpotVariant::ALL[0]);
        game.pointer(spot_center(pos))
    }

    #[test]
    fn test_new_game_starts_at_level_one() {
        let mut game = Game::new(1, 800.0, 600.0);
        assert_eq!(game.state().level(), 1);
        assert_eq!(game.spawn_interval(), ms(2000));
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::LevelStarted { level: 1 }]
        );
    }

    #[test]
    fn test_spawn_ticks_follow_interval() {
        let mut game = Game::new(1, 800.0, 600.0);
        game.tick(ms(1999));
        assert!(game.state().spots.is_empty());
        game.tick(ms(1));
        assert_eq!(game.state().spots.len(), 1);
        game.tick(ms(6000));
        assert_eq!(game.state().spots.len(), 4);
    }

    #[test]
    fn test_level_one_to_two() {
        let mut game = Game::new(42, 800.0, 600.0);
        game.tick(ms(500));

        for i in 0..5 {
            let outcome = clear_one(&mut game);
            assert_eq!(outcome.removed, 1, "hit {}", i);
            assert!(!outcome.level_cleared);
        }
        game.tick(ms(1600));
        assert!(!game.state().spots.is_empty());

        let outcome = clear_one(&mut game);
        assert!(outcome.level_cleared);
        assert_eq!(game.state().phase, Phase::Cleared);
        assert!(game.state().spots.is_empty());
        assert!(game.advance_pending());

        // Banner: no spawns for the whole delay
        game.tick(ms(2999));
        assert_eq!(game.state().phase, Phase::Cleared);
        assert!(game.state().spots.is_empty());

        game.tick(ms(1));
        assert_eq!(game.state().phase, Phase::Playing);
        assert_eq!(game.state().level(), 2);
        assert_eq!(game.state().cleared, 0);
        assert_eq!(game.spawn_interval(), ms(1600));
        assert_eq!(game.state().config.quota, Quota::Clears(10));
        assert!(!game.advance_pending());

        let events = game.drain_events();
        assert!(events.contains(&GameEvent::LevelCleared { level: 1 }));
        assert_eq!(events.last(), Some(&GameEvent::LevelStarted { level: 2 }));
    }

    #[test]
    fn test_long_frame_over_advance_spawns_on_new_level() {
        let mut game = Game::new(5, 800.0, 600.0);
        for _ in 0..6 {
            clear_one(&mut game);
        }
        assert!(game.advance_pending());

        // One frame covering the banner plus a full level-2 interval
        game.tick(LEVEL_TRANSITION + ms(1600));
        assert_eq!(game.state().level(), 2);
        assert_eq!(game.state().spots.len(), 1);

        // The timer phase carried over, so the next spawn is a full interval out
        game.tick(ms(1599));
        assert_eq!(game.state().spots.len(), 1);
        game.tick(ms(1));
        assert_eq!(game.state().spots.len(), 2);
    }

    #[test]
    fn test_reaches_chaos_and_stays() {
        let mut game = Game::new(3, 1024.0, 768.0);
        for quota in [6, 10, 25, 30] {
            for _ in 0..quota {
                clear_one(&mut game);
            }
            assert_eq!(game.state().phase, Phase::Cleared);
            game.tick(LEVEL_TRANSITION);
        }
        assert_eq!(game.state().level(), 5);
        assert_eq!(game.spawn_interval(), ms(50));

        for _ in 0..2000 {
            clear_one(&mut game);
        }
        assert_eq!(game.state().phase, Phase::Playing);
        assert_eq!(game.state().cleared, 2000);

        game.tick(ms(1000));
        assert_eq!(game.state().spots.len(), 20);
    }

    #[test]
    fn test_reset_from_banner_cancels_advance() {
        let mut game = Game::new(9, 800.0, 600.0);
        for _ in 0..6 {
            clear_one(&mut game);
        }
        assert!(game.advance_pending());

        game.tick(ms(1000));
        game.reset();
        assert!(!game.advance_pending());
        assert_eq!(game.state().phase, Phase::Playing);
        assert_eq!(game.state().level(), 1);
        assert_eq!(game.state().cleared, 0);
        assert!(game.state().spots.is_empty());
        assert_eq!(game.spawn_interval(), ms(2000));
        assert_eq!(game.state().config.quota, Quota::Clears(6));

        // The stale advance must not bump us to level 2
        game.tick(ms(5000));
        assert_eq!(game.state().level(), 1);
    }

    #[test]
    fn test_reset_mid_level() {
        let mut game = Game::new(9, 800.0, 600.0);
        for _ in 0..3 {
            clear_one(&mut game);
        }
        game.tick(ms(4000));
        game.reset();
        assert_eq!(game.state().cleared, 0);
        assert!(game.state().spots.is_empty());
        // Timer restarted, so the old elapsed time does not carry over
        game.tick(ms(1999));
        assert!(game.state().spots.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = Game::new(99999, 800.0, 600.0);
        let mut b = Game::new(99999, 800.0, 600.0);
        for _ in 0..10 {
            a.tick(ms(2000));
            b.tick(ms(2000));
        }
        assert_eq!(a.state().spots, b.state().spots);
    }

    proptest! {
        #[test]
        fn cleared_never_exceeds_quota_while_playing(
            seed in any::<u64>(),
            steps in prop::collection::vec((0u64..2500, 0.0f32..1.0, 0.0f32..1.0), 1..200),
        ) {
            let mut game = Game::new(seed, 800.0, 600.0);
            for (dt, u, v) in steps {
                game.tick(ms(dt));
                let region = game.layout().spawn_region;
                game.pointer(region.lerp(Vec2::new(u, v)) + Vec2::splat(10.0));

                let state = game.state();
                match state.phase {
                    Phase::Playing => {
                        if let Some(required) = state.config.quota.required() {
                            prop_assert!(state.cleared <= required);
                        }
                    }
                    Phase::Cleared => prop_assert!(state.spots.is_empty()),
                }
            }
        }
    }
}
