//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{LevelConfig, config_for};
use crate::consts::SPOT_VARIANTS;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Spots spawn and can be cleared
    Playing,
    /// Level-clear banner is up; no spawning, no input
    Cleared,
}

/// Which piece of spot art to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotVariant(u8);

impl SpotVariant {
    pub const ALL: [SpotVariant; SPOT_VARIANTS] = [
        SpotVariant(0),
        SpotVariant(1),
        SpotVariant(2),
        SpotVariant(3),
        SpotVariant(4),
        SpotVariant(5),
    ];

    /// Wraps out-of-range indices back into the variant set
    pub fn from_index(index: usize) -> Self {
        Self((index % SPOT_VARIANTS) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A clearable spot on the garment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: u32,
    /// Top-left corner in surface coordinates
    pub pos: Vec2,
    pub variant: SpotVariant,
}

/// One-shot notifications for sound/visual side effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SpotRemoved { variant: SpotVariant, pos: Vec2 },
    LevelCleared { level: u32 },
    LevelStarted { level: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Active level parameters
    pub config: LevelConfig,
    /// Spots cleared in the current level
    pub cleared: u32,
    pub phase: Phase,
    /// Live spots, in no particular order
    pub spots: Vec<Spot>,
    /// Pending side effects, drained by the shell
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next spot ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state at level 1
    pub fn new() -> Self {
        Self {
            config: config_for(1),
            cleared: 0,
            phase: Phase::Playing,
            spots: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn level(&self) -> u32 {
        self.config.level
    }

    pub fn is_banner_showing(&self) -> bool {
        self.phase == Phase::Cleared
    }

    /// Allocate a new spot ID
    pub fn next_spot_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Insert a spot into the registry
    pub fn add_spot(&mut self, pos: Vec2, variant: SpotVariant) -> u32 {
        let id = self.next_spot_id();
        self.spots.push(Spot { id, pos, variant });
        id
    }

    /// Start playing `level` from scratch
    pub(crate) fn enter_level(&mut self, level: u32) {
        self.config = config_for(level);
        self.cleared = 0;
        self.phase = Phase::Playing;
        self.spots.clear();
    }

    /// Count one cleared spot. Returns true if this clear finished the level.
    pub fn on_spot_cleared(&mut self) -> bool {
        self.cleared += 1;
        if self.phase == Phase::Cleared || !self.config.quota.is_met_by(self.cleared) {
            return false;
        }

        self.phase = Phase::Cleared;
        self.spots.clear();
        self.events.push(GameEvent::LevelCleared {
            level: self.config.level,
        });
        log::info!(
            "Level {} cleared ({} spots)",
            self.config.level,
            self.cleared
        );
        true
    }
}
