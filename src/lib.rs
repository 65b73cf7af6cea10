//! Sweater Spots - clear the spots off a wobbling sweater
//!
//! Core modules:
//! - `sim`: Deterministic game engine (layout, spawning, hits, level progression)
//! - `renderer`: Frame composition over an abstract drawing surface
//! - `platform`: Browser/native platform abstraction (pointer normalization)
//! - `settings`: Player preferences and runtime knobs
//! - `audio`: Sound effects for game events

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Garment (sweater) image dimensions
    pub const GARMENT_WIDTH: f32 = 314.0;
    pub const GARMENT_HEIGHT: f32 = 315.0;
    /// The garment is anchored this far up/left of the surface center
    pub const GARMENT_CENTER_OFFSET: f32 = 157.0;

    /// Limb (hand) image dimensions
    pub const LIMB_WIDTH: f32 = 70.0;
    pub const LIMB_HEIGHT: f32 = 120.0;

    /// Spawn region size, centered on the garment
    pub const SPAWN_AREA_WIDTH: f32 = 160.0;
    pub const SPAWN_AREA_HEIGHT: f32 = 210.0;
    /// Spawn region is nudged left of center by this much
    pub const SPAWN_AREA_SHIFT_X: f32 = 30.0;

    /// Spots are drawn as squares of this size
    pub const SPOT_SIZE: f32 = 20.0;
    /// Pointer must come this close to a spot's center to clear it
    pub const HIT_RADIUS: f32 = 10.0;
    /// Number of spot art variants
    pub const SPOT_VARIANTS: usize = 6;

    /// Animation phase advance per rendered frame (radians)
    pub const SWING_SPEED: f32 = 0.05;
    /// Limb swing amplitude
    pub const SWING_AMPLITUDE: f32 = 15.0;
    /// Garment follows the limbs at half amplitude
    pub const GARMENT_SWAY: f32 = 0.5;
    /// Spots ride along at a smaller amplitude
    pub const SPOT_SWAY: f32 = 0.3;

    /// Banner is drawn at this multiple of its natural size
    pub const BANNER_SCALE: f32 = 2.0;
    /// Counter baseline sits this far below the garment
    pub const COUNTER_OFFSET_Y: f32 = 40.0;

    /// Delay between clearing a level and the next one starting (ms)
    pub const LEVEL_TRANSITION_MS: u64 = 3000;
}
