//! Screen layout: garment, limbs and the spot spawn region
//!
//! Everything is derived once from the surface size and never changes after.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle in surface coordinates (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Inclusive containment test
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.pos.x && p.x <= max.x && p.y >= self.pos.y && p.y <= max.y
    }

    /// Same rect moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// Map a unit-square sample (each axis in `[0, 1]`) onto this rect
    pub fn lerp(&self, t: Vec2) -> Vec2 {
        self.pos + self.size * t
    }
}

/// Fixed scene geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Drawable surface size
    pub surface: Vec2,
    pub garment: Rect,
    pub left_limb: Rect,
    pub right_limb: Rect,
    /// Where new spots may appear (top-left corner of the spot)
    pub spawn_region: Rect,
}

impl Layout {
    /// Compute the layout for a surface of the given size
    pub fn new(width: f32, height: f32) -> Self {
        let garment = Rect::new(
            width / 2.0 - GARMENT_CENTER_OFFSET,
            height / 2.0 - GARMENT_CENTER_OFFSET,
            GARMENT_WIDTH,
            GARMENT_HEIGHT,
        );

        // Limbs hang from the shoulders, the right one slightly higher
        let left_limb = Rect::new(
            garment.pos.x + 20.0,
            garment.pos.y - 80.0,
            LIMB_WIDTH,
            LIMB_HEIGHT,
        );
        let right_limb = Rect::new(
            garment.pos.x + garment.size.x - 100.0,
            garment.pos.y - 90.0,
            LIMB_WIDTH,
            LIMB_HEIGHT,
        );

        let spawn_region = Rect::new(
            garment.pos.x + (garment.size.x - SPAWN_AREA_WIDTH) / 2.0 - SPAWN_AREA_SHIFT_X,
            garment.pos.y + (garment.size.y - SPAWN_AREA_HEIGHT) / 2.0,
            SPAWN_AREA_WIDTH,
            SPAWN_AREA_HEIGHT,
        );

        Self {
            surface: Vec2::new(width, height),
            garment,
            left_limb,
            right_limb,
            spawn_region,
        }
    }

    /// Anchor for the cleared counter (text is center-aligned on x)
    pub fn counter_anchor(&self) -> Vec2 {
        Vec2::new(
            self.surface.x / 2.0,
            self.garment.max().y + COUNTER_OFFSET_Y,
        )
    }
}
