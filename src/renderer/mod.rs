//! Rendering module
//!
//! Frame composition is written against the `Surface` trait so it can run on a
//! browser canvas or a recording surface in tests.

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::{AnimationPhase, render_frame};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::{Rect, SpotVariant};

/// Image handles the frame composer can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Garment,
    LeftLimb,
    RightLimb,
    Spot(SpotVariant),
    /// Level-clear banner
    Banner,
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Font and fill for `Surface::draw_text`
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    /// CSS color
    pub color: &'static str,
    pub align: TextAlign,
}

/// Style of the cleared-spots counter
pub const COUNTER_STYLE: TextStyle = TextStyle {
    font: "bold 40px Arial",
    color: "black",
    align: TextAlign::Center,
};

/// Drawing capabilities the renderer needs from the backend.
///
/// Drawing a sprite that has not finished loading must be a silent no-op.
pub trait Surface {
    /// Drawable size in surface units
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn draw_image(&mut self, sprite: Sprite, rect: Rect);
    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
    /// Toggle bilinear filtering for subsequent image draws
    fn set_smoothing(&mut self, enabled: bool);
    /// Natural size of a loaded image, `None` while it is still loading
    fn image_size(&self, sprite: Sprite) -> Option<Vec2>;
}
