//! Canvas 2D backend
//!
//! Images are plain `<img>` elements; anything not yet decoded is skipped.

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Sprite, Surface, TextAlign, TextStyle};
use crate::sim::{Rect, SpotVariant};

/// Asset file for each sprite
pub fn sprite_source(sprite: Sprite) -> String {
    match sprite {
        Sprite::Garment => "paita.png".to_string(),
        Sprite::LeftLimb => "vasenkasi.png".to_string(),
        Sprite::RightLimb => "oikeakasi.png".to_string(),
        Sprite::Spot(variant) => format!("{}.png", variant.index() + 1),
        Sprite::Banner => "hyvin.png".to_string(),
    }
}

/// Every sprite the game draws
fn all_sprites() -> impl Iterator<Item = Sprite> {
    [Sprite::Garment, Sprite::LeftLimb, Sprite::RightLimb, Sprite::Banner]
        .into_iter()
        .chain(SpotVariant::ALL.into_iter().map(Sprite::Spot))
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: HashMap<Sprite, HtmlImageElement>,
}

impl CanvasSurface {
    /// Wrap `canvas` and start loading all images from `asset_base`
    pub fn new(canvas: HtmlCanvasElement, asset_base: &str) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let mut images = HashMap::new();
        for sprite in all_sprites() {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(&format!("{}{}", asset_base, sprite_source(sprite)));
                    images.insert(sprite, img);
                }
                Err(e) => log::warn!("Could not create image for {:?}: {:?}", sprite, e),
            }
        }
        log::info!("Loading {} images", images.len());

        Some(Self {
            canvas,
            ctx,
            images,
        })
    }

    fn ready(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        self.images
            .get(&sprite)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
        let Some(img) = self.ready(sprite) else {
            return;
        };
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn set_smoothing(&mut self, enabled: bool) {
        self.ctx.set_image_smoothing_enabled(enabled);
    }

    fn image_size(&self, sprite: Sprite) -> Option<Vec2> {
        self.ready(sprite)
            .map(|img| Vec2::new(img.natural_width() as f32, img.natural_height() as f32))
    }
}
