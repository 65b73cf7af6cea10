//! Per-frame composition
//!
//! Draw order matters for overdraw: garment, limbs, spots, then the counter.

use glam::Vec2;

use super::{COUNTER_STYLE, Sprite, Surface};
use crate::consts::*;
use crate::sim::{GameState, Layout, Rect};

/// Swing angle shared by the garment, limbs and spots. Only ever grows.
///
/// Kept in f64 so the per-frame step never rounds away.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationPhase(f64);

impl AnimationPhase {
    pub fn angle(&self) -> f64 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 += SWING_SPEED as f64;
    }

    /// Swing offset at this phase, shifted by `shift` radians
    #[inline]
    pub fn swing(&self, shift: f32, amplitude: f32) -> Vec2 {
        let a = self.0 + shift as f64;
        Vec2::new(a.sin() as f32, a.cos() as f32) * amplitude
    }
}

/// Compose one frame. Mutates nothing but `phase`.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    layout: &Layout,
    phase: &mut AnimationPhase,
) {
    surface.clear();

    if state.is_banner_showing() {
        draw_banner(surface);
        return;
    }

    phase.advance();

    surface.set_smoothing(true);
    let sway = phase.swing(0.0, SWING_AMPLITUDE * GARMENT_SWAY);
    surface.draw_image(Sprite::Garment, layout.garment.translated(sway));

    // Limbs swing in opposition
    surface.draw_image(
        Sprite::LeftLimb,
        layout.left_limb.translated(phase.swing(0.0, SWING_AMPLITUDE)),
    );
    surface.draw_image(
        Sprite::RightLimb,
        layout
            .right_limb
            .translated(phase.swing(std::f32::consts::PI, SWING_AMPLITUDE)),
    );

    // Pixel art spots stay crisp
    surface.set_smoothing(false);
    let spot_sway = phase.swing(0.0, SWING_AMPLITUDE * SPOT_SWAY);
    for spot in &state.spots {
        let pos = spot.pos + spot_sway;
        surface.draw_image(
            Sprite::Spot(spot.variant),
            Rect::new(pos.x, pos.y, SPOT_SIZE, SPOT_SIZE),
        );
    }

    surface.draw_text(
        &state.cleared.to_string(),
        layout.counter_anchor(),
        &COUNTER_STYLE,
    );
}

/// Banner centered on the surface at twice its natural size
fn draw_banner<S: Surface + ?Sized>(surface: &mut S) {
    let Some(natural) = surface.image_size(Sprite::Banner) else {
        return;
    };
    let size = natural * BANNER_SCALE;
    let pos = surface.size() / 2.0 - size / 2.0;
    surface.draw_image(Sprite::Banner, Rect::new(pos.x, pos.y, size.x, size.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::TextStyle;
    use crate::sim::SpotVariant;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Image(Sprite, Rect),
        Text(String, Vec2),
        Smoothing(bool),
    }

    struct Recorder {
        size: Vec2,
        banner: Option<Vec2>,
        calls: Vec<Call>,
    }

    impl Recorder {
        fn new(banner: Option<Vec2>) -> Self {
            Self {
                size: Vec2::new(800.0, 600.0),
                banner,
                calls: Vec::new(),
            }
        }

        fn sprites(&self) -> Vec<Sprite> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Image(s, _) => Some(*s),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for Recorder {
        fn size(&self) -> Vec2 {
            self.size
        }
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
            self.calls.push(Call::Image(sprite, rect));
        }
        fn draw_text(&mut self, text: &str, pos: Vec2, _style: &TextStyle) {
            self.calls.push(Call::Text(text.to_string(), pos));
        }
        fn set_smoothing(&mut self, enabled: bool) {
            self.calls.push(Call::Smoothing(enabled));
        }
        fn image_size(&self, sprite: Sprite) -> Option<Vec2> {
            match sprite {
                Sprite::Banner => self.banner,
                _ => None,
            }
        }
    }

    fn banner_state() -> GameState {
        let mut state = GameState::new();
        state.cleared = 5;
        state.on_spot_cleared();
        state
    }

    #[test]
    fn test_gameplay_draw_order() {
        let layout = Layout::new(800.0, 600.0);
        let mut state = GameState::new();
        state.add_spot(Vec2::new(300.0, 200.0), SpotVariant::ALL[2]);
        state.add_spot(Vec2::new(320.0, 240.0), SpotVariant::ALL[4]);
        state.cleared = 3;
        let mut phase = AnimationPhase::default();
        let mut surface = Recorder::new(None);

        render_frame(&mut surface, &state, &layout, &mut phase);

        assert_eq!(surface.calls[0], Call::Clear);
        assert_eq!(
            surface.sprites(),
            vec![
                Sprite::Garment,
                Sprite::LeftLimb,
                Sprite::RightLimb,
                Sprite::Spot(SpotVariant::ALL[2]),
                Sprite::Spot(SpotVariant::ALL[4]),
            ]
        );
        assert_eq!(
            surface.calls.last(),
            Some(&Call::Text("3".to_string(), Vec2::new(400.0, 498.0)))
        );

        // Smoothing is off by the time spots are drawn
        let spot_idx = surface
            .calls
            .iter()
            .position(|c| matches!(c, Call::Image(Sprite::Spot(_), _)))
            .unwrap();
        let last_toggle = surface.calls[..spot_idx]
            .iter()
            .rev()
            .find_map(|c| match c {
                Call::Smoothing(on) => Some(*on),
                _ => None,
            });
        assert_eq!(last_toggle, Some(false));
    }

    #[test]
    fn test_phase_advances_per_gameplay_frame() {
        let layout = Layout::new(800.0, 600.0);
        let state = GameState::new();
        let mut phase = AnimationPhase::default();
        let mut surface = Recorder::new(None);
        for _ in 0..10 {
            render_frame(&mut surface, &state, &layout, &mut phase);
        }
        assert!((phase.angle() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_phase_keeps_growing_after_days_of_frames() {
        // ~4 days at 60 fps; an f32 angle stalls here
        let mut phase = AnimationPhase(1_048_576.0);
        let before = phase.angle();
        phase.advance();
        assert!(phase.angle() > before);
        assert!((phase.angle() - before - SWING_SPEED as f64).abs() < 1e-6);

        let a = phase.swing(0.0, SWING_AMPLITUDE);
        phase.advance();
        assert_ne!(phase.swing(0.0, SWING_AMPLITUDE), a);
    }

    #[test]
    fn test_limbs_swing_in_opposition() {
        let layout = Layout::new(800.0, 600.0);
        let state = GameState::new();
        let mut phase = AnimationPhase::default();
        let mut surface = Recorder::new(None);
        render_frame(&mut surface, &state, &layout, &mut phase);

        let rect_of = |sprite: Sprite| {
            surface.calls.iter().find_map(|c| match c {
                Call::Image(s, r) if *s == sprite => Some(*r),
                _ => None,
            })
        };
        let left = rect_of(Sprite::LeftLimb).unwrap().pos - layout.left_limb.pos;
        let right = rect_of(Sprite::RightLimb).unwrap().pos - layout.right_limb.pos;
        assert!((left + right).length() < 1e-4);
        assert!((left.length() - SWING_AMPLITUDE).abs() < 1e-4);

        let garment = rect_of(Sprite::Garment).unwrap().pos - layout.garment.pos;
        assert!((garment.length() - SWING_AMPLITUDE * GARMENT_SWAY).abs() < 1e-4);
    }

    #[test]
    fn test_banner_frame() {
        let layout = Layout::new(800.0, 600.0);
        let state = banner_state();
        let mut phase = AnimationPhase::default();
        let mut surface = Recorder::new(Some(Vec2::new(100.0, 50.0)));

        render_frame(&mut surface, &state, &layout, &mut phase);

        assert_eq!(
            surface.calls,
            vec![
                Call::Clear,
                Call::Image(Sprite::Banner, Rect::new(300.0, 250.0, 200.0, 100.0)),
            ]
        );
        assert_eq!(phase.angle(), 0.0);
    }

    #[test]
    fn test_banner_not_loaded_just_clears() {
        let layout = Layout::new(800.0, 600.0);
        let state = banner_state();
        let mut phase = AnimationPhase::default();
        let mut surface = Recorder::new(None);

        render_frame(&mut surface, &state, &layout, &mut phase);
        assert_eq!(surface.calls, vec![Call::Clear]);
    }
}
