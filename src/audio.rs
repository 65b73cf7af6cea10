//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! Event-to-sound mapping builds everywhere; playback is browser only.

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Spot cleared
    Pop,
    /// Level cleared
    Fanfare,
}

impl SoundEffect {
    /// Sound to play for a game event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::SpotRemoved { .. } => Some(SoundEffect::Pop),
            GameEvent::LevelCleared { .. } => Some(SoundEffect::Fanfare),
            GameEvent::LevelStarted { .. } => None,
        }
    }
}

/// Audio manager for the game
#[cfg(target_arch = "wasm32")]
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

#[cfg(target_arch = "wasm32")]
impl AudioManager {
    pub fn new(volume: f32) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Play a sound effect. Best effort: a missing or suspended context is silent.
    pub fn play(&self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Browsers keep the context suspended until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Pop => self.play_pop(ctx, self.volume),
            SoundEffect::Fanfare => self.play_fanfare(ctx, self.volume),
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Pop - short upward blip
    fn play_pop(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 500.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.08)
            .ok();
        osc.frequency().set_value_at_time(500.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(1200.0, t + 0.05)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
    }

    /// Fanfare - brassy rising horn call
    fn play_fanfare(&self, ctx: &AudioContext, vol: f32) {
        let notes = [(392.0, 0.0, 0.15), (523.0, 0.15, 0.15), (659.0, 0.3, 0.15), (784.0, 0.45, 0.6)];
        for (freq, delay, len) in notes {
            if let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Sawtooth) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.25, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + len)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + len + 0.05).ok();
            }
        }
    }
}
