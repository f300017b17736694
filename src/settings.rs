//! Adaptive UI settings store so every surface mutates preferences the same way.
//!
//! The settings object is session-scoped and `Copy`; every mutator returns the
//! resulting snapshot so callers can emit it to the presentation layer without
//! a second read.

use serde::Serialize;

/// Smallest font size the UI will render.
pub const FONT_SIZE_MIN: u16 = 14;
/// Largest font size the UI will render.
pub const FONT_SIZE_MAX: u16 = 28;
/// Font size applied to fresh sessions.
pub const FONT_SIZE_DEFAULT: u16 = 18;
/// Step used by the relative "increase text" / "decrease text" voice commands.
pub const FONT_SIZE_STEP: i32 = 2;

/// Session-scoped accessibility preferences plus the voice listening flag.
///
/// `font_size` is always within `[FONT_SIZE_MIN, FONT_SIZE_MAX]`; out-of-range
/// requests are clamped, never rejected. The boolean flags carry no
/// cross-constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdaptiveSettings {
    pub font_size: u16,
    pub high_contrast: bool,
    pub reduced_motion: bool,
    pub sensory_mode: bool,
    /// Whether voice capture is currently active. Driven by capture start/stop
    /// notifications rather than a symmetric user toggle.
    pub listening: bool,
}

impl Default for AdaptiveSettings {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
            high_contrast: false,
            reduced_motion: false,
            sensory_mode: false,
            listening: false,
        }
    }
}

impl AdaptiveSettings {
    /// Set the font size, clamping into the renderable range.
    pub fn set_font_size(&mut self, size: i32) -> Self {
        self.font_size = clamp_font_size(size);
        *self
    }

    /// Adjust the font size relative to its current value.
    pub fn adjust_font_size(&mut self, delta: i32) -> Self {
        self.set_font_size(i32::from(self.font_size).saturating_add(delta))
    }

    pub fn toggle_high_contrast(&mut self) -> Self {
        self.high_contrast = !self.high_contrast;
        *self
    }

    pub fn toggle_reduced_motion(&mut self) -> Self {
        self.reduced_motion = !self.reduced_motion;
        *self
    }

    pub fn toggle_sensory_mode(&mut self) -> Self {
        self.sensory_mode = !self.sensory_mode;
        *self
    }

    /// Set the listening flag directly; capture start/stop events own this bit.
    pub fn set_listening(&mut self, listening: bool) -> Self {
        self.listening = listening;
        *self
    }
}

fn clamp_font_size(size: i32) -> u16 {
    let clamped = size.clamp(i32::from(FONT_SIZE_MIN), i32::from(FONT_SIZE_MAX));
    // Within u16 range after the clamp above.
    clamped as u16
}
