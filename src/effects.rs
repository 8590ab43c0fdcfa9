//! Cursor-driven card parallax, button glow and the subtitle typewriter.

use glam::Vec2;

pub const GLOW_SHADOW: &str = "0 0 20px rgba(0, 255, 255, 0.5)";
pub const NO_SHADOW: &str = "none";

/// Offset pulling a card toward the pointer; zero outside `radius`.
pub fn card_offset(pointer: Vec2, card_center: Vec2, radius: f32) -> Vec2 {
    let delta = pointer - card_center;
    let distance = delta.length();
    if distance < radius {
        let strength = (radius - distance) / radius;
        delta * strength * 0.1
    } else {
        Vec2::ZERO
    }
}

pub fn translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// Reveals `text` one character per tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), shown: 0 }
    }

    /// Reveals one more character and returns the visible prefix, or `None`
    /// once everything is shown.
    pub fn tick(&mut self) -> Option<&str> {
        let rest = &self.text[self.shown..];
        let next = rest.chars().next()?;
        self.shown += next.len_utf8();
        Some(&self.text[..self.shown])
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }
}
