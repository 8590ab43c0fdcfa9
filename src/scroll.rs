//! Scroll-driven state: one-shot reveals, hero parallax and the navbar tint.

use std::collections::HashSet;

pub const NAVBAR_RESTING: &str = "rgba(10, 25, 47, 0.9)";
pub const NAVBAR_SCROLLED: &str = "rgba(10, 25, 47, 0.95)";

// browsers report ratios a hair under the threshold they fired for
const RATIO_SLACK: f64 = 1e-3;

/// Tracks which observed elements have been revealed. Reveals never undo.
#[derive(Debug, Default)]
pub struct RevealTracker {
    threshold: f64,
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, revealed: HashSet::new() }
    }

    /// Feeds one intersection report. Returns `true` only on the transition
    /// from hidden to visible.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio + RATIO_SLACK < self.threshold {
            return false;
        }
        self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// `transition-delay` for the `index`-th animated element.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    format!("{}s", index as f64 * step_secs)
}

/// Hero content and hero canvas translations for a scroll offset.
pub fn hero_parallax(scroll_y: f64) -> (f64, f64) {
    (scroll_y * 0.5, scroll_y * 0.3)
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

pub fn navbar_background(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        NAVBAR_SCROLLED
    } else {
        NAVBAR_RESTING
    }
}
