//! Tunables for the page effects.
//!
//! Defaults reproduce the shipped page. A few values can be overridden from
//! `data-*` attributes on `<body>`, e.g.
//! `<body data-particle-count="80" data-particle-motion="fixed">`.

use std::str::FromStr;

/// How the background particles bob each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleMotion {
    /// Speed and amplitude are drawn again on every tick (jittery).
    Resampled,
    /// Speed and amplitude are drawn once when the particle is created.
    Fixed,
}

impl FromStr for ParticleMotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resampled" => Ok(Self::Resampled),
            "fixed" => Ok(Self::Fixed),
            other => Err(format!("unknown particle motion `{other}`")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub particle_count: usize,
    pub particle_motion: ParticleMotion,
    /// Intersection ratio that counts as "in view".
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    /// Per-element transition delay step, seconds.
    pub reveal_stagger_secs: f64,
    /// Scroll offset (px) above which the navbar turns opaque.
    pub navbar_threshold_px: f64,
    pub submit_delay_ms: i32,
    pub typing_start_delay_ms: i32,
    pub typing_interval_ms: i32,
    /// Pointer distance (px) inside which cards lean toward the cursor.
    pub card_radius_px: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            particle_motion: ParticleMotion::Resampled,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_stagger_secs: 0.1,
            navbar_threshold_px: 100.0,
            submit_delay_ms: 2000,
            typing_start_delay_ms: 1000,
            typing_interval_ms: 50,
            card_radius_px: 200.0,
        }
    }
}

impl FxConfig {
    /// Builds a config from defaults plus whatever `lookup` returns for the
    /// recognised `data-*` attribute names. Bad values keep the default.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        override_with(&lookup, "data-particle-count", &mut cfg.particle_count);
        override_with(&lookup, "data-particle-motion", &mut cfg.particle_motion);
        override_with(&lookup, "data-submit-delay-ms", &mut cfg.submit_delay_ms);
        override_with(&lookup, "data-typing-interval-ms", &mut cfg.typing_interval_ms);
        cfg
    }
}

fn override_with<F, T>(lookup: &F, name: &str, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    let Some(raw) = lookup(name) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => *slot = value,
        Err(e) => log::warn!("ignoring {name}={raw:?}: {e:?}"),
    }
}
