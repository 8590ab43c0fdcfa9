//! Background particle field: creation-time sampling and per-frame bobbing.

use crate::config::ParticleMotion;

/// Styling for one particle, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSeed {
    /// Percent of the container, `[0, 100)`.
    pub left: f64,
    pub top: f64,
    /// CSS animation delay, seconds in `[0, 6)`.
    pub delay: f64,
    /// CSS animation duration, seconds in `[3, 6)`.
    pub duration: f64,
    /// Used only with [`ParticleMotion::Fixed`].
    pub speed: f64,
    pub amplitude: f64,
}

impl ParticleSeed {
    /// `rng` must yield values in `[0, 1)`.
    pub fn sample(rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            left: rng() * 100.0,
            top: rng() * 100.0,
            delay: rng() * 6.0,
            duration: rng() * 3.0 + 3.0,
            speed: sample_speed(rng),
            amplitude: sample_amplitude(rng),
        }
    }
}

fn sample_speed(rng: &mut impl FnMut() -> f64) -> f64 {
    0.5 + rng() * 0.5
}

fn sample_amplitude(rng: &mut impl FnMut() -> f64) -> f64 {
    50.0 + rng() * 50.0
}

/// Vertical translation in px.
pub fn bob(time: f64, index: usize, speed: f64, amplitude: f64) -> f64 {
    (time * speed + index as f64).sin() * amplitude
}

/// Vertical translation for particle `index` this tick.
pub fn offset_for(
    motion: ParticleMotion,
    seed: &ParticleSeed,
    time: f64,
    index: usize,
    rng: &mut impl FnMut() -> f64,
) -> f64 {
    match motion {
        ParticleMotion::Resampled => {
            let speed = sample_speed(rng);
            let amplitude = sample_amplitude(rng);
            bob(time, index, speed, amplitude)
        }
        ParticleMotion::Fixed => bob(time, index, seed.speed, seed.amplitude),
    }
}
