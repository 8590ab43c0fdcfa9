use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use super::dom::{div, restyle, set_style};
use super::tasks::FrameLoop;
use crate::config::ParticleMotion;
use crate::particles::{offset_for, ParticleSeed};
use crate::scroll::translate_y;

pub const CONTAINER_ID: &str = "particles";

/// The `.particle` elements created at startup, with the values they were seeded with.
pub struct ParticleField {
    particles: Rc<Vec<(HtmlElement, ParticleSeed)>>,
}

impl ParticleField {
    /// Appends `count` particles to `#particles`. `Ok(None)` if the container is absent.
    pub fn create(document: &Document, count: usize) -> Result<Option<Self>, JsValue> {
        let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
            log::debug!("#{CONTAINER_ID} not on this page, skipping particles");
            return Ok(None);
        };

        let mut rng = js_sys::Math::random;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let seed = ParticleSeed::sample(&mut rng);
            let el = div(document, "particle")?;
            set_style(&el, "left", &format!("{}%", seed.left))?;
            set_style(&el, "top", &format!("{}%", seed.top))?;
            set_style(&el, "animation-delay", &format!("{}s", seed.delay))?;
            set_style(&el, "animation-duration", &format!("{}s", seed.duration))?;
            container.append_child(&el)?;
            particles.push((el, seed));
        }

        log::debug!("created {count} particles");
        Ok(Some(Self { particles: Rc::new(particles) }))
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Starts the page-wide bobbing loop.
    pub fn animate(&self, motion: ParticleMotion) -> Result<FrameLoop, JsValue> {
        let particles = self.particles.clone();
        let mut rng = js_sys::Math::random;
        FrameLoop::start(move || {
            let time = js_sys::Date::now() * 0.001;
            for (index, (el, seed)) in particles.iter().enumerate() {
                let dy = offset_for(motion, seed, time, index, &mut rng);
                restyle(el, "transform", &translate_y(dy));
            }
        })
    }
}
