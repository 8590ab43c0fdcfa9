//! Everything mounted on the page, owned in one place so it can be stopped.

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::effects::{button_glow, card_parallax, TypewriterTask};
use super::form::{alert_notifier, ContactForm};
use super::nav::wire_navigation;
use super::particles::ParticleField;
use super::scenes::{mount_about, mount_contact, mount_hero, mount_skills};
use super::scroll::{track_scroll, Reveal};
use super::tasks::FrameLoop;
use super::viewport::SceneContext;
use crate::config::FxConfig;
use crate::scenes::Spinner;
use crate::skills::SkillCluster;

/// Logs and swallows a failed feature so the rest of the page still mounts.
fn attempt<T>(feature: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("{feature} failed to start: {e:?}");
            None
        }
    }
}

pub struct Portfolio {
    _particles: Option<ParticleField>,
    particle_loop: Option<FrameLoop>,
    hero: Option<SceneContext<Spinner>>,
    about: Option<SceneContext<Spinner>>,
    skills: Option<SceneContext<SkillCluster>>,
    contact: Option<SceneContext<Spinner>>,
    reveal: Option<Reveal>,
    form: Option<ContactForm>,
    typewriter: Option<TypewriterTask>,
}

impl Portfolio {
    pub fn mount(window: &Window, document: &Document, config: &FxConfig) -> Self {
        let particles = attempt("particles", ParticleField::create(document, config.particle_count)).flatten();
        let particle_loop = particles
            .as_ref()
            .and_then(|field| attempt("particle loop", field.animate(config.particle_motion)));

        let hero = attempt("hero scene", mount_hero(window, document)).flatten();
        let about = attempt("about scene", mount_about(window, document)).flatten();
        let skills = attempt("skills scene", mount_skills(window, document)).flatten();
        let contact = attempt("contact scene", mount_contact(window, document)).flatten();

        let reveal = attempt("reveal", Reveal::observe(document, config));
        attempt("scroll effects", track_scroll(window, document, config));
        attempt("navigation", wire_navigation(document));
        let form = attempt(
            "contact form",
            ContactForm::mount(document, config.submit_delay_ms, alert_notifier()),
        )
        .flatten();

        attempt("card parallax", card_parallax(document, config.card_radius_px as f32));
        attempt("button glow", button_glow(document));
        let typewriter = attempt("typewriter", TypewriterTask::arm(window, document, config));

        log::info!("portfolio effects mounted");
        Self { _particles: particles, particle_loop, hero, about, skills, contact, reveal, form, typewriter }
    }

    /// Stops every loop and pending timer. Listeners stay attached.
    pub fn stop(&self) {
        if let Some(l) = &self.particle_loop {
            l.stop();
        }
        for scene in [&self.hero, &self.about, &self.contact].into_iter().flatten() {
            scene.stop();
        }
        if let Some(s) = &self.skills {
            s.stop();
        }
        if let Some(r) = &self.reveal {
            r.disconnect();
        }
        if let Some(f) = &self.form {
            f.cancel();
        }
        if let Some(t) = &self.typewriter {
            t.cancel();
        }
        log::info!("portfolio effects stopped");
    }
}
