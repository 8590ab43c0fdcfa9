//! Mounts the four decorative viewports.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use super::dom::{div, restyle, set_style};
use super::tasks::listen;
use super::viewport::{container_size, SceneContext, Viewport};
use crate::camera::pointer_to_ndc;
use crate::scenes::Spinner;
use crate::skills::{SkillCluster, SKILLS};

pub const HERO_CANVAS: &str = "hero-canvas";
pub const ABOUT_CANVAS: &str = "about-canvas";
pub const SKILLS_CANVAS: &str = "skills-canvas";
pub const CONTACT_CANVAS: &str = "contact-canvas";

fn no_overlay(_: &Viewport<Spinner>) {}

pub fn mount_hero(window: &Window, document: &Document) -> Result<Option<SceneContext<Spinner>>, JsValue> {
    SceneContext::mount(
        window,
        document,
        HERO_CANVAS,
        |aspect| Spinner::hero(aspect, &mut js_sys::Math::random),
        no_overlay,
    )
}

pub fn mount_about(window: &Window, document: &Document) -> Result<Option<SceneContext<Spinner>>, JsValue> {
    SceneContext::mount(window, document, ABOUT_CANVAS, Spinner::about, no_overlay)
}

pub fn mount_contact(window: &Window, document: &Document) -> Result<Option<SceneContext<Spinner>>, JsValue> {
    SceneContext::mount(window, document, CONTACT_CANVAS, Spinner::contact, no_overlay)
}

const LABEL_STYLE: [(&str, &str); 11] = [
    ("position", "absolute"),
    ("color", "#fff"),
    ("font-size", "12px"),
    ("font-weight", "bold"),
    ("background", "rgba(0,0,0,0.7)"),
    ("padding", "4px 8px"),
    ("border-radius", "4px"),
    ("pointer-events", "none"),
    ("transform", "translate(-50%, -50%)"),
    ("z-index", "10"),
    ("opacity", "0"),
];

/// Skill spheres plus their HTML labels and pointer hover.
pub fn mount_skills(window: &Window, document: &Document) -> Result<Option<SceneContext<SkillCluster>>, JsValue> {
    let Some(container) = document.get_element_by_id(SKILLS_CANVAS) else {
        log::debug!("#{SKILLS_CANVAS} not on this page, skipping scene");
        return Ok(None);
    };

    let mut labels: Vec<HtmlElement> = Vec::with_capacity(SKILLS.len());
    for skill in &SKILLS {
        let label = div(document, "skill-label")?;
        label.set_text_content(Some(skill.name));
        for (property, value) in LABEL_STYLE {
            set_style(&label, property, value)?;
        }
        labels.push(label);
    }

    let sync_labels = {
        let labels = labels.clone();
        move |vp: &Viewport<SkillCluster>| {
            let (w, h) = container_size(&vp.container);
            for (label, place) in labels.iter().zip(vp.view.label_placements(w as f32, h as f32)) {
                restyle(label, "left", &format!("{}px", place.x));
                restyle(label, "top", &format!("{}px", place.y));
                restyle(label, "opacity", if place.visible { "1" } else { "0" });
            }
        }
    };

    let Some(ctx) = SceneContext::mount(window, document, SKILLS_CANVAS, SkillCluster::new, sync_labels)? else {
        return Ok(None);
    };
    for label in &labels {
        container.append_child(label)?;
    }

    let shared = ctx.shared();
    listen(&container, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
        let mut vp = shared.borrow_mut();
        let rect = vp.container.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let ndc = pointer_to_ndc(
            Vec2::new(event.client_x() as f32, event.client_y() as f32),
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        vp.view.pointer_at(ndc);
    })?;

    Ok(Some(ctx))
}
