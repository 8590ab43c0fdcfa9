//! Reveal-on-scroll, hero parallax and the navbar tint.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use super::dom::{query, query_all, restyle, set_style};
use super::tasks::listen;
use crate::config::FxConfig;
use crate::scroll::{hero_parallax, navbar_background, stagger_delay, translate_y, RevealTracker};

pub const ANIMATED: &str = ".skill-category, .project-card, .experience-item, .certification-card";
const INDEX_ATTR: &str = "data-reveal-index";

/// Keeps the observer and its callback alive.
pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Reveal {
    pub fn observe(document: &Document, config: &FxConfig) -> Result<Self, JsValue> {
        let mut tracker = RevealTracker::new(config.reveal_threshold);
        let callback =
            Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                    let target = entry.target();
                    let Some(index) = target
                        .get_attribute(INDEX_ATTR)
                        .and_then(|v| v.parse::<usize>().ok())
                    else {
                        continue;
                    };
                    let shown = tracker.observe(
                        index,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                    if shown {
                        if let Err(e) = target.class_list().add_1("visible") {
                            log::error!("reveal failed: {e:?}");
                        }
                        observer.unobserve(&target);
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        init.set_root_margin(&config.reveal_root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let elements: Vec<HtmlElement> = query_all(document, ANIMATED);
        for (index, el) in elements.iter().enumerate() {
            el.class_list().add_1("fade-in")?;
            el.set_attribute(INDEX_ATTR, &index.to_string())?;
            set_style(el, "transition-delay", &stagger_delay(index, config.reveal_stagger_secs))?;
            observer.observe(el);
        }
        log::debug!("observing {} elements for reveal", elements.len());

        Ok(Self { observer, _callback: callback })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Parallax on the hero blocks and the navbar background step.
pub fn track_scroll(window: &Window, document: &Document, config: &FxConfig) -> Result<(), JsValue> {
    let hero = query::<HtmlElement>(document, ".hero-content")
        .zip(query::<HtmlElement>(document, ".hero-3d"));
    let navbar = query::<HtmlElement>(document, ".navbar");
    let threshold = config.navbar_threshold_px;

    let win = window.clone();
    listen(window, "scroll", move |_| {
        let scrolled = win.scroll_y().unwrap_or(0.0);
        if let Some((content, scene)) = &hero {
            let (content_dy, scene_dy) = hero_parallax(scrolled);
            restyle(content, "transform", &translate_y(content_dy));
            restyle(scene, "transform", &translate_y(scene_dy));
        }
        if let Some(navbar) = &navbar {
            restyle(navbar, "background", navbar_background(scrolled, threshold));
        }
    })
}
