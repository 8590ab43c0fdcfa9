//! Cursor parallax on skill cards, glow on buttons and the subtitle typewriter.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use super::dom::{query, query_all, restyle};
use super::tasks::{listen, Interval, Timeout};
use crate::config::FxConfig;
use crate::effects::{card_offset, translate, Typewriter, GLOW_SHADOW, NO_SHADOW};

pub fn card_parallax(document: &Document, radius: f32) -> Result<(), JsValue> {
    let cards: Vec<HtmlElement> = query_all(document, ".skill-category");
    if cards.is_empty() {
        return Ok(());
    }
    listen(document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
        let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
        for card in &cards {
            let rect = card.get_bounding_client_rect();
            let center = Vec2::new(
                (rect.left() + rect.width() / 2.0) as f32,
                (rect.top() + rect.height() / 2.0) as f32,
            );
            restyle(card, "transform", &translate(card_offset(pointer, center, radius)));
        }
    })
}

pub fn button_glow(document: &Document) -> Result<(), JsValue> {
    for btn in query_all::<HtmlElement>(document, ".btn") {
        for (event, shadow) in [("mouseenter", GLOW_SHADOW), ("mouseleave", NO_SHADOW)] {
            let el = btn.clone();
            listen(&btn, event, move |_| {
                restyle(&el, "box-shadow", shadow);
            })?;
        }
    }
    Ok(())
}

/// The delayed start and the running interval of the subtitle typewriter.
#[derive(Default)]
pub struct TypewriterTask {
    start: Rc<RefCell<Option<Timeout>>>,
    typing: Rc<RefCell<Option<Interval>>>,
}

impl TypewriterTask {
    /// Arms the typewriter on `.hero-subtitle` once the window has loaded.
    pub fn arm(window: &Window, document: &Document, config: &FxConfig) -> Result<Self, JsValue> {
        let task = Self::default();
        let Some(subtitle) = query::<HtmlElement>(document, ".hero-subtitle") else {
            return Ok(task);
        };

        let start = task.start.clone();
        let typing = task.typing.clone();
        let (delay, interval) = (config.typing_start_delay_ms, config.typing_interval_ms);
        let kick_off = move || {
            let text = subtitle.text_content().unwrap_or_default();
            let typing = typing.clone();
            let scheduled = Timeout::schedule(delay, move || {
                match type_out(subtitle, text, interval) {
                    Ok(i) => *typing.borrow_mut() = Some(i),
                    Err(e) => log::error!("typewriter failed: {e:?}"),
                }
            });
            match scheduled {
                Ok(t) => *start.borrow_mut() = Some(t),
                Err(e) => log::error!("typewriter failed: {e:?}"),
            }
        };

        if document.ready_state() == "complete" {
            kick_off();
        } else {
            let mut kick_off = Some(kick_off);
            listen(window, "load", move |_| {
                if let Some(f) = kick_off.take() {
                    f();
                }
            })?;
        }
        Ok(task)
    }

    pub fn cancel(&self) {
        self.start.borrow_mut().take();
        self.typing.borrow_mut().take();
    }
}

/// Clears `el` and writes `text` back one character per tick, the first at once.
fn type_out(el: HtmlElement, text: String, interval_ms: i32) -> Result<Interval, JsValue> {
    let mut writer = Typewriter::new(text);
    el.set_text_content(Some(""));
    let mut step = move || match writer.tick() {
        Some(shown) => {
            el.set_text_content(Some(shown));
            true
        }
        None => false,
    };
    step();
    Interval::start(interval_ms, step)
}
