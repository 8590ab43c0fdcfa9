//! Visual effects for a single-page portfolio: particle field, four small
//! WebGL scenes, scroll reveals, navigation and a simulated contact form.
//!
//! The browser-free parts build on every target; the DOM and WebGL glue is
//! compiled only for `wasm32`.

pub mod camera;
pub mod config;
pub mod effects;
pub mod form;
pub mod geometry;
pub mod particles;
pub mod scene;
pub mod scenes;
pub mod scroll;
pub mod skills;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::config::FxConfig;

    mod dom;
    pub mod effects;
    pub mod form;
    pub mod nav;
    pub mod page;
    pub mod particles;
    mod render;
    pub mod scenes;
    pub mod scroll;
    pub mod tasks;
    pub mod viewport;

    pub use page::Portfolio;

    thread_local! {
        static PAGE: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if document.ready_state() == "loading" {
            let (win, doc) = (window.clone(), document.clone());
            let mut pending = Some(move || mount(&win, &doc));
            tasks::listen(&document, "DOMContentLoaded", move |_| {
                if let Some(f) = pending.take() {
                    f();
                }
            })?;
        } else {
            mount(&window, &document);
        }
        Ok(())
    }

    fn mount(window: &web_sys::Window, document: &web_sys::Document) {
        let config = match document.body() {
            Some(body) => FxConfig::from_attributes(|name| body.get_attribute(name)),
            None => FxConfig::default(),
        };
        log::debug!("config: {config:?}");
        let page = Portfolio::mount(window, document, &config);
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    }

    /// Stops every render loop and pending timer on the page.
    #[wasm_bindgen]
    pub fn shutdown() {
        if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
            page.stop();
        }
    }
}
