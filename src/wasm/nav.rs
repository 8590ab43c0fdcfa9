use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom::query;
use super::tasks::listen;

/// Smooth scrolling for in-page links and the mobile menu toggle.
pub fn wire_navigation(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all("a[href^=\"#\"]")?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else { return };
            // a bare "#" is not a valid selector
            if let Some(target) = query::<Element>(&doc, &href) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        })?;
    }

    let hamburger = query::<Element>(document, ".hamburger");
    let menu = query::<Element>(document, ".nav-menu");
    if let (Some(hamburger), Some(menu)) = (hamburger, menu) {
        let toggle = hamburger.clone();
        listen(&hamburger, "click", move |_| {
            let _ = toggle.class_list().toggle("active");
            let _ = menu.class_list().toggle("active");
        })?;
    }
    Ok(())
}
