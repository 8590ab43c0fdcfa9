use std::cell::Cell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// First match for `selector`, `None` for no match or an invalid selector.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<T>().ok())
}

/// Like [`query`], scoped to the descendants of `root`.
pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<T>().ok())
}

/// Every match for `selector` that casts to `T`, in document order.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    el.style().set_property(property, value)
}

thread_local! {
    static RESTYLE_FAILED: Cell<bool> = const { Cell::new(false) };
}

/// [`set_style`] for per-frame and per-event updates, where there is no caller
/// to hand the error to. Only the first failure is logged.
pub fn restyle(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = set_style(el, property, value) {
        if !RESTYLE_FAILED.with(|failed| failed.replace(true)) {
            log::error!("setting {property} failed: {e:?}");
        }
    }
}

/// Creates a `<div>` with `class`.
pub fn div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let el: Element = document.create_element("div")?;
    el.set_class_name(class);
    el.dyn_into::<HtmlElement>().map_err(JsValue::from)
}
