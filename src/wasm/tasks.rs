//! Handles for recurring and deferred browser callbacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

/// A `requestAnimationFrame` loop that keeps re-arming itself until stopped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let running = Rc::new(Cell::new(true));

        // `f` holds the animation-frame closure so that it can schedule
        // itself again from inside its own body.
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        let alive = running.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !alive.get() {
                return;
            }
            tick();

            // schedule next
            let Some(win) = window() else { return };
            if let Some(cb) = f.borrow().as_ref() {
                if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    log::error!("requestAnimationFrame failed: {e:?}");
                    alive.set(false);
                }
            }
        }) as Box<dyn FnMut()>));

        let win = window().ok_or("no window")?;
        if let Some(cb) = g.borrow().as_ref() {
            win.request_animation_frame(cb.as_ref().unchecked_ref())?;
        }

        Ok(Self { running })
    }

    /// Lets the pending frame run out without scheduling another.
    pub fn stop(&self) {
        self.running.set(false);
    }
}

/// A one-shot `setTimeout`. Dropping the handle cancels it.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule<F>(ms: i32, f: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let callback: Closure<dyn FnMut()> = Closure::once(f);
        let id = window()
            .ok_or("no window")?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms,
            )?;
        Ok(Self { id, _callback: callback })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// A repeating `setInterval`. The tick returns `false` to end the interval;
/// dropping the handle also ends it.
pub struct Interval {
    id: Rc<Cell<Option<i32>>>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start<F>(ms: i32, mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() -> bool + 'static,
    {
        let id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let own_id = id.clone();
        let callback = Closure::wrap(Box::new(move || {
            if tick() {
                return;
            }
            if let (Some(win), Some(handle)) = (window(), own_id.take()) {
                win.clear_interval_with_handle(handle);
            }
        }) as Box<dyn FnMut()>);

        let handle = window()
            .ok_or("no window")?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms,
            )?;
        id.set(Some(handle));
        Ok(Self { id, _callback: callback })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let (Some(win), Some(handle)) = (window(), self.id.take()) {
            win.clear_interval_with_handle(handle);
        }
    }
}

/// Adds `callback` as a listener that lives as long as the page.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, callback: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
