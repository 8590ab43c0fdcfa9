//! One decorative viewport: container, renderer, uploaded meshes and its loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::render::{GpuMesh, Renderer};
use super::tasks::{listen, FrameLoop};
use crate::scenes::Animated;

pub struct Viewport<A> {
    pub view: A,
    pub container: HtmlElement,
    renderer: Renderer,
    meshes: Vec<GpuMesh>,
}

impl<A: Animated> Viewport<A> {
    fn draw(&self) {
        self.renderer.render(self.view.scene(), &self.meshes, self.view.camera());
    }

    fn resize(&mut self) -> Result<(), JsValue> {
        let (w, h) = container_size(&self.container);
        if self.view.camera_mut().set_viewport(w, h) {
            self.renderer.set_size(w as u32, h as u32)?;
        }
        Ok(())
    }
}

/// A running scene. Dropping it leaves the loop running; call [`stop`](Self::stop).
pub struct SceneContext<A> {
    shared: Rc<RefCell<Viewport<A>>>,
    frame: FrameLoop,
}

impl<A: Animated + 'static> SceneContext<A> {
    /// Builds the scene inside `#id`. Returns `Ok(None)` when the page has no
    /// such element.
    ///
    /// `after_step` runs every frame between the animation step and the draw.
    pub fn mount<B, H>(
        window: &Window,
        document: &Document,
        id: &str,
        build: B,
        mut after_step: H,
    ) -> Result<Option<Self>, JsValue>
    where
        B: FnOnce(f32) -> A,
        H: FnMut(&Viewport<A>) + 'static,
    {
        let Some(container) = document.get_element_by_id(id) else {
            log::debug!("#{id} not on this page, skipping scene");
            return Ok(None);
        };
        let container: HtmlElement = container.dyn_into()?;

        let (w, h) = container_size(&container);
        let aspect = if h > 0.0 { (w / h) as f32 } else { 1.0 };
        let view = build(aspect);

        let renderer = Renderer::new(document, &container, w as u32, h as u32)?;
        let meshes = view
            .scene()
            .meshes
            .iter()
            .map(|m| renderer.upload(&m.geometry))
            .collect::<Result<Vec<_>, _>>()?;

        let shared = Rc::new(RefCell::new(Viewport { view, container, renderer, meshes }));

        {
            let shared = shared.clone();
            listen(window, "resize", move |_| {
                if let Err(e) = shared.borrow_mut().resize() {
                    log::error!("resize failed: {e:?}");
                }
            })?;
        }

        let frame = {
            let shared = shared.clone();
            FrameLoop::start(move || {
                let time = js_sys::Date::now() * 0.001;
                let mut vp = shared.borrow_mut();
                vp.view.step(time);
                after_step(&*vp);
                vp.draw();
            })?
        };

        log::info!("#{id} scene mounted ({w}x{h})");
        Ok(Some(Self { shared, frame }))
    }

    pub(crate) fn shared(&self) -> Rc<RefCell<Viewport<A>>> {
        self.shared.clone()
    }

    pub fn stop(&self) {
        self.frame.stop();
    }
}

pub(crate) fn container_size(container: &HtmlElement) -> (f64, f64) {
    (container.offset_width() as f64, container.offset_height() as f64)
}
