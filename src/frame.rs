use crate::canvas::CanvasPainter;
use crate::dom;
use site_core::{Animator, FrameOutcome, ViewportWriter};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running background: animator, its rAF chain, and the resize listener.
pub struct Background {
    animator: Rc<RefCell<Animator>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: FrameCallback,
    resize: Option<Closure<dyn FnMut()>>,
}

impl Background {
    /// Sizes the canvas to the viewport, seeds the particles and starts the loop.
    pub fn start(window: &web::Window, canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let viewport = dom::viewport(window);
        dom::size_canvas(&canvas, viewport);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let animator = Animator::start(&mut rand::thread_rng(), viewport);
        log::info!(
            "[background] {}x{} particles={}",
            viewport.width,
            viewport.height,
            animator.particles().len()
        );
        let resize = wire_resize(window, canvas, animator.resize_handle());

        let mut background = Self {
            animator: Rc::new(RefCell::new(animator)),
            raf_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
            resize: Some(resize),
        };
        background.start_loop(CanvasPainter::new(ctx));
        Ok(background)
    }

    fn start_loop(&mut self, mut painter: CanvasPainter) {
        let animator = self.animator.clone();
        let raf_id = self.raf_id.clone();
        let tick_clone = self.tick.clone();
        let token = self.animator.borrow().token();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id.set(None);
            let outcome = animator.borrow_mut().frame(&mut painter);
            if outcome == FrameOutcome::Continue && token.should_rearm() {
                raf_id.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut()>));
        self.raf_id.set(request_frame(&self.tick));
    }

    /// Cancels the pending frame, removes the resize listener and drops the
    /// loop closure. Idempotent.
    pub fn teardown(&mut self) {
        self.animator.borrow().teardown();
        let window = web::window();
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = &window {
                let _ = w.cancel_animation_frame(id);
            }
        }
        if let Some(resize) = self.resize.take() {
            if let Some(w) = &window {
                let _ = w.remove_event_listener_with_callback(
                    "resize",
                    resize.as_ref().unchecked_ref(),
                );
            }
        }
        // Breaks the closure's self-reference so it can be freed.
        self.tick.borrow_mut().take();
        log::info!("[background] stopped");
    }
}

fn request_frame(tick: &FrameCallback) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            None
        }
    }
}

// Resize only re-measures the surface; the particle set is left alone.
fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    writer: ViewportWriter,
) -> Closure<dyn FnMut()> {
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let viewport = dom::viewport(&w);
        if writer.set(viewport) {
            dom::size_canvas(&canvas, viewport);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure
}
