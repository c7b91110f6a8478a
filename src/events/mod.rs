pub mod forms;

pub use forms::wire_forms;

use site_core::releases_on_pagehide;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Runs `handler` when the page is unloaded for good. Hides into the
/// back/forward cache (`persisted`) leave the background running.
pub fn on_pagehide(window: &web::Window, handler: impl Fn() + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if releases_on_pagehide(ev.persisted()) {
            handler();
        } else {
            log::debug!("[events] pagehide into back/forward cache; keeping background");
        }
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
