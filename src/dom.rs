use crate::constants::*;
use crate::links;
use site_core::{SiteConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current viewport in CSS pixels (`innerWidth` × `innerHeight`).
pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(
        read(window.inner_width()) as f32,
        read(window.inner_height()) as f32,
    )
}

pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let (w, h) = links::backing_size(
        viewport.width as f64,
        viewport.height as f64,
        MIN_BACKING_PX,
    );
    canvas.set_width(w);
    canvas.set_height(h);
}

/// Fills config-driven hrefs and labels (`data-link`, `data-rate`, `data-email`).
pub fn bind_contact_details(document: &web::Document, config: &SiteConfig) {
    for_each_match(document, LINK_SELECTOR, |el| {
        let Some(kind) = el.get_attribute(LINK_ATTR) else {
            return;
        };
        match links::link_href(&kind, config) {
            Some(href) => {
                let _ = el.set_attribute("href", &href);
            }
            None => log::warn!(
                "[dom] unknown data-link kind {:?} (expected one of {:?})",
                kind,
                links::LINK_KINDS
            ),
        }
    });
    let rate = config.hourly_rate_label();
    for_each_match(document, RATE_SELECTOR, |el| el.set_text_content(Some(&rate)));
    for_each_match(document, EMAIL_TEXT_SELECTOR, |el| {
        el.set_text_content(Some(&config.email))
    });
}

fn for_each_match(document: &web::Document, selector: &str, mut f: impl FnMut(&web::Element)) {
    let list = match document.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::error!("[dom] bad selector {}: {:?}", selector, e);
            return;
        }
    };
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            f(&el);
        }
    }
}

/// Writes an outcome label and its state tag into a status element.
pub fn show_status(el: &web::Element, label: &str, tag: &str) {
    el.set_text_content(Some(label));
    let _ = el.set_attribute(STATE_ATTR, tag);
}
