#![cfg(target_arch = "wasm32")]
use site_core::SiteConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod links;
mod net;

use constants::CANVAS_ID;

thread_local! {
    static BACKGROUND: RefCell<Option<frame::Background>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = Rc::new(SiteConfig::default());
    dom::bind_contact_details(&document, &config);
    if config.endpoint().is_none() {
        log::info!("FORM_ENDPOINT not set; forms will open the mail client");
    }
    events::wire_forms(&document, config);

    // Forms keep working without the decorative background.
    match start_background(&window, &document) {
        Ok(background) => {
            BACKGROUND.with(|b| *b.borrow_mut() = Some(background));
            events::on_pagehide(&window, teardown);
        }
        Err(e) => log::warn!("background disabled: {:?}", e),
    }
    Ok(())
}

fn start_background(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<frame::Background> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    frame::Background::start(window, canvas)
}

/// Stops the background animation and removes its resize listener.
#[wasm_bindgen]
pub fn teardown() {
    let background = BACKGROUND.with(|b| b.borrow_mut().take());
    if let Some(mut background) = background {
        background.teardown();
    }
}
