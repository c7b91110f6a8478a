use site_core::{Composer, DeliveryError, Transport, TransportResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> DeliveryError {
    DeliveryError::Transport(format!("{:?}", e))
}

/// `fetch`-backed transport. Relies on the browser's own timeout.
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<TransportResponse, DeliveryError> {
        let window = web::window().ok_or_else(|| DeliveryError::Transport("no window".into()))?;

        let headers = web::Headers::new().map_err(js_err)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
        headers.set("Accept", "application/json").map_err(js_err)?;

        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_mode(web::RequestMode::Cors);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));

        let request = web::Request::new_with_str_and_init(url, &init).map_err(js_err)?;
        let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        Ok(TransportResponse {
            status: response.status(),
        })
    }
}

/// Opens the default mail client by navigating to a `mailto:` URI.
pub struct LocationComposer;

impl Composer for LocationComposer {
    fn compose(&self, uri: &str) {
        let Some(window) = web::window() else {
            log::error!("[compose] no window");
            return;
        };
        if let Err(e) = window.location().set_href(uri) {
            log::error!("[compose] navigation failed: {:?}", e);
        }
    }
}
