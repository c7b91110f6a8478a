use crate::constants::*;
use crate::dom;
use crate::net::{FetchTransport, LocationComposer};
use site_core::{submit_contact, submit_newsletter, ContactForm, SiteConfig, SubmitGuard};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Attaches a `submit` listener to `form_id` (if present). The handler runs
/// with the default action prevented and the form element resolved.
fn on_submit(
    document: &web::Document,
    form_id: &str,
    mut handler: impl FnMut(web::HtmlFormElement) + 'static,
) {
    let Some(el) = document.get_element_by_id(form_id) else {
        log::warn!("[forms] #{} not found", form_id);
        return;
    };
    let Ok(form) = el.dyn_into::<web::HtmlFormElement>() else {
        log::error!("[forms] #{} is not a form", form_id);
        return;
    };
    let target = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        handler(target.clone());
    }) as Box<dyn FnMut(web::Event)>);
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn form_value(data: &web::FormData, field: &str) -> Option<String> {
    data.get(field).as_string()
}

fn read_contact(form: &web::HtmlFormElement) -> Option<ContactForm> {
    let data = match web::FormData::new_with_form(form) {
        Ok(d) => d,
        Err(e) => {
            log::error!("[forms] FormData error: {:?}", e);
            return None;
        }
    };
    Some(ContactForm::from_pairs(
        CONTACT_FIELDS
            .iter()
            .filter_map(|field| form_value(&data, field).map(|v| (*field, v))),
    ))
}

pub fn wire_contact_form(document: &web::Document, form_id: &'static str, config: Rc<SiteConfig>) {
    let guard = SubmitGuard::new();
    on_submit(document, form_id, move |form| {
        let Some(ticket) = guard.try_begin() else {
            log::info!("[forms] #{} submission already in flight", form_id);
            return;
        };
        let Some(contact) = read_contact(&form) else {
            return;
        };
        let status_el = form.query_selector(STATUS_SELECTOR).ok().flatten();
        if let Some(el) = &status_el {
            el.set_text_content(None);
        }
        let config = config.clone();
        spawn_local(async move {
            let _ticket = ticket;
            let outcome = submit_contact(
                &config,
                &contact,
                &FetchTransport,
                &LocationComposer,
                |status| {
                    if let Some(el) = &status_el {
                        dom::show_status(el, status.label(), status.tag());
                    }
                },
            )
            .await;
            log::info!("[forms] #{} -> {:?}", form_id, outcome.status);
            if outcome.clears_form() {
                form.reset();
            }
        });
    });
}

pub fn wire_newsletter_form(document: &web::Document, config: Rc<SiteConfig>) {
    let guard = SubmitGuard::new();
    let message_el = document.get_element_by_id(NEWSLETTER_MSG_ID);
    on_submit(document, NEWSLETTER_FORM_ID, move |form| {
        let Some(ticket) = guard.try_begin() else {
            return;
        };
        let email = web::FormData::new_with_form(&form)
            .ok()
            .and_then(|d| form_value(&d, NEWSLETTER_FIELD))
            .unwrap_or_default();
        let config = config.clone();
        let message_el = message_el.clone();
        spawn_local(async move {
            let _ticket = ticket;
            let message = submit_newsletter(&config, &email, &FetchTransport).await;
            if let Some(el) = &message_el {
                el.set_text_content(Some(message.label()));
            }
            if message.clears_form() {
                form.reset();
            }
        });
    });
}

pub fn wire_forms(document: &web::Document, config: Rc<SiteConfig>) {
    for id in CONTACT_FORM_IDS {
        wire_contact_form(document, id, config.clone());
    }
    wire_newsletter_form(document, config);
}
