//! Browser entry point: mounts the planner page at DOM-ready and wires every
//! listener the templates rely on.

use std::rc::Rc;

use client_core::{ChatTransport, HttpChatTransport, MissingChatTransport};
use shared::protocol::ChatContext;
use tracing::{debug, info, warn};
use wasm_bindgen::{
    closure::{Closure, WasmClosure},
    prelude::*,
    JsCast,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget, HtmlElement, KeyboardEvent, Window};

use crate::{
    controller::{chat::is_submit_key, modal::ClickTarget},
    globals::{PageGlobal, DAYS_GLOBAL, DESTINATION_GLOBAL},
    page::{ids, PlannerPage},
};

mod console;
mod handles;

pub use handles::{WebDocument, WebElement, WebMessageLog};

type WebPage = PlannerPage<WebDocument, Rc<dyn ChatTransport>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console::init_logging();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", |_| {
            if let Err(err) = initialize() {
                warn!(error = ?err, "planner page initialization failed");
            }
        })
    } else {
        initialize()
    }
}

fn initialize() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let context = ChatContext::from_page(
        page_global(&window, DESTINATION_GLOBAL),
        page_global(&window, DAYS_GLOBAL),
    );
    let page = Rc::new(PlannerPage::mount(
        &WebDocument::new(document.clone()),
        chat_transport(&window),
        context,
    ));

    bind_travelers(&window, &document, &page)?;
    bind_form(&document, &page)?;
    bind_modal(&window, &document, &page)?;
    bind_chat(&document, &page)?;
    info!("planner page ready");
    Ok(())
}

fn chat_transport(window: &Window) -> Rc<dyn ChatTransport> {
    let origin = match window.location().origin() {
        Ok(origin) => origin,
        Err(err) => {
            warn!(error = ?err, "page origin unavailable; chat disabled");
            return Rc::new(MissingChatTransport);
        }
    };
    match HttpChatTransport::for_origin(&origin) {
        Ok(transport) => {
            debug!(endpoint = %transport.endpoint(), "chat endpoint resolved");
            Rc::new(transport)
        }
        Err(err) => {
            warn!(error = %err, "chat endpoint unresolved; chat disabled");
            Rc::new(MissingChatTransport)
        }
    }
}

/// Reads an optional global the hosting page may define. `window`
/// properties are checked first; script-level `const`/`let` bindings are
/// not on `window` and need a lookup in global scope.
fn page_global(window: &Window, name: &str) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined())
        .or_else(|| lexical_global(name))?;
    classify(&value).into_context_text()
}

/// `name` is one of our own identifiers, never page input. Indirect eval
/// runs in global scope; a page whose CSP forbids it gets the defaults.
fn lexical_global(name: &str) -> Option<JsValue> {
    let lookup = format!("typeof {name} !== 'undefined' ? {name} : undefined");
    match js_sys::eval(&lookup) {
        Ok(value) if !value.is_undefined() => Some(value),
        Ok(_) => None,
        Err(err) => {
            debug!(global = name, error = ?err, "global lookup failed");
            None
        }
    }
}

fn classify(value: &JsValue) -> PageGlobal {
    if value.is_undefined() {
        PageGlobal::Undefined
    } else if value.is_null() {
        PageGlobal::Null
    } else if let Some(flag) = value.as_bool() {
        PageGlobal::Bool(flag)
    } else if let Some(number) = value.as_f64() {
        PageGlobal::Number(number)
    } else if let Some(text) = value.as_string() {
        PageGlobal::Text(text)
    } else {
        PageGlobal::Other
    }
}

fn bind_travelers(window: &Window, document: &Document, page: &Rc<WebPage>) -> Result<(), JsValue> {
    if let Some(selector) = document.get_element_by_id(ids::TRAVELERS_TYPE) {
        let page = page.clone();
        listen(&selector, "change", move |_| page.toggle_traveler_count())?;
    }

    let toggle_page = page.clone();
    expose(
        window,
        "toggleTravelerCount",
        Closure::<dyn FnMut()>::new(move || toggle_page.toggle_traveler_count()),
    )?;

    let adjust_page = page.clone();
    expose(
        window,
        "adjustTravelers",
        Closure::<dyn FnMut(f64)>::new(move |delta: f64| {
            adjust_page.adjust_travelers(delta as i64)
        }),
    )
}

fn bind_form(document: &Document, page: &Rc<WebPage>) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id(ids::PLANNER_FORM) else {
        return Ok(());
    };
    let page = page.clone();
    listen(&form, "submit", move |_| {
        page.submit_form();
    })
}

fn bind_modal(window: &Window, document: &Document, page: &Rc<WebPage>) -> Result<(), JsValue> {
    if let Ok(Some(close)) = document.query_selector(ids::CLOSE_MODAL_SELECTOR) {
        let page = page.clone();
        listen(&close, "click", move |_| page.close_modal())?;
    }

    if let Some(root) = document
        .get_element_by_id(ids::PLACE_MODAL)
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        .map(WebElement::new)
    {
        let page = page.clone();
        listen(window, "click", move |event| {
            let target = if root.is_target(event.target().as_ref()) {
                ClickTarget::Backdrop
            } else {
                ClickTarget::Elsewhere
            };
            page.handle_window_click(target);
        })?;
    }

    let open_page = page.clone();
    expose(
        window,
        "openPlaceModal",
        Closure::<dyn FnMut(JsValue)>::new(move |source: JsValue| {
            match source.dyn_into::<HtmlElement>() {
                Ok(element) => open_page.open_place_modal(&WebElement::new(element)),
                Err(_) => warn!("openPlaceModal called without an element"),
            }
        }),
    )
}

fn bind_chat(document: &Document, page: &Rc<WebPage>) -> Result<(), JsValue> {
    if let Some(toggle) = document.get_element_by_id(ids::CHAT_TOGGLE) {
        let page = page.clone();
        listen(&toggle, "click", move |_| page.open_chat())?;
    }
    if let Some(close) = document.get_element_by_id(ids::CLOSE_CHAT) {
        let page = page.clone();
        listen(&close, "click", move |_| page.close_chat())?;
    }
    if let Some(send) = document.get_element_by_id(ids::SEND_BUTTON) {
        let page = page.clone();
        listen(&send, "click", move |_| send_chat(&page))?;
    }
    if let Some(input) = document.get_element_by_id(ids::CHAT_INPUT) {
        let page = page.clone();
        listen(&input, "keypress", move |event| {
            let submit = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| is_submit_key(&key.key()));
            if submit {
                send_chat(&page);
            }
        })?;
    }
    Ok(())
}

/// Runs the synchronous half of a send inside the event handler and leaves
/// the exchange to the event loop.
fn send_chat(page: &Rc<WebPage>) {
    let Some(pending) = page.begin_chat_send() else {
        return;
    };
    let page = page.clone();
    spawn_local(async move {
        let outcome = page.complete_chat_send(pending).await;
        debug!(?outcome, "chat exchange settled");
    });
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Publishes a handler on `window` for inline `onclick`/`onchange` markup.
fn expose<F>(window: &Window, name: &str, closure: Closure<F>) -> Result<(), JsValue>
where
    F: ?Sized + WasmClosure,
{
    js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
#[path = "tests/web_tests.rs"]
mod tests;
