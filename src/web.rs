//! Browser shim: wires the controller to page events.
//!
//! Once the DOM is parsed `initialize` runs once; each `click` on the toggle
//! control runs `on_toggle_click`. The listeners stay registered for the
//! lifetime of the page, so their closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::ToggleConfig;
use crate::controller::ThemeToggleController;
use crate::dom::{dom_is_parsed, WebBody, WebControl};
use crate::error::{Result, ThemeError};
use crate::store::LocalStorageStore;

type WebController = ThemeToggleController<LocalStorageStore, WebBody, WebControl>;

/// Set up the toggle once the DOM is parsed.
///
/// wasm modules usually finish loading after `DOMContentLoaded` has fired,
/// so setup runs immediately unless the document is still loading.
pub fn attach(config: ToggleConfig) -> Result<()> {
    let document = web_sys::window()
        .ok_or(ThemeError::NoWindow)?
        .document()
        .ok_or(ThemeError::NoDocument)?;

    if dom_is_parsed(&document.ready_state()) {
        setup(config);
        return Ok(());
    }

    let on_ready = Closure::<dyn FnMut(web_sys::Event)>::once(move |_: web_sys::Event| {
        setup(config);
    });

    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Listener {
            event: "DOMContentLoaded",
            reason: format!("{:?}", e),
        })?;
    on_ready.forget();

    Ok(())
}

fn setup(config: ToggleConfig) {
    if let Err(e) = on_dom_ready(config) {
        web_sys::console::error_1(&format!("theme toggle: {}", e).into());
    }
}

/// Build the controller against the live page and apply the stored theme.
fn on_dom_ready(config: ToggleConfig) -> Result<()> {
    let document = web_sys::window()
        .ok_or(ThemeError::NoWindow)?
        .document()
        .ok_or(ThemeError::NoDocument)?;
    let body = document.body().ok_or(ThemeError::NoBody)?;
    let control = document
        .get_element_by_id(&config.control_id)
        .map(WebControl::new);

    // Keep a handle for listener registration; the controller owns its copy.
    let target = control.as_ref().map(|c| c.element().clone());

    let controller: Rc<RefCell<WebController>> = Rc::new(RefCell::new(
        ThemeToggleController::new(LocalStorageStore::new(), WebBody::new(body), control, config),
    ));
    controller.borrow_mut().initialize();

    // No control on this page: nothing to click.
    let Some(target) = target else {
        return Ok(());
    };

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        controller.borrow_mut().on_toggle_click();
    });
    target
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Listener {
            event: "click",
            reason: format!("{:?}", e),
        })?;
    on_click.forget();

    Ok(())
}

/// JS entry point for plain HTML pages, using the default page contract.
#[wasm_bindgen(js_name = attachThemeToggle)]
pub fn attach_default() -> std::result::Result<(), JsValue> {
    attach(ToggleConfig::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JS entry point taking config overrides as JSON, e.g.
/// `attachThemeToggleWith('{"marker_class": "night"}')`.
#[wasm_bindgen(js_name = attachThemeToggleWith)]
pub fn attach_with_json(config_json: &str) -> std::result::Result<(), JsValue> {
    ToggleConfig::from_json(config_json)
        .and_then(attach)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
