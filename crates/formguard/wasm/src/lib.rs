//! formguard WASM
//!
//! Browser bindings for formguard. `attach()` binds the validator to the
//! page, re-validates on every `input` event and handles `submit` without
//! navigating away.
//!
//! # Example (JavaScript)
//! ```javascript
//! import init, { attach } from './formguard_wasm.js';
//!
//! await init();
//! const guard = attach();            // default selectors
//! // attach({ submitId: 'send' });   // or override any key
//! ```

pub mod dom;

use std::rc::Rc;

use formguard_core::{is_email_shaped, FieldKind, FormConfig, FormError, FormValidator};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use dom::{FieldNode, SubmitNode, WebDocument, WebNode};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn report(err: &FormError) {
    web_sys::console::error_1(&JsValue::from_str(&format!("formguard: {}", err)));
}

fn to_js(err: FormError) -> JsValue {
    report(&err);
    JsValue::from_str(&err.to_string())
}

fn parse_config(config: JsValue) -> Result<FormConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(FormConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// A validator wired to a live page.
///
/// Dropping the handle (or calling `detach()`) removes its listeners.
#[wasm_bindgen]
pub struct FormGuard {
    validator: Rc<FormValidator<WebDocument>>,
    form: web_sys::Element,
    on_submit: Listener,
    on_input: Listener,
}

/// Bind to `window.document` and start listening.
///
/// `config` is optional; keys are camelCase (`submitId`, `fieldSelector`,
/// `showClass`, ...). Fails if the form, the submit control or any field's
/// warning element is missing.
#[wasm_bindgen]
pub fn attach(config: JsValue) -> Result<FormGuard, JsValue> {
    let config = parse_config(config)?;
    let document = WebDocument::from_window().map_err(to_js)?;
    let form = document.form(&config.form_selector).map_err(to_js)?;
    let validator = Rc::new(FormValidator::bind(document, config).map_err(to_js)?);

    let on_submit: Listener = {
        let validator = Rc::clone(&validator);
        Closure::new(move |event: web_sys::Event| {
            event.prevent_default();
            if let Err(err) = validator.handle_submit() {
                report(&err);
            }
        })
    };

    let on_input: Listener = {
        let validator = Rc::clone(&validator);
        Closure::new(move |_event: web_sys::Event| {
            if let Err(err) = validator.handle_input() {
                report(&err);
            }
        })
    };

    // Drop unregisters whatever add_listeners managed to add
    let guard = FormGuard {
        validator,
        form,
        on_submit,
        on_input,
    };
    guard.add_listeners()?;
    Ok(guard)
}

#[wasm_bindgen]
impl FormGuard {
    /// Number of bound fields
    #[wasm_bindgen(getter, js_name = fieldCount)]
    pub fn field_count(&self) -> usize {
        self.validator.field_count()
    }

    /// Re-validate every field; returns `{ allValid, outcomes }`.
    pub fn validate(&self) -> Result<JsValue, JsValue> {
        let report = self.validator.validate_fields().map_err(to_js)?;
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// Run the submit flow without a submit event; returns `{ status, ... }`.
    pub fn submit(&self) -> Result<JsValue, JsValue> {
        let outcome = self.validator.handle_submit().map_err(to_js)?;
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    pub fn clear(&self) -> Result<(), JsValue> {
        self.validator.clear_fields().map_err(to_js)
    }

    /// Remove the listeners and release the validator.
    pub fn detach(self) {}
}

impl FormGuard {
    fn add_listeners(&self) -> Result<(), JsValue> {
        self.form
            .add_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref())?;
        for input in self.validator.inputs() {
            let target: &web_sys::Element = input.0.as_ref();
            target
                .add_event_listener_with_callback("input", self.on_input.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    fn remove_listeners(&self) {
        let _ = self
            .form
            .remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref());
        for input in self.validator.inputs() {
            let target: &web_sys::Element = input.0.as_ref();
            let _ = target
                .remove_event_listener_with_callback("input", self.on_input.as_ref().unchecked_ref());
        }
    }
}

impl Drop for FormGuard {
    fn drop(&mut self) {
        self.remove_listeners();
    }
}

/// Quick email-shape check
#[wasm_bindgen(js_name = isEmailShaped)]
pub fn is_email_shaped_js(value: &str) -> bool {
    is_email_shaped(value)
}

/// Check a single value as a field of the given `type` would be checked.
#[wasm_bindgen(js_name = checkValue)]
pub fn check_value_js(type_attr: Option<String>, value: &str) -> bool {
    FieldKind::from_type_attr(type_attr.as_deref())
        .check(value)
        .is_valid()
}
