//! `web-sys` implementation of the core document traits

use formguard_core::dom::{Document, Element, InputElement, SubmitElement};
use formguard_core::{FormError, FormResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

pub(crate) fn dom_error(err: JsValue) -> FormError {
    FormError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Any browser element, wrapped so the core traits can be implemented on it.
#[derive(Debug, Clone)]
pub struct WebNode<T>(pub T);

impl<T: AsRef<web_sys::Element>> Element for WebNode<T> {
    fn id(&self) -> String {
        self.0.as_ref().id()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.as_ref().get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> FormResult<()> {
        self.0.as_ref().set_attribute(name, value).map_err(dom_error)
    }

    fn remove_attribute(&self, name: &str) -> FormResult<()> {
        self.0.as_ref().remove_attribute(name).map_err(dom_error)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.as_ref().class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> FormResult<()> {
        self.0.as_ref().class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> FormResult<()> {
        self.0.as_ref().class_list().remove_1(class).map_err(dom_error)
    }
}

/// Text-bearing controls accepted as fields.
#[derive(Debug, Clone)]
pub enum FieldNode {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl AsRef<web_sys::Element> for FieldNode {
    fn as_ref(&self) -> &web_sys::Element {
        match self {
            FieldNode::Input(el) => el.as_ref(),
            FieldNode::TextArea(el) => el.as_ref(),
        }
    }
}

impl InputElement for WebNode<FieldNode> {
    fn value(&self) -> String {
        match &self.0 {
            FieldNode::Input(el) => el.value(),
            FieldNode::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match &self.0 {
            FieldNode::Input(el) => el.set_value(value),
            FieldNode::TextArea(el) => el.set_value(value),
        }
    }
}

/// A `<button>` or an `<input type="submit">`.
#[derive(Debug, Clone)]
pub enum SubmitNode {
    Button(HtmlButtonElement),
    Input(HtmlInputElement),
}

impl AsRef<web_sys::Element> for SubmitNode {
    fn as_ref(&self) -> &web_sys::Element {
        match self {
            SubmitNode::Button(el) => el.as_ref(),
            SubmitNode::Input(el) => el.as_ref(),
        }
    }
}

impl SubmitElement for WebNode<SubmitNode> {
    fn is_disabled(&self) -> bool {
        match &self.0 {
            SubmitNode::Button(el) => el.disabled(),
            SubmitNode::Input(el) => el.disabled(),
        }
    }

    fn set_disabled(&self, disabled: bool) {
        match &self.0 {
            SubmitNode::Button(el) => el.set_disabled(disabled),
            SubmitNode::Input(el) => el.set_disabled(disabled),
        }
    }
}

/// The page's `document`, plus the window for alerts.
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn from_window() -> FormResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| FormError::Dom("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| FormError::Dom("window has no document".to_string()))?;
        Ok(Self { window, document })
    }

    /// First element matching `selector`, used as the submit event target.
    pub fn form(&self, selector: &str) -> FormResult<web_sys::Element> {
        self.document
            .query_selector(selector)
            .map_err(dom_error)?
            .ok_or_else(|| FormError::MissingForm {
                selector: selector.to_string(),
            })
    }
}

impl Document for WebDocument {
    type Input = WebNode<FieldNode>;
    type Node = WebNode<web_sys::Element>;
    type Submit = WebNode<SubmitNode>;

    fn query_inputs(&self, selector: &str) -> FormResult<Vec<Self::Input>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(dom_error)?;

        let mut fields = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            let Some(node) = list.get(index) else {
                continue;
            };
            let field = match node.dyn_into::<HtmlInputElement>() {
                Ok(input) => FieldNode::Input(input),
                Err(node) => match node.dyn_into::<HtmlTextAreaElement>() {
                    Ok(area) => FieldNode::TextArea(area),
                    Err(_) => {
                        return Err(FormError::Dom(format!(
                            "element {} matching '{}' is not a text field",
                            index, selector
                        )))
                    }
                },
            };
            fields.push(WebNode(field));
        }
        Ok(fields)
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Node> {
        self.document.get_element_by_id(id).map(WebNode)
    }

    fn submit_by_id(&self, id: &str) -> Option<Self::Submit> {
        let element = self.document.get_element_by_id(id)?;
        let node = match element.dyn_into::<HtmlButtonElement>() {
            Ok(button) => SubmitNode::Button(button),
            Err(element) => match element.dyn_into::<HtmlInputElement>() {
                Ok(input) => SubmitNode::Input(input),
                Err(_) => {
                    web_sys::console::warn_1(&JsValue::from_str(&format!(
                        "#{} is neither a button nor an input",
                        id
                    )));
                    return None;
                }
            },
        };
        Some(WebNode(node))
    }

    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            web_sys::console::error_1(&err);
        }
    }
}
