//! In-memory document
//!
//! A small element store implementing the [`Document`] traits, so the
//! validator can be exercised without a browser. Selectors are limited to a
//! single `.class`, `#id` or tag name.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::{Document, Element, InputElement, SubmitElement};
use crate::error::{FormError, FormResult};

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    value: String,
    disabled: bool,
}

/// Shared handle to an element; clones point at the same node.
#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<NodeData>>);

impl MemoryElement {
    fn new(tag: &str) -> Self {
        MemoryElement(Rc::new(RefCell::new(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        })))
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        {
            let mut node = self.0.borrow_mut();
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
        self
    }

    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Class(class) => self.has_class(class),
            Selector::Id(id) => self.id() == *id,
            Selector::Tag(tag) => self.0.borrow().tag.eq_ignore_ascii_case(tag),
        }
    }
}

// classList rejects empty tokens and tokens with whitespace
fn check_token(class: &str) -> FormResult<()> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(FormError::Dom(format!("invalid class token {:?}", class)));
    }
    Ok(())
}

impl Element for MemoryElement {
    fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> FormResult<()> {
        if name.is_empty() {
            return Err(FormError::Dom("empty attribute name".to_string()));
        }
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> FormResult<()> {
        self.0.borrow_mut().attributes.remove(name);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) -> FormResult<()> {
        check_token(class)?;
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> FormResult<()> {
        check_token(class)?;
        self.0.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }
}

impl InputElement for MemoryElement {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }
}

impl SubmitElement for MemoryElement {
    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }
}

enum Selector {
    Class(String),
    Id(String),
    Tag(String),
}

impl Selector {
    fn parse(selector: &str) -> FormResult<Self> {
        let selector = selector.trim();
        let simple = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        };
        let parsed = if let Some(class) = selector.strip_prefix('.') {
            simple(class).then(|| Selector::Class(class.to_string()))
        } else if let Some(id) = selector.strip_prefix('#') {
            simple(id).then(|| Selector::Id(id.to_string()))
        } else {
            simple(selector).then(|| Selector::Tag(selector.to_string()))
        };
        parsed.ok_or_else(|| FormError::Dom(format!("unsupported selector {:?}", selector)))
    }
}

/// Document made of elements appended in order.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: RefCell<Vec<MemoryElement>>,
    notifications: RefCell<Vec<String>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bare element and return a handle to it.
    pub fn append(&self, tag: &str) -> MemoryElement {
        let element = MemoryElement::new(tag);
        self.nodes.borrow_mut().push(element.clone());
        element
    }

    /// Append an `.input-field` input wired to a warning `<span>`.
    pub fn add_field(&self, id: &str, type_attr: &str, warning_id: &str) -> MemoryElement {
        let input = self
            .append("input")
            .with_attr("id", id)
            .with_attr("type", type_attr)
            .with_attr("aria-describedby", warning_id)
            .with_class("input-field");
        self.append("span")
            .with_attr("id", warning_id)
            .with_class("warning");
        input
    }

    pub fn add_submit(&self, id: &str) -> MemoryElement {
        self.append("button")
            .with_attr("id", id)
            .with_attr("type", "submit")
    }

    /// Messages passed to [`Document::notify`], oldest first.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }

    fn find(&self, id: &str) -> Option<MemoryElement> {
        if id.is_empty() {
            return None;
        }
        self.nodes.borrow().iter().find(|n| n.id() == id).cloned()
    }
}

impl Document for MemoryDocument {
    type Input = MemoryElement;
    type Node = MemoryElement;
    type Submit = MemoryElement;

    fn query_inputs(&self, selector: &str) -> FormResult<Vec<MemoryElement>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .nodes
            .borrow()
            .iter()
            .filter(|n| n.matches(&selector))
            .cloned()
            .collect())
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.find(id)
    }

    fn submit_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.find(id)
    }

    fn notify(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_in_document_order() {
        let doc = MemoryDocument::new();
        doc.add_field("name", "text", "name-warning");
        doc.add_submit("btn");
        doc.add_field("email", "email", "email-warning");

        let ids: Vec<String> = doc
            .query_inputs(".input-field")
            .unwrap()
            .iter()
            .map(Element::id)
            .collect();
        assert_eq!(ids, vec!["name", "email"]);

        assert_eq!(doc.query_inputs("span").unwrap().len(), 2);
        assert_eq!(doc.query_inputs("#btn").unwrap().len(), 1);
    }

    #[test]
    fn test_unsupported_selector() {
        let doc = MemoryDocument::new();
        assert!(matches!(
            doc.query_inputs("form .input-field"),
            Err(FormError::Dom(_))
        ));
        assert!(doc.query_inputs(".").is_err());
    }

    #[test]
    fn test_handles_share_state() {
        let doc = MemoryDocument::new();
        let input = doc.add_field("name", "text", "w");
        let found = doc.query_inputs(".input-field").unwrap().remove(0);
        found.set_value("hello");
        found.add_class("valid").unwrap();
        assert_eq!(input.value(), "hello");
        assert!(input.has_class("valid"));
    }

    #[test]
    fn test_class_tokens() {
        let doc = MemoryDocument::new();
        let el = doc.append("div");
        el.add_class("show").unwrap();
        el.add_class("show").unwrap();
        assert_eq!(el.classes(), vec!["show"]);
        assert!(el.add_class("").is_err());
        assert!(el.remove_class("a b").is_err());
        el.remove_class("show").unwrap();
        assert!(el.classes().is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let doc = MemoryDocument::new();
        doc.add_submit("btn");
        assert!(doc.submit_by_id("btn").is_some());
        assert!(doc.element_by_id("missing").is_none());
        assert!(doc.element_by_id("").is_none());
    }
}
