//! Document abstraction
//!
//! The validator never touches a global document. It is handed a
//! [`Document`] and resolves everything it needs once, at bind time. The
//! browser binding implements these traits over `web-sys`; tests use
//! [`crate::memory::MemoryDocument`].
//!
//! All methods take `&self`: element handles are shared references into a
//! host-owned tree, exactly like JS element references.

use crate::error::FormResult;

/// Attribute and class access common to every element the validator uses.
pub trait Element {
    /// Value of the `id` attribute, empty when absent.
    fn id(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> FormResult<()>;
    fn remove_attribute(&self, name: &str) -> FormResult<()>;

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> FormResult<()>;
    fn remove_class(&self, class: &str) -> FormResult<()>;
}

/// A text-bearing input.
pub trait InputElement: Element {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// The button gating submission.
pub trait SubmitElement: Element {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

/// Lookup and user-notification surface of a host document.
pub trait Document {
    type Input: InputElement;
    type Node: Element;
    type Submit: SubmitElement;

    /// Elements matching `selector`, in document order.
    fn query_inputs(&self, selector: &str) -> FormResult<Vec<Self::Input>>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn submit_by_id(&self, id: &str) -> Option<Self::Submit>;

    /// Blocking acknowledgment shown to the user.
    fn notify(&self, message: &str);
}
