//! formguard core
//!
//! DOM-independent form validation: the email-shape check, field kind
//! dispatch, configuration and the [`FormValidator`] that drives any
//! [`Document`] implementation. The browser binding lives in `formguard-wasm`;
//! tests drive the validator through [`memory::MemoryDocument`].

pub mod config;
pub mod dom;
pub mod email;
pub mod error;
pub mod field;
pub mod memory;
pub mod validator;
pub mod whitespace;

pub use config::FormConfig;
pub use dom::{Document, Element, InputElement, SubmitElement};
pub use email::is_email_shaped;
pub use error::{FormError, FormResult};
pub use field::{FieldKind, MarkState, Verdict};
pub use validator::{FieldOutcome, FormValidator, SubmitOutcome, ValidationReport};
