use thiserror::Error;

/// Errors raised while binding or driving a form.
///
/// Evaluating a value never fails; everything here is either a page
/// structure problem found at bind time or a host DOM call that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("submit control '#{id}' not found")]
    MissingSubmitControl { id: String },

    #[error("form matching '{selector}' not found")]
    MissingForm { selector: String },

    #[error("field #{index} has no aria-describedby attribute")]
    MissingDescribedBy { index: usize },

    #[error("field '{field}' references missing warning '#{warning}'")]
    DanglingWarning { field: String, warning: String },

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type FormResult<T> = Result<T, FormError>;
