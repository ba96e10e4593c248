//! Form validator
//!
//! Binds to a [`Document`] once, then re-evaluates every field on demand and
//! keeps classes, the `aria-invalid` marker, warning visibility and the
//! submit control in sync with the result.

use serde::Serialize;

use crate::config::FormConfig;
use crate::dom::{Document, Element, InputElement, SubmitElement};
use crate::error::{FormError, FormResult};
use crate::field::{FieldKind, MarkState, Verdict};

const ARIA_DESCRIBEDBY: &str = "aria-describedby";
const ARIA_INVALID: &str = "aria-invalid";

/// A field with its warning resolved at bind time.
struct BoundField<D: Document> {
    name: String,
    input: D::Input,
    warning_id: String,
    warning: D::Node,
}

/// Result of evaluating one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOutcome {
    pub field: String,
    pub warning: String,
    pub kind: FieldKind,
    pub verdict: Verdict,
}

/// Outcome of one [`FormValidator::validate_fields`] pass, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    all_valid: bool,
    outcomes: Vec<FieldOutcome>,
}

impl ValidationReport {
    pub fn new(outcomes: Vec<FieldOutcome>) -> Self {
        let all_valid = outcomes.iter().all(|o| o.verdict.is_valid());
        Self {
            all_valid,
            outcomes,
        }
    }

    /// True when no field was invalid (vacuously true for an empty form).
    pub fn all_valid(&self) -> bool {
        self.all_valid
    }

    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    pub fn invalid_fields(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| !o.verdict.is_valid())
            .map(|o| o.field.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Every field was valid; the user was notified and the form cleared.
    Accepted,
    /// Markings are left in place for correction.
    Rejected { invalid: Vec<String> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

pub struct FormValidator<D: Document> {
    document: D,
    config: FormConfig,
    fields: Vec<BoundField<D>>,
    submit: D::Submit,
}

impl<D: Document> FormValidator<D> {
    /// Resolve the submit control, the fields and each field's warning.
    ///
    /// Fails fast on broken page structure instead of at the first keystroke.
    pub fn bind(document: D, config: FormConfig) -> FormResult<Self> {
        let submit = document.submit_by_id(&config.submit_id).ok_or_else(|| {
            FormError::MissingSubmitControl {
                id: config.submit_id.clone(),
            }
        })?;

        let inputs = document.query_inputs(&config.field_selector)?;
        let mut fields = Vec::with_capacity(inputs.len());

        for (index, input) in inputs.into_iter().enumerate() {
            let name = field_name(&input, index);
            let warning_id = input
                .attribute(ARIA_DESCRIBEDBY)
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .ok_or(FormError::MissingDescribedBy { index })?;
            let warning = document.element_by_id(&warning_id).ok_or_else(|| {
                FormError::DanglingWarning {
                    field: name.clone(),
                    warning: warning_id.clone(),
                }
            })?;

            fields.push(BoundField {
                name,
                input,
                warning_id,
                warning,
            });
        }

        tracing::info!(
            fields = fields.len(),
            submit = %config.submit_id,
            "form bound"
        );

        Ok(Self {
            document,
            config,
            fields,
            submit,
        })
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn submit_control(&self) -> &D::Submit {
        &self.submit
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Bound inputs in document order.
    pub fn inputs(&self) -> impl Iterator<Item = &D::Input> {
        self.fields.iter().map(|f| &f.input)
    }

    /// Current visual state of every field.
    pub fn mark_states(&self) -> Vec<(String, MarkState)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), MarkState::observe(&f.input, &self.config)))
            .collect()
    }

    /// Evaluate every field, update its markings and gate the submit control.
    ///
    /// If a DOM call fails part way, the submit control is disabled before
    /// the error is returned.
    pub fn validate_fields(&self) -> FormResult<ValidationReport> {
        let mut outcomes = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            match self.evaluate(field) {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => {
                    self.submit.set_disabled(true);
                    tracing::error!(field = %field.name, error = %err, "validation aborted");
                    return Err(err);
                }
            }
        }

        let report = ValidationReport::new(outcomes);
        self.submit.set_disabled(!report.all_valid());

        tracing::debug!(
            fields = report.len(),
            invalid = report.invalid_fields().len(),
            "fields validated"
        );
        Ok(report)
    }

    fn evaluate(&self, field: &BoundField<D>) -> FormResult<FieldOutcome> {
        let config = &self.config;
        field.input.remove_class(&config.valid_class)?;
        field.input.remove_class(&config.invalid_class)?;

        let kind = FieldKind::from_type_attr(field.input.attribute("type").as_deref());
        let verdict = kind.check(&field.input.value());

        match verdict {
            Verdict::Invalid => {
                field.input.add_class(&config.invalid_class)?;
                field.warning.add_class(&config.show_class)?;
                field.input.set_attribute(ARIA_INVALID, "true")?;
            }
            Verdict::Valid => {
                field.input.add_class(&config.valid_class)?;
                field.warning.remove_class(&config.show_class)?;
                field.input.remove_attribute(ARIA_INVALID)?;
            }
        }

        Ok(FieldOutcome {
            field: field.name.clone(),
            warning: field.warning_id.clone(),
            kind,
            verdict,
        })
    }

    /// Empty every field and return it to the unmarked state.
    pub fn clear_fields(&self) -> FormResult<()> {
        let config = &self.config;
        for field in &self.fields {
            field.input.set_value("");
            field.input.remove_class(&config.valid_class)?;
            field.input.remove_class(&config.invalid_class)?;
            field.input.remove_attribute(ARIA_INVALID)?;
            field.warning.remove_class(&config.show_class)?;
        }

        if config.disable_submit_on_clear {
            self.submit.set_disabled(true);
        }

        tracing::debug!(fields = self.fields.len(), "fields cleared");
        Ok(())
    }

    /// Submit handler: validate, then acknowledge and clear on success.
    pub fn handle_submit(&self) -> FormResult<SubmitOutcome> {
        let report = self.validate_fields()?;

        if !report.all_valid() {
            let invalid = report.invalid_fields();
            tracing::warn!(?invalid, "submit rejected");
            return Ok(SubmitOutcome::Rejected { invalid });
        }

        self.document.notify(&self.config.success_message);
        self.clear_fields()?;
        tracing::info!(fields = report.len(), "submit accepted");
        Ok(SubmitOutcome::Accepted)
    }

    /// Input handler: any keystroke re-validates the whole form.
    pub fn handle_input(&self) -> FormResult<ValidationReport> {
        self.validate_fields()
    }
}

fn field_name<E: Element>(input: &E, index: usize) -> String {
    let id = input.id();
    if !id.is_empty() {
        return id;
    }
    input
        .attribute("name")
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| format!("field-{}", index))
}
