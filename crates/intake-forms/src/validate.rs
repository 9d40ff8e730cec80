//! Required-Field and Required-Document Validation
//!
//! Pure boolean checks. Step advancement is gated on the current section's
//! required fields only; the document checklist is checked once, at submit
//! time. Validation never throws.

use std::collections::BTreeSet;

use crate::model::{AnswerValues, FormField, FormSection, FormTemplate, RequiredDocument};

fn field_satisfied(field: &FormField, values: &AnswerValues) -> bool {
    if !field.required {
        return true;
    }
    values.get(&field.id).is_some_and(|v| v.is_satisfied())
}

fn section_satisfied(section: &FormSection, values: &AnswerValues) -> bool {
    section.fields.iter().all(|f| field_satisfied(f, values))
}

/// Whether the given step may be advanced past.
///
/// Steps `0..N` are sections and require every `required` field of that
/// section to be satisfied. Step `N` is the document-upload pseudo-step and
/// is never gated here; documents are checked only by [`validate_all`].
pub fn validate_step(template: &FormTemplate, step: usize, values: &AnswerValues) -> bool {
    match template.sections.get(step) {
        Some(section) => section_satisfied(section, values),
        None => true,
    }
}

/// Whether the whole form is submittable: every required field across every
/// section satisfied, and every required document attached.
pub fn validate_all(
    template: &FormTemplate,
    values: &AnswerValues,
    attached: &BTreeSet<String>,
) -> bool {
    template
        .sections
        .iter()
        .all(|s| section_satisfied(s, values))
        && missing_documents(template, attached).is_empty()
}

/// Required fields of one section that are still unsatisfied, in section
/// order. Used for checklist display next to the step.
pub fn missing_fields<'a>(section: &'a FormSection, values: &AnswerValues) -> Vec<&'a FormField> {
    section
        .fields
        .iter()
        .filter(|f| !field_satisfied(f, values))
        .collect()
}

/// Required documents without an attachment, in checklist order.
pub fn missing_documents<'a>(
    template: &'a FormTemplate,
    attached: &BTreeSet<String>,
) -> Vec<&'a RequiredDocument> {
    template
        .required_documents
        .iter()
        .filter(|d| d.required && !attached.contains(&d.id))
        .collect()
}
