//! Broker-Side Template Builder
//!
//! Draft aggregate behind the form builder UI. A draft accumulates sections,
//! fields, and checklist entries, and `publish` enforces the schema
//! invariants the resolver and validator assume.

use thiserror::Error;
use uuid::Uuid;

use crate::model::{FormField, FormSection, FormTemplate, RequiredDocument};
use crate::templates;

/// Errors surfaced when publishing a draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// A template must have at least one section.
    #[error("template has no sections")]
    NoSections,

    /// Select / checkbox_group fields need a non-empty options list.
    #[error("field '{0}' is a choice field with no options")]
    ChoiceFieldWithoutOptions(String),

    /// Answers are stored in one flat map, so field ids must be unique
    /// across the whole template.
    #[error("duplicate field id '{0}'")]
    DuplicateFieldId(String),

    /// The target section does not exist.
    #[error("no section with id '{0}'")]
    UnknownSection(String),

    /// A template must carry at least one checklist document.
    #[error("template has no required documents")]
    NoDocuments,
}

/// Mutable draft of a custom template.
#[derive(Debug, Clone)]
pub struct TemplateDraft {
    id: String,
    sections: Vec<FormSection>,
    required_documents: Vec<RequiredDocument>,
}

impl TemplateDraft {
    /// Start an empty draft with a fresh opaque id.
    pub fn create() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sections: Vec::new(),
            required_documents: Vec::new(),
        }
    }

    /// Start a draft pre-populated from a quick-start template, the usual
    /// broker workflow.
    pub fn from_builtin(form_type: &str) -> Self {
        let base = templates::builtin(form_type);
        Self {
            id: Uuid::new_v4().to_string(),
            sections: base.sections,
            required_documents: base.required_documents,
        }
    }

    /// Draft id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sections accumulated so far.
    pub fn sections(&self) -> &[FormSection] {
        &self.sections
    }

    /// Append a section.
    pub fn add_section(&mut self, section: FormSection) {
        self.sections.push(section);
    }

    /// Remove a section and its fields.
    pub fn remove_section(&mut self, section_id: &str) {
        self.sections.retain(|s| s.id != section_id);
    }

    /// Append a field to an existing section.
    pub fn add_field(&mut self, section_id: &str, field: FormField) -> Result<(), BuilderError> {
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .ok_or_else(|| BuilderError::UnknownSection(section_id.to_string()))?;
        section.fields.push(field);
        Ok(())
    }

    /// Remove a field wherever it lives.
    pub fn remove_field(&mut self, field_id: &str) {
        for section in &mut self.sections {
            section.fields.retain(|f| f.id != field_id);
        }
    }

    /// Append a checklist entry.
    pub fn add_document(&mut self, document: RequiredDocument) {
        self.required_documents.push(document);
    }

    /// Remove a checklist entry.
    pub fn remove_document(&mut self, document_id: &str) {
        self.required_documents.retain(|d| d.id != document_id);
    }

    /// Validate the draft and produce the immutable template artifact.
    ///
    /// A published template can be handed straight to a wizard session, so
    /// every invariant the validator assumes is enforced here — including a
    /// non-empty document checklist. (The resolver's government-ID injection
    /// covers only degenerate wire data that never went through `publish`.)
    pub fn publish(self) -> Result<FormTemplate, BuilderError> {
        if self.sections.is_empty() {
            return Err(BuilderError::NoSections);
        }

        let mut seen = std::collections::BTreeSet::new();
        for section in &self.sections {
            for field in &section.fields {
                if field.field_type.has_options() && field.options.is_empty() {
                    return Err(BuilderError::ChoiceFieldWithoutOptions(field.id.clone()));
                }
                if !seen.insert(field.id.clone()) {
                    return Err(BuilderError::DuplicateFieldId(field.id.clone()));
                }
            }
        }

        if self.required_documents.is_empty() {
            return Err(BuilderError::NoDocuments);
        }

        Ok(FormTemplate {
            id: self.id,
            sections: self.sections,
            required_documents: self.required_documents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;

    #[test]
    fn test_publish_empty_draft_fails() {
        let err = TemplateDraft::create().publish().unwrap_err();
        assert_eq!(err, BuilderError::NoSections);
    }

    #[test]
    fn test_builtin_drafts_publish_cleanly() {
        for form_type in [
            templates::QUICK_REAL_ESTATE,
            templates::QUICK_LIFE_INSURANCE,
            templates::QUICK_MORTGAGE,
        ] {
            let template = TemplateDraft::from_builtin(form_type).publish().unwrap();
            assert!(!template.sections.is_empty());
        }
    }

    #[test]
    fn test_add_field_to_unknown_section() {
        let mut draft = TemplateDraft::create();
        let err = draft
            .add_field("nope", FormField::required_input("a", "A", FieldType::Text))
            .unwrap_err();
        assert_eq!(err, BuilderError::UnknownSection("nope".into()));
    }

    #[test]
    fn test_publish_rejects_choice_field_without_options() {
        let mut draft = TemplateDraft::create();
        draft.add_section(FormSection::new(
            "s",
            "S",
            None,
            vec![FormField {
                id: "pick".into(),
                label: "Pick".into(),
                field_type: FieldType::Select,
                placeholder: None,
                options: Vec::new(),
                required: true,
            }],
        ));
        assert_eq!(
            draft.publish().unwrap_err(),
            BuilderError::ChoiceFieldWithoutOptions("pick".into())
        );
    }

    #[test]
    fn test_publish_rejects_duplicate_field_ids() {
        let mut draft = TemplateDraft::create();
        draft.add_section(FormSection::new(
            "a",
            "A",
            None,
            vec![FormField::required_input("x", "X", FieldType::Text)],
        ));
        draft.add_section(FormSection::new(
            "b",
            "B",
            None,
            vec![FormField::required_input("x", "X again", FieldType::Text)],
        ));
        assert_eq!(
            draft.publish().unwrap_err(),
            BuilderError::DuplicateFieldId("x".into())
        );
    }

    #[test]
    fn test_publish_rejects_empty_checklist() {
        let mut draft = TemplateDraft::create();
        draft.add_section(FormSection::new(
            "s",
            "S",
            None,
            vec![FormField::required_input("a", "A", FieldType::Text)],
        ));
        assert_eq!(draft.clone().publish().unwrap_err(), BuilderError::NoDocuments);

        // With a checklist entry the artifact publishes, and anything built
        // on it (a wizard session included) sees a non-empty checklist.
        draft.add_document(RequiredDocument::new("w2", "W-2", "Latest W-2", true));
        let template = draft.publish().unwrap();
        assert!(!template.required_documents.is_empty());
    }

    #[test]
    fn test_remove_last_document_blocks_republish() {
        let mut draft = TemplateDraft::from_builtin(templates::QUICK_REAL_ESTATE);
        for id in ["govt_id", "proof_of_funds", "pre_approval_letter"] {
            draft.remove_document(id);
        }
        assert_eq!(draft.publish().unwrap_err(), BuilderError::NoDocuments);
    }

    #[test]
    fn test_customized_builtin_flows_through_resolver() {
        let mut draft = TemplateDraft::from_builtin(templates::QUICK_MORTGAGE);
        draft
            .add_field(
                "loan_details",
                FormField::optional_input("notes", "Anything else?", FieldType::Textarea),
            )
            .unwrap();
        draft.add_document(RequiredDocument::new("w2", "W-2", "Latest W-2", true));

        let published = draft.publish().unwrap();
        let envelope = crate::resolver::TemplateEnvelope {
            template: vec![crate::resolver::RawTemplateData {
                base_sections: published.sections.clone(),
                custom_fields: Vec::new(),
                required_documents: published.required_documents.clone(),
            }],
            ..Default::default()
        };
        let resolved = crate::resolver::resolve(&envelope);
        assert!(resolved.field("notes").is_some());
        assert!(resolved.required_documents.iter().any(|d| d.id == "w2"));
    }
}
