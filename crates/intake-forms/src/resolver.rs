//! Template Resolver
//!
//! Turns whatever the template endpoint returned into a concrete
//! [`FormTemplate`]. The fallback chain is deterministic and total: every
//! possible envelope resolves to some non-empty template, because a broken or
//! missing template must still present a submittable form to the end client.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{FormField, FormSection, FormTemplate, RequiredDocument};
use crate::templates;

/// Raw custom-template definition as stored by the broker-side builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTemplateData {
    /// Fully-specified sections the broker kept from a base template.
    pub base_sections: Vec<FormSection>,
    /// Loose extra fields the broker added; wrapped into one synthesized
    /// section on resolution.
    pub custom_fields: Vec<FormField>,
    /// Document checklist, used verbatim.
    pub required_documents: Vec<RequiredDocument>,
}

impl RawTemplateData {
    /// Whether this carries anything renderable.
    pub fn has_definition(&self) -> bool {
        !self.base_sections.is_empty() || !self.custom_fields.is_empty()
    }
}

/// JSON body of the template fetch endpoint.
///
/// Every field is optional: the endpoint returns either a custom definition
/// (wrapped in a single-element array) or a `formType` discriminator plus
/// identity metadata, and may return neither. Malformed payloads degrade
/// through the resolver chain instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateEnvelope {
    /// Single-element array holding the custom definition, if any.
    pub template: Vec<RawTemplateData>,
    /// Quick-start discriminator, if no custom definition applies.
    pub form_type: Option<String>,
    /// Broker display name, for the form header.
    pub broker_name: Option<String>,
    /// Client display name, for pre-addressed onboarding links.
    pub client_name: Option<String>,
}

impl TemplateEnvelope {
    /// The custom definition, when present and non-empty.
    pub fn custom_definition(&self) -> Option<&RawTemplateData> {
        self.template.first().filter(|raw| raw.has_definition())
    }
}

/// Resolve an envelope to a concrete template.
///
/// Pure over its input plus the compiled-in built-ins; never errors and never
/// returns a template without at least one section and one required document.
pub fn resolve(envelope: &TemplateEnvelope) -> FormTemplate {
    if let Some(raw) = envelope.custom_definition() {
        debug!(
            base_sections = raw.base_sections.len(),
            custom_fields = raw.custom_fields.len(),
            "resolved custom template definition"
        );
        return from_custom(raw);
    }

    let form_type = envelope.form_type.as_deref().unwrap_or_default();
    debug!(form_type, "resolving built-in template");
    templates::builtin(form_type)
}

fn from_custom(raw: &RawTemplateData) -> FormTemplate {
    let mut sections = raw.base_sections.clone();
    if !raw.custom_fields.is_empty() {
        sections.push(FormSection::new(
            "additional_information",
            "Additional Information",
            None,
            raw.custom_fields.clone(),
        ));
    }

    // The document checklist is taken verbatim, except that an empty list
    // still gets the government-ID entry so submission stays gated on at
    // least one document.
    let required_documents = if raw.required_documents.is_empty() {
        templates::generic_fallback().required_documents
    } else {
        raw.required_documents.clone()
    };

    FormTemplate {
        id: "custom".to_string(),
        sections,
        required_documents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;

    fn custom_envelope(raw: RawTemplateData) -> TemplateEnvelope {
        TemplateEnvelope {
            template: vec![raw],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_envelope_resolves_to_fallback() {
        let template = resolve(&TemplateEnvelope::default());
        assert_eq!(template.id, templates::GENERIC_FALLBACK);
        assert!(!template.sections.is_empty());
        assert!(!template.required_documents.is_empty());
    }

    #[test]
    fn test_form_type_dispatch() {
        let envelope = TemplateEnvelope {
            form_type: Some("quick-mortgage".into()),
            ..Default::default()
        };
        assert_eq!(resolve(&envelope).id, templates::QUICK_MORTGAGE);
    }

    #[test]
    fn test_unknown_form_type_resolves_to_fallback() {
        let envelope = TemplateEnvelope {
            form_type: Some("xyz".into()),
            ..Default::default()
        };
        assert_eq!(resolve(&envelope).id, templates::GENERIC_FALLBACK);
    }

    #[test]
    fn test_custom_definition_wins_over_form_type() {
        let raw = RawTemplateData {
            base_sections: templates::quick_real_estate().sections,
            ..Default::default()
        };
        let mut envelope = custom_envelope(raw);
        envelope.form_type = Some("quick-mortgage".into());

        let template = resolve(&envelope);
        assert_eq!(template.id, "custom");
        assert_eq!(template.sections[0].id, "contact_info");
    }

    #[test]
    fn test_custom_fields_wrapped_in_additional_section() {
        let raw = RawTemplateData {
            base_sections: vec![templates::generic_fallback().sections.remove(0)],
            custom_fields: vec![FormField::required_input(
                "referral_source",
                "How did you hear about us?",
                FieldType::Text,
            )],
            required_documents: vec![RequiredDocument::new("w2", "W-2", "Latest W-2", true)],
        };
        let template = resolve(&custom_envelope(raw));

        assert_eq!(template.sections.len(), 2);
        let extra = &template.sections[1];
        assert_eq!(extra.id, "additional_information");
        assert_eq!(extra.fields[0].id, "referral_source");
        // Custom checklist used verbatim.
        assert_eq!(template.required_documents.len(), 1);
        assert_eq!(template.required_documents[0].id, "w2");
    }

    #[test]
    fn test_custom_fields_only_yields_single_section() {
        let raw = RawTemplateData {
            custom_fields: vec![FormField::required_input("a", "A", FieldType::Text)],
            ..Default::default()
        };
        let template = resolve(&custom_envelope(raw));
        assert_eq!(template.sections.len(), 1);
        assert_eq!(template.sections[0].id, "additional_information");
    }

    #[test]
    fn test_custom_without_documents_gets_govt_id() {
        let raw = RawTemplateData {
            custom_fields: vec![FormField::required_input("a", "A", FieldType::Text)],
            ..Default::default()
        };
        let template = resolve(&custom_envelope(raw));
        assert_eq!(template.required_documents.len(), 1);
        assert_eq!(template.required_documents[0].id, templates::GOVT_ID);
    }

    #[test]
    fn test_resolution_totality_over_malformed_shapes() {
        // Tolerant deserialization: unknown keys, wrong optional shapes, and
        // empty objects all parse into some envelope, and every envelope
        // resolves to a non-empty template.
        let payloads = [
            "{}",
            r#"{"formType": null}"#,
            r#"{"template": []}"#,
            r#"{"template": [{}]}"#,
            r#"{"unrelated": {"nested": true}, "formType": "quick-life-insurance"}"#,
        ];
        for payload in payloads {
            let envelope: TemplateEnvelope = serde_json::from_str(payload).unwrap();
            let template = resolve(&envelope);
            assert!(!template.sections.is_empty(), "{payload}");
            assert!(!template.required_documents.is_empty(), "{payload}");
        }
    }

    #[test]
    fn test_envelope_wire_shape() {
        let json = r#"{
            "template": [{
                "baseSections": [],
                "customFields": [
                    {"id": "x", "label": "X", "type": "select", "options": ["1", "2"], "required": true}
                ],
                "requiredDocuments": [
                    {"id": "deed", "name": "Deed", "description": "Property deed", "required": true}
                ]
            }],
            "brokerName": "Acme Realty"
        }"#;
        let envelope: TemplateEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.broker_name.as_deref(), Some("Acme Realty"));

        let template = resolve(&envelope);
        assert_eq!(template.sections[0].fields[0].field_type, FieldType::Select);
        assert_eq!(template.required_documents[0].id, "deed");
    }
}
