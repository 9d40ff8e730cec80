//! Form Schema Model
//!
//! Leaf-level data model for intake forms: typed fields grouped into ordered
//! sections, plus the parallel required-document checklist. Everything else
//! in the engine depends on these types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field type determining the accepted value shape and applicable widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line free text.
    Text,
    /// Telephone number (single-line input, no format enforcement).
    Tel,
    /// Email address (single-line input, no format enforcement).
    Email,
    /// Multi-line free text.
    Textarea,
    /// Binary yes/no toggle.
    Checkbox,
    /// Multi-choice selection from `options`.
    CheckboxGroup,
    /// Calendar date.
    Date,
    /// Numeric value.
    Number,
    /// Single-choice selection from `options`.
    Select,
}

/// Widget capability a renderer must provide for a field type.
///
/// This mapping is the only contract a UI-rendering collaborator needs to
/// honor; the engine never renders anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    /// One-line input (text, tel, email, number, date).
    SingleLine,
    /// Multi-line input (textarea).
    MultiLine,
    /// Pick exactly one of `options` (select).
    SingleChoice,
    /// Pick any subset of `options` (checkbox group).
    MultiChoice,
    /// Binary toggle (checkbox).
    Toggle,
}

impl FieldType {
    /// Widget capability for this field type.
    pub fn widget(self) -> Widget {
        match self {
            Self::Text | Self::Tel | Self::Email | Self::Number | Self::Date => Widget::SingleLine,
            Self::Textarea => Widget::MultiLine,
            Self::Select => Widget::SingleChoice,
            Self::CheckboxGroup => Widget::MultiChoice,
            Self::Checkbox => Widget::Toggle,
        }
    }

    /// Whether this field type draws its values from an options list.
    pub fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::CheckboxGroup)
    }
}

/// A single form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    /// Unique within the owning template; answers are keyed by this id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Field type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// UI hint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Ordered choices; meaningful only for select / checkbox_group, where
    /// it must be non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Whether an answer is required before the owning step can advance.
    #[serde(default)]
    pub required: bool,
}

impl FormField {
    /// Required scalar field with no options.
    pub fn required_input(id: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field_type,
            placeholder: None,
            options: Vec::new(),
            required: true,
        }
    }

    /// Optional scalar field with no options.
    pub fn optional_input(id: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            required: false,
            ..Self::required_input(id, label, field_type)
        }
    }

    /// Single-choice field over the given options.
    pub fn select(id: &str, label: &str, options: &[&str], required: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field_type: FieldType::Select,
            placeholder: None,
            options: options.iter().map(|o| o.to_string()).collect(),
            required,
        }
    }

    /// Multi-choice field over the given options.
    pub fn checkbox_group(id: &str, label: &str, options: &[&str], required: bool) -> Self {
        Self {
            field_type: FieldType::CheckboxGroup,
            ..Self::select(id, label, options, required)
        }
    }

    /// Attach a placeholder hint.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }
}

/// A titled, ordered group of fields presented together as one wizard step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSection {
    /// Section id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional description shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fields in presentation and validation order.
    pub fields: Vec<FormField>,
}

impl FormSection {
    /// Build a section from parts.
    pub fn new(id: &str, title: &str, description: Option<&str>, fields: Vec<FormField>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
            fields,
        }
    }
}

/// A checklist entry requiring exactly one file attachment before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredDocument {
    /// Document id; file parts are correlated to this on submission.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the client should attach.
    pub description: String,
    /// Whether submission is blocked without an attachment.
    #[serde(default)]
    pub required: bool,
}

impl RequiredDocument {
    /// Build a checklist entry.
    pub fn new(id: &str, name: &str, description: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            required,
        }
    }
}

/// A named, reusable form definition: ordered sections plus a document
/// checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormTemplate {
    /// Quick-start id (`quick-real-estate`, `quick-life-insurance`,
    /// `quick-mortgage`) or an opaque custom-template id.
    pub id: String,
    /// Wizard steps, in order. Every built-in begins with a contact-info
    /// section.
    pub sections: Vec<FormSection>,
    /// Document checklist, in display order.
    #[serde(rename = "requiredDocuments")]
    pub required_documents: Vec<RequiredDocument>,
}

impl FormTemplate {
    /// Number of section steps (the document-upload pseudo-step is not a
    /// section and comes after all of these).
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Look up a field anywhere in the template.
    pub fn field(&self, field_id: &str) -> Option<&FormField> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.id == field_id)
    }
}

/// One answered value in the flat answer map.
///
/// Untagged on the wire: a string, a string list, or a boolean. The source
/// system stored single checkboxes as a "yes"/"no" sentinel; here they are a
/// true boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Binary toggle answer for a single checkbox.
    Toggle(bool),
    /// Scalar answer for text-like, select, date, and number fields.
    Text(String),
    /// Ordered selection for a checkbox group.
    Selections(Vec<String>),
}

impl FieldValue {
    /// Whether this value satisfies a `required` flag.
    ///
    /// Empty strings and empty lists are unsatisfied; whitespace-only strings
    /// are accepted (the engine does not trim). A required toggle must be
    /// explicitly true.
    pub fn is_satisfied(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Selections(items) => !items.is_empty(),
            Self::Toggle(checked) => *checked,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Toggle(value)
    }
}

/// Flat answer map keyed by field id.
pub type AnswerValues = BTreeMap<String, FieldValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_capability_table() {
        assert_eq!(FieldType::Text.widget(), Widget::SingleLine);
        assert_eq!(FieldType::Tel.widget(), Widget::SingleLine);
        assert_eq!(FieldType::Email.widget(), Widget::SingleLine);
        assert_eq!(FieldType::Number.widget(), Widget::SingleLine);
        assert_eq!(FieldType::Date.widget(), Widget::SingleLine);
        assert_eq!(FieldType::Textarea.widget(), Widget::MultiLine);
        assert_eq!(FieldType::Select.widget(), Widget::SingleChoice);
        assert_eq!(FieldType::CheckboxGroup.widget(), Widget::MultiChoice);
        assert_eq!(FieldType::Checkbox.widget(), Widget::Toggle);
    }

    #[test]
    fn test_field_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&FieldType::CheckboxGroup).unwrap(),
            "\"checkbox_group\""
        );
        assert_eq!(serde_json::to_string(&FieldType::Tel).unwrap(), "\"tel\"");
        assert_eq!(
            serde_json::from_str::<FieldType>("\"textarea\"").unwrap(),
            FieldType::Textarea
        );
    }

    #[test]
    fn test_field_value_wire_shapes() {
        let text = FieldValue::from("hello");
        let multi = FieldValue::Selections(vec!["a".into(), "b".into()]);
        let toggle = FieldValue::from(true);

        assert_eq!(serde_json::to_string(&text).unwrap(), "\"hello\"");
        assert_eq!(serde_json::to_string(&multi).unwrap(), "[\"a\",\"b\"]");
        assert_eq!(serde_json::to_string(&toggle).unwrap(), "true");

        assert_eq!(
            serde_json::from_str::<FieldValue>("false").unwrap(),
            FieldValue::Toggle(false)
        );
        assert_eq!(
            serde_json::from_str::<FieldValue>("\"x\"").unwrap(),
            FieldValue::Text("x".into())
        );
    }

    #[test]
    fn test_satisfaction_rules() {
        assert!(!FieldValue::Text(String::new()).is_satisfied());
        assert!(FieldValue::Text("a".into()).is_satisfied());
        // Whitespace is not trimmed.
        assert!(FieldValue::Text("   ".into()).is_satisfied());
        assert!(!FieldValue::Selections(vec![]).is_satisfied());
        assert!(FieldValue::Selections(vec!["x".into()]).is_satisfied());
        assert!(!FieldValue::Toggle(false).is_satisfied());
        assert!(FieldValue::Toggle(true).is_satisfied());
    }

    #[test]
    fn test_template_field_lookup() {
        let template = crate::templates::quick_mortgage();
        assert!(template.field("full_name").is_some());
        assert!(template.field("no_such_field").is_none());
    }

    #[test]
    fn test_field_roundtrip_keeps_options() {
        let field = FormField::select("tier", "Tier", &["A", "B"], true);
        let json = serde_json::to_string(&field).unwrap();
        let back: FormField = serde_json::from_str(&json).unwrap();
        assert_eq!(back.options, vec!["A".to_string(), "B".to_string()]);
        assert!(back.required);
    }
}
