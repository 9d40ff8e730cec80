//! Answer State
//!
//! The explicit, serializable value bag owned by one wizard session: a flat
//! field-value map plus at most one file attachment per checklist document.
//! Never persisted mid-session; discarded on successful submission or on
//! navigation away.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use intake_forms::model::{AnswerValues, FieldValue};

/// An in-memory file handle awaiting submission.
///
/// Files are never partially flushed; bytes stay local until the single
/// multipart POST fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    /// Original display filename, forwarded to the endpoint.
    pub file_name: String,
    /// MIME type, when the picker supplied one.
    pub content_type: Option<String>,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    /// Build an attachment from picker output.
    pub fn new(file_name: &str, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.map(|c| c.to_string()),
            bytes,
        }
    }
}

/// All answers accumulated during one form-filling session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerState {
    /// Flat value map keyed by field id.
    pub values: AnswerValues,
    /// At most one attachment per document id.
    pub files: BTreeMap<String, FileAttachment>,
}

impl AnswerState {
    /// Fresh, empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a value into the map, replacing any previous answer.
    pub fn set_value(&mut self, field_id: &str, value: FieldValue) {
        self.values.insert(field_id.to_string(), value);
    }

    /// Add or remove one option on a checkbox-group answer.
    ///
    /// Set semantics on the backing list: toggling on is idempotent and never
    /// duplicates, toggling off removes every occurrence. A scalar value
    /// previously stored under the same id is replaced by a fresh list.
    pub fn toggle_option(&mut self, field_id: &str, option: &str, selected: bool) {
        let entry = self
            .values
            .entry(field_id.to_string())
            .or_insert_with(|| FieldValue::Selections(Vec::new()));
        if !matches!(entry, FieldValue::Selections(_)) {
            *entry = FieldValue::Selections(Vec::new());
        }
        if let FieldValue::Selections(items) = entry {
            if selected {
                if !items.iter().any(|i| i == option) {
                    items.push(option.to_string());
                }
            } else {
                items.retain(|i| i != option);
            }
        }
    }

    /// Attach a file for a document, replacing any existing attachment.
    pub fn attach_file(&mut self, document_id: &str, attachment: FileAttachment) {
        self.files.insert(document_id.to_string(), attachment);
    }

    /// Clear the attachment for a document.
    pub fn remove_file(&mut self, document_id: &str) {
        self.files.remove(document_id);
    }

    /// Ids of documents that currently have an attachment.
    pub fn attached_ids(&self) -> BTreeSet<String> {
        self.files.keys().cloned().collect()
    }
}
