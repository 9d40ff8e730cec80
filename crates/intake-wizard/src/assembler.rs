//! Submission Assembler
//!
//! Packages one session's answers into a transport-agnostic multipart
//! payload: the whole value map serialized as a single JSON-encoded field,
//! plus one file part per attached document under a name derived from the
//! document id, so the endpoint correlates files to checklist entries without
//! trusting original filenames.

use crate::state::AnswerState;

/// Multipart field name carrying the access token.
pub const PART_TOKEN: &str = "token";
/// Multipart field name carrying the JSON-encoded answer map.
pub const PART_FIELD_VALUES: &str = "fieldValues";

/// Part name for a document attachment.
pub fn document_part_name(document_id: &str) -> String {
    format!("document_{document_id}")
}

/// One file part of the assembled payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPart {
    /// Deterministic part name (`document_<id>`).
    pub part_name: String,
    /// Original display filename.
    pub file_name: String,
    /// MIME type, if known.
    pub content_type: Option<String>,
    /// File content.
    pub bytes: Vec<u8>,
}

/// A fully-assembled submission, ready for one multipart POST.
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    /// Opaque access token identifying the broker/template this targets.
    pub token: String,
    /// The flat answer map, JSON-encoded as one field.
    pub field_values_json: String,
    /// File parts, in checklist (map key) order.
    pub documents: Vec<DocumentPart>,
}

/// Assemble the payload for one submission attempt.
///
/// Pure: a retry after a failed POST re-assembles from the current state
/// rather than reusing a cached payload.
pub fn assemble(token: &str, state: &AnswerState) -> SubmissionPayload {
    // BTreeMap keys keep the serialized map and part order deterministic.
    let field_values_json =
        serde_json::to_string(&state.values).unwrap_or_else(|_| "{}".to_string());

    let documents = state
        .files
        .iter()
        .map(|(document_id, attachment)| DocumentPart {
            part_name: document_part_name(document_id),
            file_name: attachment.file_name.clone(),
            content_type: attachment.content_type.clone(),
            bytes: attachment.bytes.clone(),
        })
        .collect();

    SubmissionPayload {
        token: token.to_string(),
        field_values_json,
        documents,
    }
}
