//! Wizard Session
//!
//! Step-indexed state machine for one form-filling session. States `0..N`
//! walk the template's sections; state `N` is the document-upload
//! pseudo-step; `Submitted` is the terminal state reached only after a
//! successful delivery call. Going forward is gated, going back never is.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::assembler::assemble;
use crate::delivery::{DeliveryError, FormDelivery};
use crate::state::{AnswerState, FileAttachment};
use intake_forms::model::{FieldValue, FormTemplate};
use intake_forms::resolver;
use intake_forms::validate;

/// Lifecycle of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Interactive; all mutations accepted.
    InProgress,
    /// One submission in flight; the session is locked.
    Submitting,
    /// Terminal; no further mutation accepted.
    Submitted,
}

/// A discrete user-input event, for reducer-style dispatch.
///
/// Every synchronous transition is expressible as an event so the machine can
/// be driven deterministically in tests without a UI runtime.
#[derive(Debug, Clone)]
pub enum WizardEvent {
    /// Merge one answer into the value map.
    SetAnswer {
        /// Target field id.
        field_id: String,
        /// New value; replaces any previous answer.
        value: FieldValue,
    },
    /// Add or remove one option of a checkbox-group answer.
    ToggleOption {
        /// Target field id.
        field_id: String,
        /// Option label being toggled.
        option: String,
        /// True to select, false to deselect.
        selected: bool,
    },
    /// Attach (or replace) a file for a checklist document.
    AttachFile {
        /// Target document id.
        document_id: String,
        /// The picked file.
        attachment: FileAttachment,
    },
    /// Clear the attachment for a checklist document.
    RemoveFile {
        /// Target document id.
        document_id: String,
    },
    /// Move forward one step, if the current step's gate passes.
    Advance,
    /// Move back one step; never gated.
    Retreat,
}

/// One form-filling session: resolved template, answer state, step cursor.
#[derive(Debug, Clone)]
pub struct WizardSession {
    id: Uuid,
    token: String,
    template: FormTemplate,
    state: AnswerState,
    step: usize,
    status: SessionStatus,
    last_error: Option<String>,
    started_at: DateTime<Utc>,
}

impl WizardSession {
    /// Start a session over an already-resolved template.
    pub fn new(token: &str, template: FormTemplate) -> Self {
        Self {
            id: Uuid::new_v4(),
            token: token.to_string(),
            template,
            state: AnswerState::new(),
            step: 0,
            status: SessionStatus::InProgress,
            last_error: None,
            started_at: Utc::now(),
        }
    }

    /// Fetch and resolve the template for an access token, then start a
    /// fresh session.
    ///
    /// Resolution is total once an envelope arrives; only the fetch itself
    /// can fail, which is the terminal "link not available" state.
    pub async fn begin<D: FormDelivery + ?Sized>(
        api: &D,
        token: &str,
    ) -> Result<Self, DeliveryError> {
        let envelope = api.fetch_template(token).await?;
        let template = resolver::resolve(&envelope);
        debug!(template_id = %template.id, "wizard session started");
        Ok(Self::new(token, template))
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Session id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Access token this session targets.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The resolved template.
    pub fn template(&self) -> &FormTemplate {
        &self.template
    }

    /// Current answers.
    pub fn state(&self) -> &AnswerState {
        &self.state
    }

    /// Current step index in `0..=section_count`.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Session lifecycle status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Status string from the last failed submission, for the UI.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// When the session was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Index of the document-upload pseudo-step (`== section_count`).
    pub fn document_step(&self) -> usize {
        self.template.section_count()
    }

    /// Whether the cursor is on the document-upload step.
    pub fn on_document_step(&self) -> bool {
        self.step == self.document_step()
    }

    /// Derived progress for UI display; carries no control-flow meaning.
    pub fn progress_percent(&self) -> u8 {
        (((self.step + 1) * 100) / (self.document_step() + 1)) as u8
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Whether the current step's gate passes.
    pub fn validate_current_step(&self) -> bool {
        validate::validate_step(&self.template, self.step, &self.state.values)
    }

    /// Whether the whole form is submittable (fields and documents).
    pub fn validate_all(&self) -> bool {
        validate::validate_all(&self.template, &self.state.values, &self.state.attached_ids())
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Apply one event. Returns false when the event was rejected (gate
    /// failed or the session is no longer interactive).
    pub fn dispatch(&mut self, event: WizardEvent) -> bool {
        match event {
            WizardEvent::SetAnswer { field_id, value } => self.set_answer(&field_id, value),
            WizardEvent::ToggleOption {
                field_id,
                option,
                selected,
            } => self.toggle_option(&field_id, &option, selected),
            WizardEvent::AttachFile {
                document_id,
                attachment,
            } => self.attach_file(&document_id, attachment),
            WizardEvent::RemoveFile { document_id } => self.remove_file(&document_id),
            WizardEvent::Advance => self.advance(),
            WizardEvent::Retreat => self.retreat(),
        }
    }

    fn interactive(&self) -> bool {
        self.status == SessionStatus::InProgress
    }

    /// Merge one answer. Rejected once the session left `InProgress`.
    pub fn set_answer(&mut self, field_id: &str, value: FieldValue) -> bool {
        if !self.interactive() {
            return false;
        }
        self.state.set_value(field_id, value);
        true
    }

    /// Toggle one checkbox-group option.
    pub fn toggle_option(&mut self, field_id: &str, option: &str, selected: bool) -> bool {
        if !self.interactive() {
            return false;
        }
        self.state.toggle_option(field_id, option, selected);
        true
    }

    /// Attach a file, replacing any existing attachment for that document.
    pub fn attach_file(&mut self, document_id: &str, attachment: FileAttachment) -> bool {
        if !self.interactive() {
            return false;
        }
        self.state.attach_file(document_id, attachment);
        true
    }

    /// Clear a document's attachment.
    pub fn remove_file(&mut self, document_id: &str) -> bool {
        if !self.interactive() {
            return false;
        }
        self.state.remove_file(document_id);
        true
    }

    /// Move forward one step if the current gate passes; clamps at the
    /// document step. Returns whether the gate passed.
    pub fn advance(&mut self) -> bool {
        if !self.interactive() || !self.validate_current_step() {
            return false;
        }
        self.step = (self.step + 1).min(self.document_step());
        true
    }

    /// Move back one step; never gated, clamps at zero.
    pub fn retreat(&mut self) -> bool {
        if !self.interactive() {
            return false;
        }
        self.step = self.step.saturating_sub(1);
        true
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Assemble and deliver the submission.
    ///
    /// A no-op returning false whenever full validation fails or the session
    /// is not interactive — no network call is issued in those cases. When it
    /// fires, exactly one delivery call happens: success moves the session to
    /// the terminal `Submitted` state; failure returns it to `InProgress`
    /// with the server's message (or a generic fallback) in `last_error` and
    /// all answers untouched, so the user can retry manually.
    pub async fn submit<D: FormDelivery + ?Sized>(&mut self, api: &D) -> bool {
        if !self.interactive() || !self.validate_all() {
            return false;
        }

        let payload = assemble(&self.token, &self.state);
        self.status = SessionStatus::Submitting;

        match api.submit(&self.token, &payload).await {
            Ok(()) => {
                debug!(session = %self.id, "submission accepted");
                self.status = SessionStatus::Submitted;
                self.last_error = None;
                true
            }
            Err(err) => {
                warn!(session = %self.id, error = %err, "submission failed");
                self.status = SessionStatus::InProgress;
                self.last_error = Some(err.user_message());
                false
            }
        }
    }
}
