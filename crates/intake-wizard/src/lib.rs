//! OpenIntake Wizard Engine
//!
//! Client-side state machine for filling an intake form: walks the template's
//! sections step by step, then a document-upload step, gating each advance on
//! the current section's required fields and gating submission on the full
//! template plus the document checklist.
//!
//! One wizard session owns one [`state::AnswerState`]; all mutation happens
//! synchronously in response to discrete user events, and the only suspension
//! points are the initial template fetch and the single submission POST.

#![warn(missing_docs)]

pub mod assembler;
pub mod delivery;
pub mod session;
pub mod state;

pub use assembler::{assemble, DocumentPart, SubmissionPayload};
pub use delivery::{DeliveryError, FormDelivery};
pub use session::{SessionStatus, WizardEvent, WizardSession};
pub use state::{AnswerState, FileAttachment};
