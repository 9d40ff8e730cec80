//! OpenIntake Form Schema Engine
//!
//! Schema model and template machinery for broker client-intake forms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      FORM SCHEMA ENGINE                             │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    TEMPLATE RESOLVER                          │  │
//! │  │  custom definition ─► formType quick-start ─► generic fallback │  │
//! │  └───────────────────────────┬───────────────────────────────────┘  │
//! │                              │                                      │
//! │  ┌───────────────────────────▼───────────────────────────────────┐  │
//! │  │                      SCHEMA MODEL                             │  │
//! │  │   FormTemplate ─► FormSection ─► FormField (typed widgets)    │  │
//! │  │                └─► RequiredDocument checklist                 │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                       VALIDATOR                               │  │
//! │  │   per-step required fields | submit-time required documents   │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod model;
pub mod resolver;
pub mod templates;
pub mod validate;

pub use builder::{BuilderError, TemplateDraft};
pub use model::{
    FieldType, FieldValue, FormField, FormSection, FormTemplate, RequiredDocument, Widget,
};
pub use resolver::{resolve, RawTemplateData, TemplateEnvelope};
pub use validate::{missing_documents, missing_fields, validate_all, validate_step};
