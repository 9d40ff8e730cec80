//! OpenIntake Delivery Clients
//!
//! reqwest-backed implementations of the wizard's [`FormDelivery`]
//! collaborator. The engine's logic lives in `intake-wizard`; this crate is
//! only the I/O edge, implemented twice because the public form-link flow and
//! the direct onboarding-token flow expose different endpoint shapes.
//!
//! [`FormDelivery`]: intake_wizard::FormDelivery

#![warn(missing_docs)]

mod http;

pub mod form_link;
pub mod onboarding;

pub use form_link::FormLinkClient;
pub use onboarding::OnboardingClient;
