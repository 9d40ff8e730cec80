//! Onboarding-Token Delivery
//!
//! Delivery client for broker-issued direct onboarding links, which address a
//! specific client record: `GET {base}/onboarding/{token}` and
//! `POST {base}/onboarding/{token}/submit`. Logic is identical to the
//! form-link flow; only the endpoint shape differs.

use async_trait::async_trait;

use crate::http;
use intake_forms::resolver::TemplateEnvelope;
use intake_wizard::assembler::SubmissionPayload;
use intake_wizard::delivery::{DeliveryError, FormDelivery};

/// Delivery client for the direct onboarding endpoints.
#[derive(Debug, Clone)]
pub struct OnboardingClient {
    base_url: String,
    http: reqwest::Client,
}

impl OnboardingClient {
    /// Build a client against the given API base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn link_url(&self, token: &str) -> String {
        format!("{}/onboarding/{}", self.base_url, token)
    }
}

#[async_trait]
impl FormDelivery for OnboardingClient {
    async fn fetch_template(&self, token: &str) -> Result<TemplateEnvelope, DeliveryError> {
        http::get_template(&self.http, &self.link_url(token)).await
    }

    async fn submit(&self, token: &str, payload: &SubmissionPayload) -> Result<(), DeliveryError> {
        let url = format!("{}/submit", self.link_url(token));
        http::post_submission(&self.http, &url, payload).await
    }
}
