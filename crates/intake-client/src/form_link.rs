//! Public Form-Link Delivery
//!
//! Delivery client for anonymously-shareable intake links:
//! `GET {base}/form-links/{token}` and `POST {base}/form-links/{token}/submit`.

use async_trait::async_trait;

use crate::http;
use intake_forms::resolver::TemplateEnvelope;
use intake_wizard::assembler::SubmissionPayload;
use intake_wizard::delivery::{DeliveryError, FormDelivery};

/// Delivery client for the public form-link endpoints.
#[derive(Debug, Clone)]
pub struct FormLinkClient {
    base_url: String,
    http: reqwest::Client,
}

impl FormLinkClient {
    /// Build a client against the given API base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn link_url(&self, token: &str) -> String {
        format!("{}/form-links/{}", self.base_url, token)
    }
}

#[async_trait]
impl FormDelivery for FormLinkClient {
    async fn fetch_template(&self, token: &str) -> Result<TemplateEnvelope, DeliveryError> {
        http::get_template(&self.http, &self.link_url(token)).await
    }

    async fn submit(&self, token: &str, payload: &SubmissionPayload) -> Result<(), DeliveryError> {
        let url = format!("{}/submit", self.link_url(token));
        http::post_submission(&self.http, &url, payload).await
    }
}
