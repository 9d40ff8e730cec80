//! Shared reqwest plumbing for both delivery clients: envelope fetch, status
//! mapping, and multipart assembly from a transport-agnostic payload.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use intake_forms::resolver::TemplateEnvelope;
use intake_wizard::assembler::{SubmissionPayload, PART_FIELD_VALUES, PART_TOKEN};
use intake_wizard::delivery::DeliveryError;

/// Optional `{ "error": string }` body returned on non-2xx.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

async fn error_message(response: reqwest::Response) -> Option<String> {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
}

pub(crate) async fn get_template(
    http: &reqwest::Client,
    url: &str,
) -> Result<TemplateEnvelope, DeliveryError> {
    debug!(url, "fetching template envelope");
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    let status = response.status();
    if matches!(status.as_u16(), 403 | 404 | 410) {
        return Err(DeliveryError::LinkUnavailable);
    }
    if !status.is_success() {
        return Err(DeliveryError::Server {
            status: status.as_u16(),
            message: error_message(response).await,
        });
    }

    response
        .json::<TemplateEnvelope>()
        .await
        .map_err(|e| DeliveryError::InvalidResponse(e.to_string()))
}

fn multipart_form(payload: &SubmissionPayload) -> Form {
    let mut form = Form::new()
        .text(PART_TOKEN, payload.token.clone())
        .text(PART_FIELD_VALUES, payload.field_values_json.clone());

    for doc in &payload.documents {
        let mut part = Part::bytes(doc.bytes.clone()).file_name(doc.file_name.clone());
        if let Some(content_type) = &doc.content_type {
            // An unparseable MIME string falls back to an untyped part.
            part = part.mime_str(content_type).unwrap_or_else(|_| {
                Part::bytes(doc.bytes.clone()).file_name(doc.file_name.clone())
            });
        }
        form = form.part(doc.part_name.clone(), part);
    }
    form
}

pub(crate) async fn post_submission(
    http: &reqwest::Client,
    url: &str,
    payload: &SubmissionPayload,
) -> Result<(), DeliveryError> {
    debug!(url, parts = payload.documents.len(), "posting submission");
    let response = http
        .post(url)
        .multipart(multipart_form(payload))
        .send()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(DeliveryError::Server {
        status: status.as_u16(),
        message: error_message(response).await,
    })
}
