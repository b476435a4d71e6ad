//! Outbound email operations against the backend store.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{OpError, OperationResult};

use super::compose::{self, ComposeDraft};
use super::types::EmailRecord;

/// HTTP client for the backend email store.
///
/// Every send is gated by the compose validator; an invalid draft never
/// reaches the network.
#[derive(Clone)]
pub struct EmailGateway {
    client: Client,
    base_url: String,
}

/// Response envelope used by the backend for both endpoints.
#[derive(Deserialize)]
struct Envelope<T> {
    success: bool,
    data: T,
}

impl EmailGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch every stored email.
    ///
    /// A payload that fails shape validation fails the whole operation;
    /// there is never a partial list.
    pub async fn list(&self) -> OperationResult<Vec<EmailRecord>> {
        let response = self
            .client
            .get(format!("{}/emails", self.base_url))
            .send()
            .await
            .map_err(|e| OpError::Transport(format!("Failed to load emails: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpError::Transport(format!(
                "Failed to load emails: HTTP {status}"
            )));
        }

        let envelope: Envelope<Vec<EmailRecord>> = response
            .json()
            .await
            .map_err(|e| OpError::Contract(format!("Invalid email list response: {e}")))?;

        if !envelope.success {
            return Err(OpError::Contract(
                "Failed to fetch emails from server".to_string(),
            ));
        }
        Ok(envelope.data)
    }

    /// Validate and submit a draft, returning the stored record.
    pub async fn send(&self, draft: &ComposeDraft) -> OperationResult<EmailRecord> {
        let validation = compose::validate_draft(draft);
        if !validation.is_valid {
            return Err(OpError::Validation {
                errors: validation.errors,
            });
        }

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .json(draft)
            .send()
            .await
            .map_err(|e| OpError::Transport(format!("Failed to send email: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpError::Transport(format!(
                "Failed to send email: HTTP {status}"
            )));
        }

        let envelope: Envelope<EmailRecord> = response
            .json()
            .await
            .map_err(|e| OpError::Contract(format!("Invalid send response: {e}")))?;

        if !envelope.success {
            return Err(OpError::Contract("Failed to send email".to_string()));
        }

        tracing::debug!(id = %envelope.data.id, "email accepted by backend");
        Ok(envelope.data)
    }
}
