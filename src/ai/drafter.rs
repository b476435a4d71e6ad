//! Drafts a subject and body for a brief under a persona's template.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{OpError, OperationResult};

use super::client::CompletionClient;
use super::persona::AssistantPersona;
use super::prompts;

/// A generated draft. Both fields are free text; nothing here is validated
/// for sending — that stays the compose validator's job.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DraftedEmail {
    pub subject: String,
    pub body: String,
}

pub struct EmailDrafter {
    client: CompletionClient,
}

impl EmailDrafter {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// Generate a draft for `brief` in the voice of `persona`.
    pub async fn draft(
        &self,
        persona: AssistantPersona,
        brief: &str,
    ) -> OperationResult<DraftedEmail> {
        if brief.trim().is_empty() {
            return Err(OpError::validation("prompt", "Missing prompt"));
        }

        let prompt = format!(
            "{}\n\n{}\n\nMessage: \"\"\"{}\"\"\"",
            persona.draft_system(),
            prompts::DRAFT_GUIDELINES,
            brief
        );
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "subject": { "type": "string" },
                "body": { "type": "string" }
            },
            "required": ["subject", "body"]
        });

        let value: Value = self.client.complete_object(&prompt, schema).await?;
        serde_json::from_value(value)
            .map_err(|_| OpError::Contract("Invalid email generation response".to_string()))
    }
}
