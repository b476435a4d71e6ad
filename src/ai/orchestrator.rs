//! Two-phase AI generation: classify the brief, then draft under the
//! resulting persona.

use serde::Serialize;

use crate::error::OperationResult;

use super::classifier::AssistantClassifier;
use super::client::CompletionClient;
use super::drafter::EmailDrafter;
use super::persona::AssistantPersona;

/// Result of a full generation cycle. The caller merges `subject`/`body`
/// into the compose draft; recipient fields are left untouched.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GeneratedEmail {
    #[serde(rename = "assistantType")]
    pub assistant_type: AssistantPersona,
    pub subject: String,
    pub body: String,
}

pub struct AiOrchestrator {
    classifier: AssistantClassifier,
    drafter: EmailDrafter,
}

impl AiOrchestrator {
    /// Both phases talk to the same completion service.
    pub fn new(client: CompletionClient) -> Self {
        Self {
            classifier: AssistantClassifier::new(client.clone()),
            drafter: EmailDrafter::new(client),
        }
    }

    pub fn classifier(&self) -> &AssistantClassifier {
        &self.classifier
    }

    pub fn drafter(&self) -> &EmailDrafter {
        &self.drafter
    }

    /// Run the strictly sequential two-phase pipeline.
    ///
    /// Phase errors propagate unchanged; nothing is retried and nothing is
    /// cached — an identical brief submitted twice runs both phases again.
    /// The persona handed to the drafter is typed, so an out-of-set literal
    /// from the classification phase can never start phase two.
    pub async fn handle_generate(&self, brief: &str) -> OperationResult<GeneratedEmail> {
        let persona = self.classifier.classify(brief).await?;
        tracing::debug!(persona = %persona, "brief classified");

        let drafted = self.drafter.draft(persona, brief).await?;
        Ok(GeneratedEmail {
            assistant_type: persona,
            subject: drafted.subject,
            body: drafted.body,
        })
    }
}
