//! Routes a free-text brief to one of the assistant personas.

use crate::error::{OpError, OperationResult};

use super::client::CompletionClient;
use super::persona::AssistantPersona;
use super::prompts;

pub struct AssistantClassifier {
    client: CompletionClient,
}

impl AssistantClassifier {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// Classify a brief into the closed persona set.
    ///
    /// An empty or whitespace-only brief fails locally; no network call is
    /// made.
    pub async fn classify(&self, brief: &str) -> OperationResult<AssistantPersona> {
        if brief.trim().is_empty() {
            return Err(OpError::validation("prompt", "Missing prompt"));
        }

        let prompt = format!(
            "{}\n\nMessage: \"\"\"{}\"\"\"",
            prompts::CLASSIFY_SYSTEM,
            brief
        );
        let labels = AssistantPersona::labels();
        let label = self.client.complete_enum(&prompt, &labels).await?;

        // The schema already restricts the output, but a literal outside the
        // closed set from a misbehaving service must never reach the drafter.
        label.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn classifier(server: &MockServer) -> AssistantClassifier {
        AssistantClassifier::new(CompletionClient::new(&server.uri(), "test-model"))
    }

    #[tokio::test]
    async fn test_empty_brief_fails_without_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        for brief in ["", "   ", "\n"] {
            let err = classifier(&server).classify(brief).await.unwrap_err();
            assert_eq!(
                err.validation_errors().unwrap().get("prompt").unwrap(),
                "Missing prompt"
            );
        }
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_classifies_into_closed_set() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completions"))
            .and(body_partial_json(serde_json::json!({
                "outputSchema": { "enum": ["sales", "followup"] }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!("followup")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let persona = classifier(&server)
            .classify("nudge the client about last week's demo")
            .await
            .unwrap();
        assert_eq!(persona, AssistantPersona::Followup);
    }

    #[tokio::test]
    async fn test_out_of_set_literal_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!("marketing")),
            )
            .mount(&server)
            .await;

        let err = classifier(&server).classify("pitch the new plan").await.unwrap_err();
        assert_eq!(err, OpError::Domain("Invalid assistant type".to_string()));
    }

    #[tokio::test]
    async fn test_service_failure_is_propagated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = classifier(&server).classify("pitch the new plan").await.unwrap_err();
        assert!(matches!(err, OpError::Transport(_)));
    }
}
