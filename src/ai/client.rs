//! Completion service API client

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{OpError, OperationResult};

/// Client for the completion service's structured-output endpoint.
///
/// Each call sends `{model, prompt, outputSchema}` and expects the 2xx
/// response body to be the structured value itself: a bare JSON string for
/// enum schemas, a bare JSON object for object schemas.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(rename = "outputSchema")]
    output_schema: Value,
}

impl CompletionClient {
    /// Create a new completion client
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Request a completion constrained to one of `variants`.
    pub async fn complete_enum(
        &self,
        prompt: &str,
        variants: &[&str],
    ) -> OperationResult<String> {
        let schema = serde_json::json!({ "type": "string", "enum": variants });
        self.complete(prompt, schema).await
    }

    /// Request a completion shaped by the given object schema.
    pub async fn complete_object<T: DeserializeOwned>(
        &self,
        prompt: &str,
        schema: Value,
    ) -> OperationResult<T> {
        self.complete(prompt, schema).await
    }

    async fn complete<T: DeserializeOwned>(
        &self,
        prompt: &str,
        output_schema: Value,
    ) -> OperationResult<T> {
        let request = CompletionRequest {
            model: &self.model,
            prompt,
            output_schema,
        };

        let response = self
            .client
            .post(format!("{}/completions", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| OpError::Transport(format!("Completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpError::Transport(format!(
                "Completion service error: HTTP {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| OpError::Contract(format!("Malformed completion response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_enum_completion_sends_schema_and_parses_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "test-model",
                "outputSchema": { "type": "string", "enum": ["sales", "followup"] }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("sales")))
            .expect(1)
            .mount(&server)
            .await;

        let client = CompletionClient::new(&format!("{}/v1", server.uri()), "test-model");
        let label = client
            .complete_enum("classify this", &["sales", "followup"])
            .await
            .unwrap();
        assert_eq!(label, "sales");
    }

    #[tokio::test]
    async fn test_non_2xx_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = CompletionClient::new(&format!("{}/v1", server.uri()), "test-model");
        let err = client.complete_enum("x", &["a"]).await.unwrap_err();
        assert!(matches!(err, OpError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_contract_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = CompletionClient::new(&format!("{}/v1", server.uri()), "test-model");
        let err = client.complete_enum("x", &["a"]).await.unwrap_err();
        assert!(matches!(err, OpError::Contract(_)));
    }
}
