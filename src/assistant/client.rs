//! HTTP client for the hosted completion endpoint.

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use uuid::Uuid;

use super::error::AssistantError;
use super::prompt::{SYSTEM_PROMPT, build_prompt};
use super::types::{
    AssistErrorBody, AssistRequest, AssistResponse, ChatMessage, ChatRequest, ChatResponse,
};

/// Seam over the completion endpoint so flows can run against a mock.
pub trait CompletionSender {
    async fn complete(&self, req: &AssistRequest) -> Result<AssistResponse, AssistantError>;
}

pub struct AssistantClient {
    api_key: String,
    model: String,
    client: Client,
    base_url: String,
}

impl AssistantClient {
    /// Create a client for the configured completion endpoint. Tests point
    /// `base_url` at a local mock server.
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to build HTTP client");
        Self {
            api_key,
            model,
            client,
            base_url,
        }
    }
}

impl CompletionSender for AssistantClient {
    /// Template the prompt for the request type and forward it to the model.
    ///
    /// The completion text is returned unmodified; non-2xx responses carry
    /// the endpoint's error payload when it parses, the raw body otherwise.
    async fn complete(&self, req: &AssistRequest) -> Result<AssistResponse, AssistantError> {
        let request_id = Uuid::new_v4();
        debug!(
            "assist request {request_id} kind={} title={:?}",
            req.request_type, req.objective_title
        );

        let prompt = build_prompt(
            req.request_type,
            &req.objective_title,
            req.objective_description.as_deref(),
        );
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = serde_json::from_str::<AssistErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            warn!("assist request {request_id} failed with status {status}");
            return Err(AssistantError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let completion = response.json::<ChatResponse>().await?;
        let result = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AssistantError::Payload("completion returned no choices".into()))?;

        Ok(AssistResponse { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::prompt::RequestType;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AssistantClient {
        AssistantClient::new(
            "sk-test".into(),
            "gpt-4o-mini".into(),
            format!("{}/v1/chat/completions", server.uri()),
        )
    }

    fn request(kind: RequestType) -> AssistRequest {
        AssistRequest {
            objective_title: "Launch v1 of Product".into(),
            objective_description: Some("Ship the first version".into()),
            request_type: kind,
        }
    }

    #[tokio::test]
    async fn complete_returns_model_text_unmodified() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "- step one\n- step two"}}
                ]
            })))
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .complete(&request(RequestType::Suggestions))
            .await
            .unwrap();
        assert_eq!(resp.result, "- step one\n- step two");
    }

    #[tokio::test]
    async fn complete_sends_system_and_templated_user_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "ok"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .complete(&request(RequestType::Research))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_2xx_carries_error_payload_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "model overloaded"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(&request(RequestType::Feasibility))
            .await
            .unwrap_err();
        match err {
            AssistantError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "model overloaded");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(&request(RequestType::Timeline))
            .await
            .unwrap_err();
        match err {
            AssistantError::ApiError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_choices_is_a_payload_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(&request(RequestType::Resources))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::Payload(_)));
    }
}
