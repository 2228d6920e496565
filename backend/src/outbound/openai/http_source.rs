//! Reqwest-backed chat completions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use zeroize::Zeroizing;

use super::dto::{ApiErrorDto, CompletionRequestDto, CompletionResponseDto};
use crate::domain::ports::{ChatCompletionError, ChatCompletionRequest, ChatCompletionSource};
use crate::outbound::http_support::{body_preview, client_with_timeout, join_segments};

/// Completion source calling `POST {api_url}/chat/completions`.
pub struct OpenAiChatSource {
    client: Client,
    completions_url: Url,
    api_key: Zeroizing<String>,
    model: String,
}

impl OpenAiChatSource {
    /// # Errors
    ///
    /// Returns [`ChatCompletionError::Transport`] when the URL cannot carry a
    /// path or the client cannot be built.
    pub fn new(
        api_url: &Url,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ChatCompletionError> {
        let completions_url = join_segments(api_url, &["chat", "completions"])
            .ok_or_else(|| ChatCompletionError::transport("completion API URL cannot carry a path"))?;
        let client = client_with_timeout(timeout)
            .map_err(|err| ChatCompletionError::transport(err.to_string()))?;
        Ok(Self {
            client,
            completions_url,
            api_key: Zeroizing::new(api_key.into()),
            model: model.into(),
        })
    }
}

#[async_trait]
impl ChatCompletionSource for OpenAiChatSource {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<String, ChatCompletionError> {
        let response = self
            .client
            .post(self.completions_url.clone())
            .bearer_auth(self.api_key.as_str())
            .json(&CompletionRequestDto::new(&self.model, request))
            .send()
            .await
            .map_err(|err| ChatCompletionError::transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| ChatCompletionError::transport(err.to_string()))?;
        if !status.is_success() {
            return Err(ChatCompletionError::rejected(
                status.as_u16(),
                error_message(&body),
            ));
        }

        let decoded: CompletionResponseDto = serde_json::from_slice(&body).map_err(|err| {
            ChatCompletionError::decode(format!("invalid completion payload: {err}"))
        })?;
        decoded
            .into_reply()
            .ok_or_else(|| ChatCompletionError::decode("completion has no reply text"))
    }
}

fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ApiErrorDto>(body)
        .ok()
        .and_then(|dto| dto.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| body_preview(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "sk-test";

    #[fixture]
    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            system_prompt: "Tu es l'hôte.".into(),
            user_message: "C'est où ?".into(),
            max_tokens: 500,
            temperature: 0.5,
        }
    }

    fn source(server: &MockServer) -> OpenAiChatSource {
        let base = Url::parse(&format!("{}/v1", server.uri())).expect("mock server url");
        OpenAiChatSource::new(&base, API_KEY, "gpt-4o-mini", Duration::from_secs(5))
            .expect("source builds")
    }

    #[rstest]
    #[tokio::test]
    async fn sends_persona_then_visitor_message(request: ChatCompletionRequest) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": "Tu es l'hôte." },
                    { "role": "user", "content": "C'est où ?" }
                ],
                "max_tokens": 500,
                "temperature": 0.5
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "À Cocody !" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = source(&server).complete(&request).await.expect("reply");

        assert_eq!(reply, "À Cocody !");
    }

    #[rstest]
    #[tokio::test]
    async fn api_error_message_is_kept(request: ChatCompletionRequest) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "message": "Rate limit reached", "type": "requests" }
            })))
            .mount(&server)
            .await;

        let error = source(&server).complete(&request).await.expect_err("rejected");

        assert_eq!(error, ChatCompletionError::rejected(429_u16, "Rate limit reached"));
    }

    #[rstest]
    #[case::no_choices(json!({ "choices": [] }))]
    #[case::null_content(json!({ "choices": [{ "message": { "content": null } }] }))]
    #[case::blank_content(json!({ "choices": [{ "message": { "content": "  " } }] }))]
    #[tokio::test]
    async fn missing_reply_is_a_decode_error(
        request: ChatCompletionRequest,
        #[case] body: serde_json::Value,
    ) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let error = source(&server).complete(&request).await.expect_err("no reply");

        assert!(matches!(error, ChatCompletionError::Decode { .. }));
    }
}
