//! Wire shapes for `POST /chat/completions`.

use serde::{Deserialize, Serialize};

use crate::domain::ports::ChatCompletionRequest;

#[derive(Debug, Serialize)]
pub(super) struct CompletionRequestDto<'a> {
    pub(super) model: &'a str,
    pub(super) messages: [MessageDto<'a>; 2],
    pub(super) max_tokens: u32,
    pub(super) temperature: f32,
}

#[derive(Debug, Serialize)]
pub(super) struct MessageDto<'a> {
    pub(super) role: &'static str,
    pub(super) content: &'a str,
}

impl<'a> CompletionRequestDto<'a> {
    pub(super) fn new(model: &'a str, request: &'a ChatCompletionRequest) -> Self {
        Self {
            model,
            messages: [
                MessageDto {
                    role: "system",
                    content: &request.system_prompt,
                },
                MessageDto {
                    role: "user",
                    content: &request.user_message,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CompletionResponseDto {
    #[serde(default)]
    pub(super) choices: Vec<ChoiceDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoiceDto {
    pub(super) message: ChoiceMessageDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoiceMessageDto {
    #[serde(default)]
    pub(super) content: Option<String>,
}

impl CompletionResponseDto {
    /// Text of the first choice, if it has any.
    pub(super) fn into_reply(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
    }
}

/// Error body, e.g. `{"error":{"message":"...","type":"..."}}`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ApiErrorDto {
    #[serde(default)]
    pub(super) error: Option<ApiErrorDetailDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorDetailDto {
    #[serde(default)]
    pub(super) message: Option<String>,
}
