//! Client for the OpenAI-compatible chat-completion endpoint.
//!
//! One attempt per request, no retries, no timeout beyond the reqwest
//! client default. Every failure mode maps to a `GenError` for the
//! generator to recover from.

use crate::error::{GenError, GenResult};
use crate::prompt;

use admuse_config::GenerationConfig;
use admuse_core::{AdCopy, Mascot, ProductBrief};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

pub struct RemoteGenerator {
    base_url: String,
    model: String,
    api_key: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl RemoteGenerator {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
            client: ReqwestClient::new(),
        }
    }

    /// Request four copy fields from the remote service.
    pub async fn generate(&self, mascot: Mascot, brief: &ProductBrief) -> GenResult<AdCopy> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt::user_prompt(mascot, brief),
                },
            ],
            temperature: 0.8,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenError::Api {
                status,
                body: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenError::EmptyCompletion {
                location: ErrorLocation::from(Location::caller()),
            })?
            .message
            .content;

        let copy: AdCopy = serde_json::from_str(strip_code_fence(&content))?;
        if !copy.is_complete() {
            return Err(GenError::IncompleteCopy {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(copy)
    }
}

/// Models wrap JSON answers in markdown fences often enough that it is
/// worth peeling them off before parsing.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();

    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .map_or(trimmed, |rest| {
            rest.strip_suffix("```").unwrap_or(rest).trim()
        })
}
