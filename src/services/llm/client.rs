// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::Config;
use crate::domain::{CompletionAnswer, CompletionRequest};
use crate::error::{Error, Result};

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn completion_error(message: impl Into<String>) -> Error {
    Error::Completion {
        message: message.into(),
    }
}

impl CompletionClient {
    pub fn new(config: &Config, api_key: SecretString) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| completion_error(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Send `request` and return the first choice's content.
    ///
    /// One attempt only; any failure is a [`Error::Completion`].
    pub async fn complete(
        &self,
        request: &CompletionRequest,
        cancel: CancellationToken,
    ) -> Result<CompletionAnswer> {
        tokio::select! {
            _ = cancel.cancelled() => Err(Error::Cancelled),
            answer = self.send(request) => answer,
        }
    }

    async fn send(&self, request: &CompletionRequest) -> Result<CompletionAnswer> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            url = %url,
            model = request.model(),
            temperature = request.temperature(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    completion_error("request timed out")
                } else {
                    completion_error(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(completion_error("invalid API key"));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(completion_error(format!("HTTP {status}: {body}")));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| completion_error(format!("malformed response: {e}")))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| completion_error("response contained no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        debug!(answer_chars = content.len(), "completion received");

        Ok(CompletionAnswer(content))
    }
}
