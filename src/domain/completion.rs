// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Chat-completion request body.
///
/// Always carries exactly one system message followed by one user message;
/// the constructor is the only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        temperature: f32,
        system: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            temperature,
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: system.into(),
                },
                ChatMessage {
                    role: Role::User,
                    content: user.into(),
                },
            ],
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The user prompt (the message that embeds the diff).
    pub fn user_prompt(&self) -> &str {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

/// Free-text answer from the completion service. No structure is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionAnswer(pub String);

impl CompletionAnswer {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CompletionAnswer {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CompletionAnswer {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
