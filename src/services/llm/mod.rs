// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

pub mod client;

pub use client::CompletionClient;

use crate::config::Config;
use crate::domain::{CompletionRequest, DiffBlob};

pub const SYSTEM_PROMPT: &str = "You are commit-ai. Follow tags strictly. \
Answer with exactly one <report> region and one <message> region and nothing else.";

/// User prompt embedding the diff verbatim.
pub fn build_user_prompt(diff: &str) -> String {
    format!(
        r#"Analyze this Git diff and provide a professional report.
1. Provide a bulleted "REPORT" of technical changes.
2. Provide a single-line "COMMIT_MESSAGE" (type: description).
STRICT FORMAT:
<report>* bullet points</report>
<message>type: description</message>
Diff:
{diff}"#
    )
}

/// Request for `diff` using the configured model and temperature.
pub fn build_request(diff: &DiffBlob, config: &Config) -> CompletionRequest {
    let prompt = build_user_prompt(diff.truncated(config.max_diff_chars));
    CompletionRequest::new(
        config.model.as_str(),
        config.temperature,
        SYSTEM_PROMPT,
        prompt,
    )
}
