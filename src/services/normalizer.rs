// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use crate::domain::{
    CompletionAnswer, DEFAULT_DESCRIPTION, DEFAULT_REPORT, DEFAULT_TYPE, NormalizedCommit,
};

/// Line marker the model sometimes emits instead of `<message>` tags.
const FALLBACK_MARKER: &str = "COMMIT_MESSAGE:";

/// Leading labels the model copies from the prompt's format hint.
const LABEL_PREFIXES: &[&str] = &["type: ", "summary: "];

pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Turn a free-text answer into a `(title, report)` pair.
    ///
    /// Never fails: missing tags, missing markers and empty input all
    /// degrade to default values.
    pub fn normalize(answer: &CompletionAnswer) -> NormalizedCommit {
        let raw = answer.as_str();

        let report = Self::extract_tagged(raw, "report")
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_REPORT.to_string());

        let title = Self::extract_tagged(raw, "message")
            .or_else(|| Self::scan_marker_line(raw))
            .unwrap_or_default();

        NormalizedCommit {
            title: Self::normalize_title(title),
            report,
        }
    }

    /// Trimmed text strictly between the first `<tag>` and the next `</tag>`.
    fn extract_tagged<'a>(raw: &'a str, tag: &str) -> Option<&'a str> {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");

        let start = raw.find(&open)? + open.len();
        let end = raw[start..].find(&close)? + start;

        Some(raw[start..end].trim()).filter(|s| !s.is_empty())
    }

    /// Text after the first `:` on the first line mentioning the marker.
    ///
    /// The split is on the line's first colon, not the marker's, so text
    /// before the marker that contains a colon shifts the split point.
    fn scan_marker_line(raw: &str) -> Option<&str> {
        let line = raw
            .lines()
            .find(|line| line.to_uppercase().contains(FALLBACK_MARKER))?;
        let (_, rest) = line.split_once(':')?;
        Some(rest.trim()).filter(|s| !s.is_empty())
    }

    fn normalize_title(raw: &str) -> String {
        let mut title = raw.replace("**", "");

        for prefix in LABEL_PREFIXES {
            if let Some(rest) = title.strip_prefix(prefix) {
                title = rest.to_string();
            }
        }

        let title = title.strip_suffix('.').unwrap_or(&title).trim();

        let (type_part, desc_part) = title.split_once(':').unwrap_or((DEFAULT_TYPE, title));

        let type_part = match type_part.trim() {
            "" => DEFAULT_TYPE,
            t => t,
        };
        let desc_part = match desc_part.trim() {
            "" => DEFAULT_DESCRIPTION.to_string(),
            d => lowercase_first(d),
        };

        format!("{type_part}: {desc_part}")
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
