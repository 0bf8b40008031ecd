// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

/// Combined staged changes across every non-excluded path, as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffBlob {
    text: String,
}

impl DiffBlob {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when there is nothing but whitespace to describe.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Diff text limited to `max_chars` characters, cut on a char boundary.
    pub fn truncated(&self, max_chars: Option<usize>) -> &str {
        let Some(max) = max_chars else {
            return &self.text;
        };
        match self.text.char_indices().nth(max) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}
