// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

/// Body used when the model gives no report.
pub const DEFAULT_REPORT: &str = "Modified project files.";

/// Type token used when the title carries none.
pub const DEFAULT_TYPE: &str = "feat";

/// Description used when the title carries none.
pub const DEFAULT_DESCRIPTION: &str = "update project files";

/// A commit summary line plus its extended body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCommit {
    /// `type: description`, always containing a `:`.
    pub title: String,
    /// Bulleted change report, never empty.
    pub report: String,
}

impl NormalizedCommit {
    /// Type token before the first `:`.
    pub fn commit_type(&self) -> &str {
        self.title
            .split_once(':')
            .map_or(self.title.as_str(), |(t, _)| t)
    }

    /// Full message as git would store it.
    pub fn to_message(&self) -> String {
        format!("{}\n\n{}", self.title, self.report)
    }
}
