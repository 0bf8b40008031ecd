// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{ExclusionRule, ExclusionSet};

/// Paths that never belong in a prompt: dependency trees, lockfiles,
/// build output, VCS metadata and binary/log artifacts.
pub const BUILTIN_EXCLUDES: &[&str] = &[
    "package-lock.json",
    "bun.lockb",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    "node_modules",
    "dist",
    "target",
    "vendor",
    ".git",
    "commit-ai.exe",
    "*.log",
    "*.exe",
    "*.bin",
    "*.pyc",
    ".DS_Store",
];

/// Parse one ignore-file line into a rule.
///
/// Blank lines and `#` comments yield `None`.
pub fn parse_ignore_line(line: &str) -> Option<ExclusionRule> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    ExclusionRule::new(line)
}

pub struct IgnorePatternBuilder {
    ignore_file: PathBuf,
    extra: Vec<String>,
}

impl IgnorePatternBuilder {
    /// Builder reading `file_name` (usually `.gitignore`) under `root`.
    pub fn new(root: &Path, file_name: &str) -> Self {
        Self {
            ignore_file: root.join(file_name),
            extra: Vec::new(),
        }
    }

    /// Extra patterns appended after the ignore-file lines.
    pub fn with_extra(mut self, extra: &[String]) -> Self {
        self.extra = extra.to_vec();
        self
    }

    /// Built-ins first, then the ignore-file, then extras; deduplicated.
    ///
    /// A missing or unreadable ignore-file is not an error.
    pub fn build(&self) -> ExclusionSet {
        let mut set: ExclusionSet = BUILTIN_EXCLUDES
            .iter()
            .filter_map(|p| ExclusionRule::new(p))
            .collect();

        match fs::read_to_string(&self.ignore_file) {
            Ok(content) => {
                let before = set.len();
                set.extend(content.lines().filter_map(parse_ignore_line));
                debug!(
                    file = %self.ignore_file.display(),
                    added = set.len() - before,
                    "ignore file parsed"
                );
            }
            Err(e) => {
                debug!(
                    file = %self.ignore_file.display(),
                    error = %e,
                    "ignore file not readable, using built-in excludes only"
                );
            }
        }

        set.extend(self.extra.iter().filter_map(|p| parse_ignore_line(p)));
        set
    }
}
