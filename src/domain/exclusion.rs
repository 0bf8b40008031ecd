// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::collections::HashSet;
use std::fmt;

/// Git pathspec magic that turns a pattern into an exclusion.
pub const EXCLUDE_MAGIC: &str = ":(exclude)";

/// A single path pattern to leave out of the diff.
///
/// Never empty and never starts or ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExclusionRule(String);

impl ExclusionRule {
    /// Build a rule from a raw pattern, stripping one leading and one
    /// trailing `/`. Returns `None` if nothing usable is left.
    pub fn new(raw: &str) -> Option<Self> {
        let pattern = raw.trim();
        let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
        let pattern = pattern.strip_suffix('/').unwrap_or(pattern);

        if pattern.is_empty() || pattern.starts_with('/') || pattern.ends_with('/') {
            return None;
        }

        Some(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render as an exclusion pathspec, e.g. `:(exclude)node_modules`.
    pub fn to_pathspec(&self) -> String {
        format!("{EXCLUDE_MAGIC}{}", self.0)
    }
}

impl fmt::Display for ExclusionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free collection of exclusion rules.
///
/// The first occurrence of a pattern wins; later duplicates are dropped.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    rules: Vec<ExclusionRule>,
    seen: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Returns `false` if it was already present.
    pub fn insert(&mut self, rule: ExclusionRule) -> bool {
        if !self.seen.insert(rule.0.clone()) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.seen.contains(pattern)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExclusionRule> {
        self.rules.iter()
    }

    /// Render every rule as an exclusion pathspec, in insertion order.
    pub fn to_pathspecs(&self) -> Vec<String> {
        self.rules.iter().map(ExclusionRule::to_pathspec).collect()
    }
}

impl Extend<ExclusionRule> for ExclusionSet {
    fn extend<I: IntoIterator<Item = ExclusionRule>>(&mut self, iter: I) {
        for rule in iter {
            self.insert(rule);
        }
    }
}

impl FromIterator<ExclusionRule> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = ExclusionRule>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
