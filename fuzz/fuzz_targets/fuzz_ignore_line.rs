// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use commit_ai::services::ignore::parse_ignore_line;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    for line in content.lines() {
        if let Some(rule) = parse_ignore_line(line) {
            let pattern = rule.as_str();
            assert!(!pattern.is_empty());
            assert!(!pattern.starts_with('/') && !pattern.ends_with('/'));
            assert_eq!(rule.to_pathspec(), format!(":(exclude){pattern}"));
        }
    }
});
