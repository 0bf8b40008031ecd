// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use commit_ai::domain::CompletionAnswer;
use commit_ai::services::normalizer::ResponseNormalizer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let commit = ResponseNormalizer::normalize(&CompletionAnswer::from(raw.as_ref()));

    let (type_part, desc_part) = commit.title.split_once(':').expect("title without colon");
    assert!(!type_part.is_empty());
    assert!(!desc_part.trim().is_empty());
    assert!(!commit.report.is_empty());
});
