// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

pub mod credential;
pub mod git;
pub mod ignore;
pub mod llm;
pub mod normalizer;
