// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

mod commit;
mod completion;
mod diff;
mod exclusion;

pub use commit::*;
pub use completion::*;
pub use diff::*;
pub use exclusion::*;
