// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

use crate::domain::{DiffBlob, ExclusionSet};
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct GitService {
    work_dir: PathBuf,
}

impl GitService {
    pub fn discover() -> Result<Self> {
        Self::discover_at(Path::new("."))
    }

    pub fn discover_at(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|_| Error::NotAGitRepo)?;

        let work_dir = repo
            .workdir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();

        Ok(Self { work_dir })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Stage every change in the work tree (`git add .`).
    pub async fn stage_all(&self) -> Result<()> {
        self.run(&["add", "."]).await.map(|_| ())
    }

    /// Staged diff of every path except `exclusions`.
    pub async fn collect_diff(&self, exclusions: &ExclusionSet) -> Result<DiffBlob> {
        let mut args: Vec<String> = ["diff", "--cached", "--no-ext-diff", "--", "."]
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.extend(exclusions.to_pathspecs());

        let stdout = self.run(&args).await?;
        let diff = DiffBlob::new(stdout);
        debug!(chars = diff.char_count(), "staged diff collected");
        Ok(diff)
    }

    /// Commit with `title` as the summary and `report` as the body.
    pub async fn commit(&self, title: &str, report: &str) -> Result<()> {
        self.run(&["commit", "-m", title, "-m", report])
            .await
            .map(|_| ())
    }

    async fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<String> {
        let output = Command::new("git")
            .args(args.iter().map(AsRef::as_ref))
            .current_dir(&self.work_dir)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
