// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("No API key found")]
    #[diagnostic(
        code(commit_ai::credential::missing),
        help("Set GROQ_API_KEY (get one at https://console.groq.com/keys) and restart your terminal")
    )]
    MissingCredential,

    #[error("Not a git repository")]
    #[diagnostic(
        code(commit_ai::git::not_repo),
        help("Run this command inside a git repository")
    )]
    NotAGitRepo,

    #[error("Completion request failed: {message}")]
    #[diagnostic(
        code(commit_ai::completion::failed),
        help("Check your network connection and API key, then try again")
    )]
    Completion { message: String },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(commit_ai::config::error))]
    Config(String),

    #[error("Git error: {0}")]
    #[diagnostic(code(commit_ai::git::error))]
    Git(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),

    #[cfg(feature = "secure-storage")]
    #[error("Keyring error: {0}")]
    #[diagnostic(
        code(commit_ai::keyring::error),
        help("Check your system keychain configuration")
    )]
    Keyring(String),
}

impl Error {
    /// Process exit status for a run that ended with this error.
    ///
    /// A missing credential and unusable configuration exit non-zero. Git
    /// trouble (no repository, staging or diffing failed), a failed
    /// completion and a user cancellation abort the run but are reported,
    /// zero-status outcomes.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completion { .. } | Self::Cancelled | Self::NotAGitRepo | Self::Git(_) => 0,
            _ => 1,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
