// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use dialoguer::Password;
use directories::BaseDirs;
use secrecy::SecretString;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};

pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const KEY_FILE_NAME: &str = ".commit-ai-key";
#[cfg(feature = "secure-storage")]
pub const KEYRING_SERVICE: &str = "commit-ai";
#[cfg(feature = "secure-storage")]
pub const KEYRING_USER: &str = "groq";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    Config,
    KeyFile,
    Keyring,
    Prompt,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => write!(f, "environment"),
            Self::Config => write!(f, "config"),
            Self::KeyFile => write!(f, "key file"),
            Self::Keyring => write!(f, "keyring"),
            Self::Prompt => write!(f, "prompt"),
        }
    }
}

#[derive(Debug)]
pub struct Credential {
    pub key: SecretString,
    pub source: CredentialSource,
}

/// Resolves the API key: environment, config, key file, keychain, prompt.
pub struct CredentialResolver {
    env_key: Option<String>,
    key_file: Option<PathBuf>,
    use_keyring: bool,
    interactive: bool,
}

impl CredentialResolver {
    pub fn new(
        env_key: Option<String>,
        key_file: Option<PathBuf>,
        use_keyring: bool,
        interactive: bool,
    ) -> Self {
        Self {
            env_key,
            key_file,
            use_keyring,
            interactive,
        }
    }

    /// Resolver reading the process environment and `~/.commit-ai-key`.
    pub fn from_env(interactive: bool) -> Self {
        Self::new(
            std::env::var(API_KEY_ENV).ok(),
            Self::default_key_file(),
            cfg!(feature = "secure-storage"),
            interactive,
        )
    }

    pub fn default_key_file() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(KEY_FILE_NAME))
    }

    pub fn resolve(&self, config: &Config) -> Result<Credential> {
        let found = non_empty(self.env_key.as_deref())
            .map(|k| (k, CredentialSource::Environment))
            .or_else(|| non_empty(config.api_key.as_deref()).map(|k| (k, CredentialSource::Config)))
            .or_else(|| self.read_key_file().map(|k| (k, CredentialSource::KeyFile)))
            .or_else(|| self.read_keyring().map(|k| (k, CredentialSource::Keyring)));

        let (key, source) = match found {
            Some(found) => found,
            None => (self.prompt_and_persist()?, CredentialSource::Prompt),
        };

        debug!(source = %source, "api key resolved");
        Ok(Credential {
            key: SecretString::from(key),
            source,
        })
    }

    fn read_key_file(&self) -> Option<String> {
        let path = self.key_file.as_ref()?;
        let content = fs::read_to_string(path).ok()?;
        non_empty(Some(content.as_str()))
    }

    #[cfg(feature = "secure-storage")]
    fn read_keyring(&self) -> Option<String> {
        if !self.use_keyring {
            return None;
        }
        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
        match entry.get_password() {
            Ok(key) => non_empty(Some(key.as_str())),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                debug!(error = %e, "keyring lookup failed");
                None
            }
        }
    }

    #[cfg(not(feature = "secure-storage"))]
    fn read_keyring(&self) -> Option<String> {
        let _ = self.use_keyring;
        None
    }

    /// First-run setup: ask for a key and cache it in the key file.
    fn prompt_and_persist(&self) -> Result<String> {
        if !self.interactive {
            return Err(Error::MissingCredential);
        }

        eprintln!("\n{}", style(format!("[Setup] No {API_KEY_ENV} found.")).yellow());
        eprintln!("You can get one at: https://console.groq.com/keys");

        let input: String = Password::new()
            .with_prompt("Paste your API key")
            .allow_empty_password(true)
            .interact()?;

        let Some(key) = non_empty(Some(input.as_str())) else {
            return Err(Error::MissingCredential);
        };

        if let Some(path) = &self.key_file {
            match persist_key(path, &key) {
                Ok(()) => eprintln!(
                    "{} Key saved to {}",
                    style("✓").green().bold(),
                    path.display()
                ),
                Err(e) => warn!(error = %e, "could not cache api key"),
            }
        }

        Ok(key)
    }
}

/// Write `key` to `path`, readable by the owner only.
pub fn persist_key(path: &Path, key: &str) -> Result<()> {
    fs::write(path, key)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
