// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub model: String,

    /// Root of an OpenAI-compatible API (default: Groq)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Never written back out by `commit-ai config`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// LLM temperature (above 0.0, at most 2.0, default 0.7)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds (default 60)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cap on diff characters embedded in the prompt (unset = no cap)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_diff_chars: Option<usize>,

    /// Ignore-file read from the repository root
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,

    /// Additional exclusion patterns
    #[serde(default)]
    pub extra_excludes: Vec<String>,
}

fn default_model() -> String {
    "llama-3.1-8b-instant".into()
}
fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_ignore_file() -> String {
    ".gitignore".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key: None,
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            max_diff_chars: None,
            ignore_file: default_ignore_file(),
            extra_excludes: Vec::new(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.commit-ai.toml in the current directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".commit-ai.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // COMMIT_AI_MODEL, COMMIT_AI_API_KEY, ...
        figment = figment.merge(Env::prefixed("COMMIT_AI_"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commit-ai").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref m) = cli.model {
            self.model = m.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::Config("model cannot be empty".into()));
        }

        if !(self.temperature > 0.0 && self.temperature <= 2.0) {
            return Err(Error::Config(format!(
                "temperature must be above 0.0 and at most 2.0, got {}",
                self.temperature
            )));
        }

        if !(1..=3600).contains(&self.timeout_secs) {
            return Err(Error::Config(format!(
                "timeout_secs must be 1–3600, got {}",
                self.timeout_secs
            )));
        }

        if let Some(max) = self.max_diff_chars {
            if !(1_000..=1_000_000).contains(&max) {
                return Err(Error::Config(format!(
                    "max_diff_chars must be 1000–1000000, got {max}"
                )));
            }
        }

        if self.ignore_file.trim().is_empty() {
            return Err(Error::Config("ignore_file cannot be empty".into()));
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("base_url '{}' is invalid: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# commit-ai configuration

# Model identifier sent to the completion API
model = "llama-3.1-8b-instant"

# OpenAI-compatible API root
base_url = "https://api.groq.com/openai/v1"

# Sampling temperature (above 0.0, at most 2.0)
temperature = 0.7

# Request timeout in seconds
timeout_secs = 60

# Cap on diff characters sent to the model (unset = whole diff)
# max_diff_chars = 5000

# Ignore-file whose patterns are excluded from the diff
ignore_file = ".gitignore"

# Additional patterns to exclude from the diff
extra_excludes = []
"#;

        fs::write(&path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
