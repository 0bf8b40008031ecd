// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::io::IsTerminal;
use std::time::Duration;

use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::NormalizedCommit;
use crate::error::{Error, Result};
use crate::services::{
    credential::CredentialResolver, git::GitService, ignore::IgnorePatternBuilder, llm,
    llm::CompletionClient, normalizer::ResponseNormalizer,
};

pub struct App {
    cli: Cli,
    config: Config,
    cancel_token: CancellationToken,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            model = %config.model,
            base_url = %config.base_url,
            temperature = config.temperature,
            "config loaded"
        );
        let cancel_token = CancellationToken::new();
        Ok(Self {
            cli,
            config,
            cancel_token,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let cancel = self.cancel_token.clone();
        tokio::spawn(async move {
            signal::ctrl_c().await.ok();
            cancel.cancel();
        });

        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.generate_commit().await
    }

    async fn generate_commit(&mut self) -> Result<()> {
        // The key must be in hand before touching git or the network
        let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();
        let credential = CredentialResolver::from_env(interactive).resolve(&self.config)?;

        let git = GitService::discover()?;

        Self::print_status("Analyzing modified files...");
        git.stage_all().await?;

        let exclusions = IgnorePatternBuilder::new(git.work_dir(), &self.config.ignore_file)
            .with_extra(&self.config.extra_excludes)
            .build();
        debug!(count = exclusions.len(), "exclusion set built");

        let diff = git.collect_diff(&exclusions).await?;
        if diff.is_empty() {
            Self::print_success("No changes detected.");
            return Ok(());
        }

        let request = llm::build_request(&diff, &self.config);

        if self.cli.show_prompt {
            eprintln!("{}", style("--- PROMPT ---").dim());
            eprintln!("{}", request.user_prompt());
            eprintln!("{}", style("--- END PROMPT ---").dim());
        }

        if self.cancel_token.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let client = CompletionClient::new(&self.config, credential.key)?;
        let spinner = Self::spinner(&format!("Generating commit suggestion ({})...", self.config.model));
        let answer = client.complete(&request, self.cancel_token.clone()).await;
        spinner.finish_and_clear();
        let answer = answer?;

        if answer.as_str().trim().is_empty() {
            warn!("empty answer from completion service");
        }

        let commit = ResponseNormalizer::normalize(&answer);
        debug!(commit_type = commit.commit_type(), "answer normalized");

        Self::print_suggestion(&commit);

        if !self.cli.commit {
            return Ok(());
        }

        if !self.cli.yes {
            let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
            if !is_interactive {
                Self::print_warning("Not a terminal. Use --yes to auto-confirm in scripts/hooks.");
                return Ok(());
            }

            let confirm = Confirm::new()
                .with_prompt("Use this commit message?")
                .default(true)
                .interact()?;

            if !confirm {
                Self::print_info("Commit skipped.");
                return Ok(());
            }
        }

        // A failed commit is reported, never escalated
        match git.commit(&commit.title, &commit.report).await {
            Ok(()) => eprintln!("{} Committed!", style("✓").green().bold()),
            Err(e) => {
                warn!(error = %e, "commit failed");
                Self::print_error(&format!("Commit failed: {e}"));
            }
        }

        Ok(())
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                let rendered = toml::to_string_pretty(&self.config)
                    .map_err(|e| Error::Config(e.to_string()))?;
                print!("{rendered}");
                if let Some(path) = Config::config_path() {
                    let status = if path.exists() { "exists" } else { "not created" };
                    eprintln!("\n# config file: {} ({})", path.display(), status);
                }
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "commit-ai", &mut std::io::stdout());
                Ok(())
            }
            #[cfg(feature = "secure-storage")]
            Commands::SetKey => self.set_api_key(),
        }
    }

    #[cfg(feature = "secure-storage")]
    fn set_api_key(&self) -> Result<()> {
        use crate::services::credential::{KEYRING_SERVICE, KEYRING_USER};

        let key: String = dialoguer::Password::new()
            .with_prompt("Groq API key")
            .interact()?;

        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
            .map_err(|e| Error::Keyring(e.to_string()))?;
        entry
            .set_password(key.trim())
            .map_err(|e| Error::Keyring(e.to_string()))?;

        eprintln!("{} API key stored in keychain", style("✓").green().bold());
        Ok(())
    }

    // ─── Output Helpers ───

    fn spinner(msg: &str) -> ProgressBar {
        if !std::io::stderr().is_terminal() {
            Self::print_status(msg);
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(template);
        }
        spinner.set_message(msg.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    fn print_suggestion(commit: &NormalizedCommit) {
        println!();
        println!("{}", style("─── AI SUGGESTION ───").red());
        println!("{}", style("REPORT:").bold());
        println!("{}", commit.report);
        println!();
        println!("{} {}", style("COMMIT_MESSAGE:").bold(), style(&commit.title).green());
        println!("{}", style("─────────────────────").red());
        println!();
    }

    fn print_status(msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_success(msg: &str) {
        eprintln!("{} {}", style("✓").green().bold(), msg);
    }

    fn print_warning(msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }

    fn print_error(msg: &str) {
        eprintln!("{} {}", style("error:").red().bold(), msg);
    }
}
