// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "commit-ai")]
#[command(version)]
#[command(about = "AI-powered git analysis and auto-committer", long_about = None)]
pub struct Cli {
    /// Enable commit mode
    #[arg(short, long)]
    pub commit: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Model name
    #[arg(short, long, env = "COMMIT_AI_MODEL")]
    pub model: Option<String>,

    /// Show the prompt sent to the model
    #[arg(long)]
    pub show_prompt: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Store the API key in the system keychain
    #[cfg(feature = "secure-storage")]
    SetKey,
}
