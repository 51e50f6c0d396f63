//! CLI argument definitions and launch profile construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::resolve_config_dir;

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunServer(LaunchProfile),
    CheckConfig(LaunchProfile),
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_dir: Option<PathBuf>,
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Resolve the effective configuration and print it without starting
    /// the server.
    CheckConfig,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Hearth status server", long_about = None)]
pub struct LaunchArgs {
    /// Configuration directory override (skips packaging-mode detection).
    #[arg(long = "config-dir")]
    pub config_dir: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchArgs {
    /// Parse CLI args into either server launch mode or introspection mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let profile = LaunchProfile {
            config_dir: resolve_config_dir(self.config_dir)?,
        };
        Ok(match self.command {
            Some(CliCommand::CheckConfig) => ParsedCommand::CheckConfig(profile),
            None => ParsedCommand::RunServer(profile),
        })
    }
}
