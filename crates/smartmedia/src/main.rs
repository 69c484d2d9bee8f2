// SPDX-FileCopyrightText: 2026 SmartMedia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SmartMedia - selectable media panel plugins.
//!
//! Binary entry point: inspects the plugin registry and manages the
//! selection key and secure settings backups.

mod commands;
mod host;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::host::Host;

/// SmartMedia - selectable media panel plugins.
#[derive(Parser, Debug)]
#[command(name = "smartmedia", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered plugins, marking the active one.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the active plugin.
    Active {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Select the plugin to activate.
    Select {
        /// Plugin id to store under the selection key.
        id: String,
    },
    /// Print a secure settings backup as JSON, or restore one.
    Backup {
        /// Restore from this JSON backup instead of printing one.
        #[arg(long, value_name = "FILE")]
        restore: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => smartmedia_config::load_and_validate_path(path),
        None => smartmedia_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            smartmedia_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    let mut host = Host::from_config(&config);
    let use_color = !cli.plain && std::io::stdout().is_terminal();

    let result = match cli.command {
        Commands::List { json } => commands::run_list(&host, json, use_color),
        Commands::Active { json } => commands::run_active(&host, json, use_color),
        Commands::Select { id } => commands::run_select(&mut host, &id, use_color),
        Commands::Backup { restore } => commands::run_backup(&mut host, restore.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let level = log_level.trim().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "smartmedia={level},smartmedia_plugin={level},smartmedia_settings={level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
