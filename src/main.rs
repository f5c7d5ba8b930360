// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! delivery-network CLI - power-constrained routing over delivery networks

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use delivery_network::commands::{self, OutputOptions};
use delivery_network::config;
use delivery_network::power::MinPowerStrategy;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "delivery-network")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "DELIVERY_NETWORK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a network and its adjacency lists
    Info {
        /// Network description file
        file: PathBuf,
    },

    /// List connected components, ignoring power
    Components {
        /// Network description file
        file: PathBuf,
    },

    /// Find a path usable with the given power
    Path {
        /// Network description file
        file: PathBuf,

        /// Source node
        src: u32,

        /// Destination node
        dest: u32,

        /// Available power
        #[arg(short, long)]
        power: u64,
    },

    /// Find the minimum power connecting two nodes
    MinPower {
        /// Network description file
        file: PathBuf,

        /// Source node
        src: u32,

        /// Destination node
        dest: u32,

        /// Search strategy (overrides the configuration file)
        #[arg(long, value_enum)]
        search: Option<MinPowerStrategy>,
    },

    /// Export a network to DOT or JSON
    Export {
        /// Network description file
        file: PathBuf,

        /// Output format (dot, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::from_str(&settings.log_level).unwrap_or(tracing::Level::INFO),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = EnvFilter::try_from_env("DELIVERY_NETWORK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let output = OutputOptions {
        json: cli.json,
        color: !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Info { file } => commands::info::run(&file, output),
        Commands::Components { file } => commands::components::run(&file, output),
        Commands::Path {
            file,
            src,
            dest,
            power,
        } => commands::path::run(&file, src, dest, power, output),
        Commands::MinPower {
            file,
            src,
            dest,
            search,
        } => commands::min_power::run(&file, src, dest, search.unwrap_or(settings.search), output),
        Commands::Export {
            file,
            format,
            output: target,
        } => {
            let format = format.unwrap_or(settings.export_format);
            commands::export::run(&file, &format, target)
        }
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
