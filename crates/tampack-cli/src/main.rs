//! tampack CLI - pack six tone textures into two RGB hatch maps
//!
//! This binary builds Tonal Art Map textures for hatching shaders.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use tampack_cli::commands::{self, PackOptions};

/// tampack - Tonal Art Map channel packer
#[derive(Parser)]
#[command(name = "tampack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack six tone textures into Hatch0/Hatch1 PNGs
    Generate {
        #[command(flatten)]
        options: PackOptions,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate six tone textures without writing anything
    Check {
        #[command(flatten)]
        options: PackOptions,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate { options, json } => commands::generate::run(&options, json),
        Commands::Check { options, json } => commands::check::run(&options, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("tampack={level},tampack_cli={level}"))),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
