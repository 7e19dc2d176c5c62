//! CLI entry point - the composition root.
//!
//! Parses arguments, wires the adapters through [`bootstrap`] and routes the
//! command to its handler. Command output goes to stdout, logs to stderr.

use std::io::Write;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use deckhand_cli::{Cli, CliConfig, Commands, bootstrap, exit_code, handlers};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let config = CliConfig::with_defaults().with_command(&command);
    let ctx = bootstrap(config)?;
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Specs => handlers::specs::execute(ctx.probe.as_ref(), &mut stdout)?,
        Commands::Figures { .. } => handlers::figures::execute(&ctx, &mut stdout)?,
        Commands::Tables { .. } => handlers::tables::execute(&ctx, &mut stdout)?,
        Commands::Deck { .. } => handlers::deck::execute(&ctx, &mut stdout)?,
        Commands::Convert { url, kind, .. } => {
            handlers::convert::execute(&ctx.tools, &url, kind, &mut stdout).await?;
        }
        Commands::Tools => handlers::tools::execute(&mut stdout)?,
    }

    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(u8::try_from(exit_code(&e)).unwrap_or(1))
        }
    }
}
