//! Pagegram CLI - web page to Mermaid diagram.
//!
//! Provides commands for:
//! - `serve`: Start the HTTP server and browser shell
//! - `generate`: Turn a web page into Mermaid code and an SVG file
//! - `render`: Render a Mermaid file to SVG

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, RenderArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pagegram - turn a web page into an editable Mermaid diagram.
#[derive(Parser)]
#[command(name = "pagegram", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve(ServeArgs),
    /// Generate a diagram for a web page.
    Generate(GenerateArgs),
    /// Render a Mermaid file to SVG.
    Render(RenderArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Serve(args) => args.verbose,
            Self::Generate(args) => args.verbose,
            Self::Render(_) => false,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Generate(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_verbose() {
        let cli = Cli::try_parse_from(["pagegram", "serve", "--port", "8080", "-v"]).unwrap();
        assert!(cli.command.verbose());
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "pagegram",
            "generate",
            "https://example.com",
            "--server",
            "http://127.0.0.1:7979",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Generate(_)));
        assert!(!cli.command.verbose());
    }

    #[test]
    fn test_generate_requires_url() {
        assert!(Cli::try_parse_from(["pagegram", "generate"]).is_err());
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["pagegram", "render", "diagram.mmd", "-o", "out"]).unwrap();
        assert!(matches!(cli.command, Commands::Render(_)));
    }
}
