//! `pagegram render` command implementation.

use std::path::PathBuf;

use clap::Args;
use pagegram_config::{CliSettings, Config};

use crate::commands::{check_editor, editor_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// File containing Mermaid code.
    file: PathBuf,

    /// Directory to write `mermaid-diagram.svg` into.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Path to configuration file (default: auto-discover pagegram.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Kroki server URL for diagram rendering (overrides config).
    #[arg(long)]
    kroki_url: Option<String>,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            kroki_url: self.kroki_url,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let code = std::fs::read_to_string(&self.file)?;

        let mut editor = editor_from_config(&config)?;
        editor.edit_code(code);
        check_editor(&editor)?;

        let path = editor.export()?.write_to(&self.output)?;
        output.success(&format!("Saved {}", path.display()));

        Ok(())
    }
}
