//! `pagegram generate` command implementation.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use pagegram_config::{CliSettings, Config};
use pagegram_editor::{DiagramSource, RemoteSource};
use pagegram_pipeline::Pipeline;
use pagegram_server::pipeline_settings_from_config;

use crate::commands::{check_editor, editor_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Web page to turn into a diagram.
    url: String,

    /// Use a running Pagegram server instead of calling the model directly.
    #[arg(long, env = "PAGEGRAM_SERVER")]
    server: Option<String>,

    /// Directory to write `mermaid-diagram.svg` into.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Path to configuration file (default: auto-discover pagegram.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Kroki server URL for diagram rendering (overrides config).
    #[arg(long)]
    kroki_url: Option<String>,

    /// Completion model (overrides config).
    #[arg(long)]
    model: Option<String>,

    /// Enable verbose output (pipeline logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Execute the generate command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            kroki_url: self.kroki_url,
            model: self.model,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source: Box<dyn DiagramSource> = match &self.server {
            Some(server) => {
                output.info(&format!("Using server: {server}"));
                let timeout = config.llm.timeout_secs.map(Duration::from_secs);
                Box::new(RemoteSource::new(server, timeout))
            }
            None => Box::new(Pipeline::from_settings(pipeline_settings_from_config(
                &config,
            ))),
        };

        let mut editor = editor_from_config(&config)?;
        editor.set_url(self.url.as_str());

        output.info(&format!("Generating diagram for {}", self.url));
        editor.generate(source.as_ref())?;

        if !editor.code().is_empty() {
            output.code(editor.code());
        }
        check_editor(&editor)?;

        let path = editor.export()?.write_to(&self.output)?;
        output.success(&format!("Saved {}", path.display()));

        Ok(())
    }
}
