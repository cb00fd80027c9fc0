//! CLI command implementations.

pub(crate) mod generate;
pub(crate) mod render;
pub(crate) mod serve;

use std::time::Duration;

use pagegram_config::Config;
use pagegram_diagrams::KrokiRenderer;
use pagegram_editor::Editor;

pub(crate) use generate::GenerateArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Create an editor rendering through the configured Kroki server.
fn editor_from_config(config: &Config) -> Result<Editor<KrokiRenderer>, CliError> {
    let kroki_url = config.diagrams.kroki_url.as_deref().ok_or_else(|| {
        CliError::Validation(
            "Diagram rendering is disabled (no kroki_url in config)".to_owned(),
        )
    })?;
    let timeout = config.diagrams.timeout_secs.map(Duration::from_secs);
    Ok(Editor::new(KrokiRenderer::new(kroki_url, timeout)))
}

/// Fail with the editor's error message, if any.
///
/// The message is attributed to generation when no code was produced and to
/// rendering otherwise.
fn check_editor<R>(editor: &Editor<R>) -> Result<(), CliError>
where
    R: pagegram_diagrams::DiagramRenderer,
{
    match editor.error() {
        None => Ok(()),
        Some(message) if editor.code().is_empty() => Err(CliError::Generate(message.to_owned())),
        Some(message) => Err(CliError::Render(message.to_owned())),
    }
}
