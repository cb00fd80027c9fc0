//! HTTP server for Pagegram.
//!
//! This crate provides the axum server behind the browser shell, serving:
//! - `POST /api/generate-mermaid`: page URL to Mermaid code
//! - `POST /api/render`: Mermaid code to SVG via the configured renderer
//! - `GET /api/config`: client-side configuration
//! - Static files for the browser shell
//!
//! # Quick Start
//!
//! ```ignore
//! use pagegram_server::{run_server, server_config_from_config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = pagegram_config::Config::load(None, None).unwrap();
//!     let server_config = server_config_from_config(&config, "0.1.0".to_owned());
//!     run_server(server_config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (pagegram-server)
//!                        │
//!                        ├─► /api/generate-mermaid ──► spawn_blocking ──► Pipeline
//!                        │                                 (fetch, extract, generate)
//!                        │
//!                        ├─► /api/render ──► spawn_blocking ──► DiagramRenderer (Kroki)
//!                        │
//!                        └─► Static files (embedded or from frontend/)
//! ```
//!
//! Pipeline stages and the renderer are built once in [`run_server`] and
//! shared by every request.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use pagegram_diagrams::{DiagramRenderer, KrokiRenderer};
use pagegram_generate::CompletionSettings;
use pagegram_pipeline::{Pipeline, PipelineSettings};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Pipeline stage settings.
    pub pipeline: PipelineSettings,
    /// Kroki URL for diagrams (`None` disables `/api/render`).
    pub kroki_url: Option<String>,
    /// Kroki request timeout.
    pub render_timeout: Option<Duration>,
    /// Application version.
    pub version: String,
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = Pipeline::from_settings(config.pipeline);
    let renderer = config
        .kroki_url
        .as_deref()
        .map(|url| -> Arc<dyn DiagramRenderer> {
            Arc::new(KrokiRenderer::new(url, config.render_timeout))
        });

    if renderer.is_none() {
        tracing::warn!("No Kroki URL configured; /api/render is disabled");
    }

    let state = Arc::new(AppState {
        pipeline,
        renderer,
        version: config.version,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Pipeline settings derived from the loaded configuration.
#[must_use]
pub fn pipeline_settings_from_config(config: &pagegram_config::Config) -> PipelineSettings {
    PipelineSettings {
        user_agent: config.fetch.user_agent.clone(),
        fetch_timeout: config.fetch.timeout_secs.map(Duration::from_secs),
        completion: CompletionSettings {
            api_key: config.llm.api_key.clone(),
            model: config.llm.model.clone(),
            base_url: config.llm.base_url.clone(),
            timeout: config.llm.timeout_secs.map(Duration::from_secs),
        },
    }
}

/// Create server configuration from the loaded configuration.
#[must_use]
pub fn server_config_from_config(config: &pagegram_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        pipeline: pipeline_settings_from_config(config),
        kroki_url: config.diagrams.kroki_url.clone(),
        render_timeout: config.diagrams.timeout_secs.map(Duration::from_secs),
        version,
    }
}

#[cfg(test)]
mod tests {
    use pagegram_config::Config;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_default_config() {
        let config = Config::default();

        let server = server_config_from_config(&config, "1.2.3".to_owned());

        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 7979);
        assert_eq!(server.kroki_url.as_deref(), Some("https://kroki.io"));
        assert_eq!(server.render_timeout, None);
        assert_eq!(server.version, "1.2.3");
        assert_eq!(server.pipeline.completion.model, "gpt-3.5-turbo-instruct");
        assert_eq!(
            server.pipeline.completion.base_url,
            "https://api.openai.com/v1"
        );
    }

    #[test]
    fn test_pipeline_settings_timeouts() {
        let mut config = Config::default();
        config.fetch.timeout_secs = Some(5);
        config.llm.timeout_secs = Some(30);

        let settings = pipeline_settings_from_config(&config);

        assert_eq!(settings.fetch_timeout, Some(Duration::from_secs(5)));
        assert_eq!(settings.completion.timeout, Some(Duration::from_secs(30)));
    }
}
