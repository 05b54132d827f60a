//! Service initialization
//!
//! Loads configuration, sets up logging and the search context, then
//! dispatches to a one-shot test job or the stdin job loop.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing::info;
use vss_application::SearchPipeline;
use vss_infrastructure::config::{AppConfig, ConfigLoader};
use vss_infrastructure::di::init_search_context;
use vss_infrastructure::error_ext::ErrorContext;
use vss_infrastructure::logging::init_logging;

use crate::handler::JobHandler;
use crate::runtime::{serve_lines, write_response};

/// How the service should run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Configuration file
    pub config_path: Option<PathBuf>,
    /// A single job given inline
    pub test_input: Option<String>,
    /// A single job read from a file
    pub test_input_file: Option<PathBuf>,
    /// Load the model before the first job
    pub warm_up: bool,
}

/// Run the service
pub async fn run(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&options)?;
    init_logging(&config.logging)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting visual search service");

    let context = init_search_context(&config, options.warm_up).await?;
    let handler = JobHandler::new(Arc::new(SearchPipeline::new(context)));

    let test_job = match (&options.test_input, &options.test_input_file) {
        (Some(inline), _) => Some(inline.clone()),
        (None, Some(path)) => Some(
            tokio::fs::read_to_string(path)
                .await
                .io_context(format!("Failed to read {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let mut stdout = tokio::io::stdout();
    match test_job {
        Some(job) => {
            let response = handler.handle_json(&job).await;
            write_response(&mut stdout, &response).await?;
        }
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            serve_lines(&handler, stdin, stdout).await?;
        }
    }
    Ok(())
}

fn load_config(options: &RunOptions) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match &options.config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
