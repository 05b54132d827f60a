//! Visual Search Service - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `vss` | Serve JSON jobs from stdin, one response per stdout line |
//! | `vss --test-input '<json>'` | Answer one job and exit |
//! | `vss --test-input-file job.json` | Answer one job read from a file and exit |
//! | `vss --list-providers` | Print the registered providers and exit |

// Force-link vss-providers to ensure linkme registrations are included
extern crate vss_providers;

use clap::Parser;
use vss::application::ports::registry::{
    list_cache_providers, list_embedding_models, list_object_stores,
};
use vss::{RunOptions, run};

/// Command line interface for the Visual Search Service
#[derive(Parser, Debug)]
#[command(name = "vss")]
#[command(about = "Visual Search Service - rank stored images against a text query")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Answer a single JSON job given inline, then exit
    #[arg(long, conflicts_with = "test_input_file")]
    pub test_input: Option<String>,

    /// Answer a single JSON job read from a file, then exit
    #[arg(long)]
    pub test_input_file: Option<std::path::PathBuf>,

    /// Load the embedding model before the first job
    #[arg(long)]
    pub warmup: bool,

    /// List registered providers and exit
    #[arg(long)]
    pub list_providers: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_providers {
        print_providers("object stores", &list_object_stores());
        print_providers("embedding models", &list_embedding_models());
        print_providers("embedding caches", &list_cache_providers());
        return Ok(());
    }

    run(RunOptions {
        config_path: cli.config,
        test_input: cli.test_input,
        test_input_file: cli.test_input_file,
        warm_up: cli.warmup,
    })
    .await
}

fn print_providers(kind: &str, providers: &[(&'static str, &'static str)]) {
    println!("{kind}:");
    for (name, description) in providers {
        println!("  {name:<12} {description}");
    }
}
