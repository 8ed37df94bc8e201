use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use facelore_core::rng::{thread_jitter, JitterSource, RandomJitter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "facelore", about = "Portrait-to-prediction pipeline CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline over an image and print the report as JSON
    Analyze {
        /// Path to the portrait image
        image: PathBuf,
        /// Seed the jitter source for a reproducible report
        #[arg(long)]
        seed: Option<u64>,
        /// Compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Extract and print only the face feature vector
    Features {
        /// Path to the portrait image
        image: PathBuf,
    },
}

fn jitter_source(seed: Option<u64>) -> Box<dyn JitterSource> {
    match seed {
        Some(seed) => Box::new(RandomJitter::seeded(seed)),
        None => Box::new(thread_jitter()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { image, seed, compact } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("cannot read {}", image.display()))?;
            let mut jitter = jitter_source(seed);
            let report =
                facelore_core::analyze_bytes(&bytes, Local::now().date_naive(), jitter.as_mut());
            tracing::debug!(mbti = %report.personality.mbti, "report generated");
            let json = if compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{json}");
        }
        Commands::Features { image } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("cannot read {}", image.display()))?;
            let features = facelore_core::extractor::extract_bytes(&bytes);
            println!("{}", serde_json::to_string_pretty(&features)?);
        }
    }

    Ok(())
}
