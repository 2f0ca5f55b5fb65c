// Storyboard Core — Entry Point

use storyboard_core::config::GenerationConfig;
use storyboard_core::inference::huggingface;
use storyboard_core::pipeline::StoryboardPipeline;
use storyboard_core::server;
use storyboard_core::state::AppState;
use storyboard_core::storyboard::DEFAULT_STYLE;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "storyboard-core")]
#[command(about = "Script-to-storyboard generation service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the storyboard API server
    Serve {
        /// Port to run the server on
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },

    /// Generate a storyboard for one script and write it to disk
    Analyze {
        /// Script text
        #[arg(short, long)]
        text: Option<String>,

        /// Path to a script file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Visual style directive
        #[arg(short, long, default_value = DEFAULT_STYLE)]
        style: String,

        /// Output path for the storyboard JSON
        #[arg(short, long, default_value = "storyboard.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = Cli::parse();

    // Capabilities are initialized exactly once; a failed initialization
    // leaves the process in degraded mode for its whole lifetime.
    let config = GenerationConfig::from_env();
    let (classifier, synthesizer) = huggingface::build_capabilities(&config);
    let pipeline = StoryboardPipeline::new(classifier, synthesizer);

    match args.command {
        Commands::Serve { port } => {
            let state = Arc::new(AppState::new(pipeline));
            server::start_server(port, state).await?;
        }
        Commands::Analyze {
            text,
            file,
            style,
            output,
        } => {
            let script = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read script file {:?}", path))?,
                (None, None) => anyhow::bail!("Either --text or --file must be provided"),
            };

            let storyboard = pipeline.build(&script, &style).await?;
            info!("[CLI] generated {} storyboard entries", storyboard.len());

            let body = serde_json::to_string_pretty(&serde_json::json!({
                "storyboard": storyboard
            }))?;
            tokio::fs::write(&output, body)
                .await
                .with_context(|| format!("Failed to write storyboard to {:?}", output))?;
            info!("[CLI] storyboard saved to {:?}", output);
        }
    }

    Ok(())
}
