//! Terminal front-end for the monetization audit.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use ytaudit_app::render::{render_preview, render_state};
use ytaudit_app::{logging, AppConfig, AuditController};
use ytaudit_gemini::GeminiClient;
use ytaudit_models::extract_youtube_id;

#[derive(Parser)]
#[command(name = "ytaudit", version, about = "YouTube monetization audit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a video link or a free-text description
    #[command(alias = "a")]
    Audit {
        /// YouTube URL or description of the content
        input: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Also generate a promotional comment
        #[arg(long)]
        comment: bool,
    },

    /// Generate a promotional comment for a video
    #[command(alias = "c")]
    Comment {
        /// YouTube URL or description of the content
        input: String,
    },

    /// Show the video ID and thumbnail without calling the API
    Preview {
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            input,
            json,
            comment,
        } => audit(input, json, comment).await,
        Commands::Comment { input } => comment(input).await,
        Commands::Preview { input } => {
            preview(&input);
            Ok(())
        }
    }
}

fn controller() -> Result<AuditController<GeminiClient>> {
    let client = GeminiClient::from_env().context("failed to configure Gemini client")?;
    let config = AppConfig::from_env();
    info!(model = %client.model(), policy = %config.response_policy, "Starting ytaudit");
    Ok(AuditController::new(client, config))
}

async fn audit(input: String, json: bool, with_comment: bool) -> Result<()> {
    let controller = controller()?;
    controller.set_url(input);

    if with_comment {
        tokio::join!(controller.start_audit(), controller.start_comment());
    } else {
        controller.start_audit().await;
    }

    let state = controller.state();
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", render_state(&state));
    }

    exit_on_error(state.error.is_some());
    Ok(())
}

async fn comment(input: String) -> Result<()> {
    let controller = controller()?;
    controller.set_url(input);
    controller.start_comment().await;

    let state = controller.state();
    println!("{}", render_state(&state));

    exit_on_error(state.error.is_some());
    Ok(())
}

fn preview(input: &str) {
    match extract_youtube_id(input) {
        Some(id) => println!("Video ID: {id}"),
        None => println!("Video ID: -"),
    }
    println!("{}", render_preview(input));
}

fn exit_on_error(has_error: bool) {
    if has_error {
        std::process::exit(1);
    }
}
