//! VidGenius CLI: run one content analysis from the command line.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vidgenius_gemini::GeminiClient;
use vidgenius_models::ContentSource;
use vidgenius_pipeline::cut::cut_commands_for;
use vidgenius_pipeline::normalize::{read_transcript_file, read_video_file};
use vidgenius_pipeline::{AnalysisPipeline, PipelineConfig, PipelineResult};

const USAGE: &str = "Usage: vidgenius <transcript FILE | video FILE | url LINK> [ENGAGEMENT]";

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("vidgenius=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mode, value, engagement) = match args.as_slice() {
        [mode, value] => (mode.as_str(), value.as_str(), ""),
        [mode, value, engagement] => (mode.as_str(), value.as_str(), engagement.as_str()),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let config = PipelineConfig::from_env();

    let client = match GeminiClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Gemini client: {}", e);
            std::process::exit(1);
        }
    };

    let pipeline = AnalysisPipeline::new(client, config.clone());

    match run(&pipeline, &config, mode, value, engagement).await {
        Ok(()) => info!("Done"),
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}

async fn run(
    pipeline: &AnalysisPipeline<GeminiClient>,
    config: &PipelineConfig,
    mode: &str,
    value: &str,
    engagement: &str,
) -> PipelineResult<()> {
    let source = match mode {
        "transcript" => ContentSource::Transcript {
            text: read_transcript_file(value).await?,
        },
        "video" => read_video_file(config, value).await?,
        "url" => ContentSource::ExternalReference {
            url: value.to_string(),
        },
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let result = pipeline.run(source, engagement).await?;

    println!("{}", serde_json::to_string_pretty(&result).expect("result serializes"));

    let commands = cut_commands_for(&result.highlights);
    if !commands.is_empty() {
        println!();
        println!("# Derived cut commands");
        for command in commands {
            println!("{}", command);
        }
    }

    Ok(())
}
