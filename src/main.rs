use std::path::PathBuf;

use eyre::{Result, bail};
use log::info;

mod cli;

use cli::Cli;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytnotes.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytnotes")
        .join("logs")
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = <Cli as clap::Parser>::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytnotes::config::Config::load().unwrap_or_default();

    // Apply config defaults (CLI flags take priority)
    let lang = cli.lang.clone().or(config.default_lang).unwrap_or_else(|| "en".to_string());
    let model = cli
        .model
        .clone()
        .or(config.default_model)
        .unwrap_or_else(|| "gemini-2.5-flash".to_string());

    // Credential is read once at startup; its absence only matters if the
    // pipeline reaches generation
    let api_key = std::env::var("GOOGLE_API_KEY").ok();

    let client = reqwest::Client::new();

    let url = cli.url.trim();
    let video_id = ytnotes::extract_video_id(url).ok_or_else(|| {
        eyre::eyre!(
            "could not extract video ID from: {url}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID"
        )
    })?;

    if cli.verbose {
        eprintln!("Player: {}", ytnotes::embed_url(&video_id));
    }

    let transcript = match ytnotes::youtube::fetch_captions(&client, &video_id, &lang).await? {
        ytnotes::youtube::CaptionOutcome::Fetched(t) => t,
        ytnotes::youtube::CaptionOutcome::NoCaptions => bail!(ytnotes::youtube::NO_CAPTIONS_MESSAGE),
        ytnotes::youtube::CaptionOutcome::CaptionsDisabled => bail!(ytnotes::youtube::CAPTIONS_DISABLED_MESSAGE),
    };

    if cli.verbose {
        eprintln!(
            "Video: {} ({})\nLanguage: {}\nSegments: {}",
            transcript.title,
            transcript.video_id,
            transcript.language,
            transcript.segments.len(),
        );
    }

    let api_key = api_key.ok_or_else(|| {
        eyre::eyre!("GOOGLE_API_KEY environment variable not set (required for notes generation)")
    })?;

    let notes = ytnotes::summarize::generate_notes(
        &client,
        &api_key,
        &model,
        ytnotes::summarize::NOTES_PROMPT,
        &transcript.plain_text(),
    )
    .await?;

    let rendered = format!("## Detailed Notes:\n\n{notes}");
    if let Some(ref path) = cli.output {
        std::fs::write(path, &rendered)?;
        if cli.verbose {
            eprintln!("Notes written to: {}", path.display());
        }
    } else {
        println!("{rendered}");
    }

    Ok(())
}
