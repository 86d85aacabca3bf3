use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ytnotes", about = "YouTube transcript to detailed notes converter", version)]
pub struct Cli {
    /// YouTube video URL
    pub url: String,

    /// Preferred caption language (default: en)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Gemini model for notes generation (default: gemini-2.5-flash)
    #[arg(long)]
    pub model: Option<String>,

    /// Write notes to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show video metadata and player link
    #[arg(short, long)]
    pub verbose: bool,
}
