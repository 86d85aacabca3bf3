pub mod config;
pub mod summarize;
pub mod youtube;

/// A single captioned segment
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Complete transcript for a video
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Flatten segment texts into one string, in provider order, joined with
    /// single spaces.
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extract the 11-character video ID from a YouTube URL.
///
/// Matches the first 11-character token preceded by `v=` or `/`. No further
/// validation is applied.
pub fn extract_video_id(url: &str) -> Option<String> {
    let re = regex::Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap();
    re.captures(url).map(|caps| caps[1].to_string())
}

/// Embedded-player URL for an extracted video ID
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1")
}
