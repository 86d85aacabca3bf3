use eyre::{Result, bail};
use log::debug;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Instructional template prepended to every transcript before submission.
/// Static; never mutated at runtime.
pub const NOTES_PROMPT: &str = r#"Title of the Video: [Insert Video Title Here]

Video Length: [Insert Video Length Here]

Channel Name: [Insert Channel Name Here]

Summary Guidelines:

1. **Main Points**: Identify and summarize the primary topics and key arguments discussed in the video. Ensure all significant details are included.

2. **Highlights**: Capture noteworthy moments, surprising facts, or important quotes that stand out in the video.

3. **Structure**: Break down the video into sections such as introduction, main content, and conclusion, providing a clear outline.

4. **Speaker Information**: Mention the speaker(s) involved, including their names and relevant credentials or background information.

5. **Visuals and Graphics**: Describe any critical visuals, graphics, or on-screen text that enhance the understanding of the content.

6. **Examples and Anecdotes**: Include any examples, case studies, or personal anecdotes shared to illustrate key points.

7. **Conclusion and Takeaways**: Summarize the closing remarks and list any actionable takeaways or advice provided.

**Example Summary:**

**Title of the Video:** "The Science of Sleep: How to Improve Your Sleep Quality"

**Video Length:** 15:32

**Channel Name:** Health Insights

**Summary:**

**Main Points:**
- Importance of sleep for health and well-being.
- Stages of sleep: REM and non-REM.
- Factors affecting sleep quality: diet, exercise, environment.
- Tips for better sleep: consistent schedule, restful environment.

**Highlights:**
- Quote: "Sleep is as crucial as nutrition and exercise" - Dr. Smith.
- Fact: "Adults need 7-9 hours of sleep per night."

**Structure:**
- Introduction: Overview of sleep's importance.
- Main Content: Sleep stages, factors affecting sleep.
- Conclusion: Tips for improving sleep.

**Speaker Information:**
- Dr. Jane Smith, a sleep specialist with 20 years of experience.

**Visuals and Graphics:**
- Diagrams of the sleep cycle.
- Charts on the effects of poor sleep.

**Examples and Anecdotes:**
- Dr. Smith's anecdote about a patient who improved sleep quality by changing bedtime routine.

**Conclusion and Takeaways:**
- Prioritize sleep for better health.
- Key takeaway: Consistent sleep schedule and restful environment.

**Instructions:**
1. Watch the video thoroughly.
2. Note the main points, highlights, structure, speakers, visuals, examples, and conclusion.
3. Write a concise summary using the provided format.
4. Ensure the summary is clear, informative, and captures the video's essence."#;

/// Assemble the model input: the template immediately followed by the
/// transcript, no separator.
pub fn build_prompt(template: &str, transcript: &str) -> String {
    format!("{template}{transcript}")
}

/// Generate detailed notes for a transcript via the Gemini API
pub async fn generate_notes(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    template: &str,
    transcript: &str,
) -> Result<String> {
    debug!("Generating notes via Gemini API with model {model}");

    let body = serde_json::json!({
        "contents": [
            {
                "parts": [
                    {
                        "text": build_prompt(template, transcript)
                    }
                ]
            }
        ]
    });

    let url = format!("{GEMINI_ENDPOINT}/models/{model}:generateContent?key={api_key}");

    let resp = client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("Gemini API returned {status}: {body}");
    }

    let json: serde_json::Value = resp.json().await?;
    extract_gemini_text(&json)
}

fn extract_gemini_text(json: &serde_json::Value) -> Result<String> {
    if let Some(parts) = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
    {
        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    bail!("unexpected Gemini API response format");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_concatenates_without_separator() {
        assert_eq!(build_prompt("abc", "def"), "abcdef");
    }

    #[test]
    fn test_build_prompt_empty_transcript_is_template() {
        assert_eq!(build_prompt(NOTES_PROMPT, ""), NOTES_PROMPT);
    }

    #[test]
    fn test_extract_gemini_text() {
        let json = serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            {
                                "text": "Here are the notes."
                            }
                        ],
                        "role": "model"
                    }
                }
            ]
        });
        assert_eq!(extract_gemini_text(&json).unwrap(), "Here are the notes.");
    }

    #[test]
    fn test_extract_gemini_text_joins_parts() {
        let json = serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            {"text": "Part one. "},
                            {"text": "Part two."}
                        ]
                    }
                }
            ]
        });
        assert_eq!(extract_gemini_text(&json).unwrap(), "Part one. Part two.");
    }

    #[test]
    fn test_extract_gemini_text_no_candidates() {
        let json = serde_json::json!({"candidates": []});
        assert!(extract_gemini_text(&json).is_err());
    }

    #[test]
    fn test_extract_gemini_text_empty_parts() {
        let json = serde_json::json!({
            "candidates": [{"content": {"parts": []}}]
        });
        assert!(extract_gemini_text(&json).is_err());
    }
}
