//! Decode raw response text into a typed analysis result.

use vidgenius_models::AnalysisResult;

use crate::error::GeminiResult;

/// Parse the raw candidate text into an [`AnalysisResult`].
///
/// Markdown code fences are stripped first (models occasionally wrap JSON
/// output despite the mime-type constraint). A syntax or missing-field
/// error is terminal for the invocation: nothing is repaired or partially
/// accepted, and no defaults are substituted.
pub fn decode_analysis(raw: &str) -> GeminiResult<AnalysisResult> {
    let text = strip_code_fences(raw.trim());
    Ok(serde_json::from_str(text.trim())?)
}

fn strip_code_fences(text: &str) -> &str {
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeminiError;

    fn sample_json() -> String {
        serde_json::json!({
            "cleanedTranscript": "Welcome to the channel. Today we cover three ideas.",
            "highlights": [{
                "timestamp": "00:15 - 00:45",
                "snippet": "The first idea changed everything for me.",
                "reason": "Emotional hook",
                "title": "The Idea That Changed Everything",
                "visualPrompt": "Dramatic portrait of a creator at a desk, neon rim light"
            }],
            "seo": {
                "youtubeShorts": {"title": "t", "description": "d", "tags": ["shorts"]},
                "tikTok": {"title": "t", "description": "d", "tags": ["fyp"]},
                "instagramReels": {"title": "t", "description": "d", "tags": ["reels"]},
                "facebook": {"title": "t", "description": "d", "tags": ["video"]}
            },
            "captions": "1\n00:00:15,000 --> 00:00:17,000\nThe first idea",
            "ffmpegCommands": "ffmpeg -i input.mp4 -ss 00:15 -to 00:45 -vf crop=ih*9/16:ih clip_1.mp4",
            "schedule": [{
                "day": "Day 1",
                "platform": "TikTok",
                "time": "18:00",
                "contentTitle": "The Idea That Changed Everything"
            }],
            "analyticsReport": {
                "topClip": "The Idea That Changed Everything",
                "bestHashtags": ["#creator", "#ideas"],
                "improvements": ["Hook viewers within the first 3 seconds"]
            }
        })
        .to_string()
    }

    #[test]
    fn test_decode_valid_response() {
        let result = decode_analysis(&sample_json()).unwrap();
        assert_eq!(result.highlights.len(), 1);
        assert_eq!(result.highlights[0].timestamp, "00:15 - 00:45");
        assert_eq!(result.schedule[0].content_title, "The Idea That Changed Everything");
    }

    #[test]
    fn test_decode_strips_code_fences() {
        let fenced = format!("```json\n{}\n```", sample_json());
        let result = decode_analysis(&fenced).unwrap();
        assert_eq!(result.highlights.len(), 1);
    }

    #[test]
    fn test_decode_failure_on_invalid_syntax() {
        let err = decode_analysis("this is not json").unwrap_err();
        assert!(matches!(err, GeminiError::Decode(_)));
        assert!(err.is_decode_failure());
    }

    #[test]
    fn test_decode_failure_on_missing_section() {
        // Valid JSON, but the seo section is gone: no partial result.
        let mut value: serde_json::Value = serde_json::from_str(&sample_json()).unwrap();
        value.as_object_mut().unwrap().remove("seo");
        let err = decode_analysis(&value.to_string()).unwrap_err();
        assert!(matches!(err, GeminiError::Decode(_)));
    }
}
