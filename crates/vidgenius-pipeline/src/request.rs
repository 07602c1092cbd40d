//! Generation-request assembly.
//!
//! Pure assembly: the fixed instruction, the formal response schema and the
//! normalized content are combined into a single wire request. No retries,
//! no validation of the instruction/schema pairing.

use vidgenius_gemini::{
    analysis_response_schema, Content, GenerateContentRequest, GenerationConfig, Part,
};
use vidgenius_models::{AnalysisRequest, ContentPayload};

/// Fixed system-level directive attached unmodified to every request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert video content strategist.
Process the provided video content (or transcript) and engagement context.

Perform these tasks:
1. If the input is a video, generate a clean transcript. If it's text, clean it (remove filler words, fix grammar).
2. Identify 3 engaging highlights (under 30s) suitable for Shorts/Reels. For each highlight, provide a viral title and a detailed visual prompt for an AI thumbnail generator.
3. Generate SEO metadata for Shorts, TikTok, Reels, FB.
4. Create SRT captions for the highlights (max 6 words per line).
5. Generate FFmpeg commands to cut 'input.mp4', crop to 9:16, and overlay captions.
6. Create a 7-day posting schedule.
7. Generate a brief analytics report based on the provided engagement context (or simulate a projection if context is generic).

Return ONLY the structured JSON matching the schema.";

/// Assemble the wire request for one normalized analysis request.
pub fn build_generation_request(request: &AnalysisRequest) -> GenerateContentRequest {
    let mut parts = match &request.payload {
        ContentPayload::VideoBinary {
            media_type,
            data_base64,
        } => vec![
            Part::inline_data(media_type.clone(), data_base64.clone()),
            Part::text("Analyze this video."),
        ],
        ContentPayload::Text { text } => vec![Part::text(format!(
            "Raw Transcript or Content URL: \"\"\"{}\"\"\"",
            text
        ))],
    };

    parts.push(Part::text(format!(
        "Engagement Context: \"\"\"{}\"\"\"",
        request.engagement_context
    )));

    GenerateContentRequest {
        system_instruction: Content::from_parts(vec![Part::text(SYSTEM_INSTRUCTION)]),
        contents: vec![Content::from_parts(parts)],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: analysis_response_schema(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_request(text: &str) -> AnalysisRequest {
        AnalysisRequest {
            payload: ContentPayload::Text {
                text: text.to_string(),
            },
            engagement_context: "Views: 1000".to_string(),
        }
    }

    #[test]
    fn test_text_request_parts() {
        let wire = build_generation_request(&text_request("hello world"));
        assert_eq!(wire.contents.len(), 1);

        let parts = &wire.contents[0].parts;
        assert_eq!(parts.len(), 2);
        match &parts[0] {
            Part::Text { text } => {
                assert!(text.contains("Raw Transcript or Content URL"));
                assert!(text.contains("hello world"));
            }
            other => panic!("expected text part, got {:?}", other),
        }
        match &parts[1] {
            Part::Text { text } => assert!(text.contains("Engagement Context")),
            other => panic!("expected text part, got {:?}", other),
        }
    }

    #[test]
    fn test_video_request_parts() {
        let request = AnalysisRequest {
            payload: ContentPayload::video(b"fake video bytes", "video/mp4"),
            engagement_context: "Views: 1000".to_string(),
        };
        let wire = build_generation_request(&request);

        let parts = &wire.contents[0].parts;
        assert_eq!(parts.len(), 3);
        match &parts[0] {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "video/mp4");
                assert!(!inline_data.data.is_empty());
            }
            other => panic!("expected inline data part, got {:?}", other),
        }
        match &parts[1] {
            Part::Text { text } => assert_eq!(text, "Analyze this video."),
            other => panic!("expected text part, got {:?}", other),
        }
    }

    #[test]
    fn test_schema_and_mime_type_attached() {
        let wire = build_generation_request(&text_request("t"));
        assert_eq!(wire.generation_config.response_mime_type, "application/json");
        assert_eq!(
            wire.generation_config.response_schema,
            analysis_response_schema()
        );
        assert_eq!(wire.system_instruction.parts.len(), 1);
    }
}
