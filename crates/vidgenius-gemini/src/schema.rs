//! Response schema for the content analysis call.
//!
//! Gemini's structured output takes an OpenAPI-style schema in the request;
//! the service is then constrained to return only that shape. Field names,
//! types and required-ness here must stay in lockstep with the models in
//! `vidgenius-models`.

use serde_json::{json, Value};

fn social_metadata_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["title", "description", "tags"]
    })
}

/// The full response schema for one analysis request.
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "cleanedTranscript": {
                "type": "STRING",
                "description": "The transcript with filler words removed, grammar corrected, and formatted into paragraphs. If video input is provided, transcribe the main speech."
            },
            "highlights": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "timestamp": {
                            "type": "STRING",
                            "description": "Start and end time, e.g., '00:15 - 00:45'"
                        },
                        "snippet": {
                            "type": "STRING",
                            "description": "The text content of the highlight"
                        },
                        "reason": {
                            "type": "STRING",
                            "description": "Why this was selected (emotional hook, quote, etc.)"
                        },
                        "title": {
                            "type": "STRING",
                            "description": "A catchy, viral title for this short clip (max 50 chars)"
                        },
                        "visualPrompt": {
                            "type": "STRING",
                            "description": "A creative, detailed prompt for an AI image generator to create a high-quality thumbnail/cover for this specific clip."
                        }
                    },
                    "required": ["timestamp", "snippet", "reason", "title", "visualPrompt"]
                }
            },
            "seo": {
                "type": "OBJECT",
                "properties": {
                    "youtubeShorts": social_metadata_schema(),
                    "tikTok": social_metadata_schema(),
                    "instagramReels": social_metadata_schema(),
                    "facebook": social_metadata_schema()
                },
                "required": ["youtubeShorts", "tikTok", "instagramReels", "facebook"]
            },
            "captions": {
                "type": "STRING",
                "description": "The full SRT format content string for the highlights."
            },
            "ffmpegCommands": {
                "type": "STRING",
                "description": "The raw FFmpeg command lines to cut, resize, and subtitle the clips."
            },
            "schedule": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": {
                            "type": "STRING",
                            "description": "Day of the week (Day 1 - Day 7)"
                        },
                        "platform": { "type": "STRING" },
                        "time": {
                            "type": "STRING",
                            "description": "Best local posting time"
                        },
                        "contentTitle": { "type": "STRING" }
                    },
                    "required": ["day", "platform", "time", "contentTitle"]
                }
            },
            "analyticsReport": {
                "type": "OBJECT",
                "properties": {
                    "topClip": { "type": "STRING" },
                    "bestHashtags": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "improvements": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["topClip", "bestHashtags", "improvements"]
            }
        },
        "required": [
            "cleanedTranscript",
            "highlights",
            "seo",
            "captions",
            "ffmpegCommands",
            "schedule",
            "analyticsReport"
        ]
    })
}
