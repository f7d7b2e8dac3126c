//! Classifier implementation over the Gemini API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use capsule_protocols::classifier::{ClassificationResult, Classifier};
use capsule_protocols::error::ClassifierError;
use capsule_protocols::intent::Intent;

use crate::client::GeminiClient;
use crate::types::*;

const CLASSIFY_INSTRUCTION: &str = "You are an expert context compressor and conversation \
classifier. Your task is to analyze the text provided below. Extract the important points and \
summarize them concisely in 300 words. Additionally, classify the main intent of the user based \
on the conversation.\n\n\
Return a single JSON object containing two fields:\n\
1. 'summary': A concise, high-quality, 300-word summary capturing the user's goal, steps taken, \
current status and important points.\n\
2. 'intent': A classification of the main user objective from the following list: \
[CODING_AND_DEBUGGING, RESEARCH_AND_ANALYSIS, CREATIVE_WRITING, PLANNING_AND_STRATEGY, \
GENERAL_KNOWLEDGE].";

/// Shape the model is asked to return.
#[derive(Debug, Deserialize)]
struct RawClassification {
    summary: Option<String>,
    intent: Option<String>,
}

/// Conversation classifier backed by Gemini structured output.
pub struct GeminiClassifier {
    client: GeminiClient,
    model: String,
}

impl GeminiClassifier {
    /// Create a new classifier for the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: model.into(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(base_url);
        self
    }

    fn build_request(&self, context: &str) -> GenerateContentRequest {
        let prompt = format!("{CLASSIFY_INSTRUCTION}\n\nCONVERSATION TEXT:\n---\n{context}\n---");

        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.1),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema()),
            }),
        }
    }

    fn parse_response(
        &self,
        response: GenerateContentResponse,
    ) -> Result<ClassificationResult, ClassifierError> {
        let raw = response
            .first_text()
            .ok_or_else(|| {
                ClassifierError::MalformedResponse("response contained no candidates".to_string())
            })?
            .trim();

        let parsed: RawClassification = serde_json::from_str(raw)
            .map_err(|e| ClassifierError::MalformedResponse(format!("invalid JSON payload: {e}")))?;

        let summary = match parsed.summary {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(ClassifierError::MissingSummary),
        };

        // A missing intent degrades to Unknown; an intent outside the schema's
        // enum means the model ignored the schema entirely.
        let intent = match parsed.intent {
            None => Intent::Unknown,
            Some(name) => Intent::parse_wire(&name).ok_or_else(|| {
                ClassifierError::MalformedResponse(format!("unrecognized intent: {name}"))
            })?,
        };

        Ok(ClassificationResult { summary, intent })
    }
}

fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "The concise summary."
            },
            "intent": {
                "type": "string",
                "description": "The primary intent, chosen from the defined list.",
                "enum": [
                    "CODING_AND_DEBUGGING",
                    "RESEARCH_AND_ANALYSIS",
                    "CREATIVE_WRITING",
                    "PLANNING_AND_STRATEGY",
                    "GENERAL_KNOWLEDGE"
                ]
            }
        },
        "required": ["summary", "intent"]
    })
}

#[async_trait]
impl Classifier for GeminiClassifier {
    async fn classify(&self, context: &str) -> Result<ClassificationResult, ClassifierError> {
        debug!("Gemini classify: model={} context_len={}", self.model, context.len());

        let request = self.build_request(context);
        let response = self.client.generate_content(&self.model, request).await?;
        self.parse_response(response)
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
