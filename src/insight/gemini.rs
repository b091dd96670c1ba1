//! Gemini `generateContent` client.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::{
    email_draft_prompt, InsightProvider, CRM_ASSISTANT_INSTRUCTION, EMPTY_DRAFT, EMPTY_INSIGHT,
    FAILED_DRAFT, FAILED_INSIGHT,
};
use crate::config::InsightConfig;

/// Failures inside the provider. Never returned from `InsightProvider` calls.
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {code} - {reason}")]
    Status { code: u16, reason: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub(crate) fn new(prompt: &'a str, system_instruction: Option<&'a str>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: system_instruction.map(|text| Content {
                parts: vec![Part { text }],
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Text of the first candidate, or `None` when the model returned nothing.
pub(crate) fn decode_response(body: &str) -> Result<Option<String>, InsightError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    url: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, config: &InsightConfig) -> Result<Self, InsightError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("leadboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key,
            url: format!(
                "{}/models/{}:generateContent",
                config.endpoint.trim_end_matches('/'),
                config.model
            ),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<Option<String>, InsightError> {
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateRequest::new(prompt, system_instruction))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            });
        }

        let body = response.text()?;
        decode_response(&body)
    }
}

impl InsightProvider for GeminiProvider {
    fn generate_insight(&self, prompt: &str) -> String {
        match self.generate(prompt, Some(CRM_ASSISTANT_INSTRUCTION)) {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_INSIGHT.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "Gemini API error");
                FAILED_INSIGHT.to_string()
            }
        }
    }

    fn generate_email_draft(&self, lead_name: &str, context: &str) -> String {
        let prompt = email_draft_prompt(lead_name, context);
        match self.generate(&prompt, None) {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_DRAFT.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "Gemini API error");
                FAILED_DRAFT.to_string()
            }
        }
    }
}
