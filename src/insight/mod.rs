//! Boundary to the external text-generation service.
//!
//! Every call resolves to a string. Missing configuration and transport
//! failures are turned into fixed fallback messages here and never reach
//! the caller as errors.

mod gemini;
mod pending;


use std::sync::Arc;

use crate::config::InsightConfig;

pub use gemini::{GeminiProvider, InsightError};
pub use pending::PendingInsight;

pub const MISSING_KEY_INSIGHT: &str = "AI Service Unavailable (Missing Key)";
pub const MISSING_KEY_DRAFT: &str = "AI Service Unavailable";
pub const FAILED_INSIGHT: &str = "Failed to generate insight.";
pub const FAILED_DRAFT: &str = "Failed to draft email.";
pub const EMPTY_INSIGHT: &str = "No response generated.";
pub const EMPTY_DRAFT: &str = "No draft generated.";

/// System instruction sent with insight prompts
pub const CRM_ASSISTANT_INSTRUCTION: &str = "You are a helpful CRM assistant. Keep answers concise, professional, and actionable. Focus on sales insights.";

/// A text-generation backend. Implementations absorb their own failures.
pub trait InsightProvider: Send + Sync {
    /// Free-text advice for a free-text prompt.
    fn generate_insight(&self, prompt: &str) -> String;

    /// A short follow-up email for a lead.
    fn generate_email_draft(&self, lead_name: &str, context: &str) -> String;
}

/// Prompt used for email drafts
pub fn email_draft_prompt(lead_name: &str, context: &str) -> String {
    format!("Draft a professional, short sales follow-up email for {lead_name}. Context: {context}")
}

/// Provider that answers every call with a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnavailableProvider {
    insight: &'static str,
    draft: &'static str,
}

impl UnavailableProvider {
    /// No API key configured
    pub fn missing_key() -> Self {
        Self {
            insight: MISSING_KEY_INSIGHT,
            draft: MISSING_KEY_DRAFT,
        }
    }

    /// Client could not be constructed
    pub fn failed() -> Self {
        Self {
            insight: FAILED_INSIGHT,
            draft: FAILED_DRAFT,
        }
    }
}

impl InsightProvider for UnavailableProvider {
    fn generate_insight(&self, _prompt: &str) -> String {
        self.insight.to_string()
    }

    fn generate_email_draft(&self, _lead_name: &str, _context: &str) -> String {
        self.draft.to_string()
    }
}

/// Build the provider described by `config`.
pub fn provider_from_config(config: &InsightConfig) -> Arc<dyn InsightProvider> {
    let Some(api_key) = config.resolve_api_key() else {
        tracing::warn!(
            env = %config.api_key_env,
            "insight API key is not set; insights are unavailable"
        );
        return Arc::new(UnavailableProvider::missing_key());
    };

    match GeminiProvider::new(api_key, config) {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            tracing::error!(error = %e, "failed to create insight client");
            Arc::new(UnavailableProvider::failed())
        }
    }
}
