//! One-shot assistant commands.
//!
//! Commands:
//! - `leadboard insight <text...>` - ask for sales advice
//! - `leadboard draft <name> <context...>` - draft a follow-up email

use anyhow::Result;

use crate::config::Config;
use crate::insight::provider_from_config;

pub fn ask(config: &Config, prompt: Vec<String>) -> Result<()> {
    let provider = provider_from_config(&config.insight);
    println!("{}", provider.generate_insight(&prompt.join(" ")));
    Ok(())
}

pub fn draft(config: &Config, lead_name: String, context: Vec<String>) -> Result<()> {
    let provider = provider_from_config(&config.insight);
    println!(
        "{}",
        provider.generate_email_draft(&lead_name, &context.join(" "))
    );
    Ok(())
}
