//! End-to-end hook handling: request text in, optional response line out

use anyhow::{Context, Result};

use crate::config::RewriterConfig;
use crate::decision::RewriteDecision;
use crate::request::PermissionRequest;
use crate::rewrite::Rewriter;

/// Parse `input` and decide. Unparsable input never gets an opinion.
pub fn evaluate(input: &str, config: &RewriterConfig) -> RewriteDecision {
    match PermissionRequest::parse(input) {
        Ok(request) => Rewriter::new(config).decide(&request),
        Err(e) => {
            tracing::debug!("Deferring on unparsable request: {}", e);
            RewriteDecision::NoOpinion
        }
    }
}

/// The JSON line to write back, or `None` when the hook stays silent
pub fn respond(input: &str, config: &RewriterConfig) -> Result<Option<String>> {
    let Some(output) = evaluate(input, config).to_output() else {
        return Ok(None);
    };
    let line = serde_json::to_string(&output).context("Failed to serialize hook output")?;
    Ok(Some(line))
}
