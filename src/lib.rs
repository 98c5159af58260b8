//! Spectator hook - keeps `sandbox-run` pipelines inside the sandbox
//!
//! The host sends a permission request before running a `Bash` command.
//! When the command invokes `sandbox-run`, the hook approves it with the
//! arguments re-quoted into a single `bash -c` word, so shell metacharacters
//! are interpreted by the shell running inside the sandbox. Anything else
//! gets no opinion and falls through to the host's normal permission flow.
//!
//! # Example
//!
//! ```
//! use spectator_hook::{hook, RewriteDecision, RewriterConfig};
//!
//! let config = RewriterConfig::new(Some("/plugin"));
//! let input = r#"{"tool_name":"Bash","tool_input":{"command":"sandbox-run cat f | wc -l"}}"#;
//!
//! assert_eq!(
//!     hook::evaluate(input, &config),
//!     RewriteDecision::allow("/plugin/bin/sandbox-run bash -c 'cat f | wc -l'"),
//! );
//! assert_eq!(hook::evaluate("not json", &config), RewriteDecision::NoOpinion);
//! ```

mod config;
mod decision;
pub mod hook;
pub mod logging;
pub mod names;
mod quote;
mod request;
mod rewrite;

// Re-export the public API
pub use config::{Config, ConfigError, LogConfig, RewriterConfig};
pub use decision::{HookOutput, RewriteDecision};
pub use quote::quote;
pub use request::{read_request, PermissionRequest, RequestError, ToolInput, MAX_REQUEST_BYTES};
pub use rewrite::{Rewriter, SandboxInvocation};
