//! Rewrite decision and the hook output it serializes to

use serde::Serialize;

use crate::names;

/// What the hook tells the host about one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteDecision {
    /// Write nothing; the host falls through to its normal permission flow
    NoOpinion,
    /// Approve, running `updated_command` in place of the original
    Allow { updated_command: String },
}

impl RewriteDecision {
    pub fn allow(updated_command: impl Into<String>) -> Self {
        Self::Allow {
            updated_command: updated_command.into(),
        }
    }

    /// The payload to print, or `None` when nothing should be written
    pub fn to_output(&self) -> Option<HookOutput> {
        match self {
            Self::NoOpinion => None,
            Self::Allow { updated_command } => Some(HookOutput::allow(updated_command)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub decision: PermissionDecision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDecision {
    pub behavior: Behavior,
    pub updated_input: UpdatedInput,
}

/// Only `allow` is ever emitted; this hook never denies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    Allow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatedInput {
    pub command: String,
}

impl HookOutput {
    pub fn allow(command: &str) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: names::HOOK_EVENT,
                decision: PermissionDecision {
                    behavior: Behavior::Allow,
                    updated_input: UpdatedInput {
                        command: command.to_string(),
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_opinion_has_no_output() {
        assert_eq!(RewriteDecision::NoOpinion.to_output(), None);
    }

    #[test]
    fn test_allow_wire_format() {
        let output = RewriteDecision::allow("/plugin/bin/sandbox-run")
            .to_output()
            .unwrap();
        let json = serde_json::to_string(&output).unwrap();
        insta::assert_snapshot!(json, @r#"{"hookSpecificOutput":{"hookEventName":"PermissionRequest","decision":{"behavior":"allow","updatedInput":{"command":"/plugin/bin/sandbox-run"}}}}"#);
    }

    #[test]
    fn test_allow_escapes_command() {
        let output = HookOutput::allow("/p/bin/sandbox-run bash -c 'echo \"hi\"'");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            value["hookSpecificOutput"]["decision"]["updatedInput"]["command"],
            "/p/bin/sandbox-run bash -c 'echo \"hi\"'"
        );
    }
}
