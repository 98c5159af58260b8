//! Names shared between the wire format, the matcher and the binary

/// Tool name the host uses for shell commands
pub const BASH_TOOL: &str = "Bash";

/// Event name echoed back in `hookSpecificOutput`
pub const HOOK_EVENT: &str = "PermissionRequest";

/// Bare command name agents type to request sandboxed execution
pub const SANDBOX_COMMAND: &str = "sandbox-run";

/// Environment variable carrying the trusted plugin root
pub const PLUGIN_ROOT_ENV: &str = "CLAUDE_PLUGIN_ROOT";

/// Environment variable naming the log file (logging is off without it)
pub const LOG_FILE_ENV: &str = "SPECTATOR_HOOK_LOG";

/// Environment variable holding the `EnvFilter` directive for the log file
pub const LOG_LEVEL_ENV: &str = "SPECTATOR_HOOK_LOG_LEVEL";
