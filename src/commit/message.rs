// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message inspection helpers.
//!
//! Only the subject line is ever looked at for markers and format. A revert
//! wrapper (`Revert "<original subject>"`) is transparent to every check.

use lazy_static::lazy_static;
use regex::Regex;

/// Commit types accepted by the format check.
pub const ALLOWED_COMMIT_TYPES: &[&str] = &[
    "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "style", "test",
];

const REVERT_PREFIX: &str = "Revert \"";
const REVERT_SUFFIX: &str = "\"";

lazy_static! {
    /// Format regex for the default set of commit types.
    static ref DEFAULT_FORMAT: MessageFormat = MessageFormat::new(ALLOWED_COMMIT_TYPES).unwrap();
}

/// First line of a commit message.
pub fn subject(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

/// Remove a `Revert "..."` wrapper.
///
/// Prefix and suffix are stripped independently, so a text carrying only one
/// of them still loses it.
pub fn strip_revert(text: &str) -> &str {
    let text = text.strip_prefix(REVERT_PREFIX).unwrap_or(text);
    text.strip_suffix(REVERT_SUFFIX).unwrap_or(text)
}

/// Subject line with the revert wrapper removed.
pub fn normalized_subject(message: &str) -> &str {
    strip_revert(subject(message))
}

/// Message used when comparing commits for duplicates.
pub fn normalized_message(message: &str) -> &str {
    strip_revert(message.trim_end())
}

/// First whitespace-delimited token of the normalized subject.
pub fn marker(message: &str) -> Option<&str> {
    normalized_subject(message).split_whitespace().next()
}

/// Compiled `type(scope): description` matcher.
#[derive(Debug, Clone)]
pub struct MessageFormat {
    pattern: Regex,
}

impl MessageFormat {
    /// Build a matcher for the given commit types.
    ///
    /// Types are escaped before being joined into the pattern.
    pub fn new<S: AsRef<str>>(types: &[S]) -> Result<Self, regex::Error> {
        let alternation = types
            .iter()
            .map(|t| regex::escape(t.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"^(?:{})\([a-z0-9-]+\): .+", alternation))?;
        Ok(Self { pattern })
    }

    /// Check the subject of a message, ignoring a revert wrapper.
    pub fn is_valid(&self, message: &str) -> bool {
        self.pattern.is_match(normalized_subject(message))
    }
}

impl Default for MessageFormat {
    fn default() -> Self {
        DEFAULT_FORMAT.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_takes_first_line() {
        assert_eq!(subject("feat(a): b\n\nbody"), "feat(a): b");
        assert_eq!(subject(""), "");
    }

    #[test]
    fn test_strip_revert() {
        assert_eq!(strip_revert("Revert \"feat(x): y\""), "feat(x): y");
        assert_eq!(strip_revert("feat(x): y"), "feat(x): y");
        assert_eq!(strip_revert("Revert \"feat(x): y"), "feat(x): y");
    }

    #[test]
    fn test_marker() {
        assert_eq!(marker("fixup! feat(a): b"), Some("fixup!"));
        assert_eq!(marker("squash! feat(a): b"), Some("squash!"));
        assert_eq!(marker("Revert \"fixup! feat(a): b\""), Some("fixup!"));
        assert_eq!(marker("   "), None);
        assert_eq!(marker(""), None);
    }

    #[test]
    fn test_marker_only_reads_subject() {
        assert_eq!(marker("feat(a): b\n\nfixup! later"), Some("feat(a):"));
    }

    #[test]
    fn test_normalized_message() {
        assert_eq!(normalized_message("Revert \"fix(a): b\"\n"), "fix(a): b");
        assert_eq!(normalized_message("fix(a): b\n\nbody\n"), "fix(a): b\n\nbody");
    }

    #[test]
    fn test_default_format_accepts_all_types() {
        let format = MessageFormat::default();
        for commit_type in ALLOWED_COMMIT_TYPES {
            let message = format!("{}(core): do something", commit_type);
            assert!(format.is_valid(&message), "{} should be valid", message);
        }
    }

    #[test]
    fn test_default_format_rejects() {
        let format = MessageFormat::default();
        assert!(!format.is_valid("chores(login): typo"));
        assert!(!format.is_valid("feat: missing scope"));
        assert!(!format.is_valid("feat(Login): uppercase scope"));
        assert!(!format.is_valid("feat(login):no space"));
        assert!(!format.is_valid("feat(login): "));
        assert!(!format.is_valid("build(deps): not allowed"));
        assert!(!format.is_valid(""));
    }

    #[test]
    fn test_format_scope_characters() {
        let format = MessageFormat::default();
        assert!(format.is_valid("fix(api-v2): handle 404"));
        assert!(!format.is_valid("fix(api_v2): underscore"));
    }

    #[test]
    fn test_revert_is_transparent() {
        let format = MessageFormat::default();
        assert!(format.is_valid("Revert \"feat(x): y\""));
        assert!(format.is_valid("Revert \"feat(x): y\"\n\nThis reverts commit abc."));
        assert!(!format.is_valid("Revert \"oops\""));
    }

    #[test]
    fn test_custom_types() {
        let format = MessageFormat::new(&["build", "deps"][..]).unwrap();
        assert!(format.is_valid("build(ci): bump"));
        assert!(!format.is_valid("feat(ci): bump"));
    }
}
