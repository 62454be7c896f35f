//! Syntactic validation helpers.

use regex::Regex;
use std::sync::OnceLock;

/// Shape check for email addresses: local part, single `@`, dotted domain
/// with a TLD of at least two letters. ASCII-oriented.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid email regex"))
}

/// Check whether a string is empty or consists only of whitespace.
pub fn is_empty(input: &str) -> bool {
    input.chars().all(char::is_whitespace)
}

/// Check whether a string is non-empty and entirely ASCII alphanumeric.
pub fn is_alphanumeric(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check whether a string looks like an email address.
///
/// Purely syntactic; no DNS or mailbox verification of any kind.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}
