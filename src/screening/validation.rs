//! Input validators and normalizers for candidate answers.
//!
//! Every function here is pure and total: a rejected answer is a re-prompt,
//! never an error.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of tech stack entries kept from one answer.
pub const MAX_TECH_STACK: usize = 15;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("valid phone regex"));

static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid number regex")
});

/// At least two characters, letters and whitespace only.
pub fn is_valid_name(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.chars().count() >= 2 && NAME_RE.is_match(trimmed)
}

/// `local@domain.tld` shape. Deliverability is not checked.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Whitespace is stripped first, so the 10-character minimum counts digits
/// and the `+ - ( )` punctuation only.
pub fn is_valid_phone(input: &str) -> bool {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Years of experience: a decimal number in `[0, 50]`.
///
/// Reads the longest float prefix, so trailing text is ignored ("3 years"
/// reads as 3) while an exponent still counts ("1e2" reads as 100).
pub fn is_valid_experience(input: &str) -> bool {
    match parse_leading_number(input) {
        Some(years) => (0.0..=50.0).contains(&years),
        None => false,
    }
}

/// Parse the longest numeric prefix of `input` (after leading whitespace).
fn parse_leading_number(input: &str) -> Option<f64> {
    let prefix = NUMBER_PREFIX_RE.find(input.trim_start())?;
    prefix.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Trim and strip angle brackets. Not a general HTML sanitizer.
pub fn sanitize_input(input: &str) -> String {
    input.trim().replace(['<', '>'], "")
}

/// Split a tech stack answer on commas and newlines.
///
/// Pieces are sanitized, empties dropped, order preserved, and at most
/// [`MAX_TECH_STACK`] entries are kept.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(sanitize_input)
        .filter(|tech| !tech.is_empty())
        .take(MAX_TECH_STACK)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_and_spaces() {
        assert!(is_valid_name("Jane Doe"));
        assert!(is_valid_name("  Al  "));
        assert!(is_valid_name("Mary Ann Smith"));
    }

    #[test]
    fn name_rejects_short_or_symbols() {
        assert!(!is_valid_name("J"));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("Jane2"));
        assert!(!is_valid_name("O'Brien"));
        assert!(!is_valid_name("jane@doe"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("a@b.io"));
        assert!(!is_valid_email("john.doe@example"));
        assert!(!is_valid_email("john doe@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_formats() {
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("+44 20 7946 0958"));
        assert!(is_valid_phone("555-123-4567"));
    }

    #[test]
    fn phone_rejects_short_or_letters() {
        // Spaces don't count toward the minimum length.
        assert!(!is_valid_phone("555 123 45"));
        assert!(!is_valid_phone("call me maybe"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("12+3456789012"));
    }

    #[test]
    fn experience_range() {
        assert!(is_valid_experience("2.5"));
        assert!(is_valid_experience("0"));
        assert!(is_valid_experience("50"));
        assert!(is_valid_experience(" 3 years"));
        assert!(!is_valid_experience("51"));
        assert!(!is_valid_experience("-1"));
        assert!(!is_valid_experience("abc"));
        assert!(!is_valid_experience(""));
        assert!(!is_valid_experience("."));
    }

    #[test]
    fn experience_reads_exponents() {
        assert!(!is_valid_experience("1e2"));
        assert!(!is_valid_experience("6e1"));
        assert!(is_valid_experience("5e1"));
        assert!(is_valid_experience("2.5E0 years"));
        // A bare `e` is not an exponent.
        assert!(is_valid_experience("4e"));
        assert!(is_valid_experience("12 exp"));
    }

    #[test]
    fn sanitize_strips_brackets_and_whitespace() {
        assert_eq!(sanitize_input("  <b>Rust</b> "), "bRust/b");
        assert_eq!(sanitize_input("plain"), "plain");
        assert_eq!(sanitize_input("   "), "");
    }

    #[test]
    fn tech_stack_splits_on_comma_and_newline() {
        assert_eq!(
            parse_tech_stack("React, , Node.js\nPython"),
            vec!["React", "Node.js", "Python"]
        );
    }

    #[test]
    fn tech_stack_empty_input() {
        assert!(parse_tech_stack("").is_empty());
        assert!(parse_tech_stack(" , \n ,").is_empty());
        assert!(parse_tech_stack("<>").is_empty());
    }

    #[test]
    fn tech_stack_truncates_to_limit() {
        let input = (1..=20).map(|i| format!("tech{i}")).collect::<Vec<_>>().join(",");
        let parsed = parse_tech_stack(&input);
        assert_eq!(parsed.len(), MAX_TECH_STACK);
        assert_eq!(parsed.first().map(String::as_str), Some("tech1"));
        assert_eq!(parsed.last().map(String::as_str), Some("tech15"));
    }
}
