//! Contact-token classification for the Personal Information line.
//!
//! Each token is classified on its own by an ordered predicate chain; the
//! first predicate that matches wins:
//! 1. email  — `local-part@domain.tld`
//! 2. phone  — exactly 10 digits once every non-digit is stripped
//! 3. url    — `http://`, `https://`, `www.` prefix, or a dotted token with no whitespace
//! 4. plain  — anything else, rendered verbatim

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.+-]+@[\w-]+(?:\.[\w-]+)*\.\w+$").expect("email pattern is valid")
});

const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Url,
    PlainText,
}

/// A classified contact token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactToken {
    pub kind: ContactKind,
    /// Visible text. Always the original (trimmed) token.
    pub text: String,
}

impl ContactToken {
    /// Hyperlink target for the token; `None` for plain text.
    pub fn target(&self) -> Option<String> {
        match self.kind {
            ContactKind::Email => Some(format!("mailto:{}", self.text)),
            ContactKind::Phone => Some(format!("tel:{}", digits(&self.text))),
            ContactKind::Url => Some(url_target(&self.text)),
            ContactKind::PlainText => None,
        }
    }
}

/// Classifies a single token. Pure: the same token always yields the same kind.
pub fn classify(token: &str) -> ContactKind {
    let token = token.trim();
    if is_email(token) {
        ContactKind::Email
    } else if is_phone(token) {
        ContactKind::Phone
    } else if is_url(token) {
        ContactKind::Url
    } else {
        ContactKind::PlainText
    }
}

/// Classifies a token, keeping its trimmed text for display.
pub fn contact_token(token: &str) -> ContactToken {
    let text = token.trim().to_string();
    ContactToken {
        kind: classify(&text),
        text,
    }
}

fn is_email(token: &str) -> bool {
    EMAIL_RE.is_match(token)
}

fn is_phone(token: &str) -> bool {
    digits(token).len() == PHONE_DIGITS
}

fn is_url(token: &str) -> bool {
    if has_scheme(token) || token.starts_with("www.") {
        return true;
    }
    token.contains('.') && !token.chars().any(char::is_whitespace)
}

fn has_scheme(token: &str) -> bool {
    token.starts_with("http://") || token.starts_with("https://")
}

fn url_target(token: &str) -> String {
    if has_scheme(token) {
        token.to_string()
    } else {
        format!("http://{token}")
    }
}

fn digits(token: &str) -> String {
    token.chars().filter(char::is_ascii_digit).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_literal_cases() {
        assert_eq!(classify("a@b.com"), ContactKind::Email);
        assert_eq!(classify("847-764-9200"), ContactKind::Phone);
        assert_eq!(classify("847.764.9200"), ContactKind::Phone);
        assert_eq!(classify("example.com"), ContactKind::Url);
        assert_eq!(classify("www.example.com"), ContactKind::Url);
        assert_eq!(classify("Chicago, IL"), ContactKind::PlainText);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for token in ["a@b.com", "(847) 764-9200", "github.com/jdoe", "Remote"] {
            assert_eq!(classify(token), classify(token));
        }
    }

    #[test]
    fn test_email_wins_over_url() {
        // Contains a dot and no whitespace, but the email check runs first.
        assert_eq!(classify("first.last@mail.example.org"), ContactKind::Email);
    }

    #[test]
    fn test_phone_needs_exactly_ten_digits() {
        assert_eq!(classify("(847) 764-9200"), ContactKind::Phone);
        assert_eq!(classify("+1 847 764 9200"), ContactKind::PlainText);
        assert_eq!(classify("764-9200"), ContactKind::PlainText);
    }

    #[test]
    fn test_url_with_whitespace_is_plain_text() {
        assert_eq!(classify("St. Louis"), ContactKind::PlainText);
        assert_eq!(classify("https://example.com/a b"), ContactKind::Url);
    }

    #[test]
    fn test_at_sign_without_domain_dot_is_not_email() {
        assert_eq!(classify("@handle"), ContactKind::PlainText);
        assert_eq!(classify("user@localhost"), ContactKind::PlainText);
    }

    #[test]
    fn test_targets() {
        assert_eq!(
            contact_token(" jane@example.com ").target().as_deref(),
            Some("mailto:jane@example.com")
        );
        assert_eq!(
            contact_token("847.764.9200").target().as_deref(),
            Some("tel:8477649200")
        );
        assert_eq!(
            contact_token("linkedin.com/in/jdoe").target().as_deref(),
            Some("http://linkedin.com/in/jdoe")
        );
        assert_eq!(
            contact_token("https://jdoe.dev").target().as_deref(),
            Some("https://jdoe.dev")
        );
        assert_eq!(contact_token("Chicago, IL").target(), None);
    }

    #[test]
    fn test_visible_text_is_original_token() {
        let token = contact_token("847-764-9200");
        assert_eq!(token.text, "847-764-9200");
        assert_eq!(token.kind, ContactKind::Phone);
    }
}
