//! # Link Canonicalization
//!
//! Turns a link's raw user-entered value into the single scheme-prefixed URI
//! handed to QR rendering, print payloads and "open link" actions.
//!
//! [`canonicalize`] is total: it never fails, and malformed or empty input
//! degrades to a syntactically well-formed (if useless) URI rather than an
//! error. Users type phone numbers with their own punctuation, usernames with
//! or without `@`, and URLs with or without a scheme; the rules here absorb
//! all of that.
//!
//! The WhatsApp rule carries a product assumption: digit strings that do not
//! already start with `55` get the Brazilian country code prepended. This is a
//! coarse heuristic, not validation — it mis-encodes non-Brazilian numbers
//! without a recognizable prefix, and it is applied as-is.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::model::LinkKind;

/// URI component encoding: everything except ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )` is percent-encoded (space becomes `%20`).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the canonical shareable URI for a link.
///
/// | kind | result |
/// |------|--------|
/// | email | `mailto:` + value verbatim |
/// | phone | `tel:` + value verbatim, punctuation preserved |
/// | whatsapp | `https://wa.me/<digits>` with `55` prepended when missing, `?text=` when a message is set |
/// | instagram | `https://instagram.com/<user>` (leading `@` stripped), full URLs untouched |
/// | github | `https://github.com/<user>`, full URLs untouched |
/// | website / anything else | `https://<value>`, full URLs untouched |
pub fn canonicalize(kind: &LinkKind, value: &str, message: Option<&str>) -> String {
    match kind {
        LinkKind::Email => format!("mailto:{}", value),
        LinkKind::Phone => format!("tel:{}", value),
        LinkKind::Whatsapp => {
            let mut cleaned: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
            if !cleaned.is_empty() && !cleaned.starts_with("55") {
                cleaned = format!("55{}", cleaned);
            }
            let mut url = format!("https://wa.me/{}", cleaned);
            if let Some(text) = message {
                if !text.is_empty() {
                    url.push_str("?text=");
                    url.push_str(&utf8_percent_encode(text, URI_COMPONENT).to_string());
                }
            }
            url
        }
        LinkKind::Instagram => {
            if value.starts_with("http") {
                value.to_string()
            } else {
                let username = value.strip_prefix('@').unwrap_or(value);
                format!("https://instagram.com/{}", username)
            }
        }
        LinkKind::Github => {
            if value.starts_with("http") {
                value.to_string()
            } else {
                format!("https://github.com/{}", value)
            }
        }
        _ => {
            if value.starts_with("http") {
                value.to_string()
            } else {
                format!("https://{}", value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_verbatim() {
        assert_eq!(
            canonicalize(&LinkKind::Email, "a@b.com", None),
            "mailto:a@b.com"
        );
        // No address validation at all
        assert_eq!(
            canonicalize(&LinkKind::Email, "not an email", None),
            "mailto:not an email"
        );
    }

    #[test]
    fn test_phone_preserves_punctuation() {
        assert_eq!(
            canonicalize(&LinkKind::Phone, "+1 555-0100", None),
            "tel:+1 555-0100"
        );
    }

    #[test]
    fn test_whatsapp_prepends_country_code() {
        assert_eq!(
            canonicalize(&LinkKind::Whatsapp, "11987654321", Some("Hi")),
            "https://wa.me/5511987654321?text=Hi"
        );
    }

    #[test]
    fn test_whatsapp_no_double_prefix() {
        assert_eq!(
            canonicalize(&LinkKind::Whatsapp, "5511987654321", None),
            "https://wa.me/5511987654321"
        );
    }

    #[test]
    fn test_whatsapp_strips_punctuation() {
        assert_eq!(
            canonicalize(&LinkKind::Whatsapp, "(11) 98765-4321", None),
            "https://wa.me/5511987654321"
        );
    }

    #[test]
    fn test_whatsapp_heuristic_applies_to_foreign_numbers() {
        // A US number with country code still gets 55 prepended; the
        // heuristic is blind to anything but a literal leading "55".
        assert_eq!(
            canonicalize(&LinkKind::Whatsapp, "+1 212 555 0100", None),
            "https://wa.me/5512125550100"
        );
    }

    #[test]
    fn test_whatsapp_message_percent_encoded() {
        assert_eq!(
            canonicalize(&LinkKind::Whatsapp, "5511987654321", Some("Hello, I saw your card!")),
            "https://wa.me/5511987654321?text=Hello%2C%20I%20saw%20your%20card!"
        );
    }

    #[test]
    fn test_whatsapp_empty_message_omits_query() {
        assert_eq!(
            canonicalize(&LinkKind::Whatsapp, "5511987654321", Some("")),
            "https://wa.me/5511987654321"
        );
    }

    #[test]
    fn test_whatsapp_empty_value_stays_wellformed() {
        // Empty digits: no country code injected, still a valid URI shape
        assert_eq!(
            canonicalize(&LinkKind::Whatsapp, "", None),
            "https://wa.me/"
        );
        assert_eq!(
            canonicalize(&LinkKind::Whatsapp, "ext.", None),
            "https://wa.me/"
        );
    }

    #[test]
    fn test_instagram_strips_at() {
        assert_eq!(
            canonicalize(&LinkKind::Instagram, "@someuser", None),
            "https://instagram.com/someuser"
        );
        assert_eq!(
            canonicalize(&LinkKind::Instagram, "someuser", None),
            "https://instagram.com/someuser"
        );
    }

    #[test]
    fn test_instagram_full_url_untouched() {
        assert_eq!(
            canonicalize(&LinkKind::Instagram, "https://instagram.com/x", None),
            "https://instagram.com/x"
        );
    }

    #[test]
    fn test_github_username() {
        assert_eq!(
            canonicalize(&LinkKind::Github, "octocat", None),
            "https://github.com/octocat"
        );
        assert_eq!(
            canonicalize(&LinkKind::Github, "https://github.com/octocat", None),
            "https://github.com/octocat"
        );
    }

    #[test]
    fn test_website_scheme_added_once() {
        assert_eq!(
            canonicalize(&LinkKind::Website, "example.com", None),
            "https://example.com"
        );
        assert_eq!(
            canonicalize(&LinkKind::Website, "https://example.com", None),
            "https://example.com"
        );
        // "http" prefix check is a plain string test, so http:// also passes through
        assert_eq!(
            canonicalize(&LinkKind::Website, "http://example.com", None),
            "http://example.com"
        );
    }

    #[test]
    fn test_linkedin_and_unknown_fall_through_to_website_rule() {
        assert_eq!(
            canonicalize(&LinkKind::Linkedin, "linkedin.com/in/someone", None),
            "https://linkedin.com/in/someone"
        );
        assert_eq!(
            canonicalize(&LinkKind::Other("mastodon".into()), "example.social/@me", None),
            "https://example.social/@me"
        );
    }

    #[test]
    fn test_total_over_all_kinds_with_empty_value() {
        let mut kinds = LinkKind::KNOWN.to_vec();
        kinds.push(LinkKind::Other("telegram".into()));
        for kind in kinds {
            let uri = canonicalize(&kind, "", None);
            assert!(!uri.is_empty(), "empty URI for kind {}", kind);
        }
    }
}
