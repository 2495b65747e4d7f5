//! Derives the short display summary shown on listing cards from a
//! posting's HTML description and commission fields.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::models::RawPosting;

/// Character cap for the narrative part of a summary.
pub const DEFAULT_SUMMARY_LEN: usize = 180;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid pattern"));
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Quick HTML -> text: drop tags, collapse whitespace, trim.
///
/// This is a textual tag strip, not a parser. Entities stay literal and an
/// unclosed tag swallows everything up to the next `>`.
pub fn strip_html(html: &str) -> String {
    let text = TAG_RE.replace_all(html, " ");
    WS_RE.replace_all(&text, " ").trim().to_string()
}

/// Cuts `text` at the first `.` when it falls inside `max_len` chars,
/// otherwise hard-truncates to `max_len - 1` chars plus an ellipsis.
///
/// The cut point is the raw index of the first period, not a sentence
/// boundary; a decimal number before the cap ends the excerpt early.
pub fn first_sentence(text: &str, max_len: usize) -> String {
    if let Some(idx) = text.chars().position(|c| c == '.') {
        if idx < max_len {
            return text.chars().take(idx + 1).collect();
        }
    }
    if text.chars().count() > max_len {
        let mut cut: String = text.chars().take(max_len - 1).collect();
        cut.push('…');
        cut
    } else {
        text.to_string()
    }
}

/// `Some("€30")` for strictly positive amounts, `None` otherwise. Callers
/// rely on the distinction between absence and an empty label.
pub fn format_money(amount: Option<Decimal>) -> Option<String> {
    match amount {
        Some(n) if n > Decimal::ZERO => Some(format!("€{}", n.normalize())),
        _ => None,
    }
}

/// Assembles the summary: per-gig pay, per-sale pay, then the first
/// sentence of the stripped description, joined with " — ". Numeric
/// amounts win over text fallbacks; absent fields contribute nothing.
pub fn compose(raw: &RawPosting) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(money) = format_money(raw.per_gig_amount) {
        parts.push(format!("{money} per gig"));
    } else if let Some(text) = raw.per_gig_amount_text.filter(|t| !t.is_empty()) {
        parts.push(text.to_string());
    }

    if let Some(money) = format_money(raw.per_sale_amount) {
        parts.push(format!("{money} per sale"));
    } else if let Some(text) = raw.per_sale_amount_text.filter(|t| !t.is_empty()) {
        parts.push(text.to_string());
    }

    let narrative = first_sentence(&strip_html(raw.description_html), DEFAULT_SUMMARY_LEN);
    if !narrative.is_empty() {
        parts.push(narrative);
    }

    parts.join(" — ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn strip_html_removes_tags_and_collapses_whitespace() {
        assert_eq!(
            strip_html("<p><strong>Hi</strong> there.</p>"),
            "Hi there."
        );
        assert_eq!(strip_html("<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>"), "one two");
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn strip_html_keeps_entities_literal() {
        assert_eq!(strip_html("<p>Fish &amp; chips</p>"), "Fish &amp; chips");
    }

    #[test]
    fn strip_html_unclosed_tag_swallows_to_next_bracket() {
        // "<em broken text more>" reads as one tag.
        assert_eq!(strip_html("text <em broken text more> tail"), "text tail");
        // No closing bracket at all: nothing matches, the fragment stays.
        assert_eq!(strip_html("text <em broken"), "text <em broken");
    }

    #[test]
    fn first_sentence_stops_at_early_period() {
        assert_eq!(
            first_sentence("Earn well. More text follows that is long.", 180),
            "Earn well."
        );
    }

    #[test]
    fn first_sentence_truncates_long_text_without_period() {
        let text = "a".repeat(250);
        let cut = first_sentence(&text, 180);
        assert_eq!(cut.chars().count(), 180);
        assert!(cut.ends_with('…'));
        assert_eq!(&cut[..179], &text[..179]);
    }

    #[test]
    fn first_sentence_leaves_short_text_alone() {
        assert_eq!(first_sentence("No period here", 180), "No period here");
    }

    #[test]
    fn first_sentence_truncates_when_period_is_past_the_cap() {
        let text = format!("{}.", "b".repeat(200));
        let cut = first_sentence(&text, 180);
        assert_eq!(cut.chars().count(), 180);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn first_sentence_cuts_inside_decimal_numbers() {
        // Raw-index behavior: the period of "9.88" ends the excerpt.
        assert_eq!(
            first_sentence("Earn €9.88 per hour to start", 180),
            "Earn €9."
        );
    }

    #[test]
    fn format_money_requires_strictly_positive() {
        assert_eq!(format_money(Some(dec!(30))), Some("€30".to_string()));
        assert_eq!(format_money(Some(dec!(9.88))), Some("€9.88".to_string()));
        assert_eq!(format_money(Some(dec!(15.0))), Some("€15".to_string()));
        assert_eq!(format_money(Some(Decimal::ZERO)), None);
        assert_eq!(format_money(Some(dec!(-3))), None);
        assert_eq!(format_money(None), None);
    }

    #[test]
    fn compose_prefers_numeric_over_text_and_joins_segments() {
        let raw = RawPosting {
            slug: "sample",
            title: "Sample",
            org_name: "Org",
            description_html: "<p>Great role.</p> more text",
            per_gig_amount: Some(dec!(30)),
            per_gig_amount_text: Some("ignored"),
            per_sale_amount: None,
            per_sale_amount_text: Some("flat fee"),
            ..RawPosting::default()
        };
        assert_eq!(compose(&raw), "€30 per gig — flat fee — Great role.");
    }

    #[test]
    fn compose_empty_description_and_no_pay_yields_empty_string() {
        let raw = RawPosting {
            slug: "empty",
            title: "Empty",
            org_name: "Org",
            description_html: "<p></p>",
            ..RawPosting::default()
        };
        assert_eq!(compose(&raw), "");
    }

    #[test]
    fn compose_skips_empty_text_fallbacks() {
        let raw = RawPosting {
            slug: "blank-fallback",
            title: "Blank",
            org_name: "Org",
            description_html: "<p>Solid job.</p>",
            per_gig_amount_text: Some(""),
            ..RawPosting::default()
        };
        assert_eq!(compose(&raw), "Solid job.");
    }

    #[test]
    fn compose_uses_pay_segments_without_narrative() {
        let raw = RawPosting {
            slug: "pay-only",
            title: "Pay only",
            org_name: "Org",
            description_html: "",
            per_sale_amount: Some(dec!(200)),
            ..RawPosting::default()
        };
        assert_eq!(compose(&raw), "€200 per sale");
    }
}
