//! Static job-listing content for the Amsterdam student job board: the
//! posting catalog plus the helpers that derive each short display summary.
//!
//! The catalog is compiled-in literal data. Hosts either take the bundled
//! [`catalog()`] or build their own with [`Catalog::build`].

pub mod catalog;
pub mod data;
pub mod error;
pub mod models;
pub mod summary;

use std::sync::OnceLock;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use models::{Category, Currency, Employment, JobPosting, PayUnit, RawPosting};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The bundled catalog, built on first access and immutable afterwards.
/// The bundled definitions are pinned by tests, so the build cannot fail.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        Catalog::build(data::raw_postings()).expect("bundled postings are valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_builds() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 31);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn featured_postings_keep_catalog_order() {
        let featured: Vec<&str> = catalog()
            .list_featured()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(
            featured,
            vec![
                "domakin-agent-amsterdam",
                "ib-tutor",
                "pepperminds-door-to-door-sales-amsterdam",
                "thuisbezorgd-takeaway-courier-netherlands",
            ]
        );
    }

    #[test]
    fn featured_is_a_subset_of_all_in_order() {
        let all: Vec<&str> = catalog().list_all().iter().map(|p| p.slug.as_str()).collect();
        let featured: Vec<&str> = catalog()
            .list_featured()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        let mut walk = all.iter();
        for slug in &featured {
            assert!(walk.any(|s| s == slug), "{slug} out of order or missing");
        }
        assert!(catalog().list_featured().iter().all(|p| p.featured));
    }

    #[test]
    fn lookup_by_slug() {
        let posting = catalog().get_by_slug("ib-tutor").expect("known slug");
        assert_eq!(posting.title, "IB Tutor (Online)");
        assert!(catalog().get_by_slug("not-a-real-slug").is_none());
    }

    #[test]
    fn numeric_commission_beats_text_fallback() {
        let posting = catalog().get_by_slug("domakin-agent-amsterdam").unwrap();
        assert_eq!(
            posting.summary,
            "€30 per gig — €200 per sale — Domakin helps students in the Netherlands find housing."
        );
    }

    #[test]
    fn text_fallback_used_when_no_numeric_amount() {
        let posting = catalog()
            .get_by_slug("pepperminds-door-to-door-sales-amsterdam")
            .unwrap();
        assert_eq!(
            posting.summary,
            "150 euros per shift — Earn €150 per shift as part of Pepperminds’ door-to-door team in Amsterdam."
        );
    }

    #[test]
    fn long_first_sentence_is_capped_with_ellipsis() {
        // The first period of this description sits past the cap, inside
        // "Thuisbezorgd.nl", so the narrative is hard-truncated.
        let posting = catalog()
            .get_by_slug("thuisbezorgd-takeaway-courier-netherlands")
            .unwrap();
        assert!(posting.summary.starts_with("14 euros per hour — Are you tired"));
        assert!(posting.summary.ends_with('…'));
    }

    #[test]
    fn summaries_are_never_empty_for_described_postings() {
        for posting in catalog().list_all() {
            assert!(!posting.summary.is_empty(), "{} has an empty summary", posting.slug);
        }
    }

    #[test]
    fn serializes_to_the_site_wire_shape() {
        let posting = catalog().get_by_slug("ib-tutor").unwrap();
        let v = serde_json::to_value(posting).unwrap();

        assert_eq!(v["orgName"], "AcademiaAI");
        assert_eq!(v["employmentType"], "PART_TIME");
        assert_eq!(v["payUnit"], "HOUR");
        assert_eq!(v["currency"], "EUR");
        assert_eq!(v["categories"], serde_json::json!(["tutoring"]));
        assert_eq!(v["duo"], true);
        assert_eq!(v["datePosted"], "2026-02-14");
        // Absent optionals are omitted, not null.
        assert!(v.get("postalCode").is_none());
        assert!(v.get("externalUrl").is_none());
    }
}
