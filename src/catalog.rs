use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, info};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::{JobPosting, RawPosting};
use crate::summary;

/// The complete, ordered, immutable set of postings for one deployment.
///
/// Built once from literal definitions; nothing is written afterwards, so
/// sharing a `Catalog` across request handlers needs no synchronization.
#[derive(Debug)]
pub struct Catalog {
    postings: Vec<JobPosting>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Validates and finalizes raw postings in definition order: derives
    /// each summary, parses dates, and indexes by slug.
    pub fn build(raw_postings: Vec<RawPosting>) -> Result<Self> {
        let mut postings = Vec::with_capacity(raw_postings.len());
        let mut by_slug = HashMap::with_capacity(raw_postings.len());

        for raw in raw_postings {
            raw.validate().map_err(|source| Error::Validation {
                slug: raw.slug.to_string(),
                source,
            })?;

            let posting = finalize(raw)?;
            debug!(slug = %posting.slug, "finalized posting");

            if by_slug.insert(posting.slug.clone(), postings.len()).is_some() {
                return Err(Error::DuplicateSlug(posting.slug));
            }
            postings.push(posting);
        }

        let featured = postings.iter().filter(|p| p.featured).count();
        info!(count = postings.len(), featured, "job catalog built");

        Ok(Self { postings, by_slug })
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&JobPosting> {
        self.by_slug.get(slug).map(|&i| &self.postings[i])
    }

    /// Every posting, in catalog-definition order.
    pub fn list_all(&self) -> &[JobPosting] {
        &self.postings
    }

    /// The `featured` subset, catalog order preserved.
    pub fn list_featured(&self) -> Vec<&JobPosting> {
        self.postings.iter().filter(|p| p.featured).collect()
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

fn finalize(raw: RawPosting) -> Result<JobPosting> {
    let summary = summary::compose(&raw);
    let date_posted = parse_date(raw.slug, raw.date_posted)?;
    let valid_through = raw
        .valid_through
        .map(|v| parse_date(raw.slug, v))
        .transpose()?;

    Ok(JobPosting {
        slug: raw.slug.to_string(),
        title: raw.title.to_string(),
        org_name: raw.org_name.to_string(),
        description_html: raw.description_html.to_string(),
        summary,
        employment_type: raw.employment_type,
        base_salary_min: raw.base_salary_min,
        base_salary_max: raw.base_salary_max,
        currency: raw.currency,
        pay_unit: raw.pay_unit,
        address_locality: raw.address_locality.to_string(),
        address_region: raw.address_region.map(str::to_string),
        postal_code: raw.postal_code.map(str::to_string),
        street_address: raw.street_address.map(str::to_string),
        area: raw.area.map(str::to_string),
        english_friendly: raw.english_friendly,
        duo: raw.duo,
        work_hours: raw.work_hours.map(str::to_string),
        date_posted,
        valid_through,
        categories: raw.categories,
        featured: raw.featured,
        external_url: raw.external_url.map(str::to_string),
        per_gig_amount: raw.per_gig_amount,
        per_sale_amount: raw.per_sale_amount,
        per_gig_amount_text: raw.per_gig_amount_text.map(str::to_string),
        per_sale_amount_text: raw.per_sale_amount_text.map(str::to_string),
        logo_url: raw.logo_url.map(str::to_string),
        logo_alt: raw.logo_alt.map(str::to_string),
        hero_image_url: raw.hero_image_url.map(str::to_string),
        hero_image_alt: raw.hero_image_alt.map(str::to_string),
        brand_color: raw.brand_color.map(str::to_string),
    })
}

// Listing dates are authored both as 2026/02/14 and 2026-12-31.
fn parse_date(slug: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y/%m/%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| Error::InvalidDate {
            slug: slug.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rust_decimal_macros::dec;

    fn sample(slug: &'static str) -> RawPosting {
        RawPosting {
            slug,
            title: "Sample Job",
            org_name: "Sample Org",
            description_html: "<p>Do the thing. Then some more.</p>",
            categories: vec![Category::Retail],
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            ..RawPosting::default()
        }
    }

    #[test]
    fn build_finalizes_and_indexes() {
        let mut featured = sample("featured-job");
        featured.featured = true;
        featured.per_gig_amount = Some(dec!(30));

        let catalog = Catalog::build(vec![featured, sample("plain-job")]).unwrap();
        assert_eq!(catalog.len(), 2);

        let posting = catalog.get_by_slug("featured-job").unwrap();
        assert_eq!(posting.summary, "€30 per gig — Do the thing.");
        assert_eq!(
            posting.date_posted,
            NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
        );
        assert_eq!(
            posting.valid_through,
            Some(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap())
        );
    }

    #[test]
    fn get_by_slug_miss_is_none() {
        let catalog = Catalog::build(vec![sample("only-job")]).unwrap();
        assert!(catalog.get_by_slug("missing-job").is_none());
    }

    #[test]
    fn list_featured_preserves_order_and_subsets_list_all() {
        let mut a = sample("a-job");
        a.featured = true;
        let b = sample("b-job");
        let mut c = sample("c-job");
        c.featured = true;

        let catalog = Catalog::build(vec![a, b, c]).unwrap();
        let featured: Vec<&str> = catalog
            .list_featured()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(featured, vec!["a-job", "c-job"]);
        assert!(catalog.list_featured().iter().all(|p| p.featured));
        assert_eq!(catalog.list_all().len(), 3);
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let err = Catalog::build(vec![sample("twice"), sample("twice")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateSlug(slug) if slug == "twice"));
    }

    #[test]
    fn empty_categories_fail_validation() {
        let mut raw = sample("no-categories");
        raw.categories = Vec::new();
        let err = Catalog::build(vec![raw]).unwrap_err();
        assert!(matches!(err, Error::Validation { slug, .. } if slug == "no-categories"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut raw = sample("bad-date");
        raw.date_posted = "14-02-2026";
        let err = Catalog::build(vec![raw]).unwrap_err();
        assert!(matches!(err, Error::InvalidDate { value, .. } if value == "14-02-2026"));
    }

    #[test]
    fn summary_is_recomputed_not_authored() {
        let raw = sample("derived-summary");
        let catalog = Catalog::build(vec![raw]).unwrap();
        let posting = catalog.get_by_slug("derived-summary").unwrap();
        assert_eq!(posting.summary, "Do the thing.");
    }

    #[test]
    fn empty_catalog_builds() {
        let catalog = Catalog::build(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.list_featured().is_empty());
    }
}
