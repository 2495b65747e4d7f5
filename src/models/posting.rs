use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Employment {
    #[default]
    PartTime,
    FullTime,
    Contractor,
    Temporary,
    Intern,
    Volunteer,
}

/// Closed category vocabulary; listing pages group and filter on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Delivery,
    Sales,
    Hospitality,
    Retail,
    Tutoring,
    Events,
    Fieldwork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "EUR")]
    Eur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayUnit {
    Hour,
    Month,
}

/// A posting as authored in `data/`, before the summary is derived.
///
/// All text is borrowed from the binary; `Catalog::build` turns these into
/// owned, finalized [`JobPosting`] records.
#[derive(Debug, Clone, Default, Validate)]
pub struct RawPosting {
    #[validate(length(min = 1))]
    pub slug: &'static str,
    #[validate(length(min = 1))]
    pub title: &'static str,
    #[validate(length(min = 1))]
    pub org_name: &'static str,
    pub description_html: &'static str,
    pub employment_type: Employment,
    pub base_salary_min: Option<Decimal>,
    pub base_salary_max: Option<Decimal>,
    pub currency: Option<Currency>,
    pub pay_unit: Option<PayUnit>,
    pub address_locality: &'static str,
    pub address_region: Option<&'static str>,
    pub postal_code: Option<&'static str>,
    pub street_address: Option<&'static str>,
    pub area: Option<&'static str>,
    pub english_friendly: Option<bool>,
    pub duo: Option<bool>,
    pub work_hours: Option<&'static str>,
    // Authored as text; the source data mixes 2026/02/14 and 2026-12-31.
    pub date_posted: &'static str,
    pub valid_through: Option<&'static str>,
    #[validate(length(min = 1))]
    pub categories: Vec<Category>,
    pub featured: bool,
    #[validate(url)]
    pub external_url: Option<&'static str>,
    pub per_gig_amount: Option<Decimal>,
    pub per_sale_amount: Option<Decimal>,
    pub per_gig_amount_text: Option<&'static str>,
    pub per_sale_amount_text: Option<&'static str>,
    pub logo_url: Option<&'static str>,
    pub logo_alt: Option<&'static str>,
    pub hero_image_url: Option<&'static str>,
    pub hero_image_alt: Option<&'static str>,
    pub brand_color: Option<&'static str>,
}

/// A finalized catalog record. `summary` is always derived from
/// `description_html` and the commission fields, never authored.
///
/// Serializes to the camelCase shape the hosting site consumes; absent
/// optionals are omitted rather than emitted as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub slug: String,
    pub title: String,
    pub org_name: String,
    pub description_html: String,
    pub summary: String,
    pub employment_type: Employment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_salary_min: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_salary_max: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_unit: Option<PayUnit>,
    pub address_locality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_friendly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<String>,
    pub date_posted: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_through: Option<NaiveDate>,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_gig_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_sale_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_gig_amount_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_sale_amount_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_color: Option<String>,
}
