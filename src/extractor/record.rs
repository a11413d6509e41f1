//! Product record type.
//!
//! The extractor's output: one flat value per field, empty strings for
//! fields that were not found. Built once per extraction call and immutable
//! once returned. Serialized in camelCase for the report's machine block.

use serde::Serialize;

/// Structured data mined from one product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Page URL the record was extracted from (from `Options::url`).
    pub url: String,

    /// Hostname of the page URL.
    pub domain: String,

    /// Extraction time, RFC 3339.
    pub timestamp: String,

    /// Product title.
    pub title: String,

    /// Product description.
    pub description: String,

    /// Current price, digits and decimal point only.
    pub price: String,

    /// Pre-discount price, digits and decimal point only.
    pub original_price: String,

    /// Brand or manufacturer name.
    pub brand: String,

    /// Stock keeping unit or other product identifier.
    pub sku: String,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Availability / stock status text.
    pub availability: String,

    /// Absolute product image URLs, deduplicated, at most 10.
    pub images: Vec<String>,

    /// Specification lines (`key: value` or free text), at most 20.
    pub specifications: Vec<String>,

    /// Document `<title>` text.
    pub page_title: String,

    /// Content of `<meta name="description">`.
    pub meta_description: String,

    /// `"schema+selectors"` when structured data contributed, else
    /// `"selectors"`.
    pub extraction_method: String,
}
