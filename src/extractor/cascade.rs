//! Selector cascades for product fields.
//!
//! Each field holds a fixed, ordered list of lookup selectors ranked from
//! most specific (item-scoped structured-data attributes) to most generic
//! (bare class-substring matches). Singular fields take the first
//! non-blank match in cascade order, then document order; plural fields
//! accumulate matches across every selector.

use std::collections::HashSet;

use crate::dom::Document;
use crate::extractor::price::clean_price;

/// Product title, most specific first.
pub(crate) const TITLE: &[&str] = &[
    // Structured-data attributes
    r#"[itemprop="name"]"#,
    r#"[property="product:title"]"#,
    r#"[property="og:title"]"#,
    // Semantic heading patterns
    "h1.product-title",
    "h1.product-name",
    r#"h1[class*="product"]"#,
    r#"h1[class*="title"]"#,
    ".product-title h1",
    ".product-name h1",
    ".product-info h1",
    ".product-details h1",
    // Generic heading
    "h1",
    // Shopify themes
    ".product-single__title",
    ".product__title",
    // WooCommerce themes
    ".product_title",
    ".entry-title",
    // Common class names
    ".product-title",
    ".product-name",
    ".item-title",
    ".goods-title",
    ".title",
];

/// Current price.
pub(crate) const PRICE: &[&str] = &[
    r#"[itemprop="price"]"#,
    r#"[itemprop="lowPrice"]"#,
    r#"[property="product:price:amount"]"#,
    ".price-current",
    ".current-price",
    ".sale-price",
    ".price-now",
    ".product-price .price",
    ".product-price-value",
    ".price-box .price",
    ".price .amount",
    // Shopify
    ".product-form__cart-submit .price",
    ".price__current",
    ".product__price",
    // WooCommerce
    ".woocommerce-Price-amount",
    ".price .woocommerce-Price-amount",
    // Generic
    ".price",
    ".cost",
    ".amount",
    r#"[class*="price"]"#,
    r#"[id*="price"]"#,
];

/// Pre-discount (struck-through) price.
pub(crate) const ORIGINAL_PRICE: &[&str] = &[
    r#"[itemprop="highPrice"]"#,
    ".price-original",
    ".original-price",
    ".regular-price",
    ".price-old",
    ".price-was",
    ".compare-price",
    ".price__compare",
    ".price-compare",
    ".was-price",
    ".list-price",
    ".msrp-price",
    ".retail-price",
    ".price del",
    ".price .del",
    "del.price",
    ".price s",
    "s.price",
];

/// Product gallery images.
pub(crate) const IMAGES: &[&str] = &[
    ".product-image img",
    ".product-photo img",
    ".product-gallery img",
    ".product-slider img",
    ".product-carousel img",
    ".main-image img",
    ".hero-image img",
    ".featured-image img",
    // Shopify
    ".product__media img",
    ".product-single__photos img",
    // WooCommerce
    ".woocommerce-product-gallery img",
    ".product-images img",
    // Generic
    r#"[class*="product"] img"#,
    r#"[class*="gallery"] img"#,
    "[data-src]",
    r#"img[alt*="product"]"#,
];

/// Product description.
pub(crate) const DESCRIPTION: &[&str] = &[
    r#"[itemprop="description"]"#,
    r#"[property="og:description"]"#,
    r#"[name="description"]"#,
    ".product-description",
    ".product-details",
    ".product-summary",
    ".product-content",
    ".product-info",
    ".product-overview",
    ".description",
    ".summary",
    ".content",
    ".details",
    // Shopify
    ".product-single__description",
    ".product__description",
    // WooCommerce
    ".woocommerce-product-details__short-description",
    ".product-short-description",
    // Generic
    r#"[class*="description"]"#,
    r#"[class*="summary"]"#,
    r#"[class*="overview"]"#,
];

/// Specification containers (tables, definition lists, bullet lists).
pub(crate) const SPECIFICATIONS: &[&str] = &[
    ".product-specs",
    ".product-attributes",
    ".product-features",
    ".product-details",
    ".specifications",
    ".attributes",
    ".features",
    ".product-info table",
    ".product-data table",
    ".spec-table",
    ".attribute-table",
    ".product-properties",
    ".product-parameters",
    // WooCommerce
    ".woocommerce-product-attributes",
    ".product-attributes-wrapper",
    // Generic tables and lists
    r#"table[class*="spec"]"#,
    r#"table[class*="attribute"]"#,
    r#"ul[class*="spec"]"#,
    r#"ul[class*="attribute"]"#,
    r#"dl[class*="spec"]"#,
    r#"dl[class*="attribute"]"#,
];

/// Brand or manufacturer.
pub(crate) const BRAND: &[&str] = &[
    r#"[itemprop="brand"]"#,
    r#"[property="product:brand"]"#,
    ".product-brand",
    ".brand",
    ".manufacturer",
    ".vendor",
    ".supplier",
    r#"[class*="brand"]"#,
];

/// Stock / availability status.
pub(crate) const STOCK: &[&str] = &[
    r#"[itemprop="availability"]"#,
    ".stock-status",
    ".availability",
    ".inventory",
    ".product-stock",
    ".in-stock",
    ".out-of-stock",
    r#"[class*="stock"]"#,
    r#"[class*="availability"]"#,
];

/// SKU / product identifier.
pub(crate) const SKU: &[&str] = &[
    r#"[itemprop="sku"]"#,
    r#"[itemprop="productID"]"#,
    ".product-sku",
    ".sku",
    ".product-id",
    ".item-number",
    ".model-number",
    r#"[class*="sku"]"#,
];

/// Image `src` attribute plus the lazy-loading variants galleries use.
const IMAGE_URL_ATTRS: &[&str] =
    &["src", "data-src", "data-lazy-src", "data-original", "data-zoom-image", "data-large-image"];

/// Substrings marking chrome images rather than product photos.
const IMAGE_REJECT: &[&str] = &["icon", "logo", "badge"];

/// Tuning for a single cascade lookup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lookup {
    /// Run price numeric cleanup on the matched text.
    pub clean_price: bool,
    /// Truncate matched text to this many characters (with `...`).
    pub max_length: usize,
}

impl Default for Lookup {
    fn default() -> Self {
        Self { clean_price: false, max_length: 1000 }
    }
}

/// First non-blank match across the cascade, in selector order then
/// document order. Empty string when nothing matches.
pub(crate) fn first_match(doc: &Document, selectors: &[&str], lookup: Lookup) -> String {
    for &selector in selectors {
        for element in doc.select(selector).iter() {
            let text = element.text().trim().to_string();
            if text.is_empty() {
                continue;
            }

            let text = if lookup.clean_price { clean_price(&text) } else { text };
            if text.is_empty() {
                continue;
            }

            return truncate(&text, lookup.max_length);
        }
    }

    String::new()
}

/// Collect product image URLs across the whole cascade.
///
/// Candidates come from `src` and the common lazy-loading attributes,
/// must already be absolute (`http` prefix), and are deduplicated in
/// first-seen order. Chrome images (icons, logos, badges) are rejected.
/// Capped at 10.
pub(crate) fn collect_images(doc: &Document) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut urls: Vec<String> = Vec::new();

    for &selector in IMAGES {
        for element in doc.select(selector).iter() {
            for &attr in IMAGE_URL_ATTRS {
                let Some(url) = element.attr(attr) else {
                    continue;
                };
                let url = url.to_string();
                if !url.starts_with("http") {
                    continue;
                }
                if IMAGE_REJECT.iter().any(|marker| url.contains(marker)) {
                    continue;
                }
                if seen.insert(url.clone()) {
                    urls.push(url);
                }
            }
        }
    }

    urls.truncate(10);
    urls
}

/// Collect specification lines across the whole cascade.
///
/// Containers are interpreted by tag: tables pair the first two cells of
/// each row as `key: value`, definition lists pair `dt`/`dd` positionally
/// (the shorter side truncates), bullet lists keep short item text, and
/// anything else is split on newlines keeping short lines. Capped at 20.
pub(crate) fn collect_specifications(doc: &Document) -> Vec<String> {
    let mut specs: Vec<String> = Vec::new();

    for &selector in SPECIFICATIONS {
        for container in doc.select(selector).iter() {
            let tag = crate::dom::tag_name(&container).unwrap_or_default();

            match tag.as_str() {
                "table" => {
                    for row in container.select("tr").iter() {
                        let cells = row.select("td, th");
                        let texts: Vec<String> =
                            cells.iter().take(2).map(|c| c.text().trim().to_string()).collect();
                        if let [key, value] = texts.as_slice() {
                            if !key.is_empty() && !value.is_empty() {
                                specs.push(format!("{key}: {value}"));
                            }
                        }
                    }
                }
                "dl" => {
                    let terms: Vec<String> =
                        container.select("dt").iter().map(|t| t.text().trim().to_string()).collect();
                    let definitions: Vec<String> =
                        container.select("dd").iter().map(|d| d.text().trim().to_string()).collect();
                    for (key, value) in terms.iter().zip(definitions.iter()) {
                        if !key.is_empty() && !value.is_empty() {
                            specs.push(format!("{key}: {value}"));
                        }
                    }
                }
                "ul" | "ol" => {
                    for item in container.select("li").iter() {
                        let text = item.text().trim().to_string();
                        if !text.is_empty() && text.chars().count() < 200 {
                            specs.push(text);
                        }
                    }
                }
                _ => {
                    let text = container.text().trim().to_string();
                    if !text.is_empty() && text.chars().count() < 500 {
                        for line in text.lines() {
                            let line = line.trim();
                            if !line.is_empty() && line.chars().count() < 100 {
                                specs.push(line.to_string());
                            }
                        }
                    }
                }
            }
        }
    }

    specs.truncate(20);
    specs
}

fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_length).collect();
    out.push_str("...");
    out
}
