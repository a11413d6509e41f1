//! Product data extraction.
//!
//! Two sources feed one record: selector cascades over the rendered
//! markup ([`cascade`]) and schema.org JSON-LD structured data
//! ([`schema`]). Cascades run first and fill every field they can;
//! structured data then overrides field by field, since it is
//! authoritative where present but frequently partial. The merged result
//! is a flat [`ProductRecord`].

pub(crate) mod cascade;
pub mod price;
pub(crate) mod record;
pub(crate) mod schema;

use chrono::Utc;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::url_utils;

pub use record::ProductRecord;

use cascade::Lookup;
use price::detect_currency;

/// Extract a product record from an HTML document.
pub(crate) fn extract_record(html: &str, options: &Options) -> Result<ProductRecord> {
    let doc = dom::parse(html);

    let (url, domain) = page_location(options)?;

    let mut record = ProductRecord {
        url,
        domain,
        timestamp: Utc::now().to_rfc3339(),
        title: cascade::first_match(&doc, cascade::TITLE, Lookup::default()),
        description: cascade::first_match(
            &doc,
            cascade::DESCRIPTION,
            Lookup { max_length: 2000, ..Lookup::default() },
        ),
        price: price_match(&doc, cascade::PRICE),
        original_price: price_match(&doc, cascade::ORIGINAL_PRICE),
        brand: cascade::first_match(&doc, cascade::BRAND, Lookup::default()),
        sku: cascade::first_match(&doc, cascade::SKU, Lookup::default()),
        availability: cascade::first_match(&doc, cascade::STOCK, Lookup::default()),
        images: cascade::collect_images(&doc),
        specifications: cascade::collect_specifications(&doc),
        page_title: doc.select("head title").text().trim().to_string(),
        meta_description: dom::get_attribute(
            &doc.select(r#"meta[name="description"]"#),
            "content",
        )
        .unwrap_or_default(),
        extraction_method: "selectors".to_string(),
        ..ProductRecord::default()
    };

    apply_schema(&doc, &mut record);

    if record.currency.is_empty() {
        record.currency = detect_currency(&doc.select("body").text()).to_string();
    }

    Ok(record)
}

/// `url`/`domain` fields from the configured page URL.
fn page_location(options: &Options) -> Result<(String, String)> {
    let Some(raw) = options.url.as_deref() else {
        return Ok((String::new(), String::new()));
    };

    let parsed = url_utils::parse_base_url(raw)
        .ok_or_else(|| Error::InvalidBaseUrl(raw.to_string()))?;
    let domain = parsed.host_str().unwrap_or_default().to_string();
    Ok((raw.trim().to_string(), domain))
}

fn price_match(doc: &Document, selectors: &[&str]) -> String {
    cascade::first_match(doc, selectors, Lookup { clean_price: true, ..Lookup::default() })
}

/// Override selector-derived fields with structured data where present.
fn apply_schema(doc: &Document, record: &mut ProductRecord) {
    let Some(product) = schema::extract_schema_product(doc) else {
        return;
    };

    if let Some(name) = product.name {
        record.title = name;
    }
    if let Some(description) = product.description {
        record.description = description;
    }
    if let Some(brand) = product.brand {
        record.brand = brand;
    }
    if let Some(sku) = product.sku {
        record.sku = sku;
    }
    if let Some(price) = product.price {
        record.price = price;
    }
    if let Some(currency) = product.currency {
        record.currency = currency;
    }
    if let Some(availability) = product.availability {
        record.availability = availability;
    }
    if !product.images.is_empty() {
        record.images = product.images;
        record.images.truncate(10);
    }

    record.extraction_method = "schema+selectors".to_string();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PLAIN_PAGE: &str = r#"
        <html>
          <head>
            <title>Widget — Acme Shop</title>
            <meta name="description" content="Buy the widget.">
          </head>
          <body>
            <h1 class="product-title">Widget Deluxe</h1>
            <span class="price">$1,299.00</span>
            <span class="was-price">$1,499.00</span>
            <div class="product-description">A deluxe widget for all needs.</div>
            <span class="brand">Acme</span>
            <span class="sku">WD-100</span>
            <div class="stock-status">In stock</div>
            <div class="product-gallery">
              <img src="https://cdn.acme.example/widget-front.jpg">
              <img src="https://cdn.acme.example/widget-back.jpg">
            </div>
            <table class="product-properties">
              <tr><td>Weight</td><td>2 kg</td></tr>
            </table>
          </body>
        </html>"#;

    #[test]
    fn selector_only_extraction() {
        let options = Options {
            url: Some("https://shop.acme.example/widget".to_string()),
            ..Options::default()
        };
        let record = extract_record(PLAIN_PAGE, &options).unwrap();

        assert_eq!(record.title, "Widget Deluxe");
        assert_eq!(record.price, "1299.00");
        assert_eq!(record.original_price, "1499.00");
        assert_eq!(record.description, "A deluxe widget for all needs.");
        assert_eq!(record.brand, "Acme");
        assert_eq!(record.sku, "WD-100");
        assert_eq!(record.availability, "In stock");
        assert_eq!(record.images.len(), 2);
        assert_eq!(record.specifications, vec!["Weight: 2 kg".to_string()]);
        assert_eq!(record.page_title, "Widget — Acme Shop");
        assert_eq!(record.meta_description, "Buy the widget.");
        assert_eq!(record.url, "https://shop.acme.example/widget");
        assert_eq!(record.domain, "shop.acme.example");
        assert_eq!(record.currency, "USD");
        assert_eq!(record.extraction_method, "selectors");
        assert!(!record.timestamp.is_empty());
    }

    #[test]
    fn schema_overrides_selector_fields() {
        let html = format!(
            r#"{PLAIN_PAGE}
            <script type="application/ld+json">
            {{
                "@type": "Product",
                "name": "Widget Deluxe (2026)",
                "offers": {{"price": "1199.00", "priceCurrency": "EUR"}}
            }}
            </script>"#
        );
        let record = extract_record(&html, &Options::default()).unwrap();

        assert_eq!(record.title, "Widget Deluxe (2026)");
        assert_eq!(record.price, "1199.00");
        assert_eq!(record.currency, "EUR");
        // Fields the schema does not carry keep their selector values
        assert_eq!(record.brand, "Acme");
        assert_eq!(record.original_price, "1499.00");
        assert_eq!(record.extraction_method, "schema+selectors");
    }

    #[test]
    fn invalid_page_url_is_rejected() {
        let options = Options { url: Some("not a url".to_string()), ..Options::default() };
        assert!(matches!(
            extract_record("<html></html>", &options),
            Err(Error::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn missing_fields_stay_empty() {
        let record = extract_record("<html><body><p>nothing</p></body></html>", &Options::default())
            .unwrap();
        assert_eq!(record.title, "");
        assert_eq!(record.price, "");
        assert!(record.images.is_empty());
        assert!(record.specifications.is_empty());
        assert_eq!(record.url, "");
        assert_eq!(record.extraction_method, "selectors");
    }

    #[test]
    fn euro_page_currency_fallback() {
        let html = r#"<body><span class="price">12,50 €</span></body>"#;
        let record = extract_record(html, &Options::default()).unwrap();
        assert_eq!(record.price, "12.50");
        assert_eq!(record.currency, "EUR");
    }
}
