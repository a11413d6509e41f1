//! JSON-LD structured-data extraction.
//!
//! Product pages frequently embed a schema.org `Product` object in
//! `<script type="application/ld+json">` blocks. When present it is the
//! most reliable source and overrides selector-derived fields one by one.
//! Malformed blocks are logged and skipped; structured data is an upgrade,
//! never a hard requirement.

use log::warn;
use serde_json::Value;

use crate::dom::Document;
use crate::extractor::price::clean_price;

/// Fields recovered from a schema.org `Product` object. Every field is
/// optional; `None` leaves the selector-derived value in place.
#[derive(Debug, Clone, Default)]
pub(crate) struct SchemaProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub availability: Option<String>,
    pub images: Vec<String>,
}

impl SchemaProduct {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.brand.is_none()
            && self.sku.is_none()
            && self.price.is_none()
            && self.currency.is_none()
            && self.availability.is_none()
            && self.images.is_empty()
    }
}

/// Scan the document's JSON-LD blocks for the first `Product` object.
pub(crate) fn extract_schema_product(doc: &Document) -> Option<SchemaProduct> {
    for script in doc.select(r#"script[type="application/ld+json"]"#).iter() {
        let raw = script.text().to_string();
        if raw.trim().is_empty() {
            continue;
        }

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("skipping malformed JSON-LD block: {err}");
                continue;
            }
        };

        if let Some(product) = find_product(&value) {
            let parsed = parse_product(product);
            if !parsed.is_empty() {
                return Some(parsed);
            }
        }
    }

    None
}

/// A `Product` object either at the top level or inside a top-level array.
fn find_product(value: &Value) -> Option<&Value> {
    if is_product(value) {
        return Some(value);
    }
    if let Value::Array(items) = value {
        return items.iter().find(|item| is_product(item));
    }
    None
}

fn is_product(value: &Value) -> bool {
    value.get("@type").and_then(Value::as_str) == Some("Product")
}

fn parse_product(product: &Value) -> SchemaProduct {
    let mut out = SchemaProduct {
        name: string_field(product, "name"),
        description: string_field(product, "description"),
        brand: brand_name(product),
        sku: identifier(product),
        ..SchemaProduct::default()
    };

    // Offers: first of an array, or the object itself
    if let Some(offer) = first_offer(product) {
        out.price = offer_price(offer);
        out.currency = string_field(offer, "priceCurrency");
        out.availability = string_field(offer, "availability");
    }

    out.images = image_urls(product);
    out
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `brand` is either a plain string or an object with a `name`.
fn brand_name(product: &Value) -> Option<String> {
    match product.get("brand") {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(obj @ Value::Object(_)) => string_field(obj, "name"),
        _ => None,
    }
}

/// `sku`, falling back to the GTIN variants some shops publish instead.
fn identifier(product: &Value) -> Option<String> {
    ["sku", "gtin", "gtin13", "gtin12", "gtin8"]
        .into_iter()
        .find_map(|key| string_field(product, key))
}

fn first_offer(product: &Value) -> Option<&Value> {
    match product.get("offers") {
        Some(Value::Array(offers)) => offers.first(),
        Some(offer @ Value::Object(_)) => Some(offer),
        _ => None,
    }
}

/// `price` may be a JSON string or a bare number.
fn offer_price(offer: &Value) -> Option<String> {
    match offer.get("price") {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(clean_price(s)),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// `image` is a string, an object with a `url`, or an array of either.
fn image_urls(product: &Value) -> Vec<String> {
    let Some(image) = product.get("image") else {
        return Vec::new();
    };

    let items: Vec<&Value> = match image {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    items.into_iter().filter_map(image_url).collect()
}

fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        obj @ Value::Object(_) => string_field(obj, "url"),
        _ => None,
    }
}
