//! Markdown report generation.
//!
//! Renders a [`ProductRecord`] as a human-readable Markdown document with
//! a machine-readable JSON block at the end. Sections with no data are
//! omitted entirely rather than rendered empty.

use crate::error::Result;
use crate::extractor::ProductRecord;

/// Opens the machine-readable block at the end of a report.
pub const AI_METADATA_START: &str = "AI_METADATA_START";

/// Closes the machine-readable block at the end of a report.
pub const AI_METADATA_END: &str = "AI_METADATA_END";

/// Build a Markdown product report.
///
/// The report carries a title, a metadata table, pricing, the
/// description, specifications, an image gallery, and page info, followed
/// by the full record as pretty-printed JSON inside an HTML comment
/// fenced by [`AI_METADATA_START`]/[`AI_METADATA_END`]. Downstream tools
/// parse that block; everything above it is for people.
///
/// # Errors
///
/// Returns [`Error::Serialization`](crate::Error::Serialization) when the
/// record cannot be serialized to JSON.
pub fn build_report(record: &ProductRecord) -> Result<String> {
    let mut out = String::new();

    let title = if record.title.is_empty() { "Product Details" } else { &record.title };
    out.push_str(&format!("# {title}\n"));

    metadata_table(&mut out, record);
    pricing_section(&mut out, record);

    if !record.description.is_empty() {
        out.push_str("\n## Description\n\n");
        out.push_str(&record.description);
        out.push('\n');
    }

    if !record.specifications.is_empty() {
        out.push_str("\n## Specifications\n\n");
        for spec in &record.specifications {
            out.push_str(&format!("- {spec}\n"));
        }
    }

    if !record.images.is_empty() {
        out.push_str("\n## Images\n");
        for (i, url) in record.images.iter().enumerate() {
            let n = i + 1;
            out.push_str(&format!(
                "\n### Image {n}\n\n![Image {n}]({url})\n\n**Image URL:** {url}\n"
            ));
        }
    }

    page_info_section(&mut out, record);

    let json = serde_json::to_string_pretty(record)?;
    out.push_str(&format!("\n---\n\n<!-- {AI_METADATA_START}\n{json}\n{AI_METADATA_END} -->\n"));

    Ok(out)
}

/// Provenance table: rows with empty values are dropped, SKU and brand are
/// listed only when found. Omitted entirely when nothing survives.
fn metadata_table(out: &mut String, record: &ProductRecord) {
    let rows = [
        ("URL", record.url.as_str()),
        ("Domain", record.domain.as_str()),
        ("Extracted", record.timestamp.as_str()),
        ("Extraction Method", record.extraction_method.as_str()),
        ("SKU", record.sku.as_str()),
        ("Brand", record.brand.as_str()),
    ];

    let rows: Vec<(&str, &str)> =
        rows.into_iter().filter(|(_, value)| !value.is_empty()).collect();
    if rows.is_empty() {
        return;
    }

    out.push_str("\n## Product Metadata\n\n| Field | Value |\n| --- | --- |\n");
    for (field, value) in rows {
        let value = value.replace('\n', " ").replace('|', "\\|");
        out.push_str(&format!("| {field} | {value} |\n"));
    }
}

fn pricing_section(out: &mut String, record: &ProductRecord) {
    if record.price.is_empty() && record.original_price.is_empty() {
        return;
    }

    out.push_str("\n## Pricing\n");
    if !record.price.is_empty() {
        out.push_str(&format!("\n**Price:** {}\n", with_currency(record, &record.price)));
    }
    // Repeating an identical original price adds no information
    if !record.original_price.is_empty() && record.original_price != record.price {
        out.push_str(&format!(
            "\n**Original Price:** {}\n",
            with_currency(record, &record.original_price)
        ));
    }
    if !record.availability.is_empty() {
        out.push_str(&format!("\n**Availability:** {}\n", record.availability));
    }
}

fn page_info_section(out: &mut String, record: &ProductRecord) {
    if record.page_title.is_empty() {
        return;
    }

    out.push_str(&format!("\n## Page Info\n\n**Page Title:** {}\n", record.page_title));
    if !record.meta_description.is_empty() {
        out.push_str(&format!("\n**Meta Description:** {}\n", record.meta_description));
    }
}

fn with_currency(record: &ProductRecord, amount: &str) -> String {
    if record.currency.is_empty() {
        return amount.to_string();
    }
    format!("{} {amount}", record.currency)
}
