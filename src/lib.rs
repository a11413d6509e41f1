//! # pagemark
//!
//! HTML to Markdown conversion and product-page data extraction.
//!
//! Two pipelines share one document model:
//!
//! - **Conversion** turns arbitrary HTML into clean Markdown: the tree is
//!   sanitized (scripts, styles, comments removed), transduced node by
//!   node through per-tag formatters, and normalized into tight, readable
//!   output. See [`convert`] and [`convert_with_options`].
//! - **Extraction** mines e-commerce product pages for structured data
//!   (title, prices, brand, images, specifications) by combining CSS
//!   selector cascades with schema.org JSON-LD, and can render the result
//!   as a Markdown report with an embedded machine-readable block. See
//!   [`extract_product`] and [`build_report`].
//!
//! Byte-oriented entry points ([`convert_bytes`], [`extract_product_bytes`])
//! handle documents in legacy charsets by honoring the page's declared
//! encoding before parsing.
//!
//! ## Example
//!
//! ```rust
//! let markdown = pagemark::convert("<h1>Hello</h1><p>World</p>")?;
//! assert_eq!(markdown, "# Hello\n\nWorld");
//! # Ok::<(), pagemark::Error>(())
//! ```

pub mod dom;
pub mod encoding;
pub mod error;
pub mod url_utils;

mod convert;
mod extractor;
mod options;
mod report;
mod sanitize;

pub use error::{Error, Result};
pub use extractor::price::{clean_price, detect_currency};
pub use extractor::ProductRecord;
pub use options::Options;
pub use report::{build_report, AI_METADATA_END, AI_METADATA_START};

/// Convert an HTML string to Markdown with default options.
///
/// # Errors
///
/// Never fails with default options; the `Result` return keeps the
/// signature uniform with [`convert_with_options`].
pub fn convert(html: &str) -> Result<String> {
    convert_with_options(html, &Options::default())
}

/// Convert an HTML string to Markdown.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `options.url` is set but not an
/// absolute URL.
pub fn convert_with_options(html: &str, options: &Options) -> Result<String> {
    convert::convert_html(html, options)
}

/// Convert HTML bytes to Markdown, honoring the document's declared
/// character encoding.
///
/// # Errors
///
/// Never fails with default options; see [`convert_bytes_with_options`].
pub fn convert_bytes(html: &[u8]) -> Result<String> {
    convert_bytes_with_options(html, &Options::default())
}

/// Convert HTML bytes to Markdown with the given options.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `options.url` is set but not an
/// absolute URL.
pub fn convert_bytes_with_options(html: &[u8], options: &Options) -> Result<String> {
    let text = encoding::transcode_to_utf8(html);
    convert_with_options(&text, options)
}

/// Extract product data from an HTML string with default options.
///
/// # Errors
///
/// Never fails with default options; the `Result` return keeps the
/// signature uniform with [`extract_product_with_options`].
pub fn extract_product(html: &str) -> Result<ProductRecord> {
    extract_product_with_options(html, &Options::default())
}

/// Extract product data from an HTML string.
///
/// The record's `url` and `domain` fields are filled from `options.url`
/// when it is set.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `options.url` is set but not an
/// absolute URL.
pub fn extract_product_with_options(html: &str, options: &Options) -> Result<ProductRecord> {
    extractor::extract_record(html, options)
}

/// Extract product data from HTML bytes, honoring the document's declared
/// character encoding.
///
/// # Errors
///
/// Never fails with default options; see
/// [`extract_product_bytes_with_options`].
pub fn extract_product_bytes(html: &[u8]) -> Result<ProductRecord> {
    extract_product_bytes_with_options(html, &Options::default())
}

/// Extract product data from HTML bytes with the given options.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `options.url` is set but not an
/// absolute URL.
pub fn extract_product_bytes_with_options(
    html: &[u8],
    options: &Options,
) -> Result<ProductRecord> {
    let text = encoding::transcode_to_utf8(html);
    extract_product_with_options(&text, options)
}
