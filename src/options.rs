//! Configuration options for conversion and extraction.
//!
//! The `Options` struct is fixed at the start of a call and read-only for
//! its lifetime. Child conversions never see a different configuration.

/// Configuration options for HTML conversion and product extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use pagemark::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     include_links: false,
///     url: Some("https://shop.example.com/item/42".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Pass ordinary text nodes through verbatim.
    ///
    /// When disabled, runs of whitespace in text nodes collapse to a single
    /// space. Table cell text always collapses regardless of this flag.
    ///
    /// Default: `true`
    pub preserve_whitespace: bool,

    /// Render `<img>` elements as Markdown image references.
    ///
    /// When disabled, images produce no output at all.
    ///
    /// Default: `true`
    pub include_images: bool,

    /// Render `<a>` elements as Markdown links.
    ///
    /// When disabled, anchors pass their content through unchanged.
    ///
    /// Default: `true`
    pub include_links: bool,

    /// Render `<table>` elements as pipe tables.
    ///
    /// When disabled, tables produce no output at all.
    ///
    /// Default: `true`
    pub include_tables: bool,

    /// Render `<pre>` elements as fenced code blocks.
    ///
    /// When disabled, the raw text of the block is emitted without fences.
    ///
    /// Default: `true`
    pub include_code_blocks: bool,

    /// Source URL of the document.
    ///
    /// When provided, root-relative link and image URLs (`/path`) are
    /// resolved against this URL's origin, and the extractor fills the
    /// `url`/`domain` fields of its record from it. Must be an absolute
    /// URL; anything else is rejected with `Error::InvalidBaseUrl`.
    ///
    /// Default: `None`
    pub url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            preserve_whitespace: true,
            include_images: true,
            include_links: true,
            include_tables: true,
            include_code_blocks: true,
            url: None,
        }
    }
}
