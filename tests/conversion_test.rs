use pagemark::{convert, convert_bytes, convert_with_options, Options};

#[test]
fn converts_a_full_document() {
    let html = r#"
        <html>
          <head>
            <title>ignored</title>
            <style>p { color: red }</style>
            <script>track();</script>
          </head>
          <body>
            <!-- nav comment -->
            <h1>Guide</h1>
            <p>Welcome to the <strong>guide</strong>.</p>
            <h2>Steps</h2>
            <ol>
              <li>First</li>
              <li>Second</li>
            </ol>
          </body>
        </html>
    "#;

    let md = convert(html).expect("conversion should succeed");

    assert!(md.starts_with("# Guide"), "got: {md}");
    assert!(md.contains("Welcome to the **guide**."), "got: {md}");
    assert!(md.contains("## Steps"), "got: {md}");
    assert!(md.contains("1. First"), "got: {md}");
    assert!(md.contains("2. Second"), "got: {md}");

    // Nothing from the head or the comment survives
    assert!(!md.contains("color"), "got: {md}");
    assert!(!md.contains("track"), "got: {md}");
    assert!(!md.contains("nav comment"), "got: {md}");
}

#[test]
fn output_is_normalized() {
    let html = "<p>a</p>\n\n\n\n<p>b</p>   \n\n<div>\n\n\n</div><p>c</p>";
    let md = convert(html).expect("conversion should succeed");

    assert!(!md.contains("\n\n\n"), "excess blank lines in: {md:?}");
    for line in md.lines() {
        assert!(!line.ends_with(' ') && !line.ends_with('\t'), "trailing whitespace in: {md:?}");
    }
    assert!(!md.starts_with('\n') && !md.ends_with('\n'), "untrimmed output: {md:?}");
}

#[test]
fn emphasis_markers_hug_their_text() {
    let md = convert("<p><strong> spaced </strong> and <em> also </em></p>")
        .expect("conversion should succeed");
    assert!(md.contains("**spaced**"), "got: {md}");
    assert!(md.contains("*also*"), "got: {md}");
}

#[test]
fn nested_lists_indent_by_depth() {
    let html = r#"
        <ul>
          <li>top
            <ul>
              <li>middle
                <ul><li>deep</li></ul>
              </li>
            </ul>
          </li>
        </ul>
    "#;
    let md = convert(html).expect("conversion should succeed");

    assert!(md.contains("- top"), "got: {md}");
    assert!(md.contains("\n  - middle"), "got: {md}");
    assert!(md.contains("\n    - deep"), "got: {md}");
}

#[test]
fn ordered_list_keeps_tree_positions_after_blank_collapse() {
    let md = convert("<ol><li>a</li><li>b</li></ol><ol><li>x</li></ol>")
        .expect("conversion should succeed");

    assert!(md.contains("1. a\n2. b"), "got: {md}");
    // The second list restarts at its own tree position
    assert!(md.contains("1. x"), "got: {md}");
}

#[test]
fn root_relative_links_resolve_against_page_origin() {
    let options = Options {
        url: Some("https://example.com/docs/page".to_string()),
        ..Options::default()
    };
    let md = convert_with_options(r#"<p><a href="/x">t</a></p>"#, &options)
        .expect("conversion should succeed");
    assert_eq!(md, "[t](https://example.com/x)");
}

#[test]
fn protocol_relative_images_get_https() {
    let md = convert(r#"<p><img src="//cdn.example.com/a.png" alt="a"></p>"#)
        .expect("conversion should succeed");
    assert_eq!(md, "![a](https://cdn.example.com/a.png)");
}

#[test]
fn invalid_base_url_is_an_error() {
    let options = Options { url: Some("nope".to_string()), ..Options::default() };
    assert!(convert_with_options("<p>x</p>", &options).is_err());
}

#[test]
fn plain_text_passes_through() {
    let md = convert("no markup at all").expect("conversion should succeed");
    assert_eq!(md, "no markup at all");
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(convert("").expect("conversion should succeed"), "");
}

#[test]
fn byte_input_honors_declared_charset() {
    let html: &[u8] =
        b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
    let md = convert_bytes(html).expect("conversion should succeed");
    assert_eq!(md, "Caf\u{e9}");
}

#[test]
fn utf8_bytes_convert_directly() {
    let md = convert_bytes("<p>caf\u{e9}</p>".as_bytes()).expect("conversion should succeed");
    assert_eq!(md, "caf\u{e9}");
}
