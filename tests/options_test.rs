use pagemark::{convert_with_options, Options};

fn convert(html: &str, options: &Options) -> String {
    convert_with_options(html, options).expect("conversion should succeed")
}

#[test]
fn links_disabled_keeps_anchor_text() {
    let options = Options { include_links: false, ..Options::default() };
    let md = convert(r#"<p>see <a href="https://x.example/">the docs</a></p>"#, &options);
    assert_eq!(md, "see the docs");
}

#[test]
fn images_disabled_removes_them_entirely() {
    let options = Options { include_images: false, ..Options::default() };
    let md = convert(r#"<p>before <img src="https://x.example/i.png" alt="pic"> after</p>"#, &options);
    assert_eq!(md, "before  after");
}

#[test]
fn code_blocks_disabled_emits_raw_text_without_fences() {
    let options = Options { include_code_blocks: false, ..Options::default() };
    let md = convert(r#"<pre class="language-rust">fn main() {}</pre>"#, &options);
    assert_eq!(md, "fn main() {}");
    assert!(!md.contains("```"));
}

#[test]
fn whitespace_collapses_when_not_preserved() {
    let options = Options { preserve_whitespace: false, ..Options::default() };
    let md = convert("<p>a    b\n\tc</p>", &options);
    assert_eq!(md, "a b c");
}

#[test]
fn whitespace_preserved_by_default() {
    let md = convert("<p>a    b</p>", &Options::default());
    assert_eq!(md, "a    b");
}

#[test]
fn toggles_compose() {
    let options = Options {
        include_links: false,
        include_images: false,
        include_tables: false,
        ..Options::default()
    };
    let html = r#"
        <p><a href="https://x.example/">kept text</a></p>
        <img src="https://x.example/i.png" alt="gone">
        <table><tr><td>gone too</td></tr></table>
    "#;
    let md = convert(html, &options);
    assert_eq!(md, "kept text");
}
