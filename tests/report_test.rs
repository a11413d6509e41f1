use pagemark::{build_report, extract_product_with_options, Options, AI_METADATA_END, AI_METADATA_START};

const PRODUCT_PAGE: &str = r#"
<html>
<head><title>Trail Boot 45 | OutdoorShop</title></head>
<body>
  <h1 class="product-title">Trail Boot 45</h1>
  <span class="price">€ 129,90</span>
  <div class="product-description">Waterproof hiking boot.</div>
  <span class="brand">Alpina</span>
  <ul class="product-features">
    <li>Vibram sole</li>
    <li>Gore-Tex lining</li>
  </ul>
  <div class="product-image"><img src="https://cdn.outdoor.example/boot45.jpg"></div>
</body>
</html>
"#;

#[test]
fn extract_then_report_round_trip() {
    let options = Options {
        url: Some("https://outdoor.example/boots/45".to_string()),
        ..Options::default()
    };
    let record = extract_product_with_options(PRODUCT_PAGE, &options).expect("extraction");
    let report = build_report(&record).expect("report");

    assert!(report.starts_with("# Trail Boot 45\n"), "got: {report}");
    assert!(report.contains("| URL | https://outdoor.example/boots/45 |"), "got: {report}");
    assert!(report.contains("| Domain | outdoor.example |"), "got: {report}");
    assert!(report.contains("| Brand | Alpina |"), "got: {report}");
    assert!(report.contains("| Extraction Method | selectors |"), "got: {report}");
    assert!(report.contains("**Price:** EUR 129.90"), "got: {report}");
    assert!(report.contains("## Description\n\nWaterproof hiking boot."), "got: {report}");
    assert!(report.contains("- Vibram sole"), "got: {report}");
    assert!(report.contains("- Gore-Tex lining"), "got: {report}");
    assert!(report.contains("![Image 1](https://cdn.outdoor.example/boot45.jpg)"), "got: {report}");
    assert!(report.contains("**Page Title:** Trail Boot 45 | OutdoorShop"), "got: {report}");
}

#[test]
fn machine_block_is_valid_json_matching_the_record() {
    let record = extract_product_with_options(PRODUCT_PAGE, &Options::default()).expect("extraction");
    let report = build_report(&record).expect("report");

    let start = report.find(AI_METADATA_START).expect("start marker") + AI_METADATA_START.len();
    let end = report.find(AI_METADATA_END).expect("end marker");
    let parsed: serde_json::Value = serde_json::from_str(&report[start..end]).expect("valid JSON");

    assert_eq!(parsed["title"], "Trail Boot 45");
    assert_eq!(parsed["price"], "129.90");
    assert_eq!(parsed["currency"], "EUR");
    assert_eq!(parsed["extractionMethod"], "selectors");
    assert_eq!(parsed["specifications"][0], "Vibram sole");
}

#[test]
fn machine_block_sits_after_a_rule_at_the_end() {
    let record = extract_product_with_options(PRODUCT_PAGE, &Options::default()).expect("extraction");
    let report = build_report(&record).expect("report");

    let rule = report.rfind("\n---\n").expect("closing rule");
    let start = report.find(AI_METADATA_START).expect("start marker");
    assert!(rule < start, "rule should precede the metadata block");
    assert!(report.trim_end().ends_with("-->"), "got tail: {}", &report[report.len() - 40..]);
}
