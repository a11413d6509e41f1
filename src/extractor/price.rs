//! Price text cleanup and currency detection.

/// Reduce a price string to digits and a decimal point.
///
/// Currency symbols and other text are dropped first. Separator handling:
/// when both comma and period appear the comma is a thousands separator;
/// when only a comma appears it is treated as a decimal separator if at
/// most two digits follow the last comma, and as a thousands separator
/// otherwise. Three digits after the comma are ambiguous ("1,234") and
/// deliberately resolve to the thousands reading.
#[must_use]
pub fn clean_price(price_text: &str) -> String {
    let mut cleaned: String = price_text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    let has_comma = cleaned.contains(',');
    let has_period = cleaned.contains('.');

    if has_comma && has_period {
        cleaned.retain(|c| c != ',');
    } else if has_comma {
        let after_comma = cleaned.rsplit(',').next().unwrap_or("");
        if after_comma.len() <= 2 {
            // European decimal format: replace the last comma only
            if let Some(pos) = cleaned.rfind(',') {
                cleaned.replace_range(pos..=pos, ".");
            }
        } else {
            cleaned.retain(|c| c != ',');
        }
    }

    cleaned
}

/// Guess the currency from visible page text.
///
/// Fallback only, used when neither structured data nor a selector match
/// supplies an explicit currency.
#[must_use]
pub fn detect_currency(page_text: &str) -> &'static str {
    if page_text.contains('¥') || page_text.contains('￥') || page_text.contains("RMB") {
        "CNY"
    } else if page_text.contains('$') || page_text.contains("USD") {
        "USD"
    } else if page_text.contains('€') || page_text.contains("EUR") {
        "EUR"
    } else if page_text.contains('£') || page_text.contains("GBP") {
        "GBP"
    } else {
        "USD"
    }
}
