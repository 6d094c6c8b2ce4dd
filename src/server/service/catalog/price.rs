//! Minimum price extraction from free-text price ranges.

use std::sync::LazyLock;

use regex::Regex;

static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)UGX\s*([0-9.]+)([kM])?").expect("price pattern is a valid regex")
});

/// Extracts the minimum price from a price range such as `"UGX 800k - 1.2M"`.
///
/// Only the first amount after the `UGX` currency code is read, so a range yields its lower
/// bound. A `k` suffix multiplies by 1,000 and an `M` suffix by 1,000,000, both matched
/// case-insensitively. Text without a readable amount yields `0.0`.
///
/// # Example
/// ```
/// use unistay::server::service::catalog::price::parse_min_price;
///
/// assert_eq!(parse_min_price("UGX 800k - 1.2M"), 800_000.0);
/// assert_eq!(parse_min_price("UGX 1.5M+"), 1_500_000.0);
/// assert_eq!(parse_min_price("Free"), 0.0);
/// ```
pub fn parse_min_price(price_range: &str) -> f64 {
    let Some(captures) = PRICE_PATTERN.captures(price_range) else {
        return 0.0;
    };

    let Some(amount) = captures.get(1).and_then(|m| parse_leading_float(m.as_str())) else {
        return 0.0;
    };

    let multiplier = match captures.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
        Some(suffix) if suffix == "k" => 1_000.0,
        Some(suffix) if suffix == "m" => 1_000_000.0,
        _ => 1.0,
    };

    amount * multiplier
}

/// Reads digits with at most one decimal point, ignoring anything after a second point.
fn parse_leading_float(digits: &str) -> Option<f64> {
    let end = digits
        .match_indices('.')
        .nth(1)
        .map(|(index, _)| index)
        .unwrap_or(digits.len());

    digits[..end].parse::<f64>().ok()
}
