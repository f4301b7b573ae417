//! Lenient numeric reading of free-text fields.
//!
//! Both parsers read the longest numeric prefix, so `"45.5"` is 45 minutes and
//! `"13.2m"` is 13.2 metres. Text with no leading number has no value.

/// Reads an optional sign followed by leading decimal digits. A digit run too
/// long for `i64` saturates rather than losing the value.
pub fn parse_int(raw: &str) -> Option<i64> {
    let text = raw.trim();
    let (sign, digits) = split_sign(text);
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign.saturating_mul(magnitude))
}

/// Reads the longest `[sign]digits[.digits]` prefix.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let (sign, body) = split_sign(text);

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;
    for (index, ch) in body.char_indices() {
        if ch.is_ascii_digit() {
            seen_digit = true;
            end = index + 1;
        } else if ch == '.' && !seen_point {
            seen_point = true;
        } else {
            break;
        }
    }
    if !seen_digit {
        return None;
    }
    let value: f64 = body[..end].parse().ok()?;
    Some(sign as f64 * value)
}

/// [`parse_int`], treating a missing value as zero.
pub fn int_or_zero(raw: &str) -> i64 {
    parse_int(raw).unwrap_or(0)
}

/// [`parse_decimal`], treating a missing value as zero.
pub fn decimal_or_zero(raw: &str) -> f64 {
    parse_decimal(raw).unwrap_or(0.0)
}

fn split_sign(text: &str) -> (i64, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (-1, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (1, rest)
    } else {
        (1, text)
    }
}
