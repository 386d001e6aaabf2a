//! Currency string handling.
//!
//! Upstream prices arrive pre-formatted (`"$1,250.00"`, `"From $12.50"`,
//! ranges such as `"$45.00 - $60.00"` or `"$99.99-$199.99"` for variable
//! products). Sorting needs a number; anything without digits sorts as zero.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

/// Parse a formatted price into a number. Takes the first run of digits,
/// commas and at most one dot, so ranges yield their first price whatever
/// separates them.
#[must_use]
pub fn parse_price(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let Some(start) = raw.find(|c: char| c.is_ascii_digit()) else {
        return 0.0;
    };

    let mut number = String::new();
    let mut seen_dot = false;
    for c in raw[start..].chars() {
        match c {
            '0'..='9' => number.push(c),
            ',' if !seen_dot => {}
            '.' if !seen_dot => {
                seen_dot = true;
                number.push(c);
            }
            _ => break,
        }
    }

    number
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
