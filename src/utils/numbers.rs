//! Digit grouping and amount parsing.

/// Group digits in threes: `1234567` → `"1,234,567"`.
pub fn format_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Indian (lakh/crore) grouping: last three digits, then pairs.
/// `2800000` → `"28,00,000"`.
pub fn format_indian_grouping(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Numeric value of a display amount such as `"₹28,00,000"` or `"$15,500.50"`.
///
/// Currency glyphs, grouping separators and surrounding text are ignored; only
/// the first run of digits (with an optional decimal part) is read.
pub fn parse_amount(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let mut number = String::new();
    let mut seen_dot = false;
    for ch in text[start..].chars() {
        match ch {
            '0'..='9' => number.push(ch),
            ',' => {}
            '.' if !seen_dot => {
                seen_dot = true;
                number.push(ch);
            }
            _ => break,
        }
    }
    number.trim_end_matches('.').parse::<f64>().ok()
}
