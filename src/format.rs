// Display formatting for listing cards, US conventions.

/// Whole US dollars, grouped: `23000.0` → `"$23,000"`. Rounds half away from zero.
pub fn format_price(price: f64) -> String {
    let rounded = price.round();
    let digits = group_thousands(rounded.abs() as u64);

    if rounded < 0.0 {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// Grouped integer: `45210` → `"45,210"`.
pub fn format_mileage(mileage: i64) -> String {
    let digits = group_thousands(mileage.unsigned_abs());

    if mileage < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// One fractional digit: `7.0` → `"7.0"`, `8.25` → `"8.3"`.
///
/// Exact ties round up. A one-digit tie is only representable as a binary
/// fraction ending in .25 or .75, so those are handled explicitly and every
/// other value goes through the standard formatter, which rounds the exact
/// stored value.
pub fn format_score(score: f64) -> String {
    let is_tie = (score * 4.0).fract() == 0.0 && (score * 2.0).fract() != 0.0;

    if is_tie {
        format!("{:.1}", (score * 10.0).round() / 10.0)
    } else {
        format!("{score:.1}")
    }
}

fn group_thousands(n: u64) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);

    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
