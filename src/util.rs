// Display formatting shared by the view-model builders. Separator and
// precision rules live here and nowhere else.

/// Format an integer with comma separators, e.g. 2854312 -> "2,854,312".
pub fn group_digits(n: u64) -> String {
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

/// Format a signed count in millions, e.g. 2561201 -> "+2.56M".
pub fn fmt_millions(n: i64) -> String {
    let sign = if n > 0 { "+" } else { "" };
    format!("{}{:.2}M", sign, n as f64 / 1_000_000.0)
}

/// Format a percentage with an explicit plus sign on growth,
/// e.g. 16.2 -> "+16.2%".
pub fn signed_pct(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{}%", pct)
    } else {
        format!("{}%", pct)
    }
}
