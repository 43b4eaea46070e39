use chrono::{DateTime, NaiveDate};

fn currency_symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "IDR" => Some("Rp"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().rev().collect();
    let mut out = Vec::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_currency(amount: f64, code: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_part);
    match currency_symbol_for(code) {
        Some(symbol) => format!("{}{}{}.{}", sign, symbol, grouped, frac_part),
        None => format!("{}{} {}.{}", sign, code, grouped, frac_part),
    }
}

// Accepts both plain calendar dates and full timestamps; anything that
// fails to parse is shown verbatim.
pub fn format_date(value: Option<&str>) -> String {
    let raw = match value {
        Some(v) if !v.is_empty() => v,
        _ => return "-".to_string(),
    };
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_usd_renders_a_currency_formatted_zero() {
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
    }

    #[test]
    fn amounts_are_grouped_and_signed() {
        assert_eq!(format_currency(1234567.5, "USD"), "$1,234,567.50");
        assert_eq!(format_currency(-980.25, "EUR"), "-€980.25");
    }

    #[test]
    fn unknown_codes_fall_back_to_the_code_itself() {
        assert_eq!(format_currency(1500.0, "SGD"), "SGD 1,500.00");
    }

    #[test]
    fn missing_dates_render_a_dash() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
    }

    #[test]
    fn calendar_dates_and_timestamps_render_medium_style() {
        assert_eq!(format_date(Some("2026-01-05")), "Jan 5, 2026");
        assert_eq!(format_date(Some("2026-01-05T08:30:00Z")), "Jan 5, 2026");
    }

    #[test]
    fn unparseable_dates_pass_through_unchanged() {
        assert_eq!(format_date(Some("not-a-date")), "not-a-date");
    }
}
