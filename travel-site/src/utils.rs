use chrono::NaiveDate;
use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Date format of `<input type="date">` values.
const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date field value (`YYYY-MM-DD`).
///
/// Returns `None` for empty or whitespace-only input, or when parsing fails
/// (logs a warning on parse failure).
pub fn parse_form_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, FORM_DATE_FORMAT).map_or_else(
        |e| {
            tracing::warn!(input = %s, "invalid date: {}", e);
            None
        },
        Some,
    )
}

/// Parses the guest count field.
///
/// Empty input means one guest. Whole numbers too large for `u32` saturate.
/// Fractional values round up, so `3.5` still counts as more than three
/// guests. Anything below one or not a number falls back to one guest, with
/// a warning.
pub fn parse_guest_count(s: &str) -> u32 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 1;
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return match trimmed.parse::<u32>() {
            Ok(0) => {
                tracing::warn!(input = %s, "guest count below one, using 1");
                1
            }
            Ok(count) => count,
            Err(_) => u32::MAX,
        };
    }

    match trimmed.parse::<Decimal>() {
        Ok(value) if value >= Decimal::ONE => value.ceil().to_u32().unwrap_or(u32::MAX),
        Ok(_) => {
            tracing::warn!(input = %s, "guest count below one, using 1");
            1
        }
        Err(e) => {
            tracing::warn!(input = %s, "invalid guest count: {}", e);
            1
        }
    }
}

/// Escapes text for use inside HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
