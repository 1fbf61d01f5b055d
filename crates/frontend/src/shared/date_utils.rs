//! Date formatting for tables and forms
//!
//! The backend sends `YYYY-MM-DD` or full ISO timestamps; tables show `DD/MM/YYYY`.

use chrono::NaiveDate;

/// Format ISO date string to DD/MM/YYYY format
/// Example: "1996-07-04" or "1996-07-04T00:00:00.000+00:00" -> "04/07/1996"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// `format_date` for optional values; missing dates render as `-`
pub fn format_opt_date(date_str: Option<&str>) -> String {
    match date_str.map(str::trim) {
        Some(d) if !d.is_empty() => format_date(d),
        _ => "-".to_string(),
    }
}

/// Value for `<input type="date">`: the `YYYY-MM-DD` prefix
pub fn date_input_value(date_str: &str) -> String {
    date_str.get(..10).unwrap_or(date_str).to_string()
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("1996-07-04"), "04/07/1996");
        assert_eq!(format_date("1996-07-04T00:00:00.000+00:00"), "04/07/1996");
    }

    #[test]
    fn test_format_opt_date() {
        assert_eq!(format_opt_date(Some("1998-05-06")), "06/05/1998");
        assert_eq!(format_opt_date(Some("  ")), "-");
        assert_eq!(format_opt_date(None), "-");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("1996-07-04T00:00:00Z"), "1996-07-04");
        assert_eq!(date_input_value("1996-07"), "1996-07");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
