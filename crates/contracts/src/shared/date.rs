use chrono::NaiveDate;

/// Parse the date part of an ISO string: `2024-03-15`, `2024-03-15T10:30:00`, `2024-03-15 10:30`
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let expected = NaiveDate::from_ymd_opt(1996, 7, 4);
        assert_eq!(parse_iso_date("1996-07-04"), expected);
        assert_eq!(parse_iso_date("1996-07-04T00:00:00"), expected);
        assert_eq!(parse_iso_date(" 1996-07-04 10:00 "), expected);
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("04.07.1996"), None);
    }
}
