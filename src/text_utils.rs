use chrono::{DateTime, FixedOffset};

pub const UNTITLED: &str = "Untitled";
pub const NO_DESCRIPTION: &str = "No description";
pub const NO_DATE: &str = "No date";

pub fn format_date(date_time: &DateTime<FixedOffset>) -> String {
    date_time.format("%Y-%m-%d").to_string()
}

pub fn display_date(date_time: Option<&DateTime<FixedOffset>>) -> String {
    date_time.map(format_date).unwrap_or_else(|| NO_DATE.to_string())
}

pub fn or_fallback<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let date_time = DateTime::parse_from_rfc3339("2017-09-10T10:42:32.123+02:00").unwrap();
        assert_eq!(display_date(Some(&date_time)), "2017-09-10");
        assert_eq!(display_date(None), "No date");
    }

    #[test]
    fn test_or_fallback() {
        assert_eq!(or_fallback(Some("Title"), UNTITLED), "Title");
        assert_eq!(or_fallback(None, UNTITLED), "Untitled");
        assert_eq!(or_fallback(None, NO_DESCRIPTION), "No description");
    }
}
