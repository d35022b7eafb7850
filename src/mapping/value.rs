//! Attribute values and their wire coercions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

/// Value of a single entity attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Date(DateTime<Utc>),
}

/// Formats accepted for naive date/time text, tried in order after RFC 3339
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y"];

impl FieldValue {
    /// Empty text and empty lists are never sent over the wire
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Date(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Text embedded in a `<field>` element
    pub fn to_wire_text(&self, delimiter: &str) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(delimiter),
            Self::Date(d) => d.timestamp().to_string(),
        }
    }
}

/// Epoch-second string for date values; other values pass through unchanged.
///
/// Lists are joined with a comma, which only matters for ad-hoc parameters.
pub fn to_timestamp(value: &FieldValue) -> String {
    match value {
        FieldValue::Date(d) => d.timestamp().to_string(),
        FieldValue::Text(s) => s.clone(),
        FieldValue::List(items) => items.join(","),
    }
}

/// Best-effort date parsing for date-typed fields. Naive values are read as UTC.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let digits = text.strip_prefix('-').unwrap_or(text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse::<i64>().ok().and_then(|secs| DateTime::from_timestamp(secs, 0));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldValue {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value.and_utc())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wire_text() {
        assert_eq!(FieldValue::from("Jane").to_wire_text("*/*"), "Jane");
        assert_eq!(FieldValue::from(vec!["vip", "lead"]).to_wire_text("*/*"), "vip*/*lead");

        let date = Utc.with_ymd_and_hms(2012, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(FieldValue::from(date).to_wire_text("*/*"), "1328054400");
    }

    #[test]
    fn test_emptiness() {
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::List(Vec::new()).is_empty());
        assert!(!FieldValue::from(" ").is_empty());
        assert!(!FieldValue::from(Utc::now()).is_empty());
    }

    #[test]
    fn test_naive_date_is_midnight_utc() {
        let day = NaiveDate::from_ymd_opt(2012, 2, 1).unwrap();
        assert_eq!(to_timestamp(&FieldValue::from(day)), "1328054400");
    }

    #[test]
    fn test_timestamp_passthrough() {
        assert_eq!(to_timestamp(&FieldValue::from("1328054400")), "1328054400");
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = Utc.with_ymd_and_hms(2012, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("1328054400"), Some(expected));
        assert_eq!(parse_date("2012-02-01"), Some(expected));
        assert_eq!(parse_date("02/01/2012"), Some(expected));
        assert_eq!(parse_date("2012-02-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_date("2012-02-01 00:00:00"), Some(expected));
        assert_eq!(
            parse_date("2012-02-01T02:00:00+02:00"),
            Some(expected),
        );
    }

    #[test]
    fn test_pre_epoch_timestamps() {
        let date = Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(FieldValue::from(date).to_wire_text("*/*"), "-315619200");
        assert_eq!(parse_date("-315619200"), Some(date));
        assert_eq!(parse_date("-"), None);
    }

    #[test]
    fn test_parse_date_failures() {
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2012-13-45"), None);
    }
}
