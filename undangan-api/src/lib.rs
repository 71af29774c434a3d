use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

mod comment;
pub use comment::{Comment, CommentId, RawReplies};

mod error;
pub use error::Error;

pub type Time = chrono::DateTime<Utc>;

/// Parses a comment timestamp.
///
/// RFC 3339 is what the server sends. Naive date-times and bare dates are
/// also accepted and interpreted as UTC.
pub fn parse_time(s: &str) -> Result<Time, Error> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&t));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| Utc.from_utc_datetime(&t))
        .ok_or_else(|| Error::InvalidTimestamp(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339() {
        assert_eq!(
            parse_time("2024-05-01T10:20:30Z").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap(),
        );
        assert_eq!(
            parse_time("2024-05-01T12:20:30+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap(),
        );
    }

    #[test]
    fn naive_is_utc() {
        assert_eq!(
            parse_time("2024-05-01 10:20:30").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap(),
        );
        assert_eq!(
            parse_time("2024-05-01T10:20:30.250").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap()
                + chrono::Duration::milliseconds(250),
        );
        assert_eq!(
            parse_time("2024-05-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        );
    }

    #[test]
    fn garbage() {
        assert_eq!(
            parse_time("yesterday"),
            Err(Error::InvalidTimestamp(String::from("yesterday"))),
        );
        assert_eq!(parse_time(""), Err(Error::InvalidTimestamp(String::new())));
    }
}
