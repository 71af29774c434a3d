use crate::{
    api::{self, Time},
    Locale,
};

pub const INVALID_DATE: &str = "Invalid date";

#[derive(Clone, Copy, Debug)]
enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

const UNITS: [(Unit, i64); 7] = [
    (Unit::Year, 31_536_000),
    (Unit::Month, 2_592_000),
    (Unit::Week, 604_800),
    (Unit::Day, 86_400),
    (Unit::Hour, 3_600),
    (Unit::Minute, 60),
    (Unit::Second, 1),
];

impl Locale {
    fn ago(self, count: i64, unit: Unit) -> String {
        match self {
            Locale::English => {
                let label = match unit {
                    Unit::Year => "year",
                    Unit::Month => "month",
                    Unit::Week => "week",
                    Unit::Day => "day",
                    Unit::Hour => "hour",
                    Unit::Minute => "minute",
                    Unit::Second => "second",
                };
                let plural = if count == 1 { "" } else { "s" };
                format!("{count} {label}{plural} ago")
            }
            Locale::Indonesian => {
                let label = match unit {
                    Unit::Year => "tahun",
                    Unit::Month => "bulan",
                    Unit::Week => "minggu",
                    Unit::Day => "hari",
                    Unit::Hour => "jam",
                    Unit::Minute => "menit",
                    Unit::Second => "detik",
                };
                format!("{count} {label} yang lalu")
            }
        }
    }

    pub fn just_now(self) -> &'static str {
        match self {
            Locale::English => "just now",
            Locale::Indonesian => "baru saja",
        }
    }
}

/// Formats how long before `now` the comment was written.
///
/// Unparseable timestamps are logged and rendered as [`INVALID_DATE`].
/// Timestamps in the future are "just now".
pub fn time_ago(created_at: &str, now: Time, locale: Locale) -> String {
    match api::parse_time(created_at) {
        Ok(date) => format_elapsed(now.signed_duration_since(date).num_seconds(), locale),
        Err(err) => {
            tracing::error!(%err, "cannot compute comment age");
            String::from(INVALID_DATE)
        }
    }
}

pub fn format_elapsed(seconds: i64, locale: Locale) -> String {
    UNITS
        .iter()
        .find_map(|&(unit, len)| {
            let count = seconds / len;
            (count >= 1).then(|| locale.ago(count, unit))
        })
        .unwrap_or_else(|| locale.just_now().to_string())
}
