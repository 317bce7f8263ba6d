use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date-only layouts tried in order. The first is the catalog's own
/// `"September 25, 2021"` style.
const DATE_FORMATS: [&str; 9] = [
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d-%b-%y",
    "%d-%b-%Y",
];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a free-form date string.
///
/// Leading/trailing whitespace is ignored. Datetimes keep only their date
/// part, and a bare `"Month YYYY"` resolves to the first of that month.
///
/// # Returns
/// * `Some(NaiveDate)` when one of the known layouts matches
/// * `None` otherwise; callers treat that as a missing value, never an error
///
/// # Example
/// ```
/// use catalog_cleaner::time::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date(" September 25, 2021"), NaiveDate::from_ymd_opt(2021, 9, 25));
/// assert_eq!(parse_date("not a date"), None);
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    // "%B %Y" has no day field, so chrono cannot build a date from it directly
    NaiveDate::parse_from_str(&format!("1 {}", value), "%d %B %Y").ok()
}

/// Days since the Unix epoch, the physical representation of a polars `Date`.
pub fn date_to_epoch_days(date: NaiveDate) -> i32 {
    (date - DateTime::<Utc>::UNIX_EPOCH.date_naive()).num_days() as i32
}
