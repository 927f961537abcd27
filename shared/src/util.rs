//! Display formatting helpers
//!
//! The UI shows times in Russian, "8 марта, 14:30" style. Month names are in
//! the genitive case as rendered after a day number.

use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

fn month_name(dt: DateTime<Utc>) -> &'static str {
    MONTHS_GENITIVE[dt.month0() as usize]
}

/// "8 марта"
pub fn format_day_month(dt: DateTime<Utc>) -> String {
    format!("{} {}", dt.day(), month_name(dt))
}

/// "8 марта, 14:30"
pub fn format_day_month_time(dt: DateTime<Utc>) -> String {
    format!(
        "{} {}, {:02}:{:02}",
        dt.day(),
        month_name(dt),
        dt.hour(),
        dt.minute()
    )
}

/// "8 марта 2025, 14:30"
pub fn format_day_month_year_time(dt: DateTime<Utc>) -> String {
    format!(
        "{} {} {}, {:02}:{:02}",
        dt.day(),
        month_name(dt),
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// Russian plural form of "час" for a whole number of hours.
/// 1 → "час", 2–4 → "часа", everything else → "часов" (the simplified rule
/// the rest of the product uses; 21/22-style endings are not special-cased).
pub fn hours_word(hours: i64) -> &'static str {
    if hours == 1 {
        "час"
    } else if (2..5).contains(&hours) {
        "часа"
    } else {
        "часов"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_day_month_time() {
        let dt = Utc.with_ymd_and_hms(2025, 8, 5, 9, 7, 0).unwrap();
        assert_eq!(format_day_month(dt), "5 августа");
        assert_eq!(format_day_month_time(dt), "5 августа, 09:07");
        assert_eq!(format_day_month_year_time(dt), "5 августа 2025, 09:07");
    }

    #[test]
    fn hour_plural_forms() {
        assert_eq!(hours_word(1), "час");
        assert_eq!(hours_word(2), "часа");
        assert_eq!(hours_word(4), "часа");
        assert_eq!(hours_word(5), "часов");
        assert_eq!(hours_word(23), "часов");
        assert_eq!(hours_word(0), "часов");
    }
}
