use chrono::{DateTime, NaiveDate, Utc};

/// Calendar date of `instant` in UTC. Dashboard dates (expense dates,
/// goal target dates) are all UTC dates.
pub fn date_from_utc(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

pub fn today_utc() -> NaiveDate {
    date_from_utc(Utc::now())
}
