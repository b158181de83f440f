use chrono::{DateTime, Duration, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn hours_from_now(hours: i64) -> DateTime<Utc> {
    now() + Duration::hours(hours)
}
