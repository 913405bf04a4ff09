use chrono::{Duration, NaiveDate};

/// Projects a simulated duration in weeks onto the calendar. Fractional weeks
/// (from interpolated percentiles) round up to whole days.
pub fn project_completion_date(start_date: NaiveDate, weeks: f32) -> NaiveDate {
    let days = (weeks * 7.0).ceil().max(0.0) as i64;
    start_date + Duration::days(days)
}
