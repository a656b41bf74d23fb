use chrono::{NaiveDate, NaiveTime};

/// Refresh period of the status-bar clock on the dashboard.
pub const CLOCK_TICK_MS: u64 = 60_000;

pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_24_hour() {
        let time = NaiveTime::from_hms_opt(21, 7, 59).unwrap();
        assert_eq!(format_clock(time), "21:07");
    }

    #[test]
    fn long_date_spells_out_weekday_and_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_long_date(date), "Monday, October 19, 2026");
    }
}
