use crate::models::AppData;
use crate::stats::{current_streak, entries_on, is_smoke_free_day};
use crate::validation::{parse_quit_date, ValidationError};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Average pack price, used for the money-saved figures.
pub const DEFAULT_DAILY_COST_CENTS: u64 = 1200;
pub const CIGARETTES_PER_DAY: u64 = 20;
pub const MINUTES_PER_CIGARETTE: u64 = 11;

const MINUTES_PER_DAY: i64 = 24 * 60;

struct Milestone {
    after_minutes: i64,
    after: &'static str,
    benefit: &'static str,
}

const HEALTH_TIMELINE: &[Milestone] = &[
    Milestone {
        after_minutes: 20,
        after: "20 minutes",
        benefit: "Heart rate and blood pressure drop",
    },
    Milestone {
        after_minutes: 12 * 60,
        after: "12 hours",
        benefit: "Carbon monoxide levels normalize",
    },
    Milestone {
        after_minutes: 14 * MINUTES_PER_DAY,
        after: "2 weeks",
        benefit: "Circulation improves and walking becomes easier",
    },
    Milestone {
        after_minutes: 30 * MINUTES_PER_DAY,
        after: "1 month",
        benefit: "Lung function increases by 30%",
    },
    Milestone {
        after_minutes: 90 * MINUTES_PER_DAY,
        after: "3 months",
        benefit: "Coughing decreases",
    },
    Milestone {
        after_minutes: 365 * MINUTES_PER_DAY,
        after: "1 year",
        benefit: "Heart disease risk drops by 50%",
    },
];

const GETTING_STARTED: &str = "Just Getting Started";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Savings {
    pub saved_cents: u64,
    pub per_day_cents: u64,
    pub per_week_cents: u64,
    pub per_month_cents: u64,
    pub per_year_cents: u64,
}

impl Savings {
    pub fn new(smoke_free_days: u32, daily_cost_cents: u64) -> Self {
        Self {
            saved_cents: u64::from(smoke_free_days).saturating_mul(daily_cost_cents),
            per_day_cents: daily_cost_cents,
            per_week_cents: daily_cost_cents.saturating_mul(7),
            per_month_cents: daily_cost_cents.saturating_mul(30),
            per_year_cents: daily_cost_cents.saturating_mul(365),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthMilestone {
    pub after: &'static str,
    pub benefit: &'static str,
    pub reached: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub smoke_free_days: u32,
    pub smoke_free_minutes: i64,
    pub time_smoke_free: String,
    pub savings: Savings,
    pub money_saved: String,
    pub cigarettes_avoided: u64,
    pub life_regained: String,
    pub health_status: &'static str,
    pub health: Vec<HealthMilestone>,
    pub quit_date: Option<String>,
    pub days_to_goal: Option<i64>,
}

pub fn build_progress(data: &AppData, now: NaiveDateTime, daily_cost_cents: u64) -> ProgressReport {
    let today = now.date();
    let smoke_free_days = smoke_free_day_count(data);
    let smoke_free_minutes = time_smoke_free(data, now).num_minutes();
    let savings = Savings::new(smoke_free_days, daily_cost_cents);
    let cigarettes_avoided = u64::from(smoke_free_days).saturating_mul(CIGARETTES_PER_DAY);
    let health: Vec<HealthMilestone> = HEALTH_TIMELINE
        .iter()
        .map(|m| HealthMilestone {
            after: m.after,
            benefit: m.benefit,
            reached: smoke_free_minutes >= m.after_minutes,
        })
        .collect();
    let health_status = health
        .iter()
        .rev()
        .find(|m| m.reached)
        .map(|m| m.benefit)
        .unwrap_or(GETTING_STARTED);
    let quit_date = data
        .settings
        .quit_date
        .as_deref()
        .and_then(|raw| raw.parse::<NaiveDate>().ok());

    ProgressReport {
        smoke_free_days,
        smoke_free_minutes,
        time_smoke_free: format_span(smoke_free_minutes),
        money_saved: format_dollars(savings.saved_cents),
        savings,
        cigarettes_avoided,
        life_regained: format_short_span(cigarettes_avoided.saturating_mul(MINUTES_PER_CIGARETTE)),
        health_status,
        health,
        quit_date: quit_date.map(|d| d.to_string()),
        days_to_goal: quit_date.map(|d| days_to_goal(d, today)),
    }
}

/// Stores the quit date. Setting a goal also counts as starting the tracker.
pub fn set_quit_date(
    data: &mut AppData,
    raw: &str,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let quit_date = parse_quit_date(raw)?;
    data.settings.quit_date = Some(quit_date.to_string());
    data.settings
        .started_on
        .get_or_insert_with(|| today.to_string());
    Ok(quit_date)
}

pub fn smoke_free_day_count(data: &AppData) -> u32 {
    let count = data
        .days
        .values()
        .filter(|entries| is_smoke_free_day(entries))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Time since the current smoke-free streak began, zero without a streak.
pub fn time_smoke_free(data: &AppData, now: NaiveDateTime) -> Duration {
    let today = now.date();
    let streak = current_streak(data, today);
    if streak == 0 {
        return Duration::zero();
    }
    let last = if entries_on(data, today).is_empty() {
        today - Duration::days(1)
    } else {
        today
    };
    let first = last - Duration::days(i64::from(streak) - 1);
    (now - first.and_time(NaiveTime::MIN)).max(Duration::zero())
}

/// Whole days left until the quit date, never negative.
pub fn days_to_goal(quit_date: NaiveDate, today: NaiveDate) -> i64 {
    (quit_date - today).num_days().max(0)
}

pub fn format_span(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let days = minutes / MINUTES_PER_DAY;
    let hours = minutes % MINUTES_PER_DAY / 60;
    format!(
        "{days} {}, {hours} {}, {} {}",
        unit(days, "day"),
        unit(hours, "hour"),
        minutes % 60,
        unit(minutes % 60, "minute"),
    )
}

/// Compact form used on dashboard tiles, e.g. "3 hrs 45 mins".
pub fn format_short_span(minutes: u64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        return format!("{rest} mins");
    }
    format!("{hours} hrs {rest} mins")
}

pub fn format_dollars(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}.{:02}", cents % 100)
}

fn unit(count: i64, name: &'static str) -> String {
    if count == 1 {
        name.to_string()
    } else {
        format!("{name}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CravingLevel, LogEntry, Mood, NicotineProduct};

    fn log(data: &mut AppData, date: NaiveDate, product: Option<NicotineProduct>) {
        data.days.entry(date.to_string()).or_default().push(LogEntry {
            mood: Mood::Good,
            craving_level: CravingLevel::Low,
            note: String::new(),
            nicotine_product: product,
            nicotine_amount: product.map(|_| "3mg".to_string()),
            usage_comparison: None,
        });
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn nothing_logged_is_just_getting_started() {
        let report = build_progress(&AppData::default(), at(10, 9, 0), DEFAULT_DAILY_COST_CENTS);
        assert_eq!(report.smoke_free_days, 0);
        assert_eq!(report.money_saved, "$0.00");
        assert_eq!(report.time_smoke_free, "0 days, 0 hours, 0 minutes");
        assert_eq!(report.health_status, GETTING_STARTED);
        assert!(report.health.iter().all(|m| !m.reached));
        assert_eq!(report.days_to_goal, None);
    }

    #[test]
    fn savings_follow_smoke_free_days() {
        let mut data = AppData::default();
        log(&mut data, day(1), None);
        log(&mut data, day(2), Some(NicotineProduct::Vape));
        log(&mut data, day(3), None);

        let report = build_progress(&data, at(3, 20, 0), DEFAULT_DAILY_COST_CENTS);
        assert_eq!(report.smoke_free_days, 2);
        assert_eq!(report.savings.saved_cents, 2400);
        assert_eq!(report.money_saved, "$24.00");
        assert_eq!(report.cigarettes_avoided, 40);
        assert_eq!(report.life_regained, "7 hrs 20 mins");
    }

    #[test]
    fn savings_projections_scale_daily_cost() {
        let savings = Savings::new(0, DEFAULT_DAILY_COST_CENTS);
        assert_eq!(format_dollars(savings.per_day_cents), "$12.00");
        assert_eq!(format_dollars(savings.per_week_cents), "$84.00");
        assert_eq!(format_dollars(savings.per_month_cents), "$360.00");
        assert_eq!(format_dollars(savings.per_year_cents), "$4,380.00");
    }

    #[test]
    fn time_smoke_free_starts_at_streak_start() {
        let mut data = AppData::default();
        log(&mut data, day(7), Some(NicotineProduct::Cigarette));
        log(&mut data, day(8), None);
        log(&mut data, day(9), None);

        // today is unlogged; the run began at midnight on the 8th
        let span = time_smoke_free(&data, at(10, 6, 30));
        assert_eq!(span, Duration::hours(54) + Duration::minutes(30));

        let report = build_progress(&data, at(10, 6, 30), DEFAULT_DAILY_COST_CENTS);
        assert_eq!(report.time_smoke_free, "2 days, 6 hours, 30 minutes");
        assert_eq!(report.health_status, "Carbon monoxide levels normalize");
        assert!(report.health[1].reached);
        assert!(!report.health[2].reached);
    }

    #[test]
    fn slip_today_resets_time() {
        let mut data = AppData::default();
        log(&mut data, day(9), None);
        log(&mut data, day(10), Some(NicotineProduct::Pouch));
        assert_eq!(time_smoke_free(&data, at(10, 12, 0)), Duration::zero());
    }

    #[test]
    fn goal_countdown_never_goes_negative() {
        assert_eq!(days_to_goal(day(27), day(10)), 17);
        assert_eq!(days_to_goal(day(10), day(10)), 0);
        assert_eq!(days_to_goal(day(1), day(10)), 0);

        let mut data = AppData::default();
        data.settings.quit_date = Some("2026-03-27".to_string());
        let report = build_progress(&data, at(10, 8, 0), DEFAULT_DAILY_COST_CENTS);
        assert_eq!(report.days_to_goal, Some(17));
        assert_eq!(report.quit_date.as_deref(), Some("2026-03-27"));
    }

    #[test]
    fn setting_a_goal_starts_the_tracker() {
        let mut data = AppData::default();
        assert!(set_quit_date(&mut data, "soon", day(10)).is_err());
        assert_eq!(data.settings.quit_date, None);

        let quit = set_quit_date(&mut data, "2026-04-01", day(10)).unwrap();
        assert_eq!(quit, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_eq!(data.settings.quit_date.as_deref(), Some("2026-04-01"));
        assert_eq!(data.settings.started_on.as_deref(), Some("2026-03-10"));
    }

    #[test]
    fn spans_and_money_format_for_display() {
        assert_eq!(format_span(1 + 60 + MINUTES_PER_DAY), "1 day, 1 hour, 1 minute");
        assert_eq!(format_short_span(45), "45 mins");
        assert_eq!(format_short_span(225), "3 hrs 45 mins");
        assert_eq!(format_dollars(3250), "$32.50");
        assert_eq!(format_dollars(123_456_789), "$1,234,567.89");
    }
}
