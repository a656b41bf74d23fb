use crate::chart::BarChart;
use crate::models::{AppData, LogEntry, UsageComparison};
use crate::validation::parse_milligrams;
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

pub const DAYS_SHOWN: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub entries: usize,
    pub craving: Option<f64>,
    pub mood: Option<f64>,
    pub nicotine_mg: f64,
    pub smoke_free: bool,
    pub reduced: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub today_mg: f64,
    pub average_mg: Option<f64>,
    pub change_pct: Option<f64>,
    pub current_streak: u32,
    pub logged_days: usize,
    pub progress_dots: Vec<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub last_7_days: Vec<DailyPoint>,
    pub craving_chart: BarChart,
    pub mood_chart: BarChart,
    pub intake_chart: BarChart,
    pub summary: Summary,
}

pub fn build_stats(data: &AppData) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), data)
}

pub fn build_stats_at(today: NaiveDate, data: &AppData) -> StatsResponse {
    let mut last_7_days = Vec::with_capacity(DAYS_SHOWN);
    for offset in (0..DAYS_SHOWN).rev() {
        let date = today - Duration::days(offset as i64);
        last_7_days.push(daily_point(date, entries_on(data, date)));
    }

    let labels: Vec<String> = last_7_days
        .iter()
        .map(|day| weekday_label(&day.date))
        .collect();
    let cravings: Vec<Option<f64>> = last_7_days.iter().map(|d| d.craving).collect();
    let moods: Vec<Option<f64>> = last_7_days.iter().map(|d| d.mood).collect();
    let intake: Vec<f64> = last_7_days.iter().map(|d| d.nicotine_mg).collect();

    let summary = summarize(today, data, &last_7_days);

    StatsResponse {
        craving_chart: BarChart::with_gaps(labels.clone(), &cravings),
        mood_chart: BarChart::with_gaps(labels.clone(), &moods),
        intake_chart: BarChart::new(labels, &intake),
        last_7_days,
        summary,
    }
}

fn summarize(today: NaiveDate, data: &AppData, week: &[DailyPoint]) -> Summary {
    let today_mg = total_mg(entries_on(data, today));

    let previous: Vec<f64> = (1..DAYS_SHOWN as i64)
        .map(|offset| entries_on(data, today - Duration::days(offset)))
        .filter(|entries| !entries.is_empty())
        .map(total_mg)
        .collect();
    let average_mg = if previous.is_empty() {
        None
    } else {
        Some(previous.iter().fold(0.0, |sum, mg| sum + mg) / previous.len() as f64)
    };
    let change_pct = average_mg
        .filter(|avg| *avg > 0.0)
        .map(|avg| ((today_mg - avg) / avg * 100.0).round());

    Summary {
        today_mg,
        average_mg,
        change_pct,
        current_streak: current_streak(data, today),
        logged_days: data.days.values().filter(|entries| !entries.is_empty()).count(),
        progress_dots: week.iter().map(|day| day.smoke_free || day.reduced).collect(),
    }
}

fn daily_point(date: NaiveDate, entries: &[LogEntry]) -> DailyPoint {
    DailyPoint {
        date: date.to_string(),
        entries: entries.len(),
        craving: average(entries.iter().map(|e| e.craving_level.score())),
        mood: average(entries.iter().map(|e| e.mood.score())),
        nicotine_mg: total_mg(entries),
        smoke_free: is_smoke_free_day(entries),
        reduced: entries
            .iter()
            .any(|e| e.usage_comparison == Some(UsageComparison::Reduced)),
    }
}

pub fn entries_on(data: &AppData, date: NaiveDate) -> &[LogEntry] {
    data.days
        .get(&date_key(date))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Milligrams logged yesterday, or `None` when nothing was logged.
pub fn yesterday_mg(data: &AppData, today: NaiveDate) -> Option<f64> {
    let entries = entries_on(data, today - Duration::days(1));
    (!entries.is_empty()).then(|| total_mg(entries))
}

pub fn total_mg(entries: &[LogEntry]) -> f64 {
    entries
        .iter()
        .filter_map(|e| e.nicotine_amount.as_deref())
        .filter_map(parse_milligrams)
        .fold(0.0, |total, mg| total + mg)
}

pub fn is_smoke_free_day(entries: &[LogEntry]) -> bool {
    !entries.is_empty() && entries.iter().all(LogEntry::is_smoke_free)
}

/// Consecutive smoke-free days ending today. Today only counts once logged,
/// so an unlogged today does not break yesterday's run.
pub fn current_streak(data: &AppData, today: NaiveDate) -> u32 {
    let start = if entries_on(data, today).is_empty() {
        today - Duration::days(1)
    } else {
        today
    };

    let mut streak = 0;
    let mut date = start;
    while is_smoke_free_day(entries_on(data, date)) {
        streak += 1;
        date -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive calendar days whose entries satisfy `pred`.
pub fn longest_run(data: &AppData, pred: impl Fn(&[LogEntry]) -> bool) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for (key, entries) in &data.days {
        let Ok(date) = key.parse::<NaiveDate>() else {
            continue;
        };
        if !pred(entries.as_slice()) {
            run = 0;
            previous = None;
            continue;
        }
        run = match previous {
            Some(prev) if date - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(date);
    }
    best
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn weekday_label(date: &str) -> String {
    date.parse::<NaiveDate>()
        .map(|d| d.weekday().to_string())
        .unwrap_or_else(|_| date.to_string())
}
