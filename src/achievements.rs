use crate::models::AppData;
use crate::progress::{smoke_free_day_count, Savings};
use crate::stats::{is_smoke_free_day, longest_run};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    EntriesLogged(u32),
    SmokeFreeRun(u32),
    LoggingRun(u32),
    TrackerCreated,
    QuitDateSet,
    /// Whole dollars saved.
    MoneySaved(u32),
}

struct Definition {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    rule: Rule,
}

const CATALOG: &[Definition] = &[
    Definition {
        id: "journey-begins",
        icon: "\u{1F31F}",
        title: "Journey Begins",
        description: "Logged your first day",
        category: "Milestone",
        rule: Rule::EntriesLogged(1),
    },
    Definition {
        id: "tracker-created",
        icon: "\u{1F3AF}",
        title: "Tracker Created",
        description: "Set up your progress tracking",
        category: "Setup",
        rule: Rule::TrackerCreated,
    },
    Definition {
        id: "quit-date-set",
        icon: "\u{1F3C1}",
        title: "Quit Date Set",
        description: "Committed to a quit date",
        category: "Planning",
        rule: Rule::QuitDateSet,
    },
    Definition {
        id: "first-day",
        icon: "\u{23F0}",
        title: "First Day",
        description: "Complete your first smoke-free day",
        category: "Time",
        rule: Rule::SmokeFreeRun(1),
    },
    Definition {
        id: "one-week",
        icon: "\u{1F5D3}",
        title: "One Week Strong",
        description: "Smoke-free for 7 consecutive days",
        category: "Time",
        rule: Rule::SmokeFreeRun(7),
    },
    Definition {
        id: "monthly-champion",
        icon: "\u{1F3C6}",
        title: "Monthly Champion",
        description: "30 days without smoking",
        category: "Time",
        rule: Rule::SmokeFreeRun(30),
    },
    Definition {
        id: "quarter-master",
        icon: "\u{1F48E}",
        title: "Quarter Master",
        description: "90 days of freedom",
        category: "Time",
        rule: Rule::SmokeFreeRun(90),
    },
    Definition {
        id: "health-warrior",
        icon: "\u{1F4AA}",
        title: "Health Warrior",
        description: "Log 10 days in a row",
        category: "Health",
        rule: Rule::LoggingRun(10),
    },
    Definition {
        id: "money-saver",
        icon: "\u{1F4B0}",
        title: "Money Saver",
        description: "Save your first $100",
        category: "Financial",
        rule: Rule::MoneySaved(100),
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub earned: bool,
    pub progress: u32,
    pub target: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementsResponse {
    pub earned_count: usize,
    pub total: usize,
    pub achievements: Vec<Achievement>,
}

pub fn evaluate(data: &AppData, daily_cost_cents: u64) -> AchievementsResponse {
    let total_entries: u32 = data
        .days
        .values()
        .map(|entries| entries.len() as u32)
        .sum();
    let smoke_free_run = longest_run(data, is_smoke_free_day);
    let logging_run = longest_run(data, |entries| !entries.is_empty());
    let dollars_saved = Savings::new(smoke_free_day_count(data), daily_cost_cents).saved_cents / 100;
    let dollars_saved = u32::try_from(dollars_saved).unwrap_or(u32::MAX);
    let tracker_created = u32::from(data.settings.started_on.is_some());
    let quit_date_set = u32::from(data.settings.quit_date.is_some());

    let achievements: Vec<Achievement> = CATALOG
        .iter()
        .map(|def| {
            let (progress, target) = match def.rule {
                Rule::EntriesLogged(target) => (total_entries, target),
                Rule::SmokeFreeRun(target) => (smoke_free_run, target),
                Rule::LoggingRun(target) => (logging_run, target),
                Rule::TrackerCreated => (tracker_created, 1),
                Rule::QuitDateSet => (quit_date_set, 1),
                Rule::MoneySaved(target) => (dollars_saved, target),
            };
            Achievement {
                id: def.id,
                icon: def.icon,
                title: def.title,
                description: def.description,
                category: def.category,
                earned: progress >= target,
                progress: progress.min(target),
                target,
            }
        })
        .collect();

    AchievementsResponse {
        earned_count: achievements.iter().filter(|a| a.earned).count(),
        total: achievements.len(),
        achievements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CravingLevel, LogEntry, Mood, NicotineProduct};
    use crate::progress::DEFAULT_DAILY_COST_CENTS;
    use chrono::{Duration, NaiveDate};

    fn log(data: &mut AppData, date: NaiveDate, product: Option<NicotineProduct>) {
        data.days.entry(date.to_string()).or_default().push(LogEntry {
            mood: Mood::Okay,
            craving_level: CravingLevel::Medium,
            note: String::new(),
            nicotine_product: product,
            nicotine_amount: None,
            usage_comparison: None,
        });
    }

    fn find<'a>(response: &'a AchievementsResponse, id: &str) -> &'a Achievement {
        response
            .achievements
            .iter()
            .find(|a| a.id == id)
            .expect("achievement in catalog")
    }

    #[test]
    fn nothing_earned_without_logs() {
        let response = evaluate(&AppData::default(), DEFAULT_DAILY_COST_CENTS);
        assert_eq!(response.earned_count, 0);
        assert_eq!(response.total, CATALOG.len());
    }

    #[test]
    fn week_of_smoke_free_days_unlocks_time_milestones() {
        let mut data = AppData::default();
        let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        for offset in 0..7 {
            log(&mut data, start + Duration::days(offset), None);
        }

        let response = evaluate(&data, DEFAULT_DAILY_COST_CENTS);
        assert!(find(&response, "journey-begins").earned);
        assert!(find(&response, "first-day").earned);
        assert!(find(&response, "one-week").earned);
        let monthly = find(&response, "monthly-champion");
        assert!(!monthly.earned);
        assert_eq!(monthly.progress, 7);
        // seven days at $12 is still short of $100
        let saver = find(&response, "money-saver");
        assert!(!saver.earned);
        assert_eq!(saver.progress, 84);
        assert_eq!(response.earned_count, 3);
    }

    #[test]
    fn a_slip_still_counts_toward_logging_run() {
        let mut data = AppData::default();
        let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        for offset in 0..10 {
            let product = (offset == 4).then_some(NicotineProduct::Cigarette);
            log(&mut data, start + Duration::days(offset), product);
        }

        let response = evaluate(&data, DEFAULT_DAILY_COST_CENTS);
        assert!(find(&response, "health-warrior").earned);
        assert_eq!(find(&response, "one-week").progress, 5);
    }

    #[test]
    fn nine_smoke_free_days_save_a_hundred() {
        let mut data = AppData::default();
        let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        for offset in [0, 2, 4, 6, 8, 10, 12, 14, 16] {
            log(&mut data, start + Duration::days(offset), None);
        }

        let response = evaluate(&data, DEFAULT_DAILY_COST_CENTS);
        let saver = find(&response, "money-saver");
        assert!(saver.earned);
        assert_eq!(saver.progress, 100);
        assert!(!find(&response, "one-week").earned);
    }

    #[test]
    fn setup_achievements_follow_settings() {
        let mut data = AppData::default();
        data.settings.started_on = Some("2026-02-01".to_string());

        let response = evaluate(&data, DEFAULT_DAILY_COST_CENTS);
        assert!(find(&response, "tracker-created").earned);
        let quit = find(&response, "quit-date-set");
        assert!(!quit.earned);
        assert_eq!((quit.progress, quit.target), (0, 1));

        data.settings.quit_date = Some("2026-03-01".to_string());
        let response = evaluate(&data, DEFAULT_DAILY_COST_CENTS);
        assert!(find(&response, "quit-date-set").earned);
        assert_eq!(response.earned_count, 2);
    }
}
