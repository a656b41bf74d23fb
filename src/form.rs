use crate::models::{AppData, LogEntry};
use crate::validation::{encouragement, LogDraft, ValidationError};
use chrono::NaiveDate;
use std::time::Duration;

pub const DEFAULT_CONFIRM_DELAY: Duration = Duration::from_millis(3000);

/// Receives every entry that passes validation.
pub trait EntrySink {
    fn record(&mut self, entry: LogEntry);
}

impl<F> EntrySink for F
where
    F: FnMut(LogEntry),
{
    fn record(&mut self, entry: LogEntry) {
        self(entry)
    }
}

/// Stores entries under a fixed calendar day.
pub struct DaySink<'a> {
    data: &'a mut AppData,
    date: NaiveDate,
}

impl<'a> DaySink<'a> {
    pub fn new(data: &'a mut AppData, date: NaiveDate) -> Self {
        Self { data, date }
    }
}

impl EntrySink for DaySink<'_> {
    fn record(&mut self, entry: LogEntry) {
        let date = self.date;
        self.data
            .settings
            .started_on
            .get_or_insert_with(|| date.to_string());
        self.data
            .days
            .entry(self.date.to_string())
            .or_default()
            .push(entry);
    }
}

/// Screen shown after a successful save, before the dialog closes itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub entry: LogEntry,
    pub message: &'static str,
    pub closes_after: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogForm {
    pub draft: LogDraft,
    confirm_delay: Duration,
}

impl Default for LogForm {
    fn default() -> Self {
        Self::new(LogDraft::default(), DEFAULT_CONFIRM_DELAY)
    }
}

impl LogForm {
    pub fn new(draft: LogDraft, confirm_delay: Duration) -> Self {
        Self {
            draft,
            confirm_delay,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_valid()
    }

    /// Hands a valid entry to `sink` and resets the draft. An invalid draft is
    /// left as-is and the sink is not called.
    pub fn submit(&mut self, sink: &mut impl EntrySink) -> Result<Confirmation, ValidationError> {
        let entry = self.draft.validate()?;
        let message = encouragement(entry.usage_comparison);
        sink.record(entry.clone());
        self.reset();
        Ok(Confirmation {
            entry,
            message,
            closes_after: self.confirm_delay,
        })
    }

    pub fn reset(&mut self) {
        self.draft = LogDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CravingLevel, Mood, NicotineProduct, UsageComparison};

    fn filled_draft() -> LogDraft {
        LogDraft {
            mood: Some(Mood::Okay),
            craving_level: Some(CravingLevel::Medium),
            note: "long day".into(),
            nicotine_product: Some(NicotineProduct::Vape),
            nicotine_amount: "12mg".into(),
            usage_comparison: Some(UsageComparison::Reduced),
        }
    }

    #[test]
    fn valid_submit_records_and_resets() {
        let mut recorded = Vec::new();
        let mut form = LogForm::new(filled_draft(), Duration::from_secs(3));

        let confirmation = form.submit(&mut |entry: LogEntry| recorded.push(entry)).unwrap();

        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].nicotine_amount.as_deref(), Some("12mg"));
        assert_eq!(confirmation.entry, recorded[0]);
        assert_eq!(confirmation.closes_after, Duration::from_secs(3));
        assert!(confirmation.message.starts_with("Great job cutting back"));
        assert_eq!(form.draft, LogDraft::default());
        assert!(!form.can_submit());
    }

    #[test]
    fn invalid_submit_keeps_state_and_skips_sink() {
        let mut draft = filled_draft();
        draft.nicotine_amount.clear();
        let mut form = LogForm::new(draft.clone(), DEFAULT_CONFIRM_DELAY);
        let mut calls = 0;

        let err = form.submit(&mut |_entry: LogEntry| calls += 1).unwrap_err();

        assert_eq!(err, ValidationError::MissingAmount(NicotineProduct::Vape));
        assert_eq!(calls, 0);
        assert_eq!(form.draft, draft);
    }

    #[test]
    fn day_sink_files_entries_under_date() {
        let mut data = AppData::default();
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let mut form = LogForm::new(filled_draft(), DEFAULT_CONFIRM_DELAY);

        form.submit(&mut DaySink::new(&mut data, date)).unwrap();

        assert_eq!(data.days.get("2026-03-02").map(Vec::len), Some(1));
        assert_eq!(data.settings.started_on.as_deref(), Some("2026-03-02"));

        let mut form = LogForm::new(filled_draft(), DEFAULT_CONFIRM_DELAY);
        let later = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        form.submit(&mut DaySink::new(&mut data, later)).unwrap();
        assert_eq!(data.settings.started_on.as_deref(), Some("2026-03-02"));
    }
}
