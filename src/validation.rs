use crate::models::{
    CravingLevel, LogEntry, LogFormInput, Mood, NicotineProduct, UnknownVariant, UsageComparison,
};
use chrono::NaiveDate;
use std::str::FromStr;

pub const MAX_MESSAGE_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Mood is required")]
    MissingMood,
    #[error("Craving level is required")]
    MissingCraving,
    #[error("Nicotine amount is required for {}", .0.plural())]
    MissingAmount(NicotineProduct),
    #[error("unknown {field} value '{value}'")]
    UnknownValue { field: &'static str, value: String },
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Message must be at most {max} characters")]
    MessageTooLong { max: usize },
    #[error("Quit date must be a date like 2026-11-05")]
    InvalidDate(String),
}

impl From<UnknownVariant> for ValidationError {
    fn from(err: UnknownVariant) -> Self {
        ValidationError::UnknownValue {
            field: err.field,
            value: err.value,
        }
    }
}

/// In-progress log form. Selections stay optional until the entry is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogDraft {
    pub mood: Option<Mood>,
    pub craving_level: Option<CravingLevel>,
    pub note: String,
    pub nicotine_product: Option<NicotineProduct>,
    pub nicotine_amount: String,
    pub usage_comparison: Option<UsageComparison>,
}

impl LogDraft {
    pub fn from_input(input: LogFormInput) -> Result<Self, ValidationError> {
        Ok(Self {
            mood: parse_choice(&input.mood)?,
            craving_level: parse_choice(&input.craving_level)?,
            note: input.note,
            nicotine_product: parse_choice(&input.nicotine_product)?,
            nicotine_amount: input.nicotine_amount,
            usage_comparison: parse_choice(&input.usage_comparison)?,
        })
    }

    pub fn amount_required(&self) -> bool {
        self.nicotine_product
            .is_some_and(NicotineProduct::requires_amount)
    }

    fn amount_missing(&self) -> bool {
        self.amount_required() && self.nicotine_amount.trim().is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.mood.is_some() && self.craving_level.is_some() && !self.amount_missing()
    }

    /// Inline message for the form. Only a missing required amount produces
    /// one; unselected mood or craving just keeps the button disabled.
    pub fn validation_message(&self) -> Option<String> {
        match self.nicotine_product {
            Some(product) if self.amount_missing() => {
                Some(ValidationError::MissingAmount(product).to_string())
            }
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<LogEntry, ValidationError> {
        let mood = self.mood.ok_or(ValidationError::MissingMood)?;
        let craving_level = self.craving_level.ok_or(ValidationError::MissingCraving)?;
        if let Some(product) = self.nicotine_product {
            if self.amount_missing() {
                return Err(ValidationError::MissingAmount(product));
            }
        }

        let amount = self.nicotine_amount.trim();
        Ok(LogEntry {
            mood,
            craving_level,
            note: self.note.clone(),
            nicotine_product: self.nicotine_product,
            nicotine_amount: (!amount.is_empty()).then(|| amount.to_string()),
            usage_comparison: self.usage_comparison,
        })
    }

    pub fn amount_placeholder(&self) -> &'static str {
        match self.nicotine_product {
            Some(NicotineProduct::Cigarette) => "e.g., 12mg (optional)",
            Some(NicotineProduct::Vape) => "e.g., 6mg, 12mg, 18mg",
            Some(NicotineProduct::Pouch) => "e.g., 2mg, 4mg, 6mg",
            None => "Enter nicotine amount",
        }
    }
}

fn parse_choice<T>(raw: &str) -> Result<Option<T>, ValidationError>
where
    T: FromStr<Err = UnknownVariant>,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Ok(Some(raw.parse()?))
}

/// Message shown on the confirmation screen after a save.
pub fn encouragement(comparison: Option<UsageComparison>) -> &'static str {
    match comparison {
        Some(UsageComparison::Reduced) => {
            "Great job cutting back again today! You're building incredible momentum."
        }
        Some(UsageComparison::Same) => {
            "Consistency is key! Maintaining your level shows great self-control. Keep it up!"
        }
        Some(UsageComparison::Increased) => {
            "That's okay - progress isn't always linear. Tomorrow is a new opportunity to reduce again."
        }
        None => "Every entry helps us understand your patterns better. You're doing great!",
    }
}

/// Leading number of a strength string such as "6mg" or "3.5 mg".
pub fn parse_milligrams(amount: &str) -> Option<f64> {
    let amount = amount.trim();
    let end = amount
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(amount.len());
    amount[..end].parse::<f64>().ok().filter(|mg| mg.is_finite())
}

pub fn validate_message(text: &str) -> Result<String, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooLong {
            max: MAX_MESSAGE_CHARS,
        });
    }
    Ok(text.to_string())
}

pub fn parse_quit_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    raw.parse::<NaiveDate>()
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}
