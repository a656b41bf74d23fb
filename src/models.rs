use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Error returned when a form or JSON value does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

macro_rules! choice_enum {
    ($name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

choice_enum!(Mood, "mood", {
    Great => "great",
    Good => "good",
    Okay => "okay",
    Struggling => "struggling",
});

choice_enum!(CravingLevel, "craving_level", {
    None => "none",
    Low => "low",
    Medium => "medium",
    High => "high",
});

choice_enum!(NicotineProduct, "nicotine_product", {
    Cigarette => "cigarette",
    Vape => "vape",
    Pouch => "pouch",
});

choice_enum!(UsageComparison, "usage_comparison", {
    Reduced => "reduced",
    Same => "same",
    Increased => "increased",
});

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Struggling => "Struggling",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Great => "\u{1F60A}",
            Mood::Good => "\u{1F60C}",
            Mood::Okay => "\u{1F610}",
            Mood::Struggling => "\u{1F614}",
        }
    }

    /// Chart score, higher is better.
    pub fn score(self) -> f64 {
        match self {
            Mood::Struggling => 1.0,
            Mood::Okay => 2.0,
            Mood::Good => 3.0,
            Mood::Great => 4.0,
        }
    }
}

impl CravingLevel {
    pub fn label(self) -> &'static str {
        match self {
            CravingLevel::None => "None",
            CravingLevel::Low => "Low",
            CravingLevel::Medium => "Medium",
            CravingLevel::High => "High",
        }
    }

    /// Ordinal severity, 0 for none up to 3 for high.
    pub fn score(self) -> f64 {
        match self {
            CravingLevel::None => 0.0,
            CravingLevel::Low => 1.0,
            CravingLevel::Medium => 2.0,
            CravingLevel::High => 3.0,
        }
    }
}

impl NicotineProduct {
    pub fn label(self) -> &'static str {
        match self {
            NicotineProduct::Cigarette => "Cigarette",
            NicotineProduct::Vape => "Vape",
            NicotineProduct::Pouch => "Nicotine Pouch",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NicotineProduct::Cigarette => "Traditional cigarettes",
            NicotineProduct::Vape => "E-cigarettes/vaping",
            NicotineProduct::Pouch => "Pouches/gum/patches",
        }
    }

    /// Plural used in the missing-amount message.
    pub fn plural(self) -> &'static str {
        match self {
            NicotineProduct::Cigarette => "cigarettes",
            NicotineProduct::Vape => "vapes",
            NicotineProduct::Pouch => "nicotine pouches",
        }
    }

    pub fn requires_amount(self) -> bool {
        matches!(self, NicotineProduct::Vape | NicotineProduct::Pouch)
    }
}

impl UsageComparison {
    pub fn label(self) -> &'static str {
        match self {
            UsageComparison::Reduced => "Reduced",
            UsageComparison::Same => "Stayed Same",
            UsageComparison::Increased => "Increased",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            UsageComparison::Reduced => "Used less than yesterday",
            UsageComparison::Same => "Similar to yesterday",
            UsageComparison::Increased => "Used more than yesterday",
        }
    }
}

/// One day's self-reported record, built only from a valid draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub mood: Mood,
    pub craving_level: CravingLevel,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nicotine_product: Option<NicotineProduct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nicotine_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_comparison: Option<UsageComparison>,
}

impl LogEntry {
    pub fn is_smoke_free(&self) -> bool {
        self.nicotine_product.is_none()
    }
}

/// Raw field values as submitted by the log form or the JSON API.
///
/// Empty strings mean "not selected".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogFormInput {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub craving_level: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub nicotine_product: String,
    #[serde(default)]
    pub nicotine_amount: String,
    #[serde(default)]
    pub usage_comparison: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub username: String,
    pub message: String,
    pub timestamp: String,
    pub likes: u32,
    #[serde(default)]
    pub own: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeMode,
    /// Day the first entry or goal was saved, as `YYYY-MM-DD`.
    #[serde(default)]
    pub started_on: Option<String>,
    #[serde(default)]
    pub quit_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalRequest {
    #[serde(default)]
    pub quit_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub days: BTreeMap<String, Vec<LogEntry>>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub entries: Vec<LogEntry>,
    pub yesterday_mg: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub message: Option<String>,
    pub amount_required: bool,
    pub placeholder: String,
}
