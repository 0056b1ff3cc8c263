//! Enumerations for learning styles and break pacing.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Learning style bundle a plan's technique was chosen from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    /// No recognised style was mentioned
    #[default]
    Mixed,
}

impl LearningStyle {
    /// Styles checked against free text, in priority order.
    pub const DETECTABLE: [LearningStyle; 3] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Kinesthetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::Mixed => "mixed",
        }
    }

    /// Picks the first style, in priority order, whose name appears
    /// anywhere in the text, ignoring case. Falls back to `Mixed`.
    ///
    /// ```rust
    /// use compass_core::models::LearningStyle;
    ///
    /// assert_eq!(LearningStyle::detect("Mostly VISUAL stuff"), LearningStyle::Visual);
    /// assert_eq!(LearningStyle::detect("auditory and visual"), LearningStyle::Visual);
    /// assert_eq!(LearningStyle::detect("no idea"), LearningStyle::Mixed);
    /// ```
    pub fn detect(text: &str) -> Self {
        let text = text.to_lowercase();
        Self::DETECTABLE
            .into_iter()
            .find(|style| text.contains(style.as_str()))
            .unwrap_or_default()
    }
}

/// How often a student should break from focused study.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum BreakPace {
    /// Shorter focus blocks with more frequent breaks, for high stress
    Frequent,
    #[default]
    Standard,
}

impl BreakPace {
    /// Stress level at or above which breaks become frequent.
    pub const HIGH_STRESS_THRESHOLD: u8 = 7;

    pub fn for_stress(stress_level: u8) -> Self {
        if stress_level >= Self::HIGH_STRESS_THRESHOLD {
            BreakPace::Frequent
        } else {
            BreakPace::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BreakPace::Frequent => "frequent",
            BreakPace::Standard => "standard",
        }
    }
}

impl FromStr for BreakPace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frequent" => Ok(BreakPace::Frequent),
            "standard" => Ok(BreakPace::Standard),
            _ => Err(format!("Invalid break pace: {s}")),
        }
    }
}
