//! Plan model definition.

use serde::{Deserialize, Serialize};

use super::{BreakPace, LearningStyle};

/// A study-recovery plan derived from a completed conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Who the plan is for and what they can put in
    pub profile: Profile,

    /// Per-subject daily time allocation, in the order subjects were given
    pub focus_areas: Vec<FocusArea>,

    /// Recommended study technique and break strategy
    pub technique: Technique,

    /// Four-week recovery timeline
    pub timeline: Vec<TimelineWeek>,
}

impl Plan {
    /// Subject names in allocation order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.focus_areas.iter().map(|area| area.subject.as_str())
    }

    /// Sum of the allocated daily hours across all subjects.
    pub fn total_allocated_hours(&self) -> f64 {
        self.focus_areas.iter().map(|area| area.allocated_hours).sum()
    }
}

/// Summary of the student the plan was built for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,

    /// Grade or year, when given after the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,

    /// Learning style as the student described it
    pub learning_style: String,

    /// Self-reported stress, 1 to 10
    pub stress_level: u8,

    /// Hours per day available for study
    pub daily_hours: u32,

    /// Upcoming exams or deadlines, verbatim
    pub deadlines: String,
}

/// Daily time budget for one subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FocusArea {
    pub subject: String,

    /// Hours per day, rounded to one decimal place
    pub allocated_hours: f64,

    pub rationale: String,
}

/// Study technique bundle chosen from the learning style and stress level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Technique {
    pub style: LearningStyle,
    pub primary_method: String,
    pub resources: String,
    pub break_strategy: String,

    /// Break pace the strategy text describes; also configures the timer
    pub pace: BreakPace,
}

/// One week of the recovery timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineWeek {
    pub week_label: String,
    pub title: String,
    pub description: String,
    pub activities: Vec<String>,
}
