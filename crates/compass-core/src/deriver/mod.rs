//! Rule-based derivation of a study-recovery plan from collected answers.
//!
//! [`derive`] is a pure function: it reads an [`AnswerRecord`], applies a
//! fixed set of heuristics and returns a [`Plan`]. It never fails. Every
//! answer that is missing or cannot be parsed is replaced by a fallback
//! default so a student always gets a plan.
//!
//! # Rules
//!
//! | Input           | Parsing                                  | Fallback            |
//! |-----------------|------------------------------------------|---------------------|
//! | `subjects`      | comma separated, trimmed, blanks dropped | `General Studies`   |
//! | `studyHours`    | leading integer, must be positive        | [`DEFAULT_DAILY_HOURS`] |
//! | `stressLevel`   | leading integer, clamped to 1..=10       | [`DEFAULT_STRESS_LEVEL`] |
//! | `learningStyle` | case-insensitive keyword match           | mixed bundle        |
//! | `name_grade`    | `name, grade`                            | `Student`           |
//!
//! Hours are split evenly across subjects and rounded to one decimal place.
//! A stress level of [`BreakPace::HIGH_STRESS_THRESHOLD`] or more selects
//! frequent breaks.
//!
//! # Example
//!
//! ```rust
//! use compass_core::{conversation::AnswerRecord, deriver::derive};
//!
//! let answers: AnswerRecord = [
//!     ("name_grade", "Sam, 10th"),
//!     ("subjects", "Math, Physics"),
//!     ("studyHours", "4"),
//!     ("stressLevel", "8"),
//!     ("learningStyle", "Visual"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let plan = derive(&answers);
//! assert_eq!(plan.focus_areas.len(), 2);
//! assert_eq!(plan.timeline.len(), 4);
//! ```

use crate::{
    conversation::{keys, AnswerRecord},
    models::{BreakPace, LearningStyle, Plan, Profile},
};

pub mod allocation;
pub mod technique;
pub mod timeline;


pub use allocation::{allocate_hours, parse_subjects, DEFAULT_SUBJECT};
pub use technique::select_technique;
pub use timeline::build_timeline;

/// Daily study hours used when the answer is missing, unparseable or not
/// positive.
pub const DEFAULT_DAILY_HOURS: u32 = 2;

/// Stress level used when the answer is missing or unparseable.
pub const DEFAULT_STRESS_LEVEL: u8 = 5;

const MIN_STRESS_LEVEL: i64 = 1;
const MAX_STRESS_LEVEL: i64 = 10;

const DEFAULT_NAME: &str = "Student";
const DEFAULT_DEADLINES: &str = "No deadlines given";

/// Derives a plan from a conversation's answers.
pub fn derive(answers: &AnswerRecord) -> Plan {
    let subjects = parse_subjects(answers.get(keys::SUBJECTS).unwrap_or_default());
    let daily_hours = parse_daily_hours(answers.get(keys::STUDY_HOURS));
    let stress_level = parse_stress_level(answers.get(keys::STRESS_LEVEL));

    let learning_style_text = answers
        .get(keys::LEARNING_STYLE)
        .map(str::trim)
        .unwrap_or_default();
    let style = LearningStyle::detect(learning_style_text);
    let pace = BreakPace::for_stress(stress_level);

    let (name, grade) = parse_name_grade(answers.get(keys::NAME_GRADE));

    let profile = Profile {
        name,
        grade,
        learning_style: if learning_style_text.is_empty() {
            style.as_str().to_string()
        } else {
            learning_style_text.to_string()
        },
        stress_level,
        daily_hours,
        deadlines: non_blank(answers.get(keys::DEADLINES))
            .unwrap_or(DEFAULT_DEADLINES)
            .to_string(),
    };

    Plan {
        profile,
        focus_areas: allocate_hours(&subjects, daily_hours),
        technique: select_technique(style, pace),
        timeline: build_timeline(&subjects),
    }
}

/// Parses the daily study budget, falling back to
/// [`DEFAULT_DAILY_HOURS`].
pub fn parse_daily_hours(answer: Option<&str>) -> u32 {
    answer
        .and_then(parse_leading_int)
        .filter(|hours| *hours > 0)
        .map(|hours| u32::try_from(hours).unwrap_or(u32::MAX))
        .unwrap_or(DEFAULT_DAILY_HOURS)
}

/// Parses the stress level, clamping into 1..=10 and falling back to
/// [`DEFAULT_STRESS_LEVEL`].
pub fn parse_stress_level(answer: Option<&str>) -> u8 {
    answer
        .and_then(parse_leading_int)
        .map(|level| level.clamp(MIN_STRESS_LEVEL, MAX_STRESS_LEVEL) as u8)
        .unwrap_or(DEFAULT_STRESS_LEVEL)
}

/// Reads an integer from the start of the text, ignoring surrounding
/// whitespace and anything after the digits (`"4 hours"` is 4).
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate absurdly long digit runs instead of rejecting them.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Splits "name, grade" into its parts.
fn parse_name_grade(answer: Option<&str>) -> (String, Option<String>) {
    let Some(text) = non_blank(answer) else {
        return (DEFAULT_NAME.to_string(), None);
    };

    match text.split_once(',') {
        Some((name, grade)) => {
            let name = name.trim();
            let grade = grade.trim();
            (
                if name.is_empty() { DEFAULT_NAME } else { name }.to_string(),
                (!grade.is_empty()).then(|| grade.to_string()),
            )
        }
        None => (text.to_string(), None),
    }
}

fn non_blank(answer: Option<&str>) -> Option<&str> {
    answer.map(str::trim).filter(|text| !text.is_empty())
}
