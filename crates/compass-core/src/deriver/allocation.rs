//! Subject parsing and daily hour allocation.

use crate::models::FocusArea;

/// Subject used when the student names none.
pub const DEFAULT_SUBJECT: &str = "General Studies";

/// Splits a comma separated subject list, trimming each entry and dropping
/// blanks.
///
/// ```rust
/// use compass_core::deriver::parse_subjects;
///
/// assert_eq!(parse_subjects("Math, Physics ,, Chem"), ["Math", "Physics", "Chem"]);
/// assert_eq!(parse_subjects(" , "), ["General Studies"]);
/// ```
pub fn parse_subjects(answer: &str) -> Vec<String> {
    let subjects: Vec<String> = answer
        .split(',')
        .map(str::trim)
        .filter(|subject| !subject.is_empty())
        .map(String::from)
        .collect();

    if subjects.is_empty() {
        vec![DEFAULT_SUBJECT.to_string()]
    } else {
        subjects
    }
}

/// Splits the daily hours evenly across subjects.
///
/// Each share is rounded to one decimal place, so the total can drift from
/// `daily_hours` by at most 0.05 per subject.
pub fn allocate_hours(subjects: &[String], daily_hours: u32) -> Vec<FocusArea> {
    if subjects.is_empty() {
        return Vec::new();
    }

    let share = round_to_tenth(f64::from(daily_hours) / subjects.len() as f64);

    subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| FocusArea {
            subject: subject.clone(),
            allocated_hours: share,
            rationale: rationale(index, daily_hours, subjects.len()),
        })
        .collect()
}

fn rationale(index: usize, daily_hours: u32, subject_count: usize) -> String {
    let share = if subject_count == 1 {
        format!("All of your {daily_hours}-hour daily budget")
    } else {
        format!("An equal share of your {daily_hours}-hour daily budget")
    };

    match index {
        0 => format!("{share}; this subject leads week 1 of your timeline."),
        1 => format!("{share}; this subject leads week 2 of your timeline."),
        _ => format!("{share}; this subject is revisited during the week 3 integration practice."),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
