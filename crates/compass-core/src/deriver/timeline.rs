//! Four-week timeline template.

use crate::models::TimelineWeek;

/// Phrase used in week 2 when only one subject was given.
pub const SECOND_SUBJECT_FALLBACK: &str = "your weakest topics";

/// Builds the fixed four-week timeline.
///
/// Week 1 centres on the first subject and week 2 on the second (or on
/// weak topics when there is none). Weeks 3 and 4 do not depend on the
/// subjects.
pub fn build_timeline(subjects: &[String]) -> Vec<TimelineWeek> {
    let first = subjects
        .first()
        .map(String::as_str)
        .unwrap_or(super::DEFAULT_SUBJECT);
    let second = subjects
        .get(1)
        .map(String::as_str)
        .unwrap_or(SECOND_SUBJECT_FALLBACK);

    vec![
        TimelineWeek {
            week_label: "Week 1".to_string(),
            title: format!("Foundations in {first}"),
            description: format!(
                "Rebuild the core concepts of {first} and find the gaps that caused you to fall behind."
            ),
            activities: vec![
                format!("List every {first} topic covered so far and rate your confidence in each"),
                format!("Relearn the two lowest-rated {first} topics"),
                "Finish each session with a five-question self quiz".to_string(),
            ],
        },
        TimelineWeek {
            week_label: "Week 2".to_string(),
            title: format!("Catching up on {second}"),
            description: format!(
                "Shift focus to {second} while keeping earlier material fresh with short reviews."
            ),
            activities: vec![
                format!("Work through missed material in {second}"),
                "Spend ten minutes a day reviewing week 1 notes".to_string(),
                "Ask a teacher or classmate about anything still unclear".to_string(),
            ],
        },
        TimelineWeek {
            week_label: "Week 3".to_string(),
            title: "Integration and practice".to_string(),
            description: "Mix subjects in each session and practise applying what you relearned."
                .to_string(),
            activities: vec![
                "Alternate subjects within each study block".to_string(),
                "Solve mixed problem sets under light time pressure".to_string(),
                "Summarise each subject on a single page".to_string(),
            ],
        },
        TimelineWeek {
            week_label: "Week 4".to_string(),
            title: "Mock exams and final review".to_string(),
            description: "Test yourself under exam conditions and close the remaining gaps."
                .to_string(),
            activities: vec![
                "Sit at least two timed mock exams".to_string(),
                "Review every mistake and redo those questions".to_string(),
                "Plan light revision and rest before your deadlines".to_string(),
            ],
        },
    ]
}
