//! Tests for the models module.

use super::*;

fn sample_plan() -> Plan {
    Plan {
        profile: Profile {
            name: "Ana".to_string(),
            grade: Some("11th".to_string()),
            learning_style: "visual".to_string(),
            stress_level: 4,
            daily_hours: 3,
            deadlines: "Finals in May".to_string(),
        },
        focus_areas: vec![
            FocusArea {
                subject: "Biology".to_string(),
                allocated_hours: 1.5,
                rationale: "Leads week 1".to_string(),
            },
            FocusArea {
                subject: "History".to_string(),
                allocated_hours: 1.5,
                rationale: "Leads week 2".to_string(),
            },
        ],
        technique: Technique {
            style: LearningStyle::Visual,
            primary_method: "Mind maps".to_string(),
            resources: "Videos".to_string(),
            break_strategy: "Standard breaks".to_string(),
            pace: BreakPace::Standard,
        },
        timeline: Vec::new(),
    }
}

#[test]
fn test_learning_style_detection_priority() {
    assert_eq!(LearningStyle::detect("Visual"), LearningStyle::Visual);
    assert_eq!(
        LearningStyle::detect("kinesthetic, maybe auditory"),
        LearningStyle::Auditory
    );
    assert_eq!(
        LearningStyle::detect("hands-on KINESTHETIC"),
        LearningStyle::Kinesthetic
    );
    assert_eq!(LearningStyle::detect(""), LearningStyle::Mixed);
}

#[test]
fn test_break_pace_threshold() {
    assert_eq!(BreakPace::for_stress(6), BreakPace::Standard);
    assert_eq!(BreakPace::for_stress(7), BreakPace::Frequent);
    assert_eq!(BreakPace::for_stress(10), BreakPace::Frequent);
    assert_eq!(BreakPace::for_stress(1), BreakPace::Standard);
}

#[test]
fn test_break_pace_round_trips_through_str() {
    for pace in [BreakPace::Frequent, BreakPace::Standard] {
        assert_eq!(pace.as_str().parse::<BreakPace>(), Ok(pace));
    }
}

#[test]
fn test_plan_helpers() {
    let plan = sample_plan();
    assert_eq!(plan.subjects().collect::<Vec<_>>(), ["Biology", "History"]);
    assert!((plan.total_allocated_hours() - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_plan_serializes_enums_lowercase() {
    let json = serde_json::to_value(sample_plan()).expect("serialize plan");
    assert_eq!(json["technique"]["style"], "visual");
    assert_eq!(json["technique"]["pace"], "standard");
    assert_eq!(json["profile"]["grade"], "11th");
}
