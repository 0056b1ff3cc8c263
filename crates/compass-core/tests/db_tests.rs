use std::{thread, time::Duration};

use compass_core::{derive, AnswerRecord, BreakPace, CompassError, Database, NewStudySession};
use jiff::{SignedDuration, Timestamp};
use rusqlite::Connection;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn session(owner: &str, started_at: Timestamp, completed: u32) -> NewStudySession {
    NewStudySession {
        owner: owner.to_string(),
        pace: BreakPace::Standard,
        planned_focus_blocks: 4,
        completed_focus_blocks: completed,
        focus_minutes: completed * 25,
        started_at,
        ended_at: started_at + SignedDuration::from_mins(i64::from(completed) * 30),
    }
}

fn answers(name: &str, subjects: &str) -> AnswerRecord {
    [("name_grade", name), ("subjects", subjects)]
        .into_iter()
        .collect()
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.list_plans().expect("Failed to list plans").is_empty());
}

#[test]
fn test_save_and_get_plan() {
    let (_temp_file, mut db) = create_test_db();
    let answers = answers("Sam, 10th", "Math, Physics");
    let plan = derive(&answers);

    let saved = db
        .save_plan("sam@example.com", &plan, &answers)
        .expect("Failed to save plan");

    assert!(saved.id > 0);
    assert_eq!(saved.owner, "sam@example.com");
    assert_eq!(saved.plan, plan);
    assert_eq!(saved.created_at, saved.updated_at);

    let retrieved = db
        .get_plan("sam@example.com")
        .expect("Failed to get plan")
        .expect("Plan should exist");

    assert_eq!(retrieved.id, saved.id);
    assert_eq!(retrieved.plan.profile.name, "Sam");
    assert_eq!(retrieved.answers.get("subjects"), Some("Math, Physics"));
}

#[test]
fn test_get_missing_plan() {
    let (_temp_file, db) = create_test_db();

    let result = db.get_plan("nobody").expect("Query should succeed");
    assert!(result.is_none());
}

#[test]
fn test_owner_is_trimmed() {
    let (_temp_file, mut db) = create_test_db();
    let answers = answers("Ana", "Art");

    db.save_plan("  ana  ", &derive(&answers), &answers)
        .expect("Failed to save plan");

    let retrieved = db.get_plan("ana").expect("Failed to get plan");
    assert!(retrieved.is_some());
}

#[test]
fn test_blank_owner_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let answers = AnswerRecord::new();

    let err = db
        .save_plan("   ", &derive(&answers), &answers)
        .expect_err("Blank owner should fail");

    assert!(matches!(err, CompassError::InvalidInput { ref field, .. } if field == "owner"));
    assert!(db.get_plan("").is_err());
}

#[test]
fn test_save_replaces_existing_plan() {
    let (_temp_file, mut db) = create_test_db();

    let first_answers = answers("Sam", "Math");
    let first = db
        .save_plan("sam", &derive(&first_answers), &first_answers)
        .expect("Failed to save first plan");

    thread::sleep(Duration::from_millis(5));

    let second_answers = answers("Sam", "Chemistry, Biology");
    let second = db
        .save_plan("sam", &derive(&second_answers), &second_answers)
        .expect("Failed to save second plan");

    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.plan.subjects().collect::<Vec<_>>(), ["Chemistry", "Biology"]);
    assert_eq!(db.list_plans().expect("Failed to list plans").len(), 1);
}

#[test]
fn test_list_plans_most_recent_first() {
    let (_temp_file, mut db) = create_test_db();

    for (owner, name) in [("a", "Ana"), ("b", "Ben")] {
        let answers = answers(name, "Math");
        db.save_plan(owner, &derive(&answers), &answers)
            .expect("Failed to save plan");
    }

    let owners: Vec<String> = db
        .list_plans()
        .expect("Failed to list plans")
        .into_iter()
        .map(|summary| summary.owner)
        .collect();
    assert_eq!(owners, ["b", "a"]);

    thread::sleep(Duration::from_millis(5));
    let answers = answers("Ana", "History");
    db.save_plan("a", &derive(&answers), &answers)
        .expect("Failed to update plan");

    let summaries = db.list_plans().expect("Failed to list plans");
    assert_eq!(summaries[0].owner, "a");
    assert_eq!(summaries[0].student_name, "Ana");
    assert_eq!(summaries[0].subjects, ["History"]);
}

#[test]
fn test_delete_plan() {
    let (_temp_file, mut db) = create_test_db();
    let answers = answers("Sam", "Math");

    db.save_plan("sam", &derive(&answers), &answers)
        .expect("Failed to save plan");

    assert!(db.delete_plan("sam").expect("Failed to delete plan"));
    assert!(db.get_plan("sam").expect("Failed to get plan").is_none());
    assert!(!db.delete_plan("sam").expect("Second delete should succeed"));
}

#[test]
fn test_data_persists_across_connections() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let answers = answers("Sam", "Math");

    {
        let mut db = Database::new(temp_file.path()).expect("Failed to open database");
        db.save_plan("sam", &derive(&answers), &answers)
            .expect("Failed to save plan");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert!(db.get_plan("sam").expect("Failed to get plan").is_some());
}

#[test]
fn test_list_plans_skips_plan_json() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let answers = answers("Sam", "Math, Physics");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to open database");
        db.save_plan("sam", &derive(&answers), &answers)
            .expect("Failed to save plan");
    }

    let conn = Connection::open(temp_file.path()).expect("Failed to open connection");
    conn.execute("UPDATE saved_plans SET plan_data = '{' WHERE owner = 'sam'", [])
        .expect("Failed to corrupt plan");

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let summaries = db.list_plans().expect("Listing should not parse plans");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].student_name, "Sam");
    assert_eq!(summaries[0].subjects, ["Math", "Physics"]);
    assert!(db.get_plan("sam").is_err());
}

#[test]
fn test_list_plans_orders_by_stored_timestamp() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to open database");
        for owner in ["whole", "fraction"] {
            let answers = answers(owner, "Math");
            db.save_plan(owner, &derive(&answers), &answers)
                .expect("Failed to save plan");
        }
    }

    // A whole-second timestamp must still sort after an earlier fractional one.
    let conn = Connection::open(temp_file.path()).expect("Failed to open connection");
    conn.execute_batch(
        "UPDATE saved_plans SET updated_at = '2026-03-01T10:00:00.000000000Z' WHERE owner = 'whole';
         UPDATE saved_plans SET updated_at = '2026-03-01T09:59:59.900000000Z' WHERE owner = 'fraction';",
    )
    .expect("Failed to set timestamps");

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let owners: Vec<String> = db
        .list_plans()
        .expect("Failed to list plans")
        .into_iter()
        .map(|summary| summary.owner)
        .collect();
    assert_eq!(owners, ["whole", "fraction"]);
}

#[test]
fn test_record_session() {
    let (_temp_file, mut db) = create_test_db();
    let started_at = Timestamp::now();

    let recorded = db
        .record_session(&session("  sam ", started_at, 4))
        .expect("Failed to record session");

    assert!(recorded.id > 0);
    assert_eq!(recorded.owner, "sam");
    assert_eq!(recorded.pace, BreakPace::Standard);
    assert_eq!(recorded.focus_minutes, 100);
    assert_eq!(recorded.started_at, started_at);
    assert!(recorded.finished());
}

#[test]
fn test_record_session_rejects_bad_input() {
    let (_temp_file, mut db) = create_test_db();
    let now = Timestamp::now();

    let err = db
        .record_session(&session(" ", now, 1))
        .expect_err("Blank owner should fail");
    assert!(matches!(err, CompassError::InvalidInput { ref field, .. } if field == "owner"));

    let err = db
        .record_session(&session("sam", now, 5))
        .expect_err("More blocks than planned should fail");
    assert!(matches!(
        err,
        CompassError::InvalidInput { ref field, .. } if field == "completed_focus_blocks"
    ));
}

#[test]
fn test_weekly_stats_covers_last_seven_days() {
    let (_temp_file, mut db) = create_test_db();
    let now = Timestamp::now();
    let day = SignedDuration::from_hours(24);

    db.record_session(&session("sam", now - day * 8, 4))
        .expect("Failed to record old session");
    db.record_session(&session("sam", now - day * 2, 4))
        .expect("Failed to record session");
    db.record_session(&session("sam", now - day, 1))
        .expect("Failed to record stopped session");
    db.record_session(&session("ana", now - day, 4))
        .expect("Failed to record other owner's session");

    let stats = db.weekly_stats("sam", now).expect("Failed to get stats");

    assert_eq!(stats.owner, "sam");
    assert_eq!(stats.total_sessions(), 2);
    assert_eq!(stats.finished_sessions(), 1);
    assert_eq!(stats.total_focus_blocks(), 5);
    assert_eq!(stats.total_focus_minutes(), 125);
    assert_eq!(stats.sessions[0].completed_focus_blocks, 1);
    assert!(db.weekly_stats("nobody", now).expect("Failed to get stats").sessions.is_empty());
}
