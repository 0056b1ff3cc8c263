use compass_core::{AnswerRecord, PlanStore, PlanStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a test store
pub async fn create_test_store() -> (TempDir, PlanStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = PlanStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Answers for a visual learner with two subjects and high stress.
#[allow(dead_code)]
pub fn sam_answers() -> AnswerRecord {
    [
        ("name_grade", "Sam, 10th"),
        ("subjects", "Math, Physics"),
        ("deadlines", "June 1"),
        ("studyHours", "4"),
        ("stressLevel", "8"),
        ("learningStyle", "Visual"),
    ]
    .into_iter()
    .collect()
}
