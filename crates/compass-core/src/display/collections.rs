//! Collection wrapper types.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{models::SavedPlanSummary, timer::ScheduledPhase};

/// Saved plan summaries formatted as a markdown list.
pub struct SavedPlans(pub Vec<SavedPlanSummary>);

impl SavedPlans {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for SavedPlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved plans found.");
        }

        for summary in &self.0 {
            writeln!(f, "- **{}** ({})", summary.owner, summary.student_name)?;
            writeln!(f, "  - Subjects: {}", summary.subjects.join(", "))?;
            writeln!(f, "  - Updated: {}", LocalDateTime(&summary.updated_at))?;
        }
        Ok(())
    }
}

/// A previewed study session formatted as a numbered list.
pub struct SessionSchedule(pub Vec<ScheduledPhase>);

impl fmt::Display for SessionSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Empty session.");
        }

        let total_minutes: u64 = self.0.iter().map(|p| p.duration.as_secs() / 60).sum();
        for (index, entry) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({} min)",
                index + 1,
                entry.phase,
                entry.duration.as_secs() / 60
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {total_minutes} min")
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::timer::{schedule, TimerSettings};

    #[test]
    fn test_empty_saved_plans() {
        assert_eq!(SavedPlans(Vec::new()).to_string(), "No saved plans found.\n");
    }

    #[test]
    fn test_saved_plans_list() {
        let plans = SavedPlans(vec![SavedPlanSummary {
            id: 1,
            owner: "sam@example.com".to_string(),
            student_name: "Sam".to_string(),
            subjects: vec!["Math".to_string(), "Physics".to_string()],
            updated_at: Timestamp::now(),
        }]);

        let output = plans.to_string();
        assert!(output.contains("- **sam@example.com** (Sam)"));
        assert!(output.contains("Subjects: Math, Physics"));
        assert_eq!(plans.len(), 1);
    }

    #[test]
    fn test_session_schedule() {
        let output = SessionSchedule(schedule(&TimerSettings::default(), 2)).to_string();
        assert_eq!(
            output,
            "1. Focus (25 min)\n2. Short break (5 min)\n3. Focus (25 min)\n\nTotal: 55 min\n"
        );
    }
}
