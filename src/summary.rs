//! Per-student grade summary records.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grading::{average, letter_grade};
use crate::roster::Student;

/// A student's computed result: average score and letter grade.
#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub average: f64,
    pub grade: String,
}

impl StudentSummary {
    /// Grades a single student.
    ///
    /// # Errors
    ///
    /// Returns an error naming the student if their score list is empty,
    /// since no average can be computed.
    pub fn from_student(student: &Student) -> Result<Self> {
        let average = average(&student.scores)
            .with_context(|| format!("no scores recorded for student {}", student.name))?;

        Ok(StudentSummary {
            timestamp: Utc::now(),
            name: student.name.clone(),
            average,
            grade: letter_grade(average),
        })
    }

    /// Renders the one-line report format: `<name> average: <value> grade: <letter>`.
    ///
    /// The average uses shortest round-trip formatting, so a whole-number
    /// mean still shows a decimal point (`65.0`).
    pub fn line(&self) -> String {
        format!("{} average: {:?} grade: {}", self.name, self.average, self.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_student_computes_average_and_grade() {
        let student = Student {
            name: "Alice".to_string(),
            scores: vec![95.0, 85.0, 100.0],
        };

        let summary = StudentSummary::from_student(&student).unwrap();

        assert_eq!(summary.name, "Alice");
        assert_eq!(summary.average, 280.0 / 3.0);
        assert_eq!(summary.grade, "A");
    }

    #[test]
    fn test_from_student_empty_scores_names_student() {
        let student = Student {
            name: "Charlie".to_string(),
            scores: vec![],
        };

        let err = StudentSummary::from_student(&student).unwrap_err();
        assert!(err.to_string().contains("Charlie"));
    }

    #[test]
    fn test_line_format_whole_number_average() {
        let summary = StudentSummary {
            timestamp: Utc::now(),
            name: "Bob".to_string(),
            average: 65.0,
            grade: "D".to_string(),
        };

        assert_eq!(summary.line(), "Bob average: 65.0 grade: D");
    }

    #[test]
    fn test_line_format_fractional_average() {
        let summary = StudentSummary {
            timestamp: Utc::now(),
            name: "Alice".to_string(),
            average: 280.0 / 3.0,
            grade: "A".to_string(),
        };

        assert_eq!(summary.line(), "Alice average: 93.33333333333333 grade: A");
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let student = Student {
            name: "Bob".to_string(),
            scores: vec![70.0, 65.0, 60.0],
        };

        let summary = StudentSummary::from_student(&student).unwrap();
        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("\"name\":\"Bob\""));
        assert!(json.contains("\"grade\":\"D\""));
    }
}
