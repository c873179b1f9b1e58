//! Student roster data model.

use serde::Serialize;

/// A student and their recorded scores, in the order they were entered.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub name: String,
    pub scores: Vec<f64>,
}

/// An insertion-ordered collection of students.
///
/// Backed by a `Vec` so report output order is the order students were
/// added, not whatever a hash map happens to produce.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a student, preserving insertion order.
    pub fn with_student(mut self, name: &str, scores: Vec<f64>) -> Self {
        self.students.push(Student {
            name: name.to_string(),
            scores,
        });
        self
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
