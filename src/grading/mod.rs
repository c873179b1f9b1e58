//! Pure grade computations.
//!
//! This module reduces a student's scores to an arithmetic mean and
//! classifies that mean into a letter grade.

mod average;
mod letter;

pub use average::average;
pub use letter::letter_grade;
