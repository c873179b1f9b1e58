pub mod grading;
pub mod report;
pub mod roster;
pub mod summary;
