/// Converts a numeric average (0–100 scale) into a letter grade.
///
/// | Range           | Grade |
/// |-----------------|-------|
/// | > 90            | A     |
/// | > 80, <= 90     | B     |
/// | > 70, <= 80     | C     |
/// | > 60, <= 70     | D     |
/// | <= 60           | F     |
///
/// Thresholds are strict greater-than, so a boundary value (exactly 90,
/// 80, 70, or 60) falls to the lower grade.
pub fn letter_grade(average: f64) -> String {
    match average {
        a if a > 90.0 => "A".into(),
        a if a > 80.0 => "B".into(),
        a if a > 70.0 => "C".into(),
        a if a > 60.0 => "D".into(),
        _ => "F".into(),
    }
}
