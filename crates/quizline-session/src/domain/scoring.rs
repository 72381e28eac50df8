//! Scoring rules.

/// Points awarded for each correctly answered question.
pub const POINTS_PER_CORRECT_ANSWER: u32 = 10;

/// Percentage of `total` answered correctly, rounded half up to a whole
/// number. Returns 0 when `total` is 0.
#[must_use]
pub fn accuracy_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (correct.saturating_mul(200) + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
