//! Special action (card removal/duplication) point scaling
//!
//! The first unit is free. The second costs `initial_increment`, and each
//! later unit costs `increment_step` more than the one before:
//!
//! | count | points (10 / 20) |
//! |-------|------------------|
//! | 1     | 0                |
//! | 2     | 10               |
//! | 3     | 40               |
//! | 4     | 90               |
//! | 5     | 160              |

use crate::core::types::{Count, Points};

/// Points for `count` special actions
///
/// Closed form of the arithmetic series:
/// `(n-1)*initial + step*(n-1)(n-2)/2`, zero for `n <= 1`.
/// Saturates at `Points::MAX`.
pub fn scaled_points(count: Count, initial_increment: Count, increment_step: Count) -> Points {
    if count <= 1 {
        return 0;
    }
    let paid = Points::from(count) - 1;
    let initial = Points::from(initial_increment);
    let step = Points::from(increment_step);
    // paid * (paid - 1) is even and fits in u64; only the step term can overflow
    (paid * initial).saturating_add(step.saturating_mul(paid * (paid - 1) / 2))
}

/// Unit-by-unit accumulation of the same series
///
/// Kept alongside the closed form so the two can be checked against each other.
pub fn scaled_points_iterative(
    count: Count,
    initial_increment: Count,
    increment_step: Count,
) -> Points {
    let mut total: Points = 0;
    let mut increment = Points::from(initial_increment);
    for _ in 2..=count {
        total = total.saturating_add(increment);
        increment = increment.saturating_add(Points::from(increment_step));
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scaling_table() {
        let expected = [(0, 0), (1, 0), (2, 10), (3, 40), (4, 90), (5, 160)];
        for (count, points) in expected {
            assert_eq!(scaled_points(count, 10, 20), points, "count={count}");
        }
    }

    #[test]
    fn test_iterative_matches_table() {
        assert_eq!(scaled_points_iterative(0, 10, 20), 0);
        assert_eq!(scaled_points_iterative(1, 10, 20), 0);
        assert_eq!(scaled_points_iterative(4, 10, 20), 90);
    }

    #[test]
    fn test_zero_step_is_linear_after_first() {
        assert_eq!(scaled_points(6, 15, 0), 75);
    }

    #[test]
    fn test_huge_count_saturates() {
        assert_eq!(scaled_points(Count::MAX, 10, 1000), Points::MAX);
        assert_eq!(scaled_points(Count::MAX, Count::MAX, Count::MAX), Points::MAX);
        // Large but representable
        let n = Points::from(Count::MAX) - 1;
        assert_eq!(scaled_points(Count::MAX, 7, 0), n * 7);
    }

    #[test]
    fn test_zero_parameters() {
        assert_eq!(scaled_points(50, 0, 0), 0);
    }

    #[test]
    fn test_forms_agree_small_grid() {
        for count in 0..40 {
            for initial in [0, 1, 10, 33] {
                for step in [0, 1, 20, 7] {
                    assert_eq!(
                        scaled_points(count, initial, step),
                        scaled_points_iterative(count, initial, step)
                    );
                }
            }
        }
    }
}
