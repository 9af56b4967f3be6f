//! Order-independent numeric range checks used by the splice and crossing passes.

/// Whether `value` lies within `[r1, r2]`, regardless of bound order.
pub fn within_range_inclusive(value: i32, r1: i32, r2: i32) -> bool {
    let (min, max) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
    min <= value && value <= max
}

/// Whether `value` lies strictly within `(r1, r2)`, regardless of bound order.
pub fn within_range_exclusive(value: i32, r1: i32, r2: i32) -> bool {
    let (min, max) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
    min < value && value < max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_range_inclusive() {
        assert!(within_range_inclusive(5, 0, 10));
        assert!(within_range_inclusive(0, 0, 10));
        assert!(within_range_inclusive(10, 0, 10));
        assert!(!within_range_inclusive(11, 0, 10));
        assert!(!within_range_inclusive(-1, 0, 10));
    }

    #[test]
    fn test_within_range_inclusive_swapped_bounds() {
        assert!(within_range_inclusive(5, 10, 0));
        assert!(within_range_inclusive(10, 10, 0));
        assert!(!within_range_inclusive(-3, 10, 0));
    }

    #[test]
    fn test_within_range_exclusive() {
        assert!(within_range_exclusive(5, 0, 10));
        assert!(!within_range_exclusive(0, 0, 10));
        assert!(!within_range_exclusive(10, 0, 10));
        assert!(!within_range_exclusive(11, 0, 10));
    }

    #[test]
    fn test_within_range_exclusive_swapped_bounds() {
        assert!(within_range_exclusive(5, 10, 0));
        assert!(!within_range_exclusive(10, 10, 0));
        assert!(!within_range_exclusive(0, 10, 0));
    }

    #[test]
    fn test_within_range_negative_values() {
        assert!(within_range_exclusive(-5, -10, 0));
        assert!(within_range_inclusive(-10, -10, -1));
        assert!(!within_range_exclusive(-10, -10, -1));
    }

    #[test]
    fn test_empty_exclusive_range() {
        // A zero or one wide span has no strict interior
        assert!(!within_range_exclusive(3, 3, 3));
        assert!(!within_range_exclusive(3, 3, 4));
        assert!(!within_range_exclusive(4, 3, 4));
    }
}
