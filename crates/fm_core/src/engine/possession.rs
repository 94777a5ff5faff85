use crate::models::Possession;

/// Splits possession in proportion to the two strengths.
///
/// Falls back to 50/50 when neither side has any strength or the sum is not
/// finite. The home share is clamped to 0..=100 so rounding never pushes the
/// complement below zero.
pub fn allocate(home_strength: f64, away_strength: f64) -> Possession {
    let total = home_strength + away_strength;
    if !total.is_finite() || total <= 0.0 {
        return Possession::even();
    }
    Possession::from_home((home_strength / total * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_proportional_split() {
        let p = allocate(80.0, 40.0);
        assert!((p.home - 100.0 * 80.0 / 120.0).abs() < EPS);
        assert!((p.home - 66.67).abs() < 0.01);
        assert!((p.away - 33.33).abs() < 0.01);
    }

    #[test]
    fn test_both_zero_is_even() {
        assert_eq!(allocate(0.0, 0.0), Possession::even());
    }

    #[test]
    fn test_one_side_empty() {
        let p = allocate(0.0, 55.0);
        assert_eq!(p.home, 0.0);
        assert_eq!(p.away, 100.0);
    }

    #[test]
    fn test_one_side_empty_awkward_mean() {
        // 100 * x / x rounds above 100 for this composite
        let p = allocate(46.900000000000006, 0.0);
        assert_eq!(p.home, 100.0);
        assert_eq!(p.away, 0.0);
        assert_eq!(p.to_string(), "100.0% - 0.0%");

        let p = allocate(0.0, 46.900000000000006);
        assert_eq!(p.home, 0.0);
        assert_eq!(p.away, 100.0);
    }

    #[test]
    fn test_huge_strength_stays_in_range() {
        let p = allocate(f64::MAX, 0.0);
        assert_eq!(p.home, 100.0);
        assert_eq!(p.away, 0.0);

        // sum overflows to infinity
        assert_eq!(allocate(f64::MAX, f64::MAX), Possession::even());
        assert_eq!(allocate(f64::INFINITY, 10.0), Possession::even());
        assert_eq!(allocate(f64::NAN, 10.0), Possession::even());
    }

    #[test]
    fn test_equal_strength() {
        let p = allocate(72.5, 72.5);
        assert!((p.home - 50.0).abs() < EPS);
    }

    #[test]
    fn test_always_sums_to_hundred() {
        for (h, a) in [(1.0, 99.0), (33.3, 66.7), (12.345, 0.001), (100.0, 100.0)] {
            assert!((allocate(h, a).total() - 100.0).abs() < EPS);
        }
    }
}
