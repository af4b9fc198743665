/// Rounds to `decimals` places. Exact halves go to the even neighbour, so a
/// dyadic pI such as 9.625 reports as 9.62.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(round_to(192.23612, 2), 192.24);
        assert_eq!(round_to(5.6875, 2), 5.69);
        assert_eq!(round_to(-1.234, 2), -1.23);
    }

    #[test]
    fn round_to_zero_decimals() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(2.49, 0), 2.0);
    }

    #[test]
    fn round_to_sends_exact_halves_to_even() {
        assert_eq!(round_to(9.625, 2), 9.62);
        assert_eq!(round_to(9.375, 2), 9.38);
        assert_eq!(round_to(-0.125, 2), -0.12);
    }

    #[test]
    fn round_to_passes_through_non_finite_values() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }
}
