/// Round a coordinate to the nearest integer, ties to even.
///
/// Every emitted vertex goes through this function, so `2.5 -> 2` and
/// `3.5 -> 4` hold for all output polygons.
pub fn round_coord(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_to_even() {
        assert_eq!(round_coord(0.5), 0);
        assert_eq!(round_coord(1.5), 2);
        assert_eq!(round_coord(2.5), 2);
        assert_eq!(round_coord(3.5), 4);
        assert_eq!(round_coord(-0.5), 0);
        assert_eq!(round_coord(-1.5), -2);
        assert_eq!(round_coord(-2.5), -2);
    }

    #[test]
    fn test_non_ties_round_to_nearest() {
        assert_eq!(round_coord(2.4999), 2);
        assert_eq!(round_coord(2.5001), 3);
        assert_eq!(round_coord(-7.6), -8);
        assert_eq!(round_coord(410.0), 410);
    }
}
