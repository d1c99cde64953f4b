/// Error returned when the exact value of a binomial coefficient does not
/// fit in a `u64`, even after GCD-based reduction at the failing step.
///
/// C(n, k) is at least 1 for every valid input, so success and failure
/// never share a value; callers get an explicit channel instead of a
/// zero sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

impl std::fmt::Display for Overflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "binomial coefficient overflows a 64 bit integer")
    }
}

impl std::error::Error for Overflow {}

// Module declarations
pub mod binomial;
pub mod gcd;
pub mod parser;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binomial::evaluate_binomial;
    use crate::gcd::gcd;

    #[test]
    fn test_small_coefficients() {
        assert_eq!(evaluate_binomial(5, 2), Ok(10));
        assert_eq!(evaluate_binomial(10, 5), Ok(252));
        assert_eq!(evaluate_binomial(0, 0), Ok(1));
    }

    #[test]
    fn test_degenerate_rows() {
        for n in [0, 1, 2, 17, 64, u64::MAX] {
            assert_eq!(evaluate_binomial(n, 0), Ok(1));
            assert_eq!(evaluate_binomial(n, n), Ok(1));
        }
    }

    #[test]
    fn test_near_limit_reduction_path() {
        // Largest central coefficient that fits in 64 bits; takes the
        // reduction branch ten times
        assert_eq!(evaluate_binomial(67, 33), Ok(14_226_520_737_620_288_370));
        assert_eq!(evaluate_binomial(67, 34), Ok(14_226_520_737_620_288_370));
    }

    #[test]
    fn test_overflow_reported() {
        assert_eq!(evaluate_binomial(100, 50), Err(Overflow));
        // Smallest central coefficient past the 64 bit boundary
        assert_eq!(evaluate_binomial(68, 34), Err(Overflow));
    }

    #[test]
    fn test_gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(13, 17), 1);
    }

    #[test]
    fn test_parse_pairs() {
        let input = "5 2\n10 5\n\n67 33\n";
        let result = parser::parse_pairs(input);
        assert!(result.is_ok());
        let (_, pairs) = result.unwrap();
        assert_eq!(pairs, vec![(5, 2), (10, 5), (67, 33)]);
    }

    #[test]
    fn test_parse_cases() {
        let input = "5 2 10\r\n100 50 0\r\n";
        let (_, cases) = parser::parse_cases(input).unwrap();
        assert_eq!(cases, vec![(5, 2, 10), (100, 50, 0)]);
    }
}
