/// Greatest common divisor of two unsigned 64 bit integers via Euclid's
/// algorithm. `gcd(a, 0) == a` and `gcd(0, b) == b`; the result does not
/// depend on operand order.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    // A first iteration with a < b swaps the operands, so no explicit
    // ordering step is needed.
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// gcd(a, b) == gcd(b, a)
        #[test]
        fn commutative(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(gcd(a, b), gcd(b, a));
        }

        /// gcd(a, b) divides both a and b (for non-zero gcd)
        #[test]
        fn divides_both_operands(a in any::<u64>(), b in any::<u64>()) {
            let g = gcd(a, b);
            if g != 0 {
                prop_assert_eq!(a % g, 0);
                prop_assert_eq!(b % g, 0);
            }
        }

        /// gcd(a, 0) == a and gcd(0, a) == a
        #[test]
        fn zero_identities(a in any::<u64>()) {
            prop_assert_eq!(gcd(a, 0), a);
            prop_assert_eq!(gcd(0, a), a);
        }

        /// gcd(a, a) == a
        #[test]
        fn self_gcd(a in any::<u64>()) {
            prop_assert_eq!(gcd(a, a), a);
        }
    }
}
