use crate::gcd::gcd;
use crate::Overflow;

/// Compute the binomial coefficient C(n, k) exactly, or report that the
/// true value does not fit in 64 bits.
///
/// Callers must ensure `k <= n` before invoking; the precondition is
/// checked in debug builds only.
///
/// Factorials are never formed. The loop walks min(k, n - k) terms,
/// multiplying the running value by the next numerator term and dividing
/// by the step index. After `d` steps the running value equals C(n, d),
/// an integer, so every division is exact. When a multiplication would
/// overflow, the pending fraction is first reduced by the factors shared
/// between numerator and denominator, then between the running value and
/// the remaining denominator; if the product still cannot fit, neither
/// can the coefficient.
pub fn evaluate_binomial(n: u64, k: u64) -> Result<u64, Overflow> {
    debug_assert!(k <= n, "evaluate_binomial requires k <= n");

    // Choosing everything or choosing from the empty set: one way
    if n == 0 || k == n {
        return Ok(1);
    }

    // C(n, k) = C(n, n - k): walk the shorter side of the row
    let steps = k.min(n - k);

    let mut result: u64 = 1;
    let mut numerator = n;

    for denominator in 1..=steps {
        result = match result.checked_mul(numerator) {
            Some(product) => product / denominator,
            None => {
                let shared = gcd(numerator, denominator);
                let reduced_numerator = numerator / shared;
                let mut reduced_denominator = denominator / shared;

                let shared = gcd(result, reduced_denominator);
                let reduced_result = result / shared;
                reduced_denominator /= shared;

                // Only shared factors were removed; if this still
                // overflows, the coefficient is genuinely too large.
                let product = reduced_result
                    .checked_mul(reduced_numerator)
                    .ok_or(Overflow)?;
                product / reduced_denominator
            }
        };
        numerator -= 1;
    }

    Ok(result)
}
