//! Recursive valuation of CNF ordinals into the reals.
//!
//! Role
//! - Map every ordinal below ε₀ to a real number, strictly preserving the
//!   ordinal order, by interpolating between the valuations at the floor
//!   and ceiling of each term's exponent/coefficient structure.
//! - Memoize every computed valuation in an explicit context, so repeated
//!   and recursive evaluation stays linear in the nesting depth.
//!
//! The case analysis mirrors the Cantor Normal Form: finite ordinals map
//! through [`finite_value`], powers ω^k through a closed form (finite k) or
//! a Möbius-type interpolation (k >= ω), and sums ω^β·c + δ through two
//! linear interpolation steps bottoming out at natural numbers.

use std::collections::HashMap;

use log::{debug, trace};
use parking_lot::Mutex;

use crate::error::{Error, OrdResult};
use crate::ordinal::Ordinal;

/// Near-zero threshold for the guarded interpolation denominators.
///
/// The invariant f(k) < 5 holds throughout the domain, keeping 9 − f(k)
/// above 4, and f(ω^β) never drops below 0.5; the guard only fires on
/// representations that do not denote ordinals below ε₀.
const DENOMINATOR_GUARD: f64 = 1e-9;

/// Default bound on nested valuation depth.
///
/// Depth grows with the nesting of the input CNF, not with the size of the
/// ordinal, so the default comfortably covers towers far beyond anything a
/// program constructs on purpose.
pub const DEFAULT_RECURSION_LIMIT: usize = 1024;

/// f(n) for a finite ordinal n: 0 maps to 0.0, n to n/(n+1).
///
/// This anchors the whole recursion; every transfinite case bottoms out
/// here. Total over `u64`.
#[inline]
pub fn finite_value(n: u64) -> f64 {
    if n == 0 {
        0.0
    } else {
        n as f64 / (n as f64 + 1.0)
    }
}

/// Valuation context: the recursive mapping plus its memoization cache.
///
/// Role
/// - Owns the memo map, so sessions are isolated and the cache dies with
///   the valuator instead of living as process-global state.
/// - The map is consulted at the start of every (sub-)valuation and
///   populated before every successful return; entries are never evicted.
///
/// Concurrency
/// - The lock is released while recursing, so two threads valuating the
///   same term at worst duplicate work; a redundant overwrite stores the
///   same deterministic value. Critical sections are a single map lookup or
///   insert.
pub struct Valuator {
    cache: Mutex<HashMap<Ordinal, f64>>,
    recursion_limit: usize,
}

impl Valuator {
    /// An empty valuator with the default recursion limit.
    pub fn new() -> Self {
        Self::with_recursion_limit(DEFAULT_RECURSION_LIMIT)
    }

    /// An empty valuator with a custom depth bound, for inputs nested
    /// deeper than [`DEFAULT_RECURSION_LIMIT`] or tests that want the guard
    /// to trip early.
    pub fn with_recursion_limit(recursion_limit: usize) -> Self {
        Valuator {
            cache: Mutex::new(HashMap::new()),
            recursion_limit,
        }
    }

    /// Number of memoized valuations.
    pub fn cache_size(&self) -> usize {
        self.cache.lock().len()
    }

    /// Compute f(α).
    ///
    /// Deterministic: structurally equal inputs return bit-identical
    /// results, and a repeated call has no observable effect beyond the
    /// cache already being populated. Failures are reported synchronously
    /// and never cached.
    pub fn valuate(&self, alpha: &Ordinal) -> OrdResult<f64> {
        self.eval(alpha, 0)
    }

    fn eval(&self, alpha: &Ordinal, depth: usize) -> OrdResult<f64> {
        if depth >= self.recursion_limit {
            return Err(Error::RecursionLimitExceeded {
                limit: self.recursion_limit,
            });
        }

        if let Some(value) = self.cache.lock().get(alpha) {
            trace!("cache hit: f({}) = {}", alpha, value);
            return Ok(*value);
        }

        let value = match alpha {
            Ordinal::Finite(n) => finite_value(*n),
            Ordinal::Power(exponent) => self.eval_power(exponent, depth)?,
            Ordinal::Sum {
                exponent,
                coefficient,
                remainder,
            } => self.eval_sum(exponent, *coefficient, remainder, depth)?,
        };

        debug!("memoized f({}) = {}", alpha, value);
        self.cache.lock().insert(alpha.clone(), value);
        Ok(value)
    }

    /// f(ω^k).
    fn eval_power(&self, exponent: &Ordinal, depth: usize) -> OrdResult<f64> {
        match exponent {
            // ω^0 = 1: delegate to the finite case.
            Ordinal::Finite(0) => self.eval(&Ordinal::ONE, depth + 1),

            // Finite j >= 1: f(ω^j) = 1 + 2·f(j−1) = (3j − 2)/j.
            Ordinal::Finite(j) => Ok((3.0 * *j as f64 - 2.0) / *j as f64),

            // k >= ω: f(ω^k) = (25 − f(k)) / (9 − f(k)), pushing nested
            // towers toward the limit value 5 from below.
            _ => {
                let f_exponent = self.eval(exponent, depth + 1)?;
                let denominator = 9.0 - f_exponent;
                if denominator.abs() < DENOMINATOR_GUARD {
                    return Err(Error::PowerDenominatorNearPole {
                        exponent: exponent.clone(),
                        value: f_exponent,
                    });
                }
                Ok((25.0 - f_exponent) / denominator)
            }
        }
    }

    /// f(ω^β·c + δ).
    fn eval_sum(
        &self,
        exponent: &Ordinal,
        coefficient: u64,
        remainder: &Ordinal,
        depth: usize,
    ) -> OrdResult<f64> {
        if coefficient == 0 {
            return Err(Error::InvalidCoefficient { coefficient });
        }

        // f(ω^β·c) interpolates between f(ω^β) and f(ω^(β+1)) by f(c−1).
        let f_base = self.eval(&Ordinal::power(exponent.clone()), depth + 1)?;
        let f_next = self.eval(&Ordinal::power(exponent.successor()), depth + 1)?;
        let f_at_coeff = f_base + (f_next - f_base) * finite_value(coefficient - 1);

        if remainder.is_zero() {
            return Ok(f_at_coeff);
        }

        // δ > 0: interpolate between the c and c+1 interpolants by
        // f(δ)/f(ω^β).
        let f_above_coeff = f_base + (f_next - f_base) * finite_value(coefficient);
        let f_remainder = self.eval(remainder, depth + 1)?;
        if f_base.abs() < DENOMINATOR_GUARD {
            return Err(Error::SumDenominatorNearZero {
                exponent: exponent.clone(),
                value: f_base,
            });
        }
        Ok(f_at_coeff + (f_above_coeff - f_at_coeff) * f_remainder / f_base)
    }
}

impl Default for Valuator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_value_closed_form() {
        assert_eq!(finite_value(0), 0.0);
        assert_eq!(finite_value(1), 0.5);
        assert_eq!(finite_value(3), 0.75);
        for n in 1..100 {
            let v = finite_value(n);
            assert!(v > finite_value(n - 1) && v < 1.0);
        }
    }

    #[test]
    fn power_of_finite_exponent_uses_the_closed_form() {
        let valuator = Valuator::new();
        // (3j − 2)/j for j = 1..: 1, 2, 7/3, 10/4, ...
        assert_eq!(valuator.valuate(&Ordinal::omega()).unwrap(), 1.0);
        assert_eq!(
            valuator
                .valuate(&Ordinal::power(Ordinal::finite(2)))
                .unwrap(),
            2.0
        );
        assert_eq!(
            valuator
                .valuate(&Ordinal::power(Ordinal::finite(4)))
                .unwrap(),
            2.5
        );
    }

    #[test]
    fn sub_valuations_are_memoized_along_the_way() {
        let valuator = Valuator::new();
        // ω^2·2 recurses into ω^2 and ω^3; all three land in the cache,
        // and the finite exponent shapes stay out of it until asked for.
        let alpha = Ordinal::sum(Ordinal::finite(2), 2, Ordinal::ZERO);
        valuator.valuate(&alpha).unwrap();
        assert_eq!(valuator.cache_size(), 3);
    }
}
