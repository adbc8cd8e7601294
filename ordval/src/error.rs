//! Error taxonomy of the valuation.
//!
//! Malformed-shape errors do not appear here: the closed [`Ordinal`] enum
//! and exhaustive matching make an unknown tag unrepresentable, and negative
//! finite ordinals cannot be constructed from a `u64`. What remains are the
//! numeric preconditions the type system cannot discharge.

use strum::EnumIs;
use thiserror::Error;

use crate::ordinal::Ordinal;

#[derive(Debug, PartialEq, EnumIs, Error)]
pub enum Error {
    /// A `Sum` term carried a coefficient below 1.
    #[error(
        "CNF coefficients must be integers >= 1, got {coefficient}. A zero coefficient collapses the ω^β term, so the representation does not denote an ordinal."
    )]
    InvalidCoefficient { coefficient: u64 },

    /// The denominator 9 − f(k) of the transfinite power case came within
    /// 1e-9 of zero. Unreachable for genuine ordinals below ε₀, where
    /// f(k) < 5 keeps the denominator above 4.
    #[error(
        "f(ω^k) hit a near-zero denominator: f(k) = {value} for k = `{exponent}`. Every k below ε₀ satisfies f(k) < 5, so this exponent does not denote an ordinal below ε₀."
    )]
    PowerDenominatorNearPole { exponent: Ordinal, value: f64 },

    /// The denominator f(ω^β) of the remainder interpolation came within
    /// 1e-9 of zero. Unreachable for well-formed input, where f(ω^β) >= 0.5.
    #[error(
        "f(ω^β) = {value} is near zero for β = `{exponent}` and the remainder interpolation divides by it. Every well-formed β satisfies f(ω^β) >= 0.5, so a CNF precondition was violated upstream."
    )]
    SumDenominatorNearZero { exponent: Ordinal, value: f64 },

    /// Nested valuation exceeded the configured depth bound.
    #[error(
        "Valuation exceeded the recursion limit of {limit} nested calls. Deeper ω-towers need a valuator built with `Valuator::with_recursion_limit`."
    )]
    RecursionLimitExceeded { limit: usize },
}

pub type OrdResult<T> = Result<T, Error>;
