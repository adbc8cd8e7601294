//! Cantor Normal Form representation of ordinals below ε₀.
//!
//! Role
//! - Provide the closed value type the valuation recurses over.
//! - Classification is a plain tag test; the enum is exhaustive, so no
//!   unknown-shape case can reach the arithmetic.

use std::fmt;

use strum::EnumIs;

/// An ordinal strictly below ε₀, in Cantor Normal Form.
///
/// Three canonical shapes:
/// - [`Ordinal::Finite`] is a natural number representing itself;
/// - [`Ordinal::Power`] is ω^exponent, the exponent itself an ordinal
///   (possibly [`Ordinal::ZERO`], giving ω^0 = 1);
/// - [`Ordinal::Sum`] is ω^exponent·coefficient + remainder.
///
/// Equality semantics
/// - Values are immutable and compare structurally; the representation is
///   its own canonical form, so structural equality is ordinal equality for
///   canonical inputs and [`Hash`] agrees with it.
///
/// Preconditions
/// - In a `Sum`, `remainder < ω^exponent` and `coefficient >= 1`. Neither is
///   checked at construction: a zero coefficient is rejected later by the
///   valuation, while a too-large remainder silently valuates to a
///   meaningless number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs)]
pub enum Ordinal {
    /// A natural number n, representing itself.
    Finite(u64),

    /// ω^exponent.
    Power(Box<Ordinal>),

    /// ω^exponent · coefficient + remainder, with remainder < ω^exponent.
    Sum {
        exponent: Box<Ordinal>,
        coefficient: u64,
        remainder: Box<Ordinal>,
    },
}

impl Ordinal {
    /// The canonical zero. Doubles as the "no remainder" sentinel in sums.
    pub const ZERO: Ordinal = Ordinal::Finite(0);

    /// The canonical one.
    pub const ONE: Ordinal = Ordinal::Finite(1);

    /// The finite ordinal n.
    #[inline]
    pub const fn finite(n: u64) -> Self {
        Ordinal::Finite(n)
    }

    /// ω raised to the given exponent.
    #[inline]
    pub fn power(exponent: Ordinal) -> Self {
        Ordinal::Power(Box::new(exponent))
    }

    /// The first transfinite ordinal, ω = ω^1.
    #[inline]
    pub fn omega() -> Self {
        Self::power(Ordinal::ONE)
    }

    /// ω^exponent · coefficient + remainder.
    ///
    /// Pass [`Ordinal::ZERO`] as the remainder when there is none. The CNF
    /// preconditions (`coefficient >= 1`, `remainder < ω^exponent`) are the
    /// caller's responsibility.
    #[inline]
    pub fn sum(exponent: Ordinal, coefficient: u64, remainder: Ordinal) -> Self {
        Ordinal::Sum {
            exponent: Box::new(exponent),
            coefficient,
            remainder: Box::new(remainder),
        }
    }

    /// Returns `true` for the canonical zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Ordinal::Finite(0))
    }

    /// Returns `true` for `Power` and `Sum` shapes, i.e. ordinals >= ω.
    #[inline]
    pub const fn is_transfinite(&self) -> bool {
        !matches!(self, Ordinal::Finite(_))
    }

    /// The representation of self + 1, restricted to exponent-valid forms.
    ///
    /// Not a general ordinal successor: callers always pass the exponent β
    /// of some ω^β term being raised to ω^(β+1). Adding one to ω^e·c + r
    /// only touches the part below ω^e, which is exactly what the CNF
    /// precondition on r guarantees.
    pub(crate) fn successor(&self) -> Ordinal {
        match self {
            Ordinal::Finite(n) => Ordinal::Finite(n + 1),
            // ω^0 = 1, so the successor is the finite ordinal 2.
            Ordinal::Power(exponent) if exponent.is_zero() => Ordinal::Finite(2),
            // ω^k + 1 is ω^k·1 + 1.
            Ordinal::Power(exponent) => Ordinal::Sum {
                exponent: exponent.clone(),
                coefficient: 1,
                remainder: Box::new(Ordinal::ONE),
            },
            Ordinal::Sum {
                exponent,
                coefficient,
                remainder,
            } => Ordinal::Sum {
                exponent: exponent.clone(),
                coefficient: *coefficient,
                remainder: Box::new(remainder.successor()),
            },
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordinal::Finite(n) => write!(f, "{}", n),
            Ordinal::Power(exponent) => write_power(f, exponent),
            Ordinal::Sum {
                exponent,
                coefficient,
                remainder,
            } => {
                write_power(f, exponent)?;
                if *coefficient != 1 {
                    write!(f, "·{}", coefficient)?;
                }
                if !remainder.is_zero() {
                    write!(f, " + {}", remainder)?;
                }
                Ok(())
            }
        }
    }
}

/// Render `ω^exponent`, parenthesizing sum exponents so `ω^(ω + 1)` does not
/// read as `ω^ω + 1`.
fn write_power(f: &mut fmt::Formatter<'_>, exponent: &Ordinal) -> fmt::Result {
    match exponent {
        Ordinal::Finite(1) => write!(f, "ω"),
        Ordinal::Finite(n) => write!(f, "ω^{}", n),
        Ordinal::Power(_) => write!(f, "ω^{}", exponent),
        Ordinal::Sum { .. } => write!(f, "ω^({})", exponent),
    }
}
