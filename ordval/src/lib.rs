//! Ordval: a strict order-embedding of the ordinals below ε₀ into the reals.
//!
//! The embedding f is computed recursively over the Cantor Normal Form of
//! its argument. Finite ordinals map to n/(n+1); powers ω^k map through a
//! closed form for finite k and a Möbius-type interpolation for k >= ω; sum
//! terms ω^β·c + δ interpolate between the valuations at neighbouring
//! coefficients, recursing into β and δ. Every computed value is memoized
//! in an explicit [`Valuator`] context, so repeated and recursive
//! evaluation stays linear in the nesting depth of the input.
//!
//! Whenever α < β in the ordinal order, f(α) < f(β); all values stay below
//! 5, the limit the nested-tower interpolation approaches from below.
//!
//! Example
//! ```
//! use ordval::prelude::*;
//!
//! let valuator = Valuator::new();
//!
//! // f(ω) = 1, f(ω^ω) = 3, and the embedding is strictly monotone.
//! let omega = Ordinal::omega();
//! let tower = Ordinal::power(Ordinal::omega());
//! assert_eq!(valuator.valuate(&omega).unwrap(), 1.0);
//! assert_eq!(valuator.valuate(&tower).unwrap(), 3.0);
//!
//! // ω·2 + 1 sits strictly between ω·2 and ω·3.
//! let alpha = Ordinal::sum(Ordinal::finite(1), 2, Ordinal::ONE);
//! let value = valuator.valuate(&alpha).unwrap();
//! assert!((value - 19.0 / 12.0).abs() < 1e-12);
//! ```

/// Error taxonomy and result alias.
pub mod error;
/// Cantor Normal Form representation of ordinals below ε₀.
pub mod ordinal;
/// The recursive valuation and its memoization context.
pub mod valuation;

pub use error::{Error, OrdResult};
pub use ordinal::Ordinal;
pub use valuation::{DEFAULT_RECURSION_LIMIT, Valuator, finite_value};

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::error::{Error, OrdResult};
    pub use crate::ordinal::Ordinal;
    pub use crate::valuation::{Valuator, finite_value};
}
