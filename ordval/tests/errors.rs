use ordval::prelude::*;

#[test]
fn zero_coefficient_is_rejected_before_any_recursion() {
    let valuator = Valuator::new();
    let bad = Ordinal::sum(Ordinal::ONE, 0, Ordinal::ZERO);

    let err = valuator.valuate(&bad).unwrap_err();
    assert!(err.is_invalid_coefficient());
    assert_eq!(err, Error::InvalidCoefficient { coefficient: 0 });

    // Nothing was cached on the failing path.
    assert_eq!(valuator.cache_size(), 0);
}

#[test]
fn failures_do_not_poison_the_cache() {
    let valuator = Valuator::new();

    // A valid outer term with an invalid nested remainder: the sub-results
    // computed before the failure stay cached, the failing terms do not.
    let bad_remainder = Ordinal::sum(Ordinal::ZERO, 0, Ordinal::ZERO);
    let bad = Ordinal::sum(Ordinal::ONE, 2, bad_remainder);

    let err = valuator.valuate(&bad).unwrap_err();
    assert!(err.is_invalid_coefficient());

    // Repeating the call reports the same error instead of a cached value.
    assert_eq!(valuator.valuate(&bad).unwrap_err(), err);

    // The valuator keeps working for well-formed input.
    assert_eq!(valuator.valuate(&Ordinal::omega()).unwrap(), 1.0);
}

#[test]
fn recursion_limit_is_reported_not_overflowed() {
    let valuator = Valuator::with_recursion_limit(8);

    let mut tower = Ordinal::omega();
    for _ in 0..32 {
        tower = Ordinal::power(tower);
    }

    let err = valuator.valuate(&tower).unwrap_err();
    assert_eq!(err, Error::RecursionLimitExceeded { limit: 8 });
    assert_eq!(valuator.cache_size(), 0);
}

#[test]
fn default_limit_covers_deep_towers() {
    let valuator = Valuator::new();

    let mut tower = Ordinal::omega();
    for _ in 0..500 {
        tower = Ordinal::power(tower);
    }

    let value = valuator.valuate(&tower).unwrap();
    assert!(value > 4.0 && value < 5.0);
}

#[test]
fn errors_render_descriptive_messages() {
    let err = Error::InvalidCoefficient { coefficient: 0 };
    assert!(err.to_string().contains("coefficient"));

    let err = Error::RecursionLimitExceeded { limit: 8 };
    assert!(err.to_string().contains("recursion limit of 8"));
}
