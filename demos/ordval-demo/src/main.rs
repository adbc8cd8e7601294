use ordval::prelude::*;

fn main() {
    // One valuation per shape the mapping distinguishes, from finite
    // ordinals up to the triple tower ω^ω^ω:
    //   f(0) = 0        f(ω)   = 1        f(ω·2)     = 3/2
    //   f(1) = 1/2      f(ω^2) = 2        f(ω·2 + 1) = 19/12
    //   f(2) = 2/3      f(ω^ω) = 3        f(ω^2 + ω) = 25/12
    let omega = Ordinal::omega();
    let examples = [
        Ordinal::ZERO,
        Ordinal::ONE,
        Ordinal::finite(2),
        Ordinal::power(Ordinal::ZERO),
        omega.clone(),
        Ordinal::power(Ordinal::finite(2)),
        Ordinal::power(Ordinal::finite(3)),
        Ordinal::power(omega.clone()),
        Ordinal::power(Ordinal::power(omega.clone())),
        Ordinal::sum(Ordinal::ONE, 2, Ordinal::ZERO),
        Ordinal::sum(Ordinal::ONE, 3, Ordinal::ZERO),
        Ordinal::sum(Ordinal::ONE, 2, Ordinal::ONE),
        Ordinal::sum(Ordinal::finite(2), 2, Ordinal::ZERO),
        Ordinal::sum(Ordinal::finite(2), 1, omega),
    ];

    let valuator = Valuator::new();
    for alpha in &examples {
        let value = valuator.valuate(alpha).unwrap();
        println!("f({}) = {}", alpha, value);
    }
    println!("{} valuations memoized", valuator.cache_size());
}
