/// Population after iterating `p <- a*p - b*p^2` from day 1 through
/// `final_day`. A negative value is clamped to zero and ends the iteration
/// early.
pub fn population_at_day(final_day: u64, starting_population: f64, a: f64, b: f64) -> f64 {
    let mut current = starting_population;
    for _ in 2..final_day {
        current = a * current - b * current * current;
        if current < 0.0 {
            current = 0.0;
            break;
        }
    }
    current
}

/// Limiting population of the recurrence, evaluated at `final_day`, or
/// `None` when it grows without bound (`a > 1` with no quadratic damping).
pub fn population_limit(
    starting_population: f64,
    a: f64,
    b: f64,
    final_day: u64,
) -> Option<f64> {
    if starting_population == 0.0 || a == 0.0 {
        Some(0.0)
    } else if a > 1.0 && b == 0.0 {
        None
    } else {
        Some(population_at_day(final_day, starting_population, a, b))
    }
}
