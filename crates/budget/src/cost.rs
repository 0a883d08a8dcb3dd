//! Per-citizen cost conversion.

use bevy::prelude::*;

/// National population in millions used when no configuration overrides it.
pub const DEFAULT_POPULATION_MILLIONS: f64 = 334.9;

/// Round to two decimal places (half away from zero).
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts budgets (millions) into an annual cost per citizen (dollars).
///
/// Both budget and population are in millions, so the units cancel and the
/// quotient is dollars per person per year.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CostCalculator {
    population_millions: f64,
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self {
            population_millions: DEFAULT_POPULATION_MILLIONS,
        }
    }
}

impl CostCalculator {
    /// Returns `None` unless the population is finite and positive.
    pub fn new(population_millions: f64) -> Option<Self> {
        if population_millions.is_finite() && population_millions > 0.0 {
            Some(Self {
                population_millions,
            })
        } else {
            None
        }
    }

    pub fn population_millions(&self) -> f64 {
        self.population_millions
    }

    /// `round(budget_millions / population_millions, 2)`.
    pub fn cost_per_citizen(&self, budget_millions: f64) -> f64 {
        round_cents(budget_millions / self.population_millions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_population() {
        let calc = CostCalculator::default();
        assert!((calc.population_millions() - 334.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cost_per_citizen_known_values() {
        let calc = CostCalculator::default();
        assert!((calc.cost_per_citizen(1000.0) - 2.99).abs() < 1e-9);
        assert!((calc.cost_per_citizen(500.0) - 1.49).abs() < 1e-9);
        assert!((calc.cost_per_citizen(848_200.0) - 2532.70).abs() < 1e-9);
        assert!(calc.cost_per_citizen(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cost_matches_rounded_quotient_for_catalogue() {
        let calc = CostCalculator::default();
        for &(_, budget) in crate::catalogue::BUILTIN_AGENCIES {
            let expected = (budget / 334.9 * 100.0).round() / 100.0;
            assert!((calc.cost_per_citizen(budget) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_result_has_at_most_two_decimals() {
        let calc = CostCalculator::default();
        for budget in [1.0, 7.3, 125.9, 310.9, 123_456.789] {
            let cost = calc.cost_per_citizen(budget);
            let scaled = cost * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{budget} -> {cost}");
        }
    }

    #[test]
    fn test_invalid_population_rejected() {
        assert!(CostCalculator::new(0.0).is_none());
        assert!(CostCalculator::new(-5.0).is_none());
        assert!(CostCalculator::new(f64::NAN).is_none());
        assert!(CostCalculator::new(f64::INFINITY).is_none());
        assert!(CostCalculator::new(100.0).is_some());
    }

    #[test]
    fn test_custom_population() {
        let calc = CostCalculator::new(100.0).unwrap();
        assert!((calc.cost_per_citizen(250.0) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_round_cents() {
        assert!((round_cents(2.985_965) - 2.99).abs() < 1e-9);
        assert!((round_cents(1.492_982) - 1.49).abs() < 1e-9);
        assert!((round_cents(-1.234) + 1.23).abs() < 1e-9);
    }
}
