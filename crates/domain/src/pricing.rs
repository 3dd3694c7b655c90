//! Approximate trip cost

/// Placeholder per-kilometer rate
pub const COST_PER_KM: f64 = 100.0;

/// Estimate the cost of a trip from its distance
#[must_use]
pub fn estimate_cost(distance_km: f64) -> f64 {
    distance_km * COST_PER_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_costs_nothing() {
        assert!(estimate_cost(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lagos_to_abuja() {
        assert!((estimate_cost(462.0) - 46_200.0).abs() < f64::EPSILON);
    }
}
