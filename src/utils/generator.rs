//! Generates random route catalogs.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::route::{Cost, Route};

/// Generate `route_count` random routes among `node_count` locations
/// named `L0`, `L1`, ...
///
/// Costs carry two decimal places, drawn as hundredths from
/// `cost_cents`. Self-loops are never produced but parallel routes may
/// be.
///
/// # Arguments
/// * `rng` - Source of randomness. Seed it for reproducible catalogs.
/// * `node_count` - Number of candidate locations. Must be at least 2
///   for any route to be generated.
/// * `route_count` - Number of routes to generate.
/// * `cost_cents` - Inclusive range of route costs, in hundredths.
pub fn generate_routes<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    route_count: usize,
    cost_cents: RangeInclusive<i64>,
) -> Vec<Route> {
    if node_count < 2 {
        return Vec::new();
    }

    (0..route_count)
        .map(|_| {
            let from = rng.gen_range(0..node_count);
            // Skip `from` by shifting everything at or above it.
            let mut to = rng.gen_range(0..node_count - 1);
            if to >= from {
                to += 1;
            }
            let cost = Cost::new(rng.gen_range(cost_cents.clone()), 2);
            Route::new(format!("L{}", from), format!("L{}", to), cost)
        })
        .collect()
}
