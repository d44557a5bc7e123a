//! Definition of the [`Route`] type.
//!
//! A route is one directed, weighted connection between two named
//! locations. There is no separate node entity: a location exists only
//! because some route starts or ends there.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The additive weight of a route or a path.
///
/// Kept in base-10 so fractional costs add up exactly: `0.1 + 0.2` is
/// `0.3`, and paths with equal totals compare equal.
pub type Cost = Decimal;

/// Identifier assigned to a route record.
pub type RouteId = Uuid;

/// A route is a connection from one location to another.
/// The cost represents the "weight" of the route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// Record identifier. Not part of the graph semantics.
    pub id: RouteId,

    /// Location the route departs from. Matched case-sensitively.
    pub origin: String,

    /// Location the route arrives at.
    pub destination: String,

    /// The weight of the route. Sign is not checked.
    pub cost: Cost,
}

impl Route {
    /// Creates a route with a freshly generated id.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, cost: Cost) -> Self {
        Route {
            id: Uuid::new_v4(),
            origin: origin.into(),
            destination: destination.into(),
            cost,
        }
    }
}

#[cfg(test)]
mod route_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Route::new("GRU", "BRC", dec!(10));
        let b = Route::new("GRU", "BRC", dec!(10));
        assert_ne!(a.id, b.id);
        assert_eq!(a.cost, dec!(10));
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "origin": "GRU",
            "destination": "BRC",
            "cost": 10.5
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.origin, "GRU");
        assert_eq!(route.destination, "BRC");
        assert_eq!(route.cost, dec!(10.5));
    }
}
