//! Best-route lookups driven through the public router API.

use rstest::{fixture, rstest};
use rust_decimal_macros::dec;

use route_cost::{Cost, MemoryRouteStore, Route, Router, RouterError};

#[fixture]
fn catalog() -> Router<MemoryRouteStore> {
    Router::new(MemoryRouteStore::with_routes(vec![
        Route::new("GRU", "BRC", dec!(10)),
        Route::new("BRC", "SCL", dec!(5)),
        Route::new("GRU", "CDG", dec!(75)),
        Route::new("GRU", "SCL", dec!(20)),
        Route::new("GRU", "ORL", dec!(56)),
        Route::new("ORL", "CDG", dec!(5)),
        Route::new("SCL", "ORL", dec!(20)),
    ]))
}

#[rstest]
#[case("GRU", "CDG", "GRU - BRC - SCL - ORL - CDG ao custo de $40")]
#[case("BRC", "CDG", "BRC - SCL - ORL - CDG ao custo de $30")]
#[case("GRU", "SCL", "GRU - BRC - SCL ao custo de $15")]
#[case("SCL", "SCL", "SCL ao custo de $0")]
fn best_route(
    catalog: Router<MemoryRouteStore>,
    #[case] origin: &str,
    #[case] destination: &str,
    #[case] expected: &str,
) {
    assert_eq!(
        catalog.best_route_summary(origin, destination).unwrap(),
        expected
    );
}

#[rstest]
fn full_ranking(catalog: Router<MemoryRouteStore>) {
    let ranked = catalog.find_best_route("GRU", "CDG").unwrap();
    let costs: Vec<Cost> = ranked.paths().iter().map(|p| p.cost).collect();
    assert_eq!(costs, vec![dec!(40), dec!(45), dec!(61), dec!(75)]);
    assert!(ranked
        .listing()
        .starts_with("1. GRU - BRC - SCL - ORL - CDG ao custo de $40\n2. "));
}

#[rstest]
fn unreachable_pair(catalog: Router<MemoryRouteStore>) {
    assert_eq!(
        catalog.find_best_route("CDG", "GRU").unwrap_err(),
        RouterError::RouteNotFound {
            origin: "CDG".to_string(),
            destination: "GRU".to_string(),
        }
    );
}

#[rstest]
fn empty_catalog() {
    let router = Router::new(MemoryRouteStore::new());
    assert_eq!(
        router.find_best_route("GRU", "CDG").unwrap_err(),
        RouterError::NoRoutesAvailable
    );
}

/// Parallel routes are each their own candidate.
#[rstest]
fn parallel_routes() {
    let router = Router::new(MemoryRouteStore::with_routes(vec![
        Route::new("A", "B", dec!(7)),
        Route::new("A", "B", dec!(3)),
    ]));
    let ranked = router.find_best_route("A", "B").unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked.best().cost, dec!(3));
    assert_eq!(
        ranked.to_string(),
        "1. A - B ao custo de $3\n2. A - B ao custo de $7"
    );
}

#[rstest]
fn repeated_lookups_agree(catalog: Router<MemoryRouteStore>) {
    let first = catalog.find_best_route("GRU", "CDG").unwrap();
    let second = catalog.find_best_route("GRU", "CDG").unwrap();
    assert_eq!(first, second);
}

/// Fractional costs that sum to the same total tie, and the tie goes to
/// the path found first.
#[rstest]
fn fractional_costs_tie_exactly() {
    let router = Router::new(MemoryRouteStore::with_routes(vec![
        Route::new("A", "B", dec!(0.1)),
        Route::new("B", "C", dec!(0.2)),
        Route::new("A", "C", dec!(0.3)),
    ]));
    assert_eq!(
        router.best_route_summary("A", "C").unwrap(),
        "A - B - C ao custo de $0.3"
    );
    assert_eq!(
        router.find_best_route("A", "C").unwrap().listing(),
        "1. A - B - C ao custo de $0.3\n2. A - C ao custo de $0.3"
    );
}
