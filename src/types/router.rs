//! The core of the route cost library.
//!
//! The engine module snapshots the route catalog from a
//! [`RouteStore`](crate::store::RouteStore), builds a
//! [`RouteGraph`](crate::graph::RouteGraph) and ranks every simple path
//! between two locations. It also fronts the catalog maintenance
//! operations and enforces the rules the store itself does not.

/// The router engine module.
pub mod engine {
    use crate::{
        error::{Result, RouterError},
        graph::RouteGraph,
        path::{Path, RankedRoutes},
        path_finder::find_routes,
        route::{Route, RouteId},
        store::RouteStore,
    };

    /// A Router wraps a route store and answers best-route queries
    /// against a fresh snapshot of it.
    #[derive(Debug)]
    pub struct Router<S> {
        store: S,
    }

    impl<S: RouteStore> Router<S> {
        /// Creates a new router on top of the given store.
        pub fn new(store: S) -> Self {
            Router { store }
        }

        /// Access the underlying store.
        pub fn store(&self) -> &S {
            &self.store
        }

        /// Takes a consistent snapshot of the current catalog.
        ///
        /// # Errors
        /// [`RouterError::Upstream`] if the store fails.
        pub fn snapshot(&self) -> Result<RouteGraph> {
            let routes = self.store.fetch_all_routes().map_err(|e| {
                error!("failed to fetch routes: {}", e);
                RouterError::from(e)
            })?;
            debug!("snapshot holds {} routes", routes.len());
            Ok(RouteGraph::new(routes))
        }

        /// Finds every simple path from `origin` to `destination`,
        /// ranked by ascending total cost.
        ///
        /// # Errors
        /// * [`RouterError::Upstream`] if the store fails.
        /// * [`RouterError::NoRoutesAvailable`] if the catalog is empty.
        /// * [`RouterError::RouteNotFound`] if nothing connects the pair.
        pub fn find_best_route(&self, origin: &str, destination: &str) -> Result<RankedRoutes> {
            info!("Finding best route from {} to {}", origin, destination);
            let graph = self.snapshot()?;
            match find_routes(&graph, origin, destination) {
                Ok(ranked) => {
                    info!("Best route: {}", ranked.best());
                    debug!("{} candidate routes", ranked.len());
                    Ok(ranked)
                }
                Err(e) => {
                    warn!("No route from {} to {}: {}", origin, destination, e);
                    Err(e)
                }
            }
        }

        /// The cheapest path between two locations.
        ///
        /// # Errors
        /// See [`Router::find_best_route`].
        pub fn best_route(&self, origin: &str, destination: &str) -> Result<Path> {
            self.find_best_route(origin, destination)
                .map(|ranked| ranked.best().clone())
        }

        /// The cheapest path formatted as
        /// `GRU - BRC - SCL - ORL - CDG ao custo de $40`.
        ///
        /// # Errors
        /// See [`Router::find_best_route`].
        pub fn best_route_summary(&self, origin: &str, destination: &str) -> Result<String> {
            self.best_route(origin, destination)
                .map(|path| path.to_string())
        }

        /// Every stored route.
        ///
        /// # Errors
        /// [`RouterError::Upstream`] if the store fails.
        pub fn list_routes(&self) -> Result<Vec<Route>> {
            Ok(self.store.fetch_all_routes()?)
        }

        /// The stored route with the given id.
        ///
        /// # Errors
        /// * [`RouterError::UnknownRoute`] if no route has this id.
        /// * [`RouterError::Upstream`] if the store fails.
        pub fn get_route(&self, id: RouteId) -> Result<Route> {
            self.store
                .get_route(id)?
                .ok_or(RouterError::UnknownRoute(id))
        }

        /// Adds a route to the catalog.
        ///
        /// # Errors
        /// * [`RouterError::InvalidRoute`] if a location name is blank.
        /// * [`RouterError::DuplicateRoute`] if the origin/destination pair
        ///   is already stored. Concurrent adds of one pair let exactly one
        ///   through.
        /// * [`RouterError::Upstream`] if the store fails.
        pub fn add_route(&self, route: Route) -> Result<Route> {
            validate(&route)?;
            match self.store.insert_new_routes(vec![route.clone()])?.pop() {
                Some(added) => {
                    info!("Route from {} to {} added", added.origin, added.destination);
                    Ok(added)
                }
                None => {
                    warn!(
                        "Route from {} to {} already exists",
                        route.origin, route.destination
                    );
                    Err(RouterError::DuplicateRoute {
                        origin: route.origin,
                        destination: route.destination,
                    })
                }
            }
        }

        /// Adds every route whose origin/destination pair is not stored
        /// yet. Later repeats of a pair within the batch are skipped too.
        ///
        /// Returns the routes actually inserted.
        ///
        /// # Errors
        /// * [`RouterError::InvalidRoute`] if any route is malformed; nothing
        ///   is inserted.
        /// * [`RouterError::NoNewRoutes`] if every pair already existed.
        /// * [`RouterError::Upstream`] if the store fails.
        pub fn add_routes(&self, routes: Vec<Route>) -> Result<Vec<Route>> {
            for route in &routes {
                validate(route)?;
            }
            let fresh = self.store.insert_new_routes(routes)?;
            if fresh.is_empty() {
                warn!("No new routes in batch");
                return Err(RouterError::NoNewRoutes);
            }
            info!("{} routes added", fresh.len());
            Ok(fresh)
        }

        /// Replaces the stored route carrying the same id.
        ///
        /// # Errors
        /// * [`RouterError::InvalidRoute`] if a location name is blank.
        /// * [`RouterError::UnknownRoute`] if no route has this id.
        /// * [`RouterError::Upstream`] if the store fails.
        pub fn update_route(&self, route: Route) -> Result<Route> {
            validate(&route)?;
            if !self.store.update_route(route.clone())? {
                return Err(RouterError::UnknownRoute(route.id));
            }
            info!("Route {} updated", route.id);
            Ok(route)
        }

        /// Removes a route from the catalog and returns it.
        ///
        /// # Errors
        /// * [`RouterError::UnknownRoute`] if no route has this id.
        /// * [`RouterError::Upstream`] if the store fails.
        pub fn delete_route(&self, id: RouteId) -> Result<Route> {
            let removed = self
                .store
                .delete_route(id)?
                .ok_or(RouterError::UnknownRoute(id))?;
            info!("Route {} deleted", id);
            Ok(removed)
        }
    }

    /// Location names must not be blank.
    fn validate(route: &Route) -> Result<()> {
        if route.origin.trim().is_empty() {
            return Err(RouterError::InvalidRoute("origin is empty".to_string()));
        }
        if route.destination.trim().is_empty() {
            return Err(RouterError::InvalidRoute("destination is empty".to_string()));
        }
        Ok(())
    }
}
