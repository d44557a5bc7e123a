//! Route storage collaborator.
//!
//! The [`RouteStore`] trait is the contract the [`Router`] needs from
//! whatever keeps the route catalog. [`MemoryRouteStore`] is a
//! lock-guarded in-memory implementation used by tests and embedders
//! that do not need durable storage.
//!
//! [`Router`]: crate::router::engine::Router

use std::{collections::HashSet, sync::RwLock};

use crate::{
    error::StoreError,
    route::{Route, RouteId},
};

/// Read and write access to persisted routes.
///
/// A store does not validate costs, and `insert_route`/`insert_routes`
/// accept parallel routes. Other business rules live in the router.
/// `insert_new_routes` is the one leg-aware write: the router relies on
/// it being atomic to keep origin/destination pairs unique.
pub trait RouteStore {
    /// Return every stored route, in insertion order.
    fn fetch_all_routes(&self) -> Result<Vec<Route>, StoreError>;

    /// Return the route with the given id, if any.
    fn get_route(&self, id: RouteId) -> Result<Option<Route>, StoreError>;

    /// Append a route.
    fn insert_route(&self, route: Route) -> Result<(), StoreError>;

    /// Append several routes, keeping their order.
    fn insert_routes(&self, routes: Vec<Route>) -> Result<(), StoreError>;

    /// Append each route whose origin/destination pair is neither stored
    /// nor taken by an earlier route of the same batch. The check and the
    /// write happen as one atomic step. Returns the routes inserted.
    fn insert_new_routes(&self, routes: Vec<Route>) -> Result<Vec<Route>, StoreError>;

    /// Replace the stored route that has the same id. Returns `false` if
    /// there was none.
    fn update_route(&self, route: Route) -> Result<bool, StoreError>;

    /// Remove the route with the given id. Returns the removed route.
    fn delete_route(&self, id: RouteId) -> Result<Option<Route>, StoreError>;
}

/// Routes kept in a vector behind a [`RwLock`].
#[derive(Debug, Default)]
pub struct MemoryRouteStore {
    routes: RwLock<Vec<Route>>,
}

impl MemoryRouteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `routes`, stored as given.
    pub fn with_routes(routes: Vec<Route>) -> Self {
        MemoryRouteStore {
            routes: RwLock::new(routes),
        }
    }
}

impl RouteStore for MemoryRouteStore {
    fn fetch_all_routes(&self) -> Result<Vec<Route>, StoreError> {
        let routes = self.routes.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(routes.clone())
    }

    fn get_route(&self, id: RouteId) -> Result<Option<Route>, StoreError> {
        let routes = self.routes.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(routes.iter().find(|route| route.id == id).cloned())
    }

    fn insert_route(&self, route: Route) -> Result<(), StoreError> {
        debug!("inserting route: {:?}", route);
        let mut routes = self.routes.write().map_err(|_| StoreError::LockPoisoned)?;
        routes.push(route);
        Ok(())
    }

    fn insert_routes(&self, batch: Vec<Route>) -> Result<(), StoreError> {
        debug!("inserting {} routes", batch.len());
        let mut routes = self.routes.write().map_err(|_| StoreError::LockPoisoned)?;
        routes.extend(batch);
        Ok(())
    }

    fn insert_new_routes(&self, batch: Vec<Route>) -> Result<Vec<Route>, StoreError> {
        let mut routes = self.routes.write().map_err(|_| StoreError::LockPoisoned)?;
        let mut seen: HashSet<(String, String)> = routes
            .iter()
            .map(|r| (r.origin.clone(), r.destination.clone()))
            .collect();
        let fresh: Vec<Route> = batch
            .into_iter()
            .filter(|r| seen.insert((r.origin.clone(), r.destination.clone())))
            .collect();
        debug!("inserting {} new routes", fresh.len());
        routes.extend(fresh.iter().cloned());
        Ok(fresh)
    }

    fn update_route(&self, route: Route) -> Result<bool, StoreError> {
        debug!("updating route: {:?}", route);
        let mut routes = self.routes.write().map_err(|_| StoreError::LockPoisoned)?;
        match routes.iter_mut().find(|stored| stored.id == route.id) {
            Some(stored) => {
                *stored = route;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_route(&self, id: RouteId) -> Result<Option<Route>, StoreError> {
        debug!("deleting route: {}", id);
        let mut routes = self.routes.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(routes
            .iter()
            .position(|route| route.id == id)
            .map(|index| routes.remove(index)))
    }
}
