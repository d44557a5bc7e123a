//! Error kinds surfaced by the router and its storage collaborator.

use thiserror::Error;

use crate::route::RouteId;

/// Convenient result alias for the router.
pub type Result<T> = std::result::Result<T, RouterError>;

/// Failures raised by a [`RouteStore`](crate::store::RouteStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing storage could not be reached or refused the request.
    #[error("route storage unavailable: {0}")]
    Unavailable(String),

    /// A writer panicked while holding the storage lock.
    #[error("route storage lock poisoned")]
    LockPoisoned,
}

/// Top-level router error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The route catalog is empty.
    #[error("no routes available")]
    NoRoutesAvailable,

    /// Routes exist but none connect the requested pair.
    #[error("route not found from {origin} to {destination}")]
    RouteNotFound { origin: String, destination: String },

    /// The storage collaborator failed. Never reported as `RouteNotFound`.
    #[error("upstream failure: {0}")]
    Upstream(#[from] StoreError),

    /// No stored route carries the given id.
    #[error("unknown route id {0}")]
    UnknownRoute(RouteId),

    /// A route for this origin/destination pair is already stored.
    #[error("route from {origin} to {destination} already exists")]
    DuplicateRoute { origin: String, destination: String },

    /// A batch insert contained only routes that were already stored.
    #[error("no new routes were inserted; all routes already exist")]
    NoNewRoutes,

    /// The route record is malformed.
    #[error("invalid route: {0}")]
    InvalidRoute(String),
}
