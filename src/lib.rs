//! Route Cost Lookup Library.
//! Enumerates travel paths between locations and ranks them by total
//! cost.

#[macro_use]
extern crate log;

pub mod types {
    pub mod error;
    pub mod graph;
    pub mod path;
    pub mod route;
    pub mod router;
}

pub mod algorithms {
    pub mod path_finder;
}

pub mod utils {
    pub mod generator;
    pub mod store;
}

pub use algorithms::*;
pub use types::*;
pub use utils::*;

pub use error::{Result, RouterError, StoreError};
pub use graph::RouteGraph;
pub use path::{Path, RankedRoutes};
pub use route::{Cost, Route, RouteId};
pub use router::engine::Router;
pub use store::{MemoryRouteStore, RouteStore};
