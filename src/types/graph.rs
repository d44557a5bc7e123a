//! Defines the route graph and associated functions.
//!
//! Routes are loaded into a [`petgraph`] directed graph. Location names
//! are interned into [`NodeIndex`] values through a [`HashMap`], so
//! traversal compares integers instead of strings while every result
//! still reports the original names.

use std::collections::HashMap;

use petgraph::{
    algo::astar,
    graph::{DiGraph, NodeIndex},
};

use crate::{
    path::Path,
    route::{Cost, Route},
};

/// One outgoing step from a location.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Hop {
    /// Position of the route in [`RouteGraph::routes`].
    pub(crate) route: usize,
    /// Location reached by taking the route.
    pub(crate) to: NodeIndex,
    /// Cost of the route.
    pub(crate) cost: Cost,
}

/// An immutable snapshot of every known route.
///
/// Parallel routes between the same pair of locations are kept apart;
/// each one is a separate way of extending a path.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    graph: DiGraph<String, Cost>,
    node_indices: HashMap<String, NodeIndex>,
    routes: Vec<Route>,
    /// Outgoing hops per node, in route insertion order.
    adjacency: Vec<Vec<Hop>>,
}

impl RouteGraph {
    /// Builds a graph from the given routes.
    ///
    /// # Time Complexity
    /// *O*(*n*) in the number of routes.
    pub fn new(routes: Vec<Route>) -> RouteGraph {
        let mut graph = DiGraph::with_capacity(routes.len(), routes.len());
        let mut node_indices: HashMap<String, NodeIndex> = HashMap::new();
        let mut adjacency: Vec<Vec<Hop>> = Vec::new();

        for (position, route) in routes.iter().enumerate() {
            let from = intern(&mut graph, &mut node_indices, &mut adjacency, &route.origin);
            let to = intern(
                &mut graph,
                &mut node_indices,
                &mut adjacency,
                &route.destination,
            );
            graph.add_edge(from, to, route.cost);
            adjacency[from.index()].push(Hop {
                route: position,
                to,
                cost: route.cost,
            });
        }

        RouteGraph {
            graph,
            node_indices,
            routes,
            adjacency,
        }
    }

    /// True when the graph holds no routes at all.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Return the number of routes in the graph.
    pub fn route_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get the number of distinct locations in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Every route, in the order it was supplied.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// True when `node` is the origin or destination of some route.
    pub fn contains_node(&self, node: &str) -> bool {
        self.node_indices.contains_key(node)
    }

    /// Returns all routes whose origin is `node`, in insertion order.
    ///
    /// An unknown location yields nothing.
    pub fn edges_from<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a Route> + 'a {
        self.node_indices
            .get(node)
            .into_iter()
            .flat_map(move |&index| self.hops(index))
            .map(move |hop| &self.routes[hop.route])
    }

    /// Finds the single cheapest path between two locations with the
    /// A* algorithm and a zero heuristic.
    ///
    /// Only meaningful for non-negative costs. Returns [`None`] if
    /// either location is unknown or no path exists.
    pub fn cheapest_path(&self, origin: &str, destination: &str) -> Option<Path> {
        let from = self.node_index(origin)?;
        let to = self.node_index(destination)?;
        let (cost, indices) = astar(
            &self.graph,
            from,
            |finish| finish == to,
            |e| *e.weight(),
            |_| Cost::ZERO,
        )?;
        Some(Path {
            nodes: indices
                .into_iter()
                .map(|i| self.node_name(i).to_string())
                .collect(),
            cost,
        })
    }

    /// Get the [`NodeIndex`] for a location name.
    pub(crate) fn node_index(&self, node: &str) -> Option<NodeIndex> {
        self.node_indices.get(node).copied()
    }

    /// Get the location name behind a [`NodeIndex`].
    pub(crate) fn node_name(&self, index: NodeIndex) -> &str {
        &self.graph[index]
    }

    /// Outgoing hops of a node in insertion order.
    pub(crate) fn hops(&self, index: NodeIndex) -> &[Hop] {
        self.adjacency
            .get(index.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Upper bound for node indices, used to size visited sets.
    pub(crate) fn node_bound(&self) -> usize {
        self.adjacency.len()
    }
}

impl FromIterator<Route> for RouteGraph {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        RouteGraph::new(iter.into_iter().collect())
    }
}

//---------------------------------------------------------------
// Private functions
//---------------------------------------------------------------

/// Returns the index for `name`, adding a node on first sight.
fn intern(
    graph: &mut DiGraph<String, Cost>,
    node_indices: &mut HashMap<String, NodeIndex>,
    adjacency: &mut Vec<Vec<Hop>>,
    name: &str,
) -> NodeIndex {
    if let Some(index) = node_indices.get(name) {
        return *index;
    }
    let index = graph.add_node(name.to_string());
    node_indices.insert(name.to_string(), index);
    adjacency.push(Vec::new());
    index
}
