//! Exhaustive simple-path enumeration over a [`RouteGraph`].
//!
//! The search is a depth-first walk that never revisits a location
//! already on the current path. Instead of recursing, it keeps an
//! explicit stack of frames, one per location on the current path, so
//! deep graphs cannot overflow the call stack. Frames are entered and
//! left in the same order a recursive walk would, which keeps the
//! discovery order (and therefore tie-breaking) reproducible.
//!
//! Work grows with the number of simple paths, which is exponential on
//! dense graphs. No pruning is done beyond the cycle guard.

use petgraph::graph::NodeIndex;

use crate::{
    error::{Result, RouterError},
    graph::RouteGraph,
    path::{Path, RankedRoutes},
    route::Cost,
};

/// A location on the current path and the next outgoing hop to try.
#[derive(Debug)]
struct Frame {
    node: NodeIndex,
    cost: Cost,
    next_hop: usize,
}

/// Enumerates every simple path from `origin` to `destination`, in
/// depth-first discovery order.
///
/// `origin == destination` yields one single-node path of cost 0. An
/// unknown origin or destination yields nothing.
pub fn enumerate_paths(graph: &RouteGraph, origin: &str, destination: &str) -> Vec<Path> {
    let (Some(start), Some(goal)) = (graph.node_index(origin), graph.node_index(destination))
    else {
        return Vec::new();
    };

    let mut found = Vec::new();
    let mut on_path = vec![false; graph.node_bound()];
    let mut current: Vec<NodeIndex> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    let mut enter = |node: NodeIndex,
                     cost: Cost,
                     current: &mut Vec<NodeIndex>,
                     on_path: &mut Vec<bool>,
                     stack: &mut Vec<Frame>| {
        current.push(node);
        on_path[node.index()] = true;
        if node == goal {
            found.push(Path {
                nodes: current
                    .iter()
                    .map(|&i| graph.node_name(i).to_string())
                    .collect(),
                cost,
            });
            // Backtrack immediately; a completed path is never extended.
            current.pop();
            on_path[node.index()] = false;
        } else {
            stack.push(Frame {
                node,
                cost,
                next_hop: 0,
            });
        }
    };

    enter(
        start,
        Cost::ZERO,
        &mut current,
        &mut on_path,
        &mut stack,
    );

    while let Some(frame) = stack.last_mut() {
        match graph.hops(frame.node).get(frame.next_hop) {
            Some(hop) => {
                frame.next_hop += 1;
                if !on_path[hop.to.index()] {
                    let cost = frame.cost + hop.cost;
                    enter(hop.to, cost, &mut current, &mut on_path, &mut stack);
                }
            }
            None => {
                let node = frame.node;
                stack.pop();
                current.pop();
                on_path[node.index()] = false;
            }
        }
    }

    found
}

/// Sorts candidates by ascending total cost. The sort is stable, so
/// equal costs keep their discovery order.
pub fn rank_paths(mut paths: Vec<Path>) -> Vec<Path> {
    paths.sort_by_key(|path| path.cost);
    paths
}

/// Enumerates and ranks every simple path between two locations.
///
/// # Errors
/// * [`RouterError::NoRoutesAvailable`] if the graph has no routes.
/// * [`RouterError::RouteNotFound`] if no path connects the pair,
///   including when either location is absent from the graph.
pub fn find_routes(graph: &RouteGraph, origin: &str, destination: &str) -> Result<RankedRoutes> {
    if graph.is_empty() {
        return Err(RouterError::NoRoutesAvailable);
    }

    RankedRoutes::new(rank_paths(enumerate_paths(graph, origin, destination))).ok_or_else(|| {
        RouterError::RouteNotFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    })
}
