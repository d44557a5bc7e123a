//! Struct definitions for [`Path`] candidates and the ranked result
//! handed back to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::route::Cost;

/// Separator placed between location names of a formatted path.
pub const PATH_SEPARATOR: &str = " - ";

/// Text placed between a formatted path and its total cost.
pub const COST_LABEL: &str = " ao custo de $";

/// A simple path from origin to destination.
///
/// No location appears twice in `nodes`, and `cost` is the sum of the
/// costs of the routes between consecutive locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Location names, origin first and destination last.
    pub nodes: Vec<String>,

    /// Total cost of the traversed routes.
    pub cost: Cost,
}

impl fmt::Display for Path {
    /// Formats as `GRU - BRC - CDG ao custo de $40`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.nodes.join(PATH_SEPARATOR),
            COST_LABEL,
            self.cost
        )
    }
}

/// Candidate paths sorted by ascending total cost.
///
/// Never empty: an unreachable destination is reported as an error
/// instead of an empty ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRoutes {
    paths: Vec<Path>,
}

impl RankedRoutes {
    /// Wraps already ranked paths. Returns [`None`] for an empty list.
    pub(crate) fn new(paths: Vec<Path>) -> Option<Self> {
        if paths.is_empty() {
            None
        } else {
            Some(RankedRoutes { paths })
        }
    }

    /// The cheapest path. Ties go to the path discovered first.
    pub fn best(&self) -> &Path {
        // `new` rejects empty lists.
        &self.paths[0]
    }

    /// All candidates in ranked order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Numbered listing of every candidate, one per line, starting at 1.
    pub fn listing(&self) -> String {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, path)| format!("{}. {}", i + 1, path))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Consumes the ranking and returns the paths.
    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }
}

impl fmt::Display for RankedRoutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.listing())
    }
}

#[cfg(test)]
mod path_tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn path(nodes: &[&str], cost: Cost) -> Path {
        Path {
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
            cost,
        }
    }

    #[test]
    fn test_display_whole_cost() {
        let p = path(&["GRU", "BRC", "SCL", "ORL", "CDG"], dec!(40));
        assert_eq!(p.to_string(), "GRU - BRC - SCL - ORL - CDG ao custo de $40");
    }

    #[test]
    fn test_display_fractional_cost() {
        assert_eq!(path(&["A", "B"], dec!(2.5)).to_string(), "A - B ao custo de $2.5");
    }

    /// Costs print with the scale they were written in.
    #[test]
    fn test_display_keeps_scale() {
        assert_eq!(path(&["A", "B"], dec!(10.50)).to_string(), "A - B ao custo de $10.50");
    }

    #[test]
    fn test_display_single_node() {
        assert_eq!(path(&["GRU"], dec!(0)).to_string(), "GRU ao custo de $0");
    }

    #[test]
    fn test_empty_ranking_is_rejected() {
        assert!(RankedRoutes::new(vec![]).is_none());
    }

    #[test]
    fn test_listing() {
        let ranked = RankedRoutes::new(vec![
            path(&["A", "B"], dec!(3)),
            path(&["A", "C", "B"], dec!(7)),
        ])
        .unwrap();
        assert_eq!(ranked.best(), &path(&["A", "B"], dec!(3)));
        assert_eq!(ranked.len(), 2);
        assert!(!ranked.is_empty());
        assert_eq!(
            ranked.listing(),
            "1. A - B ao custo de $3\n2. A - C - B ao custo de $7"
        );
        assert_eq!(ranked.to_string(), ranked.listing());
    }
}
