use grid_util::point::Point;
use log::info;

use crate::frontier::BestFirstFrontier;
use crate::geometry::{euclidean_distance, Polygon};
use crate::grid::PolygonGrid;
use crate::solver::{path_cost, traverse, GoalTest, SearchResult};

/// Per-step cost of entering a turf cell; plain cells cost [STEP_COST].
const TURF_STEP_COST: f64 = 1.5;
const STEP_COST: f64 = 1.0;

impl PolygonGrid {
    /// Greedy best-first search from `source` to `dest`. The frontier is
    /// keyed purely by the straight-line distance to `dest`; accumulated
    /// cost plays no part in the ordering, so this is not A* and the route
    /// carries no cost-optimality guarantee. The reached map keeps one node
    /// per state and is never revised, matching classical greedy best-first.
    ///
    /// Cost sums, over consecutive steps, 1.5 when the arriving cell lies
    /// on or inside any turf polygon and 1.0 otherwise.
    /// Turfs never block movement; impassability remains the grid's
    /// enclosure set alone.
    pub fn greedy_best_first(
        &self,
        source: Point,
        dest: Point,
        turfs: &[Polygon],
    ) -> SearchResult<f64> {
        info!("greedy best-first from {} to {}", source, dest);
        let (path, nodes_expanded) = traverse(
            self,
            source,
            dest,
            BestFirstFrontier::default(),
            GoalTest::OnExpansion,
            |p| euclidean_distance(p, &dest),
        );
        SearchResult::from_traversal(path, nodes_expanded, |path| {
            path_cost(path, |_, to| {
                if turfs.iter().any(|t| t.contains(to)) {
                    TURF_STEP_COST
                } else {
                    STEP_COST
                }
            })
        })
    }
}
