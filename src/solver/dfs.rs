use grid_util::point::Point;
use log::info;

use crate::frontier::LifoFrontier;
use crate::grid::PolygonGrid;
use crate::solver::{path_cost, traverse, GoalTest, SearchResult};

impl PolygonGrid {
    /// Depth-first search from `source` to `dest`. The goal test happens
    /// when a node is popped, not when it is generated, and the LIFO
    /// frontier explores one branch fully before backtracking. Finds some
    /// route whenever one exists, with no shortest-route guarantee. Cost is
    /// the number of unit steps along the returned route.
    pub fn dfs(&self, source: Point, dest: Point) -> SearchResult<u32> {
        info!("dfs from {} to {}", source, dest);
        let (path, nodes_expanded) = traverse(
            self,
            source,
            dest,
            LifoFrontier::default(),
            GoalTest::OnExpansion,
            |_| 0.0,
        );
        SearchResult::from_traversal(path, nodes_expanded, |path| path_cost(path, |_, _| 1u32))
    }
}
