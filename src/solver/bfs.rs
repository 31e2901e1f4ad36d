use grid_util::point::Point;
use log::info;

use crate::frontier::FifoFrontier;
use crate::grid::PolygonGrid;
use crate::solver::{path_cost, traverse, GoalTest, SearchResult};

impl PolygonGrid {
    /// Breadth-first search from `source` to `dest`. Children are tested
    /// against the destination as they are generated, and the FIFO frontier
    /// makes the returned route hop-optimal. Cost is the number of unit
    /// steps, i.e. route length minus one. If `source == dest` the route is
    /// the single source cell and the frontier is never touched.
    pub fn bfs(&self, source: Point, dest: Point) -> SearchResult<u32> {
        info!("bfs from {} to {}", source, dest);
        let (path, nodes_expanded) = traverse(
            self,
            source,
            dest,
            FifoFrontier::default(),
            GoalTest::OnGeneration,
            |_| 0.0,
        );
        SearchResult::from_traversal(path, nodes_expanded, |path| path_cost(path, |_, _| 1u32))
    }
}
