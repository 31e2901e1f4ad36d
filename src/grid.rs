use grid_util::point::Point;
use smallvec::SmallVec;

use crate::geometry::Polygon;

/// Side length of the conventional square world used by the bundled demos
/// and world files.
pub const DEFAULT_GRID_SIZE: i32 = 50;

/// Candidate moves in the fixed generation order: up, right, down, left.
const MOVES: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A bounded 4-connected grid whose impassable region is described by
/// enclosure polygons. A cell is blocked when it lies on or inside any
/// enclosure; there is no per-cell occupancy storage, the polygon predicate
/// is the source of truth.
#[derive(Clone, Debug)]
pub struct PolygonGrid {
    pub width: i32,
    pub height: i32,
    pub enclosures: Vec<Polygon>,
}

impl PolygonGrid {
    pub fn new(width: i32, height: i32, enclosures: Vec<Polygon>) -> PolygonGrid {
        PolygonGrid {
            width,
            height,
            enclosures,
        }
    }

    /// A [DEFAULT_GRID_SIZE]-sided square world.
    pub fn standard(enclosures: Vec<Polygon>) -> PolygonGrid {
        PolygonGrid::new(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE, enclosures)
    }

    pub fn in_bounds(&self, p: &Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Checks whether a cell lies on or inside any enclosure polygon.
    pub fn blocked(&self, p: &Point) -> bool {
        self.enclosures.iter().any(|e| e.contains(p))
    }

    /// Generates the passable neighbours of `p` in the order up, right,
    /// down, left. This order is load-bearing: it decides which of several
    /// equal-hop routes breadth-first reports and the shape of the route
    /// depth-first dives into, so it is pinned by tests.
    pub fn neighbours(&self, p: &Point) -> SmallVec<[Point; 4]> {
        MOVES
            .iter()
            .map(|&(dx, dy)| Point::new(p.x + dx, p.y + dy))
            .filter(|n| self.in_bounds(n) && !self.blocked(n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_order_is_up_right_down_left() {
        let grid = PolygonGrid::standard(vec![]);
        let neighbours = grid.neighbours(&Point::new(10, 10));
        assert_eq!(
            neighbours.as_slice(),
            [
                Point::new(10, 11),
                Point::new(11, 10),
                Point::new(10, 9),
                Point::new(9, 10),
            ]
        );
    }

    #[test]
    fn corners_drop_out_of_bounds_candidates() {
        let grid = PolygonGrid::standard(vec![]);
        let origin = grid.neighbours(&Point::new(0, 0));
        assert_eq!(origin.as_slice(), [Point::new(0, 1), Point::new(1, 0)]);
        let far = grid.neighbours(&Point::new(49, 49));
        assert_eq!(far.as_slice(), [Point::new(49, 48), Point::new(48, 49)]);
    }

    #[test]
    fn enclosed_cells_are_filtered() {
        let grid = PolygonGrid::standard(vec![Polygon::new(vec![
            Point::new(4, 4),
            Point::new(6, 4),
            Point::new(6, 6),
            Point::new(4, 6),
        ])]);
        // (5, 4) sits on the bottom edge of the square, (4, 5) on its left.
        let neighbours = grid.neighbours(&Point::new(5, 3));
        assert_eq!(
            neighbours.as_slice(),
            [Point::new(6, 3), Point::new(5, 2), Point::new(4, 3)]
        );
        assert!(grid.blocked(&Point::new(5, 5)));
        assert!(!grid.blocked(&Point::new(5, 3)));
    }

    #[test]
    fn small_grid_bounds_are_respected() {
        let grid = PolygonGrid::new(2, 2, vec![]);
        assert!(grid.in_bounds(&Point::new(1, 1)));
        assert!(!grid.in_bounds(&Point::new(2, 0)));
        assert!(!grid.in_bounds(&Point::new(0, -1)));
        assert_eq!(
            grid.neighbours(&Point::new(0, 0)).as_slice(),
            [Point::new(0, 1), Point::new(1, 0)]
        );
    }
}
