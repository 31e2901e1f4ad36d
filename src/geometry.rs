use grid_util::point::Point;

/// Tolerance for deciding that a point sits exactly on a polygon edge.
/// Grid coordinates are integral but the edge tests run in f64.
const EDGE_TOLERANCE: f64 = 1e-4;

/// An ordered, non-empty vertex loop. The closing edge from the last vertex
/// back to the first is implicit and not stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    /// Builds a polygon from its vertex loop.
    ///
    /// # Panics
    /// Panics if `vertices` is empty.
    pub fn new(vertices: Vec<Point>) -> Polygon {
        assert!(!vertices.is_empty(), "polygon needs at least one vertex");
        Polygon(vertices)
    }

    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    /// Iterates over the edges, including the implicit closing edge.
    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| (self.0[i], self.0[(i + 1) % n]))
    }

    /// Checks whether `point` lies on an edge of the polygon or strictly
    /// inside it. The on-edge test runs first so that vertices and boundary
    /// cells count as contained and so that points exactly on a horizontal
    /// edge are resolved before any crossing arithmetic. Interior membership
    /// is then decided by casting a horizontal ray towards +x and counting
    /// edge crossings: an odd count means inside.
    pub fn contains(&self, point: &Point) -> bool {
        if self.on_edge(point) {
            return true;
        }
        let (px, py) = (point.x as f64, point.y as f64);
        let mut crossings = 0;
        for (a, b) in self.edges() {
            let (x1, y1) = (a.x as f64, a.y as f64);
            let (x2, y2) = (b.x as f64, b.y as f64);
            // Horizontal edges fail the strict inequality pair, so the
            // division below never sees y2 == y1.
            if (py < y1) != (py < y2) && px < x1 + (py - y1) / (y2 - y1) * (x2 - x1) {
                crossings += 1;
            }
        }
        crossings % 2 == 1
    }

    /// Perpendicular cross-product test against every edge, restricted to
    /// the edge's coordinate ranges.
    fn on_edge(&self, point: &Point) -> bool {
        let (px, py) = (point.x as f64, point.y as f64);
        self.edges().any(|(a, b)| {
            let (x1, y1) = (a.x as f64, a.y as f64);
            let (x2, y2) = (b.x as f64, b.y as f64);
            let cross = (y2 - y1) * (px - x1) - (x2 - x1) * (py - y1);
            cross.abs() < EDGE_TOLERANCE
                && px >= x1.min(x2) - EDGE_TOLERANCE
                && px <= x1.max(x2) + EDGE_TOLERANCE
                && py >= y1.min(y2) - EDGE_TOLERANCE
                && py <= y1.max(y2) + EDGE_TOLERANCE
        })
    }
}

/// Straight-line distance between two grid points, used as the greedy
/// best-first heuristic.
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}
