/// Cross-checks the three algorithms on many randomly generated polygon
/// worlds: they agree on solvability (they explore the same reachable
/// region), breadth-first never reports a higher cost than depth-first,
/// every returned route is a valid 4-connected walk over free cells, and
/// repeated runs are identical.
use polygon_grid_search::{Point, Polygon, PolygonGrid};
use rand::prelude::*;

const N: i32 = 20;
const N_WORLDS: usize = 300;

fn random_world(rng: &mut StdRng) -> PolygonGrid {
    let mut enclosures = Vec::new();
    for _ in 0..4 {
        let x = rng.gen_range(1..N - 3);
        let y = rng.gen_range(1..N - 3);
        let s = rng.gen_range(1..=3);
        enclosures.push(Polygon::new(vec![
            Point::new(x, y),
            Point::new(x + s, y),
            Point::new(x + s, y + s),
            Point::new(x, y + s),
        ]));
    }
    PolygonGrid::new(N, N, enclosures)
}

fn assert_valid_route(grid: &PolygonGrid, path: &[Point], source: Point, dest: Point) {
    assert_eq!(path.first(), Some(&source));
    assert_eq!(path.last(), Some(&dest));
    for step in path.windows(2) {
        let (a, b) = (step[0], step[1]);
        assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
    }
    assert!(path.iter().all(|p| grid.in_bounds(p) && !grid.blocked(p)));
}

#[test]
fn algorithms_agree_on_random_worlds() {
    let mut rng = StdRng::seed_from_u64(0);
    let source = Point::new(0, 0);
    let dest = Point::new(N - 1, N - 1);
    let free_cells = (N * N) as usize;
    for _ in 0..N_WORLDS {
        let grid = random_world(&mut rng);
        if grid.blocked(&source) || grid.blocked(&dest) {
            continue;
        }
        let bfs = grid.bfs(source, dest);
        let dfs = grid.dfs(source, dest);
        let gbfs = grid.greedy_best_first(source, dest, &[]);

        // All three explore the same reachable region, so solvability
        // must agree.
        assert_eq!(bfs.is_route(), dfs.is_route());
        assert_eq!(bfs.is_route(), gbfs.is_route());

        if let (Some(bfs_cost), Some(dfs_cost)) = (bfs.cost(), dfs.cost()) {
            assert!(bfs_cost <= dfs_cost);
            assert_valid_route(&grid, bfs.path().unwrap(), source, dest);
            assert_valid_route(&grid, dfs.path().unwrap(), source, dest);
            assert_valid_route(&grid, gbfs.path().unwrap(), source, dest);
        }

        // Each state enters the frontier at most once per run.
        assert!(bfs.nodes_expanded() < free_cells);
        assert!(dfs.nodes_expanded() < free_cells);
        assert!(gbfs.nodes_expanded() < free_cells);

        assert_eq!(bfs, grid.bfs(source, dest));
        assert_eq!(dfs, grid.dfs(source, dest));
        assert_eq!(gbfs, grid.greedy_best_first(source, dest, &[]));
    }
}

/// Turf regions never change which routes exist, only what greedy
/// best-first charges for them.
#[test]
fn turfs_do_not_affect_solvability() {
    let mut rng = StdRng::seed_from_u64(1);
    let source = Point::new(0, 0);
    let dest = Point::new(N - 1, N - 1);
    for _ in 0..50 {
        let grid = random_world(&mut rng);
        if grid.blocked(&source) || grid.blocked(&dest) {
            continue;
        }
        let turfs = [Polygon::new(vec![
            Point::new(5, 5),
            Point::new(15, 5),
            Point::new(15, 15),
            Point::new(5, 15),
        ])];
        let plain = grid.greedy_best_first(source, dest, &[]);
        let turfed = grid.greedy_best_first(source, dest, &turfs);
        assert_eq!(plain.is_route(), turfed.is_route());
        // The expansion order ignores turfs, so the route is the same and
        // only the cost can differ.
        assert_eq!(plain.path(), turfed.path());
        if let (Some(plain_cost), Some(turfed_cost)) = (plain.cost(), turfed.cost()) {
            assert!(turfed_cost >= plain_cost);
        }
    }
}
