use polygon_grid_search::{Point, Polygon, PolygonGrid, SearchResult};

// In this example a route is found on a 10x10 grid around a single square
// enclosure. Breadth-first reports the hop-optimal route; depth-first
// usually takes a longer one.
fn main() {
    let grid = PolygonGrid::new(
        10,
        10,
        vec![Polygon::new(vec![
            Point::new(3, 3),
            Point::new(6, 3),
            Point::new(6, 6),
            Point::new(3, 6),
        ])],
    );
    let source = Point::new(0, 4);
    let dest = Point::new(9, 4);
    for (name, result) in [
        ("bfs", grid.bfs(source, dest)),
        ("dfs", grid.dfs(source, dest)),
    ] {
        match result {
            SearchResult::Route {
                path,
                cost,
                nodes_expanded,
            } => {
                println!("{name}: cost {cost}, {nodes_expanded} nodes expanded");
                for p in path {
                    println!("  {:?}", p);
                }
            }
            SearchResult::NoRoute { nodes_expanded } => {
                println!("{name}: no route ({nodes_expanded} nodes expanded)");
            }
        }
    }
}
