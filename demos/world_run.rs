use polygon_grid_search::world::parse_polygons;
use polygon_grid_search::{Point, PolygonGrid};

// Runs all three algorithms over a 50x50 world described in the world file
// format (one polygon per line, `x,y` vertices separated by `;`), printing
// the expanded-node count and route cost of each.
const ENCLOSURES: &str = "\
20,20;30,20;30,30;20,30
10,35;15,35;15,40;10,40
34,8;40,8;40,16;34,16";

const TURFS: &str = "35,35;42,35;42,42;35,42";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let enclosures = parse_polygons(ENCLOSURES)?;
    let turfs = parse_polygons(TURFS)?;
    let grid = PolygonGrid::standard(enclosures);

    let source = Point::new(8, 10);
    let dest = Point::new(43, 45);

    let bfs = grid.bfs(source, dest);
    println!("bfs:  {} expanded, cost {:?}", bfs.nodes_expanded(), bfs.cost());
    let dfs = grid.dfs(source, dest);
    println!("dfs:  {} expanded, cost {:?}", dfs.nodes_expanded(), dfs.cost());
    let gbfs = grid.greedy_best_first(source, dest, &turfs);
    println!("gbfs: {} expanded, cost {:?}", gbfs.nodes_expanded(), gbfs.cost());
    Ok(())
}
