//! # polygon_grid_search
//!
//! Route search on a bounded 4-connected grid whose impassable regions are
//! described by polygons rather than per-cell flags. Implements
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) and
//! [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search).
//! A cell on or inside an *enclosure* polygon is impassable; a cell on or
//! inside a *turf* polygon stays passable but costs 1.5 instead of 1 to enter
//! (greedy best-first only, the uninformed searches count unit steps).
//!
//! Breadth-first is hop-optimal; depth-first and greedy best-first trade
//! optimality for their respective exploration orders.

pub mod frontier;
pub mod geometry;
pub mod grid;
pub mod solver;
pub mod world;

pub use geometry::{euclidean_distance, Polygon};
pub use grid::{PolygonGrid, DEFAULT_GRID_SIZE};
pub use grid_util::point::Point;
pub use solver::SearchResult;
