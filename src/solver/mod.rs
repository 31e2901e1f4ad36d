use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use log::info;
use num_traits::Zero;

use crate::frontier::{Frontier, NodeId};
use crate::grid::PolygonGrid;

pub mod bfs;
pub mod dfs;
pub mod greedy;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Sentinel parent id of the root node.
const NO_PARENT: NodeId = usize::MAX;

/// Outcome of one search run. Both variants carry the number of distinct
/// states added to the frontier, so an exhausted search still reports how
/// much work it did and a caller can never dereference an absent route.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult<C> {
    /// A route from source to destination, both endpoints included.
    Route {
        path: Vec<Point>,
        cost: C,
        nodes_expanded: usize,
    },
    /// The frontier emptied without reaching the destination.
    NoRoute { nodes_expanded: usize },
}

impl<C> SearchResult<C> {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchResult::Route { path, .. } => Some(path),
            SearchResult::NoRoute { .. } => None,
        }
    }

    pub fn cost(&self) -> Option<&C> {
        match self {
            SearchResult::Route { cost, .. } => Some(cost),
            SearchResult::NoRoute { .. } => None,
        }
    }

    pub fn nodes_expanded(&self) -> usize {
        match self {
            SearchResult::Route { nodes_expanded, .. }
            | SearchResult::NoRoute { nodes_expanded } => *nodes_expanded,
        }
    }

    pub fn is_route(&self) -> bool {
        matches!(self, SearchResult::Route { .. })
    }

    fn from_traversal<F>(path: Option<Vec<Point>>, nodes_expanded: usize, cost: F) -> Self
    where
        F: FnOnce(&[Point]) -> C,
    {
        match path {
            Some(path) => {
                let cost = cost(&path);
                SearchResult::Route {
                    path,
                    cost,
                    nodes_expanded,
                }
            }
            None => SearchResult::NoRoute { nodes_expanded },
        }
    }
}

/// When the destination check happens relative to the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GoalTest {
    /// Freshly generated children are checked before they enter the
    /// frontier (breadth-first).
    OnGeneration,
    /// Nodes are checked as they are popped for expansion (depth-first,
    /// greedy best-first).
    OnExpansion,
}

/// The traversal loop shared by the three algorithms; they differ only in
/// the frontier discipline, the goal-test timing and the frontier key.
///
/// The arena is an [IndexMap] from state to parent id: the map index
/// identifies a node, so the same structure is the reached set and the
/// parent chain. Many children can share an ancestor; indices make that
/// aliasing free of ownership concerns, and every state enters the arena at
/// most once, so no state is expanded twice.
fn traverse<F, K>(
    grid: &PolygonGrid,
    source: Point,
    dest: Point,
    mut frontier: F,
    goal_test: GoalTest,
    mut key: K,
) -> (Option<Vec<Point>>, usize)
where
    F: Frontier,
    K: FnMut(&Point) -> f64,
{
    if source == dest {
        return (Some(vec![source]), 0);
    }
    let mut arena: FxIndexMap<Point, NodeId> = FxIndexMap::default();
    arena.insert(source, NO_PARENT);
    let root_key = key(&source);
    frontier.push(0, root_key);
    let mut nodes_expanded = 0;
    while let Some(index) = frontier.pop() {
        let state = *arena.get_index(index).unwrap().0;
        if goal_test == GoalTest::OnExpansion && state == dest {
            return (Some(reverse_path(&arena, index)), nodes_expanded);
        }
        for neighbour in grid.neighbours(&state) {
            if arena.contains_key(&neighbour) {
                continue;
            }
            let child = arena.len();
            arena.insert(neighbour, index);
            if goal_test == GoalTest::OnGeneration && neighbour == dest {
                // The goal child does not count as expanded.
                return (Some(reverse_path(&arena, child)), nodes_expanded);
            }
            nodes_expanded += 1;
            let child_key = key(&neighbour);
            frontier.push(child, child_key);
        }
    }
    info!(
        "frontier exhausted after {} expansions without reaching {}",
        nodes_expanded, dest
    );
    (None, nodes_expanded)
}

/// Walks parent ids from the terminal node back to the root and reverses,
/// yielding the route in source-to-destination order.
fn reverse_path(arena: &FxIndexMap<Point, NodeId>, terminal: NodeId) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(terminal, |i| {
        arena.get_index(*i).map(|(state, &parent)| {
            *i = parent;
            *state
        })
    })
    .collect();
    path.reverse();
    path
}

/// Folds an algorithm-supplied per-step cost over consecutive route points.
/// The step function receives the departed and the arriving point.
fn path_cost<C, F>(path: &[Point], mut step: F) -> C
where
    C: Zero + Copy,
    F: FnMut(&Point, &Point) -> C,
{
    path.windows(2)
        .fold(C::zero(), |acc, w| acc + step(&w[0], &w[1]))
}
