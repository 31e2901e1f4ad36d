use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Index of a node in the solver's arena.
pub type NodeId = usize;

/// Container discipline for generated-but-not-yet-expanded nodes. The three
/// search algorithms differ only in which implementation they hand to the
/// traversal loop. `key` is meaningful only to [BestFirstFrontier]; the
/// queue and stack ignore it.
pub trait Frontier {
    fn push(&mut self, node: NodeId, key: f64);
    fn pop(&mut self) -> Option<NodeId>;
    fn is_empty(&self) -> bool;
}

/// FIFO frontier. Breadth-first hop optimality depends on this ordering.
#[derive(Debug, Default)]
pub struct FifoFrontier(VecDeque<NodeId>);

impl Frontier for FifoFrontier {
    fn push(&mut self, node: NodeId, _key: f64) {
        self.0.push_back(node);
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// LIFO frontier. Depth-first dives along the most recently generated child
/// before backtracking.
#[derive(Debug, Default)]
pub struct LifoFrontier(Vec<NodeId>);

impl Frontier for LifoFrontier {
    fn push(&mut self, node: NodeId, _key: f64) {
        self.0.push(node);
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct MinKeyed {
    key: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for MinKeyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl Eq for MinKeyed {}

impl PartialOrd for MinKeyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinKeyed {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reversing both comparisons pops the
        // smallest key first and, among equal keys, the earliest insertion.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-ordered keyed frontier. Tie policy: equal keys pop in insertion
/// order, earliest first, which pins the expansion order of greedy
/// best-first and keeps repeated runs identical.
#[derive(Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<MinKeyed>,
    seq: u64,
}

impl Frontier for BestFirstFrontier {
    fn push(&mut self, node: NodeId, key: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(MinKeyed { key, seq, node });
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
