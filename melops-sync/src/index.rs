//! Augmented interval tree for tolerant stabbing queries.
//!
//! Nodes are keyed by `start` and carry `max_end`, the largest `end` in their
//! subtree. The tree is an AVL tree stored in an arena; rotations keep the
//! in-order sequence intact, so query results come out ordered by `start`
//! with equal starts in insertion order.

use crate::types::WordInterval;

/// Default tolerance in seconds applied to both interval bounds.
///
/// Closes sub-millisecond gaps between adjacent words whose timestamps were
/// measured independently.
pub const DEFAULT_EPSILON: f64 = 0.001;

#[derive(Clone, Debug)]
struct Node {
    /// Position of the interval in the source sequence
    id: usize,
    start: f64,
    end: f64,
    /// Largest `end` in this subtree
    max_end: f64,
    height: u32,
    left: Option<usize>,
    right: Option<usize>,
}

impl Node {
    fn leaf(id: usize, start: f64, end: f64) -> Self {
        Self {
            id,
            start,
            end,
            max_end: end,
            height: 1,
            left: None,
            right: None,
        }
    }
}

/// Interval index over word timestamps.
///
/// Built once per transcript; queries never mutate it.
#[derive(Clone, Debug, Default)]
pub struct IntervalIndex {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl IntervalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over words, using each word's position as its id.
    pub fn from_words(words: &[WordInterval]) -> Self {
        let mut index = Self {
            nodes: Vec::with_capacity(words.len()),
            root: None,
        };

        for (id, word) in words.iter().enumerate() {
            index.insert(id, word.start, word.end);
        }

        index
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Tree height, `0` when empty.
    pub fn height(&self) -> u32 {
        self.height_of(self.root)
    }

    /// Insert an interval. Equal starts descend to the right.
    pub fn insert(&mut self, id: usize, start: f64, end: f64) {
        let leaf = self.nodes.len();
        self.nodes.push(Node::leaf(id, start, end));
        self.root = Some(self.insert_at(self.root, leaf));
    }

    /// Ids of every interval whose range `[start - epsilon, end + epsilon]`
    /// contains `point`.
    pub fn query(&self, point: f64, epsilon: f64) -> Vec<usize> {
        let mut out = Vec::new();
        self.query_into(point, epsilon, &mut out);
        out
    }

    /// Like [`IntervalIndex::query`], appending into a caller-owned buffer.
    pub fn query_into(&self, point: f64, epsilon: f64, out: &mut Vec<usize>) {
        if let Some(root) = self.root {
            self.collect(root, point, epsilon, out);
        }
    }

    fn collect(&self, n: usize, point: f64, epsilon: f64, out: &mut Vec<usize>) {
        let node = &self.nodes[n];

        // nothing below reaches the point
        if point > node.max_end + epsilon {
            return;
        }

        if let Some(left) = node.left
            && point <= self.nodes[left].max_end + epsilon
        {
            self.collect(left, point, epsilon, out);
        }

        if node.start - epsilon <= point && point <= node.end + epsilon {
            out.push(node.id);
        }

        if let Some(right) = node.right
            && point >= node.start - epsilon
        {
            self.collect(right, point, epsilon, out);
        }
    }

    fn insert_at(&mut self, at: Option<usize>, leaf: usize) -> usize {
        let Some(n) = at else {
            return leaf;
        };

        if self.nodes[leaf].start < self.nodes[n].start {
            let left = self.insert_at(self.nodes[n].left, leaf);
            self.nodes[n].left = Some(left);
        } else {
            let right = self.insert_at(self.nodes[n].right, leaf);
            self.nodes[n].right = Some(right);
        }

        self.rebalance(n)
    }

    fn height_of(&self, n: Option<usize>) -> u32 {
        n.map_or(0, |n| self.nodes[n].height)
    }

    fn max_end_of(&self, n: Option<usize>) -> f64 {
        n.map_or(f64::NEG_INFINITY, |n| self.nodes[n].max_end)
    }

    /// Recompute height and `max_end` from children.
    fn update(&mut self, n: usize) {
        let (left, right) = (self.nodes[n].left, self.nodes[n].right);
        let height = 1 + self.height_of(left).max(self.height_of(right));
        let max_end = self.nodes[n]
            .end
            .max(self.max_end_of(left))
            .max(self.max_end_of(right));

        let node = &mut self.nodes[n];
        node.height = height;
        node.max_end = max_end;
    }

    fn balance_factor(&self, n: usize) -> i64 {
        let node = &self.nodes[n];
        i64::from(self.height_of(node.left)) - i64::from(self.height_of(node.right))
    }

    fn rotate_right(&mut self, n: usize) -> usize {
        let Some(pivot) = self.nodes[n].left else {
            return n;
        };

        self.nodes[n].left = self.nodes[pivot].right;
        self.nodes[pivot].right = Some(n);
        self.update(n);
        self.update(pivot);
        pivot
    }

    fn rotate_left(&mut self, n: usize) -> usize {
        let Some(pivot) = self.nodes[n].right else {
            return n;
        };

        self.nodes[n].right = self.nodes[pivot].left;
        self.nodes[pivot].left = Some(n);
        self.update(n);
        self.update(pivot);
        pivot
    }

    /// Restore the AVL invariant at `n`, returning the new subtree root.
    fn rebalance(&mut self, n: usize) -> usize {
        self.update(n);

        match self.balance_factor(n) {
            bf if bf > 1 => {
                if let Some(left) = self.nodes[n].left
                    && self.balance_factor(left) < 0
                {
                    self.nodes[n].left = Some(self.rotate_left(left));
                }
                self.rotate_right(n)
            }
            bf if bf < -1 => {
                if let Some(right) = self.nodes[n].right
                    && self.balance_factor(right) > 0
                {
                    self.nodes[n].right = Some(self.rotate_right(right));
                }
                self.rotate_left(n)
            }
            _ => n,
        }
    }
}
