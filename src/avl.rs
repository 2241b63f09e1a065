use std::cmp::Ordering;

use slab::Slab;

use crate::{
    active::{StatusTree, SweepLine},
    segment::Segment,
};

type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Node {
    segment: Segment,
    left: Link,
    right: Link,
    height: u32,
}

/// Height-balanced status tree.
///
/// An AVL tree whose nodes live in a [`Slab`] and refer to their
/// children by key. The heights of sibling subtrees differ by at most
/// one after every insert and remove.
#[derive(Debug, Clone, Default)]
pub struct AvlTree {
    nodes: Slab<Node>,
    root: Link,
}

impl AvlTree {
    #[inline]
    fn height(&self, link: Link) -> u32 {
        link.map_or(0, |key| self.nodes[key].height)
    }

    /// Height of left subtree minus height of right subtree.
    #[inline]
    fn balance(&self, key: usize) -> i64 {
        let node = &self.nodes[key];
        self.height(node.left) as i64 - self.height(node.right) as i64
    }

    fn update_height(&mut self, key: usize) {
        let node = &self.nodes[key];
        let height = 1 + self.height(node.left).max(self.height(node.right));
        self.nodes[key].height = height;
    }

    /// Rotate the subtree at `key` to the right; returns the new root.
    fn rotate_right(&mut self, key: usize) -> usize {
        let pivot = self.nodes[key]
            .left
            .expect("right rotation requires a left child");
        self.nodes[key].left = self.nodes[pivot].right;
        self.nodes[pivot].right = Some(key);
        self.update_height(key);
        self.update_height(pivot);
        pivot
    }

    /// Rotate the subtree at `key` to the left; returns the new root.
    fn rotate_left(&mut self, key: usize) -> usize {
        let pivot = self.nodes[key]
            .right
            .expect("left rotation requires a right child");
        self.nodes[key].right = self.nodes[pivot].left;
        self.nodes[pivot].left = Some(key);
        self.update_height(key);
        self.update_height(pivot);
        pivot
    }

    /// Restore the balance invariant at `key` assuming both subtrees
    /// are valid AVL trees; returns the new subtree root.
    fn rebalance(&mut self, key: usize) -> usize {
        self.update_height(key);
        let balance = self.balance(key);
        if balance > 1 {
            let left = self.nodes[key].left.expect("left-heavy node has a left child");
            if self.balance(left) < 0 {
                let new_left = self.rotate_left(left);
                self.nodes[key].left = Some(new_left);
            }
            self.rotate_right(key)
        } else if balance < -1 {
            let right = self.nodes[key].right.expect("right-heavy node has a right child");
            if self.balance(right) > 0 {
                let new_right = self.rotate_right(right);
                self.nodes[key].right = Some(new_right);
            }
            self.rotate_left(key)
        } else {
            key
        }
    }

    /// Insert into the subtree at `link`. Returns the new subtree root
    /// and whether the segment was inserted.
    fn insert_at(&mut self, link: Link, segment: Segment, line: &SweepLine) -> (usize, bool) {
        let key = match link {
            Some(key) => key,
            None => {
                let key = self.nodes.insert(Node {
                    segment,
                    left: None,
                    right: None,
                    height: 1,
                });
                return (key, true);
            }
        };
        let inserted = match line.compare(&segment, &self.nodes[key].segment) {
            Ordering::Less => {
                let (child, inserted) = self.insert_at(self.nodes[key].left, segment, line);
                self.nodes[key].left = Some(child);
                inserted
            }
            Ordering::Greater => {
                let (child, inserted) = self.insert_at(self.nodes[key].right, segment, line);
                self.nodes[key].right = Some(child);
                inserted
            }
            Ordering::Equal => false,
        };
        if inserted {
            (self.rebalance(key), true)
        } else {
            (key, false)
        }
    }

    /// Detach the minimum of the subtree at `key`. Returns the new
    /// subtree root and the detached node's key.
    fn detach_min(&mut self, key: usize) -> (Link, usize) {
        match self.nodes[key].left {
            None => (self.nodes[key].right.take(), key),
            Some(left) => {
                let (child, min) = self.detach_min(left);
                self.nodes[key].left = child;
                (Some(self.rebalance(key)), min)
            }
        }
    }

    /// Remove from the subtree at `link`. Returns the new subtree root
    /// and the removed segment.
    fn remove_at(
        &mut self,
        link: Link,
        segment: &Segment,
        line: &SweepLine,
    ) -> (Link, Option<Segment>) {
        let key = match link {
            Some(key) => key,
            None => return (None, None),
        };
        let removed = match line.compare(segment, &self.nodes[key].segment) {
            Ordering::Less => {
                let (child, removed) = self.remove_at(self.nodes[key].left, segment, line);
                self.nodes[key].left = child;
                removed
            }
            Ordering::Greater => {
                let (child, removed) = self.remove_at(self.nodes[key].right, segment, line);
                self.nodes[key].right = child;
                removed
            }
            Ordering::Equal => {
                let node = self.nodes.remove(key);
                let replacement = match (node.left, node.right) {
                    (None, child) | (child, None) => child,
                    (Some(left), Some(right)) => {
                        let (right, successor) = self.detach_min(right);
                        self.nodes[successor].left = Some(left);
                        self.nodes[successor].right = right;
                        Some(self.rebalance(successor))
                    }
                };
                return (replacement, Some(node.segment));
            }
        };
        match removed {
            Some(_) => (Some(self.rebalance(key)), removed),
            None => (Some(key), None),
        }
    }

    /// Walk down from the root towards `segment`, keeping the last node
    /// where the walk turned away from `turn`.
    fn neighbor(&self, segment: &Segment, line: &SweepLine, turn: Ordering) -> Option<&Segment> {
        debug_assert!(!self.is_empty(), "neighbour query on an empty status tree");
        let mut best = None;
        let mut link = self.root;
        while let Some(key) = link {
            let node = &self.nodes[key];
            if line.compare(segment, &node.segment) == turn {
                best = Some(&node.segment);
                link = if turn == Ordering::Greater {
                    node.right
                } else {
                    node.left
                };
            } else {
                link = if turn == Ordering::Greater {
                    node.left
                } else {
                    node.right
                };
            }
        }
        best
    }

    fn collect_in_order(&self, link: Link, out: &mut Vec<Segment>) {
        if let Some(key) = link {
            let node = &self.nodes[key];
            self.collect_in_order(node.left, out);
            out.push(node.segment);
            self.collect_in_order(node.right, out);
        }
    }
}

impl StatusTree for AvlTree {
    fn insert(&mut self, segment: Segment, line: &SweepLine) -> bool {
        let (root, inserted) = self.insert_at(self.root, segment, line);
        self.root = Some(root);
        inserted
    }

    fn remove(&mut self, segment: &Segment, line: &SweepLine) -> Option<Segment> {
        let (root, removed) = self.remove_at(self.root, segment, line);
        self.root = root;
        removed
    }

    fn predecessor(&self, segment: &Segment, line: &SweepLine) -> Option<&Segment> {
        self.neighbor(segment, line, Ordering::Greater)
    }

    fn successor(&self, segment: &Segment, line: &SweepLine) -> Option<&Segment> {
        self.neighbor(segment, line, Ordering::Less)
    }

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn in_order(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_in_order(self.root, &mut out);
        out
    }
}
