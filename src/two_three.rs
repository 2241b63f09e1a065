use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::{
    active::{StatusTree, SweepLine},
    segment::Segment,
};

/// A node holds one or two keys; internal nodes have one more child
/// than keys. A third key only exists transiently before a split.
#[derive(Debug, Clone, Default)]
struct Node {
    keys: SmallVec<[Segment; 3]>,
    children: SmallVec<[Box<Node>; 4]>,
}

/// Outcome of inserting into a subtree.
enum Insertion {
    Done,
    Duplicate,
    /// The subtree overflowed: the middle key moves up to the parent,
    /// and `right` becomes its new right sibling.
    Split { middle: Segment, right: Box<Node> },
}

impl Node {
    fn leaf(segment: Segment) -> Self {
        let mut keys = SmallVec::new();
        keys.push(segment);
        Node {
            keys,
            children: SmallVec::new(),
        }
    }

    #[inline]
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Index of the first key not ranked below `segment`, and whether
    /// that key is ranked equal to it.
    fn search(&self, segment: &Segment, line: &SweepLine) -> (usize, bool) {
        for (idx, key) in self.keys.iter().enumerate() {
            match line.compare(segment, key) {
                Ordering::Greater => continue,
                Ordering::Equal => return (idx, true),
                Ordering::Less => return (idx, false),
            }
        }
        (self.keys.len(), false)
    }

    fn insert(&mut self, segment: Segment, line: &SweepLine) -> Insertion {
        let (idx, found) = self.search(&segment, line);
        if found {
            return Insertion::Duplicate;
        }
        if self.is_leaf() {
            self.keys.insert(idx, segment);
        } else {
            match self.children[idx].insert(segment, line) {
                Insertion::Split { middle, right } => {
                    self.keys.insert(idx, middle);
                    self.children.insert(idx + 1, right);
                }
                other => return other,
            }
        }
        if self.keys.len() < 3 {
            return Insertion::Done;
        }

        // Overflow: keep the first key, push the middle one up.
        let right = Box::new(Node {
            keys: self.keys.drain(2..).collect(),
            children: if self.is_leaf() {
                SmallVec::new()
            } else {
                self.children.drain(2..).collect()
            },
        });
        let middle = self.keys.pop().expect("overflowing node has a middle key");
        Insertion::Split { middle, right }
    }

    /// Remove the segment ranked equal to `segment` from this subtree.
    /// The node may be left without keys; the parent repairs it.
    fn remove(&mut self, segment: &Segment, line: &SweepLine) -> Option<Segment> {
        let (idx, found) = self.search(segment, line);
        if self.is_leaf() {
            return if found {
                Some(self.keys.remove(idx))
            } else {
                None
            };
        }
        let removed = if found {
            // Swap in the in-order predecessor, which lives in a leaf.
            let predecessor = self.children[idx].remove_max();
            Some(std::mem::replace(&mut self.keys[idx], predecessor))
        } else {
            self.children[idx].remove(segment, line)
        };
        if removed.is_some() {
            self.repair(idx);
        }
        removed
    }

    fn remove_max(&mut self) -> Segment {
        if self.is_leaf() {
            return self.keys.pop().expect("leaf has at least one key");
        }
        let last = self.children.len() - 1;
        let max = self.children[last].remove_max();
        self.repair(last);
        max
    }

    /// Fix the child at `idx` if it has been left without keys, by
    /// borrowing a key through a sibling or merging with one.
    fn repair(&mut self, idx: usize) {
        if !self.children[idx].keys.is_empty() {
            return;
        }

        if idx > 0 && self.children[idx - 1].keys.len() > 1 {
            // Rotate right: left sibling -> separator -> child.
            let (left, rest) = self.children.split_at_mut(idx);
            let sibling = &mut left[idx - 1];
            let child = &mut rest[0];
            let borrowed = sibling.keys.pop().expect("sibling has a spare key");
            let separator = std::mem::replace(&mut self.keys[idx - 1], borrowed);
            child.keys.insert(0, separator);
            if let Some(grandchild) = sibling.children.pop() {
                child.children.insert(0, grandchild);
            }
        } else if idx + 1 < self.children.len() && self.children[idx + 1].keys.len() > 1 {
            // Rotate left: right sibling -> separator -> child.
            let (left, rest) = self.children.split_at_mut(idx + 1);
            let child = &mut left[idx];
            let sibling = &mut rest[0];
            let borrowed = sibling.keys.remove(0);
            let separator = std::mem::replace(&mut self.keys[idx], borrowed);
            child.keys.push(separator);
            if !sibling.is_leaf() {
                child.children.push(sibling.children.remove(0));
            }
        } else if idx > 0 {
            // Merge the child into its left sibling.
            let child = self.children.remove(idx);
            let separator = self.keys.remove(idx - 1);
            let sibling = &mut self.children[idx - 1];
            sibling.keys.push(separator);
            sibling.children.extend(child.children);
        } else {
            // Merge the right sibling into the child.
            let sibling = self.children.remove(idx + 1);
            let separator = self.keys.remove(idx);
            let child = &mut self.children[idx];
            child.keys.push(separator);
            child.keys.extend(sibling.keys);
            child.children.extend(sibling.children);
        }
    }

    fn collect_in_order(&self, out: &mut Vec<Segment>) {
        if self.is_leaf() {
            out.extend(self.keys.iter().copied());
            return;
        }
        for (idx, child) in self.children.iter().enumerate() {
            child.collect_in_order(out);
            if let Some(key) = self.keys.get(idx) {
                out.push(*key);
            }
        }
    }
}

/// Multi-way balanced status tree.
///
/// A 2-3 tree: every node has one or two keys, and all leaves are at
/// the same depth. Inserts split overflowing nodes bottom-up; removes
/// borrow from or merge with siblings.
#[derive(Debug, Clone, Default)]
pub struct TwoThreeTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl TwoThreeTree {
    /// Walk down from the root towards `segment`, keeping the nearest
    /// key ranked on the `below` side of it.
    fn neighbor(&self, segment: &Segment, line: &SweepLine, below: bool) -> Option<&Segment> {
        debug_assert!(!self.is_empty(), "neighbour query on an empty status tree");
        let mut best = None;
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            let (idx, found) = current.search(segment, line);
            // Keys before `idx` rank below; from `idx` on they rank at
            // or above (exactly the key at `idx` if `found`).
            let next = if below {
                if idx > 0 {
                    best = Some(&current.keys[idx - 1]);
                }
                idx
            } else {
                let above = if found { idx + 1 } else { idx };
                if let Some(key) = current.keys.get(above) {
                    best = Some(key);
                }
                above
            };
            node = current.children.get(next).map(|child| &**child);
        }
        best
    }
}

impl StatusTree for TwoThreeTree {
    fn insert(&mut self, segment: Segment, line: &SweepLine) -> bool {
        let root = match self.root.as_mut() {
            Some(root) => root,
            None => {
                self.root = Some(Box::new(Node::leaf(segment)));
                self.len = 1;
                return true;
            }
        };
        match root.insert(segment, line) {
            Insertion::Duplicate => return false,
            Insertion::Done => {}
            Insertion::Split { middle, right } => {
                let left = self.root.take().expect("root exists");
                let mut root = Node::leaf(middle);
                root.children.push(left);
                root.children.push(right);
                self.root = Some(Box::new(root));
            }
        }
        self.len += 1;
        true
    }

    fn remove(&mut self, segment: &Segment, line: &SweepLine) -> Option<Segment> {
        let root = self.root.as_mut()?;
        let removed = root.remove(segment, line)?;
        if root.keys.is_empty() {
            // The root shrinks: its only child (if any) takes its place.
            let child = root.children.pop();
            self.root = child;
        }
        self.len -= 1;
        Some(removed)
    }

    fn predecessor(&self, segment: &Segment, line: &SweepLine) -> Option<&Segment> {
        self.neighbor(segment, line, true)
    }

    fn successor(&self, segment: &Segment, line: &SweepLine) -> Option<&Segment> {
        self.neighbor(segment, line, false)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn in_order(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = &self.root {
            root.collect_in_order(&mut out);
        }
        out
    }
}
