//! Core daśā period types: the three-level depth ladder and the
//! arena-backed period tree.
//!
//! The tree stores nodes in a flat arena with parent indices, which is
//! how a child keeps a non-owning back-reference to its enclosing
//! period: ownership stays with the arena, so the structure is
//! cycle-free by construction.

use gochara_time::Interval;

use crate::body::Body;

/// The three nesting levels of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaDepth {
    Maha = 0,
    Antar = 1,
    Pratyantar = 2,
}

impl DashaDepth {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Mahadasha",
            Self::Antar => "Antardasha",
            Self::Pratyantar => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any. Stepping saturates at Pratyantar so the
    /// recursion always terminates.
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Maha => Some(Self::Antar),
            Self::Antar => Some(Self::Pratyantar),
            Self::Pratyantar => None,
        }
    }
}

/// One period of the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaNode {
    /// The half-open span this rulership covers.
    pub period: Interval,
    /// The ruling body.
    pub ruler: Body,
    pub depth: DashaDepth,
    /// Arena index of the enclosing period; `None` for a top-level daśā.
    pub parent: Option<usize>,
    /// Arena indices of the sub-periods, in chronological order.
    pub children: Vec<usize>,
}

/// An arena of daśā periods with a chronological root list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashaTree {
    nodes: Vec<DashaNode>,
    roots: Vec<usize>,
}

impl DashaTree {
    pub(crate) fn push(&mut self, node: DashaNode) -> usize {
        let idx = self.nodes.len();
        if node.parent.is_none() {
            self.roots.push(idx);
        }
        self.nodes.push(node);
        idx
    }

    pub(crate) fn attach_child(&mut self, parent: usize, child: usize) {
        self.nodes[parent].children.push(child);
    }

    pub fn node(&self, idx: usize) -> &DashaNode {
        &self.nodes[idx]
    }

    pub fn nodes(&self) -> &[DashaNode] {
        &self.nodes
    }

    pub fn root_indices(&self) -> &[usize] {
        &self.roots
    }

    /// Top-level periods in chronological order.
    pub fn roots(&self) -> impl Iterator<Item = &DashaNode> {
        self.roots.iter().map(|&i| &self.nodes[i])
    }

    /// Children of a node, in chronological order.
    pub fn children(&self, idx: usize) -> impl Iterator<Item = &DashaNode> {
        self.nodes[idx].children.iter().map(|&i| &self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The subtree of periods whose spans intersect `range`, recursing
    /// into children of every retained node. Structure and order are
    /// preserved; indices are re-assigned.
    pub fn overlapping(&self, range: Interval) -> DashaTree {
        let mut out = DashaTree::default();
        for &root in &self.roots {
            self.copy_overlapping(root, None, range, &mut out);
        }
        out
    }

    fn copy_overlapping(
        &self,
        idx: usize,
        new_parent: Option<usize>,
        range: Interval,
        out: &mut DashaTree,
    ) {
        let node = &self.nodes[idx];
        if !node.period.intersects(&range) {
            return;
        }
        let new_idx = out.push(DashaNode {
            period: node.period,
            ruler: node.ruler,
            depth: node.depth,
            parent: new_parent,
            children: Vec::new(),
        });
        if let Some(p) = new_parent {
            out.attach_child(p, new_idx);
        }
        for &child in &node.children {
            self.copy_overlapping(child, Some(new_idx), range, out);
        }
    }
}
