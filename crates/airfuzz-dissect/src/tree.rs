//! Decoded protocol element tree.
//!
//! The external decode engine turns a raw packet buffer into a tree of named
//! protocol elements. Filters match against canonical element paths such as
//! `nr-rrc.rrcSetup_element`; for match queries only path membership matters,
//! so the tree keeps a flat index of every path it contains alongside the
//! node structure.

use std::collections::HashSet;

/// One node of a decoded element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    /// Canonical dotted path of this element
    pub path: String,
    /// Child elements in decode order
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Create a leaf node.
    pub fn leaf(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    pub fn with_children(path: impl Into<String>, children: Vec<ElementNode>) -> Self {
        Self {
            path: path.into(),
            children,
        }
    }
}

/// The structured form of one decoded packet.
///
/// Immutable once built; the pipeline decodes each packet exactly once and
/// mutations performed afterwards are not re-dissected within the same pass.
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    roots: Vec<ElementNode>,
    // Flat path index so per-packet match queries are O(1).
    paths: HashSet<String>,
}

impl ElementTree {
    /// Build a tree from root nodes, indexing every reachable path.
    #[must_use]
    pub fn new(roots: Vec<ElementNode>) -> Self {
        let mut paths = HashSet::new();
        let mut stack: Vec<&ElementNode> = roots.iter().collect();
        while let Some(node) = stack.pop() {
            paths.insert(node.path.clone());
            stack.extend(node.children.iter());
        }
        Self { roots, paths }
    }

    /// Build a flat tree from an iterator of element paths.
    ///
    /// Convenient for decoders that only report which elements were present.
    #[must_use]
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roots: Vec<ElementNode> = paths.into_iter().map(ElementNode::leaf).collect();
        Self::new(roots)
    }

    /// Whether the decoded packet contains an element at `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// The root elements in decode order.
    #[must_use]
    pub fn roots(&self) -> &[ElementNode] {
        &self.roots
    }

    /// Number of distinct element paths in the tree.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Whether the tree holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
