//! Core node types for the folder template

use log::debug;
use std::fmt;

/// Position of a node within a template
///
/// Each element is a 0-based index into the children of the previous level,
/// starting with the template's root folders. `[1, 0]` is the first subfolder
/// of the second root folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the root folder at `index`
    pub fn root(index: usize) -> Self {
        NodePath(vec![index])
    }

    /// Path of this node's child at `index`
    pub fn child(&self, index: usize) -> Self {
        let mut positions = self.0.clone();
        positions.push(index);
        NodePath(positions)
    }

    /// The positions making up this path
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of levels below the template root (a root folder has length 1)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the path does not address any node
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.0.iter().map(usize::to_string).collect();
        write!(f, "[{}]", positions.join(", "))
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(positions: Vec<usize>) -> Self {
        NodePath(positions)
    }
}

impl From<&[usize]> for NodePath {
    fn from(positions: &[usize]) -> Self {
        NodePath(positions.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for NodePath {
    fn from(positions: [usize; N]) -> Self {
        NodePath(positions.to_vec())
    }
}

/// Case-insensitive folder name comparison
///
/// Compares the lowercase expansion of both names, so accented letters
/// (`Interní` / `INTERNÍ`) match as well as ASCII.
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Appends a leaf named `name` unless it is blank or already present.
///
/// Returns true if a node was inserted.
pub(crate) fn push_unique(siblings: &mut Vec<FolderNode>, name: &str) -> bool {
    if name.trim().is_empty() {
        debug!("Ignoring blank folder name");
        return false;
    }
    if siblings.iter().any(|node| names_match(&node.name, name)) {
        debug!("Ignoring duplicate folder name: {}", name);
        return false;
    }
    siblings.push(FolderNode::new(name));
    true
}

/// A single named folder in the template
///
/// The name is fixed at construction. Children keep insertion order, which is
/// also the display and creation order, and no two children share a name
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    name: String,
    children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a new folder without subfolders
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Add subfolders, skipping blank and duplicate names
    pub fn with_children<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            push_unique(&mut self.children, name.as_ref());
        }
        self
    }

    /// The folder's name (not full path)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subfolders in insertion order
    pub fn children(&self) -> &[FolderNode] {
        &self.children
    }

    /// Number of immediate subfolders
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the folder has no subfolders
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Find an immediate subfolder by name, ignoring case
    ///
    /// Only direct children are searched.
    pub fn find(&self, name: &str) -> Option<&FolderNode> {
        self.children.iter().find(|child| names_match(&child.name, name))
    }

    /// Append a new empty subfolder
    ///
    /// Blank names and names already used by a sibling are ignored. Returns
    /// true if the subfolder was added.
    pub fn add_child(&mut self, name: &str) -> bool {
        push_unique(&mut self.children, name)
    }

    /// Total number of folders in this subtree, including this one
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FolderNode::subtree_size)
            .sum::<usize>()
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<FolderNode> {
        &mut self.children
    }
}
