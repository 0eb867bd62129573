//! Depth-first traversal of a folder template

use crate::template::FolderNode;
use std::path::{Path, PathBuf};

/// A node visited during a walk
#[derive(Debug, Clone)]
pub struct WalkEntry<'a> {
    /// Nesting depth (root folders = 0)
    pub depth: usize,
    /// Path of the folder relative to the template root
    pub path: PathBuf,
    /// The visited folder
    pub node: &'a FolderNode,
}

impl WalkEntry<'_> {
    /// The folder's name
    pub fn name(&self) -> &str {
        self.node.name()
    }

    /// The folder's location below `base`
    pub fn path_under(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }
}

/// Pre-order iterator over a forest of folders
///
/// Parents are always yielded before their children and siblings in
/// insertion order. The walk borrows the template, so it cannot observe a
/// mutation halfway through; cloning it restarts from the same position.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<WalkEntry<'a>>,
}

impl<'a> Walk<'a> {
    /// Create a walk over the given root folders
    pub fn new(roots: &'a [FolderNode]) -> Self {
        // Push in reverse so the first root is popped first
        let stack = roots
            .iter()
            .rev()
            .map(|node| WalkEntry {
                depth: 0,
                path: PathBuf::from(node.name()),
                node,
            })
            .collect();

        Self { stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        for child in current.node.children().iter().rev() {
            self.stack.push(WalkEntry {
                depth: current.depth + 1,
                path: current.path.join(child.name()),
                node: child,
            });
        }

        Some(current)
    }
}

/// Pre-order sequence of `(depth, name)` pairs, as used for display
///
/// Visits folders in the same order as [`Walk`] but only tracks depth, so no
/// paths are built.
#[derive(Debug, Clone)]
pub struct Render<'a> {
    stack: Vec<(usize, &'a FolderNode)>,
}

impl<'a> Render<'a> {
    pub(crate) fn new(roots: &'a [FolderNode]) -> Self {
        Self {
            stack: roots.iter().rev().map(|node| (0, node)).collect(),
        }
    }
}

impl<'a> Iterator for Render<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node.name()))
    }
}
