//! The folder template and its operations

use crate::error::{Error, Result};
use crate::fs::DirectoryCreator;
use crate::template::node::push_unique;
use crate::template::{names_match, FolderNode, NodePath, Render, Walk};
use log::{debug, info, warn};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An ordered set of root folders describing a project layout
///
/// Root names are unique case-insensitively, just like the children of any
/// folder. All mutation goes through the template so that invariant holds at
/// every level.
///
/// # Example
///
/// ```
/// use folder_template::template::FolderTemplate;
///
/// let mut template = FolderTemplate::new();
/// assert!(template.add_root("Dokumentace"));
/// assert!(!template.add_root("dokumentace"));
/// assert!(template.add_child_to_root(0, "Smlouvy").unwrap());
///
/// let listing: Vec<_> = template.render().collect();
/// assert_eq!(listing, vec![(0, "Dokumentace"), (1, "Smlouvy")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderTemplate {
    roots: Vec<FolderNode>,
}

impl FolderTemplate {
    /// Create an empty template
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the standard project layout
    ///
    /// ```text
    /// Dokumentace
    ///   Technická dokumentace
    ///   Smlouvy
    ///   Reporty
    /// Materiály
    ///   Specifikace
    ///   Kalkulace
    /// Komunikace
    ///   Klient
    ///   Interní
    /// Fotografie
    /// ```
    pub fn create_default() -> Self {
        Self {
            roots: vec![
                FolderNode::new("Dokumentace").with_children([
                    "Technická dokumentace",
                    "Smlouvy",
                    "Reporty",
                ]),
                FolderNode::new("Materiály").with_children(["Specifikace", "Kalkulace"]),
                FolderNode::new("Komunikace").with_children(["Klient", "Interní"]),
                FolderNode::new("Fotografie"),
            ],
        }
    }

    /// Root folders in insertion order
    pub fn roots(&self) -> &[FolderNode] {
        &self.roots
    }

    /// Number of root folders
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if the template has no folders at all
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of folders at every depth
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(FolderNode::subtree_size).sum()
    }

    /// Find a root folder by name, ignoring case
    pub fn find_root(&self, name: &str) -> Option<&FolderNode> {
        self.roots.iter().find(|root| names_match(root.name(), name))
    }

    /// Get the folder at `path`
    ///
    /// Returns `None` if the path is empty or any position is out of range.
    pub fn node(&self, path: &NodePath) -> Option<&FolderNode> {
        let (&first, rest) = path.as_slice().split_first()?;
        let mut node = self.roots.get(first)?;
        for &index in rest {
            node = node.children().get(index)?;
        }
        Some(node)
    }

    /// Append a new empty root folder
    ///
    /// Blank names and names already used by another root are ignored.
    /// Returns true if the folder was added.
    pub fn add_root(&mut self, name: &str) -> bool {
        let added = push_unique(&mut self.roots, name);
        if added {
            info!("Added root folder '{}'", name);
        }
        added
    }

    /// Append a new empty subfolder to the folder at `parent`
    ///
    /// An empty `parent` path addresses the template itself, which makes this
    /// equivalent to [`FolderTemplate::add_root`]. Blank and duplicate names
    /// are ignored and reported as `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `parent` does not address a folder.
    pub fn add_child(&mut self, parent: &NodePath, name: &str) -> Result<bool> {
        let siblings = self.children_of_mut(parent.as_slice())?;
        let added = push_unique(siblings, name);
        if added {
            info!("Added folder '{}' under {}", name, parent);
        }
        Ok(added)
    }

    /// Append a new empty subfolder to the root folder at `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if there is no root folder at `index`.
    pub fn add_child_to_root(&mut self, index: usize, name: &str) -> Result<bool> {
        self.add_child(&NodePath::root(index), name)
    }

    /// Remove the root folder at `index` together with all its subfolders
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] and leaves the template unchanged if
    /// `index` is out of range.
    pub fn remove_root_at(&mut self, index: usize) -> Result<FolderNode> {
        self.remove_at(&NodePath::root(index))
    }

    /// Remove the folder at `path` together with all its subfolders
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] and leaves the template unchanged if
    /// `path` does not address a folder.
    pub fn remove_at(&mut self, path: &NodePath) -> Result<FolderNode> {
        let Some((&index, parent)) = path.as_slice().split_last() else {
            return Err(Error::InvalidIndex {
                index: 0,
                len: self.roots.len(),
            });
        };

        let siblings = self.children_of_mut(parent)?;
        if index >= siblings.len() {
            return Err(Error::InvalidIndex {
                index,
                len: siblings.len(),
            });
        }

        let removed = siblings.remove(index);
        info!(
            "Removed folder '{}' ({} folders in subtree)",
            removed.name(),
            removed.subtree_size()
        );
        Ok(removed)
    }

    /// Walk every folder depth-first, parents before children
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.roots)
    }

    /// Every folder as `(depth, name)` in depth-first pre-order
    ///
    /// Root folders have depth 0. The sequence is lazy and can be restarted by
    /// cloning it or calling `render` again.
    pub fn render(&self) -> Render<'_> {
        Render::new(&self.roots)
    }

    /// Numbered, indented listing for display to the user
    pub fn listing(&self) -> Listing<'_> {
        Listing { template: self }
    }

    /// Create the template's folders under `base`
    ///
    /// `base` itself is ensured first, then every folder in the order of
    /// [`FolderTemplate::walk`], so a parent always exists before its
    /// children. Returns the created folder paths (without `base`).
    ///
    /// # Errors
    ///
    /// Stops at the first directory that cannot be created and returns
    /// [`Error::Io`] for it. Directories created before the failure are left
    /// in place and listed in the error's `created` field.
    pub fn materialize<C>(&self, base: impl AsRef<Path>, creator: &C) -> Result<Vec<PathBuf>>
    where
        C: DirectoryCreator + ?Sized,
    {
        let base = base.as_ref();
        let mut created = Vec::with_capacity(self.node_count());

        if let Err(source) = ensure(creator, base) {
            return Err(Error::Io {
                path: base.to_path_buf(),
                source,
                created,
            });
        }

        for entry in self.walk() {
            let path = entry.path_under(base);
            if let Err(source) = ensure(creator, &path) {
                return Err(Error::Io {
                    path,
                    source,
                    created,
                });
            }
            info!("Created folder {}", path.display());
            created.push(path);
        }

        info!("Materialized {} folders under {}", created.len(), base.display());
        Ok(created)
    }

    /// Resolve the children list of the folder at `parent`
    ///
    /// An empty path resolves to the root folders.
    fn children_of_mut(&mut self, parent: &[usize]) -> Result<&mut Vec<FolderNode>> {
        let mut siblings = &mut self.roots;
        for &index in parent {
            let len = siblings.len();
            siblings = siblings
                .get_mut(index)
                .ok_or(Error::InvalidIndex { index, len })?
                .children_mut();
        }
        Ok(siblings)
    }
}

fn ensure<C>(creator: &C, path: &Path) -> io::Result<()>
where
    C: DirectoryCreator + ?Sized,
{
    debug!("Ensuring directory {}", path.display());
    creator.ensure(path).map_err(|source| {
        warn!("Failed to create {}: {}", path.display(), source);
        source
    })
}

/// Display adapter produced by [`FolderTemplate::listing`]
///
/// Root folders are numbered from 1, the numbers the menu asks for. Nested
/// folders are indented by two spaces per level behind a branch glyph.
pub struct Listing<'a> {
    template: &'a FolderTemplate,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut number = 0;
        for (depth, name) in self.template.render() {
            if depth == 0 {
                number += 1;
                writeln!(f, "{}. {}", number, name)?;
            } else {
                writeln!(f, "{}└─ {}", "  ".repeat(depth), name)?;
            }
        }
        Ok(())
    }
}
