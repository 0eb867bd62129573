//! In-memory folder template tree
//!
//! A template is a forest of owned [`FolderNode`]s. Every node owns its
//! children outright, so the structure is always a tree: no node has two
//! parents and no node is its own descendant.

mod folder_template;
mod node;
mod walk;

pub use folder_template::{FolderTemplate, Listing};
pub use node::{names_match, FolderNode, NodePath};
pub use walk::{Render, Walk, WalkEntry};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{FolderNode, FolderTemplate, Listing, NodePath, Render, Walk, WalkEntry};
}
