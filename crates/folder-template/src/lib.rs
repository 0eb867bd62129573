//! Folder Template Library
//!
//! A library for describing a hierarchical layout of project folders and
//! creating that layout on disk for new projects.
//!
//! # Core Concepts
//!
//! - **FolderNode**: A named folder owning an ordered list of subfolders
//! - **FolderTemplate**: The ordered root folders of a project layout
//! - **DirectoryCreator**: Injected capability that creates directories
//! - **Prompt**: Injected capability that talks to the user
//!
//! # Example
//!
//! ```no_run
//! use folder_template::prelude::*;
//!
//! let mut template = FolderTemplate::create_default();
//! template.add_root("Faktury");
//!
//! for (depth, name) in template.render() {
//!     println!("{:indent$}{}", "", name, indent = depth * 2);
//! }
//!
//! template
//!     .materialize("./novy-projekt", &FsDirectoryCreator)
//!     .expect("Failed to create folders");
//! ```

mod error;
pub mod fs;
pub mod project;
pub mod prompt;
pub mod template;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fs::{DirectoryCreator, FsDirectoryCreator, ProjectFs};
    pub use crate::project::{create_project, ProjectOutcome};
    pub use crate::prompt::{ConsolePrompt, Prompt};
    pub use crate::template::prelude::*;
}
