//! Creating a project folder from a template

use crate::error::{Error, Result};
use crate::fs::ProjectFs;
use crate::prompt::Prompt;
use crate::template::FolderTemplate;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Result of [`create_project`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectOutcome {
    /// The project folder and all template folders exist
    Created {
        /// The project folder
        path: PathBuf,
        /// Template folders created inside it, parents first
        folders: Vec<PathBuf>,
    },
    /// The project folder already existed and the user kept it
    Cancelled,
}

/// Create `base_dir/name` and materialize `template` inside it
///
/// If the project folder already exists, `prompt` is asked whether to replace
/// it. Replacing deletes the old folder with all its contents before the
/// template is created again.
///
/// # Errors
///
/// - [`Error::EmptyProjectName`] if `name` is blank
/// - [`Error::Prompt`] if the confirmation cannot be read
/// - [`Error::Remove`] if the old project folder cannot be deleted
/// - [`Error::Io`] if a directory cannot be created
pub fn create_project<F, P>(
    template: &FolderTemplate,
    base_dir: &Path,
    name: &str,
    fs: &F,
    prompt: &mut P,
) -> Result<ProjectOutcome>
where
    F: ProjectFs + ?Sized,
    P: Prompt + ?Sized,
{
    if name.trim().is_empty() {
        return Err(Error::EmptyProjectName);
    }

    let path = base_dir.join(name);

    if fs.dir_exists(&path) {
        let question = format!("Složka '{}' již existuje. Chcete ji přepsat? (a/n)", name);
        if !prompt.confirm(&question).map_err(Error::Prompt)? {
            info!("Kept existing project folder {}", path.display());
            return Ok(ProjectOutcome::Cancelled);
        }

        warn!("Replacing existing project folder {}", path.display());
        fs.remove_dir_all(&path).map_err(|source| Error::Remove {
            path: path.clone(),
            source,
        })?;
    }

    let folders = template.materialize(&path, fs)?;
    info!("Created project '{}' at {}", name, path.display());

    Ok(ProjectOutcome::Created { path, folders })
}
