//! Path resolution utilities for grantflow
//!
//! Provides functions to locate the workspace root and construct paths to
//! the files a workspace holds.

use std::path::{Path, PathBuf};

use crate::errors::{GrantflowError, Result};

/// Find the workspace root containing a .grantflow directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `RepoNotFound` - If no directory on the path contains .grantflow
pub fn find_workspace_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| GrantflowError::RepoNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(".grantflow").is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(GrantflowError::RepoNotFound(
                    "Could not find a workspace root with a .grantflow directory".to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .grantflow directory.
pub fn get_grantflow_dir(root: &Path) -> PathBuf {
    root.join(".grantflow")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_grantflow_dir(root).join("config.json")
}

/// Get the path to the projects directory.
pub fn get_projects_dir(root: &Path) -> PathBuf {
    get_grantflow_dir(root).join("projects")
}

/// Get the path to a project's JSON file.
pub fn get_project_json_path(root: &Path, id: &str) -> PathBuf {
    get_projects_dir(root).join(format!("{}.json", id))
}

/// Get the path to the drafts.json file.
pub fn get_drafts_path(root: &Path) -> PathBuf {
    get_grantflow_dir(root).join("drafts.json")
}
