//! JSON file operations for the local workspace
//!
//! Provides functions to read and write JSON files with serde validation.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::{GrantflowError, Result};
use crate::schemas::{Config, Project};

use super::paths::{get_config_path, get_drafts_path, get_project_json_path, get_projects_dir};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or violates the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GrantflowError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            GrantflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        GrantflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| GrantflowError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;
    debug!(path = %path.display(), "wrote JSON file");

    Ok(())
}

/// Read the config.json file for a workspace, or defaults if absent.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Read a project by id.
pub fn read_project(root: &Path, id: &str) -> Result<Project> {
    read_json(&get_project_json_path(root, id))
}

/// Write a project to its JSON file.
pub fn write_project(root: &Path, project: &Project) -> Result<()> {
    write_json(&get_project_json_path(root, &project.id), project)
}

/// List the ids of all projects in the workspace, sorted.
pub fn list_project_ids(root: &Path) -> Result<Vec<String>> {
    let dir = get_projects_dir(root);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut ids = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
    }
    ids.sort();
    Ok(ids)
}

/// Read the persisted draft entries, or an empty map if absent.
pub fn read_drafts(root: &Path) -> Result<HashMap<String, String>> {
    let path = get_drafts_path(root);
    if !path.exists() {
        return Ok(HashMap::new());
    }
    read_json(&path)
}

/// Write the draft entries back to disk.
pub fn write_drafts(root: &Path, entries: &HashMap<String, String>) -> Result<()> {
    write_json(&get_drafts_path(root), entries)
}
