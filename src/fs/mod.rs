//! File system utilities for grantflow
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{
    list_project_ids, read_config, read_drafts, read_json, read_project, write_drafts, write_json,
    write_project,
};
pub use paths::{
    find_workspace_root, get_config_path, get_drafts_path, get_grantflow_dir,
    get_project_json_path, get_projects_dir, resolve_cwd,
};
