//! Project command - create projects and change their status

use std::path::Path;

use chrono::Utc;

use crate::errors::{GrantflowError, Result};
use crate::fs::{get_project_json_path, read_project, write_project};
use crate::schemas::{Project, ProjectStatus};

use super::{resolve_actor, workspace_root};

/// Create a new project from an approved application
pub async fn create(
    cwd: Option<&Path>,
    id: &str,
    application: &str,
    title: &str,
    start: &str,
    end: &str,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let actor = resolve_actor(&root, role, email)?;
    if !actor.is_grants_manager() {
        return Err(GrantflowError::InvalidTransition(
            "creating a project requires the grants-manager role".to_string(),
        ));
    }

    if get_project_json_path(&root, id).exists() {
        return Err(GrantflowError::ConfigError(format!(
            "project {} already exists",
            id
        )));
    }

    let project = Project::new(
        id.to_string(),
        application.to_string(),
        title.to_string(),
        start.to_string(),
        end.to_string(),
        Utc::now(),
    );
    write_project(&root, &project)?;

    println!("Created project {}", id);
    Ok(())
}

/// Change a project's status
pub async fn set_status(
    cwd: Option<&Path>,
    id: &str,
    status: &str,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let actor = resolve_actor(&root, role, email)?;
    if !actor.is_grants_manager() {
        return Err(GrantflowError::InvalidTransition(
            "changing project status requires the grants-manager role".to_string(),
        ));
    }

    let status: ProjectStatus = status.parse()?;
    let project = read_project(&root, id)?.with_status(status, Utc::now());
    write_project(&root, &project)?;

    println!("Project {} is now {}", id, status);
    Ok(())
}
