//! Milestone command - manage project milestones

use std::path::Path;

use chrono::Utc;

use crate::errors::{GrantflowError, Result};
use crate::fs::{read_project, write_project};
use crate::schemas::{Milestone, MilestoneStatus};

use super::{resolve_actor, workspace_root};

/// Add a milestone to a project
pub async fn add(
    cwd: Option<&Path>,
    project_id: &str,
    title: &str,
    due: &str,
    description: &str,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let actor = resolve_actor(&root, role, email)?;
    if !actor.is_grants_manager() {
        return Err(GrantflowError::InvalidTransition(
            "adding milestones requires the grants-manager role".to_string(),
        ));
    }

    let project = read_project(&root, project_id)?;
    let id = format!("m-{:03}", project.milestones.len() + 1);
    let milestone = Milestone::new(
        id.clone(),
        title.to_string(),
        description.to_string(),
        due.to_string(),
    );
    let project = project.with_milestone(milestone, Utc::now());
    write_project(&root, &project)?;

    println!("Added milestone {} to project {}", id, project_id);
    Ok(())
}

/// Change a milestone's status
pub async fn set_status(
    cwd: Option<&Path>,
    project_id: &str,
    milestone_id: &str,
    status: &str,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let status: MilestoneStatus = status.parse()?;

    let project = read_project(&root, project_id)?.with_milestone_status(
        milestone_id,
        status,
        Utc::now(),
    )?;
    write_project(&root, &project)?;

    println!("Milestone {} is now {}", milestone_id, status);
    Ok(())
}

/// Record an uploaded progress report for a milestone
pub async fn report(
    cwd: Option<&Path>,
    project_id: &str,
    milestone_id: &str,
    filename: &str,
) -> Result<()> {
    let root = workspace_root(cwd)?;

    let project = read_project(&root, project_id)?.with_progress_report(
        milestone_id,
        filename.to_string(),
        Utc::now(),
    )?;
    write_project(&root, &project)?;

    println!(
        "Recorded progress report {} for milestone {}",
        filename, milestone_id
    );
    Ok(())
}
