//! Partner command - manage collaborating partners on a project

use std::path::Path;

use chrono::Utc;

use crate::errors::Result;
use crate::fs::{read_project, write_project};
use crate::schemas::Partner;

use super::workspace_root;

/// Add a partner to a project
pub async fn add(cwd: Option<&Path>, project_id: &str, name: &str, role: &str) -> Result<()> {
    let root = workspace_root(cwd)?;

    let project = read_project(&root, project_id)?;
    let id = format!("partner-{:03}", project.partners.len() + 1);
    let partner = Partner::new(id.clone(), name.to_string(), role.to_string());
    let project = project.with_partner(partner, Utc::now());
    write_project(&root, &project)?;

    println!("Added partner {} to project {}", id, project_id);
    Ok(())
}

/// Remove a partner from a project
pub async fn remove(cwd: Option<&Path>, project_id: &str, partner_id: &str) -> Result<()> {
    let root = workspace_root(cwd)?;

    let project = read_project(&root, project_id)?.without_partner(partner_id, Utc::now())?;
    write_project(&root, &project)?;

    println!("Removed partner {} from project {}", partner_id, project_id);
    Ok(())
}

/// Record an uploaded MOU for a partner
pub async fn mou(
    cwd: Option<&Path>,
    project_id: &str,
    partner_id: &str,
    filename: &str,
) -> Result<()> {
    let root = workspace_root(cwd)?;

    let project = read_project(&root, project_id)?.with_partner_mou(
        partner_id,
        filename.to_string(),
        Utc::now(),
    )?;
    write_project(&root, &project)?;

    println!("Recorded MOU {} for partner {}", filename, partner_id);
    Ok(())
}
