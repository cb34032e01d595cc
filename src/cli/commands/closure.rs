//! Closure command - drive the project closure workflow

use std::path::Path;

use chrono::Utc;

use crate::domain::{
    apply_vc_decision, archive_project, generate_certificate, initiate_vc_signoff,
};
use crate::errors::Result;
use crate::fs::{read_project, write_project};
use crate::schemas::VcDecision;

use super::{resolve_actor, workspace_root};

/// Send an approved project to the Vice-Chancellor for sign-off
pub async fn initiate(
    cwd: Option<&Path>,
    project_id: &str,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let actor = resolve_actor(&root, role, email)?;
    let now = Utc::now();

    let token = format!("vc-{}-{}", project_id, now.timestamp());
    let project = read_project(&root, project_id)?;
    let project = initiate_vc_signoff(&project, &actor, token.clone(), now)?;
    write_project(&root, &project)?;

    println!("VC sign-off initiated for project {}", project_id);
    println!("Sign-off token: {}", token);
    Ok(())
}

/// Record the Vice-Chancellor's sign-off decision
pub async fn decide(
    cwd: Option<&Path>,
    project_id: &str,
    decision: &str,
    signed_by: &str,
    notes: &str,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let decision: VcDecision = decision.parse()?;

    let project = read_project(&root, project_id)?;
    let project = apply_vc_decision(
        &project,
        decision,
        signed_by.to_string(),
        notes.to_string(),
        Utc::now(),
    )?;
    write_project(&root, &project)?;

    println!(
        "VC decision recorded for project {}: closure is now {}",
        project_id,
        project.closure_status()
    );
    Ok(())
}

/// Generate the closure certificate for a signed-off project
pub async fn certificate(
    cwd: Option<&Path>,
    project_id: &str,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let actor = resolve_actor(&root, role, email)?;

    let project = read_project(&root, project_id)?;
    let project = generate_certificate(&project, &actor, Utc::now())?;
    write_project(&root, &project)?;

    println!("Closure certificate generated for project {}", project_id);
    Ok(())
}

/// Archive the project's documents and formally close it
pub async fn archive(
    cwd: Option<&Path>,
    project_id: &str,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let actor = resolve_actor(&root, role, email)?;

    let project = read_project(&root, project_id)?;
    let project = archive_project(&project, &actor, Utc::now())?;
    write_project(&root, &project)?;

    println!("Project {} archived and closed", project_id);
    Ok(())
}
