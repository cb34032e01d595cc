//! Report command - manage the final report pair

use std::path::Path;

use chrono::Utc;

use crate::domain::{review_final_report, submit_final_reports};
use crate::errors::Result;
use crate::fs::{read_project, write_project};
use crate::schemas::{FinalReportStatus, ReportKind};

use super::{resolve_actor, workspace_root};

/// Record an uploaded final report document
pub async fn upload(
    cwd: Option<&Path>,
    project_id: &str,
    kind: &str,
    filename: &str,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let kind: ReportKind = kind.parse()?;
    let now = Utc::now();

    let project = read_project(&root, project_id)?;
    let report = project
        .final_report
        .clone()
        .unwrap_or_default()
        .with_document(kind, filename.to_string(), now.to_rfc3339())?;
    let project = project.with_final_report(report, now);
    write_project(&root, &project)?;

    println!("Recorded {} report {} for project {}", kind, filename, project_id);
    Ok(())
}

/// Submit the final report pair for review
pub async fn submit(cwd: Option<&Path>, project_id: &str) -> Result<()> {
    let root = workspace_root(cwd)?;

    let project = read_project(&root, project_id)?;
    let project = submit_final_reports(&project, Utc::now())?;
    write_project(&root, &project)?;

    println!("Final reports submitted for review on project {}", project_id);
    Ok(())
}

/// Review the submitted final report pair as a grants manager
pub async fn review(
    cwd: Option<&Path>,
    project_id: &str,
    decision: &str,
    notes: &str,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let actor = resolve_actor(&root, role, email)?;
    let decision: FinalReportStatus = decision.parse()?;

    let project = read_project(&root, project_id)?;
    let project = review_final_report(&project, &actor, decision, notes.to_string(), Utc::now())?;
    write_project(&root, &project)?;

    println!(
        "Final reports {} on project {}",
        project.final_report.as_ref().map(|r| r.status).unwrap_or_default(),
        project_id
    );
    Ok(())
}
