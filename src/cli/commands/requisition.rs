//! Requisition command - manage fund requisitions and their drafts

use std::path::Path;

use chrono::Utc;

use crate::errors::{GrantflowError, Result};
use crate::fs::{read_drafts, read_project, write_drafts, write_project};
use crate::schemas::{Requisition, RequisitionStatus};
use crate::store::{
    clear_requisition_draft, load_requisition_draft, save_requisition_draft, MemoryDraftStore,
    RequisitionDraft,
};

use super::{resolve_actor, workspace_root};

/// Save a requisition draft without submitting it
pub async fn draft(
    cwd: Option<&Path>,
    project_id: &str,
    milestone_id: &str,
    amount: f64,
    notes: &str,
) -> Result<()> {
    let root = workspace_root(cwd)?;

    // The draft references a milestone of a real project; check both now
    // rather than at submission time.
    let project = read_project(&root, project_id)?;
    if project.milestone(milestone_id).is_none() {
        return Err(GrantflowError::MissingReference(format!(
            "no milestone {} on project {}",
            milestone_id, project_id
        )));
    }

    let mut store = MemoryDraftStore::with_entries(read_drafts(&root)?);
    save_requisition_draft(
        &mut store,
        project_id,
        &RequisitionDraft {
            milestone_id: milestone_id.to_string(),
            amount,
            notes: notes.to_string(),
        },
    )?;
    write_drafts(&root, store.entries())?;

    println!("Saved requisition draft for project {}", project_id);
    Ok(())
}

/// Submit a requisition from flags, falling back to the saved draft
pub async fn submit(
    cwd: Option<&Path>,
    project_id: &str,
    milestone_id: Option<&str>,
    amount: Option<f64>,
    notes: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let mut store = MemoryDraftStore::with_entries(read_drafts(&root)?);

    let (milestone_id, amount, notes) = match (milestone_id, amount) {
        (Some(m), Some(a)) => (
            m.to_string(),
            a,
            notes.unwrap_or_default().to_string(),
        ),
        _ => {
            let saved = load_requisition_draft(&store, project_id)?.ok_or_else(|| {
                GrantflowError::FileNotFound(format!(
                    "no saved requisition draft for project {} (pass --milestone and --amount)",
                    project_id
                ))
            })?;
            (
                milestone_id.map(str::to_string).unwrap_or(saved.milestone_id),
                amount.unwrap_or(saved.amount),
                notes.map(str::to_string).unwrap_or(saved.notes),
            )
        }
    };

    if amount <= 0.0 {
        return Err(GrantflowError::SchemaValidation(format!(
            "requisition amount must be positive, got {}",
            amount
        )));
    }

    let now = Utc::now();
    let project = read_project(&root, project_id)?;
    let id = format!("req-{:03}", project.requisitions.len() + 1);
    let requisition = Requisition::new(
        id.clone(),
        milestone_id,
        amount,
        now.to_rfc3339(),
        notes,
    );
    let project = project.with_requisition(requisition, now)?;
    write_project(&root, &project)?;

    // The submitted requisition supersedes the draft
    clear_requisition_draft(&mut store, project_id);
    write_drafts(&root, store.entries())?;

    println!("Submitted requisition {} for project {}", id, project_id);
    Ok(())
}

/// Review a submitted requisition as a grants manager
pub async fn review(
    cwd: Option<&Path>,
    project_id: &str,
    requisition_id: &str,
    decision: &str,
    notes: &str,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let actor = resolve_actor(&root, role, email)?;
    if !actor.is_grants_manager() {
        return Err(GrantflowError::InvalidTransition(
            "reviewing requisitions requires the grants-manager role".to_string(),
        ));
    }

    let status: RequisitionStatus = decision.parse()?;
    let project = read_project(&root, project_id)?.with_reviewed_requisition(
        requisition_id,
        status,
        notes.to_string(),
        actor.email.clone(),
        Utc::now(),
    )?;
    write_project(&root, &project)?;

    println!("Requisition {} {}", requisition_id, status);
    Ok(())
}
