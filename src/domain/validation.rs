//! Structural validation for project values
//!
//! A caller must be able to trust the shape of a Project before handing it
//! to the derivation engine; these checks reject values that violate the
//! data-model invariants.

use crate::errors::{GrantflowError, Result};
use crate::schemas::{FinalReport, FinalReportStatus, Project, Requisition};

use super::derive::parse_instant;

/// Result of a precondition check
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the check passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Check one requisition against the project that owns it.
pub fn validate_requisition(project: &Project, requisition: &Requisition) -> Result<()> {
    if project.milestone(&requisition.milestone_id).is_none() {
        return Err(GrantflowError::MissingReference(format!(
            "requisition {} references unknown milestone {}",
            requisition.id, requisition.milestone_id
        )));
    }
    if requisition.amount <= 0.0 {
        return Err(GrantflowError::SchemaValidation(format!(
            "requisition {} amount must be positive, got {}",
            requisition.id, requisition.amount
        )));
    }

    // Review fields are present iff the requisition has been reviewed
    let has_review_fields =
        requisition.reviewed_by.is_some() && requisition.reviewed_date.is_some();
    if requisition.is_reviewed() && !has_review_fields {
        return Err(GrantflowError::SchemaValidation(format!(
            "requisition {} is {} but carries no reviewer identity",
            requisition.id, requisition.status
        )));
    }
    if !requisition.is_reviewed()
        && (requisition.reviewed_by.is_some()
            || requisition.reviewed_date.is_some()
            || requisition.review_notes.is_some())
    {
        return Err(GrantflowError::SchemaValidation(format!(
            "requisition {} is still submitted but carries review fields",
            requisition.id
        )));
    }
    Ok(())
}

/// Check the final report pair's submission invariant.
pub fn validate_final_report(report: &FinalReport) -> Result<()> {
    let past_submission = matches!(
        report.status,
        FinalReportStatus::Submitted | FinalReportStatus::UnderReview | FinalReportStatus::Approved
    );
    if past_submission && !report.is_complete() {
        return Err(GrantflowError::SchemaValidation(format!(
            "final report is {} but the narrative/financial pair is incomplete",
            report.status
        )));
    }
    Ok(())
}

/// Validate a whole project value.
///
/// Fails fast with the first violation found; callers surface the error
/// rather than proceeding with a partially-valid aggregate.
pub fn validate_project(project: &Project) -> Result<()> {
    if project.id.is_empty() {
        return Err(GrantflowError::SchemaValidation(
            "project id must not be empty".to_string(),
        ));
    }
    if project.title.is_empty() {
        return Err(GrantflowError::SchemaValidation(format!(
            "project {} title must not be empty",
            project.id
        )));
    }

    for milestone in &project.milestones {
        if milestone.id.is_empty() {
            return Err(GrantflowError::SchemaValidation(format!(
                "project {} has a milestone with an empty id",
                project.id
            )));
        }
        if parse_instant(&milestone.due_date).is_none() {
            return Err(GrantflowError::SchemaValidation(format!(
                "milestone {} has unparseable due date {:?}",
                milestone.id, milestone.due_date
            )));
        }
        // A completed milestone can never carry a stale overdue flag
        if milestone.is_completed() && milestone.is_overdue == Some(true) {
            return Err(GrantflowError::SchemaValidation(format!(
                "milestone {} is completed but flagged overdue",
                milestone.id
            )));
        }
    }

    for requisition in &project.requisitions {
        validate_requisition(project, requisition)?;
    }

    if let Some(report) = &project.final_report {
        validate_final_report(report)?;
    }

    Ok(())
}
