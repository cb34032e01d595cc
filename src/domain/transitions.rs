//! Closure workflow transition logic
//!
//! Pure functions for moving a project through the closure sequence. Every
//! function validates before applying, never mutates its input, and returns
//! a new Project value.

use chrono::{DateTime, Utc};

use crate::errors::{GrantflowError, Result};
use crate::schemas::{ClosureStatus, FinalReportStatus, Project, ProjectStatus, VcDecision};

use super::permissions::{
    can_archive, can_generate_certificate, can_initiate_signoff, can_review_final_report, Actor,
};
use super::states::allowed_next_statuses;
use super::validation::ValidationResult;

/// Validate a closure-workflow transition without applying it.
///
/// Adjacency comes first: only the immediate successor states of the
/// current position are candidates. The target's own precondition is
/// checked after that.
pub fn validate_closure_transition(
    project: &Project,
    target: ClosureStatus,
    actor: &Actor,
) -> ValidationResult {
    let current = project.closure_status();
    let allowed = allowed_next_statuses(current);
    if !allowed.contains(&target) {
        return ValidationResult::failure(format!(
            "cannot transition closure from {} to {}",
            current, target
        ));
    }

    match target {
        ClosureStatus::VcReview => {
            if !actor.is_grants_manager() {
                ValidationResult::failure("initiating VC sign-off requires the grants-manager role")
            } else if !can_initiate_signoff(project, actor) {
                ValidationResult::failure(
                    "final reports must be approved before VC sign-off can be initiated",
                )
            } else {
                ValidationResult::success()
            }
        }
        // The VC decision itself is external; reaching vc_review is the
        // only precondition for either outcome.
        ClosureStatus::SignedOff | ClosureStatus::Rejected => ValidationResult::success(),
        ClosureStatus::Closed => {
            if !can_archive(project, actor) {
                ValidationResult::failure(
                    "archiving requires a generated closure certificate on an open project",
                )
            } else {
                ValidationResult::success()
            }
        }
        ClosureStatus::Pending => {
            ValidationResult::failure("cannot transition closure back to pending")
        }
    }
}

fn ensure(validation: ValidationResult) -> Result<()> {
    if validation.valid {
        Ok(())
    } else {
        Err(GrantflowError::InvalidTransition(
            validation
                .reason
                .unwrap_or_else(|| "transition validation failed".to_string()),
        ))
    }
}

/// Send an approved project to the Vice-Chancellor for sign-off.
///
/// Moves the closure workflow from pending to vc_review and records the
/// sign-off token the VC will use to submit a decision.
pub fn initiate_vc_signoff(
    project: &Project,
    actor: &Actor,
    token: String,
    now: DateTime<Utc>,
) -> Result<Project> {
    ensure(validate_closure_transition(project, ClosureStatus::VcReview, actor))?;

    let workflow = project
        .closure_workflow
        .clone()
        .unwrap_or_default()
        .initiated(token);
    Ok(project.clone().with_closure_workflow(workflow, now))
}

/// Record the Vice-Chancellor's sign-off decision.
///
/// Approval advances the workflow to signed_off and marks the project
/// completed; rejection is a terminal outcome that keeps the project open.
pub fn apply_vc_decision(
    project: &Project,
    decision: VcDecision,
    signed_by: String,
    notes: String,
    now: DateTime<Utc>,
) -> Result<Project> {
    let target = match decision {
        VcDecision::Approved => ClosureStatus::SignedOff,
        VcDecision::Rejected => ClosureStatus::Rejected,
    };
    // The actor here is the VC acting through a sign-off token, not a
    // role-checked workspace user.
    let external = Actor::new("vice-chancellor", signed_by.clone());
    ensure(validate_closure_transition(project, target, &external))?;

    let workflow = project
        .closure_workflow
        .clone()
        .unwrap_or_default()
        .with_vc_decision(decision, signed_by, now.to_rfc3339(), notes);
    let updated = project.clone().with_closure_workflow(workflow, now);

    Ok(match decision {
        VcDecision::Approved => updated.with_status(ProjectStatus::Completed, now),
        VcDecision::Rejected => updated,
    })
}

/// Generate the closure certificate for a signed-off project.
///
/// Not a state transition: the workflow stays in signed_off, but the
/// certificate can only be generated once.
pub fn generate_certificate(project: &Project, actor: &Actor, now: DateTime<Utc>) -> Result<Project> {
    if !can_generate_certificate(project, actor) {
        return Err(GrantflowError::InvalidTransition(
            "certificate generation requires a signed-off project without an existing certificate"
                .to_string(),
        ));
    }

    let workflow = project
        .closure_workflow
        .clone()
        .unwrap_or_default()
        .with_certificate(now.to_rfc3339());
    Ok(project.clone().with_closure_workflow(workflow, now))
}

/// Archive a project's documents and formally close it.
///
/// Moves the closure workflow from signed_off to closed and sets the
/// project status to closed.
pub fn archive_project(project: &Project, actor: &Actor, now: DateTime<Utc>) -> Result<Project> {
    ensure(validate_closure_transition(project, ClosureStatus::Closed, actor))?;

    let workflow = project.closure_workflow.clone().unwrap_or_default().closed();
    Ok(project
        .clone()
        .with_closure_workflow(workflow, now)
        .with_status(ProjectStatus::Closed, now))
}

/// Submit the final report pair for review.
pub fn submit_final_reports(project: &Project, now: DateTime<Utc>) -> Result<Project> {
    let report = project.final_report.clone().ok_or_else(|| {
        GrantflowError::InvalidTransition(format!(
            "project {} has no final report uploads to submit",
            project.id
        ))
    })?;
    let submitted = report.submitted(now.to_rfc3339())?;
    Ok(project.clone().with_final_report(submitted, now))
}

/// Review the submitted final report pair as a grants manager.
pub fn review_final_report(
    project: &Project,
    actor: &Actor,
    decision: FinalReportStatus,
    review_notes: String,
    now: DateTime<Utc>,
) -> Result<Project> {
    if !can_review_final_report(project, actor) {
        return Err(GrantflowError::InvalidTransition(
            "reviewing final reports requires the grants-manager role and a submitted report pair"
                .to_string(),
        ));
    }

    let report = project.final_report.clone().ok_or_else(|| {
        GrantflowError::InvalidTransition(format!(
            "project {} has no final report to review",
            project.id
        ))
    })?;
    let reviewed = report.reviewed(decision, review_notes, actor.email.clone(), now.to_rfc3339())?;
    Ok(project.clone().with_final_report(reviewed, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{FinalReport, ReportKind};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 10, 9, 0, 0).unwrap()
    }

    fn manager() -> Actor {
        Actor::new("Grants Manager", "gm@uni.edu")
    }

    fn researcher() -> Actor {
        Actor::new("Researcher", "pi@uni.edu")
    }

    fn base_project() -> Project {
        Project::new(
            "proj-001".to_string(),
            "app-042".to_string(),
            "Coastal erosion monitoring".to_string(),
            "2025-01-01".to_string(),
            "2025-12-31".to_string(),
            now(),
        )
    }

    fn submitted_report() -> FinalReport {
        FinalReport::default()
            .with_document(
                ReportKind::Narrative,
                "narrative.pdf".to_string(),
                "2025-10-01T10:00:00Z".to_string(),
            )
            .unwrap()
            .with_document(
                ReportKind::Financial,
                "financial.xlsx".to_string(),
                "2025-10-02T10:00:00Z".to_string(),
            )
            .unwrap()
            .submitted("2025-10-03T10:00:00Z".to_string())
            .unwrap()
    }

    fn project_ready_for_signoff() -> Project {
        let report = submitted_report()
            .reviewed(
                FinalReportStatus::Approved,
                "Complete".to_string(),
                "gm@uni.edu".to_string(),
                "2025-10-04T10:00:00Z".to_string(),
            )
            .unwrap();
        base_project().with_final_report(report, now())
    }

    #[test]
    fn test_full_closure_sequence() {
        let project = project_ready_for_signoff();

        let project = initiate_vc_signoff(&project, &manager(), "vc-tok-1".to_string(), now()).unwrap();
        assert_eq!(project.closure_status(), ClosureStatus::VcReview);

        let project = apply_vc_decision(
            &project,
            VcDecision::Approved,
            "Prof. Adeyemi".to_string(),
            "Outcomes delivered".to_string(),
            now(),
        )
        .unwrap();
        assert_eq!(project.closure_status(), ClosureStatus::SignedOff);
        assert_eq!(project.status, ProjectStatus::Completed);

        let project = generate_certificate(&project, &manager(), now()).unwrap();
        assert!(project.closure_workflow.as_ref().unwrap().closure_certificate_generated);

        let project = archive_project(&project, &manager(), now()).unwrap();
        assert_eq!(project.closure_status(), ClosureStatus::Closed);
        assert_eq!(project.status, ProjectStatus::Closed);
    }

    #[test]
    fn test_skipping_states_is_rejected() {
        // pending -> signed_off directly must fail
        let project = project_ready_for_signoff();
        let validation =
            validate_closure_transition(&project, ClosureStatus::SignedOff, &manager());
        assert!(!validation.valid);

        let err = apply_vc_decision(
            &project,
            VcDecision::Approved,
            "Prof. Adeyemi".to_string(),
            "".to_string(),
            now(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_initiate_requires_manager_role() {
        let project = project_ready_for_signoff();
        let err = initiate_vc_signoff(&project, &researcher(), "vc-tok-1".to_string(), now())
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_initiate_requires_approved_reports() {
        let project = base_project().with_final_report(submitted_report(), now());
        let err =
            initiate_vc_signoff(&project, &manager(), "vc-tok-1".to_string(), now()).unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_vc_rejection_is_terminal() {
        let project = project_ready_for_signoff();
        let project =
            initiate_vc_signoff(&project, &manager(), "vc-tok-1".to_string(), now()).unwrap();

        let project = apply_vc_decision(
            &project,
            VcDecision::Rejected,
            "Prof. Adeyemi".to_string(),
            "Budget reconciliation outstanding".to_string(),
            now(),
        )
        .unwrap();
        assert_eq!(project.closure_status(), ClosureStatus::Rejected);
        // Rejection does not complete the project
        assert_eq!(project.status, ProjectStatus::Active);

        // No way out of rejected
        let err = apply_vc_decision(
            &project,
            VcDecision::Approved,
            "Prof. Adeyemi".to_string(),
            "".to_string(),
            now(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_certificate_requires_signoff() {
        let project = project_ready_for_signoff();
        let err = generate_certificate(&project, &manager(), now()).unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_certificate_only_once() {
        let project = project_ready_for_signoff();
        let project =
            initiate_vc_signoff(&project, &manager(), "vc-tok-1".to_string(), now()).unwrap();
        let project = apply_vc_decision(
            &project,
            VcDecision::Approved,
            "Prof. Adeyemi".to_string(),
            "".to_string(),
            now(),
        )
        .unwrap();
        let project = generate_certificate(&project, &manager(), now()).unwrap();

        let err = generate_certificate(&project, &manager(), now()).unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_archive_requires_certificate() {
        let project = project_ready_for_signoff();
        let project =
            initiate_vc_signoff(&project, &manager(), "vc-tok-1".to_string(), now()).unwrap();
        let project = apply_vc_decision(
            &project,
            VcDecision::Approved,
            "Prof. Adeyemi".to_string(),
            "".to_string(),
            now(),
        )
        .unwrap();

        let err = archive_project(&project, &manager(), now()).unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_submit_final_reports_requires_uploads() {
        let err = submit_final_reports(&base_project(), now()).unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_review_final_report_gating() {
        let project = base_project().with_final_report(submitted_report(), now());

        // Researcher cannot review
        let err = review_final_report(
            &project,
            &researcher(),
            FinalReportStatus::Approved,
            "".to_string(),
            now(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");

        // Mixed-case manager role can
        let actor = Actor::new("grants MANAGER", "gm@uni.edu");
        let reviewed = review_final_report(
            &project,
            &actor,
            FinalReportStatus::Approved,
            "Complete".to_string(),
            now(),
        )
        .unwrap();
        assert_eq!(
            reviewed.final_report.as_ref().unwrap().status,
            FinalReportStatus::Approved
        );
    }

    #[test]
    fn test_transitions_never_mutate_input() {
        let project = project_ready_for_signoff();
        let original = project.clone();
        let _ = initiate_vc_signoff(&project, &manager(), "vc-tok-1".to_string(), now());
        assert_eq!(project, original);
    }
}
