//! Permission predicates for closure actions
//!
//! Pure functions deciding whether an action is currently available. They
//! never perform the action; executing it is the caller's job.

use crate::schemas::{ClosureStatus, FinalReportStatus, Project, ProjectStatus};

/// Role that administers grants and reviews are gated on.
///
/// Role comparison is case-insensitive: "Grants Manager" and
/// "grants manager" identify the same role.
pub const GRANTS_MANAGER_ROLE: &str = "grants manager";

/// Who is asking for a permission decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Role name as supplied by the identity layer
    pub role: String,
    /// Email of the actor
    pub email: String,
}

impl Actor {
    pub fn new(role: impl Into<String>, email: impl Into<String>) -> Self {
        Actor {
            role: role.into(),
            email: email.into(),
        }
    }

    /// Check if the actor holds the grants-manager role
    pub fn is_grants_manager(&self) -> bool {
        self.role.trim().eq_ignore_ascii_case(GRANTS_MANAGER_ROLE)
    }
}

/// A closure action the caller could offer the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosureAction {
    ReviewFinalReport,
    InitiateSignoff,
    GenerateCertificate,
    Archive,
}

impl std::fmt::Display for ClosureAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosureAction::ReviewFinalReport => write!(f, "review-final-report"),
            ClosureAction::InitiateSignoff => write!(f, "initiate-signoff"),
            ClosureAction::GenerateCertificate => write!(f, "generate-certificate"),
            ClosureAction::Archive => write!(f, "archive"),
        }
    }
}

/// A grants manager may review the final report pair once it is submitted.
pub fn can_review_final_report(project: &Project, actor: &Actor) -> bool {
    actor.is_grants_manager()
        && project
            .final_report
            .as_ref()
            .map(|r| r.status == FinalReportStatus::Submitted)
            .unwrap_or(false)
}

/// A grants manager may send an approved final report to the
/// Vice-Chancellor, unless sign-off is already in flight.
pub fn can_initiate_signoff(project: &Project, actor: &Actor) -> bool {
    actor.is_grants_manager()
        && project
            .final_report
            .as_ref()
            .map(|r| r.status == FinalReportStatus::Approved)
            .unwrap_or(false)
        && project.closure_status() != ClosureStatus::VcReview
}

/// The closure certificate may be generated once the Vice-Chancellor has
/// signed off, and only once.
pub fn can_generate_certificate(project: &Project, _actor: &Actor) -> bool {
    match project.closure_workflow.as_ref() {
        Some(workflow) => {
            workflow.status == ClosureStatus::SignedOff && !workflow.closure_certificate_generated
        }
        None => false,
    }
}

/// A project with a generated certificate may be archived, until it is
/// formally closed.
pub fn can_archive(project: &Project, _actor: &Actor) -> bool {
    project
        .closure_workflow
        .as_ref()
        .map(|w| w.closure_certificate_generated)
        .unwrap_or(false)
        && project.status != ProjectStatus::Closed
}

/// All closure actions currently available to the actor on this project.
pub fn available_actions(project: &Project, actor: &Actor) -> Vec<ClosureAction> {
    let mut actions = Vec::new();
    if can_review_final_report(project, actor) {
        actions.push(ClosureAction::ReviewFinalReport);
    }
    if can_initiate_signoff(project, actor) {
        actions.push(ClosureAction::InitiateSignoff);
    }
    if can_generate_certificate(project, actor) {
        actions.push(ClosureAction::GenerateCertificate);
    }
    if can_archive(project, actor) {
        actions.push(ClosureAction::Archive);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{ClosureWorkflow, FinalReport, ReportDocument};
    use chrono::{TimeZone, Utc};

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 1, 12, 0, 0).unwrap()
    }

    fn manager() -> Actor {
        Actor::new("Grants Manager", "gm@uni.edu")
    }

    fn researcher() -> Actor {
        Actor::new("Researcher", "pi@uni.edu")
    }

    fn report_with_status(status: FinalReportStatus) -> FinalReport {
        let document = |filename: &str| ReportDocument {
            filename: filename.to_string(),
            uploaded_date: "2025-10-01T10:00:00Z".to_string(),
        };
        FinalReport {
            narrative_report: Some(document("narrative.pdf")),
            financial_report: Some(document("financial.xlsx")),
            status,
            ..FinalReport::default()
        }
    }

    fn project_with_report(status: FinalReportStatus) -> Project {
        Project::new(
            "proj-001".to_string(),
            "app-042".to_string(),
            "Coastal erosion monitoring".to_string(),
            "2025-01-01".to_string(),
            "2025-12-31".to_string(),
            now(),
        )
        .with_final_report(report_with_status(status), now())
    }

    #[test]
    fn test_review_requires_manager_and_submitted() {
        let project = project_with_report(FinalReportStatus::Submitted);
        assert!(can_review_final_report(&project, &manager()));
        assert!(!can_review_final_report(&project, &researcher()));

        let draft = project_with_report(FinalReportStatus::Draft);
        assert!(!can_review_final_report(&draft, &manager()));
    }

    #[test]
    fn test_role_comparison_is_case_insensitive() {
        let project = project_with_report(FinalReportStatus::Submitted);
        for role in ["Grants Manager", "grants manager", "GRANTS MANAGER"] {
            let actor = Actor::new(role, "gm@uni.edu");
            assert!(can_review_final_report(&project, &actor), "role {:?}", role);
        }
    }

    #[test]
    fn test_initiate_signoff_requires_approved_report() {
        for status in [
            FinalReportStatus::Draft,
            FinalReportStatus::Submitted,
            FinalReportStatus::UnderReview,
            FinalReportStatus::RevisionRequired,
        ] {
            let project = project_with_report(status);
            assert!(
                !can_initiate_signoff(&project, &manager()),
                "status {:?}",
                status
            );
        }

        let approved = project_with_report(FinalReportStatus::Approved);
        assert!(can_initiate_signoff(&approved, &manager()));
        assert!(!can_initiate_signoff(&approved, &researcher()));
    }

    #[test]
    fn test_initiate_signoff_blocked_while_in_review() {
        let project = project_with_report(FinalReportStatus::Approved).with_closure_workflow(
            ClosureWorkflow::default().initiated("vc-tok-1".to_string()),
            now(),
        );
        assert!(!can_initiate_signoff(&project, &manager()));
    }

    #[test]
    fn test_missing_final_report_fails_report_predicates() {
        let project = Project::new(
            "proj-001".to_string(),
            "app-042".to_string(),
            "Coastal erosion monitoring".to_string(),
            "2025-01-01".to_string(),
            "2025-12-31".to_string(),
            now(),
        );
        assert!(!can_review_final_report(&project, &manager()));
        assert!(!can_initiate_signoff(&project, &manager()));
    }

    #[test]
    fn test_generate_certificate_once_signed_off() {
        let signed = project_with_report(FinalReportStatus::Approved).with_closure_workflow(
            ClosureWorkflow::default()
                .initiated("vc-tok-1".to_string())
                .with_vc_decision(
                    crate::schemas::VcDecision::Approved,
                    "Prof. Adeyemi".to_string(),
                    "2025-11-02T12:00:00Z".to_string(),
                    "".to_string(),
                ),
            now(),
        );
        assert!(can_generate_certificate(&signed, &researcher()));

        let with_cert = signed.clone().with_closure_workflow(
            signed
                .closure_workflow
                .clone()
                .unwrap()
                .with_certificate("2025-11-03T12:00:00Z".to_string()),
            now(),
        );
        assert!(!can_generate_certificate(&with_cert, &researcher()));
    }

    #[test]
    fn test_archive_requires_certificate_and_open_project() {
        let base = project_with_report(FinalReportStatus::Approved);
        assert!(!can_archive(&base, &manager()));

        let with_cert = base.clone().with_closure_workflow(
            ClosureWorkflow::default()
                .initiated("vc-tok-1".to_string())
                .with_vc_decision(
                    crate::schemas::VcDecision::Approved,
                    "Prof. Adeyemi".to_string(),
                    "2025-11-02T12:00:00Z".to_string(),
                    "".to_string(),
                )
                .with_certificate("2025-11-03T12:00:00Z".to_string()),
            now(),
        );
        assert!(can_archive(&with_cert, &manager()));

        let closed = with_cert.with_status(ProjectStatus::Closed, now());
        assert!(!can_archive(&closed, &manager()));
    }

    #[test]
    fn test_available_actions() {
        let project = project_with_report(FinalReportStatus::Submitted);
        assert_eq!(
            available_actions(&project, &manager()),
            vec![ClosureAction::ReviewFinalReport]
        );
        assert!(available_actions(&project, &researcher()).is_empty());
    }
}
