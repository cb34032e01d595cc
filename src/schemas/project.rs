//! Project schema - the aggregate root for a funded research project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{GrantflowError, Result};

use super::closure::{ClosureStatus, ClosureWorkflow};
use super::final_report::FinalReport;
use super::milestone::{Milestone, MilestoneStatus};
use super::partner::Partner;
use super::requisition::{Requisition, RequisitionStatus};

/// Status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Funded and running
    Active,
    /// All work delivered, closure not yet complete
    Completed,
    /// Paused by agreement
    OnHold,
    /// Terminated before delivery
    Cancelled,
    /// Formally closed and archived
    Closed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Active => write!(f, "active"),
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::OnHold => write!(f, "on_hold"),
            ProjectStatus::Cancelled => write!(f, "cancelled"),
            ProjectStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = GrantflowError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            "on_hold" => Ok(ProjectStatus::OnHold),
            "cancelled" => Ok(ProjectStatus::Cancelled),
            "closed" => Ok(ProjectStatus::Closed),
            _ => Err(GrantflowError::InvalidStatus(format!(
                "unknown project status: {}",
                s
            ))),
        }
    }
}

/// A funded research project and everything attached to it.
///
/// All update methods return a new value; nothing mutates in place. Methods
/// that change persisted state take the current instant explicitly so the
/// caller controls the clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: String,

    /// Application this project was funded from
    pub application_id: String,

    /// Human-readable title
    pub title: String,

    /// Current status
    pub status: ProjectStatus,

    /// ISO 8601 project start date
    pub start_date: String,

    /// ISO 8601 project end date
    pub end_date: String,

    /// Ordered milestones
    pub milestones: Vec<Milestone>,

    /// Fund requisitions raised against milestones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requisitions: Vec<Requisition>,

    /// Collaborating partners
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partners: Vec<Partner>,

    /// Final report pair, absent until the first upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_report: Option<FinalReport>,

    /// Closure workflow, absent until closure is initiated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closure_workflow: Option<ClosureWorkflow>,

    /// ISO 8601 creation timestamp
    pub created_at: String,

    /// ISO 8601 last update timestamp
    pub updated_at: String,
}

impl Project {
    /// Create a new active project with no milestones
    pub fn new(
        id: String,
        application_id: String,
        title: String,
        start_date: String,
        end_date: String,
        now: DateTime<Utc>,
    ) -> Self {
        let stamp = now.to_rfc3339();
        Project {
            id,
            application_id,
            title,
            status: ProjectStatus::Active,
            start_date,
            end_date,
            milestones: Vec::new(),
            requisitions: Vec::new(),
            partners: Vec::new(),
            final_report: None,
            closure_workflow: None,
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }

    /// Look up a milestone by id
    pub fn milestone(&self, milestone_id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == milestone_id)
    }

    /// Look up a requisition by id
    pub fn requisition(&self, requisition_id: &str) -> Option<&Requisition> {
        self.requisitions.iter().find(|r| r.id == requisition_id)
    }

    /// Closure status, treating an absent workflow as pending
    pub fn closure_status(&self) -> ClosureStatus {
        self.closure_workflow
            .as_ref()
            .map(|w| w.status)
            .unwrap_or_default()
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Project with the given status
    pub fn with_status(mut self, status: ProjectStatus, now: DateTime<Utc>) -> Self {
        self.status = status;
        self.touched(now)
    }

    /// Return a new Project with a milestone appended
    pub fn with_milestone(mut self, milestone: Milestone, now: DateTime<Utc>) -> Self {
        self.milestones.push(milestone);
        self.touched(now)
    }

    /// Return a new Project with one milestone's status changed
    pub fn with_milestone_status(
        self,
        milestone_id: &str,
        status: MilestoneStatus,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        self.map_milestone(milestone_id, now, |m| m.with_status(status))
    }

    /// Return a new Project with a progress report recorded on one milestone
    pub fn with_progress_report(
        self,
        milestone_id: &str,
        filename: String,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let uploaded = now.to_rfc3339();
        self.map_milestone(milestone_id, now, |m| {
            m.with_progress_report(filename, uploaded)
        })
    }

    /// Return a new Project with a requisition appended.
    ///
    /// The requisition's milestone reference is checked before it is
    /// accepted; aggregations over requisitions rely on it resolving.
    pub fn with_requisition(mut self, requisition: Requisition, now: DateTime<Utc>) -> Result<Self> {
        if self.milestone(&requisition.milestone_id).is_none() {
            return Err(GrantflowError::MissingReference(format!(
                "requisition {} references unknown milestone {}",
                requisition.id, requisition.milestone_id
            )));
        }
        self.requisitions.push(requisition);
        Ok(self.touched(now))
    }

    /// Return a new Project with one requisition resolved by review
    pub fn with_reviewed_requisition(
        mut self,
        requisition_id: &str,
        status: RequisitionStatus,
        review_notes: String,
        reviewed_by: String,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let index = self
            .requisitions
            .iter()
            .position(|r| r.id == requisition_id)
            .ok_or_else(|| {
                GrantflowError::MissingReference(format!(
                    "no requisition {} on project {}",
                    requisition_id, self.id
                ))
            })?;

        let reviewed = self.requisitions[index].clone().reviewed(
            status,
            review_notes,
            reviewed_by,
            now.to_rfc3339(),
        )?;
        self.requisitions[index] = reviewed;
        Ok(self.touched(now))
    }

    /// Return a new Project with a partner appended
    pub fn with_partner(mut self, partner: Partner, now: DateTime<Utc>) -> Self {
        self.partners.push(partner);
        self.touched(now)
    }

    /// Return a new Project with a partner's signed MOU recorded
    pub fn with_partner_mou(
        mut self,
        partner_id: &str,
        filename: String,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let index = self
            .partners
            .iter()
            .position(|p| p.id == partner_id)
            .ok_or_else(|| {
                GrantflowError::MissingReference(format!(
                    "no partner {} on project {}",
                    partner_id, self.id
                ))
            })?;

        self.partners[index] = self.partners[index]
            .clone()
            .with_mou(filename, now.to_rfc3339());
        Ok(self.touched(now))
    }

    /// Return a new Project with a partner removed by id
    pub fn without_partner(mut self, partner_id: &str, now: DateTime<Utc>) -> Result<Self> {
        let before = self.partners.len();
        self.partners.retain(|p| p.id != partner_id);
        if self.partners.len() == before {
            return Err(GrantflowError::MissingReference(format!(
                "no partner {} on project {}",
                partner_id, self.id
            )));
        }
        Ok(self.touched(now))
    }

    /// Return a new Project with the final report replaced
    pub fn with_final_report(mut self, report: FinalReport, now: DateTime<Utc>) -> Self {
        self.final_report = Some(report);
        self.touched(now)
    }

    /// Return a new Project with the closure workflow replaced
    pub fn with_closure_workflow(mut self, workflow: ClosureWorkflow, now: DateTime<Utc>) -> Self {
        self.closure_workflow = Some(workflow);
        self.touched(now)
    }

    // ===== PRIVATE HELPERS =====

    fn map_milestone<F>(mut self, milestone_id: &str, now: DateTime<Utc>, f: F) -> Result<Self>
    where
        F: FnOnce(Milestone) -> Milestone,
    {
        let index = self
            .milestones
            .iter()
            .position(|m| m.id == milestone_id)
            .ok_or_else(|| {
                GrantflowError::MissingReference(format!(
                    "no milestone {} on project {}",
                    milestone_id, self.id
                ))
            })?;

        self.milestones[index] = f(self.milestones[index].clone());
        Ok(self.touched(now))
    }

    fn touched(mut self, now: DateTime<Utc>) -> Self {
        self.updated_at = now.to_rfc3339();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn later() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    fn make_project() -> Project {
        Project::new(
            "proj-001".to_string(),
            "app-042".to_string(),
            "Coastal erosion monitoring".to_string(),
            "2025-01-01".to_string(),
            "2025-12-31".to_string(),
            now(),
        )
        .with_milestone(
            Milestone::new(
                "m-001".to_string(),
                "Baseline survey".to_string(),
                "Complete the baseline shoreline survey".to_string(),
                "2025-04-01".to_string(),
            ),
            now(),
        )
    }

    #[test]
    fn test_new_project_defaults() {
        let project = make_project();
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.closure_status(), ClosureStatus::Pending);
        assert!(project.final_report.is_none());
    }

    #[test]
    fn test_with_status_updates_timestamp() {
        let project = make_project();
        let updated = project.clone().with_status(ProjectStatus::OnHold, later());

        assert_eq!(updated.status, ProjectStatus::OnHold);
        assert_ne!(updated.updated_at, project.updated_at);
        assert_eq!(project.status, ProjectStatus::Active); // Original unchanged
    }

    #[test]
    fn test_with_milestone_status() {
        let project = make_project();
        let updated = project
            .clone()
            .with_milestone_status("m-001", MilestoneStatus::Completed, later())
            .unwrap();

        assert!(updated.milestone("m-001").unwrap().is_completed());
        assert!(!project.milestone("m-001").unwrap().is_completed());
    }

    #[test]
    fn test_with_milestone_status_unknown_id() {
        let err = make_project()
            .with_milestone_status("m-999", MilestoneStatus::Completed, later())
            .unwrap_err();
        assert_eq!(err.code(), "MISSING_REFERENCE");
    }

    #[test]
    fn test_with_requisition_checks_reference() {
        let project = make_project();

        let good = Requisition::new(
            "req-001".to_string(),
            "m-001".to_string(),
            1200.0,
            later().to_rfc3339(),
            "Survey equipment hire".to_string(),
        );
        let updated = project.clone().with_requisition(good, later()).unwrap();
        assert_eq!(updated.requisitions.len(), 1);

        let dangling = Requisition::new(
            "req-002".to_string(),
            "m-404".to_string(),
            500.0,
            later().to_rfc3339(),
            "Misc".to_string(),
        );
        let err = project.with_requisition(dangling, later()).unwrap_err();
        assert_eq!(err.code(), "MISSING_REFERENCE");
    }

    #[test]
    fn test_with_reviewed_requisition() {
        let project = make_project()
            .with_requisition(
                Requisition::new(
                    "req-001".to_string(),
                    "m-001".to_string(),
                    1200.0,
                    now().to_rfc3339(),
                    "Survey equipment hire".to_string(),
                ),
                now(),
            )
            .unwrap();

        let updated = project
            .with_reviewed_requisition(
                "req-001",
                RequisitionStatus::Approved,
                "Within budget".to_string(),
                "gm@uni.edu".to_string(),
                later(),
            )
            .unwrap();

        let req = updated.requisition("req-001").unwrap();
        assert_eq!(req.status, RequisitionStatus::Approved);
        assert_eq!(req.reviewed_by.as_deref(), Some("gm@uni.edu"));
    }

    #[test]
    fn test_without_partner() {
        let project = make_project().with_partner(
            Partner::new(
                "partner-001".to_string(),
                "Institute of Marine Research".to_string(),
                "Field site host".to_string(),
            ),
            now(),
        );

        let updated = project.clone().without_partner("partner-001", later()).unwrap();
        assert!(updated.partners.is_empty());

        let err = project.without_partner("partner-404", later()).unwrap_err();
        assert_eq!(err.code(), "MISSING_REFERENCE");
    }

    #[test]
    fn test_json_round_trip() {
        let project = make_project();
        let json = serde_json::to_string_pretty(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, project);
        // Empty collections stay off the wire
        assert!(!json.contains("\"requisitions\""));
        assert!(!json.contains("\"partners\""));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("on_hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        assert!("archived".parse::<ProjectStatus>().is_err());
    }
}
