//! Status presentation mapping
//!
//! A pure lookup from entity statuses to display categories, kept separate
//! from the domain rules so a renderer can be swapped without touching them.
//! Categories drive color choice; labels are the display text.

use crate::errors::{GrantflowError, Result};
use crate::schemas::{
    ClosureStatus, FinalReportStatus, MilestoneStatus, ProjectStatus, RequisitionStatus,
};

/// Display category for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Success,
    Warning,
    Info,
    Neutral,
    Danger,
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCategory::Success => write!(f, "success"),
            StatusCategory::Warning => write!(f, "warning"),
            StatusCategory::Info => write!(f, "info"),
            StatusCategory::Neutral => write!(f, "neutral"),
            StatusCategory::Danger => write!(f, "danger"),
        }
    }
}

/// Display metadata for one status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub category: StatusCategory,
    pub label: &'static str,
}

impl Badge {
    const fn new(category: StatusCategory, label: &'static str) -> Self {
        Badge { category, label }
    }
}

/// Which entity a raw status string belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    Milestone,
    Requisition,
    FinalReport,
    Closure,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Project => write!(f, "project"),
            EntityKind::Milestone => write!(f, "milestone"),
            EntityKind::Requisition => write!(f, "requisition"),
            EntityKind::FinalReport => write!(f, "final_report"),
            EntityKind::Closure => write!(f, "closure"),
        }
    }
}

/// Badge for a project status
pub fn project_badge(status: ProjectStatus) -> Badge {
    match status {
        ProjectStatus::Active => Badge::new(StatusCategory::Success, "Active"),
        ProjectStatus::Completed => Badge::new(StatusCategory::Info, "Completed"),
        ProjectStatus::OnHold => Badge::new(StatusCategory::Warning, "On Hold"),
        ProjectStatus::Cancelled => Badge::new(StatusCategory::Danger, "Cancelled"),
        ProjectStatus::Closed => Badge::new(StatusCategory::Neutral, "Closed"),
    }
}

/// Badge for a milestone status
pub fn milestone_badge(status: MilestoneStatus) -> Badge {
    match status {
        MilestoneStatus::Completed => Badge::new(StatusCategory::Success, "Completed"),
        MilestoneStatus::InProgress => Badge::new(StatusCategory::Info, "In Progress"),
        MilestoneStatus::OnHold => Badge::new(StatusCategory::Warning, "On Hold"),
        MilestoneStatus::Pending => Badge::new(StatusCategory::Neutral, "Pending"),
    }
}

/// Badge for a requisition status
pub fn requisition_badge(status: RequisitionStatus) -> Badge {
    match status {
        RequisitionStatus::Approved => Badge::new(StatusCategory::Success, "Approved"),
        RequisitionStatus::Rejected => Badge::new(StatusCategory::Danger, "Rejected"),
        RequisitionStatus::Submitted => Badge::new(StatusCategory::Warning, "Submitted"),
    }
}

/// Badge for a final report status
pub fn final_report_badge(status: FinalReportStatus) -> Badge {
    match status {
        FinalReportStatus::Approved => Badge::new(StatusCategory::Success, "Approved"),
        FinalReportStatus::UnderReview => Badge::new(StatusCategory::Info, "Under Review"),
        FinalReportStatus::Submitted => Badge::new(StatusCategory::Warning, "Submitted"),
        FinalReportStatus::RevisionRequired => {
            Badge::new(StatusCategory::Danger, "Revision Required")
        }
        FinalReportStatus::Draft => Badge::new(StatusCategory::Neutral, "Draft"),
    }
}

/// Badge for a closure workflow status
pub fn closure_badge(status: ClosureStatus) -> Badge {
    match status {
        ClosureStatus::Closed => Badge::new(StatusCategory::Success, "Closed"),
        ClosureStatus::SignedOff => Badge::new(StatusCategory::Info, "Signed Off"),
        ClosureStatus::VcReview => Badge::new(StatusCategory::Warning, "Awaiting VC Approval"),
        ClosureStatus::Rejected => Badge::new(StatusCategory::Danger, "Sign-off Rejected"),
        ClosureStatus::Pending => Badge::new(StatusCategory::Neutral, "Pending Closure"),
    }
}

/// Badge for a raw status string of a given entity kind.
///
/// Covers every enumerated status value per entity; a pair outside the
/// mapping fails with UnknownStatus.
pub fn badge_for(kind: EntityKind, status: &str) -> Result<Badge> {
    let unknown = || {
        GrantflowError::UnknownStatus(format!(
            "no badge mapping for {} status {:?}",
            kind, status
        ))
    };
    match kind {
        EntityKind::Project => status
            .parse::<ProjectStatus>()
            .map(project_badge)
            .map_err(|_| unknown()),
        EntityKind::Milestone => status
            .parse::<MilestoneStatus>()
            .map(milestone_badge)
            .map_err(|_| unknown()),
        EntityKind::Requisition => status
            .parse::<RequisitionStatus>()
            .map(requisition_badge)
            .map_err(|_| unknown()),
        EntityKind::FinalReport => status
            .parse::<FinalReportStatus>()
            .map(final_report_badge)
            .map_err(|_| unknown()),
        EntityKind::Closure => status
            .parse::<ClosureStatus>()
            .map(closure_badge)
            .map_err(|_| unknown()),
    }
}
