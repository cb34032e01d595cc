//! Milestone schema - dated deliverables tracked to completion

use serde::{Deserialize, Serialize};

use crate::errors::GrantflowError;

/// Status of a project milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Not yet started
    Pending,
    /// Work underway
    InProgress,
    /// Deliverable accepted
    Completed,
    /// Paused by agreement
    OnHold,
}

impl std::fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MilestoneStatus::Pending => write!(f, "pending"),
            MilestoneStatus::InProgress => write!(f, "in_progress"),
            MilestoneStatus::Completed => write!(f, "completed"),
            MilestoneStatus::OnHold => write!(f, "on_hold"),
        }
    }
}

impl std::str::FromStr for MilestoneStatus {
    type Err = GrantflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MilestoneStatus::Pending),
            "in_progress" => Ok(MilestoneStatus::InProgress),
            "completed" => Ok(MilestoneStatus::Completed),
            "on_hold" => Ok(MilestoneStatus::OnHold),
            _ => Err(GrantflowError::InvalidStatus(format!(
                "unknown milestone status: {}",
                s
            ))),
        }
    }
}

/// A dated deliverable within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier within the project
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// What the deliverable is
    pub description: String,

    /// ISO 8601 due date (date or full timestamp)
    pub due_date: String,

    /// Current status
    pub status: MilestoneStatus,

    /// Whether a progress report has been uploaded
    #[serde(default)]
    pub progress_report_uploaded: bool,

    /// When the progress report was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_report_date: Option<String>,

    /// Stored filename of the progress report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_report_filename: Option<String>,

    /// Derived overdue flag, populated by the derivation engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_overdue: Option<bool>,
}

impl Milestone {
    /// Create a new pending milestone
    pub fn new(id: String, title: String, description: String, due_date: String) -> Self {
        Milestone {
            id,
            title,
            description,
            due_date,
            status: MilestoneStatus::Pending,
            progress_report_uploaded: false,
            progress_report_date: None,
            progress_report_filename: None,
            is_overdue: None,
        }
    }

    /// Return a new Milestone with the given status
    pub fn with_status(mut self, status: MilestoneStatus) -> Self {
        self.status = status;
        self
    }

    /// Return a new Milestone with a progress report recorded
    pub fn with_progress_report(mut self, filename: String, uploaded_date: String) -> Self {
        self.progress_report_uploaded = true;
        self.progress_report_filename = Some(filename);
        self.progress_report_date = Some(uploaded_date);
        self
    }

    /// Return a new Milestone with the derived overdue flag set
    pub fn with_overdue(mut self, overdue: bool) -> Self {
        self.is_overdue = Some(overdue);
        self
    }

    /// Check if the deliverable has been accepted
    pub fn is_completed(&self) -> bool {
        self.status == MilestoneStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&MilestoneStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&MilestoneStatus::InProgress).unwrap(), "\"in_progress\"");
        assert_eq!(serde_json::to_string(&MilestoneStatus::Completed).unwrap(), "\"completed\"");
        assert_eq!(serde_json::to_string(&MilestoneStatus::OnHold).unwrap(), "\"on_hold\"");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("in_progress".parse::<MilestoneStatus>().unwrap(), MilestoneStatus::InProgress);
        assert!("finished".parse::<MilestoneStatus>().is_err());
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        let err = "finished".parse::<MilestoneStatus>().unwrap_err();
        assert_eq!(err.code(), "INVALID_STATUS");
    }

    #[test]
    fn test_json_round_trip() {
        let milestone = Milestone::new(
            "m-001".to_string(),
            "Ethics approval".to_string(),
            "Obtain ethics committee approval".to_string(),
            "2025-03-01".to_string(),
        );

        let json = serde_json::to_string_pretty(&milestone).unwrap();
        let parsed: Milestone = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, milestone);
        assert_eq!(parsed.status, MilestoneStatus::Pending);
        assert!(!parsed.progress_report_uploaded);
    }

    #[test]
    fn test_skips_absent_optionals() {
        let milestone = Milestone::new(
            "m-001".to_string(),
            "Ethics approval".to_string(),
            "Obtain ethics committee approval".to_string(),
            "2025-03-01".to_string(),
        );

        let json = serde_json::to_string(&milestone).unwrap();
        assert!(!json.contains("progress_report_filename"));
        assert!(!json.contains("is_overdue"));
    }

    #[test]
    fn test_with_progress_report() {
        let milestone = Milestone::new(
            "m-001".to_string(),
            "Fieldwork".to_string(),
            "Complete first round of fieldwork".to_string(),
            "2025-06-30".to_string(),
        );

        let updated = milestone
            .clone()
            .with_progress_report("report.pdf".to_string(), "2025-06-01T10:00:00Z".to_string());

        assert!(updated.progress_report_uploaded);
        assert_eq!(updated.progress_report_filename.as_deref(), Some("report.pdf"));
        assert!(!milestone.progress_report_uploaded); // Original unchanged
    }

    #[test]
    fn test_with_status() {
        let milestone = Milestone::new(
            "m-001".to_string(),
            "Fieldwork".to_string(),
            "Complete first round of fieldwork".to_string(),
            "2025-06-30".to_string(),
        );

        let updated = milestone.clone().with_status(MilestoneStatus::Completed);
        assert!(updated.is_completed());
        assert!(!milestone.is_completed()); // Original unchanged
    }
}
