//! Requisition schema - requests to disburse funds against a milestone

use serde::{Deserialize, Serialize};

use crate::errors::{GrantflowError, Result};

/// Status of a fund requisition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequisitionStatus {
    /// Awaiting grants-manager review
    Submitted,
    /// Disbursement approved
    Approved,
    /// Disbursement declined
    Rejected,
}

impl std::fmt::Display for RequisitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequisitionStatus::Submitted => write!(f, "submitted"),
            RequisitionStatus::Approved => write!(f, "approved"),
            RequisitionStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for RequisitionStatus {
    type Err = GrantflowError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(RequisitionStatus::Submitted),
            "approved" => Ok(RequisitionStatus::Approved),
            "rejected" => Ok(RequisitionStatus::Rejected),
            _ => Err(GrantflowError::InvalidStatus(format!(
                "unknown requisition status: {}",
                s
            ))),
        }
    }
}

/// A request to disburse funds tied to a milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requisition {
    /// Unique identifier within the project
    pub id: String,

    /// Milestone this requisition draws against
    pub milestone_id: String,

    /// Amount requested (positive)
    pub amount: f64,

    /// ISO 8601 timestamp of the request
    pub requested_date: String,

    /// Current status
    pub status: RequisitionStatus,

    /// Free-text justification from the researcher
    pub notes: String,

    /// Reviewer identity, present once reviewed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,

    /// Review timestamp, present once reviewed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_date: Option<String>,

    /// Reviewer comments, present once reviewed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
}

impl Requisition {
    /// Create a new submitted requisition
    pub fn new(
        id: String,
        milestone_id: String,
        amount: f64,
        requested_date: String,
        notes: String,
    ) -> Self {
        Requisition {
            id,
            milestone_id,
            amount,
            requested_date,
            status: RequisitionStatus::Submitted,
            notes,
            reviewed_by: None,
            reviewed_date: None,
            review_notes: None,
        }
    }

    /// Check if the requisition has been reviewed
    pub fn is_reviewed(&self) -> bool {
        self.status != RequisitionStatus::Submitted
    }

    /// Return a new Requisition resolved by a grants-manager review.
    ///
    /// A requisition is reviewed exactly once; approved and rejected are
    /// terminal. The review must resolve to one of those two statuses.
    pub fn reviewed(
        self,
        status: RequisitionStatus,
        review_notes: String,
        reviewed_by: String,
        reviewed_date: String,
    ) -> Result<Self> {
        if self.is_reviewed() {
            return Err(GrantflowError::InvalidTransition(format!(
                "requisition {} has already been {}",
                self.id, self.status
            )));
        }
        if status == RequisitionStatus::Submitted {
            return Err(GrantflowError::InvalidTransition(
                "a review must resolve to approved or rejected".to_string(),
            ));
        }

        Ok(Requisition {
            status,
            reviewed_by: Some(reviewed_by),
            reviewed_date: Some(reviewed_date),
            review_notes: Some(review_notes),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_requisition() -> Requisition {
        Requisition::new(
            "req-001".to_string(),
            "m-001".to_string(),
            2500.0,
            "2025-02-10T09:00:00Z".to_string(),
            "Lab consumables".to_string(),
        )
    }

    #[test]
    fn test_new_is_submitted() {
        let req = make_requisition();
        assert_eq!(req.status, RequisitionStatus::Submitted);
        assert!(!req.is_reviewed());
        assert!(req.reviewed_by.is_none());
    }

    #[test]
    fn test_review_approves() {
        let req = make_requisition()
            .reviewed(
                RequisitionStatus::Approved,
                "Looks fine".to_string(),
                "gm@uni.edu".to_string(),
                "2025-02-12T09:00:00Z".to_string(),
            )
            .unwrap();

        assert_eq!(req.status, RequisitionStatus::Approved);
        assert!(req.is_reviewed());
        assert_eq!(req.reviewed_by.as_deref(), Some("gm@uni.edu"));
        assert_eq!(req.review_notes.as_deref(), Some("Looks fine"));
    }

    #[test]
    fn test_review_is_terminal() {
        let req = make_requisition()
            .reviewed(
                RequisitionStatus::Rejected,
                "Outside budget".to_string(),
                "gm@uni.edu".to_string(),
                "2025-02-12T09:00:00Z".to_string(),
            )
            .unwrap();

        let err = req
            .reviewed(
                RequisitionStatus::Approved,
                "Second thoughts".to_string(),
                "gm@uni.edu".to_string(),
                "2025-02-13T09:00:00Z".to_string(),
            )
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_review_cannot_resubmit() {
        let err = make_requisition()
            .reviewed(
                RequisitionStatus::Submitted,
                "".to_string(),
                "gm@uni.edu".to_string(),
                "2025-02-12T09:00:00Z".to_string(),
            )
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_json_round_trip() {
        let req = make_requisition();
        let json = serde_json::to_string_pretty(&req).unwrap();
        let parsed: Requisition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
        assert!(!json.contains("reviewed_by"));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("approved".parse::<RequisitionStatus>().unwrap(), RequisitionStatus::Approved);
        assert!("pending".parse::<RequisitionStatus>().is_err());
    }
}
