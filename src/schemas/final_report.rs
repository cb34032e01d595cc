//! Final report schema - the narrative/financial deliverable pair required to close a project

use serde::{Deserialize, Serialize};

use crate::errors::{GrantflowError, Result};

/// Status of the final report pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FinalReportStatus {
    /// Reports being assembled, not yet submitted
    #[default]
    Draft,
    /// Submitted for grants-manager review
    Submitted,
    /// Review in progress
    UnderReview,
    /// Accepted by the grants manager
    Approved,
    /// Sent back for rework
    RevisionRequired,
}

impl std::fmt::Display for FinalReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinalReportStatus::Draft => write!(f, "draft"),
            FinalReportStatus::Submitted => write!(f, "submitted"),
            FinalReportStatus::UnderReview => write!(f, "under_review"),
            FinalReportStatus::Approved => write!(f, "approved"),
            FinalReportStatus::RevisionRequired => write!(f, "revision_required"),
        }
    }
}

impl std::str::FromStr for FinalReportStatus {
    type Err = GrantflowError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(FinalReportStatus::Draft),
            "submitted" => Ok(FinalReportStatus::Submitted),
            "under_review" => Ok(FinalReportStatus::UnderReview),
            "approved" => Ok(FinalReportStatus::Approved),
            "revision_required" => Ok(FinalReportStatus::RevisionRequired),
            _ => Err(GrantflowError::InvalidStatus(format!(
                "unknown final report status: {}",
                s
            ))),
        }
    }
}

/// One uploaded report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Stored filename
    pub filename: String,

    /// ISO 8601 upload timestamp
    pub uploaded_date: String,
}

/// Which half of the final report pair a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Narrative,
    Financial,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Narrative => write!(f, "narrative"),
            ReportKind::Financial => write!(f, "financial"),
        }
    }
}

impl std::str::FromStr for ReportKind {
    type Err = GrantflowError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "narrative" => Ok(ReportKind::Narrative),
            "financial" => Ok(ReportKind::Financial),
            _ => Err(GrantflowError::InvalidStatus(format!(
                "report kind must be narrative or financial, got: {}",
                s
            ))),
        }
    }
}

/// The final narrative/financial report pair for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FinalReport {
    /// The narrative half of the pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative_report: Option<ReportDocument>,

    /// The financial half of the pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_report: Option<ReportDocument>,

    /// Current status
    #[serde(default)]
    pub status: FinalReportStatus,

    /// When the pair was submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<String>,

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

impl FinalReport {
    /// Check if both halves of the pair have been uploaded
    pub fn is_complete(&self) -> bool {
        self.narrative_report.is_some() && self.financial_report.is_some()
    }

    /// Check if the pair is locked against further uploads
    pub fn is_locked(&self) -> bool {
        matches!(
            self.status,
            FinalReportStatus::Submitted | FinalReportStatus::UnderReview | FinalReportStatus::Approved
        )
    }

    /// Return a new FinalReport with one half of the pair uploaded.
    ///
    /// Uploads are only accepted while the pair is in draft or has been
    /// sent back for revision.
    pub fn with_document(
        self,
        kind: ReportKind,
        filename: String,
        uploaded_date: String,
    ) -> Result<Self> {
        if self.is_locked() {
            return Err(GrantflowError::InvalidTransition(format!(
                "cannot upload a {} report while the final report is {}",
                kind, self.status
            )));
        }

        let document = ReportDocument {
            filename,
            uploaded_date,
        };
        Ok(match kind {
            ReportKind::Narrative => FinalReport {
                narrative_report: Some(document),
                ..self
            },
            ReportKind::Financial => FinalReport {
                financial_report: Some(document),
                ..self
            },
        })
    }

    /// Return a new FinalReport submitted for review.
    ///
    /// Submission requires both the narrative and financial reports to be
    /// on file.
    pub fn submitted(self, submitted_date: String) -> Result<Self> {
        if self.is_locked() {
            return Err(GrantflowError::InvalidTransition(format!(
                "final report is already {}",
                self.status
            )));
        }
        if !self.is_complete() {
            return Err(GrantflowError::InvalidTransition(
                "both narrative and financial reports must be uploaded before submission"
                    .to_string(),
            ));
        }

        Ok(FinalReport {
            status: FinalReportStatus::Submitted,
            submitted_date: Some(submitted_date),
            ..self
        })
    }

    /// Return a new FinalReport resolved by a grants-manager review.
    ///
    /// Only a submitted (or in-review) pair can be reviewed, and the review
    /// must resolve to approved or revision_required.
    pub fn reviewed(
        self,
        status: FinalReportStatus,
        review_notes: String,
        reviewed_by: String,
        reviewed_date: String,
    ) -> Result<Self> {
        if !matches!(
            self.status,
            FinalReportStatus::Submitted | FinalReportStatus::UnderReview
        ) {
            return Err(GrantflowError::InvalidTransition(format!(
                "cannot review a final report that is {}",
                self.status
            )));
        }
        if !matches!(
            status,
            FinalReportStatus::Approved | FinalReportStatus::RevisionRequired
        ) {
            return Err(GrantflowError::InvalidTransition(
                "a review must resolve to approved or revision_required".to_string(),
            ));
        }

        Ok(FinalReport {
            status,
            reviewed_by: Some(reviewed_by),
            reviewed_date: Some(reviewed_date),
            review_notes: Some(review_notes),
            ..self
        })
    }
}
