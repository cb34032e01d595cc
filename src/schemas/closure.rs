//! Closure workflow schema - the approval sequence that formally ends a project

use serde::{Deserialize, Serialize};

use crate::errors::GrantflowError;

/// Status of the project closure workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClosureStatus {
    /// Closure not yet initiated
    #[default]
    Pending,
    /// Sent to the Vice-Chancellor for sign-off
    VcReview,
    /// Vice-Chancellor approved the closure
    SignedOff,
    /// Vice-Chancellor declined the closure
    Rejected,
    /// Documents archived, project formally ended
    Closed,
}

impl std::fmt::Display for ClosureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosureStatus::Pending => write!(f, "pending"),
            ClosureStatus::VcReview => write!(f, "vc_review"),
            ClosureStatus::SignedOff => write!(f, "signed_off"),
            ClosureStatus::Rejected => write!(f, "rejected"),
            ClosureStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for ClosureStatus {
    type Err = GrantflowError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ClosureStatus::Pending),
            "vc_review" => Ok(ClosureStatus::VcReview),
            "signed_off" => Ok(ClosureStatus::SignedOff),
            "rejected" => Ok(ClosureStatus::Rejected),
            "closed" => Ok(ClosureStatus::Closed),
            _ => Err(GrantflowError::InvalidStatus(format!(
                "unknown closure status: {}",
                s
            ))),
        }
    }
}

/// Outcome of the Vice-Chancellor's sign-off decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcDecision {
    Approved,
    Rejected,
}

impl std::str::FromStr for VcDecision {
    type Err = GrantflowError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "approved" => Ok(VcDecision::Approved),
            "rejected" => Ok(VcDecision::Rejected),
            _ => Err(GrantflowError::InvalidStatus(format!(
                "VC decision must be approved or rejected, got: {}",
                s
            ))),
        }
    }
}

/// State of the closure approval sequence for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClosureWorkflow {
    /// Current position in the sequence
    #[serde(default)]
    pub status: ClosureStatus,

    /// Token issued to the Vice-Chancellor for the sign-off decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vc_signoff_token: Option<String>,

    /// Who signed the decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vc_signed_by: Option<String>,

    /// When the decision was signed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vc_signed_date: Option<String>,

    /// Notes attached to the decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vc_notes: Option<String>,

    /// Whether the closure certificate has been generated
    #[serde(default)]
    pub closure_certificate_generated: bool,

    /// When the certificate was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closure_certificate_date: Option<String>,
}

impl ClosureWorkflow {
    /// Return a new workflow sent to the Vice-Chancellor with a sign-off token
    pub fn initiated(mut self, token: String) -> Self {
        self.status = ClosureStatus::VcReview;
        self.vc_signoff_token = Some(token);
        self
    }

    /// Return a new workflow carrying the Vice-Chancellor's decision
    pub fn with_vc_decision(
        mut self,
        decision: VcDecision,
        signed_by: String,
        signed_date: String,
        notes: String,
    ) -> Self {
        self.status = match decision {
            VcDecision::Approved => ClosureStatus::SignedOff,
            VcDecision::Rejected => ClosureStatus::Rejected,
        };
        self.vc_signed_by = Some(signed_by);
        self.vc_signed_date = Some(signed_date);
        self.vc_notes = Some(notes);
        self
    }

    /// Return a new workflow with the closure certificate recorded
    pub fn with_certificate(mut self, generated_date: String) -> Self {
        self.closure_certificate_generated = true;
        self.closure_certificate_date = Some(generated_date);
        self
    }

    /// Return a new workflow marked closed after archiving
    pub fn closed(mut self) -> Self {
        self.status = ClosureStatus::Closed;
        self
    }
}
