//! Schema types for grantflow
//!
//! All types are designed to be compatible with the backend JSON schemas.

mod closure;
mod config;
mod final_report;
mod milestone;
mod partner;
mod project;
mod requisition;

pub use closure::{ClosureStatus, ClosureWorkflow, VcDecision};
pub use config::Config;
pub use final_report::{FinalReport, FinalReportStatus, ReportDocument, ReportKind};
pub use milestone::{Milestone, MilestoneStatus};
pub use partner::Partner;
pub use project::{Project, ProjectStatus};
pub use requisition::{Requisition, RequisitionStatus};
