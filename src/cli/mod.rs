//! CLI module for grantflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Grantflow - track grant projects, milestones, fund requisitions and the closure workflow
#[derive(Parser, Debug)]
#[command(name = "grantflow")]
#[command(version)]
#[command(about = "Track grant projects, milestones, fund requisitions and the closure workflow")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Act with this role for permission checks (defaults to the configured role)
    #[arg(long, global = true)]
    pub role: Option<String>,

    /// Act with this email for permission checks (defaults to the configured email)
    #[arg(long, global = true)]
    pub email: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a grantflow workspace in the current directory
    Init {
        /// Force initialization even if .grantflow already exists
        #[arg(long)]
        force: bool,
    },

    /// List projects with progress and overdue summaries
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter by project status (active, completed, on_hold, cancelled, closed)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show details of a specific project
    Show {
        /// Project ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Compute overdue flags as of this instant instead of now
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Show a portfolio rollup across all projects
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create projects and change their status
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Manage project milestones
    #[command(subcommand)]
    Milestone(MilestoneCommands),

    /// Manage fund requisitions
    #[command(subcommand)]
    Requisition(RequisitionCommands),

    /// Manage project partners
    #[command(subcommand)]
    Partner(PartnerCommands),

    /// Manage the final report pair
    #[command(subcommand)]
    Report(ReportCommands),

    /// Drive the project closure workflow
    #[command(subcommand)]
    Closure(ClosureCommands),

    /// Validate all project files in the workspace
    Doctor,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Create a new project from an approved application
    Create {
        /// Project ID
        id: String,

        /// Application the project was funded from
        #[arg(long)]
        application: String,

        /// Project title
        #[arg(long)]
        title: String,

        /// ISO 8601 start date
        #[arg(long)]
        start: String,

        /// ISO 8601 end date
        #[arg(long)]
        end: String,
    },

    /// Change a project's status
    SetStatus {
        /// Project ID
        id: String,

        /// New status (active, completed, on_hold, cancelled, closed)
        status: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MilestoneCommands {
    /// Add a milestone to a project
    Add {
        /// Project ID
        project: String,

        /// Milestone title
        #[arg(long)]
        title: String,

        /// ISO 8601 due date
        #[arg(long)]
        due: String,

        /// What the deliverable is
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Change a milestone's status
    SetStatus {
        /// Project ID
        project: String,

        /// Milestone ID
        milestone: String,

        /// New status (pending, in_progress, completed, on_hold)
        status: String,
    },

    /// Record an uploaded progress report for a milestone
    Report {
        /// Project ID
        project: String,

        /// Milestone ID
        milestone: String,

        /// Stored filename of the report
        filename: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RequisitionCommands {
    /// Save a requisition draft without submitting it
    Draft {
        /// Project ID
        project: String,

        /// Milestone the requisition draws against
        #[arg(long)]
        milestone: String,

        /// Amount requested
        #[arg(long)]
        amount: f64,

        /// Justification
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Submit a requisition (from flags, or from the saved draft)
    Submit {
        /// Project ID
        project: String,

        /// Milestone the requisition draws against (defaults to the saved draft)
        #[arg(long)]
        milestone: Option<String>,

        /// Amount requested (defaults to the saved draft)
        #[arg(long)]
        amount: Option<f64>,

        /// Justification (defaults to the saved draft)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Review a submitted requisition as a grants manager
    Review {
        /// Project ID
        project: String,

        /// Requisition ID
        requisition: String,

        /// Decision (approved or rejected)
        decision: String,

        /// Review comments
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PartnerCommands {
    /// Add a partner to a project
    Add {
        /// Project ID
        project: String,

        /// Partner name
        name: String,

        /// Partner role in the project
        partner_role: String,
    },

    /// Remove a partner from a project
    Remove {
        /// Project ID
        project: String,

        /// Partner ID
        partner: String,
    },

    /// Record an uploaded MOU for a partner
    Mou {
        /// Project ID
        project: String,

        /// Partner ID
        partner: String,

        /// Stored filename of the signed MOU
        filename: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Record an uploaded final report document
    Upload {
        /// Project ID
        project: String,

        /// Which half of the pair (narrative or financial)
        kind: String,

        /// Stored filename of the report
        filename: String,
    },

    /// Submit the final report pair for review
    Submit {
        /// Project ID
        project: String,
    },

    /// Review the submitted final report pair as a grants manager
    Review {
        /// Project ID
        project: String,

        /// Decision (approved or revision_required)
        decision: String,

        /// Review comments
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClosureCommands {
    /// Send an approved project to the Vice-Chancellor for sign-off
    Initiate {
        /// Project ID
        project: String,
    },

    /// Record the Vice-Chancellor's sign-off decision
    Decide {
        /// Project ID
        project: String,

        /// Decision (approved or rejected)
        decision: String,

        /// Name of the signing Vice-Chancellor
        #[arg(long)]
        signed_by: String,

        /// Notes attached to the decision
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Generate the closure certificate for a signed-off project
    Certificate {
        /// Project ID
        project: String,
    },

    /// Archive the project's documents and formally close it
    Archive {
        /// Project ID
        project: String,
    },
}
