use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

use crate::application::dto::ListFilters;
use crate::compliance::domain::{
    FindingStatus, ImplementationStatus, IncidentStatus, RiskLevel, Severity,
};

/// Console client for a compliance-management API
#[derive(Parser, Debug)]
#[command(name = "grc-console")]
#[command(version)]
#[command(about = "Browse and manage compliance frameworks, policies, findings, incidents and training", long_about = None)]
pub struct Cli {
    /// API base URL (overrides GRC_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the session and clear stored credentials
    Logout,
    /// Show the currently authenticated user
    Whoami,
    /// Fetch an overview of all collections
    Dashboard,
    /// Compliance frameworks and their controls
    Frameworks {
        #[command(subcommand)]
        command: FrameworkCommand,
    },
    /// Policy documents and their approval lifecycle
    Policies {
        #[command(subcommand)]
        command: PolicyCommand,
    },
    /// Compliance findings and remediation
    Findings {
        #[command(subcommand)]
        command: FindingCommand,
    },
    /// Security/compliance incidents
    Incidents {
        #[command(subcommand)]
        command: IncidentCommand,
    },
    /// Training courses and assignments
    Training {
        #[command(subcommand)]
        command: TrainingCommand,
    },
}

/// Pagination and filter flags shared by all list commands.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long = "sort-by")]
    pub sort_by: Option<String>,
}

impl ListArgs {
    pub fn filters(&self) -> ListFilters {
        ListFilters {
            search: self.search.clone(),
            status: self.status.clone(),
            category: self.category.clone(),
            sort_by: self.sort_by.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum FrameworkCommand {
    /// List frameworks
    List(ListArgs),
    /// Show one framework with its control groups
    Show { id: Uuid },
    /// Set a control's implementation status
    SetControl {
        framework: Uuid,
        control: Uuid,
        /// implemented, partial, not-implemented or not-applicable
        status: ImplementationStatus,
    },
}

#[derive(Subcommand, Debug)]
pub enum PolicyCommand {
    /// List policies
    List(ListArgs),
    /// Show one policy
    Show { id: Uuid },
    /// Create a draft policy
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "1.0")]
        version: String,
        #[arg(long)]
        summary: Option<String>,
    },
    /// Update policy fields
    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        version: Option<String>,
        #[arg(long)]
        summary: Option<String>,
    },
    /// Delete a policy
    Delete { id: Uuid },
    /// Send a draft to review
    SubmitReview { id: Uuid },
    /// Approve a policy in review
    Approve { id: Uuid },
    /// Send a policy in review back to draft
    Reject { id: Uuid },
    /// Publish an approved policy
    Publish { id: Uuid },
    /// Deprecate a policy
    Deprecate { id: Uuid },
    /// Upload the policy document
    UploadDocument { id: Uuid, file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum FindingCommand {
    /// List findings
    List(ListArgs),
    /// Show one finding with tasks, evidence, comments and history
    Show { id: Uuid },
    /// Record a new finding
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// low, medium, high or critical
        #[arg(long)]
        severity: Severity,
        /// low, medium or high
        #[arg(long)]
        likelihood: RiskLevel,
        /// low, medium or high
        #[arg(long)]
        impact: RiskLevel,
        #[arg(long)]
        framework: Option<Uuid>,
    },
    /// Update finding fields
    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        severity: Option<Severity>,
        /// open, in-remediation, resolved, risk-accepted or closed
        #[arg(long)]
        status: Option<FindingStatus>,
        #[arg(long)]
        likelihood: Option<RiskLevel>,
        #[arg(long)]
        impact: Option<RiskLevel>,
    },
    /// Delete a finding
    Delete { id: Uuid },
    /// Add a comment
    Comment {
        id: Uuid,
        #[arg(long)]
        body: String,
    },
    /// Upload an evidence attachment
    UploadEvidence { id: Uuid, file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum IncidentCommand {
    /// List incidents
    List(ListArgs),
    /// Show one incident with its timeline
    Show { id: Uuid },
    /// Report a new incident
    Report {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// low, medium, high or critical
        #[arg(long)]
        severity: Severity,
        /// SLA deadline as an RFC 3339 timestamp
        #[arg(long)]
        sla: Option<chrono::DateTime<chrono::Utc>>,
    },
    /// Move an incident to an explicit status
    Transition {
        id: Uuid,
        /// open, investigating, mitigated, resolved or closed
        status: IncidentStatus,
    },
    /// Add a timeline note
    AddUpdate {
        id: Uuid,
        #[arg(long)]
        note: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TrainingCommand {
    /// List courses
    List(ListArgs),
    /// Show one course with its assignments
    Show { id: Uuid },
    /// Assign a course to a user
    Assign {
        course: Uuid,
        #[arg(long)]
        user: Uuid,
    },
    /// Mark an assignment completed
    Complete { course: Uuid, assignment: Uuid },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
