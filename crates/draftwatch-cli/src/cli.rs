//! CLI command definitions and argument parsing.

use clap::{ArgGroup, Parser, Subcommand};
use draftwatch_domain::{Category, IssueStatus};

/// Draftwatch CLI - Turn review emails into tracked drafting issues.
#[derive(Debug, Parser)]
#[command(name = "draftwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DRAFTWATCH_CONFIG")]
    pub config: Option<String>,

    /// Issue database path (overrides the config file)
    #[arg(long, global = true, env = "DRAFTWATCH_DB")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract issues from a pasted email and optionally store them
    Parse(ParseArgs),

    /// List stored issues
    List(ListArgs),

    /// Show one issue with its review history
    Show(ShowArgs),

    /// Approve or reject the fix for an issue
    Review(ReviewArgs),

    /// Move one or more issues to another status
    Move(MoveArgs),

    /// Change the editable fields of an issue
    Edit(EditArgs),

    /// Add a note to an issue
    Note(NoteArgs),

    /// Delete one or more issues
    Delete(DeleteArgs),
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "stdin"])))]
pub struct ParseArgs {
    /// File containing the email text
    #[arg(long)]
    pub file: Option<String>,

    /// Read the email text from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Job number to use instead of detecting one
    #[arg(short, long)]
    pub job: Option<String>,

    /// Store the extracted issues after previewing them
    #[arg(long)]
    pub confirm: bool,

    /// Drafting squad the issues belong to
    #[arg(long)]
    pub squad: Option<String>,

    /// Who is importing the issues
    #[arg(long)]
    pub uploaded_by: Option<String>,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Filter by category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Filter by status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,

    /// Filter by job number
    #[arg(short, long)]
    pub job: Option<String>,

    /// Filter by drafting squad
    #[arg(long)]
    pub squad: Option<String>,

    /// Search description, job number and display ID
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Display ID, e.g. ERE-001
    pub id: String,
}

/// Arguments for the review command.
#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("verdict").required(true).args(["approve", "reject"])))]
pub struct ReviewArgs {
    /// Display ID, e.g. ERE-001
    pub id: String,

    /// Accept the fix
    #[arg(long)]
    pub approve: bool,

    /// Send the issue back for rework
    #[arg(long)]
    pub reject: bool,

    /// Review comments
    #[arg(short, long, default_value = "")]
    pub notes: String,

    /// Reviewer name (defaults to the configured reviewer)
    #[arg(long)]
    pub reviewer: Option<String>,
}

/// Arguments for the move command.
#[derive(Debug, Parser)]
pub struct MoveArgs {
    /// Display IDs, e.g. ERE-001 SHP-004
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,

    /// Target status
    #[arg(long, value_enum)]
    pub to: StatusArg,
}

/// Arguments for the edit command.
#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("fields").required(true).multiple(true).args([
    "job", "description", "resolution_notes", "assignee", "squad"
])))]
pub struct EditArgs {
    /// Display ID, e.g. ERE-001
    pub id: String,

    /// New job number
    #[arg(short, long)]
    pub job: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New resolution notes
    #[arg(long)]
    pub resolution_notes: Option<String>,

    /// New assignee
    #[arg(long)]
    pub assignee: Option<String>,

    /// New drafting squad
    #[arg(long)]
    pub squad: Option<String>,
}

/// Arguments for the note command.
#[derive(Debug, Parser)]
pub struct NoteArgs {
    /// Display ID, e.g. ERE-001
    pub id: String,

    /// Note text
    pub content: String,

    /// Author (defaults to the configured note author)
    #[arg(long)]
    pub author: Option<String>,
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Display IDs, e.g. ERE-001 SHP-004
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,

    /// Skip the confirmation guard
    #[arg(short, long)]
    pub yes: bool,
}

/// Category argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    /// Erection drawings (ERE)
    Erection,
    /// Shipper (SHP)
    Shipper,
    /// Shop drawings (SHD)
    Shop,
}

/// Status argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatusArg {
    /// New
    New,
    /// In Progress
    InProgress,
    /// Under Review
    UnderReview,
    /// Needs Rework
    NeedsRework,
    /// Fixed
    Fixed,
    /// Cannot Change
    CannotChange,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<CategoryArg> for Category {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Erection => Category::ErectionDrawings,
            CategoryArg::Shipper => Category::Shipper,
            CategoryArg::Shop => Category::ShopDrawings,
        }
    }
}

impl From<StatusArg> for IssueStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::New => IssueStatus::New,
            StatusArg::InProgress => IssueStatus::InProgress,
            StatusArg::UnderReview => IssueStatus::UnderReview,
            StatusArg::NeedsRework => IssueStatus::NeedsRework,
            StatusArg::Fixed => IssueStatus::Fixed,
            StatusArg::CannotChange => IssueStatus::CannotChange,
        }
    }
}
