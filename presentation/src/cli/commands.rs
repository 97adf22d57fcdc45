//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use venue_domain::{DomainError, OutputFormat, Submission, Venue};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human readable summary
    Text,
    /// JSON output
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Committee whose recruitment pools are created
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecruitmentRole {
    Reviewers,
    ActionEditors,
    SeniorActionEditors,
}

impl RecruitmentRole {
    /// Committee name of this role in the given venue
    pub fn committee_name(&self, venue: &Venue) -> String {
        match self {
            RecruitmentRole::Reviewers => venue.roles.reviewers.clone(),
            RecruitmentRole::ActionEditors => venue.roles.action_editors.clone(),
            RecruitmentRole::SeniorActionEditors => venue.roles.senior_action_editors.clone(),
        }
    }

    /// Whether the venue uses this committee at all
    pub fn is_enabled(&self, venue: &Venue) -> bool {
        match self {
            RecruitmentRole::Reviewers => true,
            RecruitmentRole::ActionEditors => venue.use_action_editors,
            RecruitmentRole::SeniorActionEditors => venue.use_senior_action_editors,
        }
    }
}

/// CLI arguments for venue-provision
#[derive(Parser, Debug)]
#[command(name = "venue-provision")]
#[command(author, version, about = "Provision the committee groups of a peer-review venue")]
#[command(long_about = r#"
venue-provision creates the group hierarchy a venue needs on a peer-review
platform: the path groups above the venue, the venue group itself, its role
groups, one committee per submission and the recruitment pools.

Every command is idempotent. Groups that already exist are left alone unless
--overwrite is given, and existing members are always kept.

Configuration files are loaded from (in priority order):
1. VENUE_PROVISION_API_* environment variables ([api] section only)
2. --config <path>                 Explicit config file
3. ./venue-provision.toml          Project-level config
4. ~/.config/venue-provision/config.toml   Global config

Example:
  venue-provision setup --editors-in-chief ~Ada_Lovelace1 --recruitment
  venue-provision paper-groups --count 120
  venue-provision --dry-run paper-groups --submissions 1-10,42 --overwrite
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Venue id, overriding `venue.id` from the configuration
    #[arg(long, value_name = "ID", global = true)]
    pub venue: Option<String>,

    /// Apply edits to an in-memory platform instead of the remote API
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Output format (defaults to `output.format`, then text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Append every edit sent to the platform to this JSONL file
    #[arg(long, value_name = "PATH", global = true)]
    pub audit_log: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the path groups, the venue group and every enabled role group
    Setup {
        /// Initial members of the editors-in-chief group
        #[arg(long, value_name = "ID", value_delimiter = ',')]
        editors_in_chief: Vec<String>,

        /// Also create the invited and declined pools of every committee
        #[arg(long)]
        recruitment: bool,
    },

    /// Create the per-submission committee groups
    PaperGroups {
        #[command(flatten)]
        selection: SubmissionSelection,

        /// Rewrite groups that already exist (members are kept)
        #[arg(long)]
        overwrite: bool,
    },

    /// Create the committee, invited and declined groups of one committee
    Recruitment {
        #[arg(value_enum)]
        role: RecruitmentRole,
    },

    /// Create the groups on the venue path without touching the venue group
    PathGroups,

    /// Ensure a profile exists for an email address
    Profile {
        email: String,
        first: String,
        last: String,
        #[arg(long)]
        middle: Option<String>,
    },

    /// Show configuration file locations and the resolved configuration
    ShowConfig,
}

/// Which submissions to provision
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SubmissionSelection {
    /// Paper numbers and ranges, e.g. `1-10,42`
    #[arg(long, value_name = "LIST")]
    pub submissions: Option<String>,

    /// Submissions 1 through N
    #[arg(long, value_name = "N")]
    pub count: Option<u64>,
}

impl SubmissionSelection {
    pub fn resolve(&self) -> Result<Vec<Submission>, DomainError> {
        match (&self.submissions, self.count) {
            (Some(list), _) => Submission::parse_list(list),
            (None, Some(count)) => Ok(Submission::first_n(count)),
            (None, None) => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_setup() {
        let cli = Cli::try_parse_from([
            "venue-provision",
            "-vv",
            "--dry-run",
            "setup",
            "--editors-in-chief",
            "~Ada_Lovelace1,~Alan_Turing1",
            "--recruitment",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.dry_run);
        match cli.command {
            Command::Setup {
                editors_in_chief,
                recruitment,
            } => {
                assert_eq!(editors_in_chief, vec!["~Ada_Lovelace1", "~Alan_Turing1"]);
                assert!(recruitment);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "venue-provision",
            "paper-groups",
            "--count",
            "3",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(FormatArg::Json));
        let Command::PaperGroups { selection, overwrite } = cli.command else {
            panic!("expected paper-groups");
        };
        assert!(!overwrite);
        let numbers: Vec<u64> = selection.resolve().unwrap().iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_paper_groups_requires_a_selection() {
        assert!(Cli::try_parse_from(["venue-provision", "paper-groups"]).is_err());
        assert!(
            Cli::try_parse_from([
                "venue-provision",
                "paper-groups",
                "--count",
                "2",
                "--submissions",
                "1"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_submission_list() {
        let cli = Cli::try_parse_from([
            "venue-provision",
            "paper-groups",
            "--submissions",
            "1-2,7",
            "--overwrite",
        ])
        .unwrap();
        let Command::PaperGroups { selection, overwrite } = cli.command else {
            panic!("expected paper-groups");
        };
        assert!(overwrite);
        let numbers: Vec<u64> = selection.resolve().unwrap().iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 7]);
    }

    #[test]
    fn test_recruitment_role() {
        let cli =
            Cli::try_parse_from(["venue-provision", "recruitment", "action-editors"]).unwrap();
        let Command::Recruitment { role } = cli.command else {
            panic!("expected recruitment");
        };
        let venue = Venue::new("org/Venue").unwrap();
        assert!(!role.is_enabled(&venue));
        assert_eq!(role.committee_name(&venue), "Area_Chairs");
        assert!(role.is_enabled(&venue.with_action_editors(true)));
    }
}
