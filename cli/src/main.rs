//! CLI entrypoint for venue-provision
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use venue_application::{
    EnsureProfileInput, EnsureProfileUseCase, GroupProvisioner, GroupStore, GroupSummary,
    NoProgress, ProfileStore, ProvisionProgressNotifier, ProvisionVenueInput,
};
use venue_domain::{ConfigIssue, OutputFormat};
use venue_infrastructure::{
    ApiClient, ApiClientConfig, ConfigLoader, FileConfig, InMemoryStore, JsonlProvisionLogger,
};
use venue_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, SimpleProgress};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Kept alive until exit so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting venue-provision");

    if matches!(cli.command, Command::ShowConfig) {
        ConfigLoader::print_config_sources();
        let mut config = load_config(&cli)?;
        if config.api.token.is_some() {
            config.api.token = Some("********".to_string());
        }
        println!();
        println!("{}", ConsoleFormatter::format_json(&config));
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    check_config(&config, matches!(cli.command, Command::Profile { .. }))?;
    ConsoleFormatter::set_color(config.output.color && std::io::stdout().is_terminal());

    // === Dependency Injection ===
    if cli.dry_run {
        info!("Dry run: edits are applied to an in-memory platform");
        let store = Arc::new(InMemoryStore::new());
        let code = run(&cli, &config, Arc::clone(&store)).await?;
        if !cli.quiet {
            eprintln!("[dry-run] {} group edits would be posted", store.edits().len());
        }
        return Ok(code);
    }

    let mut api = ApiClientConfig::new(config.api.base_url.clone())
        .with_timeout(Duration::from_secs(config.api.timeout_seconds));
    if let Some(token) = &config.api.token {
        api = api.with_token(token.clone());
    }
    let store = Arc::new(ApiClient::new(api)?);
    run(&cli, &config, store).await
}

/// Initialize diagnostics based on verbosity level
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file {} does not name a file", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    if let Some(venue) = &cli.venue {
        config.venue.id = venue.clone();
    }
    Ok(config)
}

/// Log every issue and refuse to run on errors
fn check_config(config: &FileConfig, profile_only: bool) -> Result<()> {
    let issues: Vec<ConfigIssue> = config
        .validate()
        .into_iter()
        .filter(|issue| !(profile_only && issue.field().starts_with("venue.")))
        .collect();

    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    let errors: Vec<&str> = issues
        .iter()
        .filter(|issue| issue.is_error())
        .map(|issue| issue.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration: {}", errors.join("; "));
    }
    Ok(())
}

async fn run<S>(cli: &Cli, config: &FileConfig, store: Arc<S>) -> Result<ExitCode>
where
    S: GroupStore + ProfileStore + 'static,
{
    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or_else(|| config.output.format());

    let progress: Box<dyn ProvisionProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    match &cli.command {
        Command::Setup {
            editors_in_chief,
            recruitment,
        } => {
            let members = if editors_in_chief.is_empty() {
                config.venue.editors_in_chief.clone()
            } else {
                editors_in_chief.clone()
            };
            let input = ProvisionVenueInput::new()
                .with_editors_in_chief(members)
                .with_recruitment(*recruitment);
            let output = build_provisioner(cli, config, store)?
                .provision_venue_with_progress(input, progress.as_ref())
                .await?;
            print(format, &output, || ConsoleFormatter::format_setup(&output));
        }
        Command::PaperGroups {
            selection,
            overwrite,
        } => {
            let submissions = selection.resolve()?;
            let provisioner = build_provisioner(cli, config, store)?;
            let overwrite = *overwrite || provisioner.params().overwrite;
            let report = provisioner
                .create_paper_committee_groups(&submissions, overwrite, progress.as_ref())
                .await?;
            print(format, &report, || ConsoleFormatter::format_batch(&report));
            if !report.is_complete() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Recruitment { role } => {
            let provisioner = build_provisioner(cli, config, store)?;
            let venue = provisioner.venue();
            let committee = role.committee_name(venue);
            if !role.is_enabled(venue) {
                bail!("Venue {} does not use {}", venue.id, committee);
            }
            let groups: Vec<GroupSummary> = provisioner
                .create_recruitment_groups(&committee)
                .await?
                .iter()
                .map(|g| g.summary())
                .collect();
            print(format, &groups, || {
                ConsoleFormatter::format_groups(&format!("Recruitment: {}", committee), &groups)
            });
        }
        Command::PathGroups => {
            let groups: Vec<GroupSummary> = build_provisioner(cli, config, store)?
                .ensure_path_groups()
                .await?
                .iter()
                .map(|g| g.summary())
                .collect();
            print(format, &groups, || {
                ConsoleFormatter::format_groups("Path groups", &groups)
            });
        }
        Command::Profile {
            email,
            first,
            last,
            middle,
        } => {
            let mut input = EnsureProfileInput::new(email, first, last);
            if let Some(middle) = middle {
                input = input.with_middle(middle);
            }
            let profile = EnsureProfileUseCase::new(store).execute(input).await?;
            print(format, &profile, || ConsoleFormatter::format_profile(&profile));
        }
        // Printed before any store is built
        Command::ShowConfig => {}
    }

    Ok(ExitCode::SUCCESS)
}

/// Build the provisioner for the configured venue, with the audit log if requested
fn build_provisioner<S: GroupStore + 'static>(
    cli: &Cli,
    config: &FileConfig,
    store: Arc<S>,
) -> Result<GroupProvisioner<S>> {
    let venue = config.venue.to_venue()?;
    let mut provisioner =
        GroupProvisioner::new(store, venue).with_params(config.provision.to_params());
    if let Some(path) = &cli.audit_log {
        match JsonlProvisionLogger::new(path) {
            Some(logger) => provisioner = provisioner.with_logger(Arc::new(logger)),
            None => warn!("Audit log disabled, cannot write {}", path.display()),
        }
    }
    Ok(provisioner)
}

fn print<T: serde::Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) {
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(value)),
        OutputFormat::Text => print!("{}", text()),
    }
}
