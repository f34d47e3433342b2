//! XO-Assign: crossover assignment from the command line.
//!
//! Reads user and object identifiers from CSV files, distributes objects so
//! every pair of users shares at least one, verifies the result and writes
//! `(user, object)` rows back out.
//!
//! ```text
//! xo-assign --users-csv users.csv --users-column user_id \
//!           --objects-csv objects.csv --objects-column object_id \
//!           --output-csv assignments.csv --assignment-pct 0.3 --crossover-pct 0.2
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use xo_01_assignment::{
    AssignmentApi, AssignmentConfig, AssignmentService, AssignmentSink, IdentifierSource,
    VerificationReport, Violation,
};
use xo_02_tabular::{ColumnSelector, CsvAssignmentWriter, CsvColumnReader};

/// Assign objects to users with controlled crossover
#[derive(Parser, Debug)]
#[command(name = "xo-assign")]
#[command(about = "Assign objects to users with controlled crossover")]
struct Args {
    /// Path to CSV file containing user IDs
    #[arg(long)]
    users_csv: PathBuf,

    /// Column name or index for user IDs
    #[arg(long, default_value = "0")]
    users_column: ColumnSelector,

    /// Path to CSV file containing object IDs
    #[arg(long)]
    objects_csv: PathBuf,

    /// Column name or index for object IDs
    #[arg(long, default_value = "0")]
    objects_column: ColumnSelector,

    /// Path to output CSV file
    #[arg(long)]
    output_csv: PathBuf,

    /// Fraction of objects to assign to each user (0-1]
    #[arg(long)]
    assignment_pct: Option<f64>,

    /// Fraction of a user's objects that should overlap with others [0-1]
    #[arg(long)]
    crossover_pct: Option<f64>,

    /// Shuffle seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Crossover tolerance before a warning is reported
    #[arg(long)]
    tolerance: Option<f64>,

    /// Also write the verification report as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Exit with an error when a hard invariant fails
    #[arg(long)]
    strict: bool,
}

/// Load configuration from the process environment, then apply command line
/// overrides.
fn load_config(args: &Args) -> AssignmentConfig {
    load_config_from(args, |key| std::env::var(key).ok())
}

/// Layer defaults, then `lookup` (environment), then flags.
fn load_config_from<F>(args: &Args, lookup: F) -> AssignmentConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = AssignmentConfig::default();

    if let Some(v) = env_value(&lookup, "XO_ASSIGNMENT_PCT") {
        config.assignment_percentage = v;
    }
    if let Some(v) = env_value(&lookup, "XO_CROSSOVER_PCT") {
        config.crossover_percentage = v;
    }
    if let Some(v) = env_value(&lookup, "XO_CROSSOVER_TOLERANCE") {
        config.crossover_tolerance = v;
    }
    if let Some(v) = env_value(&lookup, "XO_SEED") {
        config.seed = Some(v);
    }

    if let Some(v) = args.assignment_pct {
        config.assignment_percentage = v;
    }
    if let Some(v) = args.crossover_pct {
        config.crossover_percentage = v;
    }
    if let Some(v) = args.tolerance {
        config.crossover_tolerance = v;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config
}

fn env_value<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}

fn log_report(report: &VerificationReport<String>) {
    for pair in &report.pairs {
        info!(first = %pair.first, second = %pair.second, shared = pair.shared, "Pair crossover");
    }
    for user in &report.users {
        info!(
            user = %user.user,
            objects = user.object_count,
            shared = user.shared_objects,
            ratio = %format!("{:.2}%", user.crossover_ratio * 100.0),
            "User crossover"
        );
    }
    for w in &report.warnings {
        warn!(
            user = %w.user,
            realized = %format!("{:.2}%", w.realized * 100.0),
            target = %format!("{:.2}%", w.target * 100.0),
            "Crossover differs from target"
        );
    }
    for v in &report.violations {
        match v {
            Violation::MissingUser { user } => error!(%user, "User missing from assignment"),
            Violation::DuplicateObjects { user, duplicates } => {
                error!(%user, duplicates, "User has duplicate objects")
            }
            Violation::CountOutOfRange {
                user,
                actual,
                expected,
            } => error!(%user, actual, expected, "User object count out of range"),
            Violation::NoCrossover { first, second } => {
                error!(%first, %second, "Users don't share any objects")
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let args = Args::parse();
    let config = load_config(&args);
    run(&args, config)?;
    Ok(())
}

/// Read, assign, verify, write. Returns the verification report.
fn run(args: &Args, config: AssignmentConfig) -> Result<VerificationReport<String>> {
    config.validate().context("Invalid configuration")?;

    let users = CsvColumnReader::new(&args.users_csv, args.users_column.clone())
        .read_identifiers()
        .with_context(|| format!("Reading users from {}", args.users_csv.display()))?;
    let objects = CsvColumnReader::new(&args.objects_csv, args.objects_column.clone())
        .read_identifiers()
        .with_context(|| format!("Reading objects from {}", args.objects_csv.display()))?;
    info!(users = users.len(), objects = objects.len(), "Read identifiers from CSV files");

    let service = AssignmentService::with_config(config);
    let assignment = service
        .assign(&users, &objects)
        .context("Assignment failed")?;

    let report = service.verify(&assignment, &users, objects.len());
    log_report(&report);
    if report.is_valid() {
        info!("All requirements met successfully");
    } else {
        warn!(
            violations = report.violations.len(),
            "Some requirements were not met"
        );
    }

    let mut writer = CsvAssignmentWriter::create(&args.output_csv)
        .with_context(|| format!("Creating {}", args.output_csv.display()))?;
    let rows = writer
        .write_assignment(&assignment)
        .with_context(|| format!("Writing {}", args.output_csv.display()))?;
    info!(rows, path = %args.output_csv.display(), "Assignments successfully written");

    if let Some(path) = &args.report_json {
        let file = File::create(path).with_context(|| format!("Creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("Writing report to {}", path.display()))?;
    }

    if args.strict && !report.is_valid() {
        bail!(
            "{} hard invariant violation(s); see log for details",
            report.violations.len()
        );
    }

    Ok(report)
}
