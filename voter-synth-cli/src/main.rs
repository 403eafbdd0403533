mod participants;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use participants::ParticipantFile;
use voter_synth::{CampaignDemographicsReport, DemographicsEngine, GeneratorConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary with per-dimension bars
    Console,
    /// Pretty-printed JSON report
    Json,
    /// Markdown tables
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "voter-synth-cli", version)]
#[command(about = "Generate synthetic voter profiles and aggregate campaign demographics")]
struct Args {
    /// Campaign identifier used to label the batch and the report
    #[arg(long)]
    campaign: String,

    /// Number of anonymous participants to generate
    #[arg(
        long,
        default_value_t = 100,
        allow_negative_numbers = true,
        conflicts_with = "participants"
    )]
    count: i64,

    /// File of `identity,stance` lines; replaces the anonymous batch
    #[arg(long)]
    participants: Option<PathBuf>,

    /// Root seed for identity-bound profile streams (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Optional JSON generator configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let report = build_report(&args)?;
    write_report(&args, &report)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            GeneratorConfig::from_json(&text)
                .with_context(|| format!("invalid generator config {}", path.display()))?
        }
        None => GeneratorConfig::default_config(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn build_report(args: &Args) -> Result<CampaignDemographicsReport> {
    let config = load_config(args)?;
    log::debug!("generator config: {config:?}");
    let engine = DemographicsEngine::new(config, ParticipantFile::new(args.participants.clone()));

    let report = if args.participants.is_some() {
        engine
            .participant_report(&args.campaign)
            .context("failed to aggregate participant file")?
    } else {
        engine
            .batch_report(&args.campaign, args.count)
            .context("failed to generate participant batch")?
    };

    if args.verbose {
        eprintln!(
            "{} {} participants for {}",
            "✅ Aggregated".green(),
            report.total_participants,
            report.campaign_id.bold()
        );
    }
    Ok(report)
}

fn write_report(args: &Args, report: &CampaignDemographicsReport) -> Result<()> {
    let mut out = open_output(args.output.as_deref())?;
    match args.report {
        ReportFormat::Json => reports::generate_json_report(&mut out, report)?,
        ReportFormat::Markdown => reports::generate_markdown_report(&mut out, report)?,
        ReportFormat::Console => {
            if args.output.is_some() {
                colored::control::set_override(false);
            }
            reports::generate_console_report(&mut out, report)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Buffered report sink: the `--output` file when given, stdout otherwise.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(stdout())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            campaign: "clean-water".to_string(),
            count: 25,
            participants: None,
            seed: None,
            config: None,
            report: ReportFormat::Json,
            verbose: false,
            output: None,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("voter-synth-main-{label}-{}", std::process::id()))
    }

    #[test]
    fn args_parse_negative_count() {
        let args = Args::try_parse_from(["voter-synth-cli", "--campaign", "c", "--count", "-5"]).unwrap();
        assert_eq!(args.count, -5);
        assert_eq!(args.report, ReportFormat::Console);
    }

    #[test]
    fn count_conflicts_with_participant_file() {
        let err = Args::try_parse_from([
            "voter-synth-cli",
            "--campaign",
            "c",
            "--count",
            "5",
            "--participants",
            "roster.csv",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let args = Args::try_parse_from([
            "voter-synth-cli",
            "--campaign",
            "c",
            "--participants",
            "roster.csv",
        ])
        .unwrap();
        assert_eq!(args.participants, Some(PathBuf::from("roster.csv")));
    }

    #[test]
    fn seed_flag_overrides_config() {
        let args = Args {
            seed: Some(42),
            ..base_args()
        };
        assert_eq!(load_config(&args).unwrap().seed, 42);
        assert_eq!(
            load_config(&base_args()).unwrap(),
            GeneratorConfig::default_config()
        );
    }

    #[test]
    fn config_file_is_validated() {
        let path = temp_path("config.json");
        fs::write(&path, r#"{"support_share": 3.0}"#).unwrap();
        let args = Args {
            config: Some(path.clone()),
            ..base_args()
        };
        let err = load_config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("support_share"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn batch_report_uses_requested_count() {
        let report = build_report(&base_args()).unwrap();
        assert_eq!(report.total_participants, 25);
        assert_eq!(report.campaign_id, "clean-water");
    }

    #[test]
    fn negative_count_is_rejected() {
        let args = Args {
            count: -1,
            ..base_args()
        };
        let err = build_report(&args).unwrap_err();
        assert!(format!("{err:#}").contains("negative"));
    }

    #[test]
    fn participant_file_drives_report() {
        let path = temp_path("participants.csv");
        fs::write(&path, "alice,support\nbob,oppose\ncarol,support\n").unwrap();
        let args = Args {
            participants: Some(path.clone()),
            ..base_args()
        };
        let report = build_report(&args).unwrap();
        assert_eq!(report.total_participants, 3);
        assert_eq!(report.stance.support, 2);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn write_reports_emits_json_output() {
        let path = temp_path("report.json");
        let args = Args {
            output: Some(path.clone()),
            ..base_args()
        };
        let report = build_report(&args).unwrap();
        write_report(&args, &report).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let parsed: CampaignDemographicsReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
        let _ = fs::remove_file(path);
    }
}
