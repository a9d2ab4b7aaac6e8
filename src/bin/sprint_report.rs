//! sprint-report: compute the dashboard for an archive export and print it
//! as JSON on stdout.
//!
//! Run with: cargo run --bin sprint-report -- --records gamemode_40l.csv

use anyhow::{Context, Result};
use clap::Parser;
use sprint_analytics::ingest::{load_baseline_csv, load_records_csv};
use sprint_analytics::record::LegacyBaseline;
use sprint_analytics::{AnalysisConfig, Dashboard};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sprint-report",
    version,
    about = "Print trend, percentile, histogram and personal-best series as JSON"
)]
struct Args {
    #[arg(short, long, value_name = "PATH", help = "Archive CSV, newest game first")]
    records: PathBuf,

    #[arg(short, long, value_name = "PATH", help = "Legacy personal-best CSV")]
    legacy: Option<PathBuf>,

    #[arg(short, long, value_name = "PATH", help = "JSON analysis config")]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let json =
        fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    AnalysisConfig::from_json_str(&json).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    let file = File::open(&args.records)
        .with_context(|| format!("opening {}", args.records.display()))?;
    let store = load_records_csv(BufReader::new(file))
        .with_context(|| format!("loading {}", args.records.display()))?;

    let legacy = match &args.legacy {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            load_baseline_csv(BufReader::new(file))
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => LegacyBaseline::empty(),
    };

    let now = chrono::Utc::now().timestamp();
    // one failed derivation withholds the whole dashboard
    let dashboard = Dashboard::compute(&store, &legacy, &config, now).with_context(|| {
        format!(
            "computing dashboard for {} (no series are printed when one fails; \
             a histogram range error usually means every time is slower than \
             histogram_clip_bound = {})",
            args.records.display(),
            config.histogram_clip_bound
        )
    })?;
    println!("{}", dashboard.to_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        let mut full = vec!["sprint-report"];
        full.extend_from_slice(args);
        Args::try_parse_from(full)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_records_only() {
        let args = parse(&["--records", "games.csv"]).unwrap();
        assert_eq!(args.records, PathBuf::from("games.csv"));
        assert!(args.legacy.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_short_flags() {
        let args = parse(&["-r", "games.csv", "-l", "legacy.csv", "-c", "config.json"]).unwrap();
        assert_eq!(args.legacy, Some(PathBuf::from("legacy.csv")));
        assert_eq!(args.config, Some(PathBuf::from("config.json")));
    }

    #[test]
    fn test_parse_requires_records() {
        let err = parse(&["--legacy", "legacy.csv"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        let err = parse(&["--records", "games.csv", "--window", "5"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), AnalysisConfig::default());
    }
}
