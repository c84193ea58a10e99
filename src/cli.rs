//! CLI interface for minecarbon.
//!
//! Each subcommand is non-interactive: arguments in, text or JSON out.
//! Human-readable output goes to stdout; confirmations go to stderr.
//!
//! - `minecarbon compute` validates an activity, computes its emissions and
//!   advisories, and optionally saves the result as a report.
//! - `minecarbon recommend` and `minecarbon context` work from a bare figure.
//! - `minecarbon report ...` manages saved reports.
//!
//! Report references take a full UUID or an unambiguous prefix.

mod args;
mod format;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use jiff::Timestamp;

use minecarbon::context::EmissionContext;
use minecarbon::model::{ActivityInput, Report};
use minecarbon::storage::Storage;
use minecarbon::validate::validate;

use args::{ActivityArgs, CategoryArg};
use format::{format_context, format_recommendations, format_report};
use report::ReportCommand;

/// minecarbon: coal-mine carbon accounting.
#[derive(Debug, Parser)]
#[command(name = "minecarbon", version, after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r"Workflow: account for a diesel delivery
  1. minecarbon compute --category diesel-combustion --quantity 1500 --fuel diesel --save
     → prints 4020.00 kg CO₂e, advisories, and a report ID (e.g. 3f2a9c1e)
  2. minecarbon report list
  3. minecarbon report export --out reports.csv

Other activities:
  minecarbon compute --category transportation --quantity 10 --mode truck --distance-km 250
  minecarbon compute --category fugitive-methane --methane-m3 100
  minecarbon compute --input activity.json --json";

/// Flags that describe an activity; none of them combine with `--input`.
const ACTIVITY_FLAGS: [&str; 9] = [
    "category",
    "quantity",
    "unit",
    "fuel",
    "mode",
    "distance_km",
    "land_area_ha",
    "methane_m3",
    "electricity_source",
];

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute emissions and advisories for one activity.
    ///
    /// The activity comes from flags or from a JSON file (`--input`).
    /// Category-specific fields are checked before anything is computed.
    Compute {
        #[command(flatten)]
        activity: ActivityArgs,

        /// Read the activity from a JSON file instead of flags.
        #[arg(long, conflicts_with_all = ACTIVITY_FLAGS)]
        input: Option<PathBuf>,

        /// Save the result as a report.
        #[arg(long)]
        save: bool,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate advisories for an emissions figure.
    Recommend {
        /// Activity category.
        #[arg(long, value_enum)]
        category: CategoryArg,

        /// Emissions in kg CO₂e.
        #[arg(long)]
        emissions: f64,

        /// Print the advisories as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show everyday equivalents for an emissions figure.
    Context {
        /// Emissions in kg CO₂e.
        #[arg(long)]
        emissions: f64,

        /// Print the equivalents as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Manage saved reports.
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
}

/// Run a parsed command, returning an error message on failure.
pub fn run(cli: Cli, storage: &Storage) -> Result<(), String> {
    match cli.command {
        Command::Compute {
            activity,
            input,
            save,
            json,
        } => cmd_compute(storage, &activity, input.as_deref(), save, json),
        Command::Recommend {
            category,
            emissions,
            json,
        } => cmd_recommend(category, emissions, json),
        Command::Context { emissions, json } => cmd_context(emissions, json),
        Command::Report { command } => report::run(storage, command),
    }
}

fn cmd_compute(
    storage: &Storage,
    activity: &ActivityArgs,
    input_path: Option<&Path>,
    save: bool,
    json: bool,
) -> Result<(), String> {
    let input = match input_path {
        Some(path) => read_input(path)?,
        None => activity
            .to_input()
            .ok_or("specify --category or --input")?,
    };

    validate(&input).map_err(|e| format!("invalid activity: {e}"))?;

    let result = minecarbon::compute(&input, Timestamp::now());
    let recommendations = minecarbon::generate(result.category, result.emissions_kg_co2e);
    let report = Report::new(input, result, recommendations);

    if save {
        storage
            .save_report(&report)
            .map_err(|e| format!("failed to save report: {e}"))?;
        eprintln!("Saved report {}", report.short_id());
    }

    if json {
        print_json(&report)
    } else {
        print!("{}", format_report(&report));
        Ok(())
    }
}

fn cmd_recommend(category: CategoryArg, emissions: f64, json: bool) -> Result<(), String> {
    let emissions = finite_or_zero(emissions);
    let recommendations = minecarbon::generate(category.to_domain(), emissions);

    if json {
        print_json(&recommendations)
    } else {
        print!("{}", format_recommendations(&recommendations));
        Ok(())
    }
}

fn cmd_context(emissions: f64, json: bool) -> Result<(), String> {
    let context = EmissionContext::from_emissions(finite_or_zero(emissions));

    if json {
        print_json(&context)
    } else {
        print!("{}", format_context(&context));
        Ok(())
    }
}

/// Read an activity record from a JSON file.
fn read_input(path: &Path) -> Result<ActivityInput, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("invalid activity in {}: {e}", path.display()))
}

/// Malformed figures are treated as zero before they reach the generator.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to serialize output: {e}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use minecarbon::model::{Category, FuelType};

    #[test]
    fn parses_compute_flags() {
        let cli = Cli::try_parse_from([
            "minecarbon",
            "compute",
            "--category",
            "diesel-combustion",
            "--quantity",
            "1500",
            "--fuel",
            "diesel",
            "--save",
        ])
        .unwrap();

        let Command::Compute {
            activity,
            input,
            save,
            json,
        } = cli.command
        else {
            panic!("expected compute");
        };
        assert!(input.is_none());
        assert!(save);
        assert!(!json);

        let input = activity.to_input().unwrap();
        assert_eq!(input.category, Category::DieselCombustion);
        assert_eq!(input.fuel_type, Some(FuelType::Diesel));
        assert_eq!(input.unit_label, "litres");
    }

    #[test]
    fn compute_requires_category_or_input() {
        assert!(Cli::try_parse_from(["minecarbon", "compute", "--quantity", "1"]).is_err());
        assert!(
            Cli::try_parse_from(["minecarbon", "compute", "--input", "activity.json"]).is_ok()
        );
    }

    #[test]
    fn input_file_excludes_activity_flags() {
        for extra in [
            ["--category", "coal-extraction"],
            ["--quantity", "5"],
            ["--fuel", "diesel"],
            ["--distance-km", "250"],
            ["--electricity-source", "Grid"],
        ] {
            let mut args = vec!["minecarbon", "compute", "--input", "activity.json"];
            args.extend(extra);
            assert!(Cli::try_parse_from(args).is_err(), "{extra:?}");
        }
    }

    #[test]
    fn compute_with_save_stores_a_report() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        let cli = Cli::try_parse_from([
            "minecarbon",
            "compute",
            "--category",
            "fugitive-methane",
            "--methane-m3",
            "100",
            "--save",
        ])
        .unwrap();

        run(cli, &storage).unwrap();

        let reports = storage.list_reports().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].result.emissions_kg_co2e, 2004.8);
    }

    #[test]
    fn compute_rejects_incomplete_activity() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        let cli = Cli::try_parse_from([
            "minecarbon",
            "compute",
            "--category",
            "transportation",
            "--quantity",
            "10",
            "--save",
        ])
        .unwrap();

        let err = run(cli, &storage).unwrap_err();

        assert!(err.contains("transportMode"), "{err}");
        assert!(storage.list_reports().unwrap().is_empty());
    }

    #[test]
    fn reads_activity_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("activity.json");
        fs::write(
            &path,
            r#"{"category": "CoalExtraction", "quantity": 100, "unitLabel": "tons"}"#,
        )
        .unwrap();

        let input = read_input(&path).unwrap();
        assert_eq!(input.category, Category::CoalExtraction);
        assert_eq!(input.quantity, 100.0);
    }

    #[test]
    fn malformed_figures_become_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(12.5), 12.5);
    }
}
