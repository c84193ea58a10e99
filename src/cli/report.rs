//! Report management commands: list, show, latest, delete, export.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Subcommand;
use uuid::Uuid;

use minecarbon::export::write_csv;
use minecarbon::model::Report;
use minecarbon::storage::Storage;

use super::format::{format_report, format_report_line};
use super::print_json;

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// List saved reports, oldest first.
    List,

    /// Show a saved report.
    Show {
        /// Report ID: full UUID or unambiguous prefix (e.g. `3f2`).
        reference: String,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the most recently computed report.
    Latest {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Delete a saved report.
    Delete {
        /// Report ID: full UUID or unambiguous prefix.
        reference: String,
    },

    /// Export reports as CSV.
    ///
    /// Exports every saved report when no IDs are given.
    Export {
        /// Report IDs: full UUIDs or unambiguous prefixes.
        references: Vec<String>,

        /// Write the CSV to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub(super) fn run(storage: &Storage, command: ReportCommand) -> Result<(), String> {
    match command {
        ReportCommand::List => cmd_list(storage),
        ReportCommand::Show { reference, json } => {
            let report = resolve_report(storage, &reference)?;
            show(&report, json)
        }
        ReportCommand::Latest { json } => {
            let latest = storage
                .latest_report()
                .map_err(|e| format!("failed to load reports: {e}"))?;
            match latest {
                Some(report) => show(&report, json),
                None => {
                    println!("No reports");
                    Ok(())
                }
            }
        }
        ReportCommand::Delete { reference } => cmd_delete(storage, &reference),
        ReportCommand::Export { references, out } => cmd_export(storage, &references, out),
    }
}

fn cmd_list(storage: &Storage) -> Result<(), String> {
    let reports = storage
        .list_reports()
        .map_err(|e| format!("failed to list reports: {e}"))?;

    if reports.is_empty() {
        println!("No reports");
        return Ok(());
    }

    for report in &reports {
        println!("{}", format_report_line(report));
    }
    Ok(())
}

fn show(report: &Report, json: bool) -> Result<(), String> {
    if json {
        print_json(report)
    } else {
        print!("{}", format_report(report));
        Ok(())
    }
}

fn cmd_delete(storage: &Storage, reference: &str) -> Result<(), String> {
    // A full UUID is deleted without decoding the stored report.
    let id = match reference.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => resolve_report(storage, reference)?.id,
    };
    storage
        .delete_report(id)
        .map_err(|e| format!("failed to delete report: {e}"))?;
    eprintln!("Report {} deleted", &id.to_string()[..8]);
    Ok(())
}

fn cmd_export(
    storage: &Storage,
    references: &[String],
    out: Option<PathBuf>,
) -> Result<(), String> {
    let reports = if references.is_empty() {
        storage
            .list_reports()
            .map_err(|e| format!("failed to list reports: {e}"))?
    } else {
        references
            .iter()
            .map(|r| resolve_report(storage, r))
            .collect::<Result<Vec<_>, _>>()?
    };

    match out {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|e| format!("failed to create {}: {e}", path.display()))?;
            write_csv(&reports, file)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Exported {} report(s) → {}", reports.len(), path.display());
        }
        None => {
            write_csv(&reports, io::stdout().lock())
                .map_err(|e| format!("failed to write CSV: {e}"))?;
        }
    }
    Ok(())
}

/// Resolve a report reference (full UUID or unambiguous prefix) to a report.
fn resolve_report(storage: &Storage, reference: &str) -> Result<Report, String> {
    // Try full UUID first.
    if let Ok(id) = reference.parse::<Uuid>() {
        return storage.load_report(id).map_err(|e| e.to_string());
    }

    // Try as a prefix match against all reports.
    let reports = storage
        .list_reports()
        .map_err(|e| format!("failed to list reports: {e}"))?;

    let mut matches: Vec<Report> = reports
        .into_iter()
        .filter(|r| r.id.to_string().starts_with(reference))
        .collect();

    match matches.len() {
        0 => Err(format!("no report matching '{reference}'")),
        1 => Ok(matches.remove(0)),
        n => {
            let ids: Vec<String> = matches.iter().map(Report::short_id).collect();
            Err(format!(
                "'{reference}' is ambiguous: matches {n} reports: {}",
                ids.join(", ")
            ))
        }
    }
}
