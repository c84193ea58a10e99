//! Output formatting for CLI display.

use minecarbon::context::{BENCHMARKS, EmissionContext};
use minecarbon::model::{Recommendation, Report};

/// Full human-readable view of a report: figure, derivation, advisories.
pub(super) fn format_report(report: &Report) -> String {
    let result = &report.result;
    let mut out = format!(
        "{}: {:.2} kg CO₂e\n  {}\n",
        result.category, result.emissions_kg_co2e, result.explanation
    );
    if let Some(source) = &report.input.electricity_source {
        out.push_str(&format!("  Electricity source: {source}\n"));
    }
    out.push_str(&format!(
        "  Report {}  ({})\n\n",
        report.short_id(),
        result.computed_at
    ));
    out.push_str(&format_recommendations(&report.recommendations));
    out
}

pub(super) fn format_recommendations(recommendations: &[Recommendation]) -> String {
    let mut out = String::from("Recommendations:\n");
    for rec in recommendations {
        out.push_str(&format!(
            "  [{}] {}\n      {}\n      {}\n",
            rec.priority, rec.title, rec.description, rec.metric
        ));
    }
    out
}

pub(super) fn format_context(context: &EmissionContext) -> String {
    let goal = &context.neutral_goal;
    let mut out = format!("{:.2} kg CO₂e is about:\n", context.emissions_kg_co2e);
    out.push_str(&format!("  {} trees absorbing for a year\n", context.trees_needed));
    out.push_str(&format!("  {} km in a petrol car\n", context.car_km));
    out.push_str(&format!("  {} one-hour flights\n", context.flights));
    out.push_str(&format!(
        "  {} months of household electricity\n",
        context.household_months
    ));
    out.push_str(&format!(
        "Neutral goal: {:.0}% of {} kg used, {:.2} kg remaining\n",
        goal.emitted_fraction * 100.0,
        goal.goal_kg,
        goal.remaining_kg
    ));
    out.push_str("Benchmarks:\n");
    for b in &BENCHMARKS {
        out.push_str(&format!("  {}: {} kg CO₂e\n", b.label, b.emissions_kg_co2e));
    }
    out
}

/// One line per report for `report list`.
pub(super) fn format_report_line(report: &Report) -> String {
    let result = &report.result;
    format!(
        "{}  {}  {:.2} kg CO₂e  [{}]  {}",
        report.short_id(),
        result.category,
        result.emissions_kg_co2e,
        result.unit_label,
        result.computed_at
    )
}
