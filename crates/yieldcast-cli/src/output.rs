//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use yieldcast_core::{Provenance, YieldCurve};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// One curve point, shaped for table output.
#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Maturity")]
    label: String,
    #[tabled(rename = "Months")]
    months: u32,
    #[tabled(rename = "Yield %")]
    yield_pct: String,
}

/// Prints one resolved curve in the requested format.
pub fn print_curve(curve: &YieldCurve, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            print_curve_header(curve);
            print_point_table(curve);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(curve)?),
        OutputFormat::Minimal => println!("{}", serde_json::to_string(curve)?),
    }
    Ok(())
}

/// Prints a labelled batch of curves (history output).
pub fn print_history(resolved: &[(String, YieldCurve)], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if resolved.is_empty() {
                println!("No data available.");
                return Ok(());
            }
            for (label, curve) in resolved {
                println!("{}", label.as_str().bold());
                print_curve_header(curve);
                print_point_table(curve);
                println!();
            }
        }
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = resolved
                .iter()
                .map(|(label, curve)| Ok((label.clone(), serde_json::to_value(curve)?)))
                .collect::<CliResult<_>>()?;
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        OutputFormat::Minimal => {
            for (label, curve) in resolved {
                println!("{} {}", label, serde_json::to_string(curve)?);
            }
        }
    }
    Ok(())
}

/// Prints a single serializable value (cache info etc.).
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Minimal => println!("{}", serde_json::to_string(data)?),
    }
    Ok(())
}

fn print_curve_header(curve: &YieldCurve) {
    let provenance = match curve.provenance {
        Provenance::Fresh => "fresh".green(),
        Provenance::Cached => "cached".yellow(),
    };
    let date = curve.date.to_string();
    println!("{} ({provenance})", date.as_str().bold());
}

fn print_point_table(curve: &YieldCurve) {
    let rows: Vec<PointRow> = curve
        .points
        .iter()
        .map(|p| PointRow {
            label: p.label.clone(),
            months: p.months,
            yield_pct: p.yield_pct.to_string(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}
