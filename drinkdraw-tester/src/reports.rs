use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::tester::ScenarioResult;
use crate::uniformity::UniformityReport;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    passed: bool,
    scenarios: &'a [ScenarioResult],
    uniformity: &'a [UniformityReport],
}

#[must_use]
pub fn all_passed(results: &[ScenarioResult], uniformity: &[UniformityReport]) -> bool {
    results.iter().all(|r| r.passed) && uniformity.iter().all(|u| u.passed)
}

#[allow(clippy::cast_precision_loss)]
fn success_rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        passed as f64 / total as f64 * 100.0
    }
}

fn format_rates(rates: &[f64]) -> String {
    rates
        .iter()
        .map(|rate| format!("{rate:.3}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    uniformity: &[UniformityReport],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "======================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Total scenario runs: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(passed, total))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{status} {} (seed {})",
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    if !uniformity.is_empty() {
        writeln!(out, "{}", "🎲 Shuffle Uniformity".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        for report in uniformity {
            let status = if report.passed {
                "✅ PASS".green()
            } else {
                "❌ FAIL".red()
            };
            writeln!(
                out,
                "{status} n={} seed={} samples={} chi²={:.2} (critical {:.2}, dof {})",
                report.pool_size,
                report.seed,
                report.samples,
                report.chi_square,
                report.critical_value,
                report.degrees_of_freedom
            )?;
            writeln!(
                out,
                "   Orderings seen: {}/{}",
                report.orderings_seen, report.orderings
            )?;
            writeln!(
                out,
                "   First-position rates: {}",
                format_rates(&report.first_position_rates)
            )?;
        }
    }
    Ok(())
}

pub fn generate_json_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    uniformity: &[UniformityReport],
) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        passed: all_passed(results, uniformity),
        scenarios: results,
        uniformity,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    uniformity: &[UniformityReport],
) -> Result<()> {
    writeln!(out, "# Drinkdraw Test Results\n")?;
    writeln!(
        out,
        "_Generated {}_\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Scenario runs**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(
        out,
        "- **Success rate**: {:.1}%\n",
        success_rate(passed, total)
    )?;

    if !results.is_empty() {
        writeln!(out, "## Scenarios\n")?;
        for result in results {
            let status = if result.passed { "✅" } else { "❌" };
            writeln!(out, "### {status} {} (seed {})\n", result.scenario_name, result.seed)?;
            writeln!(
                out,
                "- **Iterations**: {}/{} successful",
                result.successful_iterations, result.iterations_run
            )?;
            writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
            if !result.failures.is_empty() {
                writeln!(out, "- **Failures**:")?;
                for failure in &result.failures {
                    writeln!(out, "  - {failure}")?;
                }
            }
            writeln!(out)?;
        }
    }

    if !uniformity.is_empty() {
        writeln!(out, "## Shuffle Uniformity\n")?;
        writeln!(out, "| n | seed | samples | chi² | critical | dof | result |")?;
        writeln!(out, "|---|------|---------|------|----------|-----|--------|")?;
        for report in uniformity {
            writeln!(
                out,
                "| {} | {} | {} | {:.2} | {:.2} | {} | {} |",
                report.pool_size,
                report.seed,
                report.samples,
                report.chi_square,
                report.critical_value,
                report.degrees_of_freedom,
                if report.passed { "✅" } else { "❌" }
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}
