mod reports;
mod scenarios;
mod tester;
mod uniformity;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use scenarios::{expand_scenarios, get_scenario, list_scenarios};
use tester::{LogicTester, ScenarioResult};
use uniformity::{MAX_POOL_SIZE, UniformityReport, recommended_samples, run_uniformity};
use util::{parse_seeds, split_csv};

/// Expected hits per ordering when `--samples` is not given.
const DEFAULT_SAMPLES_PER_ORDERING: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Scripted session scenarios (fast)
    Scenarios,
    /// Chi-square check of the draw shuffle
    Uniformity,
    /// Run both scenarios and the uniformity check
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "drinkdraw-tester", version = "0.1.0")]
#[command(about = "Automated QA for the Drinkdraw session engine")]
struct Args {
    /// Test mode: scenarios, uniformity, or both
    #[arg(long, value_enum, default_value_t = TestMode::Scenarios)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for the whole catalog)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated, decimal or 0x-hex)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Pool size for the uniformity check (2..=7)
    #[arg(long, default_value_t = 4)]
    pool_size: usize,

    /// Shuffles per uniformity run; defaults to 200 per possible ordering
    #[arg(long)]
    samples: Option<usize>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let seeds = parse_seeds(&args.seeds)?;
    let scenario_names = expand_scenarios(&split_csv(&args.scenarios));

    let results = run_scenarios(&args, &scenario_names, &seeds);
    let uniformity = run_uniformity_checks(&args, &seeds);

    write_reports(&args, &results, &uniformity, start_time)?;

    if !reports::all_passed(&results, &uniformity) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🍻 Drinkdraw Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn run_scenarios(args: &Args, names: &[String], seeds: &[u64]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Scenarios | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Scenarios".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose);
    for name in names {
        if let Some(scenario) = get_scenario(name) {
            results.extend(logic_tester.run_scenario(&scenario, seeds, args.iterations));
        } else {
            eprintln!("⚠️  Unknown scenario: {}", name.yellow());
        }
    }
    results
}

fn uniformity_samples(args: &Args) -> usize {
    args.samples
        .unwrap_or_else(|| recommended_samples(args.pool_size, DEFAULT_SAMPLES_PER_ORDERING))
}

fn run_uniformity_checks(args: &Args, seeds: &[u64]) -> Vec<UniformityReport> {
    if !matches!(args.mode, TestMode::Uniformity | TestMode::Both) {
        return Vec::new();
    }

    println!("{}", "🎲 Running Uniformity Check".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    if !(2..=MAX_POOL_SIZE).contains(&args.pool_size) {
        eprintln!(
            "⚠️  Pool size {} clamped to 2..={MAX_POOL_SIZE}",
            args.pool_size.to_string().yellow()
        );
    }

    let samples = uniformity_samples(args);
    seeds
        .iter()
        .map(|&seed| {
            let report = run_uniformity(args.pool_size, samples, seed);
            if args.verbose {
                println!(
                    "  seed {seed}: chi² {:.2} vs {:.2}",
                    report.chi_square, report.critical_value
                );
            }
            report
        })
        .collect()
}

fn write_reports(
    args: &Args,
    results: &[ScenarioResult],
    uniformity: &[UniformityReport],
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results, uniformity)?,
        "markdown" => {
            if results.is_empty() && uniformity.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Drinkdraw Test Results\n\n_No checks executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results, uniformity)?;
            }
        }
        _ => {
            if results.is_empty() && uniformity.is_empty() {
                writeln!(&mut output_target, "No checks executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    uniformity,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    if args.report != "json" {
        let duration = start_time.elapsed();
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Scenarios,
            scenarios: "a".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 1,
            pool_size: 3,
            samples: Some(600),
            report: "json".to_string(),
            verbose: false,
            output: None,
        }
    }

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("drinkdraw-{}-{name}", std::process::id()))
    }

    fn sample_result() -> ScenarioResult {
        ScenarioResult {
            scenario_name: "c".to_string(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_micros(40),
        }
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let temp = temp_file("scenarios.txt");
        let args = Args {
            list_scenarios: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).unwrap());
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("double-submit"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        assert!(!maybe_list_scenarios(&base_args()).unwrap());
    }

    #[test]
    fn run_scenarios_skips_in_uniformity_mode() {
        let args = Args {
            mode: TestMode::Uniformity,
            ..base_args()
        };
        assert!(run_scenarios(&args, &["a".to_string()], &[1]).is_empty());
    }

    #[test]
    fn run_scenarios_ignores_unknown_names() {
        let results = run_scenarios(
            &base_args(),
            &["a".to_string(), "nope".to_string()],
            &[1, 2],
        );
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.scenario_name == "a" && r.passed));
    }

    #[test]
    fn uniformity_runs_once_per_seed() {
        let args = Args {
            mode: TestMode::Both,
            ..base_args()
        };
        let reports = run_uniformity_checks(&args, &[1, 2]);
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.samples == 600 && r.pool_size == 3));
        assert!(run_uniformity_checks(&base_args(), &[1]).is_empty());
    }

    #[test]
    fn default_samples_scale_with_orderings() {
        let args = Args {
            samples: None,
            pool_size: 4,
            ..base_args()
        };
        assert_eq!(uniformity_samples(&args), 24 * DEFAULT_SAMPLES_PER_ORDERING);
    }

    #[test]
    fn write_reports_emits_json_for_results() {
        let temp = temp_file("report.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result()], &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["passed"], true);
        assert_eq!(value["scenarios"][0]["scenario_name"], "c");
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let temp = temp_file("empty.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("No checks executed"));
        assert!(content.contains("Total time"));
    }

    #[test]
    fn write_reports_console_summary() {
        let temp = temp_file("console.txt");
        let args = Args {
            report: "console".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result()], &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Test Results Summary"));
    }

    #[test]
    fn output_target_stdout_writes() {
        let mut target = OutputTarget::new(None).unwrap();
        target.write_all(b"ok").unwrap();
        target.flush().unwrap();
    }
}
