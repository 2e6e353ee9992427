mod input;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::input::load_samples;
use crate::input::synthetic::exponential_cumsum;
use crate::model::outcome::ScoreResult;
use crate::model::surmise::SurmiseProfile;
use crate::pipeline::resonance::run_resonance_scan;
use crate::pipeline::score::run_score;
use crate::report::{ReportMode, text::render_report_text, write_reports};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let config = parse_args(&args)?;
    let profile = SurmiseProfile::gue_v1();

    let (results, out_dir, report_mode) = match config {
        Command::Run(run_args) => {
            let samples = load_samples(&run_args.input).map_err(|e| e.to_string())?;
            let results = collect_results(&profile, &samples, &run_args.label, run_args.resonance);
            (results, run_args.out, run_args.report_mode)
        }
        Command::Demo(demo_args) => {
            tracing::info!(
                "demo signal: {} cumulative exponential increments, seed {}",
                demo_args.n,
                demo_args.seed
            );
            let samples = exponential_cumsum(demo_args.n, demo_args.seed);
            let results = collect_results(&profile, &samples, "Synthetic noise", true);
            (results, demo_args.out, ReportMode::Both)
        }
    };

    if results.is_empty() {
        println!("No analysis produced a result; nothing to report.");
        return Ok(());
    }

    for result in &results {
        print!("{}", render_report_text(result));
    }
    if let Some(out_dir) = out_dir {
        write_reports(&results, &out_dir, report_mode).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Runs the requested analyses, surfacing any recoverable scoring error once
/// at the driver level instead of silently dropping it.
fn collect_results(
    profile: &SurmiseProfile,
    samples: &[f64],
    label: &str,
    resonance: bool,
) -> Vec<ScoreResult> {
    let mut results = Vec::new();
    match run_score(profile, samples, label) {
        Ok(result) => results.push(result),
        Err(err) => tracing::warn!("skipping standard analysis: {err}"),
    }
    if resonance {
        match run_resonance_scan(profile, samples) {
            Ok(result) => results.push(result),
            Err(err) => tracing::warn!("skipping resonance scan: {err}"),
        }
    }
    results
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Run(RunArgs),
    Demo(DemoArgs),
}

#[derive(Debug, Clone, PartialEq)]
struct RunArgs {
    input: PathBuf,
    out: Option<PathBuf>,
    report_mode: ReportMode,
    label: String,
    resonance: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct DemoArgs {
    n: usize,
    seed: u64,
    out: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    if args.is_empty() {
        return Err("missing command (use run|demo)".to_string());
    }
    let mut args = args.to_vec();
    let cmd = args.remove(0);
    match cmd.as_str() {
        "run" => parse_run_args(&args).map(Command::Run),
        "demo" => parse_demo_args(&args).map(Command::Demo),
        other => Err(format!("unsupported command: {}", other)),
    }
}

fn parse_run_args(args: &[String]) -> Result<RunArgs, String> {
    let mut input: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;
    let mut report_mode = ReportMode::Text;
    let mut label = "Sample".to_string();
    let mut resonance = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --input".to_string());
                }
                input = Some(PathBuf::from(&args[i]));
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --out".to_string());
                }
                out = Some(PathBuf::from(&args[i]));
            }
            "--mode" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --mode".to_string());
                }
                report_mode = match args[i].as_str() {
                    "text" => ReportMode::Text,
                    "json" => ReportMode::Json,
                    "both" => ReportMode::Both,
                    _ => return Err("invalid --mode (use text|json|both)".to_string()),
                };
            }
            "--label" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --label".to_string());
                }
                label = args[i].clone();
            }
            "--resonance" => {
                resonance = true;
            }
            other => {
                return Err(format!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(RunArgs {
        input: input.ok_or_else(|| "missing --input".to_string())?,
        out,
        report_mode,
        label,
        resonance,
    })
}

fn parse_demo_args(args: &[String]) -> Result<DemoArgs, String> {
    let mut n = 1000usize;
    let mut seed = 42u64;
    let mut out: Option<PathBuf> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--n" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --n".to_string());
                }
                n = args[i]
                    .parse::<usize>()
                    .map_err(|_| "invalid --n (expected a positive integer)".to_string())?;
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --seed".to_string());
                }
                seed = args[i]
                    .parse::<u64>()
                    .map_err(|_| "invalid --seed (expected an unsigned integer)".to_string())?;
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --out".to_string());
                }
                out = Some(PathBuf::from(&args[i]));
            }
            other => {
                return Err(format!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(DemoArgs { n, seed, out })
}
