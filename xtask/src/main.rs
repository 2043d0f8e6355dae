use std::io::Write;
use std::process::{exit, Command, ExitStatus, Stdio};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride-matching workspace",
    long_about = "A unified CLI for running the interactive marketplace, benchmarks,\n\
                  and CI checks in the ride-matching workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive ride-cli session
    Run {
        /// Fixed salt seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Print a JSON platform snapshot on exit
        #[arg(long)]
        summary: bool,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, smoke session, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Drive ride-cli through a scripted session
    Smoke,
    /// Run benchmarks
    Bench,
    /// Run check + smoke + bench
    All,
}

/// Registers a driver with one offer, then a rider who books and accepts that ride.
const SMOKE_SCRIPT: &[&str] = &[
    "d", "yes", "alice", "pw", "alice", "pw", "Downtown", "no",
    "r", "yes", "bob", "pw", "bob", "pw", "Downtown", "0", "yes", "yes",
];

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

/// Run cargo with `input` piped to the child's stdin; returns captured stdout.
fn run_cargo_with_stdin(args: &[&str], input: &str) -> String {
    eprintln!("+ cargo {} < script", args.join(" "));
    let mut child = Command::new("cargo")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to execute cargo");

    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(input.as_bytes())
        .expect("failed to write session script");

    let output = child.wait_with_output().expect("failed to wait for cargo");
    if !output.status.success() {
        exit(output.status.code().unwrap_or(1));
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test ride_core");
    run_cargo(&["test", "-p", "ride_core"]);

    step("Test ride_cli");
    run_cargo(&["test", "-p", "ride_cli"]);
}

fn ci_smoke() {
    step("Scripted ride-cli session");
    let mut script = SMOKE_SCRIPT.join("\n");
    script.push('\n');
    let stdout = run_cargo_with_stdin(
        &["run", "-q", "-p", "ride_cli", "--", "--seed", "1", "--summary"],
        &script,
    );

    for expected in ["Ride request accepted. Enjoy your ride!", "\"confirmed_ride\""] {
        if !stdout.contains(expected) {
            eprintln!("smoke session output is missing `{expected}`:\n{stdout}");
            exit(1);
        }
    }
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "ride_core", "--bench", "performance"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { seed, summary } => {
            let seed = seed.map(|s| s.to_string());
            let mut args = vec!["run", "-p", "ride_cli", "--"];
            if let Some(seed) = seed.as_deref() {
                args.extend(["--seed", seed]);
            }
            if summary {
                args.push("--summary");
            }
            run_cargo(&args);
        }
        Commands::Bench => ci_bench(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Smoke => ci_smoke(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_smoke();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
