use admissions::{AdmissionOrchestrator, AdmissionOutcome, Stage};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::observers::{ConsoleNotifier, TracingNotifier};
use roster::{CandidateId, Roster};
use sources::{random_roster, RecordedSource, SimulatedSource, StageInputSource};
use std::io;
use std::path::PathBuf;

mod prompt;

use prompt::ConsolePrompter;

/// Admissions - staged candidate admission workflow
#[derive(Parser)]
#[command(name = "admissions")]
#[command(about = "Filter applicants through eligibility, fee, test and interview gates", long_about = None)]
struct Cli {
    /// Log notifications through tracing instead of printing them
    #[arg(long, global = true)]
    quiet: bool,

    /// Default log filter when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter applicants and stage results at the console
    Interactive {
        /// Number of applicants to enter
        #[arg(long, default_value = "20")]
        count: usize,
    },

    /// Run a round from a roster file with recorded stage results
    Run {
        /// Roster file (name::matric::fsc::fee_paid::test_score::interview_score)
        #[arg(long)]
        roster: PathBuf,

        /// Print the merit list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a round over random applicants
    Simulate {
        /// Number of applicants to generate
        #[arg(long, default_value = "20")]
        count: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Print the merit list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Interactive { count } => handle_interactive(count, cli.quiet)?,
        Commands::Run { roster, json } => handle_run(roster, json, cli.quiet)?,
        Commands::Simulate { count, seed, json } => handle_simulate(count, seed, json, cli.quiet)?,
    }

    Ok(())
}

/// Handle the 'interactive' command
fn handle_interactive(count: usize, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut console = ConsolePrompter::new(stdin.lock(), io::stdout());

    println!("Enter data for {count} students (name, matric marks, FSC marks):");
    let mut roster = Roster::new();
    for _ in 0..count {
        roster.insert(console.ask_applicant()?.to_candidate());
    }

    let orchestrator = AdmissionOrchestrator::new(roster, &mut console)
        .with_filtering_hook(|stage| println!("\n{}", filtering_banner(stage)));
    let mut orchestrator = with_notifier(orchestrator, quiet);

    let eligible = orchestrator.screen_eligibility(orchestrator.roster().ids())?;
    print_candidates(stage_heading(Stage::Eligibility), orchestrator.roster(), &eligible);

    println!("\nEnter fee submission status for eligible students:");
    let fee_paid = orchestrator.collect_fees(eligible)?;
    print_candidates(stage_heading(Stage::FeeSubmission), orchestrator.roster(), &fee_paid);

    println!("\nEnter test scores for students who submitted fee:");
    let shortlist = orchestrator.grade_tests(fee_paid)?;
    print_candidates(stage_heading(Stage::Test), orchestrator.roster(), &shortlist);

    println!("\nEnter interview scores for students eligible for interview:");
    let merit = orchestrator.rank_interviews(shortlist)?;
    print_candidates(stage_heading(Stage::Interview), orchestrator.roster(), &merit);

    Ok(())
}

/// Handle the 'run' command
fn handle_run(path: PathBuf, json: bool, quiet: bool) -> Result<()> {
    let entries = roster::parse_roster(&path)
        .with_context(|| format!("Failed to load roster {}", path.display()))?;
    tracing::info!("Loaded {} applicants from {}", entries.len(), path.display());

    let roster = Roster::from_entries(&entries);
    let orchestrator = AdmissionOrchestrator::new(roster, RecordedSource::new(entries));
    run_round(orchestrator, json, quiet)
}

/// Handle the 'simulate' command
fn handle_simulate(count: usize, seed: u64, json: bool, quiet: bool) -> Result<()> {
    let roster = Roster::from_entries(&random_roster(count, seed));
    let orchestrator = AdmissionOrchestrator::new(roster, SimulatedSource::new(seed));
    run_round(orchestrator, json, quiet)
}

fn run_round<S: StageInputSource>(
    orchestrator: AdmissionOrchestrator<S>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let mut orchestrator = with_notifier(orchestrator, quiet);
    let outcome = orchestrator.run()?;

    if json {
        let merit = outcome.merit_candidates(orchestrator.roster());
        println!("{}", serde_json::to_string_pretty(&merit)?);
    } else {
        print_outcome(&outcome, orchestrator.roster());
    }
    Ok(())
}

fn with_notifier<S: StageInputSource>(
    orchestrator: AdmissionOrchestrator<S>,
    quiet: bool,
) -> AdmissionOrchestrator<S> {
    if quiet {
        orchestrator.with_observer(TracingNotifier)
    } else {
        orchestrator.with_observer(ConsoleNotifier::new())
    }
}

/// Printed once a stage's inputs are in, ahead of its notifications
fn filtering_banner(stage: Stage) -> &'static str {
    match stage {
        Stage::Eligibility => "Filtering students based on eligibility...",
        Stage::FeeSubmission => "Filtering students who submitted fee...",
        Stage::Test => "Filtering students who passed the test...",
        Stage::Interview => "Selecting top 3 students based on interview scores...",
    }
}

fn stage_heading(stage: Stage) -> &'static str {
    match stage {
        Stage::Eligibility => "Eligible students:",
        Stage::FeeSubmission => "Students who submitted the fee:",
        Stage::Test => "Students eligible for the interview:",
        Stage::Interview => "Merit List:",
    }
}

/// Helper function to print one stage's survivors
fn print_candidates(heading: &str, roster: &Roster, ids: &[CandidateId]) {
    println!("{}", heading.bold().blue());
    if ids.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for candidate in roster.resolve(ids) {
        println!("{candidate}");
    }
}

fn print_outcome(outcome: &AdmissionOutcome, roster: &Roster) {
    for stage in [Stage::Eligibility, Stage::FeeSubmission, Stage::Test] {
        print_candidates(stage_heading(stage), roster, outcome.survivors(stage));
        println!();
    }

    println!("{}", stage_heading(Stage::Interview).bold().blue());
    if outcome.merit_list.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (rank, candidate) in outcome.merit_candidates(roster).iter().enumerate() {
        println!(
            "{}. {} - Interview: {:.1}, Test: {:.1}",
            (rank + 1).to_string().green(),
            candidate,
            candidate.interview_score,
            candidate.test_score
        );
    }
}
