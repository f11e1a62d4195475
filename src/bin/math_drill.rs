//! math_drill - adaptive arithmetic practice in the terminal
//!
//! Asks questions one at a time, adapts the level to how fast and how
//! accurately they are answered, prints a summary and saves a CSV log.

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use math_drill_gen::{
    log_file_name, summary_json, write_csv_log, Difficulty, DrillSession, SessionConfig,
    SessionSummary,
};

/// Adaptive arithmetic drill
#[derive(Parser)]
#[command(name = "math_drill")]
#[command(about = "Adaptive arithmetic practice - the level follows your speed and accuracy", long_about = None)]
#[command(version)]
struct Cli {
    /// Player name, used in the summary and the log file name
    #[arg(long, default_value = "Player")]
    name: String,

    /// Starting level: Easy, Medium or Hard
    #[arg(long, default_value = "Easy")]
    level: Difficulty,

    /// Number of questions to ask
    #[arg(long, default_value_t = SessionConfig::DEFAULT_QUESTION_COUNT)]
    count: u32,

    /// Seed for reproducible problems
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the CSV log is written to
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Do not write a CSV log
    #[arg(long)]
    no_log: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let started = chrono::Local::now().naive_local();

    let mut config = SessionConfig::new(cli.level).with_question_count(cli.count);
    config.rng_seed = cli.seed;
    let mut session = DrillSession::new(&config);

    println!("=== Math Drill - Adaptive Practice ===");
    println!("Type your answer and press Enter. Type 'q' anytime to stop.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    for _ in 0..config.question_count {
        let question = session.next_question();
        println!("[Q{} | {}]  {}", question.sequence, question.level, question.problem.statement);
        print!("> ");
        io::stdout().flush()?;

        let asked_at = Instant::now();
        let Some(line) = lines.next() else { break };
        let raw = line.context("failed to read answer")?;
        let elapsed = asked_at.elapsed().as_secs_f64();
        if raw.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let feedback = session.submit(&question, raw.trim(), elapsed);
        if feedback.correct {
            println!("Correct!  (Time: {elapsed:.1}s)");
        } else {
            println!("Oops, the answer was {}  (Time: {elapsed:.1}s)", feedback.expected);
        }
        if let Some(t) = feedback.transition {
            println!("-> Adapting difficulty: {}", t.to);
        }
        println!();
    }

    let summary = session.summary();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary_json(&summary, session.recommended_level()))?);
    } else {
        print_summary(&cli.name, &summary, session.recommended_level());
    }

    if !cli.no_log {
        fs::create_dir_all(&cli.log_dir)
            .with_context(|| format!("failed to create {}", cli.log_dir.display()))?;
        let path = cli.log_dir.join(log_file_name(&cli.name, started));
        let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        write_csv_log(session.records(), BufWriter::new(file))?;
        info!(path = %path.display(), records = session.answered(), "question log written");
        println!("\nLog saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(name: &str, summary: &SessionSummary, recommended: Difficulty) {
    println!("==== Session Summary ====");
    println!("Player: {name}");
    println!("Questions answered: {}", summary.total_questions);
    println!("Accuracy: {:.1}%", summary.accuracy * 100.0);
    println!("Average time/question: {:.2}s", summary.avg_time_s);
    println!("Accuracy by level:");
    for (level, acc) in &summary.accuracy_by_level {
        println!("  - {level}: {:.1}%", acc * 100.0);
    }
    println!("Avg time by level:");
    for (level, t) in &summary.avg_time_by_level {
        println!("  - {level}: {t:.2}s");
    }
    if !summary.transitions.is_empty() {
        println!("Difficulty transitions: {}", summary.transitions.join(", "));
    }
    println!("Next recommended level: {recommended}");
}
