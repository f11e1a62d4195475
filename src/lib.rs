//! # math_drill_gen
//!
//! An offline, deterministic, adaptive-difficulty arithmetic drill.
//!
//! The library hands out arithmetic problems at one of three levels, watches
//! how quickly and how accurately they are answered, and moves the player up
//! or down a level when a smoothed "momentum" signal crosses a threshold.
//!
//! ## How it works
//!
//! 1. Build a [`SessionConfig`] with a starting level and an optional RNG seed.
//! 2. Call [`DrillSession::next_question`]: the generator builds a problem at
//!    the controller's current level. Subtraction never goes negative and
//!    division is always exact, by construction.
//! 3. Time the player, then hand the raw answer text to
//!    [`DrillSession::submit`]. The answer is graded, the
//!    [`DifficultyController`] updates its momentum, and the outcome plus any
//!    level change lands in the [`SessionAggregator`].
//! 4. [`DrillSession::summary`] computes accuracy and latency, overall and per
//!    level, together with the ordered list of level changes.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` replays the exact same problems.
//! - **Injectable randomness**: [`ProblemGenerator::new`] accepts any `rand::Rng`.
//! - **Plain records**: every answer is kept as a [`QuestionRecord`] and can be
//!   written out with [`write_csv_log`].
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{Difficulty, DrillSession, SessionConfig};
//!
//! let config = SessionConfig::new(Difficulty::Medium).with_seed(42);
//! let mut session = DrillSession::new(&config);
//!
//! let question = session.next_question();
//! println!("[Q{} | {}] {}", question.sequence, question.level, question.problem.statement);
//!
//! let feedback = session.submit(&question, &question.problem.answer.to_string(), 1.0);
//! assert!(feedback.correct);
//!
//! let summary = session.summary();
//! assert_eq!(summary.total_questions, 1);
//! assert_eq!(summary.accuracy, 1.0);
//! ```

pub mod drill_engine;

// Convenience re-exports so callers can use `math_drill_gen::DrillSession`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    generate_problem, grade_answer, log_file_name, summary_json, write_csv_log,
    Difficulty, DifficultyController, DrillError, DrillSession, Feedback, Problem,
    ProblemGenerator, ProblemKind, Question, QuestionRecord, SessionAggregator, SessionConfig,
    SessionSummary, TransitionEvent,
};
