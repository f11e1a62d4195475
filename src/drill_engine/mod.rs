//! Core drill engine: problem generation, difficulty adaptation, and session bookkeeping.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: difficulty, problems, records, transitions, config |
//! | `error`      | `DrillError` for configuration and log-writing failures |
//! | `helpers`    | Operand drawing and statement builders shared by every level |
//! | `levels`     | One generator per difficulty tier (easy, medium, hard) |
//! | `generator`  | `ProblemGenerator` and `generate_problem()`, dispatching to levels |
//! | `controller` | Momentum-based `DifficultyController` |
//! | `tracker`    | `SessionAggregator` and the derived `SessionSummary` |
//! | `session`    | `DrillSession`: the per-question loop and answer grading |
//! | `log`        | CSV question log |
//! | `report`     | JSON rendering of a session summary |

pub mod controller;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod levels;
pub mod log;
pub mod models;
pub mod report;
pub mod session;
pub mod tracker;

// Re-export the public API surface so callers can use
// `drill_engine::DrillSession` without reaching into sub-modules.
pub use controller::DifficultyController;
pub use error::DrillError;
pub use generator::{generate_problem, ProblemGenerator};
pub use log::{log_file_name, write_csv_log};
pub use models::{
    Difficulty, Feedback, Problem, ProblemKind, Question, QuestionRecord, SessionConfig,
    TransitionEvent,
};
pub use report::summary_json;
pub use session::{grade_answer, DrillSession};
pub use tracker::{SessionAggregator, SessionSummary};
