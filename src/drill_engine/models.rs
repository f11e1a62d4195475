use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::drill_engine::error::DrillError;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// One of the three drill tiers, ordered Easy < Medium < Hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Position in the tier order: Easy = 0, Medium = 1, Hard = 2.
    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy   => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard   => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Difficulty> {
        Difficulty::ALL.get(index).copied()
    }

    /// Expected response latency in seconds for a question at this tier.
    pub fn target_time_s(self) -> f64 {
        match self {
            Difficulty::Easy   => 5.0,
            Difficulty::Medium => 7.0,
            Difficulty::Hard   => 10.0,
        }
    }

    /// The next tier up, or `None` at Hard.
    pub fn harder(self) -> Option<Difficulty> {
        Difficulty::from_index(self.index() + 1)
    }

    /// The next tier down, or `None` at Easy.
    pub fn easier(self) -> Option<Difficulty> {
        self.index().checked_sub(1).and_then(Difficulty::from_index)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard"   => Ok(Difficulty::Hard),
            _ => Err(DrillError::UnknownDifficulty(s.trim().to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Problems
// ---------------------------------------------------------------------------

/// Which generation rule produced a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `(a ± b) × c`
    Mixed,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProblemKind::Add      => "addition",
            ProblemKind::Subtract => "subtraction",
            ProblemKind::Multiply => "multiplication",
            ProblemKind::Divide   => "division",
            ProblemKind::Mixed    => "mixed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Human-readable statement, e.g. `"(42 - 17) × 3 = ?"`.
    pub statement: String,
    pub answer: i64,
    pub kind: ProblemKind,
}

/// A problem handed out by a session, tagged with where and when it was asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position in the session.
    pub sequence: u32,
    pub level: Difficulty,
    pub problem: Problem,
}

// ---------------------------------------------------------------------------
// Session records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub sequence: u32,
    pub statement: String,
    pub level: Difficulty,
    /// Exactly what the player typed, kept even when it did not parse.
    pub raw_answer: String,
    pub correct: bool,
    pub response_time_s: f64,
}

/// A level change. `effective_sequence` is the first question asked at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub from: Difficulty,
    pub to: Difficulty,
    pub effective_sequence: u32,
}

impl fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (Q{})", self.from, self.to, self.effective_sequence)
    }
}

/// Outcome of submitting one answer to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: bool,
    pub expected: i64,
    /// Level the answered question was asked at.
    pub previous_level: Difficulty,
    /// Level the next question will be asked at.
    pub current_level: Difficulty,
    pub transition: Option<TransitionEvent>,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub start_level: Difficulty,
    /// How many questions the front end should ask before stopping.
    pub question_count: u32,
    /// `Some(seed)` makes the whole session reproducible.
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    pub const DEFAULT_QUESTION_COUNT: u32 = 10;

    /// Ten questions at `start_level`, seeded from entropy.
    pub fn new(start_level: Difficulty) -> Self {
        SessionConfig {
            start_level,
            question_count: Self::DEFAULT_QUESTION_COUNT,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_question_count(mut self, count: u32) -> Self {
        self.question_count = count;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::new(Difficulty::Easy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Medium ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "expert".parse::<Difficulty>(),
            Err(DrillError::UnknownDifficulty(name)) if name == "expert"
        ));
    }

    #[test]
    fn difficulty_neighbours_stop_at_the_ends() {
        assert_eq!(Difficulty::Easy.easier(), None);
        assert_eq!(Difficulty::Easy.harder(), Some(Difficulty::Medium));
        assert_eq!(Difficulty::Hard.harder(), None);
        assert_eq!(Difficulty::Hard.easier(), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_index(3), None);
    }

    #[test]
    fn transition_displays_with_question_number() {
        let t = TransitionEvent {
            from: Difficulty::Easy,
            to: Difficulty::Medium,
            effective_sequence: 4,
        };
        assert_eq!(t.to_string(), "Easy -> Medium (Q4)");
    }
}
