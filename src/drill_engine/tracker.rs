use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drill_engine::models::{Difficulty, QuestionRecord, TransitionEvent};

/// Read-only statistics derived from a session's records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_questions: usize,
    /// Fraction in `[0, 1]`; 0.0 for an empty session.
    pub accuracy: f64,
    pub avg_time_s: f64,
    /// Only levels with at least one question appear.
    pub accuracy_by_level: BTreeMap<Difficulty, f64>,
    pub avg_time_by_level: BTreeMap<Difficulty, f64>,
    /// Chronological, e.g. `"Easy -> Medium (Q4)"`.
    pub transitions: Vec<String>,
}

/// Append-only log of answered questions and level changes.
#[derive(Debug, Clone, Default)]
pub struct SessionAggregator {
    records: Vec<QuestionRecord>,
    transitions: Vec<TransitionEvent>,
}

#[derive(Default)]
struct LevelTally {
    count: usize,
    correct: usize,
    time_s: f64,
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        sequence: u32,
        statement: impl Into<String>,
        level: Difficulty,
        raw_answer: impl Into<String>,
        correct: bool,
        response_time_s: f64,
    ) {
        let record = QuestionRecord {
            sequence,
            statement: statement.into(),
            level,
            raw_answer: raw_answer.into(),
            correct,
            response_time_s,
        };
        debug!(sequence, level = %level, correct, response_time_s, "question recorded");
        self.records.push(record);
    }

    /// Log a level change taking effect at `effective_sequence`.
    /// A "change" to the same level is ignored.
    pub fn note_transition(&mut self, from: Difficulty, to: Difficulty, effective_sequence: u32) {
        if from == to {
            return;
        }
        self.transitions.push(TransitionEvent { from, to, effective_sequence });
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn transitions(&self) -> &[TransitionEvent] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> SessionSummary {
        let mut tallies: BTreeMap<Difficulty, LevelTally> = BTreeMap::new();
        for r in &self.records {
            let t = tallies.entry(r.level).or_default();
            t.count += 1;
            t.time_s += r.response_time_s;
            if r.correct {
                t.correct += 1;
            }
        }

        let total = self.records.len();
        let correct: usize = tallies.values().map(|t| t.correct).sum();
        let time_s: f64 = tallies.values().map(|t| t.time_s).sum();

        SessionSummary {
            total_questions: total,
            accuracy: ratio(correct as f64, total),
            avg_time_s: ratio(time_s, total),
            accuracy_by_level: tallies
                .iter()
                .map(|(&lvl, t)| (lvl, ratio(t.correct as f64, t.count)))
                .collect(),
            avg_time_by_level: tallies
                .iter()
                .map(|(&lvl, t)| (lvl, ratio(t.time_s, t.count)))
                .collect(),
            transitions: self.transitions.iter().map(|t| t.to_string()).collect(),
        }
    }
}

fn ratio(numerator: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        numerator / count as f64
    }
}
