//! One drill session: generator, controller and aggregator wired together.
//!
//! The caller asks for a question, times the player, and submits the raw
//! answer text. Grading, level adaptation and bookkeeping happen here; the
//! caller only deals with I/O.

use rand::{rngs::StdRng, Rng};
use tracing::info;

use crate::drill_engine::{
    controller::DifficultyController,
    generator::ProblemGenerator,
    models::{Difficulty, Feedback, Question, QuestionRecord, SessionConfig, TransitionEvent},
    tracker::{SessionAggregator, SessionSummary},
};

/// `true` when `raw` is an integer equal to `expected`.
/// Anything that does not parse is simply wrong.
pub fn grade_answer(raw: &str, expected: i64) -> bool {
    raw.trim().parse::<i64>().map_or(false, |v| v == expected)
}

pub struct DrillSession<R = StdRng> {
    generator: ProblemGenerator<R>,
    controller: DifficultyController,
    aggregator: SessionAggregator,
    asked: u32,
}

impl DrillSession<StdRng> {
    pub fn new(config: &SessionConfig) -> Self {
        info!(start = %config.start_level, seeded = config.rng_seed.is_some(), "session started");
        DrillSession::from_parts(
            ProblemGenerator::from_seed_option(config.rng_seed),
            config.start_level,
        )
    }
}

impl<R: Rng> DrillSession<R> {
    pub fn with_rng(start_level: Difficulty, rng: R) -> Self {
        DrillSession::from_parts(ProblemGenerator::new(rng), start_level)
    }

    fn from_parts(generator: ProblemGenerator<R>, start_level: Difficulty) -> Self {
        DrillSession {
            generator,
            controller: DifficultyController::new(start_level),
            aggregator: SessionAggregator::new(),
            asked: 0,
        }
    }

    /// Generate the next question at the controller's current level.
    pub fn next_question(&mut self) -> Question {
        self.asked += 1;
        let level = self.controller.current_level();
        Question {
            sequence: self.asked,
            level,
            problem: self.generator.generate(level),
        }
    }

    /// Grade `raw_answer`, adapt the level, and record the outcome.
    ///
    /// A level change is logged against the question *after* this one, since
    /// that is the first question asked at the new level.
    pub fn submit(&mut self, question: &Question, raw_answer: &str, response_time_s: f64) -> Feedback {
        let correct = grade_answer(raw_answer, question.problem.answer);
        self.aggregator.record(
            question.sequence,
            question.problem.statement.as_str(),
            question.level,
            raw_answer,
            correct,
            response_time_s,
        );

        let previous_level = self.controller.update(correct, response_time_s);
        let current_level = self.controller.current_level();
        let transition = (previous_level != current_level).then(|| TransitionEvent {
            from: previous_level,
            to: current_level,
            effective_sequence: question.sequence + 1,
        });
        if let Some(t) = transition {
            self.aggregator.note_transition(t.from, t.to, t.effective_sequence);
        }

        Feedback {
            correct,
            expected: question.problem.answer,
            previous_level,
            current_level,
            transition,
        }
    }

    pub fn current_level(&self) -> Difficulty {
        self.controller.current_level()
    }

    /// Level to start the player at next time.
    pub fn recommended_level(&self) -> Difficulty {
        self.controller.current_level()
    }

    pub fn momentum(&self) -> f64 {
        self.controller.momentum()
    }

    pub fn answered(&self) -> usize {
        self.aggregator.len()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        self.aggregator.records()
    }

    pub fn summary(&self) -> SessionSummary {
        self.aggregator.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn grading_trims_and_rejects_non_numbers() {
        assert!(grade_answer("42", 42));
        assert!(grade_answer("  42\n", 42));
        assert!(grade_answer("-3", -3));
        assert!(!grade_answer("41", 42));
        assert!(!grade_answer("forty-two", 42));
        assert!(!grade_answer("", 42));
        assert!(!grade_answer("4 2", 42));
    }

    #[test]
    fn questions_are_numbered_from_one() {
        let mut s = DrillSession::with_rng(Difficulty::Easy, StdRng::seed_from_u64(3));
        assert_eq!(s.next_question().sequence, 1);
        assert_eq!(s.next_question().sequence, 2);
    }

    #[test]
    fn transition_takes_effect_on_the_next_question() {
        let mut s = DrillSession::with_rng(Difficulty::Medium, StdRng::seed_from_u64(11));

        let q1 = s.next_question();
        let f1 = s.submit(&q1, &q1.problem.answer.to_string(), 1.0);
        assert!(f1.correct);
        assert_eq!(f1.transition, None);

        let q2 = s.next_question();
        assert_eq!(q2.level, Difficulty::Medium);
        let f2 = s.submit(&q2, &q2.problem.answer.to_string(), 1.0);
        assert_eq!(f2.previous_level, Difficulty::Medium);
        assert_eq!(f2.current_level, Difficulty::Hard);
        assert_eq!(
            f2.transition,
            Some(TransitionEvent {
                from: Difficulty::Medium,
                to: Difficulty::Hard,
                effective_sequence: 3,
            })
        );

        let q3 = s.next_question();
        assert_eq!(q3.sequence, 3);
        assert_eq!(q3.level, Difficulty::Hard);

        let summary = s.summary();
        assert_eq!(summary.transitions, vec!["Medium -> Hard (Q3)".to_string()]);
        assert_eq!(s.records()[1].level, Difficulty::Medium);
    }

    #[test]
    fn garbage_answer_is_recorded_as_wrong() {
        let mut s = DrillSession::with_rng(Difficulty::Easy, StdRng::seed_from_u64(5));
        let q = s.next_question();
        let f = s.submit(&q, "no idea", 2.0);
        assert!(!f.correct);
        assert_eq!(f.expected, q.problem.answer);
        assert_eq!(s.records()[0].raw_answer, "no idea");
        assert_eq!(s.summary().accuracy, 0.0);
    }
}
