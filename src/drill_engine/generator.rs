use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::drill_engine::{
    levels,
    models::{Difficulty, Problem},
};

/// Core dispatch: routes to the correct level module.
pub fn generate_problem<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    match difficulty {
        Difficulty::Easy   => levels::easy::generate(rng),
        Difficulty::Medium => levels::medium::generate(rng),
        Difficulty::Hard   => levels::hard::generate(rng),
    }
}

/// Produces arithmetic problems from an injected random source.
///
/// Nothing besides the RNG's position carries over between calls, so two
/// generators built from the same seed hand out the same problems.
#[derive(Debug, Clone)]
pub struct ProblemGenerator<R = StdRng> {
    rng: R,
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R) -> Self {
        ProblemGenerator { rng }
    }

    pub fn generate(&mut self, difficulty: Difficulty) -> Problem {
        generate_problem(&mut self.rng, difficulty)
    }
}

impl ProblemGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        ProblemGenerator::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        ProblemGenerator::new(StdRng::from_entropy())
    }

    /// `Some(seed)` for a reproducible stream, `None` for entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => ProblemGenerator::seeded(seed),
            None       => ProblemGenerator::from_entropy(),
        }
    }
}
