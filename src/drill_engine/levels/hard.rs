use rand::Rng;
use crate::drill_engine::{helpers, models::Problem};

#[derive(Debug, Clone, Copy)]
enum Kind {
    Multiply,
    Divide,
    Mixed,
}

const KINDS: [Kind; 3] = [Kind::Multiply, Kind::Divide, Kind::Mixed];

pub fn generate<R: Rng>(rng: &mut R) -> Problem {
    match helpers::pick(rng, &KINDS) {
        Kind::Multiply => {
            let (a, b) = helpers::operands(rng, 12..=99, 12..=99);
            helpers::multiply(a, b)
        }
        Kind::Divide => {
            let (divisor, quotient) = helpers::operands(rng, 12..=25, 5..=50);
            helpers::divide(divisor, quotient)
        }
        Kind::Mixed => {
            let (a, b) = helpers::operands(rng, 10..=99, 1..=50);
            let c = rng.gen_range(2..=9);
            let op = helpers::pick_add_sub(rng);
            helpers::grouped(op, a, b, c)
        }
    }
}
