use rand::Rng;
use crate::drill_engine::{helpers, models::Problem};

#[derive(Debug, Clone, Copy)]
enum Kind {
    AddSub,
    Multiply,
    Divide,
}

const KINDS: [Kind; 3] = [Kind::AddSub, Kind::Multiply, Kind::Divide];

pub fn generate<R: Rng>(rng: &mut R) -> Problem {
    match helpers::pick(rng, &KINDS) {
        Kind::AddSub => {
            let op = helpers::pick_add_sub(rng);
            let (a, b) = helpers::operands(rng, 10..=99, 10..=99);
            helpers::add_sub(op, a, b)
        }
        Kind::Multiply => {
            let (a, b) = helpers::operands(rng, 10..=99, 2..=9);
            helpers::multiply(a, b)
        }
        Kind::Divide => {
            let (divisor, quotient) = helpers::operands(rng, 2..=9, 2..=12);
            helpers::divide(divisor, quotient)
        }
    }
}
