use rand::Rng;
use crate::drill_engine::{
    helpers::{self, AddSub},
    models::Problem,
};

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Subtract,
    Multiply,
}

const OPS: [Op; 3] = [Op::Add, Op::Subtract, Op::Multiply];

pub fn generate<R: Rng>(rng: &mut R) -> Problem {
    let op = helpers::pick(rng, &OPS);
    let (a, b) = helpers::operands(rng, 1..=9, 1..=9);
    match op {
        Op::Add      => helpers::add_sub(AddSub::Plus, a, b),
        Op::Subtract => helpers::add_sub(AddSub::Minus, a, b),
        Op::Multiply => helpers::multiply(a, b),
    }
}
