#![doc = include_str!("../puzzles/09.md")]

use std::num::NonZeroUsize;

use anyhow::Context;

use rope_bridge::{
    rope::{self, Simulation, LONG_ROPE, SHORT_ROPE},
    Result,
};

/// Returns the number of cells visited by the tail of a rope with `knots`
/// knots.
fn tail_visited_positions(input: &str, knots: NonZeroUsize) -> Result<usize> {
    let simulation = Simulation::run(knots, rope::moves(input))?;
    Ok(simulation.finish())
}

pub fn part_one(input: &str) -> Result<usize> {
    tail_visited_positions(input, SHORT_ROPE)
}

pub fn part_two(input: &str) -> Result<usize> {
    tail_visited_positions(input, LONG_ROPE)
}

fn main() -> anyhow::Result<()> {
    rope_bridge::init_tracing();

    let input = &rope_bridge::read_file("inputs", 9).context("could not load puzzle input")?;
    rope_bridge::solve!(1, part_one, input).context("part one failed")?;
    rope_bridge::solve!(2, part_two, input).context("part two failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = rope_bridge::read_file("examples", 9).unwrap();
        assert_eq!(part_one(&input).unwrap(), 13);
    }

    #[test]
    fn test_part_two() {
        let input = rope_bridge::read_file("examples", 9).unwrap();
        assert_eq!(part_two(&input).unwrap(), 1);
    }
}
