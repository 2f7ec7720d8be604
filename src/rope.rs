//! Rope physics on the integer grid.
//!
//! A rope is a [`Chain`] of knots. The head is moved one cell at a time by a
//! list of [`Move`]s and every other knot chases the knot ahead of it (see
//! [`follow`]). The [`Simulation`] records every position the last knot
//! visits.

use std::{collections::HashSet, fmt, num::NonZeroUsize, ops::RangeInclusive, str::FromStr};

use glam::IVec2;
use itertools::Itertools;
use smallvec::{smallvec, SmallVec};

use crate::{helpers::parse, Error, Result};

/// Knot count of the two-knot rope: a head and a tail.
pub const SHORT_ROPE: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(knots) => knots,
    None => unreachable!(),
};

/// Knot count of the ten-knot rope.
pub const LONG_ROPE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(knots) => knots,
    None => unreachable!(),
};

/// A position or displacement on the grid, with `x` increasing to the right
/// and `y` increasing going up.
pub type Vector = IVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl From<Direction> for Vector {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => IVec2::Y,
            Direction::Down => IVec2::NEG_Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// Largest distance a single move may have. Longer moves are rejected when
/// parsing.
pub const MAX_DISTANCE: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    pub distance: u32,
}

impl Move {
    /// Returns the head positions passed through when making this move from
    /// `start`, nearest first. `start` itself is not included.
    ///
    /// Panics if `distance` is larger than [`MAX_DISTANCE`]. Parsed moves
    /// never are.
    pub fn apply(self, start: Vector) -> Steps {
        let last = i32::try_from(self.distance).expect("move distance exceeds MAX_DISTANCE");
        Steps {
            start,
            unit: self.direction.into(),
            offsets: 1..=last,
        }
    }
}

impl FromStr for Move {
    type Err = parse::OwnedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::from_str(s, Move::parser()).map_err(|err| parse::to_owned(s, err))
    }
}

/// Iterator returned by [`Move::apply`].
#[derive(Debug, Clone)]
pub struct Steps {
    start: Vector,
    unit: Vector,
    offsets: RangeInclusive<i32>,
}

impl Iterator for Steps {
    type Item = Vector;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.offsets
            .next()
            .map(|offset| self.start + self.unit * offset)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.offsets.size_hint()
    }
}

/// Parses the move on line number `index` (0-based) of a move list.
pub fn parse_move(index: usize, line: &str) -> Result<Move> {
    let text = line.trim_end_matches(|c| c == '\r' || c == '\n');
    text.parse().map_err(|source| Error::Parse {
        line: index + 1,
        text: text.to_owned(),
        source,
    })
}

/// Parses a move list, one move per line.
pub fn moves(input: &str) -> impl Iterator<Item = Result<Move>> + '_ {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| parse_move(index, line))
}

/// Returns true if `a` and `b` overlap or are adjacent, diagonals included.
#[inline]
pub fn touching(a: Vector, b: Vector) -> bool {
    let distance = (a - b).abs();
    distance.x <= 1 && distance.y <= 1
}

/// Returns where `knot` ends up after the knot ahead of it moved to `ahead`.
///
/// A knot touching the one ahead stays put. Otherwise it takes one step
/// toward it: straight if they share a row or column, diagonally if not.
pub fn follow(knot: Vector, ahead: Vector) -> Vector {
    let relative = ahead - knot;

    let offset = if touching(knot, ahead) {
        Vector::ZERO
    } else if relative.x == 0 {
        Vector::new(0, relative.y.signum())
    } else if relative.y == 0 {
        Vector::new(relative.x.signum(), 0)
    } else {
        Vector::new(relative.x.signum(), relative.y.signum())
    };

    knot + offset
}

/// Knot positions, from the head (index 0) to the tail. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    knots: SmallVec<[Vector; 10]>,
}

impl Chain {
    /// A chain of `len` knots, all at the origin.
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            knots: smallvec![Vector::ZERO; len.get()],
        }
    }

    #[inline]
    pub fn knots(&self) -> &[Vector] {
        &self.knots
    }

    #[inline]
    pub fn head(&self) -> Vector {
        self.knots[0]
    }

    #[inline]
    pub fn tail(&self) -> Vector {
        self.knots[self.knots.len() - 1]
    }

    /// Returns the chain after its head moved to `head`.
    ///
    /// Knots are updated from the head down, each one following the already
    /// updated position of the knot ahead of it. Provided `head` is at most
    /// one cell away from the current head, the result is
    /// [taut](Self::is_taut) whenever `self` is.
    pub fn step(&self, head: Vector) -> Self {
        let mut ahead = head;
        let trailing = self.knots[1..].iter().map(|&knot| {
            ahead = follow(knot, ahead);
            ahead
        });

        Self {
            knots: std::iter::once(head).chain(trailing).collect(),
        }
    }

    /// Returns true if every pair of neighboring knots is touching.
    pub fn is_taut(&self) -> bool {
        self.knots
            .iter()
            .tuple_windows()
            .all(|(&a, &b)| touching(a, b))
    }
}

/// Replays moves on a chain and records each position its tail occupies.
#[derive(Debug, Clone)]
pub struct Simulation {
    chain: Chain,
    tail_visited: HashSet<Vector>,
    lower_bound: Vector,
    upper_bound: Vector,
    moves: usize,
    steps: usize,
}

impl Simulation {
    /// A simulation with every knot at the origin, which counts as visited.
    pub fn new(knots: NonZeroUsize) -> Self {
        const ZERO: Vector = Vector::ZERO;

        let mut tail_visited = HashSet::new();
        tail_visited.insert(ZERO);

        Self {
            chain: Chain::new(knots),
            tail_visited,
            lower_bound: ZERO,
            upper_bound: ZERO,
            moves: 0,
            steps: 0,
        }
    }

    /// Runs every move in order and returns the finished simulation.
    ///
    /// Stops at the first move that failed to read or parse and returns that
    /// error.
    #[tracing::instrument(level = "debug", skip(moves))]
    pub fn run<I>(knots: NonZeroUsize, moves: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Move>>,
    {
        let mut simulation = Self::new(knots);
        for motion in moves {
            simulation.do_move(motion?);
        }

        tracing::debug!(
            knots = knots.get(),
            moves = simulation.moves,
            steps = simulation.steps,
            tail_visited = simulation.tail_visited.len(),
            "simulation finished"
        );

        Ok(simulation)
    }

    /// Every chain state of a run, lazily: the initial chain, then the chain
    /// after each unit step of the head.
    ///
    /// A failed move is yielded once as an error and ends the stream.
    pub fn states<I>(knots: NonZeroUsize, moves: I) -> States<I::IntoIter>
    where
        I: IntoIterator<Item = Result<Move>>,
    {
        States {
            moves: Some(moves.into_iter()),
            chain: Chain::new(knots),
            steps: None,
            started: false,
        }
    }

    pub fn do_move(&mut self, motion: Move) {
        tracing::debug!(?motion, "move");
        self.moves += 1;

        for head in motion.apply(self.chain.head()) {
            self.move_head_to(head);
        }
    }

    #[inline]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Distinct positions the tail has visited so far.
    #[inline]
    pub fn tail_visited(&self) -> &HashSet<Vector> {
        &self.tail_visited
    }

    /// Number of moves applied so far.
    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Number of unit steps the head has taken.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Lower-left and upper-right corners of the box that holds every
    /// position any knot has occupied.
    #[inline]
    pub fn bounds(&self) -> (Vector, Vector) {
        (self.lower_bound, self.upper_bound)
    }

    /// Draws the positions the tail visited.
    pub fn trail(&self) -> Trail<'_> {
        Trail { simulation: self }
    }

    /// Ends the simulation, returning the number of distinct positions the
    /// tail visited.
    pub fn finish(self) -> usize {
        self.tail_visited.len()
    }

    fn move_head_to(&mut self, head: Vector) {
        self.chain = self.chain.step(head);
        self.steps += 1;

        for &knot in self.chain.knots() {
            self.lower_bound = self.lower_bound.min(knot);
            self.upper_bound = self.upper_bound.max(knot);
        }
        self.tail_visited.insert(self.chain.tail());

        tracing::trace!(knots = ?self.chain.knots(), "step");
        debug_assert!(self.chain.is_taut());
    }
}

/// Iterator returned by [`Simulation::states`].
#[derive(Debug)]
pub struct States<I> {
    /// `None` once a move failed.
    moves: Option<I>,
    chain: Chain,
    /// Head positions left in the current move.
    steps: Option<Steps>,
    /// `false` until the initial chain has been yielded.
    started: bool,
}

impl<I> Iterator for States<I>
where
    I: Iterator<Item = Result<Move>>,
{
    type Item = Result<Chain>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(Ok(self.chain.clone()));
        }

        loop {
            if let Some(head) = self.steps.as_mut().and_then(Iterator::next) {
                self.chain = self.chain.step(head);
                return Some(Ok(self.chain.clone()));
            }

            match self.moves.as_mut()?.next()? {
                Ok(motion) => self.steps = Some(motion.apply(self.chain.head())),
                Err(err) => {
                    self.moves = None;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// [`Display`](fmt::Display)s the tail's trail on the grid: `s` marks the
/// origin, `#` each other visited position. North is up.
pub struct Trail<'a> {
    simulation: &'a Simulation,
}

impl fmt::Display for Trail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lower, upper) = self.simulation.bounds();
        let visited = self.simulation.tail_visited();

        let mut first_line = true;
        for y in (lower.y..=upper.y).rev() {
            if !first_line {
                writeln!(f)?;
            }

            for x in lower.x..=upper.x {
                let pos = Vector::new(x, y);
                let c = if pos == Vector::ZERO {
                    's'
                } else if visited.contains(&pos) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }

            first_line = false;
        }

        Ok(())
    }
}

mod parsing {
    use super::*;

    use crate::helpers::parse;

    mod c {
        pub use combine::*;
    }

    use c::{error::StreamError, stream::StreamErrorFor, ParseError, Parser, Stream};

    impl Direction {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            c::one_of("DLRU".chars())
                .map(|c: char| match c {
                    'D' => Direction::Down,
                    'L' => Direction::Left,
                    'R' => Direction::Right,
                    'U' => Direction::Up,
                    _ => unreachable!(),
                })
                .expected("direction")
        }
    }

    impl Move {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let distance = parse::decimal_integer::<u32, _>().and_then(|distance| {
                if distance <= MAX_DISTANCE {
                    Ok(distance)
                } else {
                    Err(StreamErrorFor::<Input>::message_format(format!(
                        "distance {distance} is larger than {MAX_DISTANCE}"
                    )))
                }
            });

            // "L 5"
            (Direction::parser(), c::token(' '), distance).map(
                |(direction, _, distance)| Move {
                    direction,
                    distance,
                },
            )
        }
    }
}
