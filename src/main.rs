use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::{bail, Context};
use pico_args::Arguments;

use rope_bridge::rope::{self, Simulation, SHORT_ROPE};

const HELP: &str = "\
Counts the distinct cells visited by the tail of a rope dragged by a list of moves.

USAGE:
  rope_bridge [OPTIONS] [INPUT]

ARGS:
  [INPUT]               Move list, one `<U|D|L|R> <distance>` per line [default: src/inputs/09.txt]

OPTIONS:
  -k, --knots <N>       Number of knots in the rope, head included [default: 2]
      --render          Draw the cells visited by the tail
  -h, --help            Print help
";

#[derive(Debug)]
struct Args {
    knots: NonZeroUsize,
    render: bool,
    input: PathBuf,
}

/// Returns `None` if help was requested.
fn parse_args(mut args: Arguments) -> anyhow::Result<Option<Args>> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let knots = args
        .opt_value_from_str(["-k", "--knots"])?
        .unwrap_or(SHORT_ROPE);
    let render = args.contains("--render");
    let input = args
        .opt_free_from_str()?
        .unwrap_or_else(|| rope_bridge::puzzle_path("inputs", 9));

    let remaining = args.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }

    Ok(Some(Args {
        knots,
        render,
        input,
    }))
}

fn main() -> anyhow::Result<()> {
    rope_bridge::init_tracing();

    let Some(args) = parse_args(Arguments::from_env())? else {
        print!("{HELP}");
        return Ok(());
    };
    tracing::debug!(?args, "parsed arguments");

    let moves = rope_bridge::lines(&args.input)
        .context("could not open move list")?
        .enumerate()
        .map(|(index, line)| line.and_then(|line| rope::parse_move(index, &line)));

    let simulation = Simulation::run(args.knots, moves)
        .with_context(|| format!("could not simulate {}", args.input.display()))?;

    let trail = args.render.then(|| simulation.trail().to_string());
    println!("Different positions: {}", simulation.finish());
    if let Some(trail) = trail {
        println!("{trail}");
    }

    Ok(())
}
