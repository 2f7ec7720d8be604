/*
 * Puzzle plumbing shared by the binaries: locating and reading inputs,
 * reporting answers and setting up logging.
 * Prefer `./helpers.rs` for code extracted from solutions.
 */
use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing_subscriber::EnvFilter;

pub mod error;
pub mod helpers;
pub mod rope;

pub use error::{Error, Result};

pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Runs `$solver` on `$input` and prints the answer along with the time it
/// took. Evaluates to the solver's `Result` with the answer consumed, so the
/// caller decides what to do with a failure.
#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:ident, $input:expr) => {{
        use std::time::Instant;
        use $crate::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

        println!("🎄 {}Part {}{} 🎄", ANSI_BOLD, $part, ANSI_RESET);

        let timer = Instant::now();
        let result = $solver($input);
        let elapsed = timer.elapsed();

        result.map(|answer| {
            println!(
                "{} {}(elapsed: {:.2?}){}",
                answer, ANSI_ITALIC, elapsed, ANSI_RESET
            );
        })
    }};
}

/// Path of the puzzle file for `day` in `folder`, relative to the crate root:
/// `src/<folder>/<day>.txt` with the day zero-padded to two digits.
pub fn puzzle_path(folder: &str, day: u8) -> PathBuf {
    Path::new("src").join(folder).join(format!("{day:02}.txt"))
}

pub fn read_file(folder: &str, day: u8) -> Result<String> {
    let path = puzzle_path(folder, day);
    fs::read_to_string(&path).map_err(|err| Error::io(path, err))
}

/// Streams the lines of the file at `path` in file order, without their
/// line terminators.
///
/// Fails up front if the file can't be opened; each later read failure is
/// yielded in place of the line.
pub fn lines(path: impl AsRef<Path>) -> Result<impl Iterator<Item = Result<String>>> {
    let path = path.as_ref().to_path_buf();
    let file = File::open(&path).map_err(|err| Error::io(&path, err))?;

    Ok(BufReader::new(file)
        .lines()
        .map(move |line| line.map_err(|err| Error::io(&path, err))))
}

/// Installs the global `tracing` subscriber. Logs go to stderr, filtered by
/// `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Fails only if a global subscriber is already set, which then stays in
    // charge.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_path_pads_day() {
        assert_eq!(puzzle_path("inputs", 9), Path::new("src/inputs/09.txt"));
        assert_eq!(puzzle_path("examples", 12), Path::new("src/examples/12.txt"));
    }

    #[test]
    fn lines_strips_terminators() {
        let lines: Vec<String> = lines(puzzle_path("examples", 9))
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "R 4");
        assert_eq!(lines[7], "R 2");
    }

    #[test]
    fn init_tracing_twice_keeps_first_subscriber() {
        init_tracing();
        init_tracing();
        tracing::debug!("still logging");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = lines("src/examples/does-not-exist.txt").err().unwrap();
        assert!(matches!(err, Error::Io { .. }), "{err:?}");
        assert!(err.to_string().contains("does-not-exist.txt"));

        let err = read_file("examples", 0).unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "{err:?}");
    }
}
