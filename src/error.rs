use std::{io, path::PathBuf};

use crate::helpers::parse::OwnedParseError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line that is not of the form `<U|D|L|R> <distance>`.
    #[error("line {line} ({text:?}) is not a valid move")]
    Parse {
        /// 1-based line number.
        line: usize,
        text: String,
        #[source]
        source: OwnedParseError,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
