use std::fmt::{self, Display};
use std::io;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Parse(word_parse::Error),
    Thue(thue::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<word_parse::Error> for Error {
    fn from(err: word_parse::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<thue::Error> for Error {
    fn from(err: thue::Error) -> Self {
        Self::Thue(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::Thue(e) => e.fmt(f),
        }
    }
}
