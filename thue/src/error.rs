//! Common error type.

use alloc::string::String;
use core::fmt::{self, Display};
use word_parse::term::Error as TermError;
use word_parse::Error as ParseError;

/// Common error type.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// an atom name was empty or blank
    InvalidAtomName(String),
    /// completion did not reach a fixpoint within the given number of rounds
    CompletionOverflow { rounds: usize },
    /// an exponent or the size of a word does not fit into an `i64`
    ExponentOverflow,
    Parse(ParseError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<TermError> for Error {
    fn from(err: TermError) -> Self {
        Self::Parse(ParseError::from(err))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidAtomName(name) => write!(f, "invalid atom name {:?}", name),
            Self::CompletionOverflow { rounds } => {
                write!(f, "completion did not terminate after {} rounds", rounds)
            }
            Self::ExponentOverflow => write!(f, "exponent overflow"),
            Self::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}
