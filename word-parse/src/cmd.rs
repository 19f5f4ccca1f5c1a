use crate::term::{self, Term};
use crate::Token;
use core::fmt::{self, Display};

/// Relation between two words or query for the normal form of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<S> {
    /// `l = r.`, or `l.` for `l = 1.`
    Relation(Term<S>, Term<S>),
    /// `? w.`
    Query(Term<S>),
}

impl<S: Display> Display for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Relation(l, Term::One) => write!(f, "{}.", l),
            Self::Relation(l, r) => write!(f, "{} = {}.", l, r),
            Self::Query(w) => write!(f, "? {}.", w),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Term(term::Error),
    ExpectedPeriod,
    ExpectedInput,
}

impl From<term::Error> for Error {
    fn from(err: term::Error) -> Self {
        Self::Term(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Term(e) => e.fmt(f),
            Self::ExpectedPeriod => "expected `.`".fmt(f),
            Self::ExpectedInput => "expected input".fmt(f),
        }
    }
}

impl<'s> Command<&'s str> {
    /// Parse a command whose first token has already been read.
    pub fn parse<I>(first: Token<'s>, iter: &mut I) -> Result<Self, Error>
    where
        I: Iterator<Item = Token<'s>>,
    {
        if first == Token::Query {
            return match Term::parse(iter)? {
                (w, Token::Dot) => Ok(Self::Query(w)),
                _ => Err(Error::ExpectedPeriod),
            };
        }
        let mut iter = core::iter::once(first).chain(iter);
        match Term::parse(&mut iter)? {
            (l, Token::Dot) => Ok(Self::Relation(l, Term::One)),
            (l, _eq) => match Term::parse(&mut iter)? {
                (r, Token::Dot) => Ok(Self::Relation(l, r)),
                _ => Err(Error::ExpectedPeriod),
            },
        }
    }

    pub fn parse_str(s: &'s str) -> Result<Self, Error> {
        let err = Err(Error::ExpectedInput);
        crate::CmdIter::new(s).next().unwrap_or(err)
    }
}

#[test]
fn positive() -> Result<(), Error> {
    Command::parse_str("a^3.")?;
    Command::parse_str("a b = b a.")?;
    Command::parse_str("(a b)^2 = 1.")?;
    Command::parse_str("? a b a^-1.")?;
    Command::parse_str("(; comment ;) g^2 = h^3 .")?;
    Ok(())
}

#[test]
fn negative() {
    use term::Error::*;
    use Error::*;
    let parse_err = |s: &str| Command::parse_str(s).unwrap_err();
    assert_eq!(parse_err(""), ExpectedInput);
    assert_eq!(parse_err("a = b = c."), ExpectedPeriod);
    assert_eq!(parse_err("? a = b."), ExpectedPeriod);
    assert_eq!(parse_err("a = ."), Term(ExpectedFactor));
    assert_eq!(parse_err("a b"), Term(UnexpectedEnd));
    assert_eq!(parse_err("a ? b."), Term(UnexpectedToken));
}

#[test]
fn display() -> Result<(), Error> {
    use alloc::string::ToString;
    let show = |s: &str| Command::parse_str(s).map(|cmd| cmd.to_string());
    assert_eq!(show("a^3 = 1 .")?, "a^3.");
    assert_eq!(show("a*b = b*a.")?, "a b = b a.");
    assert_eq!(show("?(a b)^-1.")?, "? (a b)^-1.");
    Ok(())
}
