use crate::Token;
use alloc::{boxed::Box, vec::Vec};
use core::fmt::{self, Display};
use itertools::Itertools;

/// Word as written, before any normalisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term<S> {
    /// `1`
    One,
    /// `a`
    Atom(S),
    /// `t^n`
    Pow(Box<Self>, i64),
    /// `t1 t2 ... tn` or `t1 * ... * tn`
    Prod(Vec<Self>),
}

impl<S> Term<S> {
    fn take_children(&mut self, stack: &mut Vec<Self>) {
        match self {
            Self::Pow(tm, _) => stack.push(core::mem::replace(&mut **tm, Self::One)),
            Self::Prod(tms) => stack.append(tms),
            Self::One | Self::Atom(_) => (),
        }
    }

    fn from_factors(mut factors: Vec<Self>) -> Self {
        if factors.len() == 1 {
            factors.pop().unwrap_or(Self::One)
        } else {
            Self::Prod(factors)
        }
    }
}

/// Drop subterms iteratively, so that deeply nested terms do not exhaust the stack.
impl<S> Drop for Term<S> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut tm) = stack.pop() {
            tm.take_children(&mut stack);
        }
    }
}

impl<S: Display> Display for Term<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Atom(s) => s.fmt(f),
            Self::Pow(tm, n) => match **tm {
                Self::Prod(_) => write!(f, "({})^{}", tm, n),
                _ => write!(f, "{}^{}", tm, n),
            },
            Self::Prod(tms) => write!(f, "{}", tms.iter().format(" ")),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    ExpectedFactor,
    ExpectedExponent,
    UnclosedLPar,
    UnexpectedRPar,
    UnexpectedToken,
    UnexpectedEnd,
    InvalidToken,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::ExpectedFactor => "expected atom, `1`, or `(`",
            Self::ExpectedExponent => "expected integer exponent after `^`",
            Self::UnclosedLPar => "unclosed `(`",
            Self::UnexpectedRPar => "unexpected `)`",
            Self::UnexpectedToken => "unexpected token",
            Self::UnexpectedEnd => "unexpected end of input",
            Self::InvalidToken => "invalid token",
        };
        s.fmt(f)
    }
}

type Result<T> = core::result::Result<T, Error>;

/// Factors of a word whose last factor may still receive an exponent.
#[derive(Debug)]
struct Factors<S> {
    done: Vec<Term<S>>,
    last: Option<Term<S>>,
    /// true if we have just seen `*`
    star: bool,
}

impl<S> Default for Factors<S> {
    fn default() -> Self {
        Self {
            done: Vec::new(),
            last: None,
            star: false,
        }
    }
}

impl<S> Factors<S> {
    fn push(&mut self, tm: Term<S>) {
        self.done.extend(self.last.replace(tm));
        self.star = false;
    }

    fn close(mut self) -> Result<Term<S>> {
        self.done.extend(self.last.take());
        if self.star || self.done.is_empty() {
            return Err(Error::ExpectedFactor);
        }
        Ok(Term::from_factors(self.done))
    }
}

impl<'s> Term<&'s str> {
    /// Parse a word from tokens (excluding whitespace) up to
    /// the first token that can end a word, namely `=` or `.`.
    ///
    /// Return the word together with the token that ended it.
    /// Parentheses are tracked on an explicit stack,
    /// so deeply nested words do not exhaust the call stack.
    pub fn parse<I>(iter: &mut I) -> Result<(Self, Token<'s>)>
    where
        I: Iterator<Item = Token<'s>>,
    {
        let mut stack: Vec<Factors<&'s str>> = Vec::new();
        let mut cur = Factors::default();
        loop {
            let token = match iter.next() {
                Some(token) => token,
                None if stack.is_empty() => return Err(Error::UnexpectedEnd),
                None => return Err(Error::UnclosedLPar),
            };
            match token {
                Token::Ident(s) => cur.push(Term::Atom(s)),
                Token::Int(1) => cur.push(Term::One),
                Token::Caret => {
                    if cur.star {
                        return Err(Error::ExpectedFactor);
                    }
                    let tm = cur.last.take().ok_or(Error::ExpectedFactor)?;
                    match iter.next() {
                        Some(Token::Int(n)) => cur.last = Some(Term::Pow(Box::new(tm), n)),
                        _ => return Err(Error::ExpectedExponent),
                    }
                }
                Token::Star => {
                    if cur.star || (cur.last.is_none() && cur.done.is_empty()) {
                        return Err(Error::ExpectedFactor);
                    }
                    cur.star = true
                }
                Token::LPar => stack.push(core::mem::take(&mut cur)),
                Token::RPar => {
                    let outer = stack.pop().ok_or(Error::UnexpectedRPar)?;
                    let group = core::mem::replace(&mut cur, outer).close()?;
                    cur.push(group)
                }
                Token::Eq | Token::Dot => {
                    if !stack.is_empty() {
                        return Err(Error::UnclosedLPar);
                    }
                    return Ok((cur.close()?, token));
                }
                Token::Error => return Err(Error::InvalidToken),
                Token::Int(_) | Token::Query | Token::Space => return Err(Error::UnexpectedToken),
            }
        }
    }

    pub fn parse_str(s: &'s str) -> Result<Self> {
        let mut iter = crate::lex(s).chain(core::iter::once(Token::Dot));
        let (tm, tok) = Self::parse(&mut iter)?;
        match (tok, iter.next()) {
            (Token::Dot, None) => Ok(tm),
            _ => Err(Error::UnexpectedToken),
        }
    }
}

#[test]
fn positive() -> Result<()> {
    use alloc::vec;
    let atom = |s| Term::Atom(s);
    let pow = |tm, n| Term::Pow(Box::new(tm), n);

    assert_eq!(Term::parse_str("1")?, Term::One);
    assert_eq!(Term::parse_str("a")?, atom("a"));
    assert_eq!(Term::parse_str("a^-1")?, pow(atom("a"), -1));
    assert_eq!(Term::parse_str("a b")?, Term::Prod(vec![atom("a"), atom("b")]));
    assert_eq!(Term::parse_str("a * b")?, Term::parse_str("a b")?);
    assert_eq!(Term::parse_str("((a))")?, atom("a"));
    assert_eq!(
        Term::parse_str("(a b)^2 c")?,
        Term::Prod(vec![pow(Term::Prod(vec![atom("a"), atom("b")]), 2), atom("c")])
    );
    assert_eq!(Term::parse_str("(a^2)^3")?, pow(pow(atom("a"), 2), 3));
    Term::parse_str("a (b (c (d e)^2) f)^-1 g")?;
    Ok(())
}

#[test]
fn deep() -> Result<()> {
    use alloc::string::String;
    let n = 100_000;
    let mut s = String::new();
    (0..n).for_each(|_| s.push_str("(a "));
    (0..n).for_each(|_| s.push_str("b)^2 "));
    Term::parse_str(&s)?;
    Ok(())
}

#[test]
fn negative() {
    use Error::*;
    assert_eq!(Term::parse_str("").unwrap_err(), ExpectedFactor);
    assert_eq!(Term::parse_str("^2").unwrap_err(), ExpectedFactor);
    assert_eq!(Term::parse_str("a^").unwrap_err(), ExpectedExponent);
    assert_eq!(Term::parse_str("a^b").unwrap_err(), ExpectedExponent);
    assert_eq!(Term::parse_str("a *").unwrap_err(), ExpectedFactor);
    assert_eq!(Term::parse_str("* a").unwrap_err(), ExpectedFactor);
    assert_eq!(Term::parse_str("a * * b").unwrap_err(), ExpectedFactor);
    assert_eq!(Term::parse_str("a * ^2 b").unwrap_err(), ExpectedFactor);
    assert_eq!(Term::parse_str("()").unwrap_err(), ExpectedFactor);
    assert_eq!(Term::parse_str("(a b").unwrap_err(), UnclosedLPar);
    assert_eq!(Term::parse_str("a b)").unwrap_err(), UnexpectedRPar);
    assert_eq!(Term::parse_str("a 2").unwrap_err(), UnexpectedToken);
    assert_eq!(Term::parse_str("a = b").unwrap_err(), UnexpectedToken);
    assert_eq!(Term::parse_str("a $").unwrap_err(), InvalidToken);
}

#[test]
fn display() -> Result<()> {
    use alloc::string::ToString;
    let tm = Term::parse_str("a (b c)^-2 * 1")?;
    assert_eq!(tm.to_string(), "a (b c)^-2 1");
    Ok(())
}
