//! Conversion of parsed terms to words.

use crate::{Error, Symbols, Word};
use alloc::vec::Vec;
use core::str::FromStr;
use word_parse::Term;

enum Work<'t, S> {
    Visit(&'t Term<S>),
    Pow(i64),
    Prod(usize),
}

impl Symbols {
    /// Convert a term to a word, sharing atom names via the symbol table.
    ///
    /// ~~~
    /// # use thue::{Symbols, Word};
    /// # use word_parse::Term;
    /// let mut syms = Symbols::new();
    /// let tm = Term::parse_str("(a b)^2 a^-1")?;
    /// assert_eq!(syms.word(&tm)?.to_string(), "a b a b a^-1");
    /// assert_eq!(syms.len(), 2);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn word<S: AsRef<str>>(&mut self, tm: &Term<S>) -> Result<Word, Error> {
        let mut work = Vec::from([Work::Visit(tm)]);
        let mut done: Vec<Word> = Vec::new();
        while let Some(cur) = work.pop() {
            match cur {
                Work::Visit(Term::One) => done.push(Word::Identity),
                Work::Visit(Term::Atom(s)) => done.push(Word::Atom(self.insert(s.as_ref())?)),
                Work::Visit(Term::Pow(tm, n)) => {
                    work.push(Work::Pow(*n));
                    work.push(Work::Visit(&**tm));
                }
                Work::Visit(Term::Prod(tms)) => {
                    work.push(Work::Prod(tms.len()));
                    work.extend(tms.iter().rev().map(Work::Visit));
                }
                Work::Pow(n) => {
                    let w = done.pop().unwrap_or(Word::Identity);
                    done.push(w.checked_pow(n)?)
                }
                Work::Prod(n) => {
                    let factors = done.split_off(done.len().saturating_sub(n));
                    done.push(Word::try_product(factors)?)
                }
            }
        }
        Ok(done.pop().unwrap_or(Word::Identity))
    }
}

impl Word {
    /// Parse a word such as `a^2 (b c)^-1`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Symbols::new().word(&Term::parse_str(s)?)
    }
}

impl FromStr for Word {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[test]
fn words() -> Result<(), Error> {
    use alloc::string::ToString;
    let w = |s| Word::parse(s).map(|w| w.to_string());
    assert_eq!(w("1")?, "1");
    assert_eq!(w("a a a^-2")?, "1");
    assert_eq!(w("(a^2)^3")?, "a^6");
    assert_eq!(w("(a b)^-2")?, "b^-1 a^-1 b^-1 a^-1");
    assert_eq!(w("a * (b (c)^0)^1 * b^-1")?, "a");
    assert_eq!(w("x_1 x_1' x_1")?, "x_1 x_1' x_1");
    Ok(())
}

#[test]
fn errors() {
    use word_parse::{term, Error as ParseError};
    let err = |e| Err(Error::Parse(ParseError::Term(e)));
    assert_eq!(Word::parse("a ("), err(term::Error::UnclosedLPar));
    assert_eq!(Word::parse("a^"), err(term::Error::ExpectedExponent));
    assert_eq!(Word::parse("a^9223372036854775807 a"), Err(Error::ExponentOverflow));
    assert_eq!(Word::parse("(a^4611686018427387904)^2"), Err(Error::ExponentOverflow));
    assert_eq!(Word::parse("(a b)^4611686018427387904"), Err(Error::ExponentOverflow));
}

#[test]
fn deep() -> Result<(), Error> {
    use alloc::string::String;
    let n = 100_000;
    let mut s = String::new();
    (0..n).for_each(|_| s.push('('));
    s.push('a');
    (0..n).for_each(|_| s.push_str(")^1"));
    assert_eq!(Word::parse(&s)?, Word::atom("a")?);
    Ok(())
}
