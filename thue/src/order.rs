//! Short-lex order on words.
//!
//! Words are compared first by their size, then lexicographically by their syllables.
//! A syllable is compared by its atom name first,
//! where an atom is smaller than its inverse.
//! This order is total and well-founded, so
//! orienting every rule from larger to smaller guarantees termination of rewriting.

use crate::word::{Run, Word};
use core::cmp::Ordering;

impl<'a> Run<'a> {
    fn syllable(&self) -> (&'a crate::Symbol, bool) {
        (self.sym, self.exp < 0)
    }

    /// Drop the first `n` syllables of the run.
    fn skip(self, n: u64) -> Self {
        let n = n as i64;
        Self::new(self.sym, self.exp - self.exp.signum() * n)
    }
}

/// Compare the syllable sequences of two words without expanding their runs.
fn cmp_syllables(w1: &Word, w2: &Word) -> Ordering {
    let (mut iter1, mut iter2) = (w1.runs_iter(), w2.runs_iter());
    let (mut r1, mut r2) = (iter1.next(), iter2.next());
    loop {
        let (x, y) = match (r1, r2) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => (x, y),
        };
        match x.syllable().cmp(&y.syllable()) {
            Ordering::Equal => (),
            ord => return ord,
        }
        let n = core::cmp::min(x.len(), y.len());
        r1 = if x.len() == n { iter1.next() } else { Some(x.skip(n)) };
        r2 = if y.len() == n { iter2.next() } else { Some(y.skip(n)) };
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_size = self.size().cmp(&other.size());
        by_size.then_with(|| cmp_syllables(self, other))
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[test]
fn short_lex() -> Result<(), crate::Error> {
    let w = |s: &str| s.parse::<Word>();
    assert!(Word::identity() < w("a")?);
    assert!(w("b")? < w("a^2")?);
    assert!(w("a")? < w("a^-1")?);
    assert!(w("a^-1")? < w("b")?);
    assert!(w("a b")? < w("b a")?);
    assert!(w("a^2 b")? < w("a b a")?);
    assert!(w("a b a")? < w("a b^2")?);
    assert!(w("a^-3")? > w("a^3")?);
    assert_eq!(w("a^2 b")?.cmp(&w("a a b")?), Ordering::Equal);

    let mut words = [w("b a")?, w("a")?, w("1")?, w("a^2")?, w("a b")?];
    words.sort();
    let sorted = [w("1")?, w("a")?, w("a^2")?, w("a b")?, w("b a")?];
    assert_eq!(words, sorted);
    Ok(())
}
