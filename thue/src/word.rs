//! Words over named atoms with integer exponents.

use crate::{Error, Symbol};
use alloc::string::{String, ToString};
use alloc::{sync::Arc, vec::Vec};
use core::fmt::{self, Display};
use core::ops::Mul;
use itertools::Itertools;

/// Element of the free group generated by named atoms.
///
/// Words are always kept in reduced form:
/// a power has an atomic base and an exponent that is neither 0 nor 1, and
/// a product has at least two factors, none of them the identity,
/// where adjacent factors never share the same base.
/// All constructors establish this form,
/// so two words are equal if and only if they denote the same group element
/// of the free group.
/// The variants are public to be matched on;
/// words should only be built with the constructors below.
///
/// Exponent arithmetic that does not fit into an `i64` panics in
/// [`Word::pow`] and `*`, like it does for integers;
/// [`Word::checked_pow`] and [`Word::checked_mul`] return an error instead.
///
/// ~~~
/// # use thue::Word;
/// let a = Word::atom("a")?;
/// let b = Word::atom("b")?;
/// assert_eq!(a.pow(2) * a.pow(-2), Word::identity());
/// assert_eq!((&a * &b).pow(-1), b.inverse() * a.inverse());
/// assert_eq!((&a * &b).pow(2).to_string(), "a b a b");
/// assert_eq!(format!("{:#}", a.pow(2) * b.pow(-1)), "a²b⁻¹");
/// # Ok::<_, thue::Error>(())
/// ~~~
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Word {
    Identity,
    Atom(Symbol),
    /// atom raised to an exponent that is neither 0 nor 1
    Power(Symbol, i64),
    /// at least two atoms or powers, adjacent ones having distinct bases
    Product(Arc<[Word]>),
}

/// Maximal block of one atom inside a word, such as `a^3` in `b a^3 c`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Run<'a> {
    pub sym: &'a Symbol,
    pub exp: i64,
}

impl<'a> Run<'a> {
    pub fn new(sym: &'a Symbol, exp: i64) -> Self {
        Self { sym, exp }
    }

    /// Number of syllables in the run.
    pub fn len(&self) -> u64 {
        self.exp.unsigned_abs()
    }

    /// Return true if `other` can be cut out of `self`.
    pub fn covers(&self, other: &Run) -> bool {
        self.sym == other.sym
            && self.exp.signum() == other.exp.signum()
            && self.len() >= other.len()
    }

    /// Remove `other`, which must be covered by `self`, from `self`.
    pub fn minus(self, other: &Run) -> Self {
        Self::new(self.sym, self.exp - other.exp)
    }
}

/// Accumulate runs, fusing and cancelling adjacent runs of the same atom.
#[derive(Default)]
pub(crate) struct Builder {
    runs: Vec<(Symbol, i64)>,
    /// true if some exponent did not fit into an `i64`
    overflow: bool,
}

impl Builder {
    pub fn push(&mut self, sym: &Symbol, exp: i64) {
        if exp == 0 {
            return;
        }
        let cancelled = match self.runs.last_mut() {
            Some((last, n)) if last == sym => match n.checked_add(exp) {
                Some(m) => {
                    *n = m;
                    m == 0
                }
                None => {
                    self.overflow = true;
                    false
                }
            },
            _ => {
                self.runs.push((sym.clone(), exp));
                false
            }
        };
        if cancelled {
            self.runs.pop();
        }
    }

    pub fn push_inverse(&mut self, sym: &Symbol, exp: i64) {
        match exp.checked_neg() {
            Some(exp) => self.push(sym, exp),
            None => self.overflow = true,
        }
    }

    pub fn push_run(&mut self, run: Run) {
        self.push(run.sym, run.exp)
    }

    pub fn push_runs(&mut self, runs: &[Run]) {
        runs.iter().for_each(|run| self.push_run(*run))
    }

    pub fn push_word(&mut self, w: &Word) {
        w.runs_iter().for_each(|run| self.push_run(run))
    }

    /// Build the word, failing if an exponent overflowed or
    /// the word has more than `i64::MAX` syllables.
    pub fn try_finish(self) -> Result<Word, Error> {
        let size = self.runs.iter().try_fold(0u64, |acc, (_, n)| acc.checked_add(n.unsigned_abs()));
        match size {
            Some(size) if !self.overflow && size <= i64::MAX as u64 => Ok(self.finish()),
            _ => Err(Error::ExponentOverflow),
        }
    }

    pub fn finish(self) -> Word {
        let mut factors: Vec<_> = self.runs.into_iter().map(|(s, n)| Word::run_word(s, n)).collect();
        if factors.len() <= 1 {
            factors.pop().unwrap_or(Word::Identity)
        } else {
            Word::Product(factors.into())
        }
    }
}

impl Word {
    pub fn identity() -> Self {
        Self::Identity
    }

    /// Create an atom, failing if its name is blank.
    pub fn atom(name: &str) -> Result<Self, Error> {
        Ok(Self::Atom(Symbol::new(name)?))
    }

    /// Create one atom for every whitespace-separated name.
    ///
    /// ~~~
    /// # use thue::Word;
    /// let atoms = Word::atoms("a b c")?;
    /// assert_eq!(atoms.len(), 3);
    /// assert_eq!(atoms[1], Word::atom("b")?);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn atoms(names: &str) -> Result<Vec<Self>, Error> {
        names.split_whitespace().map(Self::atom).collect()
    }

    fn run_word(sym: Symbol, exp: i64) -> Self {
        match exp {
            0 => Self::Identity,
            1 => Self::Atom(sym),
            _ => Self::Power(sym, exp),
        }
    }

    /// Multiply all given words.
    ///
    /// Panics on exponent overflow, see [`Word::try_product`].
    pub fn product<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::try_product(iter).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Multiply all given words, failing on exponent overflow.
    pub fn try_product<I: IntoIterator<Item = Self>>(iter: I) -> Result<Self, Error> {
        let mut b = Builder::default();
        iter.into_iter().for_each(|w| b.push_word(&w));
        b.try_finish()
    }

    /// Raise a word to an integer exponent.
    ///
    /// A negative exponent repeats the inverse of the word.
    /// Panics on exponent overflow, see [`Word::checked_pow`].
    pub fn pow(&self, n: i64) -> Self {
        self.checked_pow(n).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Raise a word to an integer exponent, failing on exponent overflow.
    ///
    /// ~~~
    /// # use thue::{Error, Word};
    /// let a = Word::atom("a")?;
    /// assert_eq!(a.pow(3).checked_pow(-2)?, a.pow(-6));
    /// assert_eq!(a.pow(i64::MAX / 2).checked_pow(3), Err(Error::ExponentOverflow));
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn checked_pow(&self, n: i64) -> Result<Self, Error> {
        let mut b = Builder::default();
        self.push_pow(n, &mut b);
        b.try_finish()
    }

    /// Multiply two words, failing on exponent overflow.
    pub fn checked_mul(&self, w: &Self) -> Result<Self, Error> {
        let mut b = Builder::default();
        b.push_word(self);
        b.push_word(w);
        b.try_finish()
    }

    /// Append the `n`-th power of the word to a builder.
    pub(crate) fn push_pow(&self, n: i64, b: &mut Builder) {
        match self {
            Self::Identity => (),
            Self::Atom(s) => b.push(s, n),
            Self::Power(s, e) => match e.checked_mul(n) {
                Some(m) => b.push(s, m),
                None => b.overflow = true,
            },
            Self::Product(fs) => {
                let size = self.size().checked_mul(n.unsigned_abs());
                if size.map_or(true, |size| size > i64::MAX as u64) {
                    b.overflow = true;
                    return;
                }
                let runs: Vec<_> = fs.iter().filter_map(Self::run).collect();
                for _ in 0..n.unsigned_abs() {
                    if n > 0 {
                        b.push_runs(&runs)
                    } else {
                        runs.iter().rev().for_each(|r| b.push_inverse(r.sym, r.exp))
                    }
                }
            }
        }
    }

    pub fn inverse(&self) -> Self {
        self.pow(-1)
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Return the atoms and powers that make up the word.
    ///
    /// The identity has no factors, and an atom or a power is its only factor.
    pub fn factors(&self) -> &[Self] {
        match self {
            Self::Identity => &[],
            Self::Atom(_) | Self::Power(..) => core::slice::from_ref(self),
            Self::Product(fs) => &fs[..],
        }
    }

    /// Return the base of an atom or a power.
    pub fn base(&self) -> Option<&Symbol> {
        self.run().map(|r| r.sym)
    }

    /// Return the exponent of an atom or a power.
    pub fn exponent(&self) -> Option<i64> {
        self.run().map(|r| r.exp)
    }

    pub(crate) fn run(&self) -> Option<Run> {
        match self {
            Self::Atom(s) => Some(Run::new(s, 1)),
            Self::Power(s, n) => Some(Run::new(s, *n)),
            Self::Identity | Self::Product(_) => None,
        }
    }

    pub(crate) fn runs_iter(&self) -> impl Iterator<Item = Run> + '_ {
        self.factors().iter().filter_map(Self::run)
    }

    pub(crate) fn runs(&self) -> Vec<Run> {
        self.runs_iter().collect()
    }

    /// Number of atoms and inverted atoms in the word.
    ///
    /// ~~~
    /// # use thue::Word;
    /// let w: Word = "a^3 b^-2 a".parse()?;
    /// assert_eq!(w.size(), 6);
    /// assert_eq!(Word::identity().size(), 0);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn size(&self) -> u64 {
        self.runs_iter().map(|r| r.len()).sum()
    }

    /// Expand the word into its syllables, namely atoms and inverted atoms.
    pub fn flatten(&self) -> Vec<Self> {
        let syllables = self.runs_iter().flat_map(|r| {
            let syl = Self::run_word(r.sym.clone(), r.exp.signum());
            core::iter::repeat(syl).take(r.len() as usize)
        });
        syllables.collect()
    }
}

impl From<Symbol> for Word {
    fn from(sym: Symbol) -> Self {
        Self::Atom(sym)
    }
}

impl Mul for Word {
    type Output = Word;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<'a> Mul for &'a Word {
    type Output = Word;
    fn mul(self, rhs: Self) -> Word {
        self.checked_mul(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl core::iter::Product for Word {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::product(iter)
    }
}

fn superscript(n: i64) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let sup = |c: char| match c.to_digit(10) {
        Some(d) => DIGITS[d as usize],
        None => '⁻',
    };
    n.to_string().chars().map(sup).collect()
}

impl Display for Word {
    /// Print the word in the notation understood by the parser,
    /// or with superscript exponents when using the alternate flag.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "1"),
            Self::Atom(s) => s.fmt(f),
            Self::Power(s, n) if f.alternate() => write!(f, "{}{}", s, superscript(*n)),
            Self::Power(s, n) => write!(f, "{}^{}", s, n),
            Self::Product(fs) if f.alternate() => write!(f, "{:#}", fs.iter().format("")),
            Self::Product(fs) => write!(f, "{}", fs.iter().format(" ")),
        }
    }
}

#[test]
fn reduced() -> Result<(), Error> {
    let [a, b, c]: [Word; 3] = Word::atoms("a b c")?.try_into().unwrap();
    assert_eq!(a.pow(1), a);
    assert_eq!(a.pow(0), Word::identity());
    assert_eq!(a.pow(3).pow(-2), Word::Power(Symbol::new("a")?, -6));
    assert_eq!(&a * &Word::identity(), a);

    let abc = Word::product([a.clone(), b.clone(), c.clone()]);
    assert_eq!(abc.factors().len(), 3);
    assert_eq!(&abc * &abc.inverse(), Word::identity());
    assert_eq!(abc.pow(-1).to_string(), "c^-1 b^-1 a^-1");

    // adjacent factors fuse at the boundary
    let aba = Word::product([a.clone(), b.clone(), a.clone()]);
    assert_eq!(aba.pow(2).to_string(), "a b a^2 b a");
    assert_eq!((&aba * &a.inverse()).to_string(), "a b");
    assert_eq!(Word::product([a.clone(), b.clone(), b.inverse(), a.clone()]), a.pow(2));
    Ok(())
}

#[test]
fn accessors() -> Result<(), Error> {
    let w = Word::atom("a")?.pow(-3);
    assert_eq!(w.base(), Some(&Symbol::new("a")?));
    assert_eq!(w.exponent(), Some(-3));
    assert_eq!(Word::identity().base(), None);
    assert_eq!(w.size(), 3);

    let flat = (Word::atom("b")? * w).flatten();
    assert_eq!(flat.len(), 4);
    assert_eq!(flat[1], Word::atom("a")?.inverse());
    Ok(())
}

#[test]
fn overflow() -> Result<(), Error> {
    let [a, b]: [Word; 2] = Word::atoms("a b")?.try_into().unwrap();
    let max = a.pow(i64::MAX);
    assert_eq!(max.checked_mul(&a), Err(Error::ExponentOverflow));
    assert_eq!(max.checked_mul(&a.inverse())?, a.pow(i64::MAX - 1));
    assert_eq!(a.pow(i64::MIN + 1).checked_pow(-1)?, max);
    assert_eq!(a.checked_pow(i64::MIN), Err(Error::ExponentOverflow));

    // the number of syllables is bounded as well
    let ab = &a * &b;
    assert_eq!(ab.checked_pow(i64::MAX), Err(Error::ExponentOverflow));
    assert_eq!(max.checked_mul(&b), Err(Error::ExponentOverflow));
    assert_eq!(Word::try_product([b.clone(), a.pow(-3)]), Ok(&b * &a.pow(-3)));
    Ok(())
}

#[test]
fn blank_atom() {
    assert_eq!(Word::atom(" \t"), Err(Error::InvalidAtomName(" \t".to_string())));
    assert!(Word::atoms("").map(|v| v.is_empty()).unwrap_or(false));
}
