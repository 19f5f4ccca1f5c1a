//! Structural matching of words.
//!
//! All functions here work on the runs of words,
//! so that a power such as `a^1000` is matched in constant time,
//! and loop over run slices instead of recursing over factors.

use crate::word::{Builder, Run, Word};
use alloc::vec::Vec;

/// Position of a needle inside a haystack of runs.
///
/// The needle spans the runs `first..=last` of the haystack, where
/// `head` is what remains of the first run before the needle and
/// `tail` is what remains of the last run after the needle.
struct Occurrence<'a> {
    first: usize,
    last: usize,
    head: Run<'a>,
    tail: Run<'a>,
}

/// If `needle` is a prefix of `hay`, return what remains of `hay`.
fn prefix<'a>(hay: &[Run<'a>], needle: &[Run]) -> Option<Vec<Run<'a>>> {
    let (last, init) = match needle.split_last() {
        None => return Some(hay.to_vec()),
        Some(split) => split,
    };
    if hay.len() < needle.len() || hay[..init.len()] != *init {
        return None;
    }
    let cut = &hay[init.len()];
    if !cut.covers(last) {
        return None;
    }
    let mut rest = Vec::from([cut.minus(last)]);
    rest.extend_from_slice(&hay[needle.len()..]);
    Some(rest)
}

/// If `needle` is a suffix of `hay`, return what precedes it in `hay`.
fn suffix<'a>(hay: &[Run<'a>], needle: &[Run]) -> Option<Vec<Run<'a>>> {
    let (first, tail) = match needle.split_first() {
        None => return Some(hay.to_vec()),
        Some(split) => split,
    };
    let start = hay.len().checked_sub(needle.len())?;
    if hay[start + 1..] != *tail || !hay[start].covers(first) {
        return None;
    }
    let mut rest = hay[..start].to_vec();
    rest.push(hay[start].minus(first));
    Some(rest)
}

/// Find the leftmost occurrence of `needle` in `hay`.
fn find<'a>(hay: &[Run<'a>], needle: &[Run]) -> Option<Occurrence<'a>> {
    let (n0, nk) = (needle.first()?, needle.last()?);
    let k = needle.len();
    if k == 1 {
        let first = hay.iter().position(|r| r.covers(n0))?;
        let head = Run::new(hay[first].sym, 0);
        let tail = hay[first].minus(n0);
        return Some(Occurrence { first, last: first, head, tail });
    }
    let inner = &needle[1..k - 1];
    let fits = |i: usize| {
        hay[i].covers(n0) && hay[i + 1..i + k - 1] == *inner && hay[i + k - 1].covers(nk)
    };
    let first = (0..(hay.len() + 1).checked_sub(k)?).find(|i| fits(*i))?;
    let last = first + k - 1;
    let head = hay[first].minus(n0);
    let tail = hay[last].minus(nk);
    Some(Occurrence { first, last, head, tail })
}

/// Find the longest non-empty suffix of `w` that is a prefix of `s`.
///
/// Return the part of `w` before the overlap, the overlap, and
/// the part of `s` after the overlap.
fn overlap_prefix(s: &Word, w: &Word) -> Option<(Word, Word, Word)> {
    let (s, w) = (s.runs(), w.runs());
    let (s0, s_tail) = s.split_first()?;
    let (w_last, w_init) = w.split_last()?;

    // overlaps that extend over several runs of `w`, longest first
    for j in 0..w_init.len() {
        let wj = &w[j];
        if wj.sym != s0.sym || wj.exp.signum() != s0.exp.signum() || wj.len() < s0.len() {
            continue;
        }
        if let Some(rest) = prefix(s_tail, &w[j + 1..]) {
            let mut before = Builder::default();
            before.push_runs(&w[..j]);
            before.push_run(wj.minus(s0));
            let mut common = Builder::default();
            common.push_run(*s0);
            common.push_runs(&w[j + 1..]);
            let mut after = Builder::default();
            after.push_runs(&rest);
            return Some((before.finish(), common.finish(), after.finish()));
        }
    }

    // overlap inside the last run of `w`
    if w_last.sym != s0.sym || w_last.exp.signum() != s0.exp.signum() {
        return None;
    }
    let n = core::cmp::min(w_last.len(), s0.len()) as i64 * s0.exp.signum();
    let common = Run::new(s0.sym, n);
    let mut before = Builder::default();
    before.push_runs(w_init);
    before.push_run(w_last.minus(&common));
    let mut after = Builder::default();
    after.push_run(s0.minus(&common));
    after.push_runs(s_tail);
    let mut overlap = Builder::default();
    overlap.push_run(common);
    Some((before.finish(), overlap.finish(), after.finish()))
}

fn join(parts: (Word, Word, Word)) -> Word {
    let mut b = Builder::default();
    [parts.0, parts.1, parts.2].iter().for_each(|w| b.push_word(w));
    b.finish()
}

/// Split `s` into `x o` and `w` into `o y` for every non-empty `o`,
/// returning all pairs `(x, y)`.
fn splits<'a>(s: &[Run<'a>], w: &[Run<'a>]) -> Vec<(Word, Word)> {
    let mut out = Vec::new();
    let (s_last, s_init) = match s.split_last() {
        Some(split) => split,
        None => return out,
    };
    let (w0, w_tail) = match w.split_first() {
        Some(split) => split,
        None => return out,
    };

    // `o` lies inside the last run of `s` and the first run of `w`
    if s_last.sym == w0.sym && s_last.exp.signum() == w0.exp.signum() {
        for k in 1..=core::cmp::min(s_last.len(), w0.len()) {
            let o = Run::new(w0.sym, k as i64 * w0.exp.signum());
            let mut x = Builder::default();
            x.push_runs(s_init);
            x.push_run(s_last.minus(&o));
            let mut y = Builder::default();
            y.push_run(w0.minus(&o));
            y.push_runs(w_tail);
            out.push((x.finish(), y.finish()));
        }
    }

    // `o` spans `t` runs, so it starts with all of `w0` and ends with all of `s_last`
    for t in 2..=core::cmp::min(s.len(), w.len()) {
        let (first, last) = (&s[s.len() - t], &w[t - 1]);
        if first.covers(w0) && s[s.len() - t + 1..s.len() - 1] == w[1..t - 1] && last.covers(s_last) {
            let mut x = Builder::default();
            x.push_runs(&s[..s.len() - t]);
            x.push_run(first.minus(w0));
            let mut y = Builder::default();
            y.push_run(last.minus(s_last));
            y.push_runs(&w[t..]);
            out.push((x.finish(), y.finish()));
        }
    }
    out
}

impl Word {
    /// If `w` is a prefix of `self`, return the remaining suffix.
    ///
    /// ~~~
    /// # use thue::Word;
    /// let w = |s: &str| s.parse::<Word>();
    /// assert_eq!(w("a^3 b c")?.prefix(&w("a^2")?), Some(w("a b c")?));
    /// assert_eq!(w("a^3 b c")?.prefix(&w("a^3 b")?), Some(w("c")?));
    /// assert_eq!(w("a^3 b c")?.prefix(&w("a b")?), None);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn prefix(&self, w: &Self) -> Option<Self> {
        match (self, w) {
            (_, Self::Identity) => Some(self.clone()),
            (Self::Identity, _) => None,
            _ => {
                let mut b = Builder::default();
                b.push_runs(&prefix(&self.runs(), &w.runs())?);
                Some(b.finish())
            }
        }
    }

    /// If `w` is a suffix of `self`, return the remaining prefix.
    pub fn suffix(&self, w: &Self) -> Option<Self> {
        match (self, w) {
            (_, Self::Identity) => Some(self.clone()),
            (Self::Identity, _) => None,
            _ => {
                let mut b = Builder::default();
                b.push_runs(&suffix(&self.runs(), &w.runs())?);
                Some(b.finish())
            }
        }
    }

    /// Find the leftmost occurrence of `w` in `self`,
    /// returning what comes before and after it.
    ///
    /// ~~~
    /// # use thue::Word;
    /// let w = |s: &str| s.parse::<Word>();
    /// let (before, after) = w("c a^3 b^2 a")?.contains(&w("a b")?).unwrap();
    /// assert_eq!((before, after), (w("c a^2")?, w("b a")?));
    /// assert_eq!(w("a b")?.contains(&w("b a")?), None);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn contains(&self, w: &Self) -> Option<(Self, Self)> {
        if w.is_identity() {
            return Some((Self::Identity, self.clone()));
        }
        let hay = self.runs();
        let occ = find(&hay, &w.runs())?;
        let mut before = Builder::default();
        before.push_runs(&hay[..occ.first]);
        before.push_run(occ.head);
        let mut after = Builder::default();
        after.push_run(occ.tail);
        after.push_runs(&hay[occ.last + 1..]);
        Some((before.finish(), after.finish()))
    }

    /// Find the longest non-empty suffix of `w` that is a prefix of `self`.
    ///
    /// Return the part of `w` before the overlap, the overlap, and
    /// the part of `self` after the overlap.
    ///
    /// ~~~
    /// # use thue::Word;
    /// let w = |s: &str| s.parse::<Word>();
    /// let parts = w("b c d")?.partial_prefix(&w("a b c")?);
    /// assert_eq!(parts, Some((w("a")?, w("b c")?, w("d")?)));
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn partial_prefix(&self, w: &Self) -> Option<(Self, Self, Self)> {
        overlap_prefix(self, w)
    }

    /// Find the longest non-empty prefix of `w` that is a suffix of `self`.
    ///
    /// Return the part of `self` before the overlap, the overlap, and
    /// the part of `w` after the overlap.
    pub fn partial_suffix(&self, w: &Self) -> Option<(Self, Self, Self)> {
        overlap_prefix(w, self)
    }

    /// Return the shortest word that contains both `self` and `w`,
    /// such that they share a non-empty subword.
    ///
    /// ~~~
    /// # use thue::Word;
    /// let w = |s: &str| s.parse::<Word>();
    /// assert_eq!(w("a b")?.overlaps(&w("b c")?), Some(w("a b c")?));
    /// assert_eq!(w("a b")?.overlaps(&w("c a")?), Some(w("c a b")?));
    /// assert_eq!(w("a^3")?.overlaps(&w("a^2")?), Some(w("a^3")?));
    /// assert_eq!(w("a")?.overlaps(&w("b")?), None);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn overlaps(&self, w: &Self) -> Option<Self> {
        if self.is_identity() || w.is_identity() {
            return None;
        }
        if self.contains(w).is_some() {
            return Some(self.clone());
        }
        if w.contains(self).is_some() {
            return Some(w.clone());
        }
        let after = self.partial_suffix(w).map(join);
        let before = self.partial_prefix(w).map(join);
        match (after, before) {
            (Some(x), Some(y)) if y.size() < x.size() => Some(y),
            (Some(x), _) => Some(x),
            (None, y) => y,
        }
    }

    /// Return every way in which a non-empty suffix of `self` is a prefix of `w`.
    ///
    /// Every pair `(x, y)` in the result satisfies `self y = x w`.
    ///
    /// ~~~
    /// # use thue::Word;
    /// let w = |s: &str| s.parse::<Word>();
    /// let aba = w("a b a")?;
    /// let splits = aba.all_overlaps(&aba);
    /// assert_eq!(splits, [(w("a b")?, w("b a")?), (w("1")?, w("1")?)]);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn all_overlaps(&self, w: &Self) -> Vec<(Self, Self)> {
        splits(&self.runs(), &w.runs())
    }

    /// Replace all occurrences of `from` in `self` by `to`,
    /// proceeding from left to right.
    ///
    /// ~~~
    /// # use thue::Word;
    /// let w = |s: &str| s.parse::<Word>();
    /// assert_eq!(w("a^7")?.rewrite(&w("a^3")?, &w("x")?), w("x^2 a")?);
    /// assert_eq!(w("a b a b a")?.rewrite(&w("a b a")?, &w("c")?), w("c b a")?);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn rewrite(&self, from: &Self, to: &Self) -> Self {
        match from.run() {
            Some(f) => self.rewrite_run(f, to),
            None if from.is_identity() => self.clone(),
            None => self.rewrite_runs(&from.runs(), to),
        }
    }

    /// Rewrite every run covering `from` by dividing its exponent by the one of `from`.
    fn rewrite_run(&self, from: Run, to: &Self) -> Self {
        let mut b = Builder::default();
        for run in self.runs_iter() {
            if run.covers(&from) {
                let q = run.exp / from.exp;
                to.push_pow(q, &mut b);
                b.push(run.sym, run.exp - q * from.exp);
            } else {
                b.push_run(run)
            }
        }
        b.finish()
    }

    fn rewrite_runs(&self, from: &[Run], to: &Self) -> Self {
        let mut hay = self.runs();
        let mut b = Builder::default();
        let mut start = 0;
        while let Some(occ) = find(&hay[start..], from) {
            b.push_runs(&hay[start..start + occ.first]);
            b.push_run(occ.head);
            b.push_word(to);
            start += occ.last;
            // continue searching in what remains of the last run
            hay[start] = occ.tail;
        }
        b.push_runs(&hay[start..]);
        b.finish()
    }
}

#[cfg(test)]
fn parse(s: &str) -> Word {
    s.parse().unwrap()
}

#[test]
fn prefix_suffix() {
    let w = parse("a^-2 b c^3");
    assert_eq!(w.prefix(&parse("a^-1")), Some(parse("a^-1 b c^3")));
    assert_eq!(w.prefix(&parse("a")), None);
    assert_eq!(w.prefix(&w), Some(Word::identity()));
    assert_eq!(w.prefix(&parse("a^-2 b c^4")), None);
    assert_eq!(w.suffix(&parse("b c^2")), None);
    assert_eq!(w.suffix(&parse("a^-1 b c^3")), Some(parse("a^-1")));
    assert_eq!(w.suffix(&parse("c")), Some(parse("a^-2 b c^2")));
    assert_eq!(Word::identity().suffix(&parse("a")), None);
    assert_eq!(w.suffix(&Word::identity()), Some(w));
}

#[test]
fn contains() {
    let w = parse("a b^2 a^3 b");
    assert_eq!(w.contains(&parse("a^2")), Some((parse("a b^2"), parse("a b"))));
    assert_eq!(w.contains(&parse("b a")), Some((parse("a b"), parse("a^2 b"))));
    assert_eq!(w.contains(&parse("b^2 a^3 b")), Some((parse("a"), Word::identity())));
    assert_eq!(w.contains(&parse("a b a")), None);
    assert_eq!(w.contains(&parse("b^-1")), None);
    assert_eq!(parse("a").contains(&parse("a b")), None);
}

#[test]
fn partial() {
    // the longest overlap is preferred
    let parts = parse("a b a c").partial_prefix(&parse("c a b a"));
    assert_eq!(parts, Some((parse("c"), parse("a b a"), parse("c"))));

    let parts = parse("a^2 b").partial_prefix(&parse("c a^3"));
    assert_eq!(parts, Some((parse("c a"), parse("a^2"), parse("b"))));

    let parts = parse("b a^2").partial_suffix(&parse("a^3 c"));
    assert_eq!(parts, Some((parse("b"), parse("a^2"), parse("a c"))));

    assert_eq!(parse("a b").partial_prefix(&parse("a b")), Some((parse("1"), parse("a b"), parse("1"))));
    assert_eq!(parse("a b").partial_prefix(&parse("a^-1")), None);
    assert_eq!(parse("a").partial_suffix(&Word::identity()), None);
}

#[test]
fn overlaps() {
    let o = |s: &str, t: &str| parse(s).overlaps(&parse(t));
    assert_eq!(o("a b", "a b c"), Some(parse("a b c")));
    assert_eq!(o("a b a", "a b a"), Some(parse("a b a")));
    // the shorter of the two overlaps wins
    assert_eq!(o("a b c", "c a b"), Some(parse("c a b c")));
    // on equal size, `self` comes first
    assert_eq!(o("a b", "b a"), Some(parse("a b a")));
    assert_eq!(o("a^2", "a^-2"), None);
    assert_eq!(o("1", "a"), None);
}

#[test]
fn all_overlaps() {
    let o = |s: &str, t: &str| parse(s).all_overlaps(&parse(t));
    let pair = |x: &str, y: &str| (parse(x), parse(y));
    assert_eq!(o("a b", "b a"), [pair("a", "a")]);
    assert_eq!(o("a b", "a b"), [pair("1", "1")]);
    assert!(o("a b", "c").is_empty());
    // every alignment inside a power counts
    assert_eq!(o("b a^2", "a^3"), [pair("b a", "a^2"), pair("b", "a")]);
    assert_eq!(o("a^2", "a^2"), [pair("a", "a"), pair("1", "1")]);
    assert!(o("a^2", "a^-2").is_empty());
    // overlaps over several runs
    assert_eq!(o("c a^2 b", "a b c"), [pair("c a", "c")]);
    assert_eq!(o("a b a b", "a b a b c"), [pair("a b", "a b c"), pair("1", "c")]);
    for (x, y) in o("b a b a", "a b a") {
        assert_eq!(&parse("b a b a") * &y, &x * &parse("a b a"));
    }
}

#[test]
fn rewrite() {
    let r = |s: &str, from: &str, to: &str| parse(s).rewrite(&parse(from), &parse(to));
    assert_eq!(r("a^7", "a^3", "x"), parse("x^2 a"));
    assert_eq!(r("a^-7", "a^-3", "x"), parse("x^2 a^-1"));
    assert_eq!(r("a^7", "a^-3", "x"), parse("a^7"));
    assert_eq!(r("b a^2 b", "a", "1"), parse("b^2"));
    assert_eq!(r("a b a b", "a b", "c"), parse("c^2"));
    assert_eq!(r("a^2 b^2 a b", "a b", "c"), parse("a c b c"));
    assert_eq!(r("a b c", "1", "x"), parse("a b c"));
    assert_eq!(r("a b c", "b c", "1"), parse("a"));
    // the replacement may fuse with its context
    assert_eq!(r("a b a", "b", "a^-1"), parse("a"));
}
