//! Confluent rewrite systems built from relations.

use crate::completion::{complete, Config};
use crate::{Error, Observer, Rule, Rules, Silent, Trace, Word};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use im::Vector;
use itertools::Itertools;

/// Relations between words together with a confluent set of rules deciding them.
///
/// A rewrite system is never modified after its construction;
/// adding relations yields a new system that shares its rules with the old one.
#[derive(Clone, Debug)]
pub struct RewriteSystem {
    relations: Vector<Rule>,
    rules: Rules,
    config: Config,
}

impl RewriteSystem {
    /// Complete the given relations with default settings,
    /// logging completion events if `log` is true.
    ///
    /// ~~~
    /// # use thue::{RewriteSystem, Word};
    /// let g = Word::atom("g")?;
    /// let sys = RewriteSystem::new([(g.pow(3), Word::identity())], false)?;
    /// assert_eq!(sys.apply(&g.pow(5)), g.pow(2));
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn new<I>(relations: I, log: bool) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Word, Word)>,
    {
        let config = Config {
            log,
            ..Config::default()
        };
        Self::with_config(relations, &config)
    }

    /// Complete the given relations with the given settings.
    pub fn with_config<I>(relations: I, config: &Config) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Word, Word)>,
    {
        Self::empty(config).extend(relations)
    }

    /// Complete the given relations, reporting all completion events to an observer.
    ///
    /// The `log` setting of the configuration is ignored.
    pub fn observe<I, O>(relations: I, config: &Config, obs: &mut O) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Word, Word)>,
        O: Observer,
    {
        Self::empty(config).extend_with(relations, obs)
    }

    fn empty(config: &Config) -> Self {
        Self {
            relations: Vector::new(),
            rules: Rules::new(),
            config: config.clone(),
        }
    }

    fn extend<I>(&self, relations: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Word, Word)>,
    {
        if self.config.log {
            self.extend_with(relations, &mut Trace::default())
        } else {
            self.extend_with(relations, &mut Silent)
        }
    }

    fn extend_with<I, O>(&self, relations: I, obs: &mut O) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Word, Word)>,
        O: Observer,
    {
        let mut sys = self.clone();
        for (w1, w2) in relations {
            if let Some(rel) = Rule::orient(w1, w2) {
                sys.rules.resolve(rel.lhs.clone(), rel.rhs.clone(), obs);
                sys.relations.push_back(rel);
            }
        }
        sys.rules = complete(sys.rules, sys.config.max_rounds, obs)?;
        Ok(sys)
    }

    /// Return the normal form of a word.
    pub fn apply(&self, w: &Word) -> Word {
        self.rules.normalize(w)
    }

    /// Return a new system in which the given word equals the identity.
    ///
    /// ~~~
    /// # use thue::{RewriteSystem, Word};
    /// let w = |s: &str| s.parse::<Word>();
    /// let sys = RewriteSystem::new([(w("a b")?, w("b a")?)], false)?;
    /// let sys = sys.equate(w("a^2")?)?;
    /// assert_eq!(sys.apply(&w("b a^3 b")?), w("a b^2")?);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn equate(&self, w: Word) -> Result<Self, Error> {
        self.merge([(w, Word::Identity)])
    }

    /// Return a new system with additional relations.
    ///
    /// Completion continues from the rules of the current system.
    pub fn merge<I>(&self, relations: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Word, Word)>,
    {
        let relations: Vec<_> = relations.into_iter().collect();
        if relations.is_empty() {
            return Ok(self.clone());
        }
        self.extend(relations)
    }

    /// Return the relations the system was built from,
    /// each oriented from the larger to the smaller word.
    pub fn relations(&self) -> impl Iterator<Item = &Rule> {
        self.relations.iter()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Display for RewriteSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let relations = self.relations.iter().map(|r| (&r.lhs, &r.rhs));
        let relations = relations.format_with(", ", |(l, r), f| f(&format_args!("{} = {}", l, r)));
        write!(f, "⟨{}⟩", relations)
    }
}

#[cfg(test)]
fn parse(s: &str) -> Word {
    s.parse().unwrap()
}

#[cfg(test)]
fn system(relations: &[(&str, &str)]) -> Result<RewriteSystem, Error> {
    RewriteSystem::new(relations.iter().map(|(l, r)| (parse(l), parse(r))), false)
}

/// All words over the given atoms with at most `n` syllables.
#[cfg(test)]
fn words(atoms: &[&str], n: usize) -> Vec<Word> {
    let mut words = Vec::from([Word::identity()]);
    let mut last = words.clone();
    for _ in 0..n {
        let next: Vec<_> = last
            .iter()
            .cartesian_product(atoms)
            .map(|(w, a)| w * &parse(a))
            .collect();
        words.extend(next.iter().cloned());
        last = next;
    }
    words
}

/// All words obtained from `w` by rewriting one occurrence of a left-hand side.
#[cfg(test)]
fn steps(rules: &Rules, w: &Word) -> Vec<Word> {
    let syl = w.flatten();
    let mut out = Vec::new();
    for rule in rules.iter() {
        let lhs = rule.lhs.flatten();
        for i in 0..(syl.len() + 1).saturating_sub(lhs.len()) {
            if syl[i..i + lhs.len()] == lhs[..] {
                let before = syl[..i].iter().cloned();
                let after = syl[i + lhs.len()..].iter().cloned();
                let rhs = core::iter::once(rule.rhs.clone());
                out.push(Word::product(before.chain(rhs).chain(after)))
            }
        }
    }
    out
}

#[test]
fn cyclic() -> Result<(), Error> {
    let sys = system(&[("g^3", "1")])?;
    assert_eq!(sys.apply(&parse("g^3")), parse("1"));
    assert_eq!(sys.apply(&parse("g^4")), parse("g"));
    assert_eq!(sys.apply(&parse("g^5")), parse("g^2"));
    assert_eq!(sys.rules().len(), 1);
    Ok(())
}

#[test]
fn free() -> Result<(), Error> {
    let sys = system(&[])?;
    assert!(sys.rules().is_empty());
    assert_eq!(sys.apply(&Word::identity()), Word::identity());
    assert_eq!(sys.apply(&parse("a b^-1 a")), parse("a b^-1 a"));
    Ok(())
}

#[test]
fn commuting() -> Result<(), Error> {
    let sys = system(&[("a b", "b a")])?;
    assert_eq!(sys.apply(&parse("b a b")), parse("a b^2"));
    assert_eq!(sys.apply(&parse("a b b")), parse("a b^2"));

    let sys = system(&[("a b", "b a"), ("a c", "c a"), ("b c", "c b")])?;
    assert_eq!(sys.apply(&parse("c b a c b a")), parse("a^2 b^2 c^2"));
    Ok(())
}

#[test]
fn symmetric() -> Result<(), Error> {
    let sys = system(&[("a^2", "1"), ("b^3", "1"), ("(a b)^2", "1")])?;
    let rules: Vec<_> = sys.rules().iter().collect();
    for rule in &rules {
        assert!(rule.lhs > rule.rhs);
        assert_eq!(sys.apply(&rule.lhs), sys.apply(&rule.rhs));
    }
    for rel in sys.relations() {
        assert_eq!(sys.apply(&rel.lhs), sys.apply(&rel.rhs));
    }

    // the positive words fall into the six elements of the group
    let mut normal: Vec<_> = words(&["a", "b"], 6).iter().map(|w| sys.apply(w)).collect();
    normal.sort();
    normal.dedup();
    assert_eq!(normal.len(), 6);
    for w in &normal {
        assert_eq!(&sys.apply(w), w);
    }
    assert_eq!(sys.apply(&parse("a b a")), parse("b^2"));
    assert_eq!(sys.apply(&parse("a b a b a b")), parse("a b"));
    Ok(())
}

#[test]
fn confluent() -> Result<(), Error> {
    let sys = system(&[("a b", "c"), ("b a", "d")])?;
    assert_eq!(sys.apply(&parse("b a b")), sys.apply(&parse("d b")));
    assert_eq!(sys.apply(&parse("b c")), sys.apply(&parse("d b")));
    assert_eq!(sys.apply(&parse("a b a")), parse("a d"));
    for w in words(&["a", "b", "c", "d"], 4) {
        let nf = sys.apply(&w);
        for v in steps(sys.rules(), &w) {
            assert_eq!(sys.apply(&v), nf, "{} rewrites to {}", w, v);
        }
    }

    // overlaps of a rule with itself
    let sys = system(&[("a b", "b"), ("b a", "a")])?;
    assert_eq!(sys.apply(&parse("b^2")), parse("b"));
    assert_eq!(sys.rules().len(), 4);
    let sys = system(&[("a^2", "1"), ("b^3", "1"), ("(a b)^2", "1")])?;
    for w in words(&["a", "b"], 5) {
        for v in steps(sys.rules(), &w) {
            assert_eq!(sys.apply(&v), sys.apply(&w));
        }
    }
    Ok(())
}

#[test]
fn overflow() {
    // completing these relations takes two rounds
    let relations = [(parse("a b"), parse("b")), (parse("b a"), parse("a"))];
    let mut config = Config {
        max_rounds: 1,
        ..Config::default()
    };
    let sys = RewriteSystem::with_config(relations.clone(), &config);
    assert_eq!(sys.err(), Some(Error::CompletionOverflow { rounds: 1 }));
    config.max_rounds = 2;
    assert!(RewriteSystem::with_config(relations, &config).is_ok());
}

#[test]
fn merge() -> Result<(), Error> {
    let free = system(&[])?;
    let cyclic = free.merge([(parse("g^2"), parse("g^-1"))])?;
    assert_eq!(cyclic.apply(&parse("g^3")), parse("1"));
    assert_eq!(free.apply(&parse("g^3")), parse("g^3"));
    assert_eq!(cyclic.relations().count(), 1);

    let same = cyclic.merge(Vec::<(Word, Word)>::new())?;
    assert_eq!(same.rules(), cyclic.rules());

    let sys = system(&[("a b", "b a")])?.equate(parse("a^2"))?;
    assert_eq!(sys.apply(&parse("b a^3 b")), parse("a b^2"));
    assert_eq!(sys.relations().count(), 2);
    Ok(())
}

#[test]
fn observe() -> Result<(), Error> {
    use crate::Event;
    let mut events = Vec::new();
    let relations = [(parse("a b"), parse("b")), (parse("b a"), parse("a"))];
    let sys = RewriteSystem::observe(relations, &Config::default(), &mut events)?;
    assert_eq!(sys.rules().get(&parse("a^2")), Some(&parse("a")));
    assert!(events.contains(&Event::Round(0)));
    assert!(events.contains(&Event::Reduced {
        first: parse("a"),
        second: parse("a^2")
    }));
    assert_eq!(events.last(), Some(&Event::Confluent { rounds: 2 }));
    Ok(())
}

#[test]
fn display() -> Result<(), Error> {
    use alloc::string::ToString;
    let sys = system(&[("a b", "b a"), ("a^2", "1")])?;
    assert_eq!(sys.to_string(), "⟨b a = a b, a^2 = 1⟩");
    Ok(())
}

#[test]
fn shared() {
    fn send_sync<T: Send + Sync>() {}
    send_sync::<RewriteSystem>();
}
