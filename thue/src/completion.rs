//! Knuth-Bendix completion of rewrite rules.

use crate::{Error, Event, Observer, Rule, Rules, Word};
use alloc::vec::Vec;
use itertools::Itertools;

/// Settings for completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// maximal number of rounds before completion gives up
    pub max_rounds: usize,
    /// log completion events
    pub log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rounds: 100,
            log: false,
        }
    }
}

/// Critical pairs of two rules.
///
/// Return every word in which the left-hand side of `r1` overlaps with
/// or contains the left-hand side of `r2`,
/// together with its rewritings by `r1` and by `r2` at the overlap.
fn critical_pairs(r1: &Rule, r2: &Rule) -> Result<Vec<(Word, Word, Word)>, Error> {
    let mut pairs = Vec::new();
    for (x, y) in r1.lhs.all_overlaps(&r2.lhs) {
        let word = x.checked_mul(&r2.lhs)?;
        pairs.push((word, r1.rhs.checked_mul(&y)?, x.checked_mul(&r2.rhs)?));
    }
    if r1 != r2 {
        if let Some((x, y)) = r1.lhs.contains(&r2.lhs) {
            let second = Word::try_product([x, r2.rhs.clone(), y])?;
            pairs.push((r1.lhs.clone(), r1.rhs.clone(), second));
        }
    }
    Ok(pairs)
}

/// Add rules until every critical pair
/// rewrites to the same normal form with both rules.
///
/// In each round, all critical pairs of the rules present at the start of the round
/// are examined, including those of a rule with itself.
/// Completion succeeds when a round adds no rule, and
/// fails if this does not happen within `max_rounds` rounds.
///
/// ~~~
/// # use thue::{completion::complete, Rules, Silent, Word};
/// let mut rules = Rules::new();
/// rules.resolve("a b".parse()?, "b".parse()?, &mut Silent);
/// rules.resolve("b a".parse()?, "a".parse()?, &mut Silent);
/// let rules = complete(rules, 10, &mut Silent)?;
/// assert_eq!(rules.len(), 4);
/// assert_eq!(rules.normalize(&"a b a^2".parse()?), "a".parse::<Word>()?);
/// assert_eq!(rules.normalize(&"b^2".parse()?), "b".parse::<Word>()?);
/// # Ok::<_, thue::Error>(())
/// ~~~
pub fn complete(mut rules: Rules, max_rounds: usize, obs: &mut impl Observer) -> Result<Rules, Error> {
    for round in 0..max_rounds {
        obs.event(&Event::Round(round));
        let snapshot: Vec<Rule> = rules.iter().collect();
        let mut added = false;
        for (r1, r2) in snapshot.iter().cartesian_product(&snapshot) {
            for (word, first, second) in critical_pairs(r1, r2)? {
                if first == second {
                    continue;
                }
                obs.event(&Event::Overlap {
                    first: r1.clone(),
                    second: r2.clone(),
                    word,
                });
                let first = rules.normalize(&first);
                let second = rules.normalize(&second);
                if first != second {
                    obs.event(&Event::Reduced {
                        first: first.clone(),
                        second: second.clone(),
                    });
                    added |= rules.resolve(first, second, obs);
                }
            }
        }
        if !added {
            obs.event(&Event::Confluent { rounds: round + 1 });
            return Ok(rules);
        }
    }
    Err(Error::CompletionOverflow { rounds: max_rounds })
}

#[test]
fn self_overlap() -> Result<(), Error> {
    use crate::Silent;
    let w = |s: &str| s.parse::<Word>();
    let mut rules = Rules::new();
    rules.resolve(w("a^2")?, w("b")?, &mut Silent);
    // `a^3` rewrites to both `b a` and `a b`
    let rules = complete(rules, 10, &mut Silent)?;
    assert_eq!(rules.get(&w("b a")?), Some(&w("a b")?));
    assert_eq!(rules.normalize(&w("a b a")?), w("b^2")?);
    Ok(())
}
