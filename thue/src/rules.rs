//! Sets of oriented rewrite rules.

use crate::{Event, Observer, Rule, Word};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use im::ordmap::OrdMap;
use itertools::Itertools;

/// Map from left-hand sides to right-hand sides of rewrite rules.
///
/// Every left-hand side is greater than its right-hand side.
/// The map is persistent, so cloning it is cheap and
/// clones share all rules that they have in common.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rules(OrdMap<Word, Word>);

impl Rules {
    /// Construct an empty set of rules.
    ///
    /// ~~~
    /// # use thue::Rules;
    /// let rules = Rules::new();
    /// assert!(rules.is_empty());
    /// ~~~
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the right-hand side of the rule with the given left-hand side.
    pub fn get(&self, lhs: &Word) -> Option<&Word> {
        self.0.get(lhs)
    }

    /// Iterate over all rules, ordered by their left-hand sides.
    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        self.0.iter().map(|(lhs, rhs)| Rule {
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        })
    }

    /// Insert a rule, removing all rules whose left-hand side contains
    /// the left-hand side of the new rule.
    ///
    /// The left-hand side must be greater than the right-hand side,
    /// as ensured by [`Rule::orient`].
    /// Return the removed rules.
    pub fn add(&mut self, rule: Rule, obs: &mut impl Observer) -> Vec<Rule> {
        debug_assert!(rule.lhs > rule.rhs, "rule {} does not decrease", rule);
        let obsolete: Vec<_> = self
            .iter()
            .filter(|old| old.lhs.contains(&rule.lhs).is_some())
            .collect();
        for old in &obsolete {
            self.0.remove(&old.lhs);
            obs.event(&Event::RuleRemoved(old.clone()));
        }
        obs.event(&Event::RuleAdded(rule.clone()));
        self.0.insert(rule.lhs, rule.rhs);
        obsolete
    }

    /// Make two words equal, adding rules as necessary.
    ///
    /// Both words are normalised and, if they still differ, turned into a new rule.
    /// Rules made obsolete by the new rule are not forgotten,
    /// but their equations are resolved again with the new rule in place.
    /// Return true if any rule was added.
    pub fn resolve(&mut self, w1: Word, w2: Word, obs: &mut impl Observer) -> bool {
        let mut added = false;
        let mut pending = Vec::from([(w1, w2)]);
        while let Some((w1, w2)) = pending.pop() {
            if let Some(rule) = Rule::orient(self.normalize(&w1), self.normalize(&w2)) {
                let obsolete = self.add(rule, obs);
                pending.extend(obsolete.into_iter().map(<(Word, Word)>::from));
                added = true;
            }
        }
        added
    }

    /// Rewrite a word with all rules until it does not change any more.
    ///
    /// Because every rule rewrites a word to a smaller one,
    /// this always terminates.
    pub fn normalize(&self, w: &Word) -> Word {
        let mut w = w.clone();
        loop {
            let next = self.0.iter().fold(w.clone(), |w, (l, r)| w.rewrite(l, r));
            if next == w {
                return w;
            }
            trace!("rewrite {} to {}", w, next);
            w = next;
        }
    }
}

impl Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iter().format("\n"))
    }
}

#[cfg(test)]
fn parse(s: &str) -> Word {
    s.parse().unwrap()
}

#[test]
fn add() {
    let mut rules = Rules::new();
    let mut events = Vec::new();
    let rule = |l, r| Rule::orient(parse(l), parse(r)).unwrap();
    assert!(rules.add(rule("a b c", "d"), &mut events).is_empty());
    assert!(rules.add(rule("c a", "1"), &mut events).is_empty());

    // `b c` is contained in `a b c`, which becomes obsolete
    let obsolete = rules.add(rule("b c", "e"), &mut events);
    assert_eq!(obsolete, [rule("a b c", "d")]);
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.get(&parse("b c")), Some(&parse("e")));
    assert_eq!(events.last(), Some(&Event::RuleAdded(rule("b c", "e"))));
    assert_eq!(events[2], Event::RuleRemoved(rule("a b c", "d")));
}

#[test]
fn resolve() {
    use crate::Silent;
    let mut rules = Rules::new();
    assert!(rules.resolve(parse("a b c"), parse("d"), &mut Silent));
    assert!(rules.resolve(parse("b c"), parse("e"), &mut Silent));
    // the removed rule `a b c ⟶ d` survives as `a e ⟶ d`
    assert_eq!(rules.get(&parse("a e")), Some(&parse("d")));
    assert_eq!(rules.normalize(&parse("a b c")), parse("d"));
    // nothing is added for equations that already hold
    assert!(!rules.resolve(parse("a b c"), parse("a e"), &mut Silent));
}

#[test]
fn normalize() {
    let mut rules = Rules::new();
    rules.resolve(parse("a^2"), parse("1"), &mut crate::Silent);
    rules.resolve(parse("b a"), parse("a b"), &mut crate::Silent);
    assert_eq!(rules.normalize(&parse("a^5 b")), parse("a b"));
    assert_eq!(rules.normalize(&parse("b a b a")), parse("b^2"));
    assert_eq!(rules.normalize(&parse("1")), parse("1"));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic]
fn increasing() {
    let rule = Rule {
        lhs: parse("a"),
        rhs: parse("a b"),
    };
    Rules::new().add(rule, &mut crate::Silent);
}
