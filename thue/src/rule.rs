use crate::Word;
use core::cmp::Ordering;
use core::fmt::{self, Display};

/// Rewrite rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// left-hand side (word to replace)
    pub lhs: Word,
    /// right-hand side (word to replace with)
    pub rhs: Word,
}

impl Rule {
    /// Construct a rule from an equation, rewriting the larger word to the smaller one.
    ///
    /// Return `None` if both words are equal.
    ///
    /// ~~~
    /// # use thue::{Rule, Word};
    /// let (a, b) = (Word::atom("a")?, Word::atom("b")?);
    /// let rule = Rule::orient(a.clone(), a.pow(2) * b).unwrap();
    /// assert_eq!(rule.to_string(), "a^2 b ⟶ a");
    /// assert_eq!(Rule::orient(a.clone(), a), None);
    /// # Ok::<_, thue::Error>(())
    /// ~~~
    pub fn orient(w1: Word, w2: Word) -> Option<Self> {
        match w1.cmp(&w2) {
            Ordering::Greater => Some(Self { lhs: w1, rhs: w2 }),
            Ordering::Less => Some(Self { lhs: w2, rhs: w1 }),
            Ordering::Equal => None,
        }
    }

    /// Replace all occurrences of the left-hand side in a word.
    pub fn apply(&self, w: &Word) -> Word {
        w.rewrite(&self.lhs, &self.rhs)
    }
}

impl From<Rule> for (Word, Word) {
    fn from(rule: Rule) -> Self {
        (rule.lhs, rule.rhs)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ⟶ {}", self.lhs, self.rhs)
    }
}
