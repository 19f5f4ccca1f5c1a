//! Events emitted during completion.

use crate::{Rule, Word};
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Step of the completion procedure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// a new round over all pairs of rules starts
    Round(usize),
    /// the left-hand sides of two rules overlap in a word
    Overlap { first: Rule, second: Rule, word: Word },
    /// the overlap was rewritten with both rules and normalised
    Reduced { first: Word, second: Word },
    RuleAdded(Rule),
    /// a rule was dropped because its left-hand side contains the one of a new rule
    RuleRemoved(Rule),
    /// no round added a new rule
    Confluent { rounds: usize },
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Round(n) => write!(f, "round {}", n),
            Self::Overlap {
                first,
                second,
                word,
            } => write!(f, "found overlap {} between {} and {}", word, first, second),
            Self::Reduced { first, second } => write!(f, "reduced to {} and {}", first, second),
            Self::RuleAdded(rule) => write!(f, "add rule {}", rule),
            Self::RuleRemoved(rule) => write!(f, "remove obsolete rule {}", rule),
            Self::Confluent { rounds } => write!(f, "confluent after {} rounds", rounds),
        }
    }
}

/// Receiver of completion events.
pub trait Observer {
    fn event(&mut self, event: &Event);
}

/// Discard all events.
pub struct Silent;

impl Observer for Silent {
    fn event(&mut self, _: &Event) {}
}

/// Log events at debug level, indenting them according to their nesting.
#[derive(Default)]
pub struct Trace {
    depth: usize,
}

impl Observer for Trace {
    fn event(&mut self, event: &Event) {
        let depth = match event {
            Event::Round(_) | Event::Confluent { .. } => {
                self.depth = 1;
                0
            }
            Event::Overlap { .. } => {
                self.depth = 2;
                1
            }
            Event::Reduced { .. } | Event::RuleAdded(_) => self.depth,
            Event::RuleRemoved(_) => self.depth + 1,
        };
        debug!("{:indent$}{}", "", event, indent = 2 * depth);
    }
}

/// Collect all events.
impl Observer for Vec<Event> {
    fn event(&mut self, event: &Event) {
        self.push(event.clone())
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn event(&mut self, event: &Event) {
        (**self).event(event)
    }
}

#[test]
fn display() -> Result<(), crate::Error> {
    use alloc::string::ToString;
    let rule = |l: &str, r: &str| Ok::<_, crate::Error>(Rule::orient(l.parse()?, r.parse()?));
    let ab = rule("a b", "c")?.unwrap();
    assert_eq!(Event::RuleAdded(ab.clone()).to_string(), "add rule a b ⟶ c");
    assert_eq!(Event::RuleRemoved(ab).to_string(), "remove obsolete rule a b ⟶ c");
    assert_eq!(Event::Confluent { rounds: 2 }.to_string(), "confluent after 2 rounds");
    Ok(())
}
