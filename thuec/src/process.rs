//! Processing of relations and queries.

use crate::{Error, Opt};
use core::fmt::{self, Display};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use thue::{RewriteSystem, Rule, Symbols, Word};
use word_parse::{CmdIter, Command};

/// Relations and queries collected from all inputs.
#[derive(Default)]
pub struct Session {
    syms: Symbols,
    relations: Vec<(Word, Word)>,
    queries: Vec<Word>,
}

/// Result of completing the relations and normalising the queries.
pub struct Report {
    /// rules to print, if requested
    pub rules: Option<Vec<Rule>>,
    /// queried words with their normal forms
    pub answers: Vec<(Word, Word)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse all commands of a text, stopping at the first error.
    pub fn read(&mut self, text: &str) -> Result<(), Error> {
        for cmd in CmdIter::new(text) {
            match cmd? {
                Command::Relation(l, r) => {
                    let rel = (self.syms.word(&l)?, self.syms.word(&r)?);
                    log::info!("Add relation {} = {}", rel.0, rel.1);
                    self.relations.push(rel)
                }
                Command::Query(w) => {
                    let w = self.syms.word(&w)?;
                    log::info!("Query {}", w);
                    self.queries.push(w)
                }
            }
        }
        Ok(())
    }

    /// Complete all relations and normalise all queries.
    pub fn finish(self, opt: &Opt) -> Result<Report, Error> {
        log::info!("Complete {} relations", self.relations.len());
        let sys = RewriteSystem::with_config(self.relations, &opt.config())?;
        log::info!("Obtained {} rules", sys.rules().len());

        let rules = opt.rules.then(|| sys.rules().iter().collect());
        let answer = |w: &Word| (w.clone(), sys.apply(w));
        let answers = if opt.jobs.is_some() {
            self.queries.par_iter().map(answer).collect()
        } else {
            self.queries.iter().map(answer).collect()
        };
        Ok(Report { rules, answers })
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rule in self.rules.iter().flatten() {
            writeln!(f, "{}", rule)?
        }
        for (w, nf) in &self.answers {
            writeln!(f, "{} = {}", w, nf)?
        }
        Ok(())
    }
}

#[cfg(test)]
fn opt(args: &[&str]) -> Opt {
    use clap::Parser;
    Opt::parse_from(core::iter::once("thuec").chain(args.iter().copied()))
}

#[test]
fn symmetric() -> Result<(), Error> {
    let mut session = Session::new();
    session.read("(; symmetric group S3 ;) a^2. b^3.")?;
    session.read("(a b)^2 = 1. ? a b a. ? b^4 a^2.")?;
    let report = session.finish(&opt(&["-j"]))?;
    assert!(report.rules.is_none());
    assert_eq!(report.to_string(), "a b a = b^2\nb^4 a^2 = b\n");
    Ok(())
}

#[test]
fn rules() -> Result<(), Error> {
    let mut session = Session::new();
    session.read("a b = b a. ? b a b.")?;
    let report = session.finish(&opt(&["--rules"]))?;
    assert_eq!(report.to_string(), "b a ⟶ a b\nb a b = a b^2\n");
    Ok(())
}

#[test]
fn errors() {
    let mut session = Session::new();
    let err = session.read("a = b. c = ").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));

    let mut session = Session::new();
    assert!(session.read("a b = b. b a = a.").is_ok());
    let err = session.finish(&opt(&["--max-rounds", "1"])).err();
    let overflow = thue::Error::CompletionOverflow { rounds: 1 };
    assert!(matches!(err, Some(Error::Thue(e)) if e == overflow));
}
