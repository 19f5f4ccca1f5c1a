//! Parser for words and relations in free monoids.
//!
//! A word is a sequence of factors, optionally separated by `*`.
//! A factor is an atom, the identity `1`, or a parenthesised word,
//! each possibly raised to an integer power with `^`.
//! Commands are terminated by a period:
//! `l = r.` relates two words, `w.` is short for `w = 1.`, and
//! `? w.` asks for the normal form of `w`.
//!
//! Example usage:
//!
//! ~~~
//! use word_parse::{CmdIter, Command, Error};
//!
//! let cmds = "a^3. b^2. (a b)^2 = 1. ? b a b.";
//! let cmds: Result<Vec<_>, _> = CmdIter::new(&cmds).collect();
//! assert_eq!(cmds?.len(), 4);
//! # Ok::<_, Error>(())
//! ~~~
#![no_std]

extern crate alloc;

pub mod cmd;
mod cmditer;
pub mod lex;
pub mod term;

pub use cmd::Command;
pub use cmditer::{CmdIter, Error};
pub use lex::Token;
pub use term::Term;

use logos::Logos;

pub fn lex(s: &str) -> impl Iterator<Item = Token<'_>> {
    Token::lexer(s).filter(|token| *token != Token::Space)
}
