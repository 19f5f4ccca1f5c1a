#![no_std]
#![forbid(unsafe_code)]

//! Confluent rewriting of words in finitely presented monoids and groups.
//!
//! This is the library underlying the `thuec` command-line tool.
//!
//! # Usage
//!
//! A [`Word`] is a product of atoms raised to integer powers, such as `a^2 b^-1`.
//! Words are always kept in reduced form, meaning that
//! adjacent powers of the same atom are merged and cancelled.
//!
//! Users describe a structure by *relations* between words,
//! such as `a^2 = 1` or `a b = b a`.
//! From these relations, a [`RewriteSystem`] is constructed:
//! every relation is oriented to a rewrite rule from the larger to the smaller word,
//! and Knuth-Bendix completion adds rules until
//! all overlaps between rules can be resolved.
//! Afterwards, [`RewriteSystem::apply`] yields the normal form of any word,
//! and two words are equal modulo the relations if their normal forms are.
//!
//! The following example completes the presentation of
//! the symmetric group on three elements and normalises a few words.
//!
//! ~~~
//! # use thue::{RewriteSystem, Word};
//! let w = |s: &str| s.parse::<Word>();
//! let relations = [
//!     (w("a^2")?, w("1")?),
//!     (w("b^3")?, w("1")?),
//!     (w("(a b)^2")?, w("1")?),
//! ];
//! let sys = RewriteSystem::new(relations, false)?;
//! assert_eq!(sys.apply(&w("a b a")?), w("b^2")?);
//! assert_eq!(sys.apply(&w("a^3 b^4")?), w("a b")?);
//! assert_eq!(sys.apply(&w("b^2 a b^2 a")?), w("1")?);
//! # Ok::<_, thue::Error>(())
//! ~~~
//!
//! Completion may not terminate for some presentations;
//! it is therefore bounded by a number of rounds given in a [`Config`].
//! Completion reports its progress as [`Event`]s to an [`Observer`],
//! which may for example log them with [`Trace`].

extern crate alloc;
#[macro_use]
extern crate log;

pub mod completion;
mod error;
mod event;
mod matching;
mod order;
mod parse;
mod rule;
mod rules;
mod symbol;
mod system;
mod word;

pub use completion::Config;
pub use error::Error;
pub use event::{Event, Observer, Silent, Trace};
pub use rule::Rule;
pub use rules::Rules;
pub use symbol::{Symbol, Symbols};
pub use system::RewriteSystem;
pub use word::Word;
