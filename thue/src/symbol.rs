//! Shared atom names.

use crate::Error;
use alloc::{string::ToString, sync::Arc};
use core::borrow::Borrow;
use core::fmt;
use fnv::FnvHashSet;

/// Name of an atom, shared between all words that mention it.
///
/// Cloning a symbol only increments a reference count.
/// Symbols are compared and hashed by their names,
/// so two symbols created separately from the same name are equal:
///
/// ~~~
/// # use thue::Symbol;
/// let a1 = Symbol::new("a")?;
/// let a2 = Symbol::new("a")?;
/// let b = Symbol::new("b")?;
/// assert_eq!(a1, a2);
/// assert!(a1 < b);
/// assert!(Symbol::new(" ").is_err());
/// # Ok::<_, thue::Error>(())
/// ~~~
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Create a symbol, failing if the name is empty or consists only of whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.trim().is_empty() {
            return Err(Error::InvalidAtomName(name.to_string()));
        }
        Ok(Self(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Set of symbols that hands out one shared allocation per name.
#[derive(Default)]
pub struct Symbols(FnvHashSet<Symbol>);

impl Symbols {
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the symbol with the given name, creating it if it is new.
    pub fn insert(&mut self, name: &str) -> Result<Symbol, Error> {
        if let Some(sym) = self.0.get(name) {
            return Ok(sym.clone());
        }
        let sym = Symbol::new(name)?;
        self.0.insert(sym.clone());
        Ok(sym)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn shared() -> Result<(), Error> {
    let mut syms = Symbols::new();
    let a1 = syms.insert("a")?;
    let a2 = syms.insert("a")?;
    syms.insert("b")?;
    assert!(Arc::ptr_eq(&a1.0, &a2.0));
    assert_eq!(syms.len(), 2);
    assert_eq!(syms.insert(""), Err(Error::InvalidAtomName("".to_string())));
    Ok(())
}
