use crate::{cmd, Command, Token};
use logos::Logos;

pub use cmd::Error;

/// Iterator over the commands in a string.
pub struct CmdIter<'s> {
    lexer: logos::Lexer<'s, Token<'s>>,
}

impl<'s> CmdIter<'s> {
    pub fn new(s: &'s str) -> Self {
        Self {
            lexer: Token::lexer(s),
        }
    }
}

impl<'s> Iterator for CmdIter<'s> {
    type Item = Result<Command<&'s str>, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        let mut tokens = self.lexer.by_ref().filter(|token| *token != Token::Space);
        let first = tokens.next()?;
        Some(Command::parse(first, &mut tokens))
    }
}

#[test]
fn commands() -> Result<(), Error> {
    use crate::Term;
    use alloc::vec::Vec;
    let cmds = "a^3. b^2 = 1. (; twisted ;) b a = a^2 b.\n? a b a.";
    let cmds: Vec<_> = CmdIter::new(cmds).collect::<Result<_, _>>()?;
    assert_eq!(cmds.len(), 4);
    assert_eq!(cmds[1], Command::Relation(Term::parse_str("b^2")?, Term::One));
    assert!(matches!(cmds[3], Command::Query(_)));
    Ok(())
}

#[test]
fn trailing_garbage() {
    let mut iter = CmdIter::new("a^3. b =");
    assert!(matches!(iter.next(), Some(Ok(_))));
    assert!(matches!(iter.next(), Some(Err(_))));
}
