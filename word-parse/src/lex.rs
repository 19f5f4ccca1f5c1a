use core::fmt::{self, Display};
use logos::{Lexer, Logos};

#[derive(Logos, Debug, PartialEq)]
pub enum Token<'s> {
    #[token("^")]
    Caret,

    #[token("*")]
    Star,

    #[token("(")]
    LPar,

    #[token(")")]
    RPar,

    #[token("=")]
    Eq,

    #[token("?")]
    Query,

    #[token(".")]
    Dot,

    #[regex("-?[0-9]+", int)]
    Int(i64),

    #[regex("[a-zA-Z_][a-zA-Z0-9_']*")]
    Ident(&'s str),

    #[regex(r"[ \t\r\n\f]+")]
    #[token("(;", comment)]
    Space,

    // Logos requires one token variant to handle errors,
    // it can be named anything you wish.
    #[error]
    Error,
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Caret => "^".fmt(f),
            Self::Star => "*".fmt(f),
            Self::LPar => "(".fmt(f),
            Self::RPar => ")".fmt(f),
            Self::Eq => "=".fmt(f),
            Self::Query => "?".fmt(f),
            Self::Dot => ".".fmt(f),
            Self::Int(n) => n.fmt(f),
            Self::Ident(s) => s.fmt(f),
            Self::Space => " ".fmt(f),
            Self::Error => Err(Default::default()),
        }
    }
}

fn int<'s>(lex: &mut Lexer<'s, Token<'s>>) -> Option<i64> {
    lex.slice().parse().ok()
}

fn comment<'s>(lex: &mut Lexer<'s, Token<'s>>) -> Option<()> {
    // number of open comments
    let mut open = 1;
    let prefix: &[_] = &['(', ';'];
    while open > 0 {
        // go to first occurrence of either ';' or '('
        lex.bump(lex.remainder().find(prefix)?);
        if lex.remainder().starts_with("(;") {
            open += 1;
            lex.bump(2);
        } else if lex.remainder().starts_with(";)") {
            open -= 1;
            lex.bump(2);
        } else {
            lex.bump(1);
        }
    }
    Some(())
}

#[test]
fn tokens() {
    use alloc::vec::Vec;
    let toks: Vec<_> = crate::lex("a^-2 (; x (; y ;) ;) (b*c')^3 = 1.").collect();
    let expected = [
        Token::Ident("a"),
        Token::Caret,
        Token::Int(-2),
        Token::LPar,
        Token::Ident("b"),
        Token::Star,
        Token::Ident("c'"),
        Token::RPar,
        Token::Caret,
        Token::Int(3),
        Token::Eq,
        Token::Int(1),
        Token::Dot,
    ];
    assert_eq!(toks, expected);
}

#[test]
fn unclosed_comment() {
    use alloc::vec::Vec;
    let toks: Vec<_> = crate::lex("a (; b").collect();
    assert_eq!(toks[0], Token::Ident("a"));
    assert!(toks.contains(&Token::Error));
}
