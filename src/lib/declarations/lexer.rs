use crate::*;
use core::iter::{Enumerate, Peekable};
use std::str::Chars;

type CharStream<'a> = Peekable<Enumerate<Chars<'a>>>;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Name(String),
    OpenBracket,
    CloseBracket,
    Comma,
    Pipe,
    EOF,
}

#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Name(name) => write!(f, "`{}`", name),
            TokenKind::OpenBracket => write!(f, "`[`"),
            TokenKind::CloseBracket => write!(f, "`]`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::Pipe => write!(f, "`|`"),
            TokenKind::EOF => write!(f, "end of input"),
        }
    }
}

pub fn tokenize(code: &str) -> Result<Vec<Token>, DeclarationError> {
    let mut chars = code.chars().enumerate().peekable();
    let mut tokens = vec![];

    while let Some(token) = next_token(&mut chars)? {
        tokens.push(token);
    }

    tokens.push(Token {
        kind: TokenKind::EOF,
        offset: code.chars().count(),
    });

    Ok(tokens)
}

fn next_token(stream: &mut CharStream) -> Result<Option<Token>, DeclarationError> {
    while let Some((_, c)) = stream.peek() {
        if c.is_whitespace() {
            stream.next();
        } else {
            break;
        }
    }

    let (offset, ch) = match stream.next() {
        None => return Ok(None),
        Some(next) => next,
    };

    let kind = match ch {
        '[' => TokenKind::OpenBracket,
        ']' => TokenKind::CloseBracket,
        ',' => TokenKind::Comma,
        '|' => TokenKind::Pipe,

        c if c.is_alphabetic() || c == '_' => {
            let mut chars = vec![ch];
            loop {
                match stream.peek() {
                    Some((_, s)) if s.is_alphanumeric() || *s == '_' || *s == '.' => {
                        chars.push(*s);
                        stream.next();
                    }
                    _ => break,
                }
            }
            TokenKind::Name(chars.iter().collect())
        }

        c => {
            return Err(DeclarationError::Syntax {
                offset,
                message: format!("Unexpected character `{}`", c),
            })
        }
    };

    Ok(Some(Token { kind, offset }))
}
