//! Raw token definition.
//!
//! The `RawToken` enum is the logos-derived tokenizer output; the tree
//! builder in `syntax` turns it into tagged nodes.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r";[^\r\n]*")]
    Comment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Wins over `Symbol` on equal length, so `-5` is a number and `-` a symbol.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", priority = 10)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&]+")]
    Symbol,

    // Raw newlines are allowed inside strings
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,
}

impl RawToken {
    /// The delimiter character, for bracket tokens.
    pub(crate) fn delimiter(self) -> Option<char> {
        match self {
            RawToken::LParen => Some('('),
            RawToken::RParen => Some(')'),
            RawToken::LBrace => Some('{'),
            RawToken::RBrace => Some('}'),
            _ => None,
        }
    }
}
