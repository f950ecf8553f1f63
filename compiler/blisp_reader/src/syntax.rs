//! Syntax tree.
//!
//! The tree keeps everything the source contained: every node carries a tag,
//! its literal text, and a span. Bracket tokens and comments stay in the tree
//! as `Delimiter` and `Comment` leaves; `read` is the step that drops them.

use blisp_stack::ensure_sufficient_stack;
use logos::Logos;

use crate::error::{ReadError, Span};
use crate::token::RawToken;

/// Classification of a syntax node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Whole input; its children are the top-level expressions.
    Root,
    Number,
    Symbol,
    String,
    Comment,
    SExpr,
    QExpr,
    /// One of `(`, `)`, `{`, `}`.
    Delimiter,
}

/// A node of the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub tag: Tag,
    /// Literal source text (empty for list and root nodes).
    pub contents: String,
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    fn leaf(tag: Tag, contents: &str, span: Span) -> Self {
        SyntaxNode {
            tag,
            contents: contents.to_owned(),
            span,
            children: Vec::new(),
        }
    }

    /// Comments and delimiters carry no value.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self.tag, Tag::Comment | Tag::Delimiter)
    }
}

struct Token<'src> {
    kind: RawToken,
    text: &'src str,
    span: Span,
}

/// Tokenize `source`, failing on the first unrecognized input.
fn lex(source: &str) -> Result<Vec<Token<'_>>, ReadError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        match result {
            Ok(kind) => tokens.push(Token { kind, text, span }),
            Err(()) => {
                let ch = source[span.start..].chars().next().unwrap_or('\0');
                return Err(if ch == '"' {
                    ReadError::UnterminatedString {
                        span: span.start..source.len(),
                    }
                } else {
                    ReadError::UnexpectedChar { ch, span }
                });
            }
        }
    }

    Ok(tokens)
}

/// Parse `source` into a tree rooted at a `Tag::Root` node.
pub fn parse(source: &str) -> Result<SyntaxNode, ReadError> {
    let tokens = lex(source)?;
    tracing::trace!(tokens = tokens.len(), "lexed source");

    let mut parser = Parser { tokens, pos: 0 };
    let mut root = SyntaxNode {
        tag: Tag::Root,
        contents: String::new(),
        span: 0..source.len(),
        children: Vec::new(),
    };

    while let Some(token) = parser.bump() {
        match token.kind {
            RawToken::RParen | RawToken::RBrace => {
                return Err(ReadError::UnexpectedCloser {
                    found: token.kind.delimiter().unwrap_or(')'),
                    span: token.span,
                });
            }
            _ => root.children.push(parser.node(token)?),
        }
    }

    Ok(root)
}

struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn bump(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(Token {
            kind: token.kind,
            text: token.text,
            span: token.span.clone(),
        })
    }

    /// Build the node starting at `token` (which is not a closer).
    fn node(&mut self, token: Token<'src>) -> Result<SyntaxNode, ReadError> {
        match token.kind {
            RawToken::Number => Ok(SyntaxNode::leaf(Tag::Number, token.text, token.span)),
            RawToken::Symbol => Ok(SyntaxNode::leaf(Tag::Symbol, token.text, token.span)),
            RawToken::String => Ok(SyntaxNode::leaf(Tag::String, token.text, token.span)),
            RawToken::Comment => Ok(SyntaxNode::leaf(Tag::Comment, token.text, token.span)),
            RawToken::LParen => ensure_sufficient_stack(|| self.list(token, Tag::SExpr, RawToken::RParen)),
            RawToken::LBrace => ensure_sufficient_stack(|| self.list(token, Tag::QExpr, RawToken::RBrace)),
            RawToken::RParen | RawToken::RBrace => Err(ReadError::UnexpectedCloser {
                found: token.kind.delimiter().unwrap_or(')'),
                span: token.span,
            }),
        }
    }

    fn list(&mut self, open: Token<'src>, tag: Tag, close: RawToken) -> Result<SyntaxNode, ReadError> {
        let start = open.span.start;
        let open_char = open.kind.delimiter().unwrap_or('(');
        let mut children = vec![SyntaxNode::leaf(Tag::Delimiter, open.text, open.span.clone())];

        loop {
            let Some(token) = self.bump() else {
                return Err(ReadError::UnclosedDelimiter {
                    open: open_char,
                    span: open.span,
                });
            };

            if token.kind == close {
                let end = token.span.end;
                children.push(SyntaxNode::leaf(Tag::Delimiter, token.text, token.span));
                return Ok(SyntaxNode {
                    tag,
                    contents: String::new(),
                    span: start..end,
                    children,
                });
            }

            children.push(self.node(token)?);
        }
    }
}
