use logos::Logos;
use tracing::trace;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// End of input is not a variant: the [`Lexer`] reports it as a [`Lexeme`]
/// without a token.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    ///
    /// Exponent notation is not recognised: `2.5e2` is the number `2.5`
    /// followed by the unrecognised character `e`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\n\r\f\x0B]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the source character of single-character tokens.
    ///
    /// Numbers span several characters and return `None`.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Number(_) | Self::Ignored => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            // `Ignored` is skipped while scanning and has no symbol.
            other => write!(f, "{}", other.symbol().unwrap_or(' ')),
        }
    }
}

/// Errors raised by the generated lexer before they are turned into
/// [`ParseError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token starts with the current character.
    #[default]
    UnrecognizedCharacter,
    /// A digit sequence could not be converted to a number.
    NumberExpected,
}

/// A token together with the byte offset where it starts.
///
/// `token` is `None` once the source is exhausted; `position` is then the
/// length of the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lexeme {
    /// The recognised token, or `None` at end of input.
    pub token:    Option<Token>,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

impl Lexeme {
    /// Whether this lexeme marks the end of the source.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        self.token.is_none()
    }
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.token {
            Some(token) => write!(f, "{token}"),
            None => write!(f, "end of input"),
        }
    }
}

/// On-demand tokenizer over a borrowed source string.
///
/// The lexer owns its cursor and advances it one token per call to
/// [`Lexer::next_token`]. It never looks back.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// The complete source this lexer scans.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }

    /// Produces the next token and advances the cursor past it.
    ///
    /// Leading whitespace is skipped. Once the source is exhausted every call
    /// returns an end-of-input lexeme.
    ///
    /// # Errors
    /// - `UnexpectedToken` carrying the character if no token starts with it.
    /// - `NumberExpected` if a digit run cannot be converted to a number.
    ///
    /// # Example
    /// ```
    /// use evalexp::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new(" 2.5*(");
    ///
    /// assert_eq!(lexer.next_token().unwrap().token, Some(Token::Number(2.5)));
    /// assert_eq!(lexer.next_token().unwrap().token, Some(Token::Star));
    /// assert_eq!(lexer.next_token().unwrap().position, 5);
    /// assert!(lexer.next_token().unwrap().is_end_of_input());
    /// ```
    pub fn next_token(&mut self) -> Result<Lexeme, ParseError> {
        let lexeme = match self.inner.next() {
            None => Lexeme { token:    None,
                             position: self.inner.source().len(), },
            Some(Ok(token)) => Lexeme { token:    Some(token),
                                        position: self.inner.span().start, },
            Some(Err(LexError::NumberExpected)) => {
                return Err(ParseError::NumberExpected { position: self.inner.span().start });
            },
            Some(Err(LexError::UnrecognizedCharacter)) => {
                let position = self.inner.span().start;
                let token = self.inner.slice().chars().next().map_or_else(String::new, String::from);
                return Err(ParseError::UnexpectedToken { token, position });
            },
        };
        trace!(%lexeme, position = lexeme.position, "scanned token");

        Ok(lexeme)
    }
}

/// Converts the current digit run into a number.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::NumberExpected)`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::NumberExpected)
}
