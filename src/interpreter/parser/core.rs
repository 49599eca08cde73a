use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Lexer},
        parser::binary::parse_expression,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// What to do with input that follows a complete expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Stop after the expression and leave the rest of the source unread.
    ///
    /// `1 + 2 3` parses as `1 + 2`. Characters that no token starts with are
    /// still reported, because the lexer has already scanned them as
    /// lookahead.
    #[default]
    Ignore,
    /// Require the expression to be followed by the end of the source.
    Reject,
}

/// How a closing parenthesis is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParenMatching {
    /// Accept a `)` lookahead, or the end of input when the last byte of the
    /// source is `)`.
    ///
    /// The second rule lets one `)` close several groups at the very end of
    /// the source, so `((1)` parses as `1`.
    #[default]
    Lenient,
    /// Accept only a `)` lookahead.
    Strict,
}

/// Deepest nesting of parentheses and negations accepted by default.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Settings that change how [`parse_with_options`] treats its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Handling of tokens after a complete expression.
    pub trailing:    TrailingInput,
    /// Recognition of closing parentheses.
    pub parens:      ParenMatching,
    /// Deepest accepted nesting of `(` and unary `-`.
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { trailing:    TrailingInput::Ignore,
               parens:      ParenMatching::Lenient,
               max_nesting: MAX_NESTING_DEPTH, }
    }
}

impl ParseOptions {
    /// Options that reject anything after the expression and require every
    /// group to be closed by its own `)`.
    #[must_use]
    pub const fn strict() -> Self {
        Self { trailing:    TrailingInput::Reject,
               parens:      ParenMatching::Strict,
               max_nesting: MAX_NESTING_DEPTH, }
    }
}

/// A lexer paired with exactly one token of lookahead.
///
/// Grammar procedures inspect the lookahead with [`TokenStream::peek`] and
/// consume it with [`TokenStream::advance`]. The stream is created inside a
/// single parse call, so no cursor state outlives it. It also tracks how deep
/// the current factor is nested, so recursion stays bounded.
pub struct TokenStream<'src> {
    lexer:     Lexer<'src>,
    lookahead: Lexeme,
    options:   ParseOptions,
    depth:     usize,
}

impl<'src> TokenStream<'src> {
    /// Creates a stream over `source` with default options and scans the
    /// first token.
    ///
    /// # Errors
    /// Propagates any lexer error raised by the first token.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        Self::with_options(source, ParseOptions::default())
    }

    /// Creates a stream over `source` that parses according to `options`.
    ///
    /// # Errors
    /// Propagates any lexer error raised by the first token.
    pub fn with_options(source: &'src str, options: ParseOptions) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token()?;

        Ok(Self { lexer,
                  lookahead,
                  options,
                  depth: 0 })
    }

    /// The options this stream parses with.
    #[must_use]
    pub const fn options(&self) -> ParseOptions {
        self.options
    }

    /// Returns the byte right before `position` in the source, if any.
    #[must_use]
    pub fn byte_before(&self, position: usize) -> Option<u8> {
        let index = position.checked_sub(1)?;
        self.lexer.source().as_bytes().get(index).copied()
    }

    /// Records one more level of nesting for the factor starting at
    /// `position`.
    ///
    /// # Errors
    /// `NestingTooDeep` if the configured limit is already reached.
    pub fn enter_nested(&mut self, position: usize) -> ParseResult<()> {
        if self.depth >= self.options.max_nesting {
            return Err(ParseError::NestingTooDeep { limit: self.options.max_nesting,
                                                    position });
        }
        self.depth += 1;

        Ok(())
    }

    /// Leaves a level entered with [`TokenStream::enter_nested`].
    pub const fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the current lookahead without consuming it.
    #[must_use]
    pub const fn peek(&self) -> Lexeme {
        self.lookahead
    }

    /// Consumes the lookahead, scans the next token and returns the consumed
    /// lexeme.
    ///
    /// # Errors
    /// Propagates any lexer error raised while scanning the new lookahead.
    pub fn advance(&mut self) -> ParseResult<Lexeme> {
        let next = self.lexer.next_token()?;

        Ok(std::mem::replace(&mut self.lookahead, next))
    }
}

/// Parses an expression with default options.
///
/// Input following a complete expression is ignored, see
/// [`TrailingInput::Ignore`].
///
/// # Errors
/// Returns a [`ParseError`] for the first lexical or syntactic problem.
///
/// # Example
/// ```
/// use evalexp::{
///     ast::{BinaryOperator, Expr},
///     parse,
/// };
///
/// let expr = parse("4 - 1").unwrap();
///
/// assert_eq!(expr, Expr::binary(BinaryOperator::Sub, Expr::number(4.0), Expr::number(1.0)));
/// ```
pub fn parse(text: &str) -> ParseResult<Expr> {
    parse_with_options(text, ParseOptions::default())
}

/// Parses an expression using the given options.
///
/// # Errors
/// Returns a [`ParseError`] for the first lexical or syntactic problem, an
/// `UnexpectedToken` for trailing input when `options.trailing` is
/// [`TrailingInput::Reject`], and `NestingTooDeep` when groups or negations
/// nest deeper than `options.max_nesting`.
///
/// # Example
/// ```
/// use evalexp::{ParseOptions, parse_with_options};
///
/// assert!(parse_with_options("1 + 2)", ParseOptions::default()).is_ok());
/// assert!(parse_with_options("1 + 2)", ParseOptions::strict()).is_err());
///
/// assert!(parse_with_options("((1)", ParseOptions::default()).is_ok());
/// assert!(parse_with_options("((1)", ParseOptions::strict()).is_err());
/// ```
pub fn parse_with_options(text: &str, options: ParseOptions) -> ParseResult<Expr> {
    let mut tokens = TokenStream::with_options(text, options)?;
    let expr = parse_expression(&mut tokens)?;

    let rest = tokens.peek();
    if !rest.is_end_of_input() {
        if options.trailing == TrailingInput::Reject {
            return Err(ParseError::UnexpectedToken { token:    rest.to_string(),
                                                     position: rest.position, });
        }
        debug!(position = rest.position, "ignoring input after complete expression");
    }

    Ok(expr)
}
