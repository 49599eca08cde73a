use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_expression,
            core::{ParenMatching, ParseResult, TokenStream},
        },
    },
};

/// Parses a factor.
///
/// A factor is the tightest-binding unit of the grammar: a number, a negated
/// factor, or a parenthesised expression. Negation is right-associative, so
/// `--x` is parsed as `-(-x)`.
///
/// Grammar:
/// ```text
///     factor := "(" expression ")"
///             | "-" factor
///             | number
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a factor.
///
/// # Returns
/// The parsed factor node.
///
/// # Errors
/// - `UnexpectedToken` if the lookahead cannot start a factor (this includes
///   the end of input).
/// - `ExpectedToken` if a parenthesised expression is not closed.
/// - `NestingTooDeep` if `(` and `-` nest past the configured limit.
/// - Propagates any errors from sub-expression parsing.
pub(crate) fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let lookahead = tokens.peek();

    match lookahead.token {
        Some(Token::LParen) => {
            tokens.enter_nested(lookahead.position)?;
            let expr = parse_grouping(tokens)?;
            tokens.leave_nested();
            Ok(expr)
        },
        Some(Token::Minus) => {
            tokens.enter_nested(lookahead.position)?;
            tokens.advance()?;
            let operand = parse_factor(tokens)?;
            tokens.leave_nested();
            Ok(Expr::negate(operand))
        },
        Some(Token::Number(value)) => {
            tokens.advance()?;
            Ok(Expr::number(value))
        },
        _ => Err(ParseError::UnexpectedToken { token:    lookahead.to_string(),
                                               position: lookahead.position, }),
    }
}

/// Parses a parenthesised expression.
///
/// Grouping does not create a node of its own: `(1 + 2)` yields the tree of
/// `1 + 2`.
///
/// With [`ParenMatching::Lenient`] a group is also closed when the lookahead
/// is the end of input and the byte just before it is `)`, so the final `)`
/// of the source can close more than one group.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    tokens.advance()?;
    let expr = parse_expression(tokens)?;

    let closing = tokens.peek();
    let closed = match closing.token {
        Some(Token::RParen) => true,
        None => {
            tokens.options().parens == ParenMatching::Lenient
            && tokens.byte_before(closing.position) == Some(b')')
        },
        Some(_) => false,
    };
    if !closed {
        return Err(ParseError::ExpectedToken { expected: ')',
                                               found:    closing.to_string(),
                                               position: closing.position, });
    }
    tokens.advance()?;

    Ok(expr)
}
