use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_factor,
        },
    },
};

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It reads one term and hands
/// it to [`parse_expression_rest`] as the left operand of any following
/// additions or subtractions.
///
/// Grammar: `expression := term expression_rest`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let term = parse_term(tokens)?;
    parse_expression_rest(tokens, term)
}

/// Parses the continuation of a sum.
///
/// Each `+` or `-` combines the operand parsed so far with the next term, so
/// `a - b - c` becomes `(a - b) - c`. The empty continuation returns `left`
/// unchanged, which is the same as adding 0.
///
/// Grammar: `expression_rest := ("+" | "-") term expression_rest | ε`
///
/// # Parameters
/// - `tokens`: Token stream positioned after a term.
/// - `left`: The operand accumulated so far.
///
/// # Returns
/// A left-associative `Expr::BinaryOp` tree, or `left` itself.
pub fn parse_expression_rest(tokens: &mut TokenStream<'_>, mut left: Expr) -> ParseResult<Expr> {
    loop {
        let op = match tokens.peek().token {
            Some(Token::Plus) => BinaryOperator::Add,
            Some(Token::Minus) => BinaryOperator::Sub,
            _ => break,
        };
        tokens.advance()?;
        let right = parse_term(tokens)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

/// Parses a term.
///
/// Grammar: `term := factor term_rest`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the term.
///
/// # Returns
/// The parsed term node.
pub fn parse_term(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let factor = parse_factor(tokens)?;
    parse_term_rest(tokens, factor)
}

/// Parses the continuation of a product.
///
/// Works like [`parse_expression_rest`] one precedence level up: `*` and `/`
/// fold left, and the empty continuation (multiplying by 1) returns `left`.
///
/// Grammar: `term_rest := ("*" | "/") factor term_rest | ε`
pub fn parse_term_rest(tokens: &mut TokenStream<'_>, mut left: Expr) -> ParseResult<Expr> {
    loop {
        let op = match tokens.peek().token {
            Some(Token::Star) => BinaryOperator::Mul,
            Some(Token::Slash) => BinaryOperator::Div,
            _ => break,
        };
        tokens.advance()?;
        let right = parse_factor(tokens)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}
