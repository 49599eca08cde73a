/// The evaluator module reduces AST nodes to numbers.
///
/// The evaluator walks the tree produced by the parser and combines the
/// values of its children with IEEE-754 arithmetic.
///
/// # Responsibilities
/// - Evaluates literals, negation and the four arithmetic operators.
/// - Applies the configured division-by-zero policy.
pub mod evaluator;
/// The lexer module tokenizes source text on demand.
///
/// The lexer reads the raw source and produces one token per request: numbers,
/// operators and parentheses, each with the byte offset where it starts.
///
/// # Responsibilities
/// - Skips whitespace and recognises numeric literals and operators.
/// - Reports characters that cannot start a token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// applies a predictive recursive-descent grammar without backtracking.
///
/// # Responsibilities
/// - Encodes precedence (`*` and `/` over `+` and `-`) and left
///   associativity.
/// - Validates the syntax, reporting errors with their source position.
pub mod parser;
