/// The category of a [`ParseError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character or token appeared where it cannot be used.
    UnexpectedToken,
    /// A specific token was required but something else was found.
    ExpectedToken,
    /// A number was required but could not be read.
    NumberExpected,
    /// Parentheses or negations were nested past the configured limit.
    NestingTooDeep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset into the source where the problem
/// was detected. Parsing stops at the first error and no partial tree is
/// returned.
pub enum ParseError {
    /// Found a token (or an unrecognised character) that cannot appear here.
    UnexpectedToken {
        /// The offending token as written in the source, or `end of input`.
        token:    String,
        /// Byte offset of the offending token.
        position: usize,
    },
    /// A required token was not found.
    ExpectedToken {
        /// The token that was required.
        expected: char,
        /// What was found instead.
        found:    String,
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// A numeric literal could not be converted to a number.
    NumberExpected {
        /// Byte offset where the number starts.
        position: usize,
    },
    /// A `(` or unary `-` would nest deeper than the parser allows.
    NestingTooDeep {
        /// The nesting limit in effect.
        limit:    usize,
        /// Byte offset of the `(` or `-` that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the category of the error.
    ///
    /// ## Example
    /// ```
    /// use evalexp::{error::ParseErrorKind, parse};
    ///
    /// let err = parse("1 ** 2").unwrap_err();
    ///
    /// assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    /// assert_eq!(err.position(), 3);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::UnexpectedToken { .. } => ParseErrorKind::UnexpectedToken,
            Self::ExpectedToken { .. } => ParseErrorKind::ExpectedToken,
            Self::NumberExpected { .. } => ParseErrorKind::NumberExpected,
            Self::NestingTooDeep { .. } => ParseErrorKind::NestingTooDeep,
        }
    }

    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedToken { position, .. }
            | Self::NumberExpected { position }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }

    /// Human readable description of the error.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },
            Self::ExpectedToken { expected,
                                  found,
                                  position, } => write!(f,
                                                        "Expected token '{expected}' at position {position}, but found '{found}'."),
            Self::NumberExpected { position } => {
                write!(f, "Number expected but not found at position {position}.")
            },
            Self::NestingTooDeep { limit, position } => write!(f,
                                                              "Expression nested deeper than {limit} levels at position {position}."),
        }
    }
}

impl std::error::Error for ParseError {}
