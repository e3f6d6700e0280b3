use thiserror::Error;

/// Errors encountered while reading operator symbols and identifiers
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("Unable to parse identifier: {0}")]
    /// The text is not a valid postgres-style identifier
    IdentifierParseError(String),
    #[error("Unknown comparison operator: {0}")]
    /// The text is not one of the six comparison symbols
    OperatorParseError(String),
}

/// General parsing error that may occur, for example if a family or column name
/// isn't a valid postgres-style identifier.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
