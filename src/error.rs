use thiserror::Error;

/// Error type for the plotfn crate.
///
/// The `Display` output of each variant is the diagnostic shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An alphabetic token that is neither a reserved name nor a function
    #[error("invalid variable or function: {0}")]
    InvalidIdentifier(String),
    /// A closing parenthesis with no pending opening one
    #[error("unmatched right parenthesis )")]
    UnmatchedRightParen,
    /// An opening parenthesis that is never closed
    #[error("unmatched left parenthesis (")]
    UnmatchedLeftParen,
    /// `^` without an operand on both sides
    #[error("^ requires two arguments, for example x^2 or (x+1)^(x+2).")]
    MissingPowerOperand,
    /// A function name with nothing after it, holding the name as written
    #[error("function {0} requires an argument.")]
    MissingFunctionArgument(String),
    /// Anything else that does not form a valid expression
    #[error("syntax error")]
    Syntax,
}
