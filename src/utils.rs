//! Errors shared across the crate.
//!
//! Everything here is a pure function of its arguments, so the only thing
//! that can go wrong is being handed a bad argument. Validation happens at
//! the top of each operation, before any computation.

/// Error raised when an argument fails validation. Carries the name of
/// the offending parameter and the constraint it violated.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrophasorError {
    InvalidArgument{parameter : &'static str, message : String},
}

impl CorrophasorError {
    /// Shorthand used at the top of every fallible operation.
    pub (crate) fn invalid_argument<S : Into<String>>(
        parameter : &'static str,
        message : S
    ) -> Self {
        CorrophasorError::InvalidArgument {
            parameter,
            message : message.into(),
        }
    }
}

impl std::error::Error for CorrophasorError {}

impl std::fmt::Display for CorrophasorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CorrophasorError::InvalidArgument { parameter, message } => {
                write!(f, "Invalid argument `{}`: {}", parameter, message)
            }
        }
    }
}
