// ⚠️ Errors - the one failure path in the toolkit
// Everything else is total over its declared input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilityError {
    /// Length was requested for something that is neither text nor a sequence
    #[error("Wrong Input: expected text or a sequence, got {found}")]
    WrongInputKind { found: &'static str },
}

pub type Result<T> = std::result::Result<T, UtilityError>;
