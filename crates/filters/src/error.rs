use thiserror::Error;

/// Error returned when a `-type` character code is not recognised.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unknown file type code `{code}'")]
pub struct UnknownTypeCode {
    /// The unrecognised character.
    pub code: char,
}
