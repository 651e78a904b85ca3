use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when working with sections.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The given name does not identify any dashboard section.
    #[error("unknown section: {0}")]
    UnknownSection(String),
}
