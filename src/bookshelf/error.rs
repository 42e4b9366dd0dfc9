use thiserror::Error;

use crate::attributes::Attribute;

/// Reasons an attribute chain is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("sort order must have 4 attributes, got {0}")]
    WrongLength(usize),

    #[error("sort order is missing an attribute at position {}", .0 + 1)]
    MissingEntry(usize),

    #[error("first attribute in sort order must be AUTHOR, got {0}")]
    PrimaryNotFirst(Attribute),

    #[error("sort order must name every attribute exactly once")]
    NotUnique,

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Invalid sort order: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Cannot insert the same book multiple times: {0}")]
    DuplicateRecord(String),

    #[error("Config error: {0}")]
    ConfigLoad(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
