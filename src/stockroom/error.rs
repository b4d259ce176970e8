use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("{field} must be a valid integer")]
    InvalidNumber { field: &'static str },

    #[error("Item number cannot be negative")]
    NegativeId,

    #[error("Invalid field count on line {line}: expected 5 fields, got {found}")]
    InvalidFieldCount { line: usize, found: usize },

    #[error("Item with id '{0}' already exists")]
    DuplicateId(i64),

    #[error("No item with id '{0}' was found")]
    NotFound(i64),

    #[error("Index {index} is out of range for an inventory of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StockroomError>;
