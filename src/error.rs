use thiserror::Error;

/// Errors that can occur during member operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MemberError {
    #[error("Member not found: {0}")]
    NotFound(u64),
    #[error("Member already exists: {0}")]
    AlreadyExists(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(u64),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown discount policy: {0}")]
    UnknownPolicy(String),
}
