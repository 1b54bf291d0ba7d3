//! Shared error types for the lead pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid rubric: {field} = {value}")]
    InvalidRubric { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
