/*!
 * Error types for the reswai application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors produced while validating the inputs of a translation run
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The auth key field is empty or all whitespace
    #[error("auth key is empty")]
    EmptyAuthKey,

    /// No source document bytes were supplied
    #[error("source document is empty")]
    EmptySource,

    /// No source language code was supplied
    #[error("source language is not selected")]
    MissingSourceLanguage,

    /// No target language code was supplied
    #[error("target language is not selected")]
    MissingTargetLanguage,

    /// Source and target language codes are the same
    #[error("source and target languages are equal: {0}")]
    SameLanguage(String),
}

/// Errors that can occur while parsing, rewriting or serializing a resource document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input bytes are not a well-formed resource XML document
    #[error("failed to parse resource XML: {0}")]
    Parse(String),

    /// An entry has no value element
    #[error("entry '{key}' has no value element")]
    MissingValue {
        /// Name attribute of the offending data entry
        key: String,
    },

    /// An entry has more than one value element
    #[error("entry '{key}' has {count} value elements, expected exactly one")]
    MultipleValues {
        /// Name attribute of the offending data entry
        key: String,
        /// Number of value elements found
        count: usize,
    },

    /// An entry value is empty or all whitespace
    #[error("entry '{key}' has an empty value")]
    EmptyValue {
        /// Name attribute of the offending data entry
        key: String,
    },

    /// The number of replacement values does not match the number of entries
    #[error("cannot apply {actual} values to a document with {expected} entries")]
    CountMismatch {
        /// Number of entries in the document
        expected: usize,
        /// Number of replacement values supplied
        actual: usize,
    },

    /// Writing the document back to XML failed
    #[error("failed to serialize resource XML: {0}")]
    Serialize(String),
}

/// Errors that can occur when talking to the translation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The account translation quota has been exhausted
    #[error("Translation quota exceeded: {0}")]
    QuotaExceeded(String),
}

/// Errors that can occur during a translation pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid run inputs
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The document does not declare the supported resource schema version
    #[error("unsupported resource version, expected \"2.0\"")]
    UnsupportedVersion,

    /// Error from the resource document
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from the translation provider
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider returned a different number of translations than requested
    #[error("translation count mismatch: sent {sent} strings, received {received}")]
    CountMismatch {
        /// Number of strings sent for translation
        sent: usize,
        /// Number of translations received
        received: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the resource document
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a pipeline run
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
