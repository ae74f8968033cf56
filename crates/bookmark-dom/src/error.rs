//! DOM error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Host error: {0}")]
    Host(String),
}
