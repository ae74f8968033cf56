//! Menu error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("DOM error: {0}")]
    Dom(#[from] bookmark_dom::DomError),

    #[error("Invalid menu configuration: {0}")]
    InvalidConfig(String),
}
