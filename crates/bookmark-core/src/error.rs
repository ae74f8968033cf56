//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("DOM error: {0}")]
    Dom(#[from] bookmark_dom::DomError),

    #[error("Menu error: {0}")]
    Menu(#[from] bookmark_menu::MenuError),

    #[error("Tab error: {0}")]
    Tabs(#[from] bookmark_tabs::TabsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
