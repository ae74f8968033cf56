//! Tab switcher error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabsError {
    #[error("DOM error: {0}")]
    Dom(#[from] bookmark_dom::DomError),

    #[error("No tabs match `{0}`")]
    NoTabs(String),

    #[error("Tab #{index} has no `{attribute}` attribute")]
    MissingTarget { index: usize, attribute: String },

    #[error("Tab `{id}` has no label matching `{selector}`")]
    MissingLabel { id: String, selector: String },

    #[error("No panel carries the class `{0}`")]
    UnmatchedTab(String),

    #[error("Duplicate feature id: {0}")]
    DuplicateFeature(String),

    #[error("Panel `{0}` matches no tab")]
    OrphanPanel(String),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Event target does not resolve to a feature")]
    UnresolvedTarget,

    #[error("Invalid tabs configuration: {0}")]
    InvalidConfig(String),
}
