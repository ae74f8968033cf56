//! Bookmark Core
//!
//! Mounts the page controllers on a loaded document and routes host events to them.
//! The controllers own their state; the document only ever receives the class and
//! attribute changes those states imply.

mod config;
mod error;
mod logging;
mod page;

pub use config::Config;
pub use error::CoreError;
pub use logging::init_logging;
pub use page::{Page, PageEvent, PageOutcome};

// Re-export the controller crates
pub use bookmark_dom::{Document, DomError, MemoryDocument, NodeId};
pub use bookmark_menu::{MenuConfig, MenuController, MenuError, MenuState, Screen};
pub use bookmark_tabs::{
    resolve_target, Activation, Feature, FeatureRegistry, SelectionSource, SelectionState,
    TabSwitcher, TabsConfig, TabsError,
};

pub type Result<T> = std::result::Result<T, CoreError>;
