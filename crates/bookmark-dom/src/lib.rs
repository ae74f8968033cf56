//! Bookmark DOM
//!
//! The page controllers never call a browser API directly. They consume a [`Document`]:
//! element lookup by id or selector, class-list and attribute mutation.
//! The wasm shell implements it over `web-sys`; [`MemoryDocument`] implements it over
//! parsed markup so the controllers run natively and under test.

mod document;
mod error;
mod memory;

pub use document::Document;
pub use error::DomError;
pub use memory::{MemoryDocument, NodeId};

pub type Result<T> = std::result::Result<T, DomError>;
