//! Bookmark browser shell
//!
//! Implements the host side of the page: a `Document` over the live DOM, click
//! listeners on the menu trigger and every tab, and a `ResizeObserver` on `<body>`.
//!
//! Native builds compile to an empty library; the shell itself needs
//! `--features web` on a wasm32 target.

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
