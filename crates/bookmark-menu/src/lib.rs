//! Bookmark Mobile Menu
//!
//! A hamburger trigger opens a full-screen navigation overlay on narrow viewports.
//! Opening swaps the header logo for its contrast variant; any viewport at or above the
//! configured screen forces the overlay closed.
//!
//! ```text
//! Closed --toggle--> Open
//! Open   --toggle--> Closed
//! *      --viewport >= breakpoint--> Closed
//! ```

mod config;
mod controller;
mod error;
mod screen;
mod state;

pub use config::MenuConfig;
pub use controller::MenuController;
pub use error::MenuError;
pub use screen::Screen;
pub use state::MenuState;

pub type Result<T> = std::result::Result<T, MenuError>;
