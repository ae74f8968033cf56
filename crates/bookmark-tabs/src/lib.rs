//! Bookmark Feature Tabs
//!
//! Each `.tab` names a feature through its `data-target` attribute; the matching
//! `.panel` carries that feature id as a class. The switcher pairs them once at load,
//! then keeps exactly one pair selected: one visible panel, one highlighted tab label.

mod config;
mod error;
mod feature;
mod selection;
mod switcher;
mod target;

pub use config::TabsConfig;
pub use error::TabsError;
pub use feature::{Feature, FeatureRegistry};
pub use selection::{SelectionSource, SelectionState};
pub use switcher::{Activation, TabSwitcher};
pub use target::resolve_target;

pub type Result<T> = std::result::Result<T, TabsError>;
