//! Selection state

use serde::{Deserialize, Serialize};

/// How the current selection came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionSource {
    /// The panel was marked visible in the loaded markup
    Markup,
    /// No panel was marked visible; the first registered feature was chosen
    Fallback,
    /// A tab was activated
    Activation,
}

/// The one selected feature. Never empty once the switcher exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    feature: String,
    source: SelectionSource,
    /// Number of activations that changed the selection
    changes: u64,
}

impl SelectionState {
    pub(crate) fn new(feature: String, source: SelectionSource) -> Self {
        Self {
            feature,
            source,
            changes: 0,
        }
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn source(&self) -> SelectionSource {
        self.source
    }

    pub fn changes(&self) -> u64 {
        self.changes
    }

    /// Point at `feature`, returning the previously selected id
    pub(crate) fn select(&mut self, feature: String) -> String {
        self.source = SelectionSource::Activation;
        self.changes += 1;
        std::mem::replace(&mut self.feature, feature)
    }
}
