//! Tab switcher configuration

use serde::{Deserialize, Serialize};

use crate::error::TabsError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub tab_selector: String,
    pub panel_selector: String,
    /// Tab attribute naming the feature id
    pub target_attribute: String,
    /// Element inside a tab that carries the highlight
    pub label_selector: String,
    pub highlight_classes: Vec<String>,
    /// Classes of a visible panel. A panel carrying all of them in the markup is the
    /// initial selection.
    pub visible_classes: Vec<String>,
    pub hidden_classes: Vec<String>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            tab_selector: ".tab".to_string(),
            panel_selector: ".panel".to_string(),
            target_attribute: "data-target".to_string(),
            label_selector: "span".to_string(),
            highlight_classes: vec!["border-b-4".to_string(), "border-soft-red".to_string()],
            visible_classes: vec!["flex".to_string()],
            hidden_classes: vec!["hidden".to_string()],
        }
    }
}

impl TabsConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("tab_selector", &self.tab_selector),
            ("panel_selector", &self.panel_selector),
            ("target_attribute", &self.target_attribute),
            ("label_selector", &self.label_selector),
        ] {
            if value.trim().is_empty() {
                return Err(TabsError::InvalidConfig(format!("{field} cannot be empty")));
            }
        }

        for (field, classes) in [
            ("highlight_classes", &self.highlight_classes),
            ("visible_classes", &self.visible_classes),
            ("hidden_classes", &self.hidden_classes),
        ] {
            if classes.is_empty() {
                return Err(TabsError::InvalidConfig(format!("{field} cannot be empty")));
            }
            if let Some(bad) = classes
                .iter()
                .find(|c| c.is_empty() || c.chars().any(char::is_whitespace))
            {
                return Err(TabsError::InvalidConfig(format!(
                    "{field} contains invalid class `{bad}`"
                )));
            }
        }

        if let Some(shared) = self
            .visible_classes
            .iter()
            .find(|c| self.hidden_classes.contains(*c))
        {
            return Err(TabsError::InvalidConfig(format!(
                "`{shared}` is both a visible and a hidden class"
            )));
        }

        Ok(())
    }
}
