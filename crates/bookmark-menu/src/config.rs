//! Menu configuration

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::screen::Screen;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Id of the header logo `<img>`
    pub logo_id: String,
    /// Id of the hamburger button
    pub trigger_id: String,
    /// Id of the navigation overlay
    pub overlay_id: String,
    /// Marker class on the trigger while the menu is open
    pub open_class: String,
    /// Logo asset shown while the menu is closed
    pub logo_src: String,
    /// Logo asset that contrasts with the overlay background
    pub logo_contrast_src: String,
    /// Classes that make the overlay visible
    pub visible_classes: Vec<String>,
    /// Classes that hide the overlay
    pub hidden_classes: Vec<String>,
    /// Viewports at or above this screen force the menu closed
    pub close_at: Screen,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            logo_id: "logo".to_string(),
            trigger_id: "menu-btn".to_string(),
            overlay_id: "menu".to_string(),
            open_class: "open".to_string(),
            logo_src: "./images/logo-bookmark.svg".to_string(),
            logo_contrast_src: "./images/logo-bookmark-footer.svg".to_string(),
            visible_classes: vec!["flex".to_string()],
            hidden_classes: vec!["hidden".to_string()],
            close_at: Screen::Md,
        }
    }
}

impl MenuConfig {
    /// Breakpoint in logical pixels
    pub fn breakpoint(&self) -> u32 {
        self.close_at.min_width()
    }

    pub fn validate(&self) -> Result<()> {
        let names = [
            ("logo_id", &self.logo_id),
            ("trigger_id", &self.trigger_id),
            ("overlay_id", &self.overlay_id),
            ("open_class", &self.open_class),
            ("logo_src", &self.logo_src),
            ("logo_contrast_src", &self.logo_contrast_src),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(MenuError::InvalidConfig(format!("{field} cannot be empty")));
            }
        }

        for (field, classes) in [
            ("visible_classes", &self.visible_classes),
            ("hidden_classes", &self.hidden_classes),
        ] {
            if classes.is_empty() {
                return Err(MenuError::InvalidConfig(format!("{field} cannot be empty")));
            }
            if let Some(bad) = classes.iter().find(|c| !is_class_token(c)) {
                return Err(MenuError::InvalidConfig(format!(
                    "{field} contains invalid class `{bad}`"
                )));
            }
        }

        if !is_class_token(&self.open_class) {
            return Err(MenuError::InvalidConfig(format!(
                "open_class `{}` is not a single class",
                self.open_class
            )));
        }

        Ok(())
    }
}

/// A class-list token: non-empty, no whitespace
fn is_class_token(class: &str) -> bool {
    !class.is_empty() && !class.chars().any(char::is_whitespace)
}
