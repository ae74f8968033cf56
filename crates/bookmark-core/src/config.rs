//! Page configuration
//!
//! Built-in defaults describe the stock markup. A page can override any of them with an
//! inline JSON block:
//!
//! ```html
//! <script type="application/json" id="bookmark-config">
//!   { "menu": { "close_at": "lg" } }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use bookmark_dom::Document;
use bookmark_menu::MenuConfig;
use bookmark_tabs::TabsConfig;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub menu: MenuConfig,
    pub tabs: TabsConfig,
}

impl Config {
    /// Id of the inline configuration element
    pub const INLINE_ID: &'static str = "bookmark-config";

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, overridden by the page's inline configuration block when present
    pub fn from_document<D: Document>(doc: &D) -> Result<Self> {
        let Some(node) = doc.element_by_id(Self::INLINE_ID) else {
            return Ok(Self::default());
        };

        let json = doc.text(&node);
        if json.trim().is_empty() {
            return Ok(Self::default());
        }

        tracing::debug!(bytes = json.len(), "Loading inline page configuration");
        Self::from_json(&json).map_err(|e| CoreError::Config(format!("#{}: {e}", Self::INLINE_ID)))
    }

    pub fn validate(&self) -> Result<()> {
        self.menu.validate()?;
        self.tabs.validate()?;

        if self.menu.trigger_id == self.menu.overlay_id {
            return Err(CoreError::Config(
                "menu trigger and overlay must be different elements".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmark_dom::MemoryDocument;
    use bookmark_menu::Screen;

    #[test]
    fn test_defaults_match_markup_contract() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.menu.logo_id, "logo");
        assert_eq!(config.menu.trigger_id, "menu-btn");
        assert_eq!(config.menu.overlay_id, "menu");
        assert_eq!(config.menu.close_at, Screen::Md);
        assert_eq!(config.tabs.target_attribute, "data-target");
    }

    #[test]
    fn test_from_document_without_block() {
        let doc = MemoryDocument::parse("<body><p>no config</p></body>");
        assert_eq!(Config::from_document(&doc).unwrap(), Config::default());
    }

    #[test]
    fn test_from_document_overrides() {
        let doc = MemoryDocument::parse(
            r#"<head><script type="application/json" id="bookmark-config">
                { "menu": { "close_at": "lg" }, "tabs": { "label_selector": "p" } }
            </script></head>"#,
        );
        let config = Config::from_document(&doc).unwrap();
        assert_eq!(config.menu.close_at, Screen::Lg);
        assert_eq!(config.menu.trigger_id, "menu-btn");
        assert_eq!(config.tabs.label_selector, "p");
    }

    #[test]
    fn test_from_document_bad_json() {
        let doc = MemoryDocument::parse(
            r#"<script type="application/json" id="bookmark-config">{ "menu": </script>"#,
        );
        let err = Config::from_document(&doc).unwrap_err();
        assert!(matches!(err, CoreError::Config(msg) if msg.starts_with("#bookmark-config")));
    }

    #[test]
    fn test_rejects_invalid_overrides() {
        let err = Config::from_json(r#"{ "tabs": { "highlight_classes": [] } }"#).unwrap_err();
        assert!(matches!(err, CoreError::Tabs(_)));

        let err = Config::from_json(r#"{ "menu": { "overlay_id": "menu-btn" } }"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
