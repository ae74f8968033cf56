//! Mobile menu controller
//!
//! The controller owns the menu state. Trigger marker, logo asset and overlay classes
//! are rendered from it after every transition and are never read back, with one
//! exception: `attach` adopts the trigger's marker from the markup as the initial state.

use std::fmt::Debug;

use bookmark_dom::Document;

use crate::config::MenuConfig;
use crate::state::MenuState;
use crate::screen::Screen;
use crate::Result;

#[derive(Debug, Clone)]
pub struct MenuController<N> {
    logo: N,
    trigger: N,
    overlay: N,
    config: MenuConfig,
    state: MenuState,
}

impl<N: Clone + Debug + PartialEq> MenuController<N> {
    /// Resolve the logo, trigger and overlay elements and render the initial state.
    ///
    /// Fails on the first missing element.
    pub fn attach<D>(doc: &D, config: MenuConfig) -> Result<Self>
    where
        D: Document<Node = N>,
    {
        config.validate()?;

        let logo = doc.require_by_id(&config.logo_id)?;
        let trigger = doc.require_by_id(&config.trigger_id)?;
        let overlay = doc.require_by_id(&config.overlay_id)?;

        let state = if doc.has_class(&trigger, &config.open_class) {
            MenuState::Open
        } else {
            MenuState::Closed
        };

        let controller = Self {
            logo,
            trigger,
            overlay,
            config,
            state,
        };
        controller.render(doc);

        tracing::info!(
            state = %state,
            breakpoint = controller.config.breakpoint(),
            "Mobile menu attached"
        );

        Ok(controller)
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The element whose clicks drive [`toggle`](Self::toggle)
    pub fn trigger(&self) -> &N {
        &self.trigger
    }

    pub fn open<D>(&mut self, doc: &D)
    where
        D: Document<Node = N>,
    {
        self.transition(doc, MenuState::Open);
    }

    pub fn close<D>(&mut self, doc: &D)
    where
        D: Document<Node = N>,
    {
        self.transition(doc, MenuState::Closed);
    }

    /// Trigger click: close if open, open otherwise. Returns the new state.
    pub fn toggle<D>(&mut self, doc: &D) -> MenuState
    where
        D: Document<Node = N>,
    {
        self.transition(doc, self.state.toggled());
        self.state
    }

    /// Viewport width notification. Closes the menu at or above the breakpoint,
    /// whatever the current state. Returns true when the close was applied.
    pub fn on_viewport_change<D>(&mut self, doc: &D, width: u32) -> bool
    where
        D: Document<Node = N>,
    {
        if !self.config.close_at.contains(width) {
            return false;
        }

        tracing::trace!(
            width,
            screen = ?Screen::for_width(width),
            "Viewport above menu breakpoint"
        );
        self.close(doc);
        true
    }

    fn transition<D>(&mut self, doc: &D, next: MenuState)
    where
        D: Document<Node = N>,
    {
        if self.state != next {
            tracing::debug!(from = %self.state, to = %next, "Menu state transition");
        }
        self.state = next;
        self.render(doc);
    }

    fn render<D>(&self, doc: &D)
    where
        D: Document<Node = N>,
    {
        let config = &self.config;
        match self.state {
            MenuState::Open => {
                doc.add_class(&self.trigger, &config.open_class);
                doc.set_attribute(&self.logo, "src", &config.logo_contrast_src);
                doc.add_classes(&self.overlay, &config.visible_classes);
                doc.remove_classes(&self.overlay, &config.hidden_classes);
            }
            MenuState::Closed => {
                doc.remove_class(&self.trigger, &config.open_class);
                doc.set_attribute(&self.logo, "src", &config.logo_src);
                doc.remove_classes(&self.overlay, &config.visible_classes);
                doc.add_classes(&self.overlay, &config.hidden_classes);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmark_dom::{MemoryDocument, NodeId};

    const HEADER: &str = r#"
        <html><body>
          <nav>
            <img id="logo" src="./images/logo-bookmark.svg" alt="">
            <button id="menu-btn" class="z-30 block md:hidden">
              <span class="hamburger-top"></span>
            </button>
          </nav>
          <div id="menu" class="fixed inset-0 z-20 hidden flex-col items-center"></div>
        </body></html>
    "#;

    fn attach(markup: &str) -> (MemoryDocument, MenuController<NodeId>) {
        let doc = MemoryDocument::parse(markup);
        let menu = MenuController::attach(&doc, MenuConfig::default()).unwrap();
        (doc, menu)
    }

    fn overlay_visible(doc: &MemoryDocument) -> bool {
        let overlay = doc.element_by_id("menu").unwrap();
        doc.has_class(&overlay, "flex") && !doc.has_class(&overlay, "hidden")
    }

    fn trigger_marked(doc: &MemoryDocument) -> bool {
        let trigger = doc.element_by_id("menu-btn").unwrap();
        doc.has_class(&trigger, "open")
    }

    fn logo_src(doc: &MemoryDocument) -> String {
        let logo = doc.element_by_id("logo").unwrap();
        doc.attribute(&logo, "src").unwrap()
    }

    #[test]
    fn test_click_opens_then_closes() {
        let (doc, mut menu) = attach(HEADER);
        assert_eq!(menu.state(), MenuState::Closed);

        assert_eq!(menu.toggle(&doc), MenuState::Open);
        assert!(overlay_visible(&doc));
        assert!(trigger_marked(&doc));
        assert_eq!(logo_src(&doc), "./images/logo-bookmark-footer.svg");

        assert_eq!(menu.toggle(&doc), MenuState::Closed);
        assert!(!overlay_visible(&doc));
        assert!(!trigger_marked(&doc));
        assert_eq!(logo_src(&doc), "./images/logo-bookmark.svg");
    }

    #[test]
    fn test_overlay_tracks_trigger_over_toggle_sequence() {
        let (doc, mut menu) = attach(HEADER);
        for _ in 0..7 {
            menu.toggle(&doc);
            assert_eq!(overlay_visible(&doc), trigger_marked(&doc));
            assert_eq!(overlay_visible(&doc), menu.state().is_open());
        }
    }

    #[test]
    fn test_wide_viewport_closes_open_menu() {
        let (doc, mut menu) = attach(HEADER);
        assert!(!menu.on_viewport_change(&doc, 500));

        menu.open(&doc);
        assert!(!menu.on_viewport_change(&doc, 500));
        assert!(overlay_visible(&doc));

        assert!(menu.on_viewport_change(&doc, 900));
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!overlay_visible(&doc));
        assert!(!trigger_marked(&doc));
    }

    #[test]
    fn test_wide_viewport_is_idempotent() {
        let (doc, mut menu) = attach(HEADER);
        assert!(menu.on_viewport_change(&doc, 768));
        assert!(menu.on_viewport_change(&doc, 1440));
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!overlay_visible(&doc));
        assert_eq!(logo_src(&doc), "./images/logo-bookmark.svg");
    }

    #[test]
    fn test_attach_adopts_open_marker() {
        let markup = HEADER.replace(r#"class="z-30 block"#, r#"class="open z-30 block"#);
        let (doc, menu) = attach(&markup);
        assert_eq!(menu.state(), MenuState::Open);
        assert!(overlay_visible(&doc));
        assert_eq!(logo_src(&doc), "./images/logo-bookmark-footer.svg");
    }

    #[test]
    fn test_missing_overlay_fails() {
        let doc = MemoryDocument::parse(&HEADER.replace(r#"id="menu""#, r#"id="nav""#));
        let err = MenuController::attach(&doc, MenuConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "DOM error: Missing element: #menu");
    }

    #[test]
    fn test_custom_breakpoint() {
        let doc = MemoryDocument::parse(HEADER);
        let config = MenuConfig {
            close_at: Screen::Lg,
            ..MenuConfig::default()
        };
        let mut menu = MenuController::attach(&doc, config).unwrap();
        menu.open(&doc);
        assert!(!menu.on_viewport_change(&doc, 900));
        assert!(menu.state().is_open());
        assert!(menu.on_viewport_change(&doc, 1024));
        assert!(!menu.state().is_open());
    }
}
