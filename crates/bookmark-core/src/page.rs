//! Page
//!
//! Owns the document and both controllers. Host events arrive one at a time through
//! [`Page::dispatch`] and each runs to completion before the next.

use bookmark_dom::Document;
use bookmark_menu::{MenuController, MenuState};
use bookmark_tabs::{Activation, TabSwitcher};

use crate::config::Config;
use crate::Result;

/// An event delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<N> {
    /// Click on the menu trigger
    MenuClick,
    /// Click that landed on `target`, a tab or an element inside it
    TabClick(N),
    /// The observed root element's width changed
    Resize { width: u32 },
}

/// What an event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Menu(MenuState),
    Tabs(Activation),
    /// The event required no change
    Ignored,
}

#[derive(Debug)]
pub struct Page<D: Document> {
    document: D,
    menu: MenuController<D::Node>,
    tabs: TabSwitcher<D::Node>,
}

impl<D: Document> Page<D> {
    /// Mount with the document's own configuration (defaults plus inline overrides)
    pub fn mount(document: D) -> Result<Self> {
        let config = Config::from_document(&document)?;
        Self::mount_with(document, config)
    }

    /// Mount both controllers. Any missing element or unmatched tab fails the whole mount.
    pub fn mount_with(document: D, config: Config) -> Result<Self> {
        config.validate()?;

        let menu = MenuController::attach(&document, config.menu)?;
        let tabs = TabSwitcher::init(&document, config.tabs)?;

        tracing::info!(
            menu = %menu.state(),
            features = tabs.registry().len(),
            selected = %tabs.selected_id(),
            "Page mounted"
        );

        Ok(Self {
            document,
            menu,
            tabs,
        })
    }

    pub fn dispatch(&mut self, event: PageEvent<D::Node>) -> Result<PageOutcome> {
        match event {
            PageEvent::MenuClick => Ok(PageOutcome::Menu(self.menu.toggle(&self.document))),
            PageEvent::TabClick(target) => {
                let activation = self.tabs.on_tab_activate(&self.document, &target)?;
                Ok(match activation {
                    Activation::Unchanged => PageOutcome::Ignored,
                    switched => PageOutcome::Tabs(switched),
                })
            }
            PageEvent::Resize { width } => {
                if self.menu.on_viewport_change(&self.document, width) {
                    Ok(PageOutcome::Menu(self.menu.state()))
                } else {
                    Ok(PageOutcome::Ignored)
                }
            }
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn menu(&self) -> &MenuController<D::Node> {
        &self.menu
    }

    pub fn tabs(&self) -> &TabSwitcher<D::Node> {
        &self.tabs
    }
}
