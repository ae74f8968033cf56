//! Tab switcher
//!
//! Pairs tabs with panels once, then moves a single selection between them.

use std::fmt::Debug;

use bookmark_dom::Document;

use crate::config::TabsConfig;
use crate::error::TabsError;
use crate::feature::{Feature, FeatureRegistry};
use crate::selection::{SelectionSource, SelectionState};
use crate::target::resolve_target;
use crate::Result;

/// Outcome of a tab activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The feature was already selected
    Unchanged,
    Switched { from: String, to: String },
}

#[derive(Debug, Clone)]
pub struct TabSwitcher<N> {
    registry: FeatureRegistry<N>,
    selection: SelectionState,
    config: TabsConfig,
}

impl<N: Clone + Debug + PartialEq> TabSwitcher<N> {
    /// Pair every tab with its panel and render the initial selection.
    ///
    /// Each tab's id is matched against the panels not yet claimed, in document order;
    /// when two panels carry the same id class the first one wins and the second is
    /// reported as an orphan. The initial selection is the first panel carrying the
    /// visible classes in the markup, or the first registered feature when none does.
    pub fn init<D>(doc: &D, config: TabsConfig) -> Result<Self>
    where
        D: Document<Node = N>,
    {
        config.validate()?;

        let tabs = doc.query_all(&config.tab_selector)?;
        if tabs.is_empty() {
            return Err(TabsError::NoTabs(config.tab_selector.clone()));
        }
        let mut panels = doc.query_all(&config.panel_selector)?;

        let mut registry = FeatureRegistry::new();
        let mut initial: Option<String> = None;

        for (index, tab) in tabs.into_iter().enumerate() {
            let id = doc
                .attribute(&tab, &config.target_attribute)
                .filter(|id| !id.trim().is_empty())
                .ok_or_else(|| TabsError::MissingTarget {
                    index,
                    attribute: config.target_attribute.clone(),
                })?;

            if registry.contains(&id) {
                return Err(TabsError::DuplicateFeature(id));
            }

            let position = panels
                .iter()
                .position(|panel| doc.has_class(panel, &id))
                .ok_or_else(|| TabsError::UnmatchedTab(id.clone()))?;
            let panel = panels.remove(position);

            let label = doc
                .query_within(&tab, &config.label_selector)?
                .ok_or_else(|| TabsError::MissingLabel {
                    id: id.clone(),
                    selector: config.label_selector.clone(),
                })?;

            if doc.has_classes(&panel, &config.visible_classes) {
                if initial.is_none() {
                    initial = Some(id.clone());
                } else {
                    tracing::warn!(feature = %id, "Extra visible panel in markup, hiding it");
                }
            }

            tracing::trace!(feature = %id, "Paired tab with panel");
            registry.insert(Feature {
                id,
                tab,
                label,
                panel,
            })?;
        }

        if let Some(orphan) = panels.first() {
            let classes = doc.attribute(orphan, "class").unwrap_or_default();
            return Err(TabsError::OrphanPanel(classes));
        }

        let selection = match initial {
            Some(id) => SelectionState::new(id, SelectionSource::Markup),
            None => {
                // `tabs` was non-empty and every tab registered or returned early
                let first = registry
                    .first()
                    .map(|f| f.id.clone())
                    .ok_or_else(|| TabsError::NoTabs(config.tab_selector.clone()))?;
                tracing::warn!(
                    feature = %first,
                    "No panel marked visible, selecting the first feature"
                );
                SelectionState::new(first, SelectionSource::Fallback)
            }
        };

        let switcher = Self {
            registry,
            selection,
            config,
        };
        switcher.render(doc);

        tracing::info!(
            features = switcher.registry.len(),
            selected = %switcher.selection.feature(),
            "Tab switcher initialized"
        );

        Ok(switcher)
    }

    pub fn registry(&self) -> &FeatureRegistry<N> {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_id(&self) -> &str {
        self.selection.feature()
    }

    /// The selected feature
    pub fn selected(&self) -> Option<&Feature<N>> {
        self.registry.get(self.selection.feature())
    }

    /// Every tab element, for wiring click listeners
    pub fn tabs(&self) -> impl Iterator<Item = &N> {
        self.registry.iter().map(|f| &f.tab)
    }

    /// Handle a click that landed on `target`, either a tab or its label.
    pub fn on_tab_activate<D>(&mut self, doc: &D, target: &N) -> Result<Activation>
    where
        D: Document<Node = N>,
    {
        let id = resolve_target(doc, target, &self.config.target_attribute)
            .ok_or(TabsError::UnresolvedTarget)?;
        self.activate(doc, &id)
    }

    /// Select the feature `id`. Re-selecting the current feature changes nothing.
    pub fn activate<D>(&mut self, doc: &D, id: &str) -> Result<Activation>
    where
        D: Document<Node = N>,
    {
        let next = self
            .registry
            .get(id)
            .ok_or_else(|| TabsError::UnknownFeature(id.to_string()))?;

        if next.id == self.selection.feature() {
            tracing::trace!(feature = %id, "Tab already selected");
            return Ok(Activation::Unchanged);
        }

        if let Some(previous) = self.selected() {
            self.hide(doc, previous);
        }
        self.show(doc, next);

        let from = self.selection.select(id.to_string());
        tracing::debug!(from = %from, to = %id, "Tab selection changed");

        Ok(Activation::Switched {
            from,
            to: id.to_string(),
        })
    }

    fn render<D>(&self, doc: &D)
    where
        D: Document<Node = N>,
    {
        for feature in self.registry.iter() {
            if feature.id == self.selection.feature() {
                self.show(doc, feature);
            } else {
                self.hide(doc, feature);
            }
        }
    }

    fn show<D>(&self, doc: &D, feature: &Feature<N>)
    where
        D: Document<Node = N>,
    {
        doc.add_classes(&feature.label, &self.config.highlight_classes);
        doc.add_classes(&feature.panel, &self.config.visible_classes);
        doc.remove_classes(&feature.panel, &self.config.hidden_classes);
    }

    fn hide<D>(&self, doc: &D, feature: &Feature<N>)
    where
        D: Document<Node = N>,
    {
        doc.remove_classes(&feature.label, &self.config.highlight_classes);
        doc.remove_classes(&feature.panel, &self.config.visible_classes);
        doc.add_classes(&feature.panel, &self.config.hidden_classes);
    }
}
