//! Features and the feature registry

use std::collections::HashMap;

use crate::error::TabsError;
use crate::Result;

/// One tab/panel pair
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<N> {
    /// Feature id, from the tab's target attribute and the panel's class
    pub id: String,
    /// The clickable tab
    pub tab: N,
    /// Element inside the tab that carries the highlight
    pub label: N,
    /// The content region shown while this feature is selected
    pub panel: N,
}

/// Features keyed by id, in registration order. Immutable once the switcher is built.
#[derive(Debug, Clone)]
pub struct FeatureRegistry<N> {
    features: Vec<Feature<N>>,
    index: HashMap<String, usize>,
}

impl<N> Default for FeatureRegistry<N> {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<N> FeatureRegistry<N> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, feature: Feature<N>) -> Result<()> {
        if self.index.contains_key(&feature.id) {
            return Err(TabsError::DuplicateFeature(feature.id));
        }
        self.index.insert(feature.id.clone(), self.features.len());
        self.features.push(feature);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Feature<N>> {
        self.index.get(id).map(|&i| &self.features[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// First feature in registration order
    pub fn first(&self) -> Option<&Feature<N>> {
        self.features.first()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature<N>> {
        self.features.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.id.as_str())
    }
}
