use std::collections::BTreeMap;

use crate::{
    composition::spec::CompositionSpec,
    foundation::error::{NewsreelError, NewsreelResult},
};

#[derive(Clone, Debug, Default)]
/// Compositions a host can render, keyed by id.
pub struct CompositionRegistry {
    specs: BTreeMap<String, CompositionSpec>,
}

impl CompositionRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the stock compositions.
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.specs.insert(
            crate::composition::spec::NEWS_VIDEO_ID.to_owned(),
            CompositionSpec::news_video(),
        );
        reg
    }

    /// Add a composition. Invalid metadata and duplicate ids are rejected.
    pub fn register(&mut self, spec: CompositionSpec) -> NewsreelResult<()> {
        spec.validate()?;
        if self.specs.contains_key(&spec.id) {
            return Err(NewsreelError::validation(format!(
                "composition '{}' is already registered",
                spec.id
            )));
        }
        tracing::debug!(id = %spec.id, frames = spec.duration_in_frames, "registered composition");
        self.specs.insert(spec.id.clone(), spec);
        Ok(())
    }

    /// Look up a composition by id.
    pub fn get(&self, id: &str) -> NewsreelResult<&CompositionSpec> {
        self.specs.get(id).ok_or_else(|| {
            NewsreelError::validation(format!(
                "unknown composition '{id}' (known: {})",
                self.ids().collect::<Vec<_>>().join(", ")
            ))
        })
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Registered compositions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CompositionSpec> {
        self.specs.values()
    }

    /// Number of registered compositions.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
