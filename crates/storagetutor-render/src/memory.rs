//! In-memory surface for headless rendering and tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::renderer::{EventKind, RenderResult, RendererError, Surface};

/// Holds markup by container id.
///
/// Child containers passed along with markup become available as soon as
/// their parent is rendered, and disappear when the parent is replaced.
#[derive(Debug, Default)]
pub struct MemorySurface {
    containers: BTreeMap<String, String>,
    bindings: HashMap<String, BTreeSet<&'static str>>,
    children: HashMap<String, Vec<String>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface with the given top-level containers, all empty.
    pub fn with_containers(ids: &[&str]) -> Self {
        let mut surface = Self::new();
        for id in ids {
            surface.add_container(id);
        }
        surface
    }

    pub fn add_container(&mut self, id: &str) {
        self.containers.entry(id.to_string()).or_default();
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    /// Current markup of `id`.
    pub fn content(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    /// Event names bound on `id`, sorted.
    pub fn bindings(&self, id: &str) -> Vec<&'static str> {
        self.bindings
            .get(id)
            .map(|events| events.iter().copied().collect())
            .unwrap_or_default()
    }

    fn remove_subtree(&mut self, id: &str) {
        for child in self.children.remove(id).unwrap_or_default() {
            self.remove_subtree(&child);
            self.containers.remove(&child);
            self.bindings.remove(&child);
        }
    }
}

impl Surface for MemorySurface {
    fn set_content(
        &mut self,
        container: &str,
        markup: &str,
        children: &[&str],
    ) -> RenderResult<()> {
        if !self.containers.contains_key(container) {
            return Err(RendererError::MissingContainer(container.to_string()));
        }
        self.remove_subtree(container);

        let nested: Vec<String> = children.iter().map(|id| id.to_string()).collect();
        for id in &nested {
            self.containers.insert(id.clone(), String::new());
        }
        self.children.insert(container.to_string(), nested);
        self.containers
            .insert(container.to_string(), markup.to_string());
        Ok(())
    }

    fn bind(&mut self, container: &str, events: &[EventKind]) -> RenderResult<()> {
        if !self.containers.contains_key(container) {
            return Err(RendererError::MissingContainer(container.to_string()));
        }
        let bound = self.bindings.entry(container.to_string()).or_default();
        bound.extend(events.iter().map(|e| e.name()));
        Ok(())
    }
}
