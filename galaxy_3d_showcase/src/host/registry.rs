/// ExampleRegistry - named example factories.

use crate::demos::{GltfExample, PlanetsExample, TextureExample};
use crate::engine_bail;
use crate::error::Result;
use crate::example::Example;

/// Builds a fresh, uninitialized example
pub type ExampleFactory = Box<dyn Fn() -> Box<dyn Example> + Send + Sync>;

/// Ordered list of selectable examples
#[derive(Default)]
pub struct ExampleRegistry {
    entries: Vec<(String, ExampleFactory)>,
}

impl ExampleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the bundled demos: gltf, planets, textures
    pub fn with_builtin_demos() -> Self {
        let mut registry = Self::new();
        registry.insert("gltf", || Box::new(GltfExample::new()));
        registry.insert("planets", || Box::new(PlanetsExample::new()));
        registry.insert("textures", || Box::new(TextureExample::new()));
        registry
    }

    /// Add an example; names must be unique
    pub fn register(
        &mut self,
        name: &str,
        factory: impl Fn() -> Box<dyn Example> + Send + Sync + 'static,
    ) -> Result<()> {
        if self.contains(name) {
            engine_bail!("galaxy3d::ExampleRegistry", Configuration,
                "Example '{}' is already registered", name);
        }
        self.insert(name, factory);
        Ok(())
    }

    fn insert(&mut self, name: &str, factory: impl Fn() -> Box<dyn Example> + Send + Sync + 'static) {
        self.entries.push((name.to_string(), Box::new(factory)));
    }

    /// Build a fresh instance of the named example
    pub fn create(&self, name: &str) -> Result<Box<dyn Example>> {
        match self.entries.iter().find(|(entry, _)| entry == name) {
            Some((_, factory)) => Ok(factory()),
            None => {
                engine_bail!("galaxy3d::ExampleRegistry", Configuration,
                    "Unknown example '{}' (available: {})", name, self.names().join(", "));
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(entry, _)| entry == name)
    }

    /// Names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Name at a position (e.g. for number-key shortcuts)
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
