/// ParameterSet - the ordered bindings declared by one example.

use rustc_hash::FxHashMap;
use crate::engine_bail;
use crate::error::Result;
use crate::parameter::{ParameterBinding, ParameterValue};

/// Ordered set of bindings with unique names
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    bindings: Vec<ParameterBinding>,
    index: FxHashMap<String, usize>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding; names must be unique within the set
    pub fn insert(&mut self, binding: ParameterBinding) -> Result<()> {
        if self.index.contains_key(binding.name()) {
            engine_bail!("galaxy3d::ParameterSet", InvalidParameter,
                "Duplicate binding name '{}'", binding.name());
        }
        self.index.insert(binding.name().to_string(), self.bindings.len());
        self.bindings.push(binding);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ParameterBinding> {
        self.index.get(name).map(|&i| &self.bindings[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Write a binding by name
    pub fn write(&self, name: &str, value: impl Into<ParameterValue>) -> Result<ParameterValue> {
        match self.get(name) {
            Some(binding) => binding.write(value),
            None => {
                engine_bail!("galaxy3d::ParameterSet", InvalidParameter,
                    "Unknown binding '{}'", name);
            }
        }
    }

    /// Read a binding by name
    pub fn read(&self, name: &str) -> Result<ParameterValue> {
        match self.get(name) {
            Some(binding) => Ok(binding.read()),
            None => {
                engine_bail!("galaxy3d::ParameterSet", InvalidParameter,
                    "Unknown binding '{}'", name);
            }
        }
    }

    /// Bindings in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ParameterBinding> {
        self.bindings.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
        self.index.clear();
    }
}

#[cfg(test)]
#[path = "parameter_set_tests.rs"]
mod tests;
