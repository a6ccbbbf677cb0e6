/// ControlSurface - the live control panel model.
///
/// Holds titled folders of bindings and the write-by-name entry point
/// external controls (GUI sliders, key bindings, scripts) go through.
/// A surface is owned by the host, claimed by exactly one example at
/// initialize and released at destroy, so it never shows the bindings of
/// two examples at once.

use crate::engine_bail;
use crate::error::Result;
use crate::parameter::{
    BoolBinding, ColorBinding, ParameterBinding, ParameterSet, ParameterValue, ScalarBinding,
};

/// A titled group of controls
#[derive(Debug, Clone)]
pub struct ControlFolder {
    title: String,
    bindings: Vec<ParameterBinding>,
}

impl ControlFolder {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bindings(&self) -> &[ParameterBinding] {
        &self.bindings
    }
}

#[derive(Debug, Default)]
pub struct ControlSurface {
    owner: Option<String>,
    folders: Vec<ControlFolder>,
}

impl ControlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of the surface for one example
    pub fn claim(&mut self, owner: &str) -> Result<()> {
        if let Some(current) = &self.owner {
            engine_bail!("galaxy3d::ControlSurface", LifecycleViolation,
                "Control surface already claimed by '{}', cannot hand it to '{}'", current, owner);
        }
        self.owner = Some(owner.to_string());
        Ok(())
    }

    /// Drop every folder and binding and clear the owner
    pub fn release(&mut self) {
        self.folders.clear();
        self.owner = None;
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    pub fn folders(&self) -> &[ControlFolder] {
        &self.folders
    }

    /// Start a new folder; bindings added through the builder are also
    /// registered in `registry`, which enforces name uniqueness
    pub fn folder<'a>(&'a mut self, registry: &'a mut ParameterSet, title: &str) -> FolderBuilder<'a> {
        self.folders.push(ControlFolder {
            title: title.to_string(),
            bindings: Vec::new(),
        });
        let index = self.folders.len() - 1;
        FolderBuilder {
            folder: &mut self.folders[index],
            registry,
        }
    }

    pub fn binding(&self, name: &str) -> Option<&ParameterBinding> {
        self.folders
            .iter()
            .flat_map(|folder| folder.bindings.iter())
            .find(|binding| binding.name() == name)
    }

    /// Write a binding by name, as a GUI control would
    pub fn write(&self, name: &str, value: impl Into<ParameterValue>) -> Result<ParameterValue> {
        match self.binding(name) {
            Some(binding) => binding.write(value),
            None => {
                engine_bail!("galaxy3d::ControlSurface", InvalidParameter,
                    "No control named '{}'", name);
            }
        }
    }

    /// Read a binding by name
    pub fn read(&self, name: &str) -> Option<ParameterValue> {
        self.binding(name).map(|binding| binding.read())
    }

    /// Number of bindings across all folders
    pub fn binding_count(&self) -> usize {
        self.folders.iter().map(|folder| folder.bindings.len()).sum()
    }
}

/// Adds bindings to one folder
pub struct FolderBuilder<'a> {
    folder: &'a mut ControlFolder,
    registry: &'a mut ParameterSet,
}

impl FolderBuilder<'_> {
    fn register(&mut self, binding: &ParameterBinding) -> Result<()> {
        self.registry.insert(binding.clone())?;
        self.folder.bindings.push(binding.clone());
        Ok(())
    }

    pub fn add_scalar(&mut self, name: &str, initial: f64, min: f64, max: f64, step: f64) -> Result<ScalarBinding> {
        let binding = ParameterBinding::scalar(name, initial, min, max, step)?;
        self.register(binding.binding())?;
        Ok(binding)
    }

    pub fn add_color(&mut self, name: &str, initial: u32) -> Result<ColorBinding> {
        let binding = ParameterBinding::color(name, initial)?;
        self.register(binding.binding())?;
        Ok(binding)
    }

    pub fn add_bool(&mut self, name: &str, initial: bool) -> Result<BoolBinding> {
        let binding = ParameterBinding::boolean(name, initial)?;
        self.register(binding.binding())?;
        Ok(binding)
    }
}

#[cfg(test)]
#[path = "control_surface_tests.rs"]
mod tests;
