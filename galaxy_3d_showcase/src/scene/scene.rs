/// Scene - the node hierarchy drawn by scene passes.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Nodes form a
/// forest under an implicit root whose transform applies to the whole
/// scene. Background and environment are scene-wide settings read by the
/// renderer backend.

use std::sync::Arc;
use glam::Mat4;
use slotmap::SlotMap;
use crate::engine_bail;
use crate::error::Result;
use crate::renderer::Texture;
use crate::scene::{Color, Node, NodeKey, Transform};

/// What the renderer clears to before drawing the scene
#[derive(Debug, Clone, Default)]
pub enum Background {
    #[default]
    None,
    Color(Color),
    Texture(Arc<dyn Texture>),
}

/// A scene graph
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeKey, Node>,
    roots: Vec<NodeKey>,
    transform: Transform,
    background: Background,
    environment: Option<Arc<dyn Texture>>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    // ===== HIERARCHY =====

    /// Add a node at the top level of the scene
    pub fn add(&mut self, mut node: Node) -> NodeKey {
        node.parent = None;
        node.children.clear();
        let key = self.nodes.insert(node);
        self.roots.push(key);
        key
    }

    /// Add a node under an existing parent
    pub fn add_child(&mut self, parent: NodeKey, mut node: Node) -> Result<NodeKey> {
        if !self.nodes.contains_key(parent) {
            engine_bail!("galaxy3d::Scene", InvalidResource,
                "Cannot add '{}': parent node does not exist", node.name);
        }
        node.parent = Some(parent);
        node.children.clear();
        let key = self.nodes.insert(node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(key);
        }
        Ok(key)
    }

    /// Remove a node and all its descendants
    ///
    /// Returns the number of nodes removed (0 if the key is stale).
    pub fn remove(&mut self, key: NodeKey) -> usize {
        let Some(node) = self.nodes.get(key) else {
            return 0;
        };
        match node.parent {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(parent) {
                    parent_node.children.retain(|&child| child != key);
                }
            }
            None => self.roots.retain(|&root| root != key),
        }

        let mut removed = 0;
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        removed
    }

    /// Remove every node and reset scene-wide settings
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.transform = Transform::IDENTITY;
        self.background = Background::None;
        self.environment = None;
    }

    // ===== ACCESS =====

    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// First node with the given name
    pub fn find(&self, name: &str) -> Option<NodeKey> {
        self.nodes.iter().find(|(_, node)| node.name == name).map(|(key, _)| key)
    }

    /// Top-level nodes in insertion order
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &Node)> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ===== SCENE-WIDE SETTINGS =====

    /// Transform applied to the whole scene
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Environment map used for image-based lighting
    pub fn environment(&self) -> Option<&Arc<dyn Texture>> {
        self.environment.as_ref()
    }

    pub fn set_environment(&mut self, environment: Option<Arc<dyn Texture>>) {
        self.environment = environment;
    }

    // ===== DERIVED =====

    /// World matrix of a node, including the scene transform
    pub fn world_matrix(&self, key: NodeKey) -> Option<Mat4> {
        let mut matrix = self.nodes.get(key)?.transform.matrix();
        let mut parent = self.nodes.get(key)?.parent;
        while let Some(parent_key) = parent {
            let parent_node = self.nodes.get(parent_key)?;
            matrix = parent_node.transform.matrix() * matrix;
            parent = parent_node.parent;
        }
        Some(self.transform.matrix() * matrix)
    }

    /// Whether a node and all its ancestors are visible
    pub fn is_visible(&self, key: NodeKey) -> bool {
        let mut current = Some(key);
        while let Some(k) = current {
            match self.nodes.get(k) {
                Some(node) if node.visible => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Number of meshes a color draw would submit
    pub fn visible_mesh_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|(key, node)| node.is_mesh() && self.is_visible(*key))
            .count()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
