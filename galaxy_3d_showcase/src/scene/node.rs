/// Scene graph nodes.

use std::sync::Arc;
use glam::Vec3;
use slotmap::new_key_type;
use crate::renderer::Geometry;
use crate::scene::{DirectionalLight, Material, PointLight, Transform};

new_key_type! {
    /// Stable key for a node in a `Scene`
    pub struct NodeKey;
}

/// What a node carries besides its transform
#[derive(Debug, Clone)]
pub enum NodeContent {
    /// Pure transform node
    Group,
    /// Drawable geometry
    Mesh {
        geometry: Arc<dyn Geometry>,
        material: Material,
    },
    DirectionalLight(DirectionalLight),
    PointLight(PointLight),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub content: NodeContent,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
}

impl Node {
    fn with_content(name: &str, content: NodeContent) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::IDENTITY,
            visible: true,
            cast_shadow: false,
            receive_shadow: false,
            content,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn group(name: &str) -> Self {
        Self::with_content(name, NodeContent::Group)
    }

    pub fn mesh(name: &str, geometry: Arc<dyn Geometry>, material: Material) -> Self {
        Self::with_content(name, NodeContent::Mesh { geometry, material })
    }

    pub fn directional_light(name: &str, light: DirectionalLight) -> Self {
        Self::with_content(name, NodeContent::DirectionalLight(light))
    }

    pub fn point_light(name: &str, light: PointLight) -> Self {
        Self::with_content(name, NodeContent::PointLight(light))
    }

    // ===== BUILDERS =====

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.transform.set_uniform_scale(scale);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    // ===== ACCESSORS =====

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub fn is_mesh(&self) -> bool {
        matches!(self.content, NodeContent::Mesh { .. })
    }

    pub fn material(&self) -> Option<&Material> {
        match &self.content {
            NodeContent::Mesh { material, .. } => Some(material),
            _ => None,
        }
    }

    pub fn material_mut(&mut self) -> Option<&mut Material> {
        match &mut self.content {
            NodeContent::Mesh { material, .. } => Some(material),
            _ => None,
        }
    }

    pub fn directional_light_mut(&mut self) -> Option<&mut DirectionalLight> {
        match &mut self.content {
            NodeContent::DirectionalLight(light) => Some(light),
            _ => None,
        }
    }

    pub fn point_light_mut(&mut self) -> Option<&mut PointLight> {
        match &mut self.content {
            NodeContent::PointLight(light) => Some(light),
            _ => None,
        }
    }
}
