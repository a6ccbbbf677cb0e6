/// Geometry trait and geometry descriptors

use std::fmt;
use std::sync::Arc;

/// Descriptor for creating geometry
///
/// Procedural shapes are tessellated by the backend; imported geometry
/// carries the raw bytes fetched by the asset loader.
#[derive(Debug, Clone)]
pub enum GeometryDesc {
    /// Flat disc in the XY plane
    Circle { radius: f32, segments: u32 },
    /// Subdivided octahedron (detail 0 = 8 faces)
    Octahedron { radius: f32, detail: u32 },
    /// Torus in the XY plane
    Torus { radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32 },
    /// Flat plane in the XY plane
    Plane { width: f32, height: f32 },
    /// Mesh data decoded by the backend from a model file
    Imported { label: String, bytes: Arc<[u8]> },
}

impl GeometryDesc {
    /// Short human readable name of the shape
    pub fn kind_name(&self) -> &'static str {
        match self {
            GeometryDesc::Circle { .. } => "circle",
            GeometryDesc::Octahedron { .. } => "octahedron",
            GeometryDesc::Torus { .. } => "torus",
            GeometryDesc::Plane { .. } => "plane",
            GeometryDesc::Imported { .. } => "imported",
        }
    }

    /// Approximate triangle count, used for renderer statistics
    pub fn triangle_estimate(&self) -> u64 {
        match self {
            GeometryDesc::Circle { segments, .. } => *segments as u64,
            GeometryDesc::Octahedron { detail, .. } => 8 * (*detail as u64 + 1).pow(2),
            GeometryDesc::Torus { radial_segments, tubular_segments, .. } => {
                2 * *radial_segments as u64 * *tubular_segments as u64
            }
            GeometryDesc::Plane { .. } => 2,
            GeometryDesc::Imported { bytes, .. } => bytes.len() as u64 / 36,
        }
    }
}

/// Geometry trait
///
/// GPU vertex/index data. Released when the last `Arc` is dropped.
pub trait Geometry: Send + Sync + fmt::Debug {
    /// Backend-unique identifier
    fn id(&self) -> u64;

    /// Descriptor the geometry was created from
    fn desc(&self) -> &GeometryDesc;
}
