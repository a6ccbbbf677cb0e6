/// Grid of PBR spheres under an HDR environment, above a shadow plane.
///
/// Metalness grows along X and roughness along Z in steps of 0.2. The
/// sphere model is requested once per grid cell; each completion is
/// placed in the cell its ticket was issued for.

use std::f32::consts::PI;
use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::assets::{AssetKind, AssetRequest, LoadHandle, LoadedAsset};
use crate::camera::OrbitControls;
use crate::error::{Error, Result};
use crate::example::{DestroyContext, Example, FrameContext, InitContext, LoadContext};
use crate::parameter::BoolBinding;
use crate::renderer::{GeometryDesc, TextureDesc, WrapMode};
use crate::scene::{Background, Color, DirectionalLight, Material, MaterialMaps, Node, NodeKey};
use crate::engine_warn;

const SPHERE_PATH: &str = "models/material_sphere.obj";
const ENV_DIR: &str = "env/pisa/";
const ENV_FACES: [&str; 6] = ["px.hdr", "nx.hdr", "py.hdr", "ny.hdr", "pz.hdr", "nz.hdr"];
const GRID: u32 = 5;

pub struct TextureExample {
    controls: OrbitControls,
    maps: MaterialMaps,
    cells: FxHashMap<u64, (u32, u32)>,
    spheres: Vec<NodeKey>,
    shadow_plane: Option<NodeKey>,
    show_plane: Option<BoolBinding>,
    previous_shadow_maps: bool,
}

impl TextureExample {
    pub fn new() -> Self {
        Self {
            controls: OrbitControls::new(Vec3::ZERO, 8.0),
            maps: MaterialMaps::default(),
            cells: FxHashMap::default(),
            spheres: Vec::new(),
            shadow_plane: None,
            show_plane: None,
            previous_shadow_maps: false,
        }
    }

    /// Spheres placed so far
    pub fn spheres(&self) -> &[NodeKey] {
        &self.spheres
    }

    /// Sphere loads not completed yet
    pub fn pending_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn shadow_plane(&self) -> Option<NodeKey> {
        self.shadow_plane
    }

    fn place_sphere(&mut self, ctx: &mut LoadContext<'_>, handle: &LoadHandle, asset: &LoadedAsset, cell: (u32, u32)) -> Result<()> {
        let Some(bytes) = asset.data.first().cloned() else {
            return Err(Error::AssetLoad(format!("'{}' is empty", handle.label)));
        };
        let (i, j) = cell;
        let geometry = ctx.create_geometry(&GeometryDesc::Imported { label: handle.label.clone(), bytes })?;
        let material = Material::physical(Color::WHITE, i as f32 * 0.2, j as f32 * 0.2).with_maps(self.maps.clone());
        let node = Node::mesh(&format!("sphere_{}_{}", i, j), geometry, material)
            .with_position(Vec3::new(i as f32 * 1.5 - 3.0, 0.0, j as f32 * 1.5 - 3.0))
            .with_shadows(true, false);
        self.spheres.push(ctx.scene.add(node));
        Ok(())
    }
}

impl Default for TextureExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Example for TextureExample {
    fn name(&self) -> &str {
        "textures"
    }

    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<()> {
        self.previous_shadow_maps = ctx.shadow_maps_enabled();
        ctx.set_shadow_maps_enabled(true);

        ctx.camera.set_position(Vec3::new(0.0, 3.0, 8.0));
        ctx.camera.look_at(Vec3::ZERO);
        self.controls = OrbitControls::from_camera(ctx.camera);

        let mut repeat = |path: &str| {
            ctx.create_texture(&TextureDesc::from_path(path).with_wrap(WrapMode::Repeat, WrapMode::Repeat))
        };
        self.maps = MaterialMaps {
            albedo: Some(repeat("textures/rust/albedo.png")?),
            normal: Some(repeat("textures/rust/normal.png")?),
            metallic: Some(repeat("textures/rust/metallic.png")?),
            roughness: Some(repeat("textures/rust/roughness.png")?),
        };

        let key = DirectionalLight::new(Color::from_hex(0xfdfbd3), 1.0).with_target(Vec3::new(8.0, -8.0, -12.0));
        ctx.scene.add(Node::directional_light("key_light", key).with_shadows(true, false));
        let fill = DirectionalLight::new(Color::from_hex(0xffc0cb), 1.0).with_target(Vec3::new(-8.0, -8.0, 0.0));
        ctx.scene.add(Node::directional_light("fill_light", fill).with_shadows(true, false));

        for i in 0..GRID {
            for j in 0..GRID {
                let handle = ctx.load(AssetRequest::model(SPHERE_PATH));
                self.cells.insert(handle.ticket.id, (i, j));
            }
        }
        ctx.load(AssetRequest::cube(ENV_DIR, ENV_FACES));

        let show_plane = ctx.folder("Scene").add_bool("shadowPlane", true)?;
        let plane = ctx.create_geometry(&GeometryDesc::Plane { width: 15.0, height: 15.0 })?;
        let mut node = Node::mesh("shadow_plane", plane, Material::shadow(1.0))
            .with_position(Vec3::new(0.0, -0.6, 0.0))
            .with_shadows(false, true)
            .with_visible(show_plane.get());
        node.transform.rotate_x(-PI / 2.0);
        self.shadow_plane = Some(ctx.scene.add(node));
        self.show_plane = Some(show_plane);
        Ok(())
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>, delta: f32) -> Result<()> {
        if let (Some(show), Some(key)) = (&self.show_plane, self.shadow_plane) {
            if let Some(plane) = ctx.scene.node_mut(key) {
                plane.visible = show.get();
            }
        }
        self.controls.update(ctx.camera, delta);
        Ok(())
    }

    fn on_loaded(&mut self, ctx: &mut LoadContext<'_>, handle: &LoadHandle, asset: LoadedAsset) -> Result<()> {
        match asset.kind {
            AssetKind::Model => match self.cells.remove(&handle.ticket.id) {
                Some(cell) => self.place_sphere(ctx, handle, &asset, cell),
                None => Ok(()),
            },
            AssetKind::CubeTexture => {
                let environment = ctx.create_texture(&TextureDesc::cube("pisa", asset.data))?;
                ctx.scene.set_environment(Some(environment.clone()));
                ctx.scene.set_background(Background::Texture(environment));
                Ok(())
            }
            AssetKind::Texture => Ok(()),
        }
    }

    fn on_load_failed(&mut self, handle: &LoadHandle, error: &Error) {
        self.cells.remove(&handle.ticket.id);
        engine_warn!("galaxy3d::TextureExample", "Skipping '{}': {}", handle.label, error);
    }

    fn destroy(&mut self, ctx: &mut DestroyContext<'_>) {
        ctx.renderer.set_shadow_maps_enabled(self.previous_shadow_maps);
    }

    fn orbit_controls(&mut self) -> Option<&mut OrbitControls> {
        Some(&mut self.controls)
    }
}
