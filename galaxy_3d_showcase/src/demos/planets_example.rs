/// Procedural solar system: a sun, two planets and their orbit rings.

use glam::Vec3;
use crate::camera::OrbitControls;
use crate::error::Result;
use crate::example::{Example, FrameContext, InitContext};
use crate::parameter::ScalarBinding;
use crate::renderer::GeometryDesc;
use crate::scene::{Background, Color, Material, Node, NodeKey, PointLight};

/// Radians per second at speed 1
const SYSTEM_RATE: f32 = 0.6;
const EARTH_RATE: f32 = 0.6;
const MARS_RATE: f32 = 0.6162;

pub struct PlanetsExample {
    controls: OrbitControls,
    speed: Option<ScalarBinding>,
    earth: Option<NodeKey>,
    mars: Option<NodeKey>,
    phase: f32,
}

impl PlanetsExample {
    pub fn new() -> Self {
        Self {
            controls: OrbitControls::new(Vec3::ZERO, 3.0),
            speed: None,
            earth: None,
            mars: None,
            phase: 0.0,
        }
    }

    /// Simulated seconds (real time scaled by the speed binding)
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn earth(&self) -> Option<NodeKey> {
        self.earth
    }

    pub fn mars(&self) -> Option<NodeKey> {
        self.mars
    }
}

impl Default for PlanetsExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Example for PlanetsExample {
    fn name(&self) -> &str {
        "planets"
    }

    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<()> {
        ctx.camera.set_position(Vec3::new(0.0, 0.0, 3.0));
        ctx.camera.look_at(Vec3::ZERO);
        self.controls = OrbitControls::from_camera(ctx.camera);

        ctx.scene.set_background(Background::Color(Color::from_hex(0x020202)));

        let sun = ctx.create_geometry(&GeometryDesc::Circle { radius: 0.15, segments: 32 })?;
        ctx.scene.add(Node::mesh("sun", sun, Material::basic(Color::from_hex(0xffff00))).with_scale(0.5));
        ctx.scene.add(Node::point_light("sun_light", PointLight::new(Color::WHITE, 10.0, 0.0, 0.0)));

        let mars = ctx.create_geometry(&GeometryDesc::Octahedron { radius: 0.03, detail: 4 })?;
        self.mars = Some(ctx.scene.add(
            Node::mesh("mars", mars, Material::lambert(Color::from_hex(0x9b7653)))
                .with_position(Vec3::new(1.0, 0.0, 0.0)),
        ));
        let mars_orbit = ctx.create_geometry(&GeometryDesc::Torus {
            radius: 1.0,
            tube: 0.005,
            radial_segments: 30,
            tubular_segments: 128,
        })?;
        ctx.scene.add(Node::mesh("mars_orbit", mars_orbit, Material::line_basic(Color::from_hex(0x202020))));

        let earth = ctx.create_geometry(&GeometryDesc::Octahedron { radius: 0.05, detail: 1 })?;
        self.earth = Some(ctx.scene.add(
            Node::mesh("earth", earth, Material::lambert(Color::from_hex(0x0020ff)))
                .with_position(Vec3::new(0.8, 0.3, 0.0)),
        ));
        let earth_orbit = ctx.create_geometry(&GeometryDesc::Torus {
            radius: 0.855,
            tube: 0.005,
            radial_segments: 30,
            tubular_segments: 128,
        })?;
        ctx.scene.add(Node::mesh("earth_orbit", earth_orbit, Material::line_basic(Color::from_hex(0x202020))));

        self.speed = Some(ctx.folder("Orbits").add_scalar("speed", 1.0, 0.0, 5.0, 0.1)?);
        Ok(())
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>, delta: f32) -> Result<()> {
        let speed = self.speed.as_ref().map_or(1.0, |s| s.get() as f32);
        self.phase += delta * speed;

        ctx.scene.transform_mut().set_euler(0.0, 0.0, self.phase * SYSTEM_RATE);
        for (key, rate) in [(self.earth, EARTH_RATE), (self.mars, MARS_RATE)] {
            let Some(key) = key else {
                continue;
            };
            if let Some(planet) = ctx.scene.node_mut(key) {
                planet.transform.set_euler(0.0, 0.0, self.phase * rate);
            }
        }

        self.controls.update(ctx.camera, delta);
        Ok(())
    }

    fn orbit_controls(&mut self) -> Option<&mut OrbitControls> {
        Some(&mut self.controls)
    }
}
