/// Animated glTF model behind a depth-of-field chain.
///
/// Two directional lights: the first fades in and out over a 20 second
/// cycle, the second follows its bindings directly. The model arrives
/// asynchronously and starts playing its first animation clip.

use glam::Vec3;
use crate::assets::{AssetRequest, LoadHandle, LoadedAsset};
use crate::camera::OrbitControls;
use crate::error::{Error, Result};
use crate::example::{Example, FrameContext, InitContext, LoadContext};
use crate::parameter::{ColorBinding, ScalarBinding};
use crate::post_process::{BokehPass, PassId, ScenePass};
use crate::renderer::GeometryDesc;
use crate::scene::{AnimationMixer, Color, DirectionalLight, Material, Node, NodeKey, Scene};
use crate::{engine_debug, engine_warn};

const MODEL_PATH: &str = "models/LittlestTokyo.glb";
const LIGHT_CYCLE: f32 = 20.0;

struct GltfBindings {
    speed: ScalarBinding,
    focus: ScalarBinding,
    aperture: ScalarBinding,
    maxblur: ScalarBinding,
    light_color1: ColorBinding,
    light_intensity2: ScalarBinding,
    light_color2: ColorBinding,
}

pub struct GltfExample {
    controls: OrbitControls,
    bindings: Option<GltfBindings>,
    bokeh: Option<PassId>,
    light1: Option<NodeKey>,
    light2: Option<NodeKey>,
    model: Option<NodeKey>,
    model_load: Option<LoadHandle>,
    mixer: AnimationMixer,
    time: f32,
}

impl GltfExample {
    pub fn new() -> Self {
        Self {
            controls: OrbitControls::new(Vec3::ZERO, 10.0),
            bindings: None,
            bokeh: None,
            light1: None,
            light2: None,
            model: None,
            model_load: None,
            mixer: AnimationMixer::new(),
            time: 0.0,
        }
    }

    /// Position in the light cycle, in `[0, 20)` seconds
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn mixer(&self) -> &AnimationMixer {
        &self.mixer
    }

    /// Scene node of the model, once loaded
    pub fn model(&self) -> Option<NodeKey> {
        self.model
    }

    /// Intensity of the fading light at a point of the cycle
    pub fn fade_intensity(time: f32) -> f32 {
        if time < LIGHT_CYCLE / 2.0 {
            time / 10.0
        } else {
            (LIGHT_CYCLE - time) / 10.0
        }
    }
}

fn light_mut(scene: &mut Scene, key: Option<NodeKey>) -> Option<&mut DirectionalLight> {
    scene.node_mut(key?)?.directional_light_mut()
}

impl Default for GltfExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Example for GltfExample {
    fn name(&self) -> &str {
        "gltf"
    }

    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<()> {
        ctx.camera.set_position(Vec3::new(5.0, 2.0, 8.0));
        ctx.camera.look_at(Vec3::new(0.0, 0.5, 0.0));
        self.controls = OrbitControls::from_camera(ctx.camera);

        let mut folder = ctx.folder("Animation Values");
        let bindings = GltfBindings {
            speed: folder.add_scalar("speed", 1.0, 0.0, 10.0, 0.1)?,
            focus: folder.add_scalar("focus", 0.0, 0.0, 1000.0, 0.01)?,
            aperture: folder.add_scalar("aperture", 0.0, 0.0, 0.005, 0.001)?,
            maxblur: folder.add_scalar("maxblur", 0.0, 0.0, 0.01, 0.001)?,
            light_color1: folder.add_color("lightColor1", 0xd7d3fd)?,
            light_intensity2: folder.add_scalar("lightIntensity2", 1.0, 0.0, 1.0, 0.1)?,
            light_color2: folder.add_color("lightColor2", 0xf3c0ff)?,
        };

        let light1 = DirectionalLight::new(bindings.light_color1.get(), 0.0)
            .with_target(Vec3::new(8.0, -8.0, -12.0));
        self.light1 = Some(ctx.scene.add(Node::directional_light("light1", light1).with_shadows(true, false)));

        let light2 = DirectionalLight::new(bindings.light_color2.get(), bindings.light_intensity2.get() as f32)
            .with_target(Vec3::new(0.0, -8.0, 12.0));
        self.light2 = Some(ctx.scene.add(Node::directional_light("light2", light2).with_shadows(true, false)));

        self.model_load = Some(ctx.load(AssetRequest::model(MODEL_PATH)));

        ctx.add_pass(Box::new(ScenePass::new()))?;
        self.bokeh = Some(ctx.add_pass(Box::new(BokehPass::new(
            bindings.focus.get() as f32,
            bindings.aperture.get() as f32,
            bindings.maxblur.get() as f32,
        )))?);

        self.bindings = Some(bindings);
        Ok(())
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>, delta: f32) -> Result<()> {
        let Some(bindings) = &self.bindings else {
            return Ok(());
        };

        self.time = (self.time + delta) % LIGHT_CYCLE;
        self.mixer.update(delta * bindings.speed.get() as f32);

        if let Some(id) = self.bokeh {
            if let Some(bokeh) = ctx.pass_mut::<BokehPass>(id) {
                bokeh.set_focus(bindings.focus.get() as f32);
                bokeh.set_aperture(bindings.aperture.get() as f32);
                bokeh.set_maxblur(bindings.maxblur.get() as f32);
            }
        }

        let fade = Self::fade_intensity(self.time);
        if let Some(light) = light_mut(ctx.scene, self.light1) {
            light.intensity = fade;
            light.color = bindings.light_color1.get();
        }
        if let Some(light) = light_mut(ctx.scene, self.light2) {
            light.intensity = bindings.light_intensity2.get() as f32;
            light.color = bindings.light_color2.get();
        }

        self.controls.update(ctx.camera, delta);
        Ok(())
    }

    fn on_loaded(&mut self, ctx: &mut LoadContext<'_>, handle: &LoadHandle, asset: LoadedAsset) -> Result<()> {
        if self.model_load.as_ref() != Some(handle) {
            return Ok(());
        }
        let Some(bytes) = asset.data.first().cloned() else {
            return Err(Error::AssetLoad(format!("'{}' is empty", handle.label)));
        };

        let geometry = ctx.create_geometry(&GeometryDesc::Imported { label: handle.label.clone(), bytes })?;
        let node = Node::mesh("model", geometry, Material::physical(Color::WHITE, 0.0, 1.0))
            .with_position(Vec3::new(1.0, 1.0, 0.0))
            .with_scale(0.01)
            .with_shadows(true, true);
        self.model = Some(ctx.scene.add(node));

        match asset.animations.into_iter().next() {
            Some(clip) => {
                engine_debug!("galaxy3d::GltfExample", "Playing clip '{}' ({:.2}s)", clip.name, clip.duration);
                self.mixer.play(clip);
            }
            None => engine_debug!("galaxy3d::GltfExample", "'{}' has no animation", handle.label),
        }
        Ok(())
    }

    fn on_load_failed(&mut self, handle: &LoadHandle, error: &Error) {
        engine_warn!("galaxy3d::GltfExample", "Model '{}' unavailable: {}", handle.label, error);
    }

    fn orbit_controls(&mut self) -> Option<&mut OrbitControls> {
        Some(&mut self.controls)
    }
}
