/// Unit tests for HostLoop: switching, routing and resize forwarding.

use std::sync::{Arc, Mutex};
use crate::assets::{AssetCompletion, AssetKind, AssetLoader, AssetRequest, LoadTicket, LoadedAsset};
use crate::error::{Error, Result};
use crate::example::{DestroyContext, Example, FrameContext, InitContext, LifecycleState};
use crate::parameter::ParameterValue;
use crate::renderer::HeadlessRenderer;
use super::*;

// ============================================================================
// Test doubles
// ============================================================================

type Requests = Arc<Mutex<Vec<(LoadTicket, AssetRequest)>>>;
type Completions = Arc<Mutex<Vec<AssetCompletion>>>;

#[derive(Default, Clone)]
struct SharedLoader {
    requests: Requests,
    completions: Completions,
}

impl AssetLoader for SharedLoader {
    fn request(&mut self, ticket: LoadTicket, request: AssetRequest) {
        self.requests.lock().unwrap().push((ticket, request));
    }

    fn poll(&mut self) -> Vec<AssetCompletion> {
        self.completions.lock().unwrap().drain(..).collect()
    }

    fn in_flight(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl SharedLoader {
    /// Queue a successful completion for request `index`
    fn finish(&self, index: usize) {
        let (ticket, request) = self.requests.lock().unwrap()[index].clone();
        let result = Ok(LoadedAsset {
            kind: AssetKind::Model,
            paths: request.paths.clone(),
            data: vec![Arc::from(&b"glb"[..])],
            animations: Vec::new(),
        });
        self.completions.lock().unwrap().push(AssetCompletion { ticket, request, result });
    }
}

struct Journal {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl Example for Journal {
    fn name(&self) -> &str {
        self.name
    }

    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<()> {
        self.log.lock().unwrap().push(format!("{} initialize", self.name));
        ctx.folder(self.name).add_bool(&format!("{}_enabled", self.name), true)?;
        if self.fail {
            return Err(Error::InitializationFailed(format!("{} refused", self.name)));
        }
        Ok(())
    }

    fn update(&mut self, _ctx: &mut FrameContext<'_>, delta: f32) -> Result<()> {
        self.log.lock().unwrap().push(format!("{} update {}", self.name, delta));
        Ok(())
    }

    fn destroy(&mut self, _ctx: &mut DestroyContext<'_>) {
        self.log.lock().unwrap().push(format!("{} destroy", self.name));
    }
}

fn journal_registry(log: &Arc<Mutex<Vec<String>>>) -> ExampleRegistry {
    let mut registry = ExampleRegistry::new();
    for (name, fail) in [("a", false), ("b", false), ("broken", true)] {
        let log = log.clone();
        registry
            .register(name, move || Box::new(Journal { name, log: log.clone(), fail }))
            .unwrap();
    }
    registry
}

fn host_loop(registry: ExampleRegistry) -> (HostLoop, SharedLoader) {
    let config = ShowcaseConfig { width: 640, height: 480, ..Default::default() };
    let loader = SharedLoader::default();
    let host = HostLoop::new(&config, Box::new(HeadlessRenderer::new()), Box::new(loader.clone()), registry);
    (host, loader)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_applies_config() {
    let config = ShowcaseConfig { width: 1024, height: 512, shadow_maps: true, ..Default::default() };
    let host = HostLoop::new(
        &config,
        Box::new(HeadlessRenderer::new()),
        Box::new(SharedLoader::default()),
        ExampleRegistry::new(),
    );

    assert_eq!(host.viewport(), (1024, 512));
    assert_eq!(host.renderer().surface_size(), (1024, 512));
    assert!(host.renderer().shadow_maps_enabled());
    assert!((host.camera().aspect() - 2.0).abs() < 1e-6);
    assert!(host.current().is_none());
    assert_eq!(host.frames(), 0);
}

// ============================================================================
// Switching
// ============================================================================

#[test]
fn test_switch_destroys_previous_before_initializing_next() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (mut host, _) = host_loop(journal_registry(&log));

    host.switch_to("a").unwrap();
    host.switch_to("b").unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["a initialize", "a destroy", "b initialize"]);
    assert_eq!(host.current_name(), Some("b"));
    assert!(host.controls().owner().unwrap().starts_with("b#"));
    assert_eq!(host.controls().binding_count(), 1);
    assert!(host.controls().binding("a_enabled").is_none());
}

#[test]
fn test_switch_to_unknown_keeps_running_example() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (mut host, _) = host_loop(journal_registry(&log));
    host.switch_to("a").unwrap();

    assert!(matches!(host.switch_to("missing"), Err(Error::Configuration(_))));

    assert_eq!(host.current_name(), Some("a"));
    assert_eq!(*log.lock().unwrap(), vec!["a initialize"]);
}

#[test]
fn test_failed_initialize_leaves_nothing_running() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (mut host, _) = host_loop(journal_registry(&log));
    host.switch_to("a").unwrap();

    let result = host.switch_to("broken");

    assert!(matches!(result, Err(Error::InitializationFailed(_))));
    assert!(host.current().is_none());
    assert!(!host.controls().is_claimed());
    assert_eq!(host.controls().binding_count(), 0);
    assert!(host.scene().is_empty());
    // the loop keeps ticking without an example
    host.tick(0.016).unwrap();
    assert_eq!(host.frames(), 1);
}

#[test]
fn test_shutdown_releases_everything() {
    let (mut host, _) = host_loop(ExampleRegistry::with_builtin_demos());
    host.switch_to("planets").unwrap();
    assert!(!host.scene().is_empty());

    host.shutdown();

    assert!(host.current().is_none());
    assert!(host.scene().is_empty());
    assert!(!host.controls().is_claimed());
    assert_eq!(host.renderer().stats().live_geometries, 0);
}

// ============================================================================
// Frame loop
// ============================================================================

#[test]
fn test_tick_updates_then_renders() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (mut host, _) = host_loop(journal_registry(&log));
    host.switch_to("a").unwrap();

    host.tick(0.5).unwrap();
    host.tick(0.25).unwrap();

    assert_eq!(host.frames(), 2);
    assert_eq!(host.current().unwrap().elapsed(), 0.75);
    assert_eq!(host.renderer().stats().scene_draws, 2);
    assert_eq!(log.lock().unwrap()[1..], ["a update 0.5", "a update 0.25"]);
}

#[test]
fn test_tick_rejects_negative_delta() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (mut host, _) = host_loop(journal_registry(&log));
    host.switch_to("a").unwrap();

    assert!(matches!(host.tick(-1.0), Err(Error::InvalidArgument(_))));
    assert_eq!(host.frames(), 0);
}

#[test]
fn test_tick_routes_completions_to_running_example() {
    let (mut host, loader) = host_loop(ExampleRegistry::with_builtin_demos());
    host.switch_to("gltf").unwrap();
    assert_eq!(host.loads_in_flight(), 1);

    loader.finish(0);
    host.tick(0.016).unwrap();

    assert!(host.scene().find("model").is_some());
    assert_eq!(host.current().unwrap().pending_loads(), 0);
}

#[test]
fn test_completion_for_replaced_example_is_dropped() {
    let (mut host, loader) = host_loop(ExampleRegistry::with_builtin_demos());
    host.switch_to("gltf").unwrap();
    host.switch_to("planets").unwrap();

    loader.finish(0);

    assert_eq!(host.pump_assets(), 0);
    assert!(host.scene().find("model").is_none());
    assert_eq!(host.current().unwrap().state(), LifecycleState::Initialized);
}

// ============================================================================
// Resize and input
// ============================================================================

#[test]
fn test_resize_reaches_running_example() {
    let (mut host, _) = host_loop(ExampleRegistry::with_builtin_demos());
    host.switch_to("gltf").unwrap();
    host.tick(0.016).unwrap();

    host.resize(800, 600).unwrap();

    let driver = host.current().unwrap();
    assert_eq!(driver.viewport(), (800, 600));
    assert_eq!(driver.chain().size(), (800, 600));
    assert_eq!(driver.chain().resize_rounds(), 1);
    assert_eq!(host.renderer().surface_size(), (800, 600));
    assert!((host.camera().aspect() - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn test_resize_zero_is_ignored() {
    let (mut host, _) = host_loop(ExampleRegistry::with_builtin_demos());

    host.resize(0, 600).unwrap();

    assert_eq!(host.viewport(), (640, 480));
    assert_eq!(host.renderer().surface_size(), (640, 480));
}

#[test]
fn test_resize_without_example_updates_camera_and_surface() {
    let (mut host, _) = host_loop(ExampleRegistry::new());

    host.resize(300, 300).unwrap();

    assert_eq!(host.renderer().surface_size(), (300, 300));
    assert!((host.camera().aspect() - 1.0).abs() < 1e-6);
}

#[test]
fn test_write_control_reaches_binding() {
    let (mut host, _) = host_loop(ExampleRegistry::with_builtin_demos());
    host.switch_to("gltf").unwrap();

    let stored = host.write_control("speed", 42.0).unwrap();

    assert_eq!(stored, ParameterValue::Scalar(10.0));
    assert_eq!(host.controls().read("speed"), Some(ParameterValue::Scalar(10.0)));
    assert!(matches!(host.write_control("unknown", 1.0), Err(Error::InvalidParameter(_))));
}

#[test]
fn test_orbit_input_moves_camera() {
    let (mut host, _) = host_loop(ExampleRegistry::with_builtin_demos());
    host.switch_to("planets").unwrap();
    let before = host.camera().position();

    host.orbit(120.0, 0.0);
    host.zoom(1.0);
    host.tick(0.016).unwrap();

    assert_ne!(host.camera().position(), before);
}
