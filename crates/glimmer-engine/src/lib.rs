//! Particle choreography engine: formation blending, twinkle decor, and
//! per-frame projection.
//!
//! The [`Engine`] owns every piece of scene state: the per-particle target
//! positions for each formation, the twinkling decor points, the featured
//! items, the blend controller, and the camera rig. An external Scene Driver
//! owns the clock and the rendering surface and calls [`Engine::step`] once
//! per display frame; the engine returns an ordered slice of
//! [`DrawPrimitive`]s for the driver to rasterize.
//!
//! The engine is purely reactive and synchronous. It performs no I/O, owns
//! no timer, and spawns no threads. `set_mode`, `apply_gesture`,
//! `set_pointer`, and `set_focus_target` only stage values; staged inputs
//! are consumed at the start of the next step, so a signal arriving between
//! frames can never tear a frame in progress.
//!
//! # Example
//!
//! ```
//! use glimmer_engine::{Engine, EngineConfig};
//! use glimmer_transition::SceneMode;
//!
//! let mut engine = Engine::new(EngineConfig::default()).unwrap();
//! engine.set_mode(SceneMode::Scattered);
//!
//! let frame = engine.step(1.0 / 60.0);
//! assert!(!frame.is_empty());
//! ```

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use glimmer_formation::{
    cone_shell, scatter_cloud, spiral_cone, ConeShell, FormationRng, ScatterCloud, SpiralCone,
};
use glimmer_project::{depth_sort, project, rotate_y, Camera, Viewport};
use glimmer_transition::{next_mode, BlendController, GestureSignal, SceneMode};

pub use glimmer_project::{DrawPrimitive, PrimitiveKind};

/// Reference cadence the easing rates are specified against.
const REFERENCE_FPS: f32 = 60.0;

/// Wobble speed range for per-particle drift, so motion is not uniform.
const WOBBLE_SPEED_RANGE: (f32, f32) = (0.5, 1.5);

/// Featured-item layout constants (world units, pixel-scaled scene).
const FEATURED_RING_RADIUS: f32 = 200.0;
const FEATURED_RING_HEIGHT: f32 = 500.0;
const FEATURED_RING_SPIN: f32 = 0.2;
const FEATURED_DRIFT_RADIUS: f32 = 500.0;
const FEATURED_SPAWN_EXTENT: f32 = 500.0;
const FEATURED_FOCUS_POSITION: Vec3 = Vec3::new(0.0, 0.0, -400.0);
const FEATURED_FOCUS_SCALE: f32 = 4.0;
const FEATURED_DIM_SCALE: f32 = 0.5;
const FEATURED_SCALE_EASE: f32 = 0.1;
const FEATURED_ALPHA: f32 = 0.9;

// ============================================================================
// Errors
// ============================================================================

/// Construction-time configuration errors. The engine refuses to initialize
/// rather than render a malformed scene.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The two formations assign positions to different particle counts.
    #[error("formation particle count mismatch: assembled has {assembled}, scattered has {scattered}")]
    FormationCountMismatch {
        /// Position count in the assembled formation.
        assembled: usize,
        /// Position count in the scattered formation.
        scattered: usize,
    },

    /// Easing rate outside (0, 1] cannot converge or would oscillate.
    #[error("easing rate must be in (0, 1], got {0}")]
    InvalidEaseRate(f32),

    /// Non-positive focal length breaks the perspective divide.
    #[error("focal length must be positive, got {0}")]
    InvalidFocalLength(f32),

    /// A spiral cone with zero strands assigns no positions.
    #[error("spiral cone needs at least one strand")]
    NoStrands,

    /// Twinkle speed range with min above max.
    #[error("twinkle speed range is inverted: {min} > {max}")]
    InvertedTwinkleRange {
        /// Lower bound of the configured range.
        min: f32,
        /// Upper bound of the configured range.
        max: f32,
    },

    /// Particles need at least one color to cycle through.
    #[error("particle palette is empty")]
    EmptyPalette,
}

// ============================================================================
// Configuration
// ============================================================================

/// Color palette per particle class.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Colors cycled across main particles by index.
    pub particle_colors: Vec<[f32; 4]>,
    /// Decor point color; alpha is replaced by the twinkle value per frame.
    pub decor_color: [f32; 4],
    /// Featured item tint.
    pub featured_color: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            particle_colors: vec![
                [0.106, 0.302, 0.243, 1.0], // matte green
                [0.831, 0.686, 0.216, 1.0], // metallic gold
                [0.831, 0.141, 0.149, 1.0], // deep red
            ],
            decor_color: [0.980, 0.800, 0.082, 1.0],
            featured_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Static configuration, read once at construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Number of main particles.
    pub particle_count: usize,
    /// Structured formation geometry.
    pub cone: SpiralCone,
    /// Unstructured formation geometry.
    pub cloud: ScatterCloud,
    /// Decor placement shell.
    pub shell: ConeShell,
    /// Number of twinkling decor points.
    pub decor_count: usize,
    /// Number of featured items (photos, ornaments).
    pub featured_count: usize,
    /// Twinkle oscillation speed range in radians per second.
    pub twinkle_speed: (f32, f32),
    /// Blend easing rate per reference frame, in (0, 1].
    pub ease_rate: f32,
    /// Perspective focal length.
    pub focal_length: f32,
    /// Camera rest position.
    pub camera_position: Vec3,
    /// World-unit pan range across the full pointer span.
    pub pointer_span: Vec2,
    /// Camera easing factor per reference frame.
    pub camera_smoothing: f32,
    /// Ambient orbit rate about the vertical axis, radians per second.
    pub rotation_speed: f32,
    /// Peak drift offset per axis when fully scattered.
    pub drift_amplitude: f32,
    /// Blend value above which drift activates.
    pub drift_threshold: f32,
    /// Base particle size range.
    pub size_range: (f32, f32),
    /// Flat particle opacity.
    pub particle_alpha: f32,
    /// Base decor size range.
    pub decor_size_range: (f32, f32),
    /// Extra on-screen multiplier for decor sizes.
    pub decor_size_scale: f32,
    /// Base on-screen size of featured items at scale 1.
    pub featured_size: f32,
    /// Initial surface width in pixels.
    pub width: f32,
    /// Initial surface height in pixels.
    pub height: f32,
    /// Mode the scene starts in.
    pub initial_mode: SceneMode,
    /// Color palette.
    pub palette: Palette,
    /// Seed for all one-time random layout.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particle_count: 3000,
            cone: SpiralCone::default(),
            cloud: ScatterCloud::default(),
            shell: ConeShell::default(),
            decor_count: 100,
            featured_count: 0,
            twinkle_speed: (1.0, 2.1),
            ease_rate: 0.05,
            focal_length: 800.0,
            camera_position: Vec3::ZERO,
            pointer_span: Vec2::splat(400.0),
            camera_smoothing: 0.05,
            rotation_speed: 0.3,
            drift_amplitude: 10.0,
            drift_threshold: 0.1,
            size_range: (1.5, 3.5),
            particle_alpha: 0.8,
            decor_size_range: (1.0, 2.5),
            decor_size_scale: 2.0,
            featured_size: 60.0,
            width: 1280.0,
            height: 720.0,
            initial_mode: SceneMode::Assembled,
            palette: Palette::default(),
            seed: 12345,
        }
    }
}

// ============================================================================
// Particle Store
// ============================================================================

/// Named formation a particle target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Formation {
    /// Structured spiral-cone layout.
    Assembled,
    /// Unstructured scatter-cloud layout.
    Scattered,
}

/// Authoritative per-particle record set.
///
/// Target positions and static attributes are fixed at construction; only
/// the current position, size, and alpha mutate, once per frame, inside the
/// engine step. No formation logic lives here.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    assembled: Vec<Vec3>,
    scattered: Vec<Vec3>,
    base_size: Vec<f32>,
    color: Vec<[f32; 4]>,
    wobble_phase: Vec<f32>,
    wobble_speed: Vec<f32>,
    current_position: Vec<Vec3>,
    current_size: Vec<f32>,
    current_alpha: Vec<f32>,
}

impl ParticleStore {
    /// Creates a store from two formation tables and static attributes.
    ///
    /// Rejects formations whose position counts differ; a particle without
    /// a position in every formation is a configuration error, not a
    /// render-time condition.
    pub fn new(
        assembled: Vec<Vec3>,
        scattered: Vec<Vec3>,
        base_size: Vec<f32>,
        color: Vec<[f32; 4]>,
        wobble_phase: Vec<f32>,
        wobble_speed: Vec<f32>,
    ) -> Result<Self, EngineError> {
        if assembled.len() != scattered.len() {
            return Err(EngineError::FormationCountMismatch {
                assembled: assembled.len(),
                scattered: scattered.len(),
            });
        }
        let count = assembled.len();
        debug_assert_eq!(base_size.len(), count);
        debug_assert_eq!(color.len(), count);
        debug_assert_eq!(wobble_phase.len(), count);
        debug_assert_eq!(wobble_speed.len(), count);

        let current_position = assembled.clone();
        Ok(Self {
            assembled,
            scattered,
            base_size,
            color,
            wobble_phase,
            wobble_speed,
            current_position,
            current_size: vec![0.0; count],
            current_alpha: vec![0.0; count],
        })
    }

    /// Number of particles.
    pub fn count(&self) -> usize {
        self.assembled.len()
    }

    /// Immutable target position for a formation.
    pub fn target(&self, formation: Formation, index: usize) -> Vec3 {
        match formation {
            Formation::Assembled => self.assembled[index],
            Formation::Scattered => self.scattered[index],
        }
    }

    /// Writes the resolved render state for one particle.
    pub fn set_current(&mut self, index: usize, position: Vec3, size: f32, alpha: f32) {
        self.current_position[index] = position;
        self.current_size[index] = size;
        self.current_alpha[index] = alpha;
    }

    /// Current interpolated world position.
    pub fn current_position(&self, index: usize) -> Vec3 {
        self.current_position[index]
    }

    /// Current resolved on-screen size (0 when culled).
    pub fn current_size(&self, index: usize) -> f32 {
        self.current_size[index]
    }

    /// Current alpha (0 when culled).
    pub fn current_alpha(&self, index: usize) -> f32 {
        self.current_alpha[index]
    }

    /// Static base size.
    pub fn base_size(&self, index: usize) -> f32 {
        self.base_size[index]
    }

    /// Static color.
    pub fn color(&self, index: usize) -> [f32; 4] {
        self.color[index]
    }

    fn wobble_phase(&self, index: usize) -> f32 {
        self.wobble_phase[index]
    }

    fn wobble_speed(&self, index: usize) -> f32 {
        self.wobble_speed[index]
    }
}

// ============================================================================
// Decor
// ============================================================================

/// A sparse ornamental point with phase-based brightness oscillation.
///
/// Brightness is a pure function of the global clock and this point's own
/// phase and speed; decor points share no mutable state. Decor co-rotates
/// and projects with the main particles but is never affected by the
/// formation blend.
#[derive(Debug, Clone)]
pub struct DecorPoint {
    /// Fixed position on the shell.
    pub position: Vec3,
    /// Base size before perspective scaling.
    pub base_size: f32,
    /// Oscillation phase offset.
    pub phase: f32,
    /// Oscillation speed in radians per second.
    pub speed: f32,
}

impl DecorPoint {
    /// Instantaneous brightness in [0, 1]: `(sin(clock * speed + phase) + 1) / 2`.
    pub fn brightness(&self, clock: f32) -> f32 {
        ((clock * self.speed + self.phase).sin() + 1.0) / 2.0
    }

    /// Visible alpha: zero for the bottom half of the oscillation, ramping
    /// linearly to 1 over the top half. Each point is off half the time.
    pub fn alpha(&self, clock: f32) -> f32 {
        let b = self.brightness(clock);
        if b <= 0.5 {
            0.0
        } else {
            (b - 0.5) / 0.5
        }
    }
}

// ============================================================================
// Featured items
// ============================================================================

/// A featured item (photo, ornament) with mode-dependent layout.
///
/// Position and scale ease toward per-mode targets every frame. Under
/// Focused mode the selected item moves to a fixed on-camera position at
/// enlarged scale while the rest shrink in place.
#[derive(Debug, Clone)]
pub struct FeaturedItem {
    /// Current world position.
    pub position: Vec3,
    /// Current scale multiplier.
    pub scale: f32,
    /// Per-item drift seed for the scattered layout.
    pub seed: f32,
}

// ============================================================================
// Engine
// ============================================================================

/// The particle choreography and projection engine.
///
/// Constructed once, owning all scene state exclusively. See the crate docs
/// for the frame contract.
#[derive(Debug, Clone)]
pub struct Engine {
    store: ParticleStore,
    decor: Vec<DecorPoint>,
    featured: Vec<FeaturedItem>,
    focus: usize,
    blend: BlendController,
    camera: Camera,
    viewport: Viewport,
    palette: Palette,
    rotation_speed: f32,
    drift_amplitude: f32,
    drift_threshold: f32,
    particle_alpha: f32,
    decor_size_scale: f32,
    featured_size: f32,
    clock: f32,
    pointer: Option<Vec2>,
    pending_mode: Option<SceneMode>,
    pending_pointer: Option<Option<Vec2>>,
    pending_focus: Option<usize>,
    frame: Vec<DrawPrimitive>,
}

impl Engine {
    /// Builds an engine, generating both formations from the configuration.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        if config.cone.strands == 0 {
            return Err(EngineError::NoStrands);
        }
        let assembled = spiral_cone(&config.cone, config.particle_count, config.seed);
        let scattered = scatter_cloud(
            &config.cloud,
            config.particle_count,
            config.seed.wrapping_add(1),
        );
        Self::with_formations(config, assembled, scattered)
    }

    /// Builds an engine from explicit formation tables.
    ///
    /// The tables must assign one position per particle each; a count
    /// mismatch is rejected here rather than tolerated at render time.
    pub fn with_formations(
        config: EngineConfig,
        assembled: Vec<Vec3>,
        scattered: Vec<Vec3>,
    ) -> Result<Self, EngineError> {
        if !(config.ease_rate > 0.0 && config.ease_rate <= 1.0) {
            return Err(EngineError::InvalidEaseRate(config.ease_rate));
        }
        if config.focal_length <= 0.0 {
            return Err(EngineError::InvalidFocalLength(config.focal_length));
        }
        let (speed_min, speed_max) = config.twinkle_speed;
        if speed_min > speed_max {
            return Err(EngineError::InvertedTwinkleRange {
                min: speed_min,
                max: speed_max,
            });
        }
        if config.palette.particle_colors.is_empty() {
            return Err(EngineError::EmptyPalette);
        }

        let count = assembled.len();
        let palette_len = config.palette.particle_colors.len();

        let mut rng = FormationRng::new(config.seed.wrapping_add(3));
        let base_size = (0..count)
            .map(|_| rng.range(config.size_range.0, config.size_range.1))
            .collect();
        let color = (0..count)
            .map(|i| config.palette.particle_colors[i % palette_len])
            .collect();
        let wobble_phase = (0..count).map(|_| rng.range(0.0, TAU)).collect();
        let wobble_speed = (0..count)
            .map(|_| rng.range(WOBBLE_SPEED_RANGE.0, WOBBLE_SPEED_RANGE.1))
            .collect();

        let store = ParticleStore::new(
            assembled,
            scattered,
            base_size,
            color,
            wobble_phase,
            wobble_speed,
        )?;

        let mut decor_rng = FormationRng::new(config.seed.wrapping_add(4));
        let decor = cone_shell(&config.shell, config.decor_count, config.seed.wrapping_add(2))
            .into_iter()
            .map(|position| DecorPoint {
                position,
                base_size: decor_rng.range(config.decor_size_range.0, config.decor_size_range.1),
                phase: decor_rng.range(0.0, TAU),
                speed: decor_rng.range(speed_min, speed_max),
            })
            .collect();

        let mut featured_rng = FormationRng::new(config.seed.wrapping_add(5));
        let featured = (0..config.featured_count)
            .map(|i| FeaturedItem {
                position: featured_rng.jitter(FEATURED_SPAWN_EXTENT),
                scale: 1.0,
                seed: i as f32 * 100.0,
            })
            .collect();

        let camera = Camera::new(config.camera_position, config.focal_length)
            .with_pan_span(config.pointer_span)
            .with_smoothing(config.camera_smoothing);

        Ok(Self {
            store,
            decor,
            featured,
            focus: 0,
            blend: BlendController::new(config.initial_mode, config.ease_rate),
            camera,
            viewport: Viewport::new(config.width, config.height),
            palette: config.palette,
            rotation_speed: config.rotation_speed,
            drift_amplitude: config.drift_amplitude,
            drift_threshold: config.drift_threshold,
            particle_alpha: config.particle_alpha,
            decor_size_scale: config.decor_size_scale,
            featured_size: config.featured_size,
            clock: 0.0,
            pointer: None,
            pending_mode: None,
            pending_pointer: None,
            pending_focus: None,
            frame: Vec::new(),
        })
    }

    // ------------------------------------------------------------------
    // Staged inputs
    // ------------------------------------------------------------------

    /// Stages a mode change; takes effect at the start of the next step.
    pub fn set_mode(&mut self, mode: SceneMode) {
        self.pending_mode = Some(mode);
    }

    /// Runs a gesture signal through the transition table and stages the
    /// resulting mode, if any. Ignored pairs leave the scene untouched.
    pub fn apply_gesture(&mut self, signal: GestureSignal, detected: bool) {
        let current = self.pending_mode.unwrap_or_else(|| self.blend.mode());
        if let Some(next) = next_mode(current, signal, detected) {
            self.pending_mode = Some(next);
        }
    }

    /// Stages a normalized pointer position. Out-of-range coordinates are
    /// clamped into [0, 1]. When `detected` is false the camera decays back
    /// toward its rest position.
    pub fn set_pointer(&mut self, x: f32, y: f32, detected: bool) {
        self.pending_pointer =
            Some(detected.then(|| Vec2::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0))));
    }

    /// Stages which featured item Focused mode highlights. Out-of-range ids
    /// are ignored and the prior target is retained.
    pub fn set_focus_target(&mut self, id: usize) {
        if id < self.featured.len() {
            self.pending_focus = Some(id);
        }
    }

    /// Updates the projection center for a resized surface.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current discrete scene mode.
    pub fn mode(&self) -> SceneMode {
        self.blend.mode()
    }

    /// Current formation blend scalar in [0, 1].
    pub fn blend(&self) -> f32 {
        self.blend.blend()
    }

    /// Accumulated clock in seconds.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// The per-particle record set.
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    /// The decor point set.
    pub fn decor(&self) -> &[DecorPoint] {
        &self.decor
    }

    /// The featured item set.
    pub fn featured(&self) -> &[FeaturedItem] {
        &self.featured
    }

    /// Which featured item Focused mode highlights.
    pub fn focus_target(&self) -> usize {
        self.focus
    }

    /// The camera rig.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    // ------------------------------------------------------------------
    // Frame step
    // ------------------------------------------------------------------

    /// Advances the scene by `dt` seconds and returns the frame's draw
    /// primitives, depth-sorted back to front.
    ///
    /// The slice is valid until the next call; primitives are rebuilt from
    /// scratch every frame and never persisted.
    pub fn step(&mut self, dt: f32) -> &[DrawPrimitive] {
        let dt = dt.max(0.0);
        let dt_scale = dt * REFERENCE_FPS;

        // Staged inputs take effect here, never mid-frame.
        if let Some(mode) = self.pending_mode.take() {
            self.blend.set_mode(mode);
        }
        if let Some(id) = self.pending_focus.take() {
            self.focus = id;
        }
        if let Some(pointer) = self.pending_pointer.take() {
            self.pointer = pointer;
        }

        self.clock += dt;
        self.blend.tick(dt_scale);
        self.camera.update(self.pointer, dt_scale);
        self.update_featured(dt_scale);

        self.frame.clear();
        let blend = self.blend.blend();
        let rotation = self.clock * self.rotation_speed;

        for i in 0..self.store.count() {
            let assembled = self.store.target(Formation::Assembled, i);
            let scattered = self.store.target(Formation::Scattered, i);
            let mut position = assembled.lerp(scattered, blend);

            if blend > self.drift_threshold {
                let k = i as f32;
                let t = self.clock * self.store.wobble_speed(i) + self.store.wobble_phase(i);
                let amplitude = self.drift_amplitude * blend;
                position += Vec3::new(
                    (t + k).sin(),
                    (t + k * 1.5).cos(),
                    (t + k * 2.0).sin(),
                ) * amplitude;
            }

            let rel = rotate_y(position, rotation) - self.camera.position;
            match project(rel, self.camera.focal_length, &self.viewport) {
                Some(projected) => {
                    let size = self.store.base_size(i) * projected.scale;
                    self.store
                        .set_current(i, position, size, self.particle_alpha);
                    let mut color = self.store.color(i);
                    color[3] = self.particle_alpha;
                    self.frame.push(DrawPrimitive {
                        id: i as u32,
                        kind: PrimitiveKind::Particle,
                        position: projected.screen,
                        depth: projected.depth,
                        size,
                        color,
                    });
                }
                None => self.store.set_current(i, position, 0.0, 0.0),
            }
        }

        let clock = self.clock;
        for (i, point) in self.decor.iter().enumerate() {
            let alpha = point.alpha(clock);
            if alpha <= 0.0 {
                continue;
            }
            let rel = rotate_y(point.position, rotation) - self.camera.position;
            if let Some(projected) = project(rel, self.camera.focal_length, &self.viewport) {
                let mut color = self.palette.decor_color;
                color[3] = alpha;
                self.frame.push(DrawPrimitive {
                    id: i as u32,
                    kind: PrimitiveKind::Decor,
                    position: projected.screen,
                    depth: projected.depth,
                    size: point.base_size * projected.scale * self.decor_size_scale,
                    color,
                });
            }
        }

        // Featured items face the camera; the ambient orbit does not apply.
        for (i, item) in self.featured.iter().enumerate() {
            let rel = item.position - self.camera.position;
            if let Some(projected) = project(rel, self.camera.focal_length, &self.viewport) {
                let mut color = self.palette.featured_color;
                color[3] = FEATURED_ALPHA;
                self.frame.push(DrawPrimitive {
                    id: i as u32,
                    kind: PrimitiveKind::Featured,
                    position: projected.screen,
                    depth: projected.depth,
                    size: self.featured_size * item.scale * projected.scale,
                    color,
                });
            }
        }

        depth_sort(&mut self.frame);
        &self.frame
    }

    /// Eases featured items toward their per-mode layout targets.
    fn update_featured(&mut self, dt_scale: f32) {
        let n = self.featured.len();
        if n == 0 {
            return;
        }
        let mode = self.blend.mode();
        let clock = self.clock;
        let focus = self.focus;

        for (i, item) in self.featured.iter_mut().enumerate() {
            let fraction = i as f32 / n as f32;
            let (target, position_ease, scale_target) = match mode {
                SceneMode::Assembled => {
                    let angle = fraction * TAU + clock * FEATURED_RING_SPIN;
                    let ring = Vec3::new(
                        angle.cos() * FEATURED_RING_RADIUS,
                        fraction * FEATURED_RING_HEIGHT - FEATURED_RING_HEIGHT / 2.0,
                        angle.sin() * FEATURED_RING_RADIUS,
                    );
                    (ring, 0.05, 1.0)
                }
                SceneMode::Scattered => {
                    let s = item.seed;
                    let drift = Vec3::new(
                        (clock * 0.5 + s).sin(),
                        (clock * 0.3 + s).cos(),
                        (clock * 0.2 + s).sin(),
                    ) * FEATURED_DRIFT_RADIUS;
                    (drift, 0.02, 1.5)
                }
                SceneMode::Focused => {
                    if i == focus {
                        (FEATURED_FOCUS_POSITION, 0.1, FEATURED_FOCUS_SCALE)
                    } else {
                        // Dimmed items hold position and shrink in place.
                        (item.position, 0.0, FEATURED_DIM_SCALE)
                    }
                }
            };

            let position_step = (position_ease * dt_scale).min(1.0);
            item.position += (target - item.position) * position_step;
            let scale_step = (FEATURED_SCALE_EASE * dt_scale).min(1.0);
            item.scale += (scale_target - item.scale) * scale_step;
        }
    }
}
