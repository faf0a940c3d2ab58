//! Scene modes, gesture mapping, and blend control.
//!
//! The scene is always in exactly one [`SceneMode`]. External collaborators
//! either set the mode directly or feed discrete [`GestureSignal`]s through
//! the explicit transition table in [`next_mode`]. A [`BlendController`]
//! turns the discrete mode into a smooth scalar in [0, 1] that the
//! compositor uses to interpolate between formations.
//!
//! # Example
//!
//! ```
//! use glimmer_transition::{BlendController, SceneMode};
//!
//! let mut blend = BlendController::new(SceneMode::Assembled, 0.05);
//! blend.set_mode(SceneMode::Scattered);
//!
//! for _ in 0..200 {
//!     blend.tick(1.0);
//! }
//! assert!((blend.blend() - 1.0).abs() < 1e-3);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// SceneMode
// ============================================================================

/// Discrete scene state driven by the external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SceneMode {
    /// Particles hold the structured formation.
    #[default]
    Assembled,
    /// Particles drift in the scattered formation.
    Scattered,
    /// Scattered, with one featured item pulled toward the camera.
    Focused,
}

impl SceneMode {
    /// Blend anchor for this mode: 0 is fully assembled, 1 fully scattered.
    ///
    /// Focused keeps the scatter blend at 1; the focus behavior itself is a
    /// layout override on the featured item, not a formation.
    pub fn anchor(self) -> f32 {
        match self {
            SceneMode::Assembled => 0.0,
            SceneMode::Scattered | SceneMode::Focused => 1.0,
        }
    }
}

// ============================================================================
// Gesture mapping
// ============================================================================

/// Discrete signal from the gesture-classification collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GestureSignal {
    /// Closed fist: pull the scene back together.
    Fist,
    /// Open palm: scatter the assembled scene.
    Open,
    /// Grab: focus on the featured item while scattered.
    Grab,
    /// No recognizable gesture.
    #[default]
    Idle,
}

/// Explicit gesture transition table.
///
/// Returns the mode the scene should move to, or `None` when the pair
/// `(current, signal)` is an ignored case: the signal arrived while no hand
/// was detected, the gesture has no meaning in the current mode, or the
/// scene is already where the gesture would take it.
pub fn next_mode(current: SceneMode, signal: GestureSignal, detected: bool) -> Option<SceneMode> {
    if !detected {
        return None;
    }
    match (signal, current) {
        (GestureSignal::Fist, mode) if mode != SceneMode::Assembled => Some(SceneMode::Assembled),
        (GestureSignal::Open, SceneMode::Assembled) => Some(SceneMode::Scattered),
        (GestureSignal::Grab, SceneMode::Scattered) => Some(SceneMode::Focused),
        _ => None,
    }
}

// ============================================================================
// BlendController
// ============================================================================

/// Eases a blend scalar toward the anchor of the current mode.
///
/// Each tick applies `blend += (anchor - blend) * rate`, a critically damped
/// exponential that converges geometrically and never overshoots for rates
/// in (0, 1]. `set_mode` may arrive at any time, including mid-transition;
/// the controller simply redirects its target.
#[derive(Debug, Clone)]
pub struct BlendController {
    mode: SceneMode,
    blend: f32,
    rate: f32,
}

impl BlendController {
    /// Creates a controller resting at the anchor of `initial`.
    ///
    /// `rate` is the per-tick smoothing constant at the reference cadence
    /// (60 Hz); callers with variable frame time scale it via the `dt_scale`
    /// argument of [`tick`](Self::tick).
    pub fn new(initial: SceneMode, rate: f32) -> Self {
        Self {
            mode: initial,
            blend: initial.anchor(),
            rate: rate.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Redirects the blend target. Repeated calls with the same mode are
    /// idempotent and do not perturb the trajectory.
    pub fn set_mode(&mut self, mode: SceneMode) {
        self.mode = mode;
    }

    /// Current discrete mode.
    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    /// Current blend scalar in [0, 1].
    pub fn blend(&self) -> f32 {
        self.blend
    }

    /// Anchor the blend is converging toward.
    pub fn target(&self) -> f32 {
        self.mode.anchor()
    }

    /// Advances the blend one tick.
    ///
    /// `dt_scale` is the ratio of elapsed time to the reference frame time;
    /// 1.0 at exactly 60 Hz. The effective step is clamped to 1 so long
    /// frames land on the target instead of overshooting.
    pub fn tick(&mut self, dt_scale: f32) {
        let step = (self.rate * dt_scale.max(0.0)).min(1.0);
        self.blend += (self.target() - self.blend) * step;
        self.blend = self.blend.clamp(0.0, 1.0);
    }

    /// Returns true once the blend is within `epsilon` of its target.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.blend - self.target()).abs() <= epsilon
    }
}
