//! Perspective projection, camera rig, and draw-primitive assembly.
//!
//! Turns camera-relative 3-D points into screen-space [`DrawPrimitive`]s:
//! perspective divide, behind-camera culling, and painter's-algorithm depth
//! ordering. The crate never touches a rendering surface; the Scene Driver
//! rasterizes the ordered primitives however it likes.
//!
//! # Example
//!
//! ```
//! use glimmer_project::{project, Viewport};
//! use glam::Vec3;
//!
//! let viewport = Viewport::new(800.0, 600.0);
//!
//! // A point on the focal plane projects at unit scale.
//! let p = project(Vec3::new(10.0, 0.0, 0.0), 800.0, &viewport).unwrap();
//! assert!((p.scale - 1.0).abs() < 1e-6);
//! ```

use glam::{Vec2, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Viewport
// ============================================================================

/// Output surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    /// Surface width.
    pub width: f32,
    /// Surface height.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl Viewport {
    /// Creates a viewport, clamping dimensions to at least one pixel.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Projection center in screen space.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

// ============================================================================
// Camera
// ============================================================================

/// Camera rig with a pointer-driven, smoothed offset.
///
/// The rig holds a neutral position and eases toward a pan target implied by
/// a normalized pointer. When the pointer is lost the position decays back
/// toward neutral. Movement is always a smoothed step, never a snap.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Current position.
    pub position: Vec3,
    /// Rest position the rig decays toward.
    pub neutral: Vec3,
    /// Perspective constant: world units of depth per unit of scale falloff.
    pub focal_length: f32,
    /// World-unit pan range across the full [0, 1] pointer span, per axis.
    pub pan_span: Vec2,
    /// Per-tick easing factor toward the target, at the reference cadence.
    pub smoothing: f32,
}

impl Camera {
    /// Creates a camera at rest at `neutral`.
    pub fn new(neutral: Vec3, focal_length: f32) -> Self {
        Self {
            position: neutral,
            neutral,
            focal_length,
            pan_span: Vec2::splat(400.0),
            smoothing: 0.05,
        }
    }

    /// Builder: set the pointer pan range.
    pub fn with_pan_span(mut self, pan_span: Vec2) -> Self {
        self.pan_span = pan_span;
        self
    }

    /// Builder: set the easing factor.
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing.clamp(f32::EPSILON, 1.0);
        self
    }

    /// Eases toward the pointer-implied pan target.
    ///
    /// `pointer` is a normalized position in [0, 1] per axis, or `None` when
    /// no pointer is detected, in which case the rig decays toward neutral.
    /// `dt_scale` is the elapsed-time ratio against the reference frame.
    pub fn update(&mut self, pointer: Option<Vec2>, dt_scale: f32) {
        let target = match pointer {
            Some(p) => {
                self.neutral
                    + Vec3::new(
                        (p.x - 0.5) * self.pan_span.x,
                        -(p.y - 0.5) * self.pan_span.y,
                        0.0,
                    )
            }
            None => self.neutral,
        };
        let step = (self.smoothing * dt_scale.max(0.0)).min(1.0);
        self.position += (target - self.position) * step;
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Result of projecting one camera-relative point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen-space position.
    pub screen: Vec2,
    /// Camera-relative depth, kept for painter's-algorithm sorting.
    pub depth: f32,
    /// Perspective scale factor; multiply base sizes by this.
    pub scale: f32,
}

/// Rotates a point about the vertical axis.
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

/// Perspective-projects a camera-relative point onto the viewport.
///
/// `scale = focal_length / (focal_length + z)`, so a point at `z = 0` sits
/// on the focal plane at unit scale and points farther away shrink. Points
/// at or behind the camera (`z <= -focal_length`) are culled and return
/// `None`. World y-up maps to screen y-down.
pub fn project(rel: Vec3, focal_length: f32, viewport: &Viewport) -> Option<Projected> {
    if rel.z <= -focal_length {
        return None;
    }
    let scale = focal_length / (focal_length + rel.z);
    Some(Projected {
        screen: viewport.center() + Vec2::new(rel.x, -rel.y) * scale,
        depth: rel.z,
        scale,
    })
}

// ============================================================================
// Draw primitives
// ============================================================================

/// Class of a draw primitive, for collaborators that rasterize each class
/// differently or overlay interactive elements on featured items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveKind {
    /// Main formation particle.
    Particle,
    /// Twinkling decor point.
    Decor,
    /// Featured item (photo, ornament).
    Featured,
}

/// One screen-space element, rebuilt every frame and never persisted.
///
/// `id` is stable within a kind across frames so collaborators can track
/// individual items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPrimitive {
    /// Stable identity within `kind`.
    pub id: u32,
    /// Primitive class.
    pub kind: PrimitiveKind,
    /// Screen-space position.
    pub position: Vec2,
    /// Camera-relative depth, used for ordering.
    pub depth: f32,
    /// Resolved on-screen size.
    pub size: f32,
    /// Resolved RGBA color, alpha premixed with twinkle/opacity state.
    pub color: [f32; 4],
}

/// Sorts primitives back-to-front (descending depth) for painter's-algorithm
/// compositing. The sort is stable, so equal-depth primitives keep their
/// emission order.
pub fn depth_sort(primitives: &mut [DrawPrimitive]) {
    primitives.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focal_plane_unit_scale() {
        let viewport = Viewport::new(800.0, 600.0);
        let p = project(Vec3::new(3.0, 4.0, 0.0), 800.0, &viewport).unwrap();
        assert!((p.scale - 1.0).abs() < 1e-6);
        assert!((p.screen.x - 403.0).abs() < 1e-3);
        assert!((p.screen.y - 296.0).abs() < 1e-3);
    }

    #[test]
    fn test_far_points_shrink() {
        let viewport = Viewport::default();
        let near = project(Vec3::new(0.0, 0.0, 100.0), 800.0, &viewport).unwrap();
        let far = project(Vec3::new(0.0, 0.0, 700.0), 800.0, &viewport).unwrap();
        assert!(near.scale > far.scale);
        assert!(far.scale > 0.0);
    }

    #[test]
    fn test_behind_camera_culled() {
        let viewport = Viewport::default();
        assert!(project(Vec3::new(0.0, 0.0, -2000.0), 800.0, &viewport).is_none());
        assert!(project(Vec3::new(0.0, 0.0, -800.0), 800.0, &viewport).is_none());
        assert!(project(Vec3::new(0.0, 0.0, -799.0), 800.0, &viewport).is_some());
    }

    #[test]
    fn test_rotate_y() {
        let p = rotate_y(Vec3::new(1.0, 5.0, 0.0), std::f32::consts::FRAC_PI_2);
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!((p.y - 5.0).abs() < 1e-6);
        assert!((p.z - 1.0).abs() < 1e-6);

        // A full turn is the identity.
        let q = rotate_y(Vec3::new(3.0, 1.0, -2.0), std::f32::consts::TAU);
        assert!((q - Vec3::new(3.0, 1.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn test_depth_sort_back_to_front() {
        let prim = |id: u32, depth: f32| DrawPrimitive {
            id,
            kind: PrimitiveKind::Particle,
            position: Vec2::ZERO,
            depth,
            size: 1.0,
            color: [1.0; 4],
        };
        let mut prims = vec![prim(0, 10.0), prim(1, 500.0), prim(2, -30.0), prim(3, 500.0)];
        depth_sort(&mut prims);

        assert_eq!(prims[0].depth, 500.0);
        assert_eq!(prims[3].depth, -30.0);
        // Stable: the two equal depths keep emission order.
        assert_eq!(prims[0].id, 1);
        assert_eq!(prims[1].id, 3);

        for pair in prims.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn test_camera_eases_toward_pointer() {
        let mut camera = Camera::new(Vec3::ZERO, 800.0).with_pan_span(Vec2::splat(20.0));

        // Pointer at the right edge pulls the camera right, smoothly.
        camera.update(Some(Vec2::new(1.0, 0.5)), 1.0);
        let first = camera.position.x;
        assert!(first > 0.0 && first < 10.0);

        for _ in 0..400 {
            camera.update(Some(Vec2::new(1.0, 0.5)), 1.0);
        }
        assert!((camera.position.x - 10.0).abs() < 1e-3);
        assert!(camera.position.y.abs() < 1e-3);
    }

    #[test]
    fn test_camera_decays_to_neutral() {
        let mut camera = Camera::new(Vec3::new(0.0, 5.0, 0.0), 800.0);
        for _ in 0..100 {
            camera.update(Some(Vec2::new(1.0, 0.0)), 1.0);
        }
        assert!(camera.position.x > 1.0);

        for _ in 0..600 {
            camera.update(None, 1.0);
        }
        assert!((camera.position - Vec3::new(0.0, 5.0, 0.0)).length() < 1e-2);
    }

    #[test]
    fn test_viewport_center() {
        let viewport = Viewport::new(1920.0, 1080.0);
        assert_eq!(viewport.center(), Vec2::new(960.0, 540.0));

        // Degenerate sizes are clamped, not rejected.
        let tiny = Viewport::new(0.0, -5.0);
        assert!(tiny.width >= 1.0 && tiny.height >= 1.0);
    }
}
