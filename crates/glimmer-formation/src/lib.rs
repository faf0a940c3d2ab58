//! Formation generators for the glimmer particle engine.
//!
//! A formation assigns exactly one 3-D target position to every particle
//! index. Structured formations (the spiral cone) keep a recognizable
//! silhouette from any azimuth; unstructured formations (the scatter cloud)
//! fill a much larger volume so the transition between the two reads clearly
//! on screen.
//!
//! All generators take an explicit seed and are pure functions: the same
//! configuration and seed always produce the same positions, which is what
//! makes formation layout testable.
//!
//! # Example
//!
//! ```
//! use glimmer_formation::{spiral_cone, scatter_cloud, SpiralCone, ScatterCloud};
//!
//! let cone = spiral_cone(&SpiralCone::default(), 3000, 42);
//! let cloud = scatter_cloud(&ScatterCloud::default(), 3000, 42);
//!
//! assert_eq!(cone.len(), cloud.len());
//! ```

use std::f32::consts::TAU;

use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Seeded RNG
// ============================================================================

/// Small deterministic random number generator for formation layout.
#[derive(Debug, Clone)]
pub struct FormationRng {
    state: u64,
}

impl Default for FormationRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl FormationRng {
    /// Creates a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        // xorshift gets stuck at zero, so remap that one seed.
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    /// Returns a random u64.
    fn next_u64(&mut self) -> u64 {
        // xorshift64
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a random f32 in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() as f32) / (u64::MAX as f32)
    }

    /// Returns a random f32 in [min, max).
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns a random offset with each axis in [-magnitude/2, magnitude/2).
    pub fn jitter(&mut self, magnitude: f32) -> Vec3 {
        Vec3::new(
            (self.next_f32() - 0.5) * magnitude,
            (self.next_f32() - 0.5) * magnitude,
            (self.next_f32() - 0.5) * magnitude,
        )
    }
}

// ============================================================================
// Spiral Cone
// ============================================================================

/// Parameters for the structured "assembled" formation.
///
/// Particles wind around a cone in interleaved spiral strands. Position is
/// parametrized by `progress` so the silhouette stays coherent under any
/// rotation: `radius = base_radius * (1 - progress)`,
/// `angle = progress * loops * 2pi + strand_offset`,
/// `y = progress * height - height / 2`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiralCone {
    /// Total cone height. The base sits at `-height / 2`, the tip at `+height / 2`.
    pub height: f32,
    /// Radius at the base of the cone.
    pub base_radius: f32,
    /// Number of full spiral revolutions from base to tip.
    pub loops: f32,
    /// Number of interleaved strands, each offset by an equal angle.
    pub strands: usize,
    /// Maximum per-axis jitter. Kept small relative to `base_radius` so the
    /// silhouette stays recognizable.
    pub jitter: f32,
    /// Vertical offset applied to every position.
    pub y_offset: f32,
}

impl Default for SpiralCone {
    fn default() -> Self {
        Self {
            height: 600.0,
            base_radius: 250.0,
            loops: 8.0,
            strands: 3,
            jitter: 3.0,
            y_offset: 0.0,
        }
    }
}

impl SpiralCone {
    /// Returns the cone surface radius at the given progress in [0, 1].
    pub fn radius_at(&self, progress: f32) -> f32 {
        self.base_radius * (1.0 - progress.clamp(0.0, 1.0))
    }
}

/// Generates `count` positions on a jittered spiral cone.
///
/// Every index in `[0, count)` receives exactly one position. Consecutive
/// indices alternate between strands so each strand spans the full height.
pub fn spiral_cone(config: &SpiralCone, count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = FormationRng::new(seed);
    let strands = config.strands.max(1);
    let mut positions = Vec::with_capacity(count);

    for i in 0..count {
        let progress = i as f32 / count as f32;
        let strand_offset = (i % strands) as f32 * (TAU / strands as f32);
        let angle = progress * config.loops * TAU + strand_offset;
        let radius = config.radius_at(progress);
        let y = progress * config.height - config.height / 2.0 + config.y_offset;

        let base = Vec3::new(angle.cos() * radius, y, angle.sin() * radius);
        positions.push(base + rng.jitter(config.jitter));
    }

    positions
}

// ============================================================================
// Scatter Cloud
// ============================================================================

/// Parameters for the unstructured "scattered" formation.
///
/// Positions are drawn uniformly from an axis-aligned box centered on the
/// origin. The default extent is several times the default cone height so
/// the scatter transition is visually obvious.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScatterCloud {
    /// Full side lengths of the box.
    pub extent: Vec3,
}

impl Default for ScatterCloud {
    fn default() -> Self {
        Self {
            extent: Vec3::splat(2000.0),
        }
    }
}

/// Generates `count` positions uniformly inside the cloud volume.
pub fn scatter_cloud(config: &ScatterCloud, count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = FormationRng::new(seed);
    let mut positions = Vec::with_capacity(count);

    for _ in 0..count {
        positions.push(Vec3::new(
            (rng.next_f32() - 0.5) * config.extent.x,
            (rng.next_f32() - 0.5) * config.extent.y,
            (rng.next_f32() - 0.5) * config.extent.z,
        ));
    }

    positions
}

// ============================================================================
// Cone Shell
// ============================================================================

/// Parameters for decor placement just outside a cone surface.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConeShell {
    /// Height of the underlying cone.
    pub height: f32,
    /// Base radius of the underlying cone.
    pub base_radius: f32,
    /// Outward offset from the cone surface.
    pub offset: f32,
    /// Upper bound on progress, below 1.0 to keep points off the very tip.
    pub max_progress: f32,
    /// Vertical offset applied to every position.
    pub y_offset: f32,
}

impl Default for ConeShell {
    fn default() -> Self {
        Self {
            height: 600.0,
            base_radius: 250.0,
            offset: 8.0,
            max_progress: 0.9,
            y_offset: 0.0,
        }
    }
}

/// Generates `count` positions scattered on a shell around the cone.
///
/// Each point picks a random progress in `[0, max_progress)` and a random
/// azimuth, then sits `offset` outside the cone radius at that height.
pub fn cone_shell(config: &ConeShell, count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = FormationRng::new(seed);
    let mut positions = Vec::with_capacity(count);

    for _ in 0..count {
        let progress = rng.next_f32() * config.max_progress;
        let radius = config.base_radius * (1.0 - progress) + config.offset;
        let angle = rng.next_f32() * TAU;
        let y = progress * config.height - config.height / 2.0 + config.y_offset;
        positions.push(Vec3::new(angle.cos() * radius, y, angle.sin() * radius));
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_range() {
        let mut rng = FormationRng::new(42);
        for _ in 0..100 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
        for _ in 0..100 {
            let v = rng.range(5.0, 10.0);
            assert!((5.0..10.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_zero_seed() {
        let mut rng = FormationRng::new(0);
        let a = rng.next_f32();
        let b = rng.next_f32();
        assert!(a != b || a != 0.0);
    }

    #[test]
    fn test_spiral_cone_deterministic() {
        let config = SpiralCone::default();
        let a = spiral_cone(&config, 500, 7);
        let b = spiral_cone(&config, 500, 7);
        assert_eq!(a.len(), 500);
        assert_eq!(a, b);
    }

    #[test]
    fn test_spiral_cone_count_exact() {
        let config = SpiralCone::default();
        for count in [0, 1, 2, 99, 1000] {
            assert_eq!(spiral_cone(&config, count, 1).len(), count);
        }
    }

    #[test]
    fn test_spiral_cone_jitter_bounded() {
        let config = SpiralCone {
            jitter: 3.0,
            ..Default::default()
        };
        let positions = spiral_cone(&config, 1000, 3);

        // Each position must sit within jitter of its ideal spiral point.
        for (i, p) in positions.iter().enumerate() {
            let progress = i as f32 / 1000.0;
            let strand_offset = (i % config.strands) as f32 * (TAU / config.strands as f32);
            let angle = progress * config.loops * TAU + strand_offset;
            let radius = config.radius_at(progress);
            let ideal = Vec3::new(
                angle.cos() * radius,
                progress * config.height - config.height / 2.0,
                angle.sin() * radius,
            );
            assert!((*p - ideal).length() <= config.jitter * 3.0f32.sqrt());
        }
    }

    #[test]
    fn test_spiral_cone_tapers() {
        let config = SpiralCone {
            jitter: 0.0,
            strands: 1,
            ..Default::default()
        };
        let positions = spiral_cone(&config, 100, 1);

        // Horizontal distance from the axis shrinks toward the tip.
        let base_r = Vec3::new(positions[0].x, 0.0, positions[0].z).length();
        let tip_r = Vec3::new(positions[99].x, 0.0, positions[99].z).length();
        assert!(base_r > tip_r);
        assert!((base_r - config.base_radius).abs() < 0.001);
    }

    #[test]
    fn test_scatter_cloud_bounded() {
        let config = ScatterCloud {
            extent: Vec3::new(40.0, 20.0, 10.0),
        };
        let positions = scatter_cloud(&config, 1000, 11);
        assert_eq!(positions.len(), 1000);

        for p in &positions {
            assert!(p.x.abs() <= 20.0);
            assert!(p.y.abs() <= 10.0);
            assert!(p.z.abs() <= 5.0);
        }
    }

    #[test]
    fn test_scatter_cloud_larger_than_cone() {
        let cone = spiral_cone(&SpiralCone::default(), 1000, 5);
        let cloud = scatter_cloud(&ScatterCloud::default(), 1000, 5);

        let max_extent = |points: &[Vec3]| {
            points
                .iter()
                .map(|p| p.length())
                .fold(0.0f32, f32::max)
        };
        assert!(max_extent(&cloud) > max_extent(&cone) * 1.5);
    }

    #[test]
    fn test_cone_shell_outside_surface() {
        let config = ConeShell::default();
        let positions = cone_shell(&config, 500, 9);

        for p in &positions {
            let progress =
                (p.y - config.y_offset + config.height / 2.0) / config.height;
            let surface = config.base_radius * (1.0 - progress);
            let radial = Vec3::new(p.x, 0.0, p.z).length();
            assert!((radial - (surface + config.offset)).abs() < 0.01);
            assert!(progress < config.max_progress);
        }
    }

    #[test]
    fn test_cone_shell_deterministic() {
        let config = ConeShell::default();
        assert_eq!(cone_shell(&config, 100, 4), cone_shell(&config, 100, 4));
    }
}
