//! Light ray sweep
//!
//! One ray per degree from the light. Each ray stops at the nearest
//! obstacle or runs out to [`FAR_CLIP_DISTANCE`]. Recomputed from scratch
//! every frame since shapes may have moved.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Collider;
use super::scene::Scene;
use crate::consts::*;
use crate::direction_from_angle;

/// A ray from the light to where it stops
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaySegment {
    pub origin: DVec2,
    pub end: DVec2,
    /// Stopped by an obstacle (false means clipped at the far distance)
    pub hit: bool,
}

impl RaySegment {
    #[inline]
    pub fn length(&self) -> f64 {
        self.origin.distance(self.end)
    }
}

/// Angle of ray `i` in radians (1° steps starting at +x)
#[inline]
pub fn ray_angle(i: usize) -> f64 {
    i as f64 * std::f64::consts::PI / 180.0
}

/// Nearest obstacle hit along `direction` from `origin`.
///
/// Only a strictly smaller `t` replaces the current best, so on a tie the
/// obstacle earlier in the scene wins.
pub fn nearest_hit(scene: &Scene, origin: DVec2, direction: DVec2) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut min_t = MAX_RAY_T;

    for (i, shape) in scene.obstacles() {
        if let Some(t) = shape.intersect_ray(origin, direction)
            && t < min_t
        {
            min_t = t;
            best = Some((i, t));
        }
    }

    best
}

/// Cast a single ray from the light
pub fn cast_ray(scene: &Scene, direction: DVec2) -> RaySegment {
    let origin = scene.light_position();
    match nearest_hit(scene, origin, direction) {
        Some((_, t)) => RaySegment {
            origin,
            end: origin + direction * t,
            hit: true,
        },
        None => RaySegment {
            origin,
            end: origin + direction * FAR_CLIP_DISTANCE,
            hit: false,
        },
    }
}

/// Cast all [`RAY_COUNT`] rays, in angle order
pub fn cast_rays(scene: &Scene) -> Vec<RaySegment> {
    (0..RAY_COUNT)
        .map(|i| cast_ray(scene, direction_from_angle(ray_angle(i))))
        .collect()
}
