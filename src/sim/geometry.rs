//! Shape geometry: ray intersection, point containment, overlap
//!
//! Every shape kind answers the same three questions through [`Collider`],
//! so the scene, placement rules and ray sweep never match on the kind
//! themselves. Circles are the only kind today.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::RAY_EPSILON;

/// Kinds of shape the editor can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Circle,
}

/// Geometric queries every shape kind must answer
pub trait Collider {
    /// Ray parameter of the nearest hit in front of `origin`, if any.
    ///
    /// `direction` need not be unit length; the returned `t` scales it.
    fn intersect_ray(&self, origin: DVec2, direction: DVec2) -> Option<f64>;

    /// Whether `point` lies inside or on the shape
    fn contains_point(&self, point: DVec2) -> bool;

    /// Radius used for overlap checks
    fn effective_radius(&self) -> f64;
}

/// Intersect a ray with a circle
///
/// Solves |origin + t·direction - center|² = radius² and returns the
/// smaller root beyond [`RAY_EPSILON`], falling back to the larger one.
/// A ray starting inside the circle therefore reports its exit point.
pub fn intersect_ray_circle(
    origin: DVec2,
    direction: DVec2,
    center: DVec2,
    radius: f64,
) -> Option<f64> {
    let oc = origin - center;
    let a = direction.dot(direction);
    if a == 0.0 {
        return None; // Degenerate direction
    }
    let b = 2.0 * oc.dot(direction);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    if t1 > RAY_EPSILON {
        return Some(t1);
    }
    let t2 = (-b + sqrt_d) / (2.0 * a);
    if t2 > RAY_EPSILON {
        return Some(t2);
    }
    None
}

/// Point-in-circle test, boundary inclusive
#[inline]
pub fn circle_contains_point(center: DVec2, radius: f64, point: DVec2) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// Two circles overlap when their centers are closer than the sum of radii.
///
/// Touching (distance exactly equal) is allowed contact, not overlap.
#[inline]
pub fn circles_overlap(a_center: DVec2, a_radius: f64, b_center: DVec2, b_radius: f64) -> bool {
    a_center.distance(b_center) < a_radius + b_radius
}

/// A shape in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub center: DVec2,
    /// Primary size (radius for circles)
    pub size1: f64,
    /// Secondary size, reserved for non-circular kinds
    pub size2: f64,
    /// The light source is stored as a shape so it draws and collides like one
    pub is_light: bool,
}

impl Shape {
    /// A plain obstacle circle
    pub fn circle(center: DVec2, radius: f64) -> Self {
        Self {
            kind: ShapeKind::Circle,
            center,
            size1: radius,
            size2: 0.0,
            is_light: false,
        }
    }

    /// The light source
    pub fn light(center: DVec2, radius: f64) -> Self {
        Self {
            is_light: true,
            ..Self::circle(center, radius)
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.size1
    }

    /// Resize handle, on the rightmost point of the outline
    #[inline]
    pub fn handle_position(&self) -> DVec2 {
        self.center + DVec2::new(self.radius(), 0.0)
    }

    /// Whether this shape would overlap a circle at `center` with `radius`
    #[inline]
    pub fn overlaps_circle(&self, center: DVec2, radius: f64) -> bool {
        circles_overlap(center, radius, self.center, self.effective_radius())
    }
}

impl Collider for Shape {
    fn intersect_ray(&self, origin: DVec2, direction: DVec2) -> Option<f64> {
        match self.kind {
            ShapeKind::Circle => intersect_ray_circle(origin, direction, self.center, self.size1),
        }
    }

    fn contains_point(&self, point: DVec2) -> bool {
        match self.kind {
            ShapeKind::Circle => circle_contains_point(self.center, self.size1, point),
        }
    }

    fn effective_radius(&self) -> f64 {
        match self.kind {
            ShapeKind::Circle => self.size1,
        }
    }
}
