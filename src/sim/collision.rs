//! Placement rules for shapes and the light
//!
//! Decides whether a proposed position or size is admissible given the
//! other shapes and the canvas. Nothing here mutates the scene: every
//! check returns a verdict that the interaction layer applies or drops.
//!
//! All overlap tests are strict (`<`), so shapes may touch.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Collider, Shape};
use super::scene::Scene;
use crate::consts::*;
use crate::push_out_from;

/// The drawable canvas, origin at top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl CanvasBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Canvas left of the sidebar in a window of the given size
    pub fn from_window(window_width: f64, window_height: f64, sidebar_width: f64) -> Self {
        Self::new((window_width - sidebar_width).max(0.0), window_height.max(0.0))
    }

    /// Whether a point lies on the canvas (the sidebar starts at `x == width`)
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width && p.y < self.height
    }

    /// Pull `center` in so a shape of `margin` radius stays on the canvas.
    ///
    /// On a canvas narrower than the shape the far edge wins, so this never
    /// panics the way `f64::clamp` would with min > max.
    pub fn clamp_center(&self, center: DVec2, margin: f64) -> DVec2 {
        let mut p = center;
        if p.x - margin < 0.0 {
            p.x = margin;
        }
        if p.x + margin > self.width {
            p.x = self.width - margin;
        }
        if p.y - margin < 0.0 {
            p.y = margin;
        }
        if p.y + margin > self.height {
            p.y = self.height - margin;
        }
        p
    }
}

/// Outcome of a placement check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict<T> {
    /// The proposal (possibly clamped) is admissible
    Accepted(T),
    /// The proposal would overlap the shape at this index
    Rejected { blocked_by: usize },
}

impl<T> Verdict<T> {
    pub fn accepted(self) -> Option<T> {
        match self {
            Verdict::Accepted(value) => Some(value),
            Verdict::Rejected { .. } => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

/// Which shapes an overlap query should consider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapFilter {
    /// Skip this index (the shape being edited)
    pub exclude: Option<usize>,
    /// Whether the light counts as an obstacle
    pub include_light: bool,
}

impl OverlapFilter {
    fn admits(&self, index: usize, shape: &Shape) -> bool {
        Some(index) != self.exclude && (self.include_light || !shape.is_light)
    }
}

/// First shape (in scene order) that a circle at `center`/`radius` would overlap
pub fn first_overlap(
    scene: &Scene,
    center: DVec2,
    radius: f64,
    filter: OverlapFilter,
) -> Option<usize> {
    scene
        .draw_order()
        .filter(|(i, s)| filter.admits(*i, s))
        .find(|(_, s)| s.overlaps_circle(center, radius))
        .map(|(i, _)| i)
}

/// Check a new circle of `radius` at `center`.
///
/// Only obstacles block placement; the pointer handler never reaches this
/// while the pointer is over the light.
pub fn check_placement(scene: &Scene, center: DVec2, radius: f64) -> Verdict<DVec2> {
    let filter = OverlapFilter {
        exclude: None,
        include_light: false,
    };
    match first_overlap(scene, center, radius, filter) {
        Some(blocked_by) => Verdict::Rejected { blocked_by },
        None => Verdict::Accepted(center),
    }
}

/// Check moving the shape at `index` to `candidate`.
///
/// The candidate is first clamped onto the canvas, then rejected if it
/// overlaps any other shape, the light included.
pub fn check_move(
    scene: &Scene,
    bounds: &CanvasBounds,
    index: usize,
    candidate: DVec2,
) -> Option<Verdict<DVec2>> {
    let shape = scene.get(index)?;
    let radius = shape.effective_radius();
    let clamped = bounds.clamp_center(candidate, radius);

    let filter = OverlapFilter {
        exclude: Some(index),
        include_light: true,
    };
    Some(match first_overlap(scene, clamped, radius, filter) {
        Some(blocked_by) => Verdict::Rejected { blocked_by },
        None => Verdict::Accepted(clamped),
    })
}

/// Check resizing the shape at `index` so its edge follows `pointer`.
///
/// The radius is the pointer's distance from the (fixed) center, never
/// below [`MIN_SHAPE_RADIUS`].
pub fn check_resize(scene: &Scene, index: usize, pointer: DVec2) -> Option<Verdict<f64>> {
    let shape = scene.get(index)?;
    let new_radius = shape.center.distance(pointer).max(MIN_SHAPE_RADIUS);

    let filter = OverlapFilter {
        exclude: Some(index),
        include_light: true,
    };
    Some(match first_overlap(scene, shape.center, new_radius, filter) {
        Some(blocked_by) => Verdict::Rejected { blocked_by },
        None => Verdict::Accepted(new_radius),
    })
}

/// Resolve where the light ends up when dragged toward `candidate`.
///
/// Clamp onto the canvas, then walk the obstacles once in scene order and
/// push the light radially out of each one it overlaps, to exactly touching.
/// A later push can move the light back into an earlier obstacle (or off the
/// canvas); the pass is not repeated.
pub fn resolve_light_position(scene: &Scene, bounds: &CanvasBounds, candidate: DVec2) -> DVec2 {
    let light_radius = scene.light_radius();
    let mut pos = bounds.clamp_center(candidate, light_radius);

    for (i, shape) in scene.obstacles() {
        let min_dist = light_radius + shape.effective_radius();
        if pos.distance(shape.center) < min_dist {
            pos = push_out_from(shape.center, pos, min_dist);
            log::trace!("Light pushed out of shape {i} to ({:.1}, {:.1})", pos.x, pos.y);
        }
    }

    pos
}
