//! Lumen Editor - a 2D point-light ray casting scene editor
//!
//! Core modules:
//! - `sim`: Scene model, placement rules, pointer state machine and the ray sweep
//! - `settings`: Startup configuration (canvas size, starter scene)
//! - `error`: Error type for the fallible edges (config loading)
//! - `demo`: Seeded pointer gestures for headless runs
//!
//! Drawing is left to the host: it feeds pointer events into an
//! [`sim::EditorSession`] and pulls a [`sim::Frame`] each time it repaints.

pub mod demo;
pub mod error;
pub mod settings;
pub mod sim;

pub use error::EditorError;
pub use settings::Settings;

use glam::DVec2;

/// Editor configuration constants
pub mod consts {
    /// Number of rays cast per frame (one per degree)
    pub const RAY_COUNT: usize = 360;
    /// Ray length when nothing is in the way
    pub const FAR_CLIP_DISTANCE: f64 = 2000.0;
    /// Hits at or beyond this ray parameter are ignored by the sweep
    pub const MAX_RAY_T: f64 = 10_000.0;
    /// Roots at or below this are treated as self-intersection
    pub const RAY_EPSILON: f64 = 0.001;

    /// Radius of a freshly placed circle
    pub const NEW_CIRCLE_RADIUS: f64 = 50.0;
    /// Smallest radius a resize can produce
    pub const MIN_SHAPE_RADIUS: f64 = 20.0;
    /// Pick radius around the resize handle
    pub const HANDLE_PICK_RADIUS: f64 = 6.0;
    /// Pick radius around the light center (independent of the light's own radius)
    pub const LIGHT_PICK_RADIUS: f64 = 30.0;

    /// Default canvas dimensions
    pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;
    /// Width of the host's control panel, right of the canvas
    pub const SIDEBAR_WIDTH: f64 = 250.0;

    /// Starter scene
    pub const DEFAULT_LIGHT_POS: (f64, f64) = (150.0, 400.0);
    pub const DEFAULT_LIGHT_RADIUS: f64 = 30.0;
    pub const STARTER_CIRCLE_POS: (f64, f64) = (500.0, 200.0);
    pub const STARTER_CIRCLE_RADIUS: f64 = 70.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit direction for a ray angle in radians
#[inline]
pub fn direction_from_angle(theta: f64) -> DVec2 {
    polar_to_cartesian(1.0, theta)
}

/// Point at `distance` from `origin`, along the direction from `from` to `origin`.
///
/// Used to push a point radially away from `from`. Falls back to +x when the
/// two points coincide (atan2(0, 0) == 0).
#[inline]
pub fn push_out_from(from: DVec2, origin: DVec2, distance: f64) -> DVec2 {
    let delta = origin - from;
    let theta = delta.y.atan2(delta.x);
    from + polar_to_cartesian(distance, theta)
}
