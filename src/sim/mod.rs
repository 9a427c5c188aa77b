//! Editor core
//!
//! Geometry, scene model, placement rules, pointer state machine and the
//! light sweep. Pure and single-threaded:
//! - No drawing or windowing dependencies
//! - Only the interaction state machine mutates the scene
//! - Stable iteration order (scene order) everywhere

pub mod collision;
pub mod frame;
pub mod geometry;
pub mod interaction;
pub mod lighting;
pub mod scene;
pub mod session;

pub use collision::{
    CanvasBounds, OverlapFilter, Verdict, check_move, check_placement, check_resize,
    first_overlap, resolve_light_position,
};
pub use frame::{Frame, ShapeView};
pub use geometry::{
    Collider, Shape, ShapeKind, circle_contains_point, circles_overlap, intersect_ray_circle,
};
pub use interaction::{EditEvent, InteractionMode, PointerButton, PointerEvent, handle_pointer};
pub use lighting::{RaySegment, cast_ray, cast_rays, nearest_hit, ray_angle};
pub use scene::Scene;
pub use session::EditorSession;
