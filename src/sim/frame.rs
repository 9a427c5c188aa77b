//! Per-frame render payload
//!
//! Everything the host needs to draw one frame. Colors, glow, the selection
//! outline style and any text are the host's business.

use glam::DVec2;
use serde::Serialize;

use super::collision::CanvasBounds;
use super::geometry::{Collider, ShapeKind};
use super::lighting::{RaySegment, cast_rays};
use super::session::EditorSession;

/// One shape as the host should draw it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeView {
    /// Position in the scene (draw order)
    pub index: usize,
    pub kind: ShapeKind,
    pub center: DVec2,
    pub radius: f64,
    pub is_light: bool,
    pub is_selected: bool,
    /// Resize handle, present only on the selected shape
    pub handle: Option<DVec2>,
}

/// A complete frame: shapes bottom-to-top plus the ray fan
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub canvas: CanvasBounds,
    pub shapes: Vec<ShapeView>,
    pub rays: Vec<RaySegment>,
}

impl Frame {
    /// Snapshot a session. The ray sweep runs fresh every time.
    pub fn capture(session: &EditorSession) -> Self {
        let scene = session.scene();
        let selected = scene.selected();

        let shapes = scene
            .draw_order()
            .map(|(index, shape)| {
                let is_selected = selected == Some(index);
                ShapeView {
                    index,
                    kind: shape.kind,
                    center: shape.center,
                    radius: shape.effective_radius(),
                    is_light: shape.is_light,
                    is_selected,
                    handle: is_selected.then(|| shape.handle_position()),
                }
            })
            .collect();

        Self {
            canvas: session.bounds(),
            shapes,
            rays: cast_rays(scene),
        }
    }

    /// Number of rays stopped by an obstacle
    pub fn hit_count(&self) -> usize {
        self.rays.iter().filter(|r| r.hit).count()
    }

    pub fn light(&self) -> Option<&ShapeView> {
        self.shapes.iter().find(|s| s.is_light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::RAY_COUNT;
    use crate::sim::interaction::{PointerButton, PointerEvent};

    #[test]
    fn test_frame_of_starter_scene() {
        let session = EditorSession::default();
        let frame = session.frame();

        assert_eq!(frame.shapes.len(), 2);
        assert_eq!(frame.rays.len(), RAY_COUNT);
        assert!(frame.shapes[0].is_light);
        assert_eq!(frame.light().unwrap().center, DVec2::new(150.0, 400.0));
        assert!(frame.shapes.iter().all(|s| !s.is_selected && s.handle.is_none()));

        // The starter circle blocks a fan of rays toward the upper right
        assert!(frame.hit_count() > 0);
        assert!(frame.hit_count() < RAY_COUNT);
    }

    #[test]
    fn test_selected_shape_carries_handle() {
        let mut session = EditorSession::default();
        session.handle(PointerEvent::Down {
            button: PointerButton::Primary,
            pos: DVec2::new(500.0, 200.0),
        });

        let frame = session.frame();
        let selected: Vec<&ShapeView> = frame.shapes.iter().filter(|s| s.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 1);
        assert_eq!(selected[0].handle, Some(DVec2::new(570.0, 200.0)));
    }

    #[test]
    fn test_frame_serializes_to_json() {
        let frame = EditorSession::default().frame();
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["rays"].as_array().unwrap().len(), RAY_COUNT);
        assert_eq!(json["shapes"][1]["radius"], 70.0);
    }
}
