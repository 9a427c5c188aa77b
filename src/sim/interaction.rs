//! Pointer-driven interaction state machine
//!
//! Translates raw pointer events into scene edits. Every edit goes through
//! the placement rules in [`super::collision`]; a rejected edit leaves the
//! scene untouched and the mode unchanged.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::{self, Verdict};
use super::geometry::Shape;
use super::session::EditorSession;
use crate::consts::*;

/// Pointer buttons the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    /// Left button: select, drag, resize, place
    Primary,
    /// Right button: delete
    Secondary,
}

/// Input from the host, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { button: PointerButton, pos: DVec2 },
    Move { pos: DVec2 },
    Up { button: PointerButton },
}

/// What a primary-button drag is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    DraggingLight,
    /// Dragging the selected shape; `offset` is pointer minus center at grab time
    DraggingShape { offset: DVec2 },
    /// Dragging the selected shape's resize handle
    ResizingShape,
}

/// What an event did to the session, for the host to react to (repaint, log)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditEvent {
    ResizeStarted { index: usize },
    LightGrabbed,
    ShapeGrabbed { index: usize },
    ShapeCreated { index: usize },
    ShapeRemoved { index: usize },
    ShapeMoved { index: usize, center: DVec2 },
    ShapeResized { index: usize, radius: f64 },
    LightMoved { pos: DVec2 },
    /// A placement, move or resize was refused because of an overlap
    Rejected { blocked_by: usize },
    Released,
}

/// Apply one pointer event to the session
pub fn handle_pointer(session: &mut EditorSession, event: PointerEvent) -> Option<EditEvent> {
    let outcome = match event {
        PointerEvent::Down {
            button: PointerButton::Primary,
            pos,
        } => primary_down(session, pos),
        PointerEvent::Down {
            button: PointerButton::Secondary,
            pos,
        } => secondary_down(session, pos),
        PointerEvent::Move { pos } => pointer_move(session, pos),
        PointerEvent::Up {
            button: PointerButton::Primary,
        } => {
            let was_idle = session.mode == InteractionMode::Idle;
            session.mode = InteractionMode::Idle;
            (!was_idle).then_some(EditEvent::Released)
        }
        PointerEvent::Up {
            button: PointerButton::Secondary,
        } => None,
    };

    if let Some(edit) = &outcome {
        log::debug!("{event:?} -> {edit:?} (mode {:?})", session.mode);
    }
    outcome
}

fn on_resize_handle(shape: &Shape, pos: DVec2) -> bool {
    pos.distance_squared(shape.handle_position()) <= HANDLE_PICK_RADIUS * HANDLE_PICK_RADIUS
}

fn on_light(session: &EditorSession, pos: DVec2) -> bool {
    pos.distance_squared(session.scene.light_position()) < LIGHT_PICK_RADIUS * LIGHT_PICK_RADIUS
}

/// Primary press, checked in priority order: resize handle, light, shape, empty space
fn primary_down(session: &mut EditorSession, pos: DVec2) -> Option<EditEvent> {
    if !session.bounds.contains(pos) {
        return None;
    }

    if let Some(index) = session.scene.selected()
        && session
            .scene
            .get(index)
            .is_some_and(|shape| on_resize_handle(shape, pos))
    {
        session.mode = InteractionMode::ResizingShape;
        return Some(EditEvent::ResizeStarted { index });
    }

    if on_light(session, pos) {
        session.scene.clear_selection();
        session.mode = InteractionMode::DraggingLight;
        return Some(EditEvent::LightGrabbed);
    }

    if let Some(index) = session.scene.pick(pos) {
        let center = session.scene.get(index)?.center;
        session.scene.select(index);
        session.mode = InteractionMode::DraggingShape {
            offset: pos - center,
        };
        return Some(EditEvent::ShapeGrabbed { index });
    }

    match collision::check_placement(&session.scene, pos, NEW_CIRCLE_RADIUS) {
        Verdict::Accepted(center) => {
            let index = session.scene.push(Shape::circle(center, NEW_CIRCLE_RADIUS))?;
            session.scene.select(index);
            Some(EditEvent::ShapeCreated { index })
        }
        Verdict::Rejected { blocked_by } => {
            log::trace!("Placement at ({:.1}, {:.1}) blocked by shape {blocked_by}", pos.x, pos.y);
            Some(EditEvent::Rejected { blocked_by })
        }
    }
}

/// Secondary press deletes the topmost obstacle under the pointer
fn secondary_down(session: &mut EditorSession, pos: DVec2) -> Option<EditEvent> {
    if !session.bounds.contains(pos) {
        return None;
    }

    let index = session.scene.pick(pos)?;
    session.scene.remove(index)?;
    Some(EditEvent::ShapeRemoved { index })
}

fn pointer_move(session: &mut EditorSession, pos: DVec2) -> Option<EditEvent> {
    match session.mode {
        InteractionMode::Idle => None,
        InteractionMode::ResizingShape => {
            let index = session.scene.selected()?;
            match collision::check_resize(&session.scene, index, pos)? {
                Verdict::Accepted(radius) => {
                    session.scene.set_radius(index, radius);
                    Some(EditEvent::ShapeResized { index, radius })
                }
                Verdict::Rejected { blocked_by } => Some(EditEvent::Rejected { blocked_by }),
            }
        }
        InteractionMode::DraggingShape { offset } => {
            let index = session.scene.selected()?;
            let candidate = pos - offset;
            match collision::check_move(&session.scene, &session.bounds, index, candidate)? {
                Verdict::Accepted(center) => {
                    session.scene.set_center(index, center);
                    Some(EditEvent::ShapeMoved { index, center })
                }
                Verdict::Rejected { blocked_by } => Some(EditEvent::Rejected { blocked_by }),
            }
        }
        InteractionMode::DraggingLight => {
            let resolved =
                collision::resolve_light_position(&session.scene, &session.bounds, pos);
            session.scene.set_light_position(resolved);
            Some(EditEvent::LightMoved { pos: resolved })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::CanvasBounds;
    use crate::sim::scene::Scene;

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            button: PointerButton::Primary,
            pos: DVec2::new(x, y),
        }
    }

    fn right(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            button: PointerButton::Secondary,
            pos: DVec2::new(x, y),
        }
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            pos: DVec2::new(x, y),
        }
    }

    const UP: PointerEvent = PointerEvent::Up {
        button: PointerButton::Primary,
    };

    #[test]
    fn test_click_shape_starts_drag() {
        let mut session = EditorSession::default();
        let edit = handle_pointer(&mut session, down(500.0, 200.0));
        assert_eq!(edit, Some(EditEvent::ShapeGrabbed { index: 1 }));
        assert_eq!(session.scene().selected(), Some(1));
        assert!(matches!(session.mode(), InteractionMode::DraggingShape { .. }));

        // Drag keeps the grab offset
        let edit = handle_pointer(&mut session, moved(520.0, 210.0));
        assert_eq!(
            edit,
            Some(EditEvent::ShapeMoved {
                index: 1,
                center: DVec2::new(520.0, 210.0)
            })
        );
    }

    #[test]
    fn test_drag_offset_preserved() {
        let mut session = EditorSession::default();
        handle_pointer(&mut session, down(530.0, 200.0));
        handle_pointer(&mut session, moved(430.0, 150.0));
        assert_eq!(session.scene().get(1).unwrap().center, DVec2::new(400.0, 150.0));
    }

    #[test]
    fn test_right_click_removes_shape() {
        let mut session = EditorSession::default();
        handle_pointer(&mut session, down(500.0, 200.0));
        handle_pointer(&mut session, UP);

        let edit = handle_pointer(&mut session, right(500.0, 200.0));
        assert_eq!(edit, Some(EditEvent::ShapeRemoved { index: 1 }));
        assert_eq!(session.scene().len(), 1);
        assert_eq!(session.scene().selected(), None);
    }

    #[test]
    fn test_right_click_never_removes_light() {
        let mut session = EditorSession::default();
        assert_eq!(handle_pointer(&mut session, right(150.0, 400.0)), None);
        assert_eq!(session.scene().len(), 2);
    }

    #[test]
    fn test_click_light_starts_light_drag_and_deselects() {
        let mut session = EditorSession::default();
        handle_pointer(&mut session, down(500.0, 200.0));
        handle_pointer(&mut session, UP);
        assert_eq!(session.scene().selected(), Some(1));

        let edit = handle_pointer(&mut session, down(150.0, 400.0));
        assert_eq!(edit, Some(EditEvent::LightGrabbed));
        assert_eq!(session.mode(), InteractionMode::DraggingLight);
        assert_eq!(session.scene().selected(), None);

        handle_pointer(&mut session, moved(-100.0, 900.0));
        assert_eq!(session.scene().light_position(), DVec2::new(30.0, 570.0));
    }

    #[test]
    fn test_light_pick_radius_is_strict() {
        let mut session = EditorSession::default();
        // Exactly 30 away from the light: not a light grab, so a placement
        let edit = handle_pointer(&mut session, down(180.0, 400.0));
        assert_eq!(edit, Some(EditEvent::ShapeCreated { index: 2 }));
    }

    #[test]
    fn test_click_empty_space_creates_circle() {
        let mut session = EditorSession::default();
        let edit = handle_pointer(&mut session, down(50.0, 50.0));
        assert_eq!(edit, Some(EditEvent::ShapeCreated { index: 2 }));
        let shape = session.scene().get(2).unwrap();
        assert_eq!(shape.center, DVec2::new(50.0, 50.0));
        assert_eq!(shape.radius(), NEW_CIRCLE_RADIUS);
        assert_eq!(session.scene().selected(), Some(2));
        assert_eq!(session.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_placement_blocked_near_shape() {
        let mut session = EditorSession::default();
        let edit = handle_pointer(&mut session, down(590.0, 200.0));
        assert_eq!(edit, Some(EditEvent::Rejected { blocked_by: 1 }));
        assert_eq!(session.scene().len(), 2);
        assert_eq!(session.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_resize_handle_takes_priority() {
        let mut session = EditorSession::default();
        handle_pointer(&mut session, down(500.0, 200.0));
        handle_pointer(&mut session, UP);

        // Handle sits at (570, 200), which is also inside the shape
        let edit = handle_pointer(&mut session, down(568.0, 203.0));
        assert_eq!(edit, Some(EditEvent::ResizeStarted { index: 1 }));
        assert_eq!(session.mode(), InteractionMode::ResizingShape);

        let edit = handle_pointer(&mut session, moved(600.0, 200.0));
        assert_eq!(edit, Some(EditEvent::ShapeResized { index: 1, radius: 100.0 }));

        let edit = handle_pointer(&mut session, moved(505.0, 200.0));
        assert_eq!(
            edit,
            Some(EditEvent::ShapeResized {
                index: 1,
                radius: MIN_SHAPE_RADIUS
            })
        );
    }

    #[test]
    fn test_resize_rejected_keeps_radius() {
        let mut session = EditorSession::default();
        handle_pointer(&mut session, down(500.0, 200.0));
        handle_pointer(&mut session, UP);
        handle_pointer(&mut session, down(570.0, 200.0));

        // Growing to reach the light (distance ~403) is refused
        let edit = handle_pointer(&mut session, moved(500.0, 600.0));
        assert_eq!(edit, Some(EditEvent::Rejected { blocked_by: 0 }));
        assert_eq!(session.scene().get(1).unwrap().radius(), 70.0);
        assert_eq!(session.mode(), InteractionMode::ResizingShape);
    }

    #[test]
    fn test_pointer_up_always_returns_to_idle() {
        let mut session = EditorSession::default();
        handle_pointer(&mut session, down(150.0, 400.0));
        assert_eq!(handle_pointer(&mut session, UP), Some(EditEvent::Released));
        assert_eq!(session.mode(), InteractionMode::Idle);
        assert_eq!(handle_pointer(&mut session, UP), None);
    }

    #[test]
    fn test_idle_move_does_nothing() {
        let mut session = EditorSession::default();
        let before = session.scene().shapes().to_vec();
        assert_eq!(handle_pointer(&mut session, moved(500.0, 200.0)), None);
        assert_eq!(session.scene().shapes(), before.as_slice());
    }

    #[test]
    fn test_sidebar_clicks_ignored() {
        let mut session = EditorSession::default();
        assert_eq!(handle_pointer(&mut session, down(850.0, 100.0)), None);
        assert_eq!(handle_pointer(&mut session, right(850.0, 100.0)), None);
        assert_eq!(session.scene().len(), 2);
    }

    #[test]
    fn test_drag_with_stale_selection_is_noop() {
        let mut session = EditorSession::default();
        handle_pointer(&mut session, down(500.0, 200.0));
        // Shape removed mid-drag (right press while left is held)
        handle_pointer(&mut session, right(500.0, 200.0));
        assert!(matches!(session.mode(), InteractionMode::DraggingShape { .. }));
        assert_eq!(handle_pointer(&mut session, moved(300.0, 300.0)), None);
    }

    #[test]
    fn test_drag_blocked_leaves_shape_in_place() {
        let scene = {
            let mut scene = Scene::new(DVec2::new(150.0, 400.0), 30.0);
            scene.push(Shape::circle(DVec2::new(300.0, 200.0), 50.0));
            scene.push(Shape::circle(DVec2::new(500.0, 200.0), 50.0));
            scene
        };
        let mut session = EditorSession::with_scene(scene, CanvasBounds::new(800.0, 600.0));

        handle_pointer(&mut session, down(500.0, 200.0));
        let edit = handle_pointer(&mut session, moved(380.0, 200.0));
        assert_eq!(edit, Some(EditEvent::Rejected { blocked_by: 1 }));
        assert_eq!(session.scene().get(2).unwrap().center, DVec2::new(500.0, 200.0));
    }
}
