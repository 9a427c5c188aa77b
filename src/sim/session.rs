//! Editor session: everything one canvas needs, owned in one place
//!
//! The host holds a single [`EditorSession`]. Pointer events mutate it via
//! [`EditorSession::handle`]; repaints borrow it via [`EditorSession::frame`].

use glam::DVec2;

use super::collision::CanvasBounds;
use super::frame::Frame;
use super::geometry::Shape;
use super::interaction::{EditEvent, InteractionMode, PointerEvent, handle_pointer};
use super::scene::Scene;
use crate::consts::*;
use crate::error::EditorError;
use crate::settings::Settings;

/// Scene, pointer mode and canvas size for one editor
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub(crate) scene: Scene,
    pub(crate) mode: InteractionMode,
    pub(crate) bounds: CanvasBounds,
    /// Host sidebar width, subtracted from window widths
    sidebar_width: f64,
}

impl Default for EditorSession {
    /// The starter scene on an 800x600 canvas
    fn default() -> Self {
        let mut scene = Scene::new(DVec2::from(DEFAULT_LIGHT_POS), DEFAULT_LIGHT_RADIUS);
        scene.push(Shape::circle(
            DVec2::from(STARTER_CIRCLE_POS),
            STARTER_CIRCLE_RADIUS,
        ));
        Self::with_scene(scene, CanvasBounds::default())
    }
}

impl EditorSession {
    /// Build a session from (validated) settings
    pub fn new(settings: &Settings) -> Result<Self, EditorError> {
        settings.validate()?;

        let mut scene = Scene::new(DVec2::from(settings.light_position), settings.light_radius);
        if settings.starter_circle {
            scene.push(Shape::circle(
                DVec2::from(STARTER_CIRCLE_POS),
                STARTER_CIRCLE_RADIUS,
            ));
        }
        let bounds = CanvasBounds::new(settings.canvas_width, settings.canvas_height);

        log::info!(
            "Editor session: {}x{} canvas, {} shape(s)",
            bounds.width,
            bounds.height,
            scene.len()
        );
        Ok(Self {
            sidebar_width: settings.sidebar_width,
            ..Self::with_scene(scene, bounds)
        })
    }

    /// Wrap an existing scene
    pub fn with_scene(scene: Scene, bounds: CanvasBounds) -> Self {
        Self {
            scene,
            mode: InteractionMode::Idle,
            bounds,
            sidebar_width: SIDEBAR_WIDTH,
        }
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[inline]
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    #[inline]
    pub fn sidebar_width(&self) -> f64 {
        self.sidebar_width
    }

    /// Feed one pointer event through the interaction state machine
    pub fn handle(&mut self, event: PointerEvent) -> Option<EditEvent> {
        handle_pointer(self, event)
    }

    /// The host resized the canvas. Existing shapes stay where they are;
    /// the new bounds apply from the next drag on.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.bounds = CanvasBounds::new(width, height);
        log::debug!("Canvas resized to {width}x{height}");
    }

    /// The host window resized; the canvas is what's left of the sidebar
    pub fn set_window_size(&mut self, width: f64, height: f64) {
        let bounds = CanvasBounds::from_window(width, height, self.sidebar_width);
        self.set_canvas_size(bounds.width, bounds.height);
    }

    /// Snapshot for drawing: shapes plus a fresh ray sweep
    pub fn frame(&self) -> Frame {
        Frame::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::interaction::PointerButton;

    #[test]
    fn test_default_is_starter_scene() {
        let session = EditorSession::default();
        assert_eq!(session.scene().len(), 2);
        assert_eq!(session.scene().light_position(), DVec2::new(150.0, 400.0));
        assert_eq!(session.scene().get(1).unwrap().radius(), 70.0);
        assert_eq!(session.mode(), InteractionMode::Idle);
        assert_eq!(session.bounds(), CanvasBounds::new(800.0, 600.0));
    }

    #[test]
    fn test_new_from_settings() {
        let settings = Settings {
            starter_circle: false,
            light_position: (10.0, 20.0),
            ..Settings::default()
        };
        let session = EditorSession::new(&settings).unwrap();
        assert_eq!(session.scene().len(), 1);
        assert_eq!(session.scene().light_position(), DVec2::new(10.0, 20.0));
    }

    #[test]
    fn test_new_rejects_bad_settings() {
        let settings = Settings {
            light_radius: -1.0,
            ..Settings::default()
        };
        assert!(EditorSession::new(&settings).is_err());
    }

    #[test]
    fn test_canvas_resize_is_not_retroactive() {
        let mut session = EditorSession::default();
        session.set_canvas_size(400.0, 500.0);
        assert_eq!(session.scene().get(1).unwrap().center, DVec2::new(500.0, 200.0));

        // The next drag clamps against the new bounds
        session.handle(PointerEvent::Down {
            button: PointerButton::Primary,
            pos: DVec2::new(150.0, 400.0),
        });
        session.handle(PointerEvent::Move {
            pos: DVec2::new(1000.0, 1000.0),
        });
        assert_eq!(session.scene().light_position(), DVec2::new(370.0, 470.0));
    }

    #[test]
    fn test_window_resize_subtracts_sidebar() {
        let mut session = EditorSession::default();
        session.set_window_size(1250.0, 700.0);
        assert_eq!(session.bounds(), CanvasBounds::new(1000.0, 700.0));
    }

    #[test]
    fn test_window_resize_uses_configured_sidebar() {
        let settings = Settings {
            sidebar_width: 100.0,
            ..Settings::default()
        };
        let mut session = EditorSession::new(&settings).unwrap();
        assert_eq!(session.sidebar_width(), 100.0);

        session.set_window_size(1000.0, 600.0);
        assert_eq!(session.bounds(), CanvasBounds::new(900.0, 600.0));
    }
}
