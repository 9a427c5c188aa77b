//! Headless demo driver
//!
//! Plays seeded pointer gestures against a session, the way a user would:
//! place circles, drag things around, resize the selection, delete. Same
//! seed, same gestures, same scene.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{EditEvent, EditorSession, PointerButton, PointerEvent};

/// Moves generated per drag gesture
const DRAG_STEPS: u32 = 6;

/// Kinds of scripted gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click,
    DragShape,
    DragLight,
    Resize,
    Delete,
}

/// Seeded gesture generator
#[derive(Debug, Clone)]
pub struct DemoScript {
    rng: Pcg32,
}

impl DemoScript {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn random_point(&mut self, session: &EditorSession) -> DVec2 {
        let bounds = session.bounds();
        DVec2::new(
            self.rng.random_range(0.0..bounds.width.max(1.0)),
            self.rng.random_range(0.0..bounds.height.max(1.0)),
        )
    }

    fn pick_gesture(&mut self) -> Gesture {
        match self.rng.random_range(0..10u32) {
            0..=3 => Gesture::Click,
            4..=5 => Gesture::DragShape,
            6 => Gesture::DragLight,
            7..=8 => Gesture::Resize,
            _ => Gesture::Delete,
        }
    }

    /// Pointer events for the next gesture, given the current session
    pub fn next_gesture(&mut self, session: &EditorSession) -> (Gesture, Vec<PointerEvent>) {
        let gesture = self.pick_gesture();
        let scene = session.scene();
        let primary_up = PointerEvent::Up {
            button: PointerButton::Primary,
        };

        let events = match gesture {
            Gesture::Click => {
                let pos = self.random_point(session);
                vec![
                    PointerEvent::Down {
                        button: PointerButton::Primary,
                        pos,
                    },
                    primary_up,
                ]
            }
            Gesture::DragShape | Gesture::DragLight => {
                let start = if gesture == Gesture::DragLight {
                    scene.light_position()
                } else {
                    let obstacles: Vec<DVec2> = scene.obstacles().map(|(_, s)| s.center).collect();
                    if obstacles.is_empty() {
                        self.random_point(session)
                    } else {
                        obstacles[self.rng.random_range(0..obstacles.len())]
                    }
                };
                let target = self.random_point(session);
                let mut events = vec![PointerEvent::Down {
                    button: PointerButton::Primary,
                    pos: start,
                }];
                events.extend((1..=DRAG_STEPS).map(|step| PointerEvent::Move {
                    pos: start.lerp(target, step as f64 / DRAG_STEPS as f64),
                }));
                events.push(primary_up);
                events
            }
            Gesture::Resize => match scene.selected_shape() {
                Some(shape) => {
                    let handle = shape.handle_position();
                    let grow = self.rng.random_range(-40.0..60.0);
                    vec![
                        PointerEvent::Down {
                            button: PointerButton::Primary,
                            pos: handle,
                        },
                        PointerEvent::Move {
                            pos: handle + DVec2::new(grow, 0.0),
                        },
                        primary_up,
                    ]
                }
                None => Vec::new(),
            },
            Gesture::Delete => {
                let pos = self.random_point(session);
                vec![PointerEvent::Down {
                    button: PointerButton::Secondary,
                    pos,
                }]
            }
        };

        (gesture, events)
    }

    /// Run `steps` gestures, returning every edit the session reported
    pub fn run(&mut self, session: &mut EditorSession, steps: u32) -> Vec<EditEvent> {
        let mut edits = Vec::new();
        for step in 0..steps {
            let (gesture, events) = self.next_gesture(session);
            for event in events {
                edits.extend(session.handle(event));
            }
            let frame = session.frame();
            log::debug!(
                "Step {step}: {gesture:?} -> {} shape(s), {} ray hit(s)",
                frame.shapes.len(),
                frame.hit_count()
            );
        }
        edits
    }
}
