//! Scene model: the ordered shape list, the light and the selection
//!
//! Insertion order is z-order. Drawing walks the list front-to-back
//! ([`Scene::draw_order`]); picking walks it back-to-front
//! ([`Scene::pick_order`]) so the shape drawn on top is the one clicked.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Collider, Shape};
use crate::error::EditorError;

/// Ordered shapes with exactly one light among them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SceneData")]
pub struct Scene {
    shapes: Vec<Shape>,
    /// Index of the light shape in `shapes`
    light_index: usize,
    /// Currently edited non-light shape
    selected: Option<usize>,
}

/// Unchecked wire form of [`Scene`]
#[derive(Debug, Deserialize)]
struct SceneData {
    shapes: Vec<Shape>,
    light_index: usize,
    #[serde(default)]
    selected: Option<usize>,
}

impl TryFrom<SceneData> for Scene {
    type Error = EditorError;

    fn try_from(data: SceneData) -> Result<Self, Self::Error> {
        let lights = data.shapes.iter().filter(|s| s.is_light).count();
        if lights != 1 {
            return Err(EditorError::InvalidScene(format!(
                "expected exactly one light, found {lights}"
            )));
        }
        if !data.shapes.get(data.light_index).is_some_and(|s| s.is_light) {
            return Err(EditorError::InvalidScene(format!(
                "light_index {} does not point at the light",
                data.light_index
            )));
        }
        if let Some(shape) = data.shapes.iter().find(|s| !(s.effective_radius() > 0.0)) {
            return Err(EditorError::InvalidScene(format!(
                "radius must be positive, got {}",
                shape.effective_radius()
            )));
        }
        if let Some(sel) = data.selected
            && !data.shapes.get(sel).is_some_and(|s| !s.is_light)
        {
            return Err(EditorError::InvalidScene(format!(
                "selected index {sel} is not an obstacle"
            )));
        }

        Ok(Self {
            shapes: data.shapes,
            light_index: data.light_index,
            selected: data.selected,
        })
    }
}

impl Scene {
    /// Create a scene holding only the light
    pub fn new(light_center: DVec2, light_radius: f64) -> Self {
        Self {
            shapes: vec![Shape::light(light_center, light_radius)],
            light_index: 0,
            selected: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Never true: the light is always present
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Shapes in draw order (first added is drawn first, at the bottom)
    pub fn draw_order(&self) -> impl DoubleEndedIterator<Item = (usize, &Shape)> {
        self.shapes.iter().enumerate()
    }

    /// Shapes in pick order (topmost first)
    pub fn pick_order(&self) -> impl Iterator<Item = (usize, &Shape)> {
        self.draw_order().rev()
    }

    /// Obstacles only, in draw order
    pub fn obstacles(&self) -> impl Iterator<Item = (usize, &Shape)> {
        self.draw_order().filter(|(_, s)| !s.is_light)
    }

    /// Topmost non-light shape containing `point`
    pub fn pick(&self, point: DVec2) -> Option<usize> {
        self.pick_order()
            .find(|(_, s)| !s.is_light && s.contains_point(point))
            .map(|(i, _)| i)
    }

    /// Append an obstacle, returning its index.
    ///
    /// Lights are refused so the scene keeps exactly one.
    pub fn push(&mut self, shape: Shape) -> Option<usize> {
        if shape.is_light {
            log::warn!("Refusing to add a second light to the scene");
            return None;
        }
        self.shapes.push(shape);
        Some(self.shapes.len() - 1)
    }

    /// Remove the obstacle at `index`, keeping the selection consistent.
    ///
    /// Out-of-range indices and the light are refused.
    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() || index == self.light_index {
            return None;
        }

        let removed = self.shapes.remove(index);

        if index < self.light_index {
            self.light_index -= 1;
        }

        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };

        Some(removed)
    }

    // === Light ===

    #[inline]
    pub fn light_index(&self) -> usize {
        self.light_index
    }

    #[inline]
    pub fn light(&self) -> &Shape {
        &self.shapes[self.light_index]
    }

    #[inline]
    pub fn light_position(&self) -> DVec2 {
        self.light().center
    }

    #[inline]
    pub fn light_radius(&self) -> f64 {
        self.light().effective_radius()
    }

    /// Move the light; its shape entry is the single source of truth
    pub fn set_light_position(&mut self, pos: DVec2) {
        self.shapes[self.light_index].center = pos;
    }

    // === Selection ===

    /// Selected index, validated against the current shape list
    pub fn selected(&self) -> Option<usize> {
        self.selected
            .filter(|&i| self.shapes.get(i).is_some_and(|s| !s.is_light))
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected().and_then(|i| self.shapes.get(i))
    }

    /// Select an obstacle. Returns false (and leaves the selection alone)
    /// for the light or an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        match self.shapes.get(index) {
            Some(shape) if !shape.is_light => {
                self.selected = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // === Obstacle edits ===

    /// Move an obstacle's center. The light moves through [`Self::set_light_position`].
    pub fn set_center(&mut self, index: usize, center: DVec2) -> bool {
        match self.shapes.get_mut(index) {
            Some(shape) if !shape.is_light => {
                shape.center = center;
                true
            }
            _ => false,
        }
    }

    /// Change an obstacle's radius
    pub fn set_radius(&mut self, index: usize, radius: f64) -> bool {
        match self.shapes.get_mut(index) {
            Some(shape) if !shape.is_light && radius > 0.0 => {
                shape.size1 = radius;
                true
            }
            _ => false,
        }
    }
}
