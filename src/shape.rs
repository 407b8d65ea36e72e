//! Drawable shapes and the scene that routes pointer input to them.

use crate::canvas::{with_style, Canvas};
use crate::pointer::{InputMode, PointerState};

pub use bezier::BezierCurve;
pub use triangle::BarycentricTriangle;

mod bezier;
mod triangle;

/// Something that can be drawn once per frame.
pub trait Draw {
    /// Updates per-frame state and draws to the canvas.
    fn draw(&mut self, canvas: &mut dyn Canvas);
}

/// A drawable that also reacts to pointer input.
pub trait Interactive: Draw {
    /// A pointer was pressed. Returns whether a drag started.
    fn on_pointer_down(&mut self, pointer: &PointerState) -> bool;

    /// The pointer was released.
    fn on_pointer_up(&mut self);

    /// The pointer moved.
    fn on_pointer_move(&mut self, pointer: &PointerState);

    /// Whether the pointer is over a draggable part of the shape.
    fn hovering(&self) -> bool;

    /// Whether part of the shape is being dragged.
    fn dragging(&self) -> bool;
}

/// An item in a [Scene].
pub enum SceneItem {
    /// Receives pointer input and is drawn.
    Interactive(Box<dyn Interactive>),
    /// Is only drawn.
    Static(Box<dyn Draw>),
}

/// The cursor a host should show for the current pointer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
}

/// An ordered set of shapes sharing one pointer.
///
/// At most one shape is dragged at a time; a press goes to the first shape,
/// in order, that starts a drag.
#[derive(Default)]
pub struct Scene {
    items: Vec<SceneItem>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds an interactive shape, returning its index.
    pub fn add_interactive(&mut self, shape: impl Interactive + 'static) -> usize {
        self.items.push(SceneItem::Interactive(Box::new(shape)));
        self.items.len() - 1
    }

    /// Adds a shape that is drawn but ignores input, returning its index.
    pub fn add_static(&mut self, shape: impl Draw + 'static) -> usize {
        self.items.push(SceneItem::Static(Box::new(shape)));
        self.items.len() - 1
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    fn interactive(&self) -> impl Iterator<Item = &(dyn Interactive + 'static)> + '_ {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Interactive(shape) => Some(&**shape),
            SceneItem::Static(_) => None,
        })
    }

    fn interactive_mut(&mut self) -> impl Iterator<Item = &mut (dyn Interactive + 'static)> + '_ {
        self.items.iter_mut().filter_map(|item| match item {
            SceneItem::Interactive(shape) => Some(&mut **shape),
            SceneItem::Static(_) => None,
        })
    }

    /// Delivers a press. A touch press without any active touch is ignored.
    ///
    /// Returns whether a drag started.
    pub fn pointer_pressed(&mut self, pointer: &PointerState) -> bool {
        if pointer.mode() == InputMode::Touch && pointer.touches().is_empty() {
            log::warn!("Touch started without any active touches");
            return false;
        }
        if self.dragging() {
            return false;
        }
        self.interactive_mut()
            .any(|shape| shape.on_pointer_down(pointer))
    }

    /// Delivers a release to every interactive shape.
    pub fn pointer_released(&mut self) {
        for shape in self.interactive_mut() {
            shape.on_pointer_up();
        }
    }

    /// Delivers a move to every interactive shape.
    pub fn pointer_moved(&mut self, pointer: &PointerState) {
        for shape in self.interactive_mut() {
            shape.on_pointer_move(pointer);
        }
    }

    /// Draws every item, in order.
    pub fn frame(&mut self, canvas: &mut dyn Canvas) {
        for item in &mut self.items {
            with_style(canvas, |canvas| match item {
                SceneItem::Interactive(shape) => shape.draw(canvas),
                SceneItem::Static(shape) => shape.draw(canvas),
            });
        }
    }

    pub fn hovering(&self) -> bool {
        self.interactive().any(|shape| shape.hovering())
    }

    pub fn dragging(&self) -> bool {
        self.interactive().any(|shape| shape.dragging())
    }

    /// The cursor to show: grabbing while dragging, grab while hovering.
    pub fn cursor(&self) -> Cursor {
        if self.dragging() {
            Cursor::Grabbing
        } else if self.hovering() {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }
}

/// A fixed line of text, such as a title or instructions.
#[derive(Clone, Debug)]
pub struct Caption {
    pub text: String,
    pub at: crate::math::Point2d,
    pub color: crate::canvas::Color,
}

impl Draw for Caption {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.set_stroke(None, 0.0);
        canvas.set_fill(Some(self.color));
        canvas.text(&self.text, self.at);
    }
}
