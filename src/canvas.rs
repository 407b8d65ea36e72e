//! The drawing and input capability consumed from the rendering backend.

use crate::math::Point2d;
use crate::pointer::Touch;

/// An RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Creates an opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a colour with the given opacity.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this colour with a different opacity.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// A 2D drawing surface that also reports the pointer and touch input over it.
///
/// Style changes (`set_fill`, `set_stroke`) apply to every following
/// primitive until the enclosing `pop_style`.
pub trait Canvas {
    /// The width of the drawable area.
    fn width(&self) -> f64;

    /// The height of the drawable area.
    fn height(&self) -> f64;

    /// The current mouse position in canvas coordinates.
    fn mouse_position(&self) -> Point2d;

    /// Whether a mouse button is currently held down.
    fn mouse_pressed(&self) -> bool;

    /// The currently active touch points, each with a stable identifier.
    fn touches(&self) -> &[Touch];

    /// Saves the current drawing style.
    fn push_style(&mut self);

    /// Restores the most recently saved drawing style.
    fn pop_style(&mut self);

    /// Sets the fill colour, or disables filling.
    fn set_fill(&mut self, color: Option<Color>);

    /// Sets the stroke colour and weight, or disables stroking.
    fn set_stroke(&mut self, color: Option<Color>, weight: f64);

    fn circle(&mut self, centre: Point2d, diameter: f64);

    fn line(&mut self, from: Point2d, to: Point2d);

    /// Draws an open path through the points.
    fn polyline(&mut self, points: &[Point2d]);

    /// Draws a closed, filled polygon.
    fn polygon(&mut self, points: &[Point2d]);

    fn text(&mut self, text: &str, at: Point2d);
}

/// Runs `f` with a saved drawing style, restoring it afterwards.
pub fn with_style<C, R>(canvas: &mut C, f: impl FnOnce(&mut C) -> R) -> R
where
    C: Canvas + ?Sized,
{
    canvas.push_style();
    let result = f(canvas);
    canvas.pop_style();
    result
}
