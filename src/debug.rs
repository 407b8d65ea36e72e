//! A canvas that records draw calls instead of rasterising them.

use crate::canvas::{Canvas, Color};
use crate::math::Point2d;
use crate::pointer::Touch;
#[cfg(feature = "debug")]
use serde_json::json;

/// A recorded drawing primitive together with the style it was drawn in.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Circle { centre: Point2d, diameter: f64, style: Style },
    Line { from: Point2d, to: Point2d, style: Style },
    Polyline { points: Vec<Point2d>, style: Style },
    Polygon { points: Vec<Point2d>, style: Style },
    Text { text: String, at: Point2d, style: Style },
}

/// The fill and stroke in effect for a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_weight: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: Some(Color::BLACK),
            stroke_weight: 1.0,
        }
    }
}

/// A headless [Canvas] with scripted input, used in tests and the demo.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    width: f64,
    height: f64,
    mouse: Point2d,
    mouse_pressed: bool,
    touches: Vec<Touch>,
    style: Style,
    saved: Vec<Style>,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Creates a canvas of the given size with the mouse at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            mouse: Point2d::new(0.0, 0.0),
            mouse_pressed: false,
            touches: vec![],
            style: Style::default(),
            saved: vec![],
            commands: vec![],
        }
    }

    /// Moves the mouse and sets its button state.
    pub fn set_mouse(&mut self, pos: Point2d, pressed: bool) {
        self.mouse = pos;
        self.mouse_pressed = pressed;
    }

    /// Replaces the active touches.
    pub fn set_touches(&mut self, touches: impl IntoIterator<Item = Touch>) {
        self.touches = touches.into_iter().collect();
    }

    /// The commands recorded since the last call to `take_frame`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The number of styles saved and not yet restored.
    pub fn style_depth(&self) -> usize {
        self.saved.len()
    }

    /// Takes the recorded commands, starting a new frame.
    pub fn take_frame(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Takes the recorded commands as JSON.
    #[cfg(feature = "debug")]
    pub fn take_frame_json(&mut self) -> serde_json::Value {
        let commands = self.take_frame();
        json!(commands.iter().map(DrawCommand::to_json).collect::<Vec<_>>())
    }
}

#[cfg(feature = "debug")]
impl DrawCommand {
    fn to_json(&self) -> serde_json::Value {
        let point = |p: &Point2d| json!([p.x, p.y]);
        match self {
            DrawCommand::Circle { centre, diameter, style } => json!({
                "type": "circle",
                "centre": point(centre),
                "diameter": diameter,
                "fill": style.fill,
            }),
            DrawCommand::Line { from, to, style } => json!({
                "type": "line",
                "p1": point(from),
                "p2": point(to),
                "stroke": style.stroke,
            }),
            DrawCommand::Polyline { points, style } => json!({
                "type": "polyline",
                "points": points.iter().map(point).collect::<Vec<_>>(),
                "stroke": style.stroke,
            }),
            DrawCommand::Polygon { points, style } => json!({
                "type": "polygon",
                "points": points.iter().map(point).collect::<Vec<_>>(),
                "fill": style.fill,
            }),
            DrawCommand::Text { text, at, .. } => json!({
                "type": "text",
                "text": text,
                "at": point(at),
            }),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn mouse_position(&self) -> Point2d {
        self.mouse
    }

    fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    fn touches(&self) -> &[Touch] {
        &self.touches
    }

    fn push_style(&mut self) {
        self.saved.push(self.style);
    }

    fn pop_style(&mut self) {
        match self.saved.pop() {
            Some(style) => self.style = style,
            None => log::warn!("pop_style called without a matching push_style"),
        }
    }

    fn set_fill(&mut self, color: Option<Color>) {
        self.style.fill = color;
    }

    fn set_stroke(&mut self, color: Option<Color>, weight: f64) {
        self.style.stroke = color;
        self.style.stroke_weight = weight;
    }

    fn circle(&mut self, centre: Point2d, diameter: f64) {
        let style = self.style;
        self.commands.push(DrawCommand::Circle { centre, diameter, style });
    }

    fn line(&mut self, from: Point2d, to: Point2d) {
        let style = self.style;
        self.commands.push(DrawCommand::Line { from, to, style });
    }

    fn polyline(&mut self, points: &[Point2d]) {
        let style = self.style;
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), style });
    }

    fn polygon(&mut self, points: &[Point2d]) {
        let style = self.style;
        self.commands.push(DrawCommand::Polygon { points: points.to_vec(), style });
    }

    fn text(&mut self, text: &str, at: Point2d) {
        let style = self.style;
        self.commands.push(DrawCommand::Text { text: text.to_owned(), at, style });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::canvas::with_style;

    #[test]
    fn styles_are_scoped() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        with_style(&mut canvas, |canvas| {
            canvas.set_fill(Some(Color::rgb(1, 2, 3)));
            canvas.circle(Point2d::new(1.0, 1.0), 2.0);
        });
        canvas.circle(Point2d::new(1.0, 1.0), 2.0);
        assert_eq!(canvas.style_depth(), 0);

        let frame = canvas.take_frame();
        let fills: Vec<_> = frame
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Circle { style, .. } => style.fill,
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![Some(Color::rgb(1, 2, 3)), Some(Color::WHITE)]);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn unbalanced_pop_is_harmless() {
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        canvas.pop_style();
        assert_eq!(canvas.style_depth(), 0);
    }
}
