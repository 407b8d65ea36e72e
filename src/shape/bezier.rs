use std::sync::mpsc::{channel, Receiver};

use crate::animation::AnimationController;
use crate::canvas::{with_style, Canvas};
use crate::control_point::{ControlPoint, EditNotice};
use crate::coordinator::DragCoordinator;
use crate::error::Error;
use crate::math::{
    evaluate, subdivided_points_along_curve, BezierCurve2d, ParametricCurve2d, Point2d,
    Subdivision, Vector2d,
};
use crate::pointer::PointerState;
use crate::settings::Settings;
use crate::ControlPointId;
use cgmath::prelude::*;

use super::{Draw, Interactive};

/// A Bézier curve with draggable control points, drawn together with every
/// level of its corner-cutting construction at the current parameter.
pub struct BezierCurve {
    /// The control points.
    points: DragCoordinator,
    /// Drives the curve parameter.
    animation: AnimationController,
    /// The scrubber position used while the animation is stopped.
    scrub: f64,
    /// Whether control points are shown as editable.
    edit_mode: bool,
    /// The size of the canvas the points are confined to.
    viewport: Vector2d,
    /// Edit requests from the control points.
    edit_rx: Receiver<EditNotice>,
    settings: Settings,
}

impl BezierCurve {
    /// Creates a curve from its initial control point positions.
    /// The points are labelled `P0`, `P1`, and so on.
    pub fn new(positions: &[Point2d], settings: &Settings) -> Result<Self, Error> {
        if positions.len() < 2 {
            return Err(Error::TooFewControlPoints(positions.len()));
        }
        let mut points = DragCoordinator::new();
        for (i, pos) in positions.iter().enumerate() {
            points.push(*pos, &format!("P{}", i), settings);
        }
        let (edit_tx, edit_rx) = channel();
        points.subscribe_all(&edit_tx);
        Ok(Self {
            points,
            animation: AnimationController::new(settings.base_step),
            scrub: 0.0,
            edit_mode: false,
            viewport: settings.viewport(),
            edit_rx,
            settings: settings.clone(),
        })
    }

    /// The control points, in order.
    pub fn control_points(&self) -> impl Iterator<Item = &ControlPoint> + '_ {
        self.points.iter()
    }

    pub fn coordinator(&self) -> &DragCoordinator {
        &self.points
    }

    /// The degree of the curve.
    pub fn degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    /// Gives access to playback and speed controls.
    pub fn animation_mut(&mut self) -> &mut AnimationController {
        &mut self.animation
    }

    /// The current curve parameter.
    pub fn parameter(&self) -> f64 {
        self.animation.parameter()
    }

    /// The user moved the scrubber. Stops the animation.
    pub fn set_scrub(&mut self, value: f64) {
        self.scrub = value;
        self.animation.scrub(value);
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        log::debug!("Edit mode {}", if self.edit_mode { "on" } else { "off" });
    }

    /// Asks a control point to notify the curve that it was edited. The curve
    /// reacts by removing the point on the next frame.
    pub fn request_removal(&mut self, id: ControlPointId) {
        match self.points.get_mut(id) {
            Some(point) => point.notify_edit(),
            None => log::warn!("No control point {:?} to remove", id),
        }
    }

    /// Removes every control point that asked to be edited, as long as at
    /// least two points remain.
    pub fn process_edits(&mut self) {
        while let Ok(EditNotice { point }) = self.edit_rx.try_recv() {
            if self.points.len() <= 2 {
                log::warn!("Refusing to remove {:?}: a curve needs two control points", point);
                continue;
            }
            if let Some(removed) = self.points.remove(point) {
                log::debug!("Removed control point {}", removed.label());
            }
        }
    }

    /// The curve evaluated at the current parameter.
    pub fn evaluated_point(&self) -> Option<Point2d> {
        evaluate(&self.points.positions(), self.parameter())
    }

    fn draw_curve(&self, canvas: &mut dyn Canvas, curve: &BezierCurve2d) {
        let settings = &self.settings;
        let path = subdivided_points_along_curve(curve, settings.segment_length);
        with_style(canvas, |canvas| {
            canvas.set_fill(None);
            canvas.set_stroke(Some(settings.curve_color), 3.0);
            canvas.polyline(&path);
        });
    }

    fn draw_construction(&self, canvas: &mut dyn Canvas, curve: &BezierCurve2d, t: f64) {
        let settings = &self.settings;
        for (depth, level) in Subdivision::new(curve.points().iter().copied(), t).enumerate() {
            let color = settings.level_color(depth);
            with_style(canvas, |canvas| {
                canvas.set_fill(None);
                canvas.set_stroke(Some(color), 1.5);
                for pair in level.windows(2) {
                    canvas.line(pair[0], pair[1]);
                }
                // The first level holds the control points, which draw themselves
                if depth > 0 {
                    canvas.set_stroke(None, 0.0);
                    canvas.set_fill(Some(color));
                    for p in &level {
                        canvas.circle(*p, settings.point_radius);
                    }
                }
            });
        }
    }

    fn draw_tangent(&self, canvas: &mut dyn Canvas, curve: &BezierCurve2d, t: f64) {
        let length = self.settings.tangent_length;
        let tangent = curve.sample_dt(t);
        if length <= 0.0 || tangent.magnitude2() == 0.0 {
            return;
        }
        let p = curve.sample(t);
        let half = tangent.normalize_to(0.5 * length);
        with_style(canvas, |canvas| {
            canvas.set_stroke(Some(self.settings.curve_color.with_alpha(120)), 1.0);
            canvas.line(p - half, p + half);
        });
    }

    fn draw_info(&self, canvas: &mut dyn Canvas) {
        let info = format!(
            "t = {}  speed {}{}  degree {}",
            crate::animation::format_parameter(self.parameter()),
            self.animation.speed_label(),
            if self.animation.is_running() { "" } else { " (paused)" },
            self.degree(),
        );
        with_style(canvas, |canvas| {
            canvas.set_stroke(None, 0.0);
            canvas.set_fill(Some(self.settings.text_color));
            canvas.text(&info, Point2d::new(10.0, 20.0));
        });
    }
}

impl Draw for BezierCurve {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.process_edits();
        self.viewport = Vector2d::new(canvas.width(), canvas.height());
        let pointer = PointerState::capture(&*canvas);
        self.points.update(&pointer, self.viewport);
        self.animation.tick(self.scrub);

        let t = self.parameter();
        let curve = BezierCurve2d::new(self.points.positions());
        self.draw_curve(canvas, &curve);
        self.draw_construction(canvas, &curve, t);
        self.draw_tangent(canvas, &curve, t);

        if let Some(p) = evaluate(curve.points(), t) {
            with_style(canvas, |canvas| {
                canvas.set_stroke(Some(self.settings.curve_color), 2.0);
                canvas.set_fill(Some(self.settings.touch_color));
                canvas.circle(p, 1.5 * self.settings.point_radius);
            });
        }
        for point in self.points.iter() {
            point.draw(canvas, &self.settings, self.edit_mode);
        }
        self.draw_info(canvas);
    }
}

impl Interactive for BezierCurve {
    fn on_pointer_down(&mut self, pointer: &PointerState) -> bool {
        self.points.update(pointer, self.viewport);
        self.points.on_pointer_down(pointer).is_some()
    }

    fn on_pointer_up(&mut self) {
        self.points.on_pointer_up();
    }

    fn on_pointer_move(&mut self, pointer: &PointerState) {
        self.points.update(pointer, self.viewport);
    }

    fn hovering(&self) -> bool {
        self.points.is_hovering()
    }

    fn dragging(&self) -> bool {
        self.points.is_dragging()
    }
}
