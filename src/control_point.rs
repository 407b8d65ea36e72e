//! A single draggable control point.

use std::sync::mpsc::Sender;

use crate::canvas::{with_style, Canvas};
use crate::math::{clamp_to_viewport, Point2d, Vector2d};
use crate::pointer::{InputMode, PointerState, TouchId};
use crate::settings::Settings;
use crate::ControlPointId;
use cgmath::prelude::*;

/// A control point that can be hovered and dragged with the mouse or a touch.
#[derive(Debug)]
pub struct ControlPoint {
    /// The point ID.
    id: ControlPointId,
    /// The current position. Only written by [ControlPoint::update_position].
    pos: Point2d,
    /// The label drawn next to the point.
    label: String,
    /// The radius when idle.
    base_radius: f64,
    /// The radius when hovered or dragged by the mouse.
    active_radius: f64,
    /// The radius when dragged by a touch.
    touch_radius: f64,
    /// The distance within which a touch hits the point.
    touch_tolerance: f64,
    /// Whether the pointer was over the point when last checked.
    hovering: bool,
    /// Whether the point is being dragged.
    dragging: bool,
    /// The touch which started the drag, if any.
    bound_touch: Option<TouchId>,
    /// Channels notified when the point is edited.
    subscribers: Vec<Sender<EditNotice>>,
}

/// How a control point is displayed, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointVisual {
    /// Being dragged by a touch.
    TouchDragging,
    /// Hovered or dragged by the mouse.
    Active,
    Idle,
}

/// Sent to the subscribers of a control point when it asks to be edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditNotice {
    pub point: ControlPointId,
}

impl ControlPoint {
    /// Creates a new control point.
    pub(crate) fn new(id: ControlPointId, pos: Point2d, label: &str, settings: &Settings) -> Self {
        Self {
            id,
            pos,
            label: label.to_owned(),
            base_radius: settings.point_radius,
            active_radius: settings.active_radius,
            touch_radius: settings.touch_radius,
            touch_tolerance: settings.touch_tolerance,
            hovering: false,
            dragging: false,
            bound_touch: None,
            subscribers: vec![],
        }
    }

    pub fn id(&self) -> ControlPointId {
        self.id
    }

    /// The current position.
    pub fn pos(&self) -> Point2d {
        self.pos
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// The touch bound to the current drag, if it was started by a touch.
    pub fn bound_touch(&self) -> Option<TouchId> {
        self.bound_touch
    }

    /// The display state of the point.
    pub fn visual(&self) -> PointVisual {
        if self.dragging && self.bound_touch.is_some() {
            PointVisual::TouchDragging
        } else if self.hovering || self.dragging {
            PointVisual::Active
        } else {
            PointVisual::Idle
        }
    }

    /// The currently displayed radius.
    pub fn radius(&self) -> f64 {
        match self.visual() {
            PointVisual::TouchDragging => self.touch_radius,
            PointVisual::Active => self.active_radius,
            PointVisual::Idle => self.base_radius,
        }
    }

    /// Checks whether the pointer is over the point.
    ///
    /// A mouse hits within the displayed radius, a touch within the touch
    /// tolerance. Both bounds are inclusive.
    pub fn hit_test(&self, pointer: &PointerState) -> bool {
        self.hitting_touch(pointer).is_some()
    }

    /// Finds what is hitting the point: `Some(None)` for the mouse,
    /// `Some(Some(id))` for a touch.
    fn hitting_touch(&self, pointer: &PointerState) -> Option<Option<TouchId>> {
        match pointer.mode() {
            InputMode::Mouse => {
                let dist = self.pos.distance(pointer.signal().pos);
                (dist <= self.radius()).then_some(None)
            }
            InputMode::Touch => pointer
                .touches()
                .iter()
                .find(|touch| self.pos.distance(touch.pos) <= self.touch_tolerance)
                .map(|touch| Some(touch.id)),
        }
    }

    /// Recomputes whether the pointer is hovering over the point.
    pub fn update_hover(&mut self, pointer: &PointerState) {
        self.hovering = self.hit_test(pointer);
    }

    /// Starts dragging the point if the pointer is hovering over it.
    /// A drag started by a touch is bound to that touch.
    ///
    /// Returns whether the point is now being dragged.
    pub fn begin_drag_if_hovering(&mut self, pointer: &PointerState) -> bool {
        if !self.hovering {
            return false;
        }
        self.dragging = true;
        self.bound_touch = match pointer.mode() {
            InputMode::Mouse => None,
            InputMode::Touch => self
                .hitting_touch(pointer)
                .flatten()
                .or_else(|| pointer.signal().touch_id),
        };
        log::debug!("Started dragging {} ({:?})", self.label, self.bound_touch);
        true
    }

    /// Stops dragging the point.
    pub fn end_drag(&mut self) {
        if self.dragging {
            log::debug!("Stopped dragging {}", self.label);
        }
        self.dragging = false;
        self.bound_touch = None;
    }

    /// Moves a dragged point to the pointer, clamped into the viewport.
    pub fn update_position(&mut self, pointer: &PointerState, viewport: Vector2d) {
        if !self.dragging {
            return;
        }
        let target = match self.bound_touch {
            Some(id) => match pointer.touch_by_id(id) {
                Some(touch) => touch.pos,
                None => {
                    log::warn!("Touch {:?} bound to {} is no longer active", id, self.label);
                    self.pos
                }
            },
            None => pointer.signal().pos,
        };
        self.pos = clamp_to_viewport(target, viewport);
    }

    /// Registers a channel to be notified when the point is edited.
    pub fn subscribe(&mut self, subscriber: Sender<EditNotice>) {
        self.subscribers.push(subscriber);
    }

    /// Notifies every subscriber that the point was edited.
    /// Subscribers which have gone away are forgotten.
    pub fn notify_edit(&mut self) {
        let notice = EditNotice { point: self.id };
        let label = &self.label;
        self.subscribers.retain(|subscriber| {
            let alive = subscriber.send(notice).is_ok();
            if !alive {
                log::warn!("Dropping disconnected edit subscriber of {}", label);
            }
            alive
        });
    }

    /// Draws the point and its label.
    pub fn draw(&self, canvas: &mut dyn Canvas, settings: &Settings, edit_mode: bool) {
        let color = match self.visual() {
            PointVisual::TouchDragging => settings.touch_color,
            PointVisual::Active => settings.hover_color,
            PointVisual::Idle if edit_mode => settings.edit_color,
            PointVisual::Idle => settings.idle_color,
        };
        let radius = self.radius();
        with_style(canvas, |canvas| {
            canvas.set_stroke(None, 0.0);
            canvas.set_fill(Some(color));
            canvas.circle(self.pos, 2.0 * radius);
            canvas.set_fill(Some(settings.text_color));
            canvas.text(&self.label, self.pos + Vector2d::new(radius, -radius));
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pointer::Touch;
    use slotmap::SlotMap;
    use std::sync::mpsc::channel;

    fn point_at(pos: Point2d) -> ControlPoint {
        let mut ids = SlotMap::<ControlPointId, ()>::with_key();
        ControlPoint::new(ids.insert(()), pos, "P0", &Settings::default())
    }

    fn mouse(x: f64, y: f64) -> PointerState {
        PointerState::mouse(Point2d::new(x, y), true)
    }

    #[test]
    fn mouse_hit_boundary_is_inclusive() {
        let point = point_at(Point2d::new(100.0, 100.0));
        assert!(point.hit_test(&mouse(108.0, 100.0)));
        assert!(!point.hit_test(&mouse(108.01, 100.0)));
    }

    #[test]
    fn hit_radius_grows_while_hovered() {
        let mut point = point_at(Point2d::new(100.0, 100.0));
        let near = mouse(111.0, 100.0);
        assert!(!point.hit_test(&near));
        point.update_hover(&mouse(100.0, 100.0));
        assert_eq!(point.radius(), 12.0);
        assert!(point.hit_test(&near));
        assert!(point.hit_test(&mouse(112.0, 100.0)));
    }

    #[test]
    fn touch_uses_tolerance() {
        let point = point_at(Point2d::new(100.0, 100.0));
        let touch = |x| PointerState::touch([Touch::new(1, Point2d::new(x, 100.0))]);
        assert!(point.hit_test(&touch(130.0)));
        assert!(!point.hit_test(&touch(130.5)));
        assert!(!point.hit_test(&PointerState::touch([])));
    }

    #[test]
    fn drag_requires_hover() {
        let mut point = point_at(Point2d::new(100.0, 100.0));
        let pointer = mouse(100.0, 100.0);
        assert!(!point.begin_drag_if_hovering(&pointer));
        assert!(!point.dragging());
        point.update_hover(&pointer);
        assert!(point.begin_drag_if_hovering(&pointer));
        assert!(point.dragging());
        point.end_drag();
        point.end_drag();
        assert!(!point.dragging());
    }

    #[test]
    fn drag_is_clamped_to_viewport() {
        let mut point = point_at(Point2d::new(100.0, 50.0));
        let start = mouse(100.0, 50.0);
        point.update_hover(&start);
        point.begin_drag_if_hovering(&start);
        point.update_position(&mouse(700.0, 50.0), Vector2d::new(600.0, 450.0));
        assert_eq!(point.pos(), Point2d::new(600.0, 50.0));
    }

    #[test]
    fn idle_point_does_not_move() {
        let mut point = point_at(Point2d::new(100.0, 50.0));
        point.update_position(&mouse(300.0, 300.0), Vector2d::new(600.0, 450.0));
        assert_eq!(point.pos(), Point2d::new(100.0, 50.0));
    }

    #[test]
    fn touch_drag_follows_bound_touch() {
        let viewport = Vector2d::new(600.0, 450.0);
        let mut point = point_at(Point2d::new(100.0, 100.0));
        let start = PointerState::touch([
            Touch::new(1, Point2d::new(400.0, 400.0)),
            Touch::new(2, Point2d::new(105.0, 100.0)),
        ]);
        point.update_hover(&start);
        assert!(point.begin_drag_if_hovering(&start));
        assert_eq!(point.bound_touch(), Some(TouchId(2)));
        assert_eq!(point.visual(), PointVisual::TouchDragging);
        assert_eq!(point.radius(), 18.0);

        let moved = PointerState::touch([
            Touch::new(1, Point2d::new(10.0, 10.0)),
            Touch::new(2, Point2d::new(200.0, 150.0)),
        ]);
        point.update_position(&moved, viewport);
        assert_eq!(point.pos(), Point2d::new(200.0, 150.0));

        // The bound touch went away: keep the last known position
        let dangling = PointerState::touch([Touch::new(1, Point2d::new(10.0, 10.0))]);
        point.update_position(&dangling, viewport);
        assert_eq!(point.pos(), Point2d::new(200.0, 150.0));
        assert!(point.dragging());

        point.end_drag();
        assert_eq!(point.bound_touch(), None);
    }

    #[test]
    fn notifies_live_subscribers() {
        let mut point = point_at(Point2d::new(0.0, 0.0));
        let (tx, rx) = channel();
        let (dead_tx, dead_rx) = channel();
        point.subscribe(tx);
        point.subscribe(dead_tx);
        drop(dead_rx);
        point.notify_edit();
        assert_eq!(rx.try_recv(), Ok(EditNotice { point: point.id() }));
        assert_eq!(point.subscribers.len(), 1);
    }
}
