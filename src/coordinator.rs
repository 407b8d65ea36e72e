//! Mediates pointer input across an ordered set of control points.

use std::sync::mpsc::Sender;

use crate::control_point::{ControlPoint, EditNotice};
use crate::math::{Point2d, Vector2d};
use crate::pointer::PointerState;
use crate::settings::Settings;
use crate::{ControlPointId, ControlPointSet};
use smallvec::SmallVec;

/// An ordered collection of control points, of which at most one is
/// dragged at any time.
///
/// When several points lie under the pointer, the one added first wins.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    /// The control points.
    points: ControlPointSet,
    /// The IDs of the control points, in order.
    order: Vec<ControlPointId>,
}

impl DragCoordinator {
    /// Creates an empty coordinator.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a control point after all existing ones.
    pub fn push(&mut self, pos: Point2d, label: &str, settings: &Settings) -> ControlPointId {
        let id = self
            .points
            .insert_with_key(|id| ControlPoint::new(id, pos, label, settings));
        self.order.push(id);
        id
    }

    /// Removes a control point, keeping the order of the others.
    pub fn remove(&mut self, id: ControlPointId) -> Option<ControlPoint> {
        let point = self.points.remove(id)?;
        self.order.retain(|other| *other != id);
        Some(point)
    }

    /// Gets a control point by ID.
    pub fn get(&self, id: ControlPointId) -> Option<&ControlPoint> {
        self.points.get(id)
    }

    /// Gets a control point by ID for notification or drag handling.
    pub(crate) fn get_mut(&mut self, id: ControlPointId) -> Option<&mut ControlPoint> {
        self.points.get_mut(id)
    }

    /// Iterates over the control points in order.
    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> + '_ {
        self.order.iter().map(|id| &self.points[*id])
    }

    /// A snapshot of the control point positions, in order.
    pub fn positions(&self) -> SmallVec<[Point2d; 8]> {
        self.iter().map(|point| point.pos()).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The point currently being dragged, if any.
    pub fn dragging_point(&self) -> Option<ControlPointId> {
        self.iter().find(|point| point.dragging()).map(|point| point.id())
    }

    /// Starts dragging the first hovered point, in order. Nothing starts
    /// while another point is already being dragged.
    pub fn on_pointer_down(&mut self, pointer: &PointerState) -> Option<ControlPointId> {
        if self.is_dragging() {
            return None;
        }
        for id in &self.order {
            let point = &mut self.points[*id];
            if point.begin_drag_if_hovering(pointer) {
                return Some(*id);
            }
        }
        None
    }

    /// Stops every drag.
    pub fn on_pointer_up(&mut self) {
        for (_, point) in &mut self.points {
            point.end_drag();
        }
    }

    /// Refreshes hover state and then moves the dragged point.
    pub fn update(&mut self, pointer: &PointerState, viewport: Vector2d) {
        for id in &self.order {
            let point = &mut self.points[*id];
            point.update_hover(pointer);
            point.update_position(pointer, viewport);
        }
    }

    /// Whether the pointer is over any point.
    pub fn is_hovering(&self) -> bool {
        self.iter().any(|point| point.hovering())
    }

    /// Whether any point is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.iter().any(|point| point.dragging())
    }

    /// Subscribes a channel to edits of every point.
    pub fn subscribe_all(&mut self, subscriber: &Sender<EditNotice>) {
        for (_, point) in &mut self.points {
            point.subscribe(subscriber.clone());
        }
    }
}
