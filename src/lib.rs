//! Interactive Bézier curve and barycentric triangle visualizations.
//!
//! Shapes own a set of draggable control points and are drawn once per
//! frame onto a [Canvas]. Within a frame, pointer events are delivered
//! first, then hover state is refreshed, then the curve parameter advances,
//! and finally everything is evaluated and drawn.

pub use animation::{AnimationController, ParameterChange, Playback, SPEED_LADDER};
pub use canvas::{Canvas, Color};
pub use cgmath;
pub use control_point::{ControlPoint, EditNotice, PointVisual};
pub use coordinator::DragCoordinator;
pub use error::Error;
pub use pointer::{InputMode, PointerSignal, PointerState, Touch, TouchId};
pub use settings::Settings;
pub use shape::{BarycentricTriangle, BezierCurve, Caption, Cursor, Draw, Interactive, Scene, SceneItem};
use slotmap::{new_key_type, SlotMap};
pub use slotmap::{Key, KeyData};
pub use util::Interval;

pub mod animation;
pub mod canvas;
mod control_point;
mod coordinator;
pub mod debug;
mod error;
pub mod math;
mod pointer;
mod settings;
mod shape;
mod util;

new_key_type! {
    /// Unique ID of a [ControlPoint].
    pub struct ControlPointId;
}

type ControlPointSet = SlotMap<ControlPointId, ControlPoint>;
