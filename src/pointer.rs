//! Unifies mouse and touch input into a single per-frame pointer signal.

use crate::canvas::Canvas;
use crate::math::Point2d;
use smallvec::SmallVec;

/// A stable identifier of a touch point, valid for the lifetime of the touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchId(pub u64);

/// An active touch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touch {
    pub id: TouchId,
    pub pos: Point2d,
}

impl Touch {
    pub fn new(id: u64, pos: Point2d) -> Self {
        Self { id: TouchId(id), pos }
    }
}

/// Which kind of device is driving the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Mouse,
    Touch,
}

/// The unified pointer position for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSignal {
    /// The pointer position.
    pub pos: Point2d,
    /// The touch driving the pointer, if any.
    pub touch_id: Option<TouchId>,
    /// Whether the pointer is pressed.
    pub active: bool,
}

/// A snapshot of the pointer and touch input for one frame.
///
/// A new snapshot is taken every frame; nothing is carried over between
/// frames.
#[derive(Clone, Debug)]
pub struct PointerState {
    mode: InputMode,
    mouse: Point2d,
    pressed: bool,
    touches: SmallVec<[Touch; 4]>,
}

impl PointerState {
    /// Creates a snapshot of mouse input.
    pub fn mouse(pos: Point2d, pressed: bool) -> Self {
        Self {
            mode: InputMode::Mouse,
            mouse: pos,
            pressed,
            touches: SmallVec::new(),
        }
    }

    /// Creates a snapshot of touch input. The pointer is active while at
    /// least one touch is present.
    pub fn touch(touches: impl IntoIterator<Item = Touch>) -> Self {
        let touches: SmallVec<[Touch; 4]> = touches.into_iter().collect();
        Self {
            mode: InputMode::Touch,
            mouse: touches.first().map_or(Point2d::new(0.0, 0.0), |t| t.pos),
            pressed: !touches.is_empty(),
            touches,
        }
    }

    /// Reads the current input from a canvas. Touch input takes precedence
    /// whenever touches are present.
    pub fn capture(canvas: &(impl Canvas + ?Sized)) -> Self {
        let touches = canvas.touches();
        if touches.is_empty() {
            Self::mouse(canvas.mouse_position(), canvas.mouse_pressed())
        } else {
            Self::touch(touches.iter().copied())
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// The active touch points. Always empty in mouse mode.
    pub fn touches(&self) -> &[Touch] {
        &self.touches
    }

    /// Finds an active touch by its identifier.
    pub fn touch_by_id(&self, id: TouchId) -> Option<&Touch> {
        self.touches.iter().find(|touch| touch.id == id)
    }

    /// The unified pointer signal: the first touch in touch mode, otherwise
    /// the mouse.
    pub fn signal(&self) -> PointerSignal {
        match (self.mode, self.touches.first()) {
            (InputMode::Touch, Some(touch)) => PointerSignal {
                pos: touch.pos,
                touch_id: Some(touch.id),
                active: true,
            },
            _ => PointerSignal {
                pos: self.mouse,
                touch_id: None,
                active: self.pressed,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_touch_drives_the_signal() {
        let state = PointerState::touch([
            Touch::new(7, Point2d::new(10.0, 20.0)),
            Touch::new(9, Point2d::new(30.0, 40.0)),
        ]);
        let signal = state.signal();
        assert_eq!(signal.pos, Point2d::new(10.0, 20.0));
        assert_eq!(signal.touch_id, Some(TouchId(7)));
        assert!(signal.active);
        assert_eq!(state.touch_by_id(TouchId(9)).map(|t| t.pos), Some(Point2d::new(30.0, 40.0)));
        assert!(state.touch_by_id(TouchId(1)).is_none());
    }

    #[test]
    fn empty_touch_list_is_inactive() {
        let state = PointerState::touch([]);
        assert_eq!(state.mode(), InputMode::Touch);
        assert!(!state.signal().active);
        assert_eq!(state.signal().touch_id, None);
    }

    #[test]
    fn mouse_signal() {
        let state = PointerState::mouse(Point2d::new(5.0, 6.0), true);
        assert_eq!(state.mode(), InputMode::Mouse);
        assert!(state.touches().is_empty());
        assert_eq!(
            state.signal(),
            PointerSignal { pos: Point2d::new(5.0, 6.0), touch_id: None, active: true }
        );
    }
}
