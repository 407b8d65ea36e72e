//! Drives the curve parameter over time.

use crate::util::Interval;

/// The speed multipliers selectable for playback, slowest to fastest.
pub const SPEED_LADDER: [f64; 14] = [
    -4.0, -2.0, -1.5, -1.0, -0.5, -0.25, -0.125, 0.125, 0.25, 0.5, 1.0, 1.5, 2.0, 4.0,
];

/// The index of the neutral multiplier `1` in [SPEED_LADDER].
pub const DEFAULT_SPEED_INDEX: usize = 10;

/// The domain of the curve parameter.
const PARAMETER_DOMAIN: Interval<f64> = Interval::new(0.0, 1.0);

/// Whether the parameter is being animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Stopped,
    Running,
}

/// Emitted after the parameter changes, so that displays can be updated.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterChange {
    /// The new parameter value.
    pub t: f64,
    /// The parameter formatted for display.
    pub label: String,
}

/// Brings a parameter back into `[0, 1]` by resetting it to the opposite end.
///
/// This is a reset, not a modulo: `1.3` becomes `0` and `-0.2` becomes `1`.
pub fn wrap_parameter(t: f64) -> f64 {
    if PARAMETER_DOMAIN.contains(t) {
        t
    } else if t > PARAMETER_DOMAIN.max {
        PARAMETER_DOMAIN.min
    } else {
        PARAMETER_DOMAIN.max
    }
}

/// Formats a parameter value with two decimal places.
pub fn format_parameter(t: f64) -> String {
    format!("{:.2}", t)
}

/// Animates the curve parameter `t` at a selectable speed, or follows a
/// manual scrub position while stopped.
#[derive(Clone, Debug)]
pub struct AnimationController {
    /// The current parameter value.
    t: f64,
    /// Whether the animation is running.
    playback: Playback,
    /// The index into [SPEED_LADDER].
    speed_index: usize,
    /// The parameter advance per frame at a multiplier of 1.
    base_step: f64,
    /// Whether `t` changed since the last call to `take_change`.
    changed: bool,
}

impl AnimationController {
    /// Creates a stopped controller at `t = 0` and neutral speed.
    pub fn new(base_step: f64) -> Self {
        Self {
            t: 0.0,
            playback: Playback::Stopped,
            speed_index: DEFAULT_SPEED_INDEX,
            base_step,
            changed: true,
        }
    }

    /// The current parameter value.
    pub fn parameter(&self) -> f64 {
        self.t
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_running(&self) -> bool {
        self.playback == Playback::Running
    }

    pub fn speed_index(&self) -> usize {
        self.speed_index
    }

    /// The current speed multiplier.
    pub fn multiplier(&self) -> f64 {
        SPEED_LADDER[self.speed_index]
    }

    /// The speed multiplier formatted for display, e.g. `x1.5`.
    pub fn speed_label(&self) -> String {
        format!("x{}", self.multiplier())
    }

    /// Starts or stops the animation.
    pub fn toggle_playback(&mut self) {
        match self.playback {
            Playback::Stopped => self.play(),
            Playback::Running => self.stop(),
        }
    }

    pub fn play(&mut self) {
        if self.playback != Playback::Running {
            log::debug!("Animation started at {}", self.speed_label());
        }
        self.playback = Playback::Running;
    }

    pub fn stop(&mut self) {
        if self.playback != Playback::Stopped {
            log::debug!("Animation stopped at t = {}", format_parameter(self.t));
        }
        self.playback = Playback::Stopped;
    }

    /// Moves one step up the speed ladder and starts the animation.
    pub fn speed_up(&mut self) {
        self.speed_index = usize::min(self.speed_index + 1, SPEED_LADDER.len() - 1);
        self.play();
    }

    /// Moves one step down the speed ladder and starts the animation.
    pub fn speed_down(&mut self) {
        self.speed_index = self.speed_index.saturating_sub(1);
        self.play();
    }

    /// The user moved the scrubber: stop animating and jump to `value`.
    pub fn scrub(&mut self, value: f64) {
        self.stop();
        self.set(wrap_parameter(value));
    }

    /// Advances the parameter by one frame.
    ///
    /// While running, `t` moves by the base step times the current
    /// multiplier. While stopped, `t` follows the scrub position instead.
    pub fn tick(&mut self, scrub: f64) {
        let t = match self.playback {
            Playback::Running => wrap_parameter(self.t + self.base_step * self.multiplier()),
            Playback::Stopped => wrap_parameter(scrub),
        };
        self.set(t);
    }

    /// Takes the pending change notification, if the parameter changed since
    /// the last call.
    pub fn take_change(&mut self) -> Option<ParameterChange> {
        if !std::mem::take(&mut self.changed) {
            return None;
        }
        Some(ParameterChange {
            t: self.t,
            label: format_parameter(self.t),
        })
    }

    fn set(&mut self, t: f64) {
        if t != self.t {
            self.t = t;
            self.changed = true;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    pub fn wrap_resets_rather_than_modulo() {
        assert_eq!(wrap_parameter(1.3), 0.0);
        assert_eq!(wrap_parameter(-0.2), 1.0);
        assert_eq!(wrap_parameter(0.5), 0.5);
        assert_eq!(wrap_parameter(0.0), 0.0);
        assert_eq!(wrap_parameter(1.0), 1.0);
        assert_eq!(wrap_parameter(3.7), 0.0);
    }

    #[test]
    pub fn speed_up_saturates() {
        let mut anim = AnimationController::new(0.005);
        assert_eq!(anim.multiplier(), 1.0);
        for _ in 0..13 {
            anim.speed_up();
        }
        assert_eq!(anim.multiplier(), 4.0);
        assert_eq!(anim.speed_index(), SPEED_LADDER.len() - 1);
        anim.speed_up();
        assert_eq!(anim.speed_index(), SPEED_LADDER.len() - 1);
        assert!(anim.is_running());
    }

    #[test]
    pub fn speed_down_saturates() {
        let mut anim = AnimationController::new(0.005);
        for _ in 0..20 {
            anim.speed_down();
        }
        assert_eq!(anim.speed_index(), 0);
        assert_eq!(anim.multiplier(), -4.0);
        assert_eq!(anim.speed_label(), "x-4");
    }

    #[test]
    pub fn running_advances_and_wraps() {
        let mut anim = AnimationController::new(0.1);
        anim.toggle_playback();
        assert!(anim.is_running());
        for _ in 0..5 {
            anim.tick(0.0);
        }
        assert_approx_eq!(anim.parameter(), 0.5);
        for _ in 0..6 {
            anim.tick(0.0);
        }
        // The eleventh step overshoots 1 and resets
        assert_eq!(anim.parameter(), 0.0);
    }

    #[test]
    pub fn reverse_speed_wraps_to_one() {
        let mut anim = AnimationController::new(0.1);
        for _ in 0..7 {
            anim.speed_down();
        }
        assert_eq!(anim.multiplier(), -1.0);
        anim.tick(0.0);
        assert_eq!(anim.parameter(), 1.0);
        anim.tick(0.0);
        assert_approx_eq!(anim.parameter(), 0.9);
    }

    #[test]
    pub fn stopped_follows_scrub() {
        let mut anim = AnimationController::new(0.1);
        anim.tick(0.25);
        assert_eq!(anim.parameter(), 0.25);
        anim.play();
        anim.tick(0.9);
        assert_approx_eq!(anim.parameter(), 0.35);
    }

    #[test]
    pub fn scrubbing_stops_playback() {
        let mut anim = AnimationController::new(0.1);
        anim.play();
        anim.scrub(0.6);
        assert!(!anim.is_running());
        assert_eq!(anim.parameter(), 0.6);
        anim.tick(0.6);
        assert_eq!(anim.parameter(), 0.6);
    }

    #[test]
    pub fn change_notifications() {
        let mut anim = AnimationController::new(0.1);
        assert_eq!(
            anim.take_change(),
            Some(ParameterChange { t: 0.0, label: "0.00".to_owned() })
        );
        assert_eq!(anim.take_change(), None);
        anim.tick(0.0);
        assert_eq!(anim.take_change(), None);
        anim.scrub(0.456);
        assert_eq!(anim.take_change().map(|c| c.label), Some("0.46".to_owned()));
    }
}
