//! Tunable sizes, speeds and colours.

use crate::canvas::Color;
use crate::error::Error;
use crate::math::Vector2d;

/// Appearance and interaction settings shared by all shapes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The initial canvas width, used until the first frame is drawn.
    pub canvas_width: f64,
    /// The initial canvas height, used until the first frame is drawn.
    pub canvas_height: f64,
    /// Radius of an idle control point.
    pub point_radius: f64,
    /// Radius of a hovered or mouse-dragged control point.
    pub active_radius: f64,
    /// Radius of a control point dragged by touch.
    pub touch_radius: f64,
    /// Maximum distance at which a touch hits a control point.
    pub touch_tolerance: f64,
    /// Parameter advance per frame at a speed multiplier of 1.
    pub base_step: f64,
    /// Maximum length of a segment when flattening a curve for drawing.
    pub segment_length: f64,
    /// Length of the tangent drawn at the evaluated point. Zero disables it.
    pub tangent_length: f64,
    pub idle_color: Color,
    pub hover_color: Color,
    pub touch_color: Color,
    pub edit_color: Color,
    pub curve_color: Color,
    pub text_color: Color,
    pub triangle_fill: Color,
    /// Colours of the construction levels, cycled when there are more levels.
    pub level_colors: Vec<Color>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 600.0,
            canvas_height: 450.0,
            point_radius: 8.0,
            active_radius: 12.0,
            touch_radius: 18.0,
            touch_tolerance: 30.0,
            base_step: 0.005,
            segment_length: 2.0,
            tangent_length: 60.0,
            idle_color: Color::rgb(80, 80, 80),
            hover_color: Color::rgb(230, 120, 20),
            touch_color: Color::rgb(220, 40, 40),
            edit_color: Color::rgb(200, 0, 120),
            curve_color: Color::rgb(20, 20, 20),
            text_color: Color::BLACK,
            triangle_fill: Color::rgba(60, 140, 220, 90),
            level_colors: vec![
                Color::rgb(150, 150, 150),
                Color::rgb(40, 160, 70),
                Color::rgb(40, 90, 200),
                Color::rgb(160, 50, 180),
                Color::rgb(200, 150, 0),
            ],
        }
    }
}

impl Settings {
    /// Parses settings from JSON. Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!("Loaded settings ({}x{} canvas)", settings.canvas_width, settings.canvas_height);
        Ok(settings)
    }

    /// Checks that every size and speed is usable.
    pub fn validate(&self) -> Result<(), Error> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("point_radius", self.point_radius),
            ("active_radius", self.active_radius),
            ("touch_radius", self.touch_radius),
            ("touch_tolerance", self.touch_tolerance),
            ("base_step", self.base_step),
            ("segment_length", self.segment_length),
        ];
        match positive.into_iter().find(|(_, value)| !(*value > 0.0)) {
            Some((name, value)) => Err(Error::InvalidSetting { name, value }),
            None => Ok(()),
        }
    }

    /// The initial canvas size.
    pub fn viewport(&self) -> Vector2d {
        Vector2d::new(self.canvas_width, self.canvas_height)
    }

    /// The colour of a construction level.
    pub fn level_color(&self, level: usize) -> Color {
        match self.level_colors.len() {
            0 => self.curve_color,
            n => self.level_colors[level % n],
        }
    }
}
