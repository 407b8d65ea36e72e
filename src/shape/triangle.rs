use crate::canvas::{with_style, Canvas};
use crate::coordinator::DragCoordinator;
use crate::math::{barycentric, centroid, lerp, Point2d, Vector2d};
use crate::pointer::PointerState;
use crate::settings::Settings;

use super::{Draw, Interactive};

/// A triangle with draggable vertices, drawn with its medians and centroid.
/// While the pointer is inside, its barycentric coordinates are shown.
pub struct BarycentricTriangle {
    /// The vertices `A`, `B` and `C`.
    vertices: DragCoordinator,
    /// The size of the canvas the vertices are confined to.
    viewport: Vector2d,
    /// The pointer position seen in the last frame.
    pointer: Option<Point2d>,
    settings: Settings,
}

impl BarycentricTriangle {
    /// Creates a triangle with vertices labelled `A`, `B` and `C`.
    pub fn new(vertices: [Point2d; 3], settings: &Settings) -> Self {
        let mut coord = DragCoordinator::new();
        for (pos, label) in vertices.into_iter().zip(["A", "B", "C"]) {
            coord.push(pos, label, settings);
        }
        Self {
            vertices: coord,
            viewport: settings.viewport(),
            pointer: None,
            settings: settings.clone(),
        }
    }

    /// The current vertex positions.
    pub fn vertices(&self) -> [Point2d; 3] {
        let p = self.vertices.positions();
        [p[0], p[1], p[2]]
    }

    pub fn coordinator(&self) -> &DragCoordinator {
        &self.vertices
    }

    /// The centroid of the current vertex positions.
    pub fn centroid(&self) -> Point2d {
        let vertices = self.vertices();
        centroid(&vertices).unwrap_or(vertices[0])
    }

    /// The barycentric coordinates of a point, or `None` if the triangle is
    /// degenerate.
    pub fn barycentric(&self, point: Point2d) -> Option<[f64; 3]> {
        barycentric(point, self.vertices())
    }

    /// Whether a point lies inside the triangle or on its boundary.
    pub fn contains(&self, point: Point2d) -> bool {
        self.barycentric(point)
            .map_or(false, |weights| weights.iter().all(|w| *w >= 0.0))
    }

    fn draw_readout(&self, canvas: &mut dyn Canvas, point: Point2d) {
        let Some([u, v, w]) = self.barycentric(point) else {
            return;
        };
        if u < 0.0 || v < 0.0 || w < 0.0 {
            return;
        }
        let text = format!("({:.2}, {:.2}, {:.2})", u, v, w);
        with_style(canvas, |canvas| {
            canvas.set_stroke(None, 0.0);
            canvas.set_fill(Some(self.settings.text_color));
            canvas.circle(point, 4.0);
            canvas.text(&text, point + Vector2d::new(8.0, -8.0));
        });
    }
}

impl Draw for BarycentricTriangle {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.viewport = Vector2d::new(canvas.width(), canvas.height());
        let pointer = PointerState::capture(&*canvas);
        self.vertices.update(&pointer, self.viewport);
        self.pointer = Some(pointer.signal().pos);

        let vertices = self.vertices();
        let centre = self.centroid();
        let settings = &self.settings;
        with_style(canvas, |canvas| {
            canvas.set_fill(Some(settings.triangle_fill));
            canvas.set_stroke(Some(settings.curve_color), 2.0);
            canvas.polygon(&vertices);

            canvas.set_stroke(Some(settings.level_color(0)), 1.0);
            for i in 0..3 {
                let midpoint = lerp(vertices[(i + 1) % 3], vertices[(i + 2) % 3], 0.5);
                canvas.line(vertices[i], midpoint);
            }

            canvas.set_stroke(None, 0.0);
            canvas.set_fill(Some(settings.touch_color));
            canvas.circle(centre, settings.point_radius);
        });

        if !self.vertices.is_dragging() {
            if let Some(point) = self.pointer {
                self.draw_readout(canvas, point);
            }
        }
        for vertex in self.vertices.iter() {
            vertex.draw(canvas, &self.settings, false);
        }
    }
}

impl Interactive for BarycentricTriangle {
    fn on_pointer_down(&mut self, pointer: &PointerState) -> bool {
        self.vertices.update(pointer, self.viewport);
        self.vertices.on_pointer_down(pointer).is_some()
    }

    fn on_pointer_up(&mut self) {
        self.vertices.on_pointer_up();
    }

    fn on_pointer_move(&mut self, pointer: &PointerState) {
        self.vertices.update(pointer, self.viewport);
        self.pointer = Some(pointer.signal().pos);
    }

    fn hovering(&self) -> bool {
        self.vertices.is_hovering()
    }

    fn dragging(&self) -> bool {
        self.vertices.is_dragging()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn triangle() -> BarycentricTriangle {
        BarycentricTriangle::new(
            [
                Point2d::new(100.0, 100.0),
                Point2d::new(400.0, 100.0),
                Point2d::new(250.0, 400.0),
            ],
            &Settings::default(),
        )
    }

    #[test]
    fn centroid_follows_dragged_vertex() {
        let mut tri = triangle();
        assert_eq!(tri.centroid(), Point2d::new(250.0, 200.0));

        let press = PointerState::mouse(Point2d::new(100.0, 100.0), true);
        assert!(tri.on_pointer_down(&press));
        tri.on_pointer_move(&PointerState::mouse(Point2d::new(130.0, 130.0), true));
        tri.on_pointer_up();

        assert_eq!(tri.vertices()[0], Point2d::new(130.0, 130.0));
        let c = tri.centroid();
        assert_approx_eq!(c.x, 260.0);
        assert_approx_eq!(c.y, 210.0);
    }

    #[test]
    fn contains_and_weights() {
        let tri = triangle();
        assert!(tri.contains(Point2d::new(250.0, 200.0)));
        assert!(tri.contains(Point2d::new(100.0, 100.0)));
        assert!(!tri.contains(Point2d::new(50.0, 50.0)));
        let [u, v, w] = tri.barycentric(Point2d::new(250.0, 100.0)).unwrap();
        assert_approx_eq!(u, 0.5);
        assert_approx_eq!(v, 0.5);
        assert_approx_eq!(w, 0.0);
    }
}
