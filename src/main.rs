use interactive_curves::math::Point2d;
use interactive_curves::debug::RecordingCanvas;
use interactive_curves::{BarycentricTriangle, BezierCurve, Caption, PointerState, Scene, Settings};

/// Number of frames to animate after the scripted drag.
const NUM_FRAMES: usize = 240;

fn main() -> Result<(), interactive_curves::Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Settings::from_json(&json)?,
            Err(err) => {
                log::warn!("Cannot read {}: {}, using default settings", path, err);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let mut canvas = RecordingCanvas::new(settings.canvas_width, settings.canvas_height);
    let mut curve = BezierCurve::new(
        &[
            Point2d::new(100.0, 350.0),
            Point2d::new(150.0, 100.0),
            Point2d::new(450.0, 100.0),
            Point2d::new(500.0, 350.0),
        ],
        &settings,
    )?;
    curve.animation_mut().toggle_playback();

    let mut scene = Scene::new();
    scene.add_static(Caption {
        text: "Drag the control points".to_owned(),
        at: Point2d::new(10.0, settings.canvas_height - 10.0),
        color: settings.text_color,
    });
    scene.add_interactive(curve);
    scene.add_interactive(BarycentricTriangle::new(
        [
            Point2d::new(380.0, 300.0),
            Point2d::new(560.0, 300.0),
            Point2d::new(470.0, 430.0),
        ],
        &settings,
    ));

    // Drag the second control point off the right edge of the canvas
    let press = Point2d::new(150.0, 100.0);
    canvas.set_mouse(press, true);
    scene.pointer_pressed(&PointerState::mouse(press, true));
    log::info!("Cursor after press: {:?}", scene.cursor());
    for step in 1..=20 {
        let pos = Point2d::new(150.0 + 30.0 * step as f64, 100.0);
        canvas.set_mouse(pos, true);
        scene.pointer_moved(&PointerState::mouse(pos, true));
        scene.frame(&mut canvas);
        canvas.take_frame();
    }
    canvas.set_mouse(Point2d::new(300.0, 200.0), false);
    scene.pointer_released();

    for _ in 0..NUM_FRAMES {
        scene.frame(&mut canvas);
        canvas.take_frame();
    }
    scene.frame(&mut canvas);
    let frame = canvas.take_frame();
    log::info!(
        "Simulated {} frames, last frame has {} draw commands, cursor {:?}",
        NUM_FRAMES + 21,
        frame.len(),
        scene.cursor()
    );

    #[cfg(feature = "debug")]
    {
        scene.frame(&mut canvas);
        println!("{}", canvas.take_frame_json());
    }

    Ok(())
}
