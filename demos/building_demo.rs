//! Building scene demo: synthesizes the standard five-segment building and
//! walks the orbit camera around it, printing what a renderer would consume.
//!
//! Run with: cargo run --example building_demo

use buildscape::*;

fn main() -> Result<()> {
    init_logging();

    let scene = BuildingScene::synthesize(SceneOptions::default(), 42);
    println!("{}", scene.manifest.to_json()?);

    for cloud in &scene.clouds {
        let env = cloud.envelope;
        println!(
            "{:<8} {:>7} points, envelope y [{:.0}, {:.0}]",
            cloud.kind.name(),
            cloud.len(),
            env.min.y,
            env.max.y,
        );
    }

    // Simulate a short interactive session: drag a quarter turn, zoom in,
    // then let auto-rotation run for two seconds of frames.
    let mut camera = OrbitCamera::default();
    camera.begin_drag(0.0, 0.0)?;
    camera.update_drag(78.5, 0.0)?; // ~pi/2 at 0.02 rad per pixel
    camera.end_drag();
    camera.zoom(ZoomDirection::In);
    camera.toggle_auto_rotate();
    for _ in 0..120 {
        camera.tick(1.0 / 60.0)?;
    }

    println!("{}", camera.status());
    let eye = camera.cartesian_position();
    println!("eye distance from origin: {:.1}", eye.length());

    Ok(())
}
