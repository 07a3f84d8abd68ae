//! Demo showing camera components built from partial configurations.
//!
//! Run with `RUST_LOG=debug` to see merged parameters as they are built.

use camkit::*;
use serde_json::json;

fn main() -> Result<()> {
    let viewport = SharedViewport::new(1024.0, 768.0);
    init_with(Options::default(), viewport.clone())?;

    // Only `far` and the y position are given; everything else comes from the
    // 1024x768 viewport.
    let overview = register_orthographic_camera(
        "overview",
        &json!({ "camera": { "far": 10000 }, "position": { "y": 50 } }),
    )?;
    if let Some([left, right, top, bottom, near, far]) = overview.extents() {
        println!("overview: left={left} right={right} top={top} bottom={bottom} near={near} far={far}");
    }

    let eye = register_perspective_camera(
        "eye",
        &json!({ "camera": { "fov": 60 }, "position": { "z": 10 } }),
    )?;
    eye.set_active()?;

    // Snapshot defaults ignore the resize until refreshed.
    viewport.resize(1920.0, 1080.0);
    let before = build_camera::<Orthographic>(&json!({}))?;
    refresh_viewport_defaults()?;
    let after = build_camera::<Orthographic>(&json!({}))?;
    println!("default width before refresh: {}", before.width());
    println!("default width after refresh: {}", after.width());

    if let Some(uniforms) = with_active_camera(CameraUniforms::from_camera) {
        println!("active camera position: {:?}", uniforms.position);
    }

    shutdown();
    Ok(())
}
