//! Demo scene: three boxes on a ground triangle under the sun.

use anyhow::Result;
use sunray_core::{Camera, Color, Scene, Sun};
use sunray_math::Vec3;

/// Add two triangles forming a quad, with corners in zig-zag order.
fn add_quad(scene: &mut Scene, pos: Vec3, color: Color, corners: [Vec3; 4]) -> Result<()> {
    let [c1, c2, c3, c4] = corners;
    scene.add_triangle(pos + c1, pos + c2, pos + c3, color)?;
    scene.add_triangle(pos + c3, pos + c2, pos + c4, color)?;
    Ok(())
}

/// Add an axis-aligned cube centered at `pos`, without a bottom face.
fn add_cube(scene: &mut Scene, size: f32, pos: Vec3, color: Color) -> Result<()> {
    let h = 0.5 * size;
    let faces = [
        // front
        [[-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
        // left
        [[-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0]],
        // right
        [[1.0, 1.0, -1.0], [1.0, -1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
        // top
        [[-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
        // back
        [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0]],
    ];

    for corners in faces {
        add_quad(scene, pos, color, corners.map(|c| Vec3::from_array(c) * h))?;
    }

    Ok(())
}

/// Build the demo scene.
pub fn build_scene() -> Result<Scene> {
    let camera = Camera::looking_along(
        Vec3::new(0.0, 1.6, 0.0),
        Vec3::new(0.0, -0.2, 1.0),
        60.0_f32.to_radians(),
    );
    let sun = Sun::new(Vec3::new(5.0, 5.0, -20.0), 15.0);
    let mut scene = Scene::new(camera, sun);

    add_cube(&mut scene, 1.0, Vec3::new(-1.5, 0.5, 4.5), Color::new(30, 210, 30))?;
    add_cube(&mut scene, 1.0, Vec3::new(0.0, 0.5, 4.5), Color::new(255, 20, 20))?;
    add_cube(&mut scene, 1.0, Vec3::new(1.5, 0.5, 4.5), Color::new(255, 140, 10))?;

    // Ground
    scene.add_triangle(
        Vec3::new(0.0, 0.0, -20.0),
        Vec3::new(100.0, 0.0, 50.0),
        Vec3::new(-100.0, 0.0, 50.0),
        Color::WHITE,
    )?;

    // A small lamp between the boxes.
    scene.add_sphere(
        Vec3::new(-0.75, 0.25, 3.6),
        0.15,
        Vec3::new(6.0, 5.0, 3.5),
        Color::WHITE,
    )?;

    log::info!(
        "Built demo scene: {} triangles, {} spheres",
        scene.triangles().len(),
        scene.spheres().len()
    );
    Ok(scene)
}
