//! Radiance estimation.
//!
//! Direct light from the sun and from emissive spheres is shadow-tested
//! explicitly. Indirect light is a uniform hemisphere estimate, recursing
//! until `max_bounces` is reached.

use std::f32::consts::PI;

use rand::{Rng, RngCore};
use sunray_core::Scene;
use sunray_math::{uniform_hemisphere, Frame, Ray, Vec3};

use crate::trace::{trace_detail, trace_id, SurfaceHit};
use crate::RenderConfig;

/// Uniform sample in [0, 1).
#[inline]
fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

/// Estimate the radiance arriving at the ray origin along `ray`.
///
/// The result is linear and unclamped. `depth` is 0 for camera rays.
pub fn radiance(
    scene: &Scene,
    ray: &Ray,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Vec3 {
    let Some(surface) = trace_detail(scene, ray) else {
        return config.sky_radiance;
    };

    let mut incident = direct_light(scene, &surface);
    if depth < config.max_bounces {
        incident += indirect_light(scene, &surface, depth, config, rng);
    }

    // Lambertian BRDF
    incident * surface.albedo / PI + surface.emission
}

/// Irradiance from the sun and from every visible light sphere.
fn direct_light(scene: &Scene, surface: &SurfaceHit) -> Vec3 {
    let mut irradiance = Vec3::ZERO;
    let normal = surface.normal;

    let sun = &scene.sun;
    let to_sun = (sun.position - surface.point).normalize();
    let cos_sun = normal.dot(to_sun);
    if cos_sun > 0.0 && trace_id(scene, &Ray::new(surface.point, to_sun)).is_none() {
        // No distance falloff for the sun.
        irradiance += Vec3::splat(sun.irradiance * cos_sun);
    }

    for light in scene.lights() {
        if light.id() == surface.id {
            continue;
        }

        let offset = light.center() - surface.point;
        let distance_squared = offset.length_squared();
        let to_light = offset / distance_squared.sqrt();
        let cos_light = to_light.dot(normal);
        if cos_light <= 0.0 {
            continue;
        }

        let visible = trace_id(scene, &Ray::new(surface.point, to_light)) == Some(light.id());
        if visible {
            irradiance += light.intensity() * cos_light / distance_squared;
        }
    }

    irradiance
}

/// Monte Carlo estimate of cosine-weighted incoming radiance over the hemisphere.
fn indirect_light(
    scene: &Scene,
    surface: &SurfaceHit,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Vec3 {
    if config.indirect_samples == 0 {
        return Vec3::ZERO;
    }

    let frame = Frame::from_normal(surface.normal);
    let mut sum = Vec3::ZERO;

    for _ in 0..config.indirect_samples {
        let xi1 = gen_f32(rng);
        let xi2 = gen_f32(rng);
        let direction = frame.to_world(uniform_hemisphere(xi1, xi2));

        let bounce = Ray::new(surface.point, direction);
        let incoming = radiance(scene, &bounce, depth + 1, config, rng);
        sum += incoming * surface.normal.dot(direction);
    }

    // Uniform hemisphere pdf is 1 / 2π.
    sum * (2.0 * PI / config.indirect_samples as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sunray_core::{Camera, Color, Sun};

    fn direct_only() -> RenderConfig {
        RenderConfig {
            max_bounces: 0,
            sky_radiance: Vec3::ZERO,
            ..RenderConfig::default()
        }
    }

    /// White triangle at z=4 facing the origin.
    fn facing_triangle(scene: &mut Scene, albedo: Color) {
        scene
            .add_triangle(
                Vec3::new(-1.0, -1.0, 4.0),
                Vec3::new(1.0, -1.0, 4.0),
                Vec3::new(0.0, 1.0, 4.0),
                albedo,
            )
            .unwrap();
    }

    fn scene_with_sun(sun: Vec3) -> Scene {
        Scene::new(Camera::default(), Sun::new(sun, 15.0))
    }

    #[test]
    fn test_miss_returns_sky() {
        let scene = scene_with_sun(Vec3::Y);
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let l = radiance(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 0, &config, &mut rng);
        assert_eq!(l, config.sky_radiance);
    }

    #[test]
    fn test_sun_at_normal_incidence() {
        let mut scene = scene_with_sun(Vec3::new(0.0, 0.0, -20.0));
        facing_triangle(&mut scene, Color::WHITE);
        let mut rng = StdRng::seed_from_u64(1);

        let l = radiance(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 0, &direct_only(), &mut rng);
        let expected = 15.0 / PI;
        assert!((l - Vec3::splat(expected)).length() < 1e-4, "l={l}");
    }

    #[test]
    fn test_sun_has_no_distance_falloff() {
        let mut near = scene_with_sun(Vec3::new(0.0, 0.0, -2.0));
        facing_triangle(&mut near, Color::WHITE);
        let mut far = scene_with_sun(Vec3::new(0.0, 0.0, -2000.0));
        facing_triangle(&mut far, Color::WHITE);
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let l_near = radiance(&near, &ray, 0, &direct_only(), &mut rng);
        let l_far = radiance(&far, &ray, 0, &direct_only(), &mut rng);
        assert!((l_near - l_far).length() < 1e-4);
    }

    #[test]
    fn test_sun_behind_surface_contributes_nothing() {
        let mut scene = scene_with_sun(Vec3::new(0.0, 0.0, 50.0));
        facing_triangle(&mut scene, Color::WHITE);
        let mut rng = StdRng::seed_from_u64(1);

        let l = radiance(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 0, &direct_only(), &mut rng);
        assert_eq!(l, Vec3::ZERO);
    }

    #[test]
    fn test_occluded_sun_contributes_nothing() {
        let mut scene = scene_with_sun(Vec3::new(0.0, 0.0, -20.0));
        facing_triangle(&mut scene, Color::WHITE);
        // Blocker between the triangle and the sun, off the camera ray.
        scene
            .add_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0, Vec3::ZERO, Color::WHITE)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::Z);
        let l = radiance(&scene, &ray, 0, &direct_only(), &mut rng);
        assert_eq!(l, Vec3::ZERO);
    }

    #[test]
    fn test_albedo_scales_reflection() {
        let mut scene = scene_with_sun(Vec3::new(0.0, 0.0, -20.0));
        facing_triangle(&mut scene, Color::new(255, 0, 51));
        let mut rng = StdRng::seed_from_u64(1);

        let l = radiance(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 0, &direct_only(), &mut rng);
        let expected = Vec3::new(1.0, 0.0, 0.2) * 15.0 / PI;
        assert!((l - expected).length() < 1e-4, "l={l}");
    }

    #[test]
    fn test_sphere_light_inverse_square() {
        let mut near = scene_with_sun(Vec3::new(0.0, 0.0, 50.0));
        facing_triangle(&mut near, Color::WHITE);
        near.add_sphere(Vec3::new(0.0, 0.0, 2.0), 0.1, Vec3::splat(8.0), Color::WHITE)
            .unwrap();

        let mut far = scene_with_sun(Vec3::new(0.0, 0.0, 50.0));
        facing_triangle(&mut far, Color::WHITE);
        far.add_sphere(Vec3::new(0.0, 0.0, 0.0), 0.1, Vec3::splat(8.0), Color::WHITE)
            .unwrap();

        // Look at the triangle from beside the lamps.
        let ray = Ray::towards(Vec3::new(0.5, 0.0, 1.0), Vec3::new(0.0, 0.0, 4.0));
        let mut rng = StdRng::seed_from_u64(1);

        let hit_near = trace_detail(&near, &ray).unwrap();
        let hit_far = trace_detail(&far, &ray).unwrap();
        assert_eq!(hit_near.id, near.triangles()[0].id());
        assert_eq!(hit_far.id, far.triangles()[0].id());

        let l_near = radiance(&near, &ray, 0, &direct_only(), &mut rng);
        let l_far = radiance(&far, &ray, 0, &direct_only(), &mut rng);

        let expected_near = 8.0 * direct_cos(hit_near.point, Vec3::new(0.0, 0.0, 2.0))
            / (Vec3::new(0.0, 0.0, 2.0) - hit_near.point).length_squared()
            / PI;
        assert!((l_near.x - expected_near).abs() < 1e-3, "near={l_near} expected={expected_near}");
        assert!(l_far.x < l_near.x);
    }

    fn direct_cos(point: Vec3, light: Vec3) -> f32 {
        (light - point).normalize().dot(-Vec3::Z)
    }

    #[test]
    fn test_hit_light_adds_its_own_emission() {
        let mut scene = scene_with_sun(Vec3::new(0.0, 0.0, 50.0));
        scene
            .add_sphere(Vec3::new(0.0, 0.0, 3.0), 0.5, Vec3::new(2.0, 3.0, 4.0), Color::BLACK)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let l = radiance(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 0, &direct_only(), &mut rng);
        assert!((l - Vec3::new(2.0, 3.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn test_occluded_sphere_light_contributes_nothing() {
        let lamp = |scene: &mut Scene| {
            scene
                .add_sphere(Vec3::new(0.0, 0.0, 1.0), 0.1, Vec3::splat(8.0), Color::WHITE)
                .unwrap();
        };

        let mut lit = scene_with_sun(Vec3::new(0.0, 0.0, 50.0));
        facing_triangle(&mut lit, Color::WHITE);
        lamp(&mut lit);

        let mut blocked = scene_with_sun(Vec3::new(0.0, 0.0, 50.0));
        facing_triangle(&mut blocked, Color::WHITE);
        lamp(&mut blocked);
        // Unlit sphere on the segment from the lamp to the triangle center.
        blocked
            .add_sphere(Vec3::new(0.0, 0.0, 2.0), 0.1, Vec3::ZERO, Color::WHITE)
            .unwrap();

        // Passes beside both spheres and lands on the triangle center.
        let ray = Ray::towards(Vec3::new(0.5, 0.0, 1.0), Vec3::new(0.0, 0.0, 4.0));
        let mut rng = StdRng::seed_from_u64(1);

        let l_lit = radiance(&lit, &ray, 0, &direct_only(), &mut rng);
        let l_blocked = radiance(&blocked, &ray, 0, &direct_only(), &mut rng);
        assert!(l_lit.x > 0.0, "lit={l_lit}");
        assert_eq!(l_blocked, Vec3::ZERO);
    }

    #[test]
    fn test_lone_light_returns_only_its_emission() {
        let mut scene = scene_with_sun(Vec3::new(0.0, 0.0, -50.0));
        scene
            .add_sphere(Vec3::new(0.0, 0.0, 3.0), 0.5, Vec3::ONE, Color::BLACK)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        // Black albedo: the sun adds nothing, the lamp never lights itself.
        let l = radiance(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 0, &direct_only(), &mut rng);
        assert_eq!(l, Vec3::ONE);
    }

    #[test]
    fn test_light_is_lit_by_other_lights_not_itself() {
        let mut scene = scene_with_sun(Vec3::new(0.0, 0.0, 50.0));
        let hit_light = scene
            .add_sphere(Vec3::new(0.0, 0.0, 3.0), 0.5, Vec3::ONE, Color::WHITE)
            .unwrap();
        let other = Vec3::new(0.0, 1.5, 1.5);
        scene
            .add_sphere(other, 0.1, Vec3::splat(4.0), Color::WHITE)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = trace_detail(&scene, &ray).unwrap();
        assert_eq!(hit.id, hit_light);
        assert!((hit.point - Vec3::new(0.0, 0.0, 2.5)).length() < 1e-4);

        let l = radiance(&scene, &ray, 0, &direct_only(), &mut rng);
        let offset = other - hit.point;
        let cos = offset.normalize().dot(hit.normal);
        let expected = 1.0 + 4.0 * cos / offset.length_squared() / PI;
        assert!((l - Vec3::splat(expected)).length() < 1e-4, "l={l} expected={expected}");
    }

    #[test]
    fn test_indirect_sky_on_open_ground() {
        // Ground facing +Y under a uniform white sky, sun below the horizon.
        // Irradiance from a uniform sky is π·L, so reflected radiance → albedo·L.
        let mut scene = scene_with_sun(Vec3::new(0.0, -100.0, 0.0));
        scene
            .add_triangle(
                Vec3::new(0.0, 0.0, -100.0),
                Vec3::new(100.0, 0.0, 100.0),
                Vec3::new(-100.0, 0.0, 100.0),
                Color::WHITE,
            )
            .unwrap();
        let config = RenderConfig {
            indirect_samples: 4096,
            sky_radiance: Vec3::ONE,
            ..RenderConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);

        let ray = Ray::towards(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let l = radiance(&scene, &ray, 0, &config, &mut rng);
        assert!((l.x - 1.0).abs() < 0.1, "l={l}");
    }

    #[test]
    fn test_recursion_stops_at_max_bounces() {
        let mut scene = scene_with_sun(Vec3::new(0.0, 0.0, 100.0));
        facing_triangle(&mut scene, Color::WHITE);
        let config = RenderConfig {
            max_bounces: 1,
            indirect_samples: 8,
            sky_radiance: Vec3::ONE,
            ..RenderConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(5);

        // At the bounce limit only direct light is gathered, and the sun
        // is behind the triangle.
        let at_limit = radiance(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 1, &config, &mut rng);
        assert_eq!(at_limit, Vec3::ZERO);

        let below_limit = radiance(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 0, &config, &mut rng);
        assert!(below_limit.x > 0.0);
    }
}
