use glam::{Vec2, Vec3};
use portfolio_fx::camera::{intersect_spheres, ndc_to_screen, pointer_to_ndc, PerspectiveCamera, Ray};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

fn camera_at(z: f32, aspect: f32) -> PerspectiveCamera {
    let mut cam = PerspectiveCamera::new(75.0, aspect, 0.1, 1000.0);
    cam.place(Vec3::new(0.0, 0.0, z));
    cam
}

#[test]
fn origin_projects_to_center() {
    let cam = camera_at(5.0, 16.0 / 9.0);
    let ndc = cam.project(Vec3::ZERO);
    assert!(approx_eq(ndc.x, 0.0, 1e-6) && approx_eq(ndc.y, 0.0, 1e-6), "{ndc:?}");
    assert!(ndc.z > -1.0 && ndc.z < 1.0);
}

#[test]
fn vertical_mapping_ignores_aspect() {
    // The vertical FOV is fixed, so a point's NDC y does not depend on width.
    let wide = camera_at(5.0, 1920.0 / 1080.0);
    let tall = camera_at(5.0, 1080.0 / 1920.0);
    for y in [-2.0, -0.5, 0.0, 1.0, 2.5] {
        let p = Vec3::new(0.0, y, 0.0);
        assert!(approx_eq(wide.project(p).y, tall.project(p).y, 1e-5), "y={y}");
    }
}

#[test]
fn point_behind_camera_is_past_far_plane() {
    let cam = camera_at(5.0, 1.0);
    let ndc = cam.project(Vec3::new(0.0, 0.0, 10.0));
    assert!(ndc.z >= 1.0 || ndc.z.is_nan(), "{ndc:?}");
}

#[test]
fn zero_viewport_keeps_aspect() {
    let mut cam = camera_at(5.0, 2.0);
    assert!(!cam.set_viewport(0.0, 300.0));
    assert!(!cam.set_viewport(300.0, 0.0));
    assert_eq!(cam.aspect, 2.0);
    assert!(cam.set_viewport(400.0, 200.0));
    assert_eq!(cam.aspect, 2.0);
    assert!(cam.set_viewport(300.0, 600.0));
    assert_eq!(cam.aspect, 0.5);
}

#[test]
fn center_ray_hits_sphere_at_origin() {
    let cam = camera_at(5.0, 1.5);
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    assert!(approx_eq(ray.direction.z, -1.0, 1e-5), "{ray:?}");
    let d = ray.intersect_sphere(Vec3::ZERO, 0.5).expect("hit");
    assert!(approx_eq(d, 4.5, 1e-4), "d={d}");
}

#[test]
fn ray_misses_offset_sphere() {
    let ray = Ray { origin: Vec3::ZERO, direction: Vec3::NEG_Z };
    assert!(ray.intersect_sphere(Vec3::new(2.0, 0.0, -5.0), 0.5).is_none());
    // behind the origin
    assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 5.0), 0.5).is_none());
}

#[test]
fn nearest_sphere_comes_first() {
    let ray = Ray { origin: Vec3::new(0.0, 0.0, 8.0), direction: Vec3::NEG_Z };
    let hits = intersect_spheres(
        &ray,
        [
            (Vec3::new(0.0, 0.0, -2.0), 0.5),
            (Vec3::new(5.0, 0.0, 0.0), 0.5),
            (Vec3::new(0.2, 0.0, 2.0), 0.5),
        ],
    );
    let order: Vec<usize> = hits.iter().map(|h| h.index).collect();
    assert_eq!(order, vec![2, 0]);
    assert!(hits[0].distance < hits[1].distance);
}

#[test]
fn pointer_corners_map_to_ndc_corners() {
    let top_left = pointer_to_ndc(Vec2::new(100.0, 50.0), 100.0, 50.0, 400.0, 200.0);
    assert_eq!(top_left, Vec2::new(-1.0, 1.0));
    let bottom_right = pointer_to_ndc(Vec2::new(500.0, 250.0), 100.0, 50.0, 400.0, 200.0);
    assert_eq!(bottom_right, Vec2::new(1.0, -1.0));
    let middle = pointer_to_ndc(Vec2::new(300.0, 150.0), 100.0, 50.0, 400.0, 200.0);
    assert_eq!(middle, Vec2::ZERO);
}

#[test]
fn ndc_maps_to_css_pixels() {
    assert_eq!(ndc_to_screen(Vec3::new(0.0, 0.0, 0.5), 800.0, 600.0), Vec2::new(400.0, 300.0));
    assert_eq!(ndc_to_screen(Vec3::new(-1.0, 1.0, 0.5), 800.0, 600.0), Vec2::new(0.0, 0.0));
    assert_eq!(ndc_to_screen(Vec3::new(1.0, -1.0, 0.5), 800.0, 600.0), Vec2::new(800.0, 600.0));
}
