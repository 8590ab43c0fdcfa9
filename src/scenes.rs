//! The decorative viewports that only spin: hero globe, about cube, contact torus.

use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::geometry;
use crate::scene::{color_from_hex, Material, MeshId, MeshObject, Scene};

pub const CYAN: u32 = 0x00ffff;
pub const PURPLE: u32 = 0x9d4edd;

pub const FOV_DEG: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;

/// Anything a render loop can drive: a scene, its camera and a per-frame step.
pub trait Animated {
    fn scene(&self) -> &Scene;
    fn camera(&self) -> &PerspectiveCamera;
    fn camera_mut(&mut self) -> &mut PerspectiveCamera;
    /// Advances one frame. `time` is wall-clock seconds.
    fn step(&mut self, time: f64);
}

/// Meshes that rotate by a fixed Euler delta every frame.
pub struct Spinner {
    scene: Scene,
    camera: PerspectiveCamera,
    spins: Vec<(MeshId, Vec3)>,
}

impl Spinner {
    fn with_camera_z(aspect: f32, z: f32) -> Self {
        let mut camera = PerspectiveCamera::new(FOV_DEG, aspect, NEAR, FAR);
        camera.place(Vec3::new(0.0, 0.0, z));
        Self { scene: Scene::new(), camera, spins: Vec::new() }
    }

    fn spin(&mut self, mesh: MeshObject, delta: Vec3) -> MeshId {
        let id = self.scene.add(mesh);
        self.spins.push((id, delta));
        id
    }

    /// Wireframe globe wrapped in a slowly drifting point cloud.
    pub fn hero(aspect: f32, rng: &mut impl FnMut() -> f64) -> Self {
        let mut s = Self::with_camera_z(aspect, 5.0);
        s.spin(
            MeshObject::new(
                geometry::sphere(2.0, 32, 32).wireframe(),
                Material::Basic { color: color_from_hex(CYAN), opacity: 0.6 },
            ),
            Vec3::new(0.0, 0.005, 0.0),
        );
        s.spin(
            MeshObject::new(
                geometry::point_cloud(100, 20.0, rng),
                Material::Points { color: color_from_hex(CYAN), size: 0.05 },
            ),
            Vec3::new(0.0005, 0.001, 0.0),
        );
        s
    }

    pub fn about(aspect: f32) -> Self {
        let mut s = Self::with_camera_z(aspect, 5.0);
        s.spin(
            MeshObject::new(
                geometry::cuboid(2.0, 2.0, 2.0).wireframe(),
                Material::Basic { color: color_from_hex(PURPLE), opacity: 0.7 },
            ),
            Vec3::new(0.01, 0.01, 0.0),
        );
        s
    }

    pub fn contact(aspect: f32) -> Self {
        let mut s = Self::with_camera_z(aspect, 5.0);
        s.spin(
            MeshObject::new(
                geometry::torus(1.0, 0.3, 16, 100).wireframe(),
                Material::Basic { color: color_from_hex(CYAN), opacity: 0.6 },
            ),
            Vec3::new(0.01, 0.02, 0.0),
        );
        s
    }
}

impl Animated for Spinner {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    fn step(&mut self, _time: f64) {
        for (id, delta) in &self.spins {
            self.scene.mesh_mut(*id).transform.rotate(*delta);
        }
    }
}
