//! Retained scene description: meshes with transforms and materials, plus lights.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::geometry::Geometry;

/// `0xRRGGBB` to linear-ish RGB in `[0, 1]`.
pub fn color_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles, radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: Vec3::ZERO, rotation: Vec3::ZERO, scale: Vec3::ONE }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self { position, ..Self::default() }
    }

    pub fn matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rot, self.position)
    }

    pub fn rotate(&mut self, delta: Vec3) {
        self.rotation += delta;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Unlit flat colour; used for the wireframe shapes.
    Basic { color: Vec3, opacity: f32 },
    /// Square points sized in world units, shrinking with distance.
    Points { color: Vec3, size: f32 },
    /// Lit by the scene lights, with an emissive term on top.
    Standard {
        color: Vec3,
        emissive: Vec3,
        emissive_intensity: f32,
        opacity: f32,
    },
}

#[derive(Clone, Debug)]
pub struct MeshObject {
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
}

impl MeshObject {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material, transform: Transform::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
    /// Zero means no cutoff.
    pub range: f32,
}

/// Index of a mesh inside its [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub meshes: Vec<MeshObject>,
    pub ambient: Vec3,
    pub point_lights: Vec<PointLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mesh: MeshObject) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn mesh(&self, id: MeshId) -> &MeshObject {
        &self.meshes[id.0]
    }

    pub fn mesh_mut(&mut self, id: MeshId) -> &mut MeshObject {
        &mut self.meshes[id.0]
    }

    pub fn set_ambient(&mut self, color: Vec3, intensity: f32) {
        self.ambient = color * intensity;
    }
}
