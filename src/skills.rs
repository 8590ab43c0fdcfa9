//! Floating skill spheres with pointer hover and screen-space labels.

use glam::{Vec2, Vec3};

use crate::camera::{intersect_spheres, ndc_to_screen, PerspectiveCamera};
use crate::geometry;
use crate::scene::{color_from_hex, Material, MeshId, MeshObject, PointLight, Scene, Transform};
use crate::scenes::{Animated, CYAN, FAR, FOV_DEG, NEAR, PURPLE};

pub const SPHERE_RADIUS: f32 = 0.5;
pub const BASE_EMISSIVE: f32 = 0.2;
pub const HOVER_EMISSIVE: f32 = 0.5;
pub const HOVER_SCALE: f32 = 1.3;

/// One labelled sphere's static data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub position: [f32; 3],
    pub color: u32,
}

pub const SKILLS: [SkillEntry; 7] = [
    SkillEntry { name: "Java", position: [-3.0, 2.0, 0.0], color: CYAN },
    SkillEntry { name: "Python", position: [3.0, 2.0, 0.0], color: PURPLE },
    SkillEntry { name: "JavaScript", position: [-2.0, -1.0, 1.0], color: CYAN },
    SkillEntry { name: "React.js", position: [2.0, -1.0, 1.0], color: PURPLE },
    SkillEntry { name: "Node.js", position: [0.0, 0.0, -2.0], color: CYAN },
    SkillEntry { name: "Security", position: [-1.0, 1.0, 2.0], color: PURPLE },
    SkillEntry { name: "SQL", position: [1.0, -2.0, 0.0], color: CYAN },
];

/// Vertical bob of sphere `index` at `time` seconds.
pub fn float_offset(time: f64, index: usize) -> f32 {
    ((time * 0.5 + index as f64).sin() * 0.3) as f32
}

/// Where a label goes, in CSS pixels relative to the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

impl LabelPlacement {
    pub fn from_ndc(ndc: Vec3, width: f32, height: f32) -> Self {
        let p = ndc_to_screen(ndc, width, height);
        Self { x: p.x, y: p.y, visible: ndc.z < 1.0 }
    }
}

struct SkillSphere {
    mesh: MeshId,
    origin_y: f32,
}

pub struct SkillCluster {
    scene: Scene,
    camera: PerspectiveCamera,
    spheres: Vec<SkillSphere>,
    hovered: Option<usize>,
}

impl SkillCluster {
    pub fn new(aspect: f32) -> Self {
        let mut scene = Scene::new();
        scene.set_ambient(color_from_hex(0x404040), 0.5);
        scene.point_lights.push(PointLight {
            color: Vec3::ONE,
            intensity: 1.0,
            position: Vec3::splat(10.0),
            range: 100.0,
        });

        let spheres = SKILLS
            .iter()
            .map(|skill| {
                let color = color_from_hex(skill.color);
                let mut mesh = MeshObject::new(
                    geometry::sphere(SPHERE_RADIUS, 16, 16),
                    Material::Standard {
                        color,
                        emissive: color,
                        emissive_intensity: BASE_EMISSIVE,
                        opacity: 0.8,
                    },
                );
                mesh.transform = Transform::at(Vec3::from_array(skill.position));
                SkillSphere { mesh: scene.add(mesh), origin_y: skill.position[1] }
            })
            .collect();

        let mut camera = PerspectiveCamera::new(FOV_DEG, aspect, NEAR, FAR);
        camera.position = Vec3::new(0.0, 0.0, 8.0);
        camera.look_at(Vec3::ZERO);

        Self { scene, camera, spheres, hovered: None }
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn transform(&self, index: usize) -> &Transform {
        &self.scene.mesh(self.spheres[index].mesh).transform
    }

    pub fn emissive_intensity(&self, index: usize) -> f32 {
        match self.scene.mesh(self.spheres[index].mesh).material {
            Material::Standard { emissive_intensity, .. } => emissive_intensity,
            _ => 0.0,
        }
    }

    /// Casts a ray through `ndc` and updates the hover state. Returns the hovered sphere.
    pub fn pointer_at(&mut self, ndc: Vec2) -> Option<usize> {
        let ray = self.camera.ray_from_ndc(ndc);
        let targets = self.spheres.iter().map(|s| {
            let t = &self.scene.mesh(s.mesh).transform;
            (t.position, SPHERE_RADIUS * t.scale.x)
        });
        let hit = intersect_spheres(&ray, targets).first().map(|h| h.index);
        self.set_hovered(hit);
        hit
    }

    /// Puts the previous hover back to rest, then highlights `hit`.
    pub fn set_hovered(&mut self, hit: Option<usize>) {
        if let Some(prev) = self.hovered.take() {
            self.highlight(prev, 1.0, BASE_EMISSIVE);
        }
        if let Some(index) = hit.filter(|&i| i < self.spheres.len()) {
            self.highlight(index, HOVER_SCALE, HOVER_EMISSIVE);
            self.hovered = Some(index);
        }
    }

    fn highlight(&mut self, index: usize, scale: f32, intensity: f32) {
        let mesh = self.scene.mesh_mut(self.spheres[index].mesh);
        mesh.transform.scale = Vec3::splat(scale);
        if let Material::Standard { emissive_intensity, .. } = &mut mesh.material {
            *emissive_intensity = intensity;
        }
    }

    /// Label position for every sphere, in sphere order.
    pub fn label_placements(&self, width: f32, height: f32) -> Vec<LabelPlacement> {
        self.spheres
            .iter()
            .map(|s| {
                let ndc = self.camera.project(self.scene.mesh(s.mesh).transform.position);
                LabelPlacement::from_ndc(ndc, width, height)
            })
            .collect()
    }
}

impl Animated for SkillCluster {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    fn step(&mut self, time: f64) {
        for (index, sphere) in self.spheres.iter().enumerate() {
            let t = &mut self.scene.mesh_mut(sphere.mesh).transform;
            t.position.y = sphere.origin_y + float_offset(time, index);
            t.rotate(Vec3::new(0.005, 0.01, 0.0));
        }
        self.camera.position.x = ((time * 0.1).sin() * 2.0) as f32;
        self.camera.look_at(Vec3::ZERO);
    }
}
