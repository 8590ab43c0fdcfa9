use glam::{Mat4, Vec2, Vec3};

/// Perspective camera in OpenGL clip conventions (NDC z in `[-1, 1]`).
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    /// Vertical field of view, degrees.
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
        }
    }

    /// Moves the camera and keeps it facing down -Z.
    pub fn place(&mut self, position: Vec3) {
        self.position = position;
        self.target = position + Vec3::NEG_Z;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Updates the aspect ratio from a viewport size. Zero sizes are ignored.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.aspect = (width / height) as f32;
        true
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_deg.to_radians(),
            self.aspect.max(1e-6),
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// World point to normalised device coordinates.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// Ray through an NDC point, starting at the eye.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let through = inv.project_point3(ndc.extend(0.5));
        Ray {
            origin: self.position,
            direction: (through - self.position).normalize_or_zero(),
        }
    }
}

/// Maps a client-space pointer position onto NDC for a rectangle.
pub fn pointer_to_ndc(client: Vec2, left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (client.x - left) / width * 2.0 - 1.0,
        -((client.y - top) / height) * 2.0 + 1.0,
    )
}

/// NDC to CSS pixels inside a `width × height` box (origin top-left).
pub fn ndc_to_screen(ndc: Vec3, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * width,
        (ndc.y * -0.5 + 0.5) * height,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Distance along the ray to the first hit on a sphere, if any.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let near = -b - sq;
        let far = -b + sq;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// A ray hit on one of several candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
}

/// Intersects `ray` against bounding spheres, nearest hit first.
pub fn intersect_spheres<I>(ray: &Ray, spheres: I) -> Vec<Hit>
where
    I: IntoIterator<Item = (Vec3, f32)>,
{
    let mut hits: Vec<Hit> = spheres
        .into_iter()
        .enumerate()
        .filter_map(|(index, (center, radius))| {
            ray.intersect_sphere(center, radius)
                .map(|distance| Hit { index, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
