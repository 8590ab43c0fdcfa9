//! CPU-side mesh data for the decorative scenes.

use std::collections::HashSet;
use std::f32::consts::PI;

/// How the index (or vertex) stream is assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    Lines,
    Points,
}

/// Flat vertex attributes plus an optional index list.
///
/// `positions` and `normals` are packed `xyz` triples. `Points` geometry is
/// drawn unindexed.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl Geometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of elements handed to the draw call.
    pub fn element_count(&self) -> usize {
        match self.topology {
            Topology::Points => self.vertex_count(),
            _ => self.indices.len(),
        }
    }

    /// Replaces the triangles with a line list holding every distinct edge once.
    pub fn wireframe(mut self) -> Self {
        if self.topology != Topology::Triangles {
            return self;
        }
        let mut seen = HashSet::new();
        let mut lines = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    lines.extend_from_slice(&[key.0, key.1]);
                }
            }
        }
        self.indices = lines;
        self.topology = Topology::Lines;
        self
    }
}

/// UV sphere. `width_segments` around the equator, `height_segments` pole to pole.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut positions = Vec::new();
    let mut normals = Vec::new();

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let x = -radius * (u * 2.0 * PI).cos() * (v * PI).sin();
            let y = radius * (v * PI).cos();
            let z = radius * (u * 2.0 * PI).sin() * (v * PI).sin();
            positions.extend_from_slice(&[x, y, z]);
            let len = (x * x + y * y + z * z).sqrt().max(f32::EPSILON);
            normals.extend_from_slice(&[x / len, y / len, z / len]);
        }
    }

    let row = ws + 1;
    let mut indices = Vec::new();
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the pole rows collapse to a point; skip their degenerate halves
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Geometry { positions, normals, indices, topology: Topology::Triangles }
}

/// Axis-aligned box centred on the origin, eight shared corners.
pub fn cuboid(width: f32, height: f32, depth: f32) -> Geometry {
    let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);
    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    for i in 0..8u32 {
        let x = if i & 1 == 0 { -hx } else { hx };
        let y = if i & 2 == 0 { -hy } else { hy };
        let z = if i & 4 == 0 { -hz } else { hz };
        positions.extend_from_slice(&[x, y, z]);
        let len = (x * x + y * y + z * z).sqrt().max(f32::EPSILON);
        normals.extend_from_slice(&[x / len, y / len, z / len]);
    }
    #[rustfmt::skip]
    let indices = vec![
        0, 2, 1, 1, 2, 3, // -z
        4, 5, 6, 5, 7, 6, // +z
        0, 1, 4, 1, 5, 4, // -y
        2, 6, 3, 3, 6, 7, // +y
        0, 4, 2, 2, 4, 6, // -x
        1, 3, 5, 3, 7, 5, // +x
    ];
    Geometry { positions, normals, indices, topology: Topology::Triangles }
}

/// Ring of `radius` swept by a tube of `tube` radius, lying in the XY plane.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Geometry {
    let rs = radial_segments.max(3);
    let ts = tubular_segments.max(3);
    let mut positions = Vec::new();
    let mut normals = Vec::new();

    for j in 0..=rs {
        let v = j as f32 / rs as f32 * 2.0 * PI;
        for i in 0..=ts {
            let u = i as f32 / ts as f32 * 2.0 * PI;
            let x = (radius + tube * v.cos()) * u.cos();
            let y = (radius + tube * v.cos()) * u.sin();
            let z = tube * v.sin();
            positions.extend_from_slice(&[x, y, z]);
            let (cx, cy) = (radius * u.cos(), radius * u.sin());
            let (nx, ny, nz) = (x - cx, y - cy, z);
            let len = (nx * nx + ny * ny + nz * nz).sqrt().max(f32::EPSILON);
            normals.extend_from_slice(&[nx / len, ny / len, nz / len]);
        }
    }

    let row = ts + 1;
    let mut indices = Vec::new();
    for j in 1..=rs {
        for i in 1..=ts {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Geometry { positions, normals, indices, topology: Topology::Triangles }
}

/// `count` points with every coordinate uniform in `[-extent/2, extent/2)`.
///
/// `rng` must yield values in `[0, 1)`.
pub fn point_cloud(count: usize, extent: f32, rng: &mut impl FnMut() -> f64) -> Geometry {
    let positions = (0..count * 3)
        .map(|_| ((rng() - 0.5) as f32) * extent)
        .collect();
    Geometry {
        positions,
        normals: Vec::new(),
        indices: Vec::new(),
        topology: Topology::Points,
    }
}
