//! Deterministic model of the decorative background: every pose is a pure
//! function of elapsed time and the normalized pointer, so the painter only
//! projects and strokes.

use crate::motion::Vec2;

pub const PARTICLE_COUNT: usize = 200;
/// Half-extent of the cube the particle field is scattered in.
pub const PARTICLE_SPREAD: f64 = 7.5;

/// Camera sits on +Z looking at the origin.
pub const CAMERA_DIST: f64 = 6.0;
/// 45-degree vertical field of view: 1 / tan(22.5deg).
pub const FOV_SCALE: f64 = 2.414;
/// Points closer to the camera than this are culled.
const NEAR_PLANE: f64 = 0.5;

/// After this many seconds the orbiter and satellite return to their
/// starting pose (least common period of their sinusoid frequencies).
pub const ORBIT_PERIOD: f64 = 20.0 * std::f64::consts::PI;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn rotated_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }

    pub fn rotated_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }

    pub fn translated(self, offset: Vec3) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.z + offset.z)
    }
}

/// A point after perspective projection. `x`/`y` are NDC-like units where
/// +-1 spans half the viewport height; `depth` grows away from the camera
/// and is used for size/alpha attenuation.
#[derive(Clone, Copy, Debug)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

pub fn project(point: Vec3) -> Option<Projected> {
    let depth = CAMERA_DIST - point.z;
    if depth < NEAR_PLANE {
        return None;
    }
    Some(Projected {
        x: point.x * FOV_SCALE / depth,
        y: -point.y * FOV_SCALE / depth,
        depth,
    })
}

/// Orientation plus translation for one background shape.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ShapePose {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub offset: Vec3,
}

impl ShapePose {
    pub fn apply(self, point: Vec3) -> Vec3 {
        point
            .rotated_x(self.rotation_x)
            .rotated_y(self.rotation_y)
            .translated(self.offset)
    }
}

/// Primary sphere: gentle spin plus pointer-following drift. `pointer` is
/// the normalized position in -1..1.
pub fn primary_pose(t: f64, pointer: Vec2) -> ShapePose {
    ShapePose {
        rotation_x: t * 0.1 + pointer.y * 0.2,
        rotation_y: t * 0.15 + pointer.x * 0.2,
        offset: Vec3::new(pointer.x * 0.3, pointer.y * 0.2, 0.0),
    }
}

/// Orbiting ring: closed periodic path, independent of the pointer.
pub fn orbiter_pose(t: f64) -> ShapePose {
    ShapePose {
        rotation_x: t * 0.3,
        rotation_y: t * 0.2,
        offset: Vec3::new((t * 0.5).sin() * 2.5, (t * 0.3).sin() * 0.5, (t * 0.5).cos() * 2.5),
    }
}

/// Icosahedron satellite drifting on its own closed path.
pub fn satellite_pose(t: f64) -> ShapePose {
    ShapePose {
        rotation_x: t * 0.2,
        rotation_y: t * 0.25,
        offset: Vec3::new(
            (t * 0.4).cos() * 3.0,
            (t * 0.5).cos() * 0.8 - 0.5,
            (t * 0.4).sin() * 2.0,
        ),
    }
}

/// Slow uniform spin applied to the whole particle field.
pub fn particle_rotation(t: f64) -> (f64, f64) {
    (t * 0.01, t * 0.02)
}

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next_unit(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state as f64 / u64::MAX as f64
    }
}

/// Ambient depth particles: sampled once, never resampled.
pub struct ParticleField {
    points: Vec<Vec3>,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        let mut rng = XorShift64::new(seed);
        let mut points = Vec::with_capacity(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            let x = (rng.next_unit() - 0.5) * 2.0 * PARTICLE_SPREAD;
            let y = (rng.next_unit() - 0.5) * 2.0 * PARTICLE_SPREAD;
            let z = (rng.next_unit() - 0.5) * 2.0 * PARTICLE_SPREAD;
            points.push(Vec3::new(x, y, z));
        }
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

/// Wireframe sphere as three orthogonal great circles.
pub fn sphere_rings(radius: f64, segments: usize) -> Vec<Vec<Vec3>> {
    let circle: Vec<Vec3> = (0..segments)
        .map(|i| {
            let angle = i as f64 / segments as f64 * std::f64::consts::TAU;
            Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
        })
        .collect();

    let half_pi = std::f64::consts::FRAC_PI_2;
    vec![
        circle.clone(),
        circle.iter().map(|p| p.rotated_x(half_pi)).collect(),
        circle.iter().map(|p| p.rotated_y(half_pi)).collect(),
    ]
}

/// Flat ring standing in for the torus.
pub fn ring_points(radius: f64, segments: usize) -> Vec<Vec3> {
    (0..segments)
        .map(|i| {
            let angle = i as f64 / segments as f64 * std::f64::consts::TAU;
            Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

/// Icosahedron vertices and edge index pairs, scaled to `radius`.
pub fn icosahedron(radius: f64) -> (Vec<Vec3>, Vec<(usize, usize)>) {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let scale = radius / (1.0 + phi * phi).sqrt();

    let mut vertices = Vec::with_capacity(12);
    for &a in &[-1.0, 1.0] {
        for &b in &[-phi, phi] {
            vertices.push(Vec3::new(0.0, a, b));
            vertices.push(Vec3::new(a, b, 0.0));
            vertices.push(Vec3::new(b, 0.0, a));
        }
    }
    for v in &mut vertices {
        *v = Vec3::new(v.x * scale, v.y * scale, v.z * scale);
    }

    // Edges connect each vertex pair at the minimal inter-vertex distance.
    let edge_len = 2.0 * scale;
    let mut edges = Vec::with_capacity(30);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let d = distance(vertices[i], vertices[j]);
            if (d - edge_len).abs() < 1e-9 {
                edges.push((i, j));
            }
        }
    }

    (vertices, edges)
}

fn distance(a: Vec3, b: Vec3) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_field_is_deterministic_per_seed() {
        let a = ParticleField::new(42);
        let b = ParticleField::new(42);
        let c = ParticleField::new(7);
        assert_eq!(a.points(), b.points());
        assert_ne!(a.points(), c.points());
    }

    #[test]
    fn particles_stay_inside_the_cube() {
        let field = ParticleField::new(1);
        assert_eq!(field.points().len(), PARTICLE_COUNT);
        for p in field.points() {
            assert!(p.x.abs() <= PARTICLE_SPREAD);
            assert!(p.y.abs() <= PARTICLE_SPREAD);
            assert!(p.z.abs() <= PARTICLE_SPREAD);
        }
    }

    #[test]
    fn orbit_is_closed_and_pointer_independent() {
        for t in [0.0, 1.3, 17.9] {
            let now = orbiter_pose(t);
            let later = orbiter_pose(t + ORBIT_PERIOD);
            assert!((now.offset.x - later.offset.x).abs() < 1e-6);
            assert!((now.offset.y - later.offset.y).abs() < 1e-6);
            assert!((now.offset.z - later.offset.z).abs() < 1e-6);
        }

        let sat_now = satellite_pose(2.0);
        let sat_later = satellite_pose(2.0 + ORBIT_PERIOD);
        assert!((sat_now.offset.x - sat_later.offset.x).abs() < 1e-6);
    }

    #[test]
    fn primary_pose_follows_the_pointer_linearly() {
        let t = 4.0;
        let centered = primary_pose(t, Vec2::ZERO);
        let pushed = primary_pose(t, Vec2::new(1.0, -1.0));
        assert!((pushed.offset.x - centered.offset.x - 0.3).abs() < 1e-12);
        assert!((pushed.offset.y - centered.offset.y + 0.2).abs() < 1e-12);
        assert!((pushed.rotation_y - centered.rotation_y - 0.2).abs() < 1e-12);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let projected = project(Vec3::new(0.0, 0.0, 0.0)).expect("origin is visible");
        assert_eq!(projected.x, 0.0);
        assert_eq!(projected.y, 0.0);
        assert!((projected.depth - CAMERA_DIST).abs() < 1e-12);
    }

    #[test]
    fn points_behind_the_near_plane_are_culled() {
        assert!(project(Vec3::new(0.0, 0.0, CAMERA_DIST)).is_none());
        assert!(project(Vec3::new(0.0, 0.0, -2.0)).is_some());
    }

    #[test]
    fn icosahedron_has_twelve_vertices_and_thirty_edges() {
        let (vertices, edges) = icosahedron(0.4);
        assert_eq!(vertices.len(), 12);
        assert_eq!(edges.len(), 30);
        for v in &vertices {
            let len = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
            assert!((len - 0.4).abs() < 1e-9);
        }
    }
}
