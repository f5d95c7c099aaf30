//! Static geometry drawn around the particle field: the ring, the round
//! point sprite and the camera setup.

use glam::{Mat3, Mat4, Vec2, Vec3};

use crate::config::SceneConfig;
use crate::palette::rgb_from_hex;

/// Flat annulus mesh.
pub struct RingMesh {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    pub color: Vec3,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Both faces are drawn.
    pub double_sided: bool,
}

impl RingMesh {
    /// Annulus in the XY plane with one radial band of `segments` quads,
    /// then tilted a quarter turn about X so it lies flat under the field.
    pub fn new(inner_radius: f32, outer_radius: f32, segments: u32, color: Vec3) -> Self {
        let segments = segments.max(3);
        let bands = 1u32;
        let tilt = Mat3::from_rotation_x(std::f32::consts::FRAC_PI_2);

        let verts_per_ring = (segments + 1) as usize;
        let mut positions = Vec::with_capacity(verts_per_ring * (bands as usize + 1));
        let mut uvs = Vec::with_capacity(positions.capacity());

        let step = (outer_radius - inner_radius) / bands as f32;
        for j in 0..=bands {
            let radius = inner_radius + step * j as f32;
            for i in 0..=segments {
                let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
                let flat = Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0);
                let uv = if outer_radius > 0.0 {
                    Vec2::new(
                        (flat.x / outer_radius + 1.0) * 0.5,
                        (flat.y / outer_radius + 1.0) * 0.5,
                    )
                } else {
                    Vec2::splat(0.5)
                };
                positions.push(tilt * flat);
                uvs.push(uv);
            }
        }

        let mut indices = Vec::with_capacity((segments * bands * 6) as usize);
        for j in 0..bands {
            let level = j * (segments + 1);
            for i in 0..segments {
                let a = level + i;
                let b = a + segments + 1;
                let c = a + segments + 2;
                let d = a + 1;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            positions,
            uvs,
            indices,
            color,
            inner_radius,
            outer_radius,
            double_sided: true,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(
            config.ring_inner_radius,
            config.ring_outer_radius,
            config.ring_segments,
            rgb_from_hex(config.ring_color),
        )
    }

    pub fn vertices_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }
}

/// Square RGBA8 texture holding a filled disc, used as the point sprite.
pub struct Sprite {
    pub size: u32,
    pub pixels: Vec<u8>,
}

impl Sprite {
    /// Disc of radius `size / 2` centred in the texture. Pixels whose centre
    /// falls inside the disc take `color` at full alpha; the rest are
    /// fully transparent.
    pub fn disc(size: u32, color: u32) -> Self {
        let rgb = [
            ((color >> 16) & 0xFF) as u8,
            ((color >> 8) & 0xFF) as u8,
            (color & 0xFF) as u8,
        ];
        let half = size as f32 * 0.5;
        let mut pixels = vec![0u8; (size * size * 4) as usize];
        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - half;
                let dy = y as f32 + 0.5 - half;
                if dx * dx + dy * dy <= half * half {
                    let o = ((y * size + x) * 4) as usize;
                    pixels[o..o + 3].copy_from_slice(&rgb);
                    pixels[o + 3] = 0xFF;
                }
            }
        }
        Self { size, pixels }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::disc(config.sprite_size, config.sprite_color)
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels.get(((y * self.size + x) * 4 + 3) as usize).copied()
    }
}

/// Fixed perspective camera looking at the origin, plus the orbit
/// controller tuning the host applies on its side.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub orbit_damping: f32,
    pub orbit_zoom_speed: f32,
}

impl Camera {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            fov_deg: config.camera_fov_deg,
            near: config.camera_near,
            far: config.camera_far,
            position: config.camera_position,
            orbit_damping: config.orbit_damping,
            orbit_zoom_speed: config.orbit_zoom_speed,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    /// GL-style clip space projection for the given viewport aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Mat4::perspective_rh_gl(self.fov_deg.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

/// Everything static the renderer needs besides the particle buffers.
pub struct Scene {
    pub ring: RingMesh,
    pub sprite: Sprite,
    pub camera: Camera,
    pub point_size: f32,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            ring: RingMesh::from_config(config),
            sprite: Sprite::from_config(config),
            camera: Camera::from_config(config),
            point_size: config.point_size,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}
