use glam::Vec3;

/// Parameters of the particle field itself.
pub struct FieldConfig {
    pub particle_count: usize,
    /// Containment radius; particles beyond it are respawned.
    pub sphere_radius: f32,
    /// Lower bound of the per-particle drift speed.
    pub base_speed: f32,
    /// Width of the uniform range added on top of `base_speed`.
    pub speed_jitter: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 5000,
            sphere_radius: 2.0,
            base_speed: 0.0001,
            speed_jitter: 0.0001,
        }
    }
}

/// Static scene surrounding the field: ring, camera and point material.
pub struct SceneConfig {
    pub ring_inner_radius: f32,
    pub ring_outer_radius: f32,
    pub ring_segments: u32,
    pub ring_color: u32,
    pub sprite_size: u32,
    pub sprite_color: u32,
    pub point_size: f32,
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_position: Vec3,
    pub orbit_damping: f32,
    pub orbit_zoom_speed: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ring_inner_radius: 2.5,
            ring_outer_radius: 3.0,
            ring_segments: 64,
            ring_color: 0x000000,
            sprite_size: 64,
            sprite_color: 0x484E61,
            point_size: 0.01,
            camera_fov_deg: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            orbit_damping: 0.1,
            orbit_zoom_speed: 0.1,
        }
    }
}
