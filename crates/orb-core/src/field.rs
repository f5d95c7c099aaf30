use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::FieldConfig;
use crate::math::{centered, polar_from_unit, spherical_to_cartesian, spiral_azimuth};
use crate::palette::Tier;
use crate::random::UniformSource;

/// One particle, copied out of the field's column storage.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub position: Vec3,
    /// Scalar drift speed.
    pub velocity: f32,
    /// Per-axis drift rate. Not normalized.
    pub direction: Vec3,
    pub color: Vec3,
}

/// SoA particle storage bounded by a containment sphere.
///
/// Only `position` changes after creation. `position` and `color` are laid
/// out as `[x, y, z]` triples so they can be handed to a vertex buffer
/// directly through [`positions_flat`](Self::positions_flat) and
/// [`colors_flat`](Self::colors_flat).
pub struct ParticleField {
    count: usize,
    sphere_radius: f32,
    position: Vec<Vec3>,
    velocity: Vec<f32>,
    direction: Vec<Vec3>,
    color: Vec<Vec3>,
    /// Set by `advance`, cleared by whoever uploads the positions.
    dirty: bool,
}

impl ParticleField {
    /// Populate `count` particles inside a sphere of `sphere_radius`.
    ///
    /// Samples are drawn per particle in a fixed order (radius, polar angle,
    /// speed, then the three direction components), so a seeded source
    /// always reproduces the same field.
    pub fn create<R: UniformSource>(count: usize, sphere_radius: f32, rng: &mut R) -> Self {
        let config = FieldConfig {
            particle_count: count,
            sphere_radius,
            ..FieldConfig::default()
        };
        Self::from_config(&config, rng)
    }

    pub fn from_config<R: UniformSource>(config: &FieldConfig, rng: &mut R) -> Self {
        let count = config.particle_count;
        let sphere_radius = config.sphere_radius;

        let mut position = Vec::with_capacity(count);
        let mut velocity = Vec::with_capacity(count);
        let mut direction = Vec::with_capacity(count);
        let mut color = Vec::with_capacity(count);

        for i in 0..count {
            let r = rng.next_unit() * sphere_radius;
            let phi = polar_from_unit(rng.next_unit());
            let theta = spiral_azimuth(count, phi);
            position.push(spherical_to_cartesian(r, theta, phi));

            velocity.push(config.base_speed + rng.next_unit() * config.speed_jitter);

            let dx = rng.next_unit() - 0.5;
            let dy = rng.next_unit() - 0.5;
            let dz = rng.next_unit() - 0.5;
            direction.push(Vec3::new(dx, dy, dz));

            color.push(Tier::for_index(i, count).color());
        }

        Self {
            count,
            sphere_radius,
            position,
            velocity,
            direction,
            color,
            dirty: true,
        }
    }

    /// Build a field from explicit particle state.
    pub fn from_particles<I>(sphere_radius: f32, particles: I) -> Self
    where
        I: IntoIterator<Item = Particle>,
    {
        let particles = particles.into_iter();
        let (lower, _) = particles.size_hint();
        let mut field = Self {
            count: 0,
            sphere_radius,
            position: Vec::with_capacity(lower),
            velocity: Vec::with_capacity(lower),
            direction: Vec::with_capacity(lower),
            color: Vec::with_capacity(lower),
            dirty: true,
        };
        for p in particles {
            field.position.push(p.position);
            field.velocity.push(p.velocity);
            field.direction.push(p.direction);
            field.color.push(p.color);
        }
        field.count = field.position.len();
        field
    }

    /// Move every particle one tick along its drift, respawning any that
    /// leave the containment sphere.
    pub fn advance<R: UniformSource>(&mut self, rng: &mut R) {
        self.advance_counted(rng);
    }

    /// Same as [`advance`](Self::advance), returning how many particles
    /// were respawned this tick.
    pub fn advance_counted<R: UniformSource>(&mut self, rng: &mut R) -> usize {
        self.drift();
        let respawned = self.contain(rng);
        self.dirty = true;
        respawned
    }

    #[cfg(not(feature = "parallel"))]
    fn drift(&mut self) {
        for i in 0..self.count {
            self.position[i] += self.direction[i] * self.velocity[i];
        }
    }

    #[cfg(feature = "parallel")]
    fn drift(&mut self) {
        self.position
            .par_iter_mut()
            .zip(self.direction.par_iter())
            .zip(self.velocity.par_iter())
            .for_each(|((p, d), v)| *p += *d * *v);
    }

    // Sequential so the random stream is consumed in index order.
    fn contain<R: UniformSource>(&mut self, rng: &mut R) -> usize {
        let radius = self.sphere_radius;
        let mut respawned = 0;
        for p in self.position.iter_mut() {
            if p.length() > radius {
                let x = centered(rng.next_unit(), radius);
                let y = centered(rng.next_unit(), radius);
                let z = centered(rng.next_unit(), radius);
                *p = Vec3::new(x, y, z);
                respawned += 1;
            }
        }
        respawned
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn sphere_radius(&self) -> f32 {
        self.sphere_radius
    }

    pub fn particle(&self, index: usize) -> Option<Particle> {
        if index >= self.count {
            return None;
        }
        Some(Particle {
            position: self.position[index],
            velocity: self.velocity[index],
            direction: self.direction[index],
            color: self.color[index],
        })
    }

    pub fn particles(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.count).filter_map(move |i| self.particle(i))
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.position
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocity
    }

    pub fn directions(&self) -> &[Vec3] {
        &self.direction
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.color
    }

    /// Positions as `[x0, y0, z0, x1, ...]`, length `3 * len()`.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.position)
    }

    /// Colors as `[r0, g0, b0, r1, ...]`, length `3 * len()`.
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.color)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty marker and clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Drop all particle storage. The field reads as empty afterwards.
    pub fn release(&mut self) {
        self.count = 0;
        self.position = Vec::new();
        self.velocity = Vec::new();
        self.direction = Vec::new();
        self.color = Vec::new();
        self.dirty = false;
    }
}
