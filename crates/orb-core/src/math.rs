use glam::Vec3;

/// Spherical to Cartesian, with `theta` the azimuth and `phi` the polar angle.
pub fn spherical_to_cartesian(r: f32, theta: f32, phi: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(
        r * theta.cos() * sin_phi,
        r * theta.sin() * sin_phi,
        r * cos_phi,
    )
}

/// Polar angle from a unit sample, `acos(2u - 1)`. Clamped so a sample of
/// exactly 0 or 1 never yields NaN from float error.
pub fn polar_from_unit(u: f32) -> f32 {
    (2.0 * u - 1.0).clamp(-1.0, 1.0).acos()
}

/// Azimuth tied to the polar angle: `sqrt(n * pi) * phi`.
///
/// This winds the initial population along a spiral band rather than
/// covering the sphere uniformly.
pub fn spiral_azimuth(count: usize, phi: f32) -> f32 {
    (count as f32 * std::f32::consts::PI).sqrt() * phi
}

/// Map a unit sample onto `[-half_extent, half_extent)`.
pub fn centered(u: f32, half_extent: f32) -> f32 {
    (u - 0.5) * 2.0 * half_extent
}
