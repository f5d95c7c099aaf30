use orb_core::config::{FieldConfig, SceneConfig};
use orb_core::lifecycle::ParticleSystem;
use orb_core::random;
use orb_core::scene::Scene;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

// `println!`-style logging to the browser console.
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into())
    }
}

macro_rules! warn {
    ( $( $t:tt )* ) => {
        web_sys::console::warn_1(&format!( $( $t )* ).into())
    }
}

/// Particle orb exposed to the page: the JS side owns the animation frame
/// loop and the three.js objects, and reads buffers straight out of wasm
/// memory through the `*_ptr` / `*_len` pairs.
#[wasm_bindgen]
pub struct ParticleScene {
    system: ParticleSystem<ChaCha8Rng>,
    scene: Scene,
}

#[wasm_bindgen]
impl ParticleScene {
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: usize, sphere_radius: f32) -> ParticleScene {
        Self::build(particle_count, sphere_radius, random::from_entropy())
    }

    /// Same as the constructor but reproducible.
    #[wasm_bindgen]
    pub fn with_seed(particle_count: usize, sphere_radius: f32, seed: u32) -> ParticleScene {
        Self::build(particle_count, sphere_radius, random::seeded(seed as u64))
    }

    /// Advance one tick. Returns the time spent in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self) -> f32 {
        let start = js_sys::Date::now();
        if !self.system.advance() {
            return 0.0;
        }
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.system.field().len()
    }

    #[wasm_bindgen]
    pub fn sphere_radius(&self) -> f32 {
        self.system.field().sphere_radius()
    }

    #[wasm_bindgen]
    pub fn respawn_count(&self) -> f64 {
        self.system.stats().respawns as f64
    }

    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.system.field().positions_flat().as_ptr()
    }

    #[wasm_bindgen]
    pub fn positions_len(&self) -> usize {
        self.system.field().positions_flat().len()
    }

    /// `true` when positions changed since the last call; the page sets
    /// `needsUpdate` on its position attribute in response.
    #[wasm_bindgen]
    pub fn take_positions_dirty(&mut self) -> bool {
        self.system.field_mut().take_dirty()
    }

    #[wasm_bindgen]
    pub fn colors_ptr(&self) -> *const f32 {
        self.system.field().colors_flat().as_ptr()
    }

    #[wasm_bindgen]
    pub fn colors_len(&self) -> usize {
        self.system.field().colors_flat().len()
    }

    #[wasm_bindgen]
    pub fn ring_vertices_ptr(&self) -> *const f32 {
        self.scene.ring.vertices_flat().as_ptr()
    }

    #[wasm_bindgen]
    pub fn ring_vertices_len(&self) -> usize {
        self.scene.ring.vertices_flat().len()
    }

    #[wasm_bindgen]
    pub fn ring_indices_ptr(&self) -> *const u32 {
        self.scene.ring.indices.as_ptr()
    }

    #[wasm_bindgen]
    pub fn ring_indices_len(&self) -> usize {
        self.scene.ring.indices.len()
    }

    #[wasm_bindgen]
    pub fn ring_inner_radius(&self) -> f32 {
        self.scene.ring.inner_radius
    }

    #[wasm_bindgen]
    pub fn ring_outer_radius(&self) -> f32 {
        self.scene.ring.outer_radius
    }

    #[wasm_bindgen]
    pub fn sprite_ptr(&self) -> *const u8 {
        self.scene.sprite.pixels.as_ptr()
    }

    #[wasm_bindgen]
    pub fn sprite_len(&self) -> usize {
        self.scene.sprite.pixels.len()
    }

    #[wasm_bindgen]
    pub fn sprite_size(&self) -> u32 {
        self.scene.sprite.size
    }

    #[wasm_bindgen]
    pub fn point_size(&self) -> f32 {
        self.scene.point_size
    }

    #[wasm_bindgen]
    pub fn camera_fov(&self) -> f32 {
        self.scene.camera.fov_deg
    }

    #[wasm_bindgen]
    pub fn camera_near(&self) -> f32 {
        self.scene.camera.near
    }

    #[wasm_bindgen]
    pub fn camera_far(&self) -> f32 {
        self.scene.camera.far
    }

    #[wasm_bindgen]
    pub fn camera_distance(&self) -> f32 {
        self.scene.camera.position.length()
    }

    #[wasm_bindgen]
    pub fn orbit_damping(&self) -> f32 {
        self.scene.camera.orbit_damping
    }

    #[wasm_bindgen]
    pub fn orbit_zoom_speed(&self) -> f32 {
        self.scene.camera.orbit_zoom_speed
    }

    /// Column-major view-projection matrix for the fixed camera.
    #[wasm_bindgen]
    pub fn view_projection(&self, aspect: f32) -> Vec<f32> {
        self.scene.camera.view_projection(aspect).to_cols_array().to_vec()
    }

    /// Release the particle buffers. The page must cancel its animation
    /// frame before or at this call; later `step()` calls do nothing.
    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        if !self.system.is_disposed() {
            self.system.dispose();
            log!("ParticleScene disposed after {} ticks", self.system.stats().ticks);
        }
    }

    #[wasm_bindgen]
    pub fn is_disposed(&self) -> bool {
        self.system.is_disposed()
    }
}

impl ParticleScene {
    fn build(particle_count: usize, sphere_radius: f32, rng: ChaCha8Rng) -> ParticleScene {
        let sphere_radius = sanitize_radius(sphere_radius);
        let config = FieldConfig {
            particle_count,
            sphere_radius,
            ..FieldConfig::default()
        };
        let system = ParticleSystem::create(&config, rng);
        let scene = Scene::new(&SceneConfig::default());

        log!(
            "ParticleScene created: {} particles, radius {}",
            particle_count,
            sphere_radius
        );

        ParticleScene { system, scene }
    }
}

fn sanitize_radius(radius: f32) -> f32 {
    if radius.is_finite() && radius >= 0.0 {
        radius
    } else {
        warn!("invalid sphere radius {}, using 0", radius);
        0.0
    }
}
