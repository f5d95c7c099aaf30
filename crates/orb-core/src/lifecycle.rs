use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::random::UniformSource;

/// Consumer of the particle buffers, typically a GPU vertex buffer pair.
pub trait RenderTarget {
    /// Receives `[x, y, z]` triples, `3 * N` floats.
    fn upload_positions(&mut self, positions: &[f32]);
    /// Receives `[r, g, b]` triples, `3 * N` floats.
    fn upload_colors(&mut self, colors: &[f32]);
    /// Draw the current frame.
    fn present(&mut self);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    /// Created, not yet advanced.
    Ready,
    Running,
    /// Buffers released; further ticks are ignored.
    Disposed,
}

#[derive(Clone, Copy, Default, Debug)]
pub struct FrameStats {
    pub ticks: u64,
    pub respawns: u64,
    /// Respawns during the most recent tick.
    pub last_respawns: usize,
}

/// Owns a particle field and its random source for the lifetime of a
/// mounted view.
pub struct ParticleSystem<R: UniformSource> {
    field: ParticleField,
    rng: R,
    state: State,
    stats: FrameStats,
    colors_uploaded: bool,
}

impl<R: UniformSource> ParticleSystem<R> {
    pub fn create(config: &FieldConfig, mut rng: R) -> Self {
        let field = ParticleField::from_config(config, &mut rng);
        Self {
            field,
            rng,
            state: State::Ready,
            stats: FrameStats::default(),
            colors_uploaded: false,
        }
    }

    /// Advance one tick. Returns `false` once disposed.
    pub fn advance(&mut self) -> bool {
        if self.state == State::Disposed {
            return false;
        }
        let respawned = self.field.advance_counted(&mut self.rng);
        self.state = State::Running;
        self.stats.ticks += 1;
        self.stats.respawns += respawned as u64;
        self.stats.last_respawns = respawned;
        true
    }

    /// Push pending buffers to `target`. Colors go up once; positions only
    /// when the field has moved since the last sync.
    pub fn sync<T: RenderTarget + ?Sized>(&mut self, target: &mut T) {
        if self.state == State::Disposed {
            return;
        }
        if !self.colors_uploaded {
            target.upload_colors(self.field.colors_flat());
            self.colors_uploaded = true;
        }
        if self.field.take_dirty() {
            target.upload_positions(self.field.positions_flat());
        }
    }

    /// One animation frame: advance, then sync, then present.
    pub fn frame<T: RenderTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        if !self.advance() {
            return false;
        }
        self.sync(target);
        target.present();
        true
    }

    /// Release the field. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.state == State::Disposed {
            return;
        }
        self.field.release();
        self.state = State::Disposed;
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.state == State::Disposed
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }
}
