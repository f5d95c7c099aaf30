use orb_core::config::FieldConfig;
use orb_core::lifecycle::{ParticleSystem, RenderTarget, State};
use orb_core::random::seeded;

#[derive(Default)]
struct Recorder {
    events: Vec<&'static str>,
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl RenderTarget for Recorder {
    fn upload_positions(&mut self, positions: &[f32]) {
        self.events.push("positions");
        self.positions = positions.to_vec();
    }

    fn upload_colors(&mut self, colors: &[f32]) {
        self.events.push("colors");
        self.colors = colors.to_vec();
    }

    fn present(&mut self) {
        self.events.push("present");
    }
}

fn config(count: usize) -> FieldConfig {
    FieldConfig {
        particle_count: count,
        ..FieldConfig::default()
    }
}

#[test]
fn test_create_is_ready() {
    let system = ParticleSystem::create(&config(100), seeded(1));
    assert_eq!(system.state(), State::Ready);
    assert_eq!(system.field().len(), 100);
    assert_eq!(system.field().sphere_radius(), 2.0);
    assert_eq!(system.stats().ticks, 0);
}

#[test]
fn test_frame_updates_then_renders() {
    let mut system = ParticleSystem::create(&config(50), seeded(2));
    let mut target = Recorder::default();

    assert!(system.frame(&mut target));
    assert_eq!(target.events, vec!["colors", "positions", "present"]);
    assert_eq!(system.state(), State::Running);
    assert_eq!(target.positions, system.field().positions_flat());
    assert_eq!(target.colors.len(), 150);

    target.events.clear();
    assert!(system.frame(&mut target));
    assert_eq!(target.events, vec!["positions", "present"]);
    assert_eq!(system.stats().ticks, 2);
}

#[test]
fn test_sync_skips_clean_positions() {
    let mut system = ParticleSystem::create(&config(10), seeded(3));
    let mut target = Recorder::default();

    system.sync(&mut target);
    assert_eq!(target.events, vec!["colors", "positions"]);

    target.events.clear();
    system.sync(&mut target);
    assert!(target.events.is_empty(), "clean field re-uploaded: {:?}", target.events);

    system.advance();
    system.sync(&mut target);
    assert_eq!(target.events, vec!["positions"]);
}

#[test]
fn test_dispose_stops_ticks() {
    let mut system = ParticleSystem::create(&config(10), seeded(4));
    let mut target = Recorder::default();
    system.frame(&mut target);

    system.dispose();
    assert_eq!(system.state(), State::Disposed);
    assert!(system.is_disposed());
    assert!(system.field().is_empty());

    target.events.clear();
    assert!(!system.advance());
    assert!(!system.frame(&mut target));
    system.sync(&mut target);
    assert!(target.events.is_empty());
    assert_eq!(system.stats().ticks, 1);

    // second dispose is a no-op
    system.dispose();
    assert_eq!(system.state(), State::Disposed);
}

#[test]
fn test_respawn_stats_zero_radius() {
    let cfg = FieldConfig {
        particle_count: 10,
        sphere_radius: 0.0,
        ..FieldConfig::default()
    };
    let mut system = ParticleSystem::create(&cfg, seeded(5));

    for _ in 0..3 {
        system.advance();
        assert_eq!(system.stats().last_respawns, 10);
    }
    assert_eq!(system.stats().respawns, 30);
}

#[test]
fn test_empty_system_runs() {
    let mut system = ParticleSystem::create(&config(0), seeded(6));
    let mut target = Recorder::default();

    assert!(system.frame(&mut target));
    assert!(target.positions.is_empty());
    assert!(target.colors.is_empty());
    system.dispose();
}

#[test]
fn test_seeded_systems_match() {
    let mut a = ParticleSystem::create(&config(200), seeded(9));
    let mut b = ParticleSystem::create(&config(200), seeded(9));
    for _ in 0..25 {
        a.advance();
        b.advance();
    }
    assert_eq!(a.field().positions_flat(), b.field().positions_flat());
    assert_eq!(a.stats().respawns, b.stats().respawns);
}
