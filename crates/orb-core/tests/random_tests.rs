use orb_core::random::*;

#[test]
fn test_seeded_streams_repeat() {
    let mut a = seeded(1234);
    let mut b = seeded(1234);
    for _ in 0..1000 {
        assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
    }
}

#[test]
fn test_unit_range() {
    let mut rng = seeded(77);
    for _ in 0..10_000 {
        let u = rng.next_unit();
        assert!(u >= 0.0 && u < 1.0, "sample {u} out of [0, 1)");
    }
}

#[test]
fn test_replay_wraps_in_order() {
    let mut rng = Replay::new(vec![0.1, 0.2, 0.3]);
    let drawn: Vec<f32> = (0..7).map(|_| rng.next_unit()).collect();
    assert_eq!(drawn, vec![0.1, 0.2, 0.3, 0.1, 0.2, 0.3, 0.1]);
    assert_eq!(rng.drawn(), 7);
}

#[test]
fn test_replay_clamps_into_unit_range() {
    let mut rng = Replay::new(vec![-1.0, 1.0, 5.0, f32::NAN]);
    assert_eq!(rng.next_unit(), 0.0);
    let hi = rng.next_unit();
    assert!(hi < 1.0 && hi > 0.99, "clamped sample {hi}");
    assert!(rng.next_unit() < 1.0);
    assert_eq!(rng.next_unit(), 0.0);
}

#[test]
fn test_empty_replay_yields_zero() {
    let mut rng = Replay::new(Vec::new());
    assert_eq!(rng.next_unit(), 0.0);
    assert_eq!(rng.next_unit(), 0.0);
}

#[test]
fn test_mut_ref_forwards() {
    fn draw<S: UniformSource>(mut s: S) -> f32 {
        s.next_unit()
    }
    let mut rng = Replay::constant(0.25);
    assert_eq!(draw(&mut rng), 0.25);
    assert_eq!(rng.drawn(), 1);
}
