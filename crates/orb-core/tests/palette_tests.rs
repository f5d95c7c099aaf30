use glam::Vec3;
use orb_core::palette::*;

#[test]
fn test_tier_boundaries_default_population() {
    assert_eq!(Tier::for_index(0, 5000), Tier::DarkGray);
    assert_eq!(Tier::for_index(1249, 5000), Tier::DarkGray);
    assert_eq!(Tier::for_index(1250, 5000), Tier::White);
    assert_eq!(Tier::for_index(2499, 5000), Tier::White);
    assert_eq!(Tier::for_index(2500, 5000), Tier::Cyan);
    assert_eq!(Tier::for_index(4999, 5000), Tier::Cyan);
}

#[test]
fn test_tier_thresholds_floor() {
    // 7 / 4 = 1, 7 / 2 = 3
    let tiers: Vec<Tier> = (0..7).map(|i| Tier::for_index(i, 7)).collect();
    assert_eq!(
        tiers,
        vec![
            Tier::DarkGray,
            Tier::White,
            Tier::White,
            Tier::Cyan,
            Tier::Cyan,
            Tier::Cyan,
            Tier::Cyan,
        ]
    );
}

#[test]
fn test_census_matches_for_index() {
    for n in 0..64 {
        let mut counts = [0usize; 3];
        for i in 0..n {
            counts[Tier::for_index(i, n) as usize] += 1;
        }
        assert_eq!(counts, Tier::census(n), "census mismatch for n={n}");
        assert_eq!(counts.iter().sum::<usize>(), n);
    }
    assert_eq!(Tier::census(5000), [1250, 1250, 2500]);
}

#[test]
fn test_tier_colors() {
    assert_eq!(Tier::DarkGray.color(), rgb_from_hex(0xA9A9A9));
    assert_eq!(Tier::White.color(), Vec3::ONE);
    assert_eq!(Tier::Cyan.color(), Vec3::new(0.0, 1.0, 1.0));
    for tier in [Tier::DarkGray, Tier::White, Tier::Cyan] {
        let c = tier.color();
        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        assert_eq!(Tier::from_color(c), Some(tier));
    }
}

#[test]
fn test_rgb_from_hex() {
    assert_eq!(rgb_from_hex(0x000000), Vec3::ZERO);
    assert_eq!(rgb_from_hex(0xFF0000), Vec3::X);
    let c = rgb_from_hex(0x484E61);
    assert!((c.x - 72.0 / 255.0).abs() < 1e-6);
    assert!((c.y - 78.0 / 255.0).abs() < 1e-6);
    assert!((c.z - 97.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_unknown_color_has_no_tier() {
    assert_eq!(Tier::from_color(Vec3::new(1.0, 0.0, 0.0)), None);
}
