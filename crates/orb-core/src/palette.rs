use glam::Vec3;

/// Convert a `0xRRGGBB` value into sRGB components in `[0, 1]`.
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// CSS `darkgray`, `#A9A9A9`.
pub const DARK_GRAY: Vec3 = Vec3::new(169.0 / 255.0, 169.0 / 255.0, 169.0 / 255.0);
pub const WHITE: Vec3 = Vec3::ONE;
/// CSS `cyan`, `#00FFFF`.
pub const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0);

/// Color band a particle belongs to, decided by its index.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tier {
    DarkGray = 0,
    White = 1,
    Cyan = 2,
}

impl Tier {
    /// `[0, n/4)` dark gray, `[n/4, n/2)` white, the rest cyan.
    /// Thresholds use integer division.
    pub fn for_index(index: usize, count: usize) -> Tier {
        if index < count / 4 {
            Tier::DarkGray
        } else if index < count / 2 {
            Tier::White
        } else {
            Tier::Cyan
        }
    }

    pub fn color(self) -> Vec3 {
        match self {
            Tier::DarkGray => DARK_GRAY,
            Tier::White => WHITE,
            Tier::Cyan => CYAN,
        }
    }

    /// Reverse lookup from a stored color.
    pub fn from_color(color: Vec3) -> Option<Tier> {
        [Tier::DarkGray, Tier::White, Tier::Cyan]
            .into_iter()
            .find(|t| t.color() == color)
    }

    /// Size of each tier for a population of `count`, as
    /// `[dark_gray, white, cyan]`.
    pub fn census(count: usize) -> [usize; 3] {
        let quarter = count / 4;
        let half = count / 2;
        [quarter, half - quarter, count - half]
    }
}
