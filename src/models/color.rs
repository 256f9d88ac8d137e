use rand::Rng;
use std::fmt;

/// Marker color. Presentation only; the grid logic never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Uniformly random color.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Rgb {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hex_display() {
        assert_eq!(Rgb::new(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn random_is_seed_deterministic() {
        let a = Rgb::random(&mut StdRng::seed_from_u64(7));
        let b = Rgb::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
