//! Random initial placement for particles.
//!
//! The only randomized part of the simulation. Everything downstream is
//! deterministic given the particles produced here, so tests seed the RNG.

use crate::torus::Surface;
use glam::DVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Create the simulation RNG.
///
/// With `Some(seed)` runs are reproducible. With `None` the seed comes from
/// the system clock, so each program execution differs.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    let seed = seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });
    SmallRng::seed_from_u64(seed)
}

/// Uniformly random point in `[0, width) x [0, height)`.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, surface: Surface) -> DVec2 {
    DVec2::new(
        rng.gen_range(0.0..surface.width()),
        rng.gen_range(0.0..surface.height()),
    )
}

/// Velocity with each axis uniform in `[-max_speed, max_speed]`.
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, max_speed: f64) -> DVec2 {
    let max_speed = max_speed.abs();
    DVec2::new(
        rng.gen_range(-max_speed..=max_speed),
        rng.gen_range(-max_speed..=max_speed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_reproducible() {
        let mut a = seeded_rng(Some(7));
        let mut b = seeded_rng(Some(7));
        for _ in 0..10 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }

    #[test]
    fn test_random_position_in_bounds() {
        let surface = Surface::new(3.0, 0.5).unwrap();
        let mut rng = seeded_rng(Some(1));
        for _ in 0..1000 {
            assert!(surface.contains(random_position(&mut rng, surface)));
        }
    }

    #[test]
    fn test_random_velocity_range() {
        let mut rng = seeded_rng(Some(2));
        for _ in 0..1000 {
            let v = random_velocity(&mut rng, 0.1);
            assert!(v.x.abs() <= 0.1 && v.y.abs() <= 0.1);
        }
    }

    #[test]
    fn test_zero_speed_is_still() {
        let mut rng = seeded_rng(Some(3));
        assert_eq!(random_velocity(&mut rng, 0.0), DVec2::ZERO);
    }
}
