// seed.rs - Random initial state

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LifeError, Result};

/// RNG for seeding: reproducible when `seed` is given, from OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Row-major `width * height` cells, each alive when a draw from `0..=100`
/// falls below `chance_of_life`.
pub fn random_cells<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    chance_of_life: u8,
    rng: &mut R,
) -> Result<Vec<bool>> {
    if chance_of_life > 100 {
        return Err(LifeError::InvalidChance(chance_of_life));
    }
    Ok((0..width * height)
        .map(|_| rng.random_range(0..=100u8) < chance_of_life)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn same_seed_same_cells() {
        let a = random_cells(32, 16, 25, &mut seeded_rng(Some(7))).unwrap();
        let b = random_cells(32, 16, 25, &mut seeded_rng(Some(7))).unwrap();
        assert_eq!(a.len(), 512);
        assert_eq!(a, b);
    }

    #[test_log::test]
    fn zero_chance_is_empty() {
        let cells = random_cells(16, 16, 0, &mut seeded_rng(Some(1))).unwrap();
        assert!(cells.iter().all(|&alive| !alive));
    }

    #[test_log::test]
    fn density_roughly_matches_chance() {
        let cells = random_cells(100, 100, 25, &mut seeded_rng(Some(42))).unwrap();
        let alive = cells.iter().filter(|&&c| c).count();
        // 25 of 101 outcomes; loose bounds
        assert!((2000..3000).contains(&alive), "{} alive cells", alive);
    }

    #[test_log::test]
    fn rejects_chance_above_hundred() {
        assert!(matches!(
            random_cells(4, 4, 150, &mut seeded_rng(None)),
            Err(LifeError::InvalidChance(150))
        ));
    }
}
