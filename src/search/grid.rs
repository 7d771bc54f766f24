use rand::Rng;

use crate::{models::Grid, utils::letters::random_letter};

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a `width` x `height` grid of uniformly random lowercase letters.
    ///
    /// Both dimensions must already be validated as positive.
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero.
    pub fn generate(width: usize, height: usize, rng: &mut impl Rng) -> Grid {
        let mut rows = Vec::with_capacity(height);

        for _ in 0..height {
            let mut row = Vec::with_capacity(width);
            for _ in 0..width {
                row.push(random_letter(rng));
            }
            rows.push(row);
        }

        Grid::from_rows(rows).unwrap_or_else(|| {
            unreachable!("grid dimensions must be positive, got {width}x{height}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_grid_generation() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridGenerator::generate(15, 15, &mut rng);
        assert_eq!(grid.height(), 15);
        assert_eq!(grid.width(), 15);
        assert!(grid.rows().iter().all(|row| row.len() == 15));
    }

    #[test]
    fn test_grid_shapes() {
        let mut rng = StdRng::seed_from_u64(2);
        for (width, height) in [(1, 100), (100, 1), (100, 100), (1, 1)] {
            let grid = GridGenerator::generate(width, height, &mut rng);
            assert_eq!(grid.rows().len(), height);
            assert_eq!(grid.rows()[0].len(), width);
        }
    }

    #[test]
    fn test_grid_letters_are_lowercase() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = GridGenerator::generate(30, 20, &mut rng);
        assert!(grid.rows().iter().flatten().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = GridGenerator::generate(12, 9, &mut StdRng::seed_from_u64(42));
        let b = GridGenerator::generate(12, 9, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
