// Word search engine modules

pub mod grid;
pub mod matcher;
pub mod scan;

use std::collections::HashSet;

use rand::Rng;

pub use grid::GridGenerator;
pub use matcher::WordMatcher;
pub use scan::ScanLineExtractor;

use crate::{dictionary::Dictionary, models::Grid};

/// A dictionary paired with one grid and the words found in it so far.
pub struct WordSearch {
    dictionary: Dictionary,
    grid: Grid,
    matcher: WordMatcher,
}

impl WordSearch {
    pub fn new(dictionary: Dictionary, grid: Grid) -> Self {
        Self {
            dictionary,
            grid,
            matcher: WordMatcher::new(),
        }
    }

    /// Set up a search over a freshly generated random grid
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero.
    pub fn generate(dictionary: Dictionary, width: usize, height: usize, rng: &mut impl Rng) -> Self {
        Self::new(dictionary, GridGenerator::generate(width, height, rng))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Swap in a new grid. Words already found are kept.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Search the current grid and return every word found by this object
    /// so far, including results from earlier calls.
    pub fn find_words(&mut self) -> &HashSet<String> {
        let lines = ScanLineExtractor::extract(&self.grid);
        tracing::debug!(
            "Searching {} scan lines for {} words",
            lines.len(),
            self.dictionary.len()
        );

        let found = self.matcher.find(self.dictionary.words(), &lines);
        tracing::debug!("{} words found", found.len());
        found
    }

    pub fn found(&self) -> &HashSet<String> {
        self.matcher.found()
    }

    pub fn clear_found(&mut self) {
        self.matcher.clear();
    }
}
