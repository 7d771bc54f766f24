use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::models::Grid;

/// Result of one run, ready for printing
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub count: usize,
    /// Sorted so output is stable between runs
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Vec<String>>,
}

impl SearchReport {
    pub fn new(found: &HashSet<String>) -> Self {
        let mut words: Vec<String> = found.iter().cloned().collect();
        words.sort();

        Self {
            count: words.len(),
            words,
            grid: None,
        }
    }

    pub fn with_grid(mut self, grid: &Grid) -> Self {
        self.grid = Some(grid.rows().iter().map(|row| row.iter().collect()).collect());
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(grid) = &self.grid {
            for row in grid {
                let spaced: Vec<String> = row.chars().map(String::from).collect();
                writeln!(f, "{}", spaced.join(" "))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Found {} words", self.count)?;
        for word in &self.words {
            writeln!(f, "{}", word)?;
        }
        Ok(())
    }
}
