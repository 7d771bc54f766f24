use std::ops::Index;

/// Rectangular matrix of letters addressed as `grid[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from rows of equal, non-zero length.
    ///
    /// Returns `None` when there are no rows, a row is empty, or the rows
    /// are ragged.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            height: rows.len(),
            width,
            rows,
        })
    }

    /// Build a grid from one string per row.
    pub fn from_strs(rows: &[&str]) -> Option<Self> {
        Self::from_rows(rows.iter().map(|row| row.chars().collect()).collect())
    }

    /// Number of columns (the x axis)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (the y axis)
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Overwrite a single cell. Out of bounds writes are ignored and
    /// reported as `false`.
    pub fn set(&mut self, row: usize, col: usize, letter: char) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = letter;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }
}

impl Index<usize> for Grid {
    type Output = [char];

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}
