use crate::models::Grid;

/// Turns a grid into every straight run of letters a hidden word could
/// sit in. Each run is emitted forward and then reversed, so a plain
/// substring test covers both reading directions.
pub struct ScanLineExtractor;

impl ScanLineExtractor {
    /// All scan lines: horizontal, then vertical, then diagonal.
    pub fn extract(grid: &Grid) -> Vec<String> {
        let mut lines = Vec::with_capacity(2 * grid.height() + 6 * grid.width());
        lines.extend(Self::horizontal(grid));
        lines.extend(Self::vertical(grid));
        lines.extend(Self::diagonal(grid));
        lines
    }

    /// Each row left-to-right followed by its reverse, row by row.
    pub fn horizontal(grid: &Grid) -> Vec<String> {
        grid.rows()
            .iter()
            .flat_map(|row| with_reverse(row.iter().collect()))
            .collect()
    }

    /// Each column top-to-bottom followed by its reverse, column by column.
    pub fn vertical(grid: &Grid) -> Vec<String> {
        (0..grid.width())
            .flat_map(|col| with_reverse(grid.rows().iter().map(|row| row[col]).collect()))
            .collect()
    }

    /// Diagonals anchored on the top row.
    ///
    /// For each starting column `c` this yields, in order: the down-right
    /// run from `(0, c)`, its reverse, the down-left run from
    /// `(0, width - 1 - c)`, and its reverse. Runs are `width - c` cells
    /// long, cut short by the bottom edge on grids wider than they are
    /// tall. Diagonals that start on the left or right edge below the top
    /// row are not produced.
    pub fn diagonal(grid: &Grid) -> Vec<String> {
        let width = grid.width();
        let mut lines = Vec::with_capacity(4 * width);

        for c in 0..width {
            let len = (width - c).min(grid.height());

            let down_right: String = (0..len).map(|i| grid[i][c + i]).collect();
            lines.extend(with_reverse(down_right));

            let start = width - 1 - c;
            let down_left: String = (0..len).map(|i| grid[i][start - i]).collect();
            lines.extend(with_reverse(down_left));
        }

        lines
    }
}

fn with_reverse(line: String) -> [String; 2] {
    let reversed = line.chars().rev().collect();
    [line, reversed]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::letters::letter_at_index;

    /// 9x9 grid where every row reads "abcdefghi"
    fn alphabet_rows() -> Grid {
        let rows = (0..9)
            .map(|_| (0..9).map(letter_at_index).collect())
            .collect();
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_horizontal_row_and_reverse() {
        let mut grid = Grid::from_strs(&["zzzzzzzzz"; 9]).unwrap();
        for (col, letter) in "abcdefghi".chars().enumerate() {
            grid.set(4, col, letter);
        }

        let lines = ScanLineExtractor::horizontal(&grid);
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[8], "abcdefghi");
        assert_eq!(lines[9], "ihgfedcba");
    }

    #[test]
    fn test_vertical_uniform_column() {
        let grid = alphabet_rows();
        let lines = ScanLineExtractor::vertical(&grid);
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "aaaaaaaaa");
        assert_eq!(lines[1], "aaaaaaaaa");
        assert_eq!(lines[16], "iiiiiiiii");
    }

    #[test]
    fn test_vertical_reads_top_to_bottom() {
        let grid = Grid::from_strs(&["ab", "cd", "ef"]).unwrap();
        let lines = ScanLineExtractor::vertical(&grid);
        assert_eq!(lines, vec!["ace", "eca", "bdf", "fdb"]);
    }

    #[test]
    fn test_diagonal_families() {
        let grid = alphabet_rows();
        let lines = ScanLineExtractor::diagonal(&grid);
        assert_eq!(lines.len(), 36);

        // starting column 0
        assert_eq!(lines[0], "abcdefghi");
        assert_eq!(lines[1], "ihgfedcba");
        assert_eq!(lines[2], "ihgfedcba");
        assert_eq!(lines[3], "abcdefghi");

        // starting column 1
        assert_eq!(lines[4], "bcdefghi");
        assert_eq!(lines[5], "ihgfedcb");
        assert_eq!(lines[6], "hgfedcba");
        assert_eq!(lines[7], "abcdefgh");

        // starting column 8
        assert_eq!(&lines[32..], ["i", "i", "a", "a"]);
    }

    #[test]
    fn test_diagonal_lengths_shrink() {
        let grid = alphabet_rows();
        let lines = ScanLineExtractor::diagonal(&grid);
        for (c, chunk) in lines.chunks(4).enumerate() {
            assert!(chunk.iter().all(|line| line.len() == 9 - c));
        }
    }

    #[test]
    fn test_diagonal_stops_at_bottom_edge() {
        let grid = Grid::from_strs(&["abcd", "efgh"]).unwrap();
        let lines = ScanLineExtractor::diagonal(&grid);
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "af");
        assert_eq!(lines[2], "dg");
        assert_eq!(lines[12], "d");
        assert_eq!(lines[14], "a");
    }

    #[test]
    fn test_diagonal_on_tall_grid() {
        let grid = Grid::from_strs(&["ab", "cd", "ef", "gh"]).unwrap();
        let lines = ScanLineExtractor::diagonal(&grid);
        assert_eq!(lines, vec!["ad", "da", "bc", "cb", "b", "b", "a", "a"]);
    }

    #[test]
    fn test_left_edge_diagonals_not_scanned() {
        // "xyz" runs down-right from (1, 0); no top-row diagonal covers it
        let grid = Grid::from_strs(&["qqqq", "xqqq", "qyqq", "qqzq"]).unwrap();
        let lines = ScanLineExtractor::extract(&grid);
        assert!(!lines.iter().any(|line| line.contains("xyz")));
        assert!(!lines.iter().any(|line| line.contains("zyx")));
    }

    #[test]
    fn test_extract_counts() {
        let grid = Grid::from_strs(&["abc", "def"]).unwrap();
        let lines = ScanLineExtractor::extract(&grid);
        assert_eq!(lines.len(), 2 * 2 + 2 * 3 + 4 * 3);
        assert_eq!(lines[0], "abc");
        assert_eq!(lines[4], "ad");
    }
}
