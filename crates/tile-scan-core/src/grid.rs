//! The 4x4 board model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GRID_SIZE;

/// Tile values read off the board, indexed `[row][column]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// An all-empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    pub fn rows(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Full report as printed by the binary, header included
    pub fn render(&self) -> String {
        format!("Result:\n{}", self)
    }
}

impl From<[[u32; GRID_SIZE]; GRID_SIZE]> for Grid {
    fn from(cells: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }
}

/// One line per row, every value followed by a tab.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                write!(f, "{}\t", self.cells[row][col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert!(grid.rows().iter().flatten().all(|&v| v == 0));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new();
        grid.set(1, 2, 128);
        assert_eq!(grid.get(1, 2), 128);
        assert_eq!(grid.get(2, 1), 0);
        assert_eq!(grid.rows()[1][2], 128);
    }

    #[test]
    fn test_render_empty() {
        let expected = "Result:\n\
                        0\t0\t0\t0\t\n\
                        0\t0\t0\t0\t\n\
                        0\t0\t0\t0\t\n\
                        0\t0\t0\t0\t\n";
        assert_eq!(Grid::new().render(), expected);
    }

    #[test]
    fn test_render_row_major() {
        let grid = Grid::from([
            [2, 4, 8, 16],
            [0, 0, 0, 0],
            [32, 0, 0, 0],
            [0, 0, 0, 256],
        ]);
        let rendered = grid.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Result:");
        assert_eq!(lines[1], "2\t4\t8\t16\t");
        assert_eq!(lines[3], "32\t0\t0\t0\t");
        assert_eq!(lines[4], "0\t0\t0\t256\t");
        for line in &lines[1..] {
            let fields: Vec<&str> = line.split('\t').filter(|f| !f.is_empty()).collect();
            assert_eq!(fields.len(), 4);
            assert!(fields.iter().all(|f| f.parse::<u32>().is_ok()));
        }
    }
}
