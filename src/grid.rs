// TerraQuest – An environmental word search
// Copyright (C) 2026  The TerraQuest developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use serde::{Serialize, Serializer};

// Placeholder for cells that no word has claimed yet. It never
// survives generation.
pub const BLANK: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    values: Box<[char]>,
    size: u32,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("empty grid")]
    EmptyGrid,
    #[error("grid is not square")]
    NotSquare,
}

// Cell count of a square grid, computed in usize so that it can’t
// overflow the coordinate type
pub(crate) fn n_cells(size: u32) -> usize {
    size as usize * size as usize
}

impl Grid {
    pub fn new(s: &str) -> Result<Grid, Error> {
        let rows = s.lines()
            .map(|line| line.trim())
            .collect::<Vec<_>>();

        // Ignore trailing empty lines
        let n_rows = rows.iter().rposition(|line| !line.is_empty())
            .map(|last| last + 1)
            .unwrap_or(0);

        if n_rows < 1 {
            return Err(Error::EmptyGrid);
        }

        let mut values = Vec::with_capacity(n_rows * n_rows);

        for line in rows[0..n_rows].iter() {
            if line.chars().count() != n_rows {
                return Err(Error::NotSquare);
            }

            values.extend(line.chars());
        }

        Ok(Grid {
            values: values.into_boxed_slice(),
            size: n_rows as u32,
        })
    }

    pub fn blank(size: u32) -> Grid {
        Grid {
            values: vec![BLANK; n_cells(size)].into_boxed_slice(),
            size,
        }
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.size as usize + col as usize
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.size && col < self.size
    }

    pub fn at(&self, row: u32, col: u32) -> char {
        assert!(col < self.size);

        self.values[self.index(row, col)]
    }

    pub fn get(&self, row: u32, col: u32) -> Option<char> {
        self.contains(row, col).then(|| self.at(row, col))
    }

    pub(crate) fn set(&mut self, row: u32, col: u32, letter: char) {
        assert!(col < self.size);

        let index = self.index(row, col);
        self.values[index] = letter;
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|&letter| letter != BLANK)
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.values.chunks(self.size as usize)
            .map(|row| row.iter().collect::<String>())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{}", row)?;
        }

        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_grid() {
        assert_eq!(Grid::new("").unwrap_err(), Error::EmptyGrid);
        assert_eq!(Grid::new("   ").unwrap_err(), Error::EmptyGrid);
        assert_eq!(Grid::new(" \n  ").unwrap_err(), Error::EmptyGrid);
        assert_eq!(&Grid::new("").unwrap_err().to_string(), "empty grid");
    }

    #[test]
    fn not_square() {
        assert_eq!(Grid::new("ab\nc").unwrap_err(), Error::NotSquare);
        assert_eq!(Grid::new("abc\ndef").unwrap_err(), Error::NotSquare);
        assert_eq!(
            &Grid::new("ab").unwrap_err().to_string(),
            "grid is not square",
        );
    }

    #[test]
    fn trailing_empty_lines() {
        let grid = Grid::new("AB\nCD\n\n   \n").unwrap();

        assert_eq!(grid.size(), 2);
        assert_eq!(grid.at(0, 0), 'A');
        assert_eq!(grid.at(0, 1), 'B');
        assert_eq!(grid.at(1, 0), 'C');
        assert_eq!(grid.at(1, 1), 'D');
    }

    #[test]
    fn bounds() {
        let grid = Grid::new("AB\nCD").unwrap();

        assert_eq!(grid.get(1, 1), Some('D'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(u32::MAX, 0), None);
    }

    #[test]
    fn blank() {
        let mut grid = Grid::blank(3);

        assert_eq!(grid.size(), 3);
        assert!(!grid.is_complete());
        assert_eq!(&grid.to_string(), "...\n...\n...");

        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, 'X');
            }
        }

        assert!(grid.is_complete());
    }

    #[test]
    fn display_round_trip() {
        let grid = Grid::new("SUN\nSKY\nAIR").unwrap();

        assert_eq!(&grid.to_string(), "SUN\nSKY\nAIR");
        assert_eq!(Grid::new(&grid.to_string()).unwrap(), grid);
    }

    #[test]
    fn cell_count() {
        assert_eq!(n_cells(4), 16);
        assert_eq!(n_cells(70_000), 4_900_000_000);
        assert_eq!(Grid::blank(3).rows().count(), 3);
    }
}
