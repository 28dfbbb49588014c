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

use super::grid::Grid;
use super::directions;

// The in-progress drag. The first cell is the anchor and the path is
// always a straight line from it, either along a row, along a column
// or along an exact diagonal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    cells: Vec<(u32, u32)>,
}

// Returns the unit step and the number of steps needed to get from
// `from` to `to`, or None if the two cells aren’t on a straight line
pub fn line_between(
    from: (u32, u32),
    to: (u32, u32),
) -> Option<((i32, i32), u32)> {
    let row_diff = to.0 as i64 - from.0 as i64;
    let col_diff = to.1 as i64 - from.1 as i64;

    if row_diff != 0 && col_diff != 0 && row_diff.abs() != col_diff.abs() {
        return None;
    }

    let steps = row_diff.abs().max(col_diff.abs());

    Some((
        (row_diff.signum() as i32, col_diff.signum() as i32),
        steps as u32,
    ))
}

impl SelectionPath {
    pub fn new() -> SelectionPath {
        SelectionPath::default()
    }

    pub fn begin(&mut self, grid: &Grid, row: u32, col: u32) -> bool {
        if !grid.contains(row, col) {
            return false;
        }

        self.cells.clear();
        self.cells.push((row, col));

        true
    }

    // Replaces the path with the line from the anchor to the given
    // cell. Anything that isn’t a straight line leaves the path alone.
    pub fn extend(&mut self, grid: &Grid, row: u32, col: u32) -> bool {
        let Some(anchor) = self.anchor()
        else {
            return false;
        };

        if !grid.contains(row, col) {
            return false;
        }

        let Some((offset, steps)) = line_between(anchor, (row, col))
        else {
            return false;
        };

        self.cells.clear();
        self.cells.extend((0..=steps).map(|i| {
            directions::project(anchor.0, anchor.1, offset, i)
        }));

        true
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn take(&mut self) -> SelectionPath {
        std::mem::take(self)
    }

    pub fn anchor(&self) -> Option<(u32, u32)> {
        self.cells.first().copied()
    }

    pub fn cells(&self) -> &[(u32, u32)] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.cells.contains(&(row, col))
    }

    pub fn word(&self, grid: &Grid) -> String {
        self.cells.iter().map(|&(row, col)| grid.at(row, col)).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grid() -> Grid {
        Grid::new(
            "ABCDE\n\
             FGHIJ\n\
             SOLAR\n\
             KLMNP\n\
             QTUVW"
        ).unwrap()
    }

    #[test]
    fn lines() {
        assert_eq!(line_between((2, 2), (2, 2)), Some(((0, 0), 0)));
        assert_eq!(line_between((2, 0), (2, 4)), Some(((0, 1), 4)));
        assert_eq!(line_between((2, 4), (2, 0)), Some(((0, -1), 4)));
        assert_eq!(line_between((0, 3), (4, 3)), Some(((1, 0), 4)));
        assert_eq!(line_between((4, 0), (0, 4)), Some(((-1, 1), 4)));
        assert_eq!(line_between((3, 3), (1, 1)), Some(((-1, -1), 2)));
        assert_eq!(line_between((0, 0), (2, 1)), None);
        assert_eq!(line_between((0, 0), (1, 3)), None);
    }

    #[test]
    fn begin() {
        let grid = grid();
        let mut path = SelectionPath::new();

        assert!(path.anchor().is_none());
        assert!(path.begin(&grid, 1, 1));
        assert_eq!(path.cells(), &[(1, 1)]);

        assert!(!path.begin(&grid, 5, 0));
        assert_eq!(path.cells(), &[(1, 1)]);

        assert!(path.begin(&grid, 4, 4));
        assert_eq!(path.cells(), &[(4, 4)]);
    }

    #[test]
    fn extend_needs_anchor() {
        let grid = grid();
        let mut path = SelectionPath::new();

        assert!(!path.extend(&grid, 0, 1));
        assert!(path.is_empty());
    }

    #[test]
    fn straight_lines_only() {
        let grid = grid();
        let mut path = SelectionPath::new();

        path.begin(&grid, 0, 0);
        assert!(!path.extend(&grid, 2, 1));
        assert_eq!(path.cells(), &[(0, 0)]);

        assert!(path.extend(&grid, 2, 2));
        assert_eq!(path.cells(), &[(0, 0), (1, 1), (2, 2)]);

        // A bad move keeps the last good line
        assert!(!path.extend(&grid, 3, 1));
        assert_eq!(path.cells(), &[(0, 0), (1, 1), (2, 2)]);

        assert!(!path.extend(&grid, 0, 5));
        assert_eq!(path.cells(), &[(0, 0), (1, 1), (2, 2)]);

        assert!(path.extend(&grid, 0, 3));
        assert_eq!(path.word(&grid), "ABCD");
    }

    #[test]
    fn backwards() {
        let grid = grid();
        let mut path = SelectionPath::new();

        path.begin(&grid, 2, 4);
        path.extend(&grid, 2, 0);

        assert_eq!(path.anchor(), Some((2, 4)));
        assert_eq!(path.word(&grid), "RALOS");
        assert!(path.contains(2, 2));
        assert!(!path.contains(1, 2));

        path.begin(&grid, 4, 0);
        path.extend(&grid, 2, 2);
        assert_eq!(path.word(&grid), "QLL");
    }

    #[test]
    fn take() {
        let grid = grid();
        let mut path = SelectionPath::new();

        path.begin(&grid, 2, 0);
        path.extend(&grid, 2, 4);

        let taken = path.take();

        assert!(path.is_empty());
        assert_eq!(taken.word(&grid), "SOLAR");
    }
}
