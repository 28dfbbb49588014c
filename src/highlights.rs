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

// Cells that stay lit because they belong to a word that has already
// been found

use super::grid;

#[derive(Debug, Clone)]
pub struct Highlights {
    values: Box<[bool]>,
    size: u32,
    n_highlighted: usize,
}

impl Highlights {
    pub fn new(size: u32) -> Highlights {
        Highlights {
            values: vec![false; grid::n_cells(size)].into_boxed_slice(),
            size,
            n_highlighted: 0,
        }
    }

    pub fn at(&self, row: u32, col: u32) -> bool {
        row < self.size &&
            col < self.size &&
            self.values[row as usize * self.size as usize + col as usize]
    }

    // Returns whether the cell was newly highlighted
    pub fn set(&mut self, row: u32, col: u32) -> bool {
        assert!(row < self.size && col < self.size);

        let index = row as usize * self.size as usize + col as usize;
        let value = &mut self.values[index];

        if std::mem::replace(value, true) {
            false
        } else {
            self.n_highlighted += 1;
            true
        }
    }

    pub fn extend<I>(&mut self, cells: I)
        where I: IntoIterator<Item = (u32, u32)>
    {
        for (row, col) in cells {
            self.set(row, col);
        }
    }

    pub fn count(&self) -> usize {
        self.n_highlighted
    }

    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let size = self.size;

        self.values.iter().enumerate().filter_map(move |(i, &lit)| {
            lit.then(|| (i as u32 / size, i as u32 % size))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn union() {
        let mut highlights = Highlights::new(3);

        assert_eq!(highlights.count(), 0);
        assert!(!highlights.at(1, 1));

        highlights.extend([(0, 0), (0, 1), (0, 2)]);
        highlights.extend([(0, 0), (1, 0), (2, 0)]);

        assert_eq!(highlights.count(), 5);
        assert!(highlights.at(0, 2));
        assert!(highlights.at(2, 0));
        assert!(!highlights.at(1, 1));

        assert_eq!(
            &highlights.cells().collect::<Vec<_>>(),
            &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)],
        );
    }

    #[test]
    fn set_twice() {
        let mut highlights = Highlights::new(2);

        assert!(highlights.set(1, 1));
        assert!(!highlights.set(1, 1));
        assert_eq!(highlights.count(), 1);
    }

    #[test]
    fn out_of_bounds() {
        let highlights = Highlights::new(2);

        assert!(!highlights.at(2, 0));
        assert!(!highlights.at(0, u32::MAX));
    }
}
