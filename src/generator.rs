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

use serde::Serialize;
use super::grid::{Grid, BLANK};
use super::directions::{self, Direction};
use super::puzzle_spec::{self, PuzzleSpec};
use rand::Rng;

// Number of random direction and anchor choices to try for each word
// before giving up on it
pub const PLACEMENT_ATTEMPTS: u32 = 100;

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of the random choices made while building a grid. Every
/// `rand::Rng` is one, and tests can script the exact sequence of
/// choices instead.
pub trait Picker {
    /// Returns a value in `0..bound`. `bound` is never zero.
    fn pick(&mut self, bound: usize) -> usize;
}

impl<R: Rng> Picker for R {
    fn pick(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub direction: Direction,
    // The cells in the order that the word was laid down
    pub cells: Vec<(u32, u32)>,
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    spec: PuzzleSpec,
    grid: Grid,
    placed_words: Vec<PlacedWord>,
}

impl Puzzle {
    pub fn spec(&self) -> &PuzzleSpec {
        &self.spec
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed_words
    }

    pub fn placed_word(&self, word: &str) -> Option<&PlacedWord> {
        self.placed_words.iter().find(|placed| placed.word == word)
    }

    // Requested words that ran out of placement attempts
    pub fn missing_words(&self) -> impl Iterator<Item = &str> {
        self.spec.words().iter()
            .filter(|word| self.placed_word(word).is_none())
            .map(String::as_str)
    }
}

pub fn generate_puzzle<P>(spec: &PuzzleSpec, picker: &mut P) -> Puzzle
    where P: Picker + ?Sized
{
    let mut grid = Grid::blank(spec.grid_size());

    let placed_words = place_words(
        &mut grid,
        spec.words(),
        spec.directions(),
        picker,
    );

    fill_blanks(&mut grid, picker);

    log::debug!(
        "generated {0}×{0} puzzle with {1}/{2} words placed",
        spec.grid_size(),
        placed_words.len(),
        spec.words().len(),
    );

    Puzzle {
        spec: spec.clone(),
        grid,
        placed_words,
    }
}

pub fn generate_puzzle_from_words<I, T, P>(
    words: I,
    grid_size: u32,
    directions: &[Direction],
    picker: &mut P,
) -> Result<Puzzle, puzzle_spec::Error>
    where I: IntoIterator<Item = T>,
          T: Into<String>,
          P: Picker + ?Sized
{
    let spec = PuzzleSpec::new(words, grid_size, directions)?;

    Ok(generate_puzzle(&spec, picker))
}

pub fn place_words<I, T, P>(
    grid: &mut Grid,
    words: I,
    directions: &[Direction],
    picker: &mut P,
) -> Vec<PlacedWord>
    where I: IntoIterator<Item = T>,
          T: AsRef<str>,
          P: Picker + ?Sized
{
    let mut placed_words = Vec::new();

    for word in words {
        let word = word.as_ref();

        match place_word(grid, word, directions, picker) {
            Some(placed) => placed_words.push(placed),
            None => {
                log::debug!(
                    "no room for “{}” after {} attempts",
                    word,
                    PLACEMENT_ATTEMPTS,
                );
            },
        }
    }

    placed_words
}

fn try_cells(
    grid: &Grid,
    letters: &[char],
    row: u32,
    col: u32,
    offset: (i32, i32),
) -> Option<Vec<(u32, u32)>> {
    let (end_row, end_col) =
        directions::project(row, col, offset, letters.len() as u32 - 1);

    if !grid.contains(end_row, end_col) {
        return None;
    }

    let mut cells = Vec::with_capacity(letters.len());

    for (i, &letter) in letters.iter().enumerate() {
        let (row, col) = directions::project(row, col, offset, i as u32);
        let existing = grid.at(row, col);

        // Crossing another word is fine as long as the letters agree
        if existing != BLANK && existing != letter {
            return None;
        }

        cells.push((row, col));
    }

    Some(cells)
}

pub fn place_word<P>(
    grid: &mut Grid,
    word: &str,
    directions: &[Direction],
    picker: &mut P,
) -> Option<PlacedWord>
    where P: Picker + ?Sized
{
    let letters = word.chars().collect::<Vec<_>>();
    let size = grid.size() as usize;

    if letters.is_empty() || directions.is_empty() || size == 0 {
        return None;
    }

    for _ in 0..PLACEMENT_ATTEMPTS {
        let direction = directions[picker.pick(directions.len())];
        let row = picker.pick(size) as u32;
        let col = picker.pick(size) as u32;

        if let Some(cells) = try_cells(
            grid,
            &letters,
            row, col,
            direction.offset(),
        ) {
            for (&(row, col), &letter) in cells.iter().zip(letters.iter()) {
                grid.set(row, col, letter);
            }

            return Some(PlacedWord {
                word: word.to_string(),
                direction,
                cells,
            });
        }
    }

    None
}

pub fn fill_blanks<P>(grid: &mut Grid, picker: &mut P)
    where P: Picker + ?Sized
{
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if grid.at(row, col) == BLANK {
                let letter = ALPHABET[picker.pick(ALPHABET.len())];
                grid.set(row, col, letter as char);
            }
        }
    }
}
