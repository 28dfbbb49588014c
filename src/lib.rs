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

//! The eco word search from TerraQuest: a generator that hides a list
//! of words in a square letter grid and a session that turns pointer
//! drags into straight-line selections and checks them against the
//! hidden words.

#[cfg(target_arch = "wasm32")]
mod wasm_game;
pub mod grid;
pub mod directions;
pub mod puzzle_spec;
pub mod generator;
pub mod selection;
pub mod highlights;
pub mod puzzle;
pub mod logging;

pub use directions::Direction;
pub use generator::{
    generate_puzzle, generate_puzzle_from_words,
    Picker, PlacedWord, Puzzle,
};
pub use grid::Grid;
pub use puzzle::{Selection, Session};
pub use puzzle_spec::PuzzleSpec;
