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

// Cells are addressed as (row, col) with the origin at the top left.
// Words are only ever laid down reading right, down or diagonally
// down and to the right, but a selection may run in any of the eight
// compass directions so that words can also be picked out backwards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
}

pub const ALL_DIRECTIONS: [Direction; 3] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagonalDownRight,
];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid direction ‘{0}’")]
    InvalidDirection(char),
}

impl Direction {
    // Offset of one step as (row, col)
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
        }
    }

    pub fn from_char(ch: char) -> Result<Direction, Error> {
        match ch.to_ascii_lowercase() {
            'h' => Ok(Direction::Horizontal),
            'v' => Ok(Direction::Vertical),
            'd' => Ok(Direction::DiagonalDownRight),
            _ => Err(Error::InvalidDirection(ch)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Direction::Horizontal => 'h',
            Direction::Vertical => 'v',
            Direction::DiagonalDownRight => 'd',
        }
    }
}

// Parses a string such as “hvd” into a list of directions. Repeated
// letters only count once.
pub fn parse(s: &str) -> Result<Vec<Direction>, Error> {
    let mut directions = Vec::new();

    for ch in s.chars().filter(|ch| !ch.is_whitespace() && *ch != ',') {
        let direction = Direction::from_char(ch)?;

        if !directions.contains(&direction) {
            directions.push(direction);
        }
    }

    Ok(directions)
}

#[cfg(test)]
pub fn step(row: u32, col: u32, offset: (i32, i32)) -> (u32, u32) {
    (row.wrapping_add_signed(offset.0), col.wrapping_add_signed(offset.1))
}

// Position reached after `distance` steps along `offset`. Going off
// the top or left of the grid wraps around the integer maximum so
// callers can detect it with a single comparison against the grid
// size.
pub fn project(
    row: u32,
    col: u32,
    offset: (i32, i32),
    distance: u32,
) -> (u32, u32) {
    (
        row.wrapping_add_signed(offset.0.wrapping_mul(distance as i32)),
        col.wrapping_add_signed(offset.1.wrapping_mul(distance as i32)),
    )
}
