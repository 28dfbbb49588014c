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
use std::str::FromStr;
use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use super::directions::{self, Direction, ALL_DIRECTIONS};

pub const DEFAULT_GRID_SIZE: u32 = 10;

// Largest side length accepted for a puzzle
pub const MAX_GRID_SIZE: u32 = 256;

pub const ECO_WORDS: [&str; 8] = [
    "RECYCLE", "COMPOST", "OZONE", "CLIMATE",
    "HABITAT", "REUSE", "SOLAR", "GREEN",
];

/// The immutable configuration of a puzzle: which words to hide, how
/// big the square grid is and which orientations words may be laid
/// down in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPuzzleSpec")]
pub struct PuzzleSpec {
    words: Vec<String>,
    grid_size: u32,
    directions: Vec<Direction>,
}

#[derive(Deserialize)]
struct RawPuzzleSpec {
    words: Vec<String>,
    #[serde(default = "default_grid_size")]
    grid_size: u32,
    #[serde(default = "default_directions")]
    directions: Vec<Direction>,
}

fn default_grid_size() -> u32 {
    DEFAULT_GRID_SIZE
}

fn default_directions() -> Vec<Direction> {
    ALL_DIRECTIONS.to_vec()
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(
        "grid size {grid_size} is too small for “{word}” \
         ({length} letters)"
    )]
    GridTooSmall {
        word: String,
        length: usize,
        grid_size: u32,
    },
    #[error("no words")]
    NoWords,
    #[error("empty word")]
    EmptyWord,
    #[error("“{word}” contains letters other than A-Z")]
    InvalidLetter { word: String },
    #[error("“{word}” is listed more than once")]
    DuplicateWord { word: String },
    #[error("no directions")]
    NoDirections,
    #[error("invalid grid size (the maximum is {})", MAX_GRID_SIZE)]
    InvalidGridSize,
    #[error(transparent)]
    Direction(#[from] directions::Error),
}

impl PuzzleSpec {
    pub fn new<I, T>(
        words: I,
        grid_size: u32,
        directions: &[Direction],
    ) -> Result<PuzzleSpec, Error>
        where I: IntoIterator<Item = T>,
              T: Into<String>
    {
        let words = words.into_iter().map(Into::into).collect::<Vec<_>>();

        if grid_size > MAX_GRID_SIZE {
            return Err(Error::InvalidGridSize);
        }

        if words.is_empty() {
            return Err(Error::NoWords);
        }

        let mut seen = HashSet::new();

        for word in words.iter() {
            if word.is_empty() {
                return Err(Error::EmptyWord);
            }

            if !word.chars().all(|ch| ch.is_ascii_uppercase()) {
                return Err(Error::InvalidLetter { word: word.clone() });
            }

            if !seen.insert(word.as_str()) {
                return Err(Error::DuplicateWord { word: word.clone() });
            }

            // Only ASCII letters get this far so the byte length is
            // the letter count
            if word.len() > grid_size as usize {
                return Err(Error::GridTooSmall {
                    word: word.clone(),
                    length: word.len(),
                    grid_size,
                });
            }
        }

        let mut unique_directions = Vec::with_capacity(directions.len());

        for &direction in directions {
            if !unique_directions.contains(&direction) {
                unique_directions.push(direction);
            }
        }

        if unique_directions.is_empty() {
            return Err(Error::NoDirections);
        }

        Ok(PuzzleSpec {
            words,
            grid_size,
            directions: unique_directions,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }
}

impl Default for PuzzleSpec {
    fn default() -> PuzzleSpec {
        PuzzleSpec {
            words: ECO_WORDS.iter().map(|word| word.to_string()).collect(),
            grid_size: DEFAULT_GRID_SIZE,
            directions: ALL_DIRECTIONS.to_vec(),
        }
    }
}

impl TryFrom<RawPuzzleSpec> for PuzzleSpec {
    type Error = Error;

    fn try_from(raw: RawPuzzleSpec) -> Result<PuzzleSpec, Error> {
        PuzzleSpec::new(raw.words, raw.grid_size, &raw.directions)
    }
}

// Splits a comma separated word list, trimming and upper-casing each
// entry. Empty entries are kept so that validation can reject them.
pub fn parse_word_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|word| word.trim().to_uppercase())
        .collect()
}

// The compact form is “SIZE:DIRECTIONS,WORD,WORD…”, for example
// “10:hvd,SOLAR,OZONE”.
impl FromStr for PuzzleSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<PuzzleSpec, Error> {
        let Some((header, words)) = s.split_once(',')
        else {
            return Err(Error::NoWords);
        };

        let (grid_size, directions) = match header.split_once(':') {
            None => (header, ALL_DIRECTIONS.to_vec()),
            Some((grid_size, directions)) => {
                (grid_size, directions::parse(directions)?)
            },
        };

        let Ok(grid_size) = grid_size.trim().parse::<u32>()
        else {
            return Err(Error::InvalidGridSize);
        };

        PuzzleSpec::new(parse_word_list(words), grid_size, &directions)
    }
}

impl fmt::Display for PuzzleSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:", self.grid_size)?;

        for direction in self.directions.iter() {
            write!(f, "{}", direction.to_char())?;
        }

        for word in self.words.iter() {
            write!(f, ",{}", word)?;
        }

        Ok(())
    }
}
