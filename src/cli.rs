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

// Puzzle options shared by the command line tools

use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::path::Path;
use clap::Args;
use rand::{SeedableRng, rngs::StdRng};
use terraquest_wordsearch::directions;
use terraquest_wordsearch::puzzle_spec::{self, PuzzleSpec, DEFAULT_GRID_SIZE};

#[derive(Args, Debug)]
pub struct PuzzleArgs {
    /// File with one word per line. Lines starting with ‘#’ are ignored.
    #[arg(short, long, value_name = "FILE")]
    pub words: Option<OsString>,
    /// JSON puzzle spec
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["words", "puzzle"],
    )]
    pub spec: Option<OsString>,
    /// Compact puzzle such as “10:hvd,SOLAR,OZONE”
    #[arg(short, long, value_name = "PUZZLE", conflicts_with = "words")]
    pub puzzle: Option<String>,
    /// Side length of the grid
    #[arg(short = 'n', long, value_name = "SIZE")]
    pub size: Option<u32>,
    /// Allowed directions: h, v and d for diagonal
    #[arg(short, long, value_name = "DIRECTIONS")]
    pub directions: Option<String>,
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Spec(#[from] puzzle_spec::Error),
    #[error(transparent)]
    Direction(#[from] directions::Error),
}

fn read_word_list_from_file<P: AsRef<Path>>(
    filename: P,
) -> Result<Vec<String>, std::io::Error> {
    let mut words = Vec::new();

    for line in BufReader::new(std::fs::File::open(filename)?).lines() {
        let line = line?;
        let line = line.trim();

        if !line.is_empty() && !line.starts_with('#') {
            words.push(line.to_uppercase());
        }
    }

    Ok(words)
}

impl PuzzleArgs {
    fn base_spec(&self) -> Result<PuzzleSpec, Error> {
        if let Some(filename) = self.spec.as_ref() {
            let path = filename.to_string_lossy().into_owned();

            let source = std::fs::read_to_string(filename)
                .map_err(|source| Error::Io { path: path.clone(), source })?;

            serde_json::from_str(&source)
                .map_err(|source| Error::Json { path, source })
        } else if let Some(puzzle) = self.puzzle.as_ref() {
            Ok(puzzle.parse::<PuzzleSpec>()?)
        } else {
            Ok(PuzzleSpec::default())
        }
    }

    pub fn load_spec(&self) -> Result<PuzzleSpec, Error> {
        let (words, grid_size, directions) = match self.words.as_ref() {
            Some(filename) => {
                let words = read_word_list_from_file(filename)
                    .map_err(|source| Error::Io {
                        path: filename.to_string_lossy().into_owned(),
                        source,
                    })?;

                (words, DEFAULT_GRID_SIZE, directions::ALL_DIRECTIONS.to_vec())
            },
            None => {
                let spec = self.base_spec()?;

                if self.size.is_none() && self.directions.is_none() {
                    return Ok(spec);
                }

                (
                    spec.words().to_vec(),
                    spec.grid_size(),
                    spec.directions().to_vec(),
                )
            },
        };

        let directions = match self.directions.as_ref() {
            Some(directions) => directions::parse(directions)?,
            None => directions,
        };

        Ok(PuzzleSpec::new(
            words,
            self.size.unwrap_or(grid_size),
            &directions,
        )?)
    }

    // Without a seed a random one is chosen and logged so that the
    // puzzle can be generated again
    pub fn rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(rand::random);

        log::info!("puzzle seed {}", seed);

        StdRng::seed_from_u64(seed)
    }
}
