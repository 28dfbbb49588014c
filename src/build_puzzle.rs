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

mod cli;

use std::process::ExitCode;
use clap::Parser;
use serde::Serialize;
use terraquest_wordsearch::{generate_puzzle, logging, Grid, PlacedWord, PuzzleSpec};
use terraquest_wordsearch::directions::Direction;

#[derive(Parser)]
#[command(name = "build-puzzle")]
struct Cli {
    #[command(flatten)]
    puzzle: cli::PuzzleArgs,
    /// Print the puzzle as JSON
    #[arg(short, long)]
    json: bool,
    /// Fail if any word couldn’t be placed
    #[arg(long)]
    strict: bool,
}

#[derive(Serialize)]
struct PuzzleOutput<'a> {
    spec: &'a PuzzleSpec,
    grid: &'a Grid,
    placed_words: &'a [PlacedWord],
    missing_words: &'a [&'a str],
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Horizontal => "across",
        Direction::Vertical => "down",
        Direction::DiagonalDownRight => "diagonal",
    }
}

fn print_human_readable(
    grid: &Grid,
    placed_words: &[PlacedWord],
    missing_words: &[&str],
) {
    for row in grid.rows() {
        let mut first = true;

        for letter in row.chars() {
            if !first {
                print!(" ");
            }
            print!("{}", letter);
            first = false;
        }

        println!();
    }

    if !placed_words.is_empty() {
        println!("\nWords\n");

        let width = placed_words.iter()
            .map(|placed| placed.word.len())
            .max()
            .unwrap_or(0);

        for placed in placed_words.iter() {
            let (row, col) = placed.cells[0];

            println!(
                "{:<width$}  row {}, column {}, {}",
                placed.word,
                row,
                col,
                direction_name(placed.direction),
                width = width,
            );
        }
    }

    if !missing_words.is_empty() {
        println!("\nNot placed\n");

        for word in missing_words.iter() {
            println!("{}", word);
        }
    }
}

fn main() -> ExitCode {
    logging::init_logging();

    let cli = Cli::parse();

    let spec = match cli.puzzle.load_spec() {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let puzzle = generate_puzzle(&spec, &mut cli.puzzle.rng());
    let missing_words = puzzle.missing_words().collect::<Vec<_>>();

    if cli.strict && !missing_words.is_empty() {
        eprintln!(
            "couldn’t place {} in a {}×{} grid",
            missing_words.join(", "),
            spec.grid_size(),
            spec.grid_size(),
        );
        return ExitCode::FAILURE;
    }

    if cli.json {
        let output = PuzzleOutput {
            spec: puzzle.spec(),
            grid: puzzle.grid(),
            placed_words: puzzle.placed_words(),
            missing_words: &missing_words,
        };

        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    } else {
        print_human_readable(
            puzzle.grid(),
            puzzle.placed_words(),
            &missing_words,
        );
    }

    ExitCode::SUCCESS
}
