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

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;
use clap::Parser;
use terraquest_wordsearch::{logging, Selection, Session};
use terraquest_wordsearch::puzzle::WORD_POINTS;

#[derive(Parser)]
#[command(name = "play-puzzle")]
struct Cli {
    #[command(flatten)]
    puzzle: cli::PuzzleArgs,
}

// One line of the gesture script read from stdin
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Down(u32, u32),
    Enter(u32, u32),
    Up,
    Cancel,
    Drag((u32, u32), (u32, u32)),
    Show,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum CommandError {
    #[error("unknown command “{0}”")]
    UnknownCommand(String),
    #[error("expected {0} coordinates")]
    WrongArgumentCount(usize),
    #[error("invalid coordinate “{0}”")]
    InvalidCoordinate(String),
}

fn parse_coordinates(
    args: &[&str],
    n_expected: usize,
) -> Result<Vec<u32>, CommandError> {
    if args.len() != n_expected {
        return Err(CommandError::WrongArgumentCount(n_expected));
    }

    args.iter().map(|arg| {
        arg.parse::<u32>()
            .map_err(|_| CommandError::InvalidCoordinate(arg.to_string()))
    }).collect()
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Command, CommandError> {
        let parts = s.split_whitespace().collect::<Vec<_>>();

        let Some((&name, args)) = parts.split_first()
        else {
            return Err(CommandError::UnknownCommand(String::new()));
        };

        match name {
            "down" => {
                let pos = parse_coordinates(args, 2)?;
                Ok(Command::Down(pos[0], pos[1]))
            },
            "enter" => {
                let pos = parse_coordinates(args, 2)?;
                Ok(Command::Enter(pos[0], pos[1]))
            },
            "drag" => {
                let pos = parse_coordinates(args, 4)?;
                Ok(Command::Drag((pos[0], pos[1]), (pos[2], pos[3])))
            },
            "up" => Ok(Command::Up),
            "cancel" => Ok(Command::Cancel),
            "show" => Ok(Command::Show),
            _ => Err(CommandError::UnknownCommand(name.to_string())),
        }
    }
}

// Found letters are shown in lower case and the letters of the drag
// in progress are bracketed
fn show_grid(session: &Session, out: &mut impl Write) -> io::Result<()> {
    let grid = session.grid();

    for row in 0..grid.size() {
        let mut line = String::new();

        for col in 0..grid.size() {
            let letter = grid.at(row, col);
            let letter = if session.is_highlighted(row, col) {
                letter.to_ascii_lowercase()
            } else {
                letter
            };

            if session.is_selected(row, col) {
                line.push('[');
                line.push(letter);
                line.push(']');
            } else {
                line.push(' ');
                line.push(letter);
                line.push(' ');
            }
        }

        writeln!(out, "{}", line.trim_end())?;
    }

    show_score(session, out)
}

fn show_score(session: &Session, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}/{} words, {} points",
        session.n_words_found(),
        session.total_n_words(),
        session.score(),
    )
}

fn report(
    session: &mut Session,
    selection: Selection,
    out: &mut impl Write,
) -> io::Result<()> {
    match selection {
        Selection::Empty => writeln!(out, "no selection")?,
        Selection::NoMatch => writeln!(out, "no match")?,
        Selection::AlreadyFound(word) => {
            writeln!(out, "already found {}", word)?;
        },
        Selection::Found { word, .. } => {
            writeln!(out, "found {} (+{})", word, WORD_POINTS)?;
        },
    }

    if session.pending_finish() {
        writeln!(
            out,
            "puzzle complete: all {} words found!",
            session.n_words_found(),
        )?;
    }

    Ok(())
}

fn run_command(
    session: &mut Session,
    command: Command,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        Command::Down(row, col) => {
            if !session.begin_selection(row, col) {
                writeln!(out, "ignored")?;
            }
        },
        Command::Enter(row, col) => {
            if session.extend_selection(row, col) {
                writeln!(out, "{}", session.selected_word())?;
            } else {
                writeln!(out, "ignored")?;
            }
        },
        Command::Up => {
            let selection = session.end_selection();
            report(session, selection, out)?;
        },
        Command::Cancel => session.cancel_selection(),
        Command::Drag(from, to) => {
            session.begin_selection(from.0, from.1);
            session.extend_selection(to.0, to.1);
            let selection = session.end_selection();
            report(session, selection, out)?;
        },
        Command::Show => show_grid(session, out)?,
    }

    Ok(())
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

    let mut session = Session::generate(&spec, &mut cli.puzzle.rng());
    let mut stdout = io::stdout();

    if let Err(e) = run_script(&mut session, io::stdin().lock(), &mut stdout) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

// Shows the grid, runs every gesture line and finishes with the score.
// Bad lines are reported on stderr and skipped.
fn run_script(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    show_grid(session, out)?;

    for (line_num, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => run_command(session, command, out)?,
            Err(e) => eprintln!("line {}: {}", line_num + 1, e),
        }
    }

    show_score(session, out)
}
