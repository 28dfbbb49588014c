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
use super::generator::{self, Picker, PlacedWord, Puzzle};
use super::highlights::Highlights;
use super::puzzle_spec::PuzzleSpec;
use super::selection::SelectionPath;
use std::collections::HashMap;
use std::fmt;

pub const WORD_POINTS: u32 = 15;

/// What happened when a drag was released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// There was no drag in progress.
    Empty,
    /// The letters don’t spell any word in either direction.
    NoMatch,
    /// The letters spell a word that was found earlier.
    AlreadyFound(String),
    Found {
        word: String,
        /// Set only on the selection that found the last word.
        puzzle_complete: bool,
    },
}

pub type CompletionCallback = Box<dyn FnMut(usize)>;

struct Word {
    found: bool,
}

/// One play-through of a puzzle. It owns the grid together with all of
/// the state that changes as the player drags across it.
pub struct Session {
    puzzle: Puzzle,
    words: HashMap<String, Word>,
    highlights: Highlights,
    selection: SelectionPath,
    n_words_found: usize,
    score: u32,
    completed: bool,
    pending_finish: bool,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Session")
            .field("grid", self.puzzle.grid())
            .field("n_words_found", &self.n_words_found)
            .field("score", &self.score)
            .field("completed", &self.completed)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(puzzle: Puzzle) -> Session {
        let words = puzzle.spec().words().iter()
            .map(|word| (word.clone(), Word { found: false }))
            .collect::<HashMap<_, _>>();

        let highlights = Highlights::new(puzzle.grid().size());

        Session {
            puzzle,
            words,
            highlights,
            selection: SelectionPath::new(),
            n_words_found: 0,
            score: 0,
            completed: false,
            pending_finish: false,
            on_complete: None,
        }
    }

    pub fn generate<P>(spec: &PuzzleSpec, picker: &mut P) -> Session
        where P: Picker + ?Sized
    {
        Session::new(generator::generate_puzzle(spec, picker))
    }

    /// Registers the function to call once every word has been found.
    /// It receives the number of words found.
    pub fn set_completion_callback<F>(&mut self, callback: F)
        where F: FnMut(usize) + 'static
    {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn begin_selection(&mut self, row: u32, col: u32) -> bool {
        self.selection.begin(self.puzzle.grid(), row, col)
    }

    pub fn extend_selection(&mut self, row: u32, col: u32) -> bool {
        self.selection.extend(self.puzzle.grid(), row, col)
    }

    pub fn cancel_selection(&mut self) {
        self.selection.clear();
    }

    pub fn end_selection(&mut self) -> Selection {
        let selection = self.selection.take();

        if selection.is_empty() {
            return Selection::Empty;
        }

        let forwards = selection.word(self.puzzle.grid());
        let backwards = forwards.chars().rev().collect::<String>();
        let mut already_found = None;

        for candidate in [forwards, backwards] {
            match self.words.get(&candidate).map(|word| word.found) {
                Some(false) => return self.score_word(candidate, &selection),
                Some(true) => already_found = Some(candidate),
                None => (),
            }
        }

        match already_found {
            Some(word) => Selection::AlreadyFound(word),
            None => Selection::NoMatch,
        }
    }

    fn score_word(
        &mut self,
        word: String,
        selection: &SelectionPath,
    ) -> Selection {
        if let Some(data) = self.words.get_mut(&word) {
            data.found = true;
        }

        self.n_words_found += 1;
        self.score += WORD_POINTS;

        // Light up where the word was hidden. If the filler letters
        // happened to spell it out then there is no placement so use
        // the selection instead.
        match self.puzzle.placed_word(&word) {
            Some(placed) => {
                self.highlights.extend(placed.cells.iter().copied());
            },
            None => {
                self.highlights.extend(selection.cells().iter().copied());
            },
        }

        log::debug!(
            "found “{}” ({}/{})",
            word,
            self.n_words_found,
            self.total_n_words(),
        );

        let puzzle_complete = !self.completed &&
            self.n_words_found >= self.total_n_words();

        if puzzle_complete {
            self.completed = true;
            self.pending_finish = true;

            log::info!(
                "puzzle complete with {} words and {} points",
                self.n_words_found,
                self.score,
            );

            if let Some(callback) = self.on_complete.as_mut() {
                callback(self.n_words_found);
            }
        }

        Selection::Found { word, puzzle_complete }
    }

    pub fn pending_finish(&mut self) -> bool {
        std::mem::replace(&mut self.pending_finish, false)
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    pub fn placed_words(&self) -> &[PlacedWord] {
        self.puzzle.placed_words()
    }

    pub fn words(&self) -> &[String] {
        self.puzzle.spec().words()
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.words.get(word).map(|word| word.found).unwrap_or(false)
    }

    // Found words in the order they appear in the word list
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.words().iter()
            .filter(|word| self.is_found(word))
            .map(String::as_str)
    }

    pub fn missing_words(&self) -> impl Iterator<Item = &str> {
        self.puzzle.missing_words()
    }

    pub fn n_words_found(&self) -> usize {
        self.n_words_found
    }

    pub fn total_n_words(&self) -> usize {
        self.words.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn selection(&self) -> &SelectionPath {
        &self.selection
    }

    pub fn selected_word(&self) -> String {
        self.selection.word(self.puzzle.grid())
    }

    pub fn is_selected(&self, row: u32, col: u32) -> bool {
        self.selection.contains(row, col)
    }

    pub fn is_highlighted(&self, row: u32, col: u32) -> bool {
        self.highlights.at(row, col)
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }
}
