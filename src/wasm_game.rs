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

// Thin binding that lets the browser UI drive a puzzle session with
// raw pointer events. The page owns all of the rendering; it asks the
// session what to draw after each event.

use wasm_bindgen::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use super::directions;
use super::logging;
use super::puzzle::{Selection, Session};
use super::puzzle_spec::{self, PuzzleSpec};

fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WordSearch {
    session: Session,
}

#[wasm_bindgen]
impl WordSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(
        words: &str,
        grid_size: u32,
        directions: &str,
    ) -> Result<WordSearch, JsValue> {
        let directions = directions::parse(directions).map_err(to_js_error)?;

        let spec = PuzzleSpec::new(
            puzzle_spec::parse_word_list(words),
            grid_size,
            &directions,
        ).map_err(to_js_error)?;

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = SmallRng::seed_from_u64(seed);

        Ok(WordSearch {
            session: Session::generate(&spec, &mut rng),
        })
    }

    #[wasm_bindgen(js_name = ecoPuzzle)]
    pub fn eco_puzzle() -> WordSearch {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = SmallRng::seed_from_u64(seed);

        WordSearch {
            session: Session::generate(&PuzzleSpec::default(), &mut rng),
        }
    }

    #[wasm_bindgen(js_name = setCompleteCallback)]
    pub fn set_complete_callback(&mut self, callback: js_sys::Function) {
        self.session.set_completion_callback(move |n_found| {
            if let Err(e) = callback.call1(
                &JsValue::NULL,
                &JsValue::from(n_found as u32),
            ) {
                web_sys::console::log_2(&"completion callback failed".into(), &e);
            }
        });
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, row: u32, col: u32) -> bool {
        self.session.begin_selection(row, col)
    }

    #[wasm_bindgen(js_name = pointerEnter)]
    pub fn pointer_enter(&mut self, row: u32, col: u32) -> bool {
        self.session.extend_selection(row, col)
    }

    // Returns the newly found word, if any
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Option<String> {
        match self.session.end_selection() {
            Selection::Found { word, .. } => Some(word),
            Selection::Empty |
            Selection::NoMatch |
            Selection::AlreadyFound(_) => None,
        }
    }

    // True once, after the pointerUp that found the last word
    #[wasm_bindgen(js_name = pendingFinish)]
    pub fn pending_finish(&mut self) -> bool {
        self.session.pending_finish()
    }

    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(&mut self) {
        self.session.cancel_selection();
    }

    #[wasm_bindgen(js_name = gridSize)]
    pub fn grid_size(&self) -> u32 {
        self.session.grid().size()
    }

    #[wasm_bindgen(js_name = letterAt)]
    pub fn letter_at(&self, row: u32, col: u32) -> Option<String> {
        self.session.grid().get(row, col).map(String::from)
    }

    #[wasm_bindgen(js_name = isHighlighted)]
    pub fn is_highlighted(&self, row: u32, col: u32) -> bool {
        self.session.is_highlighted(row, col)
    }

    #[wasm_bindgen(js_name = isSelected)]
    pub fn is_selected(&self, row: u32, col: u32) -> bool {
        self.session.is_selected(row, col)
    }

    #[wasm_bindgen(js_name = isFound)]
    pub fn is_found(&self, word: &str) -> bool {
        self.session.is_found(word)
    }

    #[wasm_bindgen(js_name = selectedWord)]
    pub fn selected_word(&self) -> String {
        self.session.selected_word()
    }

    // The word list joined with commas, in the order it was given
    pub fn words(&self) -> String {
        self.session.words().join(",")
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    #[wasm_bindgen(js_name = foundCount)]
    pub fn found_count(&self) -> usize {
        self.session.n_words_found()
    }

    #[wasm_bindgen(js_name = totalWords)]
    pub fn total_words(&self) -> usize {
        self.session.total_n_words()
    }

    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }
}

#[wasm_bindgen]
pub fn init_terraquest() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    logging::init_logging_with_level(log::LevelFilter::Info);
}
