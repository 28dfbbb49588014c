use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use terraquest_wordsearch::directions::{Direction, ALL_DIRECTIONS};
use terraquest_wordsearch::{
    generate_puzzle, generate_puzzle_from_words,
    Picker, PuzzleSpec, Selection, Session,
};

struct ScriptedPicker {
    choices: VecDeque<usize>,
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, bound: usize) -> usize {
        self.choices.pop_front().unwrap_or(0) % bound
    }
}

fn spec_strategy() -> impl Strategy<Value = PuzzleSpec> {
    (
        proptest::collection::hash_set("[A-Z]{1,6}", 1..8),
        6u32..12,
        proptest::sample::subsequence(ALL_DIRECTIONS.to_vec(), 1..=3),
    ).prop_map(|(words, grid_size, directions)| {
        let mut words = words.into_iter().collect::<Vec<_>>();
        words.sort();
        PuzzleSpec::new(words, grid_size, &directions).unwrap()
    })
}

fn read_cells(session: &Session, cells: &[(u32, u32)]) -> String {
    cells.iter().map(|&(row, col)| session.grid().at(row, col)).collect()
}

#[test]
fn sun_and_sky_end_to_end() {
    let mut picker = ScriptedPicker {
        choices: [0, 0, 0, 0, 1, 0].into_iter().collect(),
    };

    let puzzle = generate_puzzle_from_words(
        ["SUN", "SKY"],
        4,
        &[Direction::Horizontal],
        &mut picker,
    ).unwrap();

    let mut session = Session::new(puzzle);
    let fired = Rc::new(Cell::new(0));
    let fired_clone = Rc::clone(&fired);

    session.set_completion_callback(move |n_found| {
        assert_eq!(n_found, 2);
        fired_clone.set(fired_clone.get() + 1);
    });

    session.begin_selection(0, 0);
    session.extend_selection(0, 2);
    assert_eq!(
        session.end_selection(),
        Selection::Found { word: "SUN".to_string(), puzzle_complete: false },
    );
    assert_eq!(session.found_words().collect::<Vec<_>>(), ["SUN"]);
    assert_eq!(fired.get(), 0);

    session.begin_selection(1, 0);
    session.extend_selection(1, 2);
    assert_eq!(
        session.end_selection(),
        Selection::Found { word: "SKY".to_string(), puzzle_complete: true },
    );
    assert_eq!(session.found_words().collect::<Vec<_>>(), ["SUN", "SKY"]);
    assert_eq!(fired.get(), 1);

    session.begin_selection(0, 0);
    session.extend_selection(0, 2);
    assert_eq!(
        session.end_selection(),
        Selection::AlreadyFound("SUN".to_string()),
    );
    assert_eq!(fired.get(), 1);
}

#[test]
fn environment_never_fits_in_three() {
    let mut rng = SmallRng::seed_from_u64(11);

    assert!(generate_puzzle_from_words(
        ["ENVIRONMENT"],
        3,
        &ALL_DIRECTIONS,
        &mut rng,
    ).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn grid_is_complete(spec in spec_strategy(), seed in any::<u64>()) {
        let puzzle = generate_puzzle(&spec, &mut SmallRng::seed_from_u64(seed));
        let grid = puzzle.grid();

        prop_assert_eq!(grid.size(), spec.grid_size());

        for row in 0..grid.size() {
            for col in 0..grid.size() {
                prop_assert!(grid.at(row, col).is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn placements_are_faithful(spec in spec_strategy(), seed in any::<u64>()) {
        let puzzle = generate_puzzle(&spec, &mut SmallRng::seed_from_u64(seed));
        let mut claimed = HashMap::new();

        for placed in puzzle.placed_words() {
            prop_assert!(spec.words().contains(&placed.word));
            prop_assert!(spec.directions().contains(&placed.direction));
            prop_assert_eq!(placed.cells.len(), placed.word.len());

            for (&cell, letter) in placed.cells.iter().zip(placed.word.chars()) {
                prop_assert_eq!(puzzle.grid().at(cell.0, cell.1), letter);

                // Words that cross must agree on the shared letter
                let previous = claimed.insert(cell, letter);
                prop_assert!(previous.is_none() || previous == Some(letter));
            }
        }

        prop_assert_eq!(
            puzzle.placed_words().len() + puzzle.missing_words().count(),
            spec.words().len(),
        );
    }

    #[test]
    fn same_seed_same_puzzle(spec in spec_strategy(), seed in any::<u64>()) {
        let a = generate_puzzle(&spec, &mut SmallRng::seed_from_u64(seed));
        let b = generate_puzzle(&spec, &mut SmallRng::seed_from_u64(seed));

        prop_assert_eq!(a.grid(), b.grid());
        prop_assert_eq!(a.placed_words(), b.placed_words());
    }

    #[test]
    fn every_placed_word_can_be_found(
        spec in spec_strategy(),
        seed in any::<u64>(),
        backwards in any::<bool>(),
    ) {
        let mut session = Session::generate(
            &spec,
            &mut SmallRng::seed_from_u64(seed),
        );
        let fired = Rc::new(Cell::new(0));
        let fired_clone = Rc::clone(&fired);

        session.set_completion_callback(move |_| {
            fired_clone.set(fired_clone.get() + 1);
        });

        let placed_words = session.placed_words().to_vec();

        for placed in placed_words.iter() {
            let mut from = placed.cells[0];
            let mut to = placed.cells[placed.cells.len() - 1];

            if backwards {
                std::mem::swap(&mut from, &mut to);
            }

            prop_assert!(session.begin_selection(from.0, from.1));
            prop_assert!(session.extend_selection(to.0, to.1));

            // A word whose reversal is also in the list can be matched
            // as that other word instead
            let selected = session.selected_word();
            match session.end_selection() {
                Selection::Found { word, .. } => {
                    let reversed = selected.chars().rev().collect::<String>();
                    prop_assert!(word == selected || word == reversed);
                },
                Selection::AlreadyFound(_) => (),
                other => prop_assert!(false, "unexpected {:?}", other),
            }

            prop_assert_eq!(read_cells(&session, &placed.cells), placed.word.clone());
        }

        prop_assert!(fired.get() <= 1);
        prop_assert_eq!(fired.get() == 1, session.is_complete());
        prop_assert!(session.selection().is_empty());
    }

    #[test]
    fn crooked_drags_are_ignored(
        spec in spec_strategy(),
        seed in any::<u64>(),
        row in 0u32..6,
        col in 0u32..6,
    ) {
        let mut session = Session::generate(
            &spec,
            &mut SmallRng::seed_from_u64(seed),
        );

        prop_assert!(session.begin_selection(row, col));

        // A knight’s move is never a straight line
        let before = session.selection().clone();
        prop_assert!(!session.extend_selection(row + 1, col + 2));
        prop_assert_eq!(session.selection(), &before);

        // Neither is anything off the grid
        prop_assert!(!session.extend_selection(row, spec.grid_size()));
        prop_assert_eq!(session.selection(), &before);
    }
}
