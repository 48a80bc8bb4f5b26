use std::sync::Arc;

use proptest::prelude::*;
use tapeware::{
    run_until_halt, run_with_history, Configuration, Direction, Machine, TransitionFunction,
    TransitionTable, DEFAULT_BLANK_SYMBOL,
};

const STATES: [&str; 5] = ["q₀", "q₁", "q₂", "qₐ", "qᵣ"];
const SYMBOLS: [char; 3] = ['a', 'b', DEFAULT_BLANK_SYMBOL];

/// One optional rule per (non-halting state, symbol) pair: 3 states x 3 symbols.
fn random_table() -> impl Strategy<Value = TransitionTable> {
    proptest::collection::vec(
        proptest::option::of((0..STATES.len(), 0..SYMBOLS.len(), any::<bool>())),
        9,
    )
    .prop_map(|cells| {
        let mut table = TransitionTable::new();
        for (i, cell) in cells.into_iter().enumerate() {
            if let Some((next, write, left)) = cell {
                let direction = if left { Direction::Left } else { Direction::Right };
                table.insert(STATES[i / 3], SYMBOLS[i % 3], STATES[next], SYMBOLS[write], direction);
            }
        }
        table
    })
}

fn input() -> impl Strategy<Value = String> {
    "[ab]{0,8}"
}

proptest! {
    #[test]
    fn runs_are_deterministic(table in random_table(), input in input()) {
        let delta: Arc<dyn TransitionFunction> = Arc::new(table);
        let first = run_until_halt(&Configuration::with_defaults(&input, delta.clone()), Some(200));
        let second = run_until_halt(&Configuration::with_defaults(&input, delta), Some(200));

        prop_assert_eq!(first.steps(), second.steps());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn history_obeys_step_laws(table in random_table(), input in input(), bound in 0usize..60) {
        let config = Configuration::with_defaults(&input, Arc::new(table));
        let history = run_with_history(&config, Some(bound));

        let applied = history.len() - 1;
        prop_assert!(applied <= bound);
        prop_assert_eq!(history[applied].steps(), applied);

        for pair in history.windows(2) {
            prop_assert_eq!(pair[1].steps(), pair[0].steps() + 1);
        }
        for c in &history {
            prop_assert!(c.head() < c.tape().len(), "head {} outside tape of {}", c.head(), c.tape().len());
        }

        let last = &history[applied];
        if applied < bound {
            prop_assert!(last.is_halted());
        }
    }

    #[test]
    fn halted_configurations_are_absorbing(table in random_table(), input in input()) {
        let config = Configuration::with_defaults(&input, Arc::new(table));
        let last = run_until_halt(&config, Some(200));

        if last.is_halted() {
            let again = last.step();
            prop_assert_eq!(&again, &last);
            prop_assert_eq!(again.steps(), last.steps());
        }
    }

    #[test]
    fn step_never_mutates_its_input(table in random_table(), input in input()) {
        let config = Configuration::with_defaults(&input, Arc::new(table));
        let before = config.clone();
        let _ = config.step();
        prop_assert_eq!(config, before);
    }

    #[test]
    fn anbn_accepts_exactly_balanced_blocks(n in 0usize..6, m in 0usize..6) {
        let input = format!("{}{}", "a".repeat(n), "b".repeat(m));
        prop_assert_eq!(Machine::by_name("anbn").unwrap().accepts(&input), n == m);
    }

    #[test]
    fn equal_01_counts_symbols(input in "[01]{0,10}") {
        let zeros = input.chars().filter(|&c| c == '0').count();
        let ones = input.len() - zeros;
        prop_assert_eq!(Machine::by_name("equal-01").unwrap().accepts(&input), zeros == ones);
    }

    #[test]
    fn end_ab_checks_suffix(input in "[ab]{0,10}") {
        prop_assert_eq!(Machine::by_name("end-ab").unwrap().accepts(&input), input.ends_with("ab"));
    }
}
