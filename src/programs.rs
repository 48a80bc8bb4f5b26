//! Built-in example machines.
//!
//! Every machine uses the default labels from [`MachineOptions`](crate::types::MachineOptions):
//! it starts in `q₀`, accepts in `qₐ`, rejects in `qᵣ`, and pads with `□`.
//! Each comes with reference inputs and their expected verdicts.

use crate::configuration::Configuration;
use crate::runner::run_until_halt;
use crate::transition::{TransitionFunction, TransitionTable};
use crate::types::Direction::{Left as L, Right as R};
use crate::types::{Direction, MachineError, Rule, DEFAULT_BLANK_SYMBOL as BLANK};
use std::fmt;
use std::sync::Arc;

/// A named transition function with reference test cases.
#[derive(Clone)]
pub struct Machine {
    /// Short identifier used on the command line.
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    pub description: &'static str,
    pub delta: Arc<dyn TransitionFunction>,
    /// Inputs paired with whether the machine should accept them.
    pub test_cases: &'static [(&'static str, bool)],
}

lazy_static::lazy_static! {
    pub static ref MACHINES: Vec<Machine> = vec![
        Machine {
            name: "end-ab",
            title: "Strings ending with 'ab'",
            description: "Recognises the regular language [ab]*ab.",
            delta: Arc::new(end_ab_table()),
            test_cases: &[
                ("ab", true),
                ("aab", true),
                ("bab", true),
                ("aaab", true),
                ("abab", true),
                ("ba", false),
                ("", false),
            ],
        },
        Machine {
            name: "anbn",
            title: "aⁿbⁿ",
            description: "Marks one 'a' and one 'b' per pass until every symbol is marked.",
            delta: Arc::new(anbn),
            test_cases: &[
                ("", true),
                ("ab", true),
                ("aabb", true),
                ("aaabbb", true),
                ("aab", false),
                ("aabbb", false),
                ("aaabb", false),
            ],
        },
        Machine {
            name: "anbncn",
            title: "aⁿbⁿcⁿ",
            description: "Marks one 'a', 'b' and 'c' per pass, then checks nothing is left unmarked.",
            delta: Arc::new(anbncn),
            test_cases: &[
                ("", true),
                ("abc", true),
                ("aabbcc", true),
                ("aaabbbccc", true),
                ("aabbbc", false),
                ("aaabbc", false),
                ("abbc", false),
                ("aabcc", false),
            ],
        },
        Machine {
            name: "equal-01",
            title: "Equal 0s and 1s",
            description: "Pairs each unmarked symbol with an unmarked symbol of the other kind.",
            delta: Arc::new(equal_01),
            test_cases: &[
                ("", true),
                ("01", true),
                ("0011", true),
                ("1100", true),
                ("001011", true),
                ("010101", true),
                ("0", false),
                ("000111", true),
                ("00011", false),
            ],
        },
    ];
}

impl Machine {
    /// Returns all built-in machines.
    pub fn all() -> &'static [Machine] {
        &MACHINES
    }

    /// Looks up a built-in machine by name.
    pub fn by_name(name: &str) -> Result<&'static Machine, MachineError> {
        MACHINES
            .iter()
            .find(|machine| machine.name == name)
            .ok_or_else(|| MachineError::UnknownMachine(name.to_string()))
    }

    /// Lists the names of all built-in machines.
    pub fn names() -> Vec<&'static str> {
        MACHINES.iter().map(|machine| machine.name).collect()
    }

    /// Builds the initial configuration for `input`.
    pub fn configuration(&self, input: &str) -> Configuration {
        Configuration::with_defaults(input, self.delta.clone())
    }

    /// Runs the machine on `input` to completion and reports whether it accepted.
    pub fn accepts(&self, input: &str) -> bool {
        run_until_halt(&self.configuration(input), None).is_accepted()
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("test_cases", &self.test_cases.len())
            .finish_non_exhaustive()
    }
}

fn rule(next_state: &str, write: char, direction: Direction) -> Option<Rule> {
    Some(Rule::new(next_state, write, direction))
}

/// q₀: last symbol was not 'a'; q₁: last was 'a'; q₂: last two were "ab".
fn end_ab_table() -> TransitionTable {
    TransitionTable::new()
        .rule("q₀", 'a', "q₁", 'a', R)
        .rule("q₀", 'b', "q₀", 'b', R)
        .rule("q₀", BLANK, "qᵣ", BLANK, R)
        .rule("q₁", 'a', "q₁", 'a', R)
        .rule("q₁", 'b', "q₂", 'b', R)
        .rule("q₁", BLANK, "qᵣ", BLANK, R)
        .rule("q₂", 'a', "q₁", 'a', R)
        .rule("q₂", 'b', "q₀", 'b', R)
        .rule("q₂", BLANK, "qₐ", BLANK, R)
}

/// Marks 'a' as 'A' and 'b' as 'B'; q₃ verifies only marked 'b's remain.
fn anbn(state: &str, symbol: char) -> Option<Rule> {
    match (state, symbol) {
        ("q₀", 'a') => rule("q₁", 'A', R),
        ("q₀", 'B' | BLANK) => rule("q₃", symbol, R),

        ("q₁", 'a' | 'B') => rule("q₁", symbol, R),
        ("q₁", 'b') => rule("q₂", 'B', L),

        ("q₂", 'a' | 'B') => rule("q₂", symbol, L),
        ("q₂", 'A') => rule("q₀", 'A', R),

        ("q₃", 'B') => rule("q₃", 'B', R),
        ("q₃", BLANK) => rule("qₐ", BLANK, R),

        _ => None,
    }
}

/// Marks 'a', 'b', 'c' as 'X', 'Y', 'Z'; q₃ rewinds to the leading blank and
/// q₄ verifies only marked 'b's and 'c's remain.
fn anbncn(state: &str, symbol: char) -> Option<Rule> {
    match (state, symbol) {
        ("q₀", 'a') => rule("q₁", 'X', R),
        ("q₀", 'X') => rule("q₀", 'X', R),
        ("q₀", 'Y') => rule("q₄", 'Y', R),
        ("q₀", BLANK) => rule("qₐ", BLANK, R),

        ("q₁", 'a' | 'X' | 'Y') => rule("q₁", symbol, R),
        ("q₁", 'b') => rule("q₂", 'Y', R),

        ("q₂", 'b' | 'Y' | 'Z') => rule("q₂", symbol, R),
        ("q₂", 'c') => rule("q₃", 'Z', L),

        ("q₃", 'a' | 'b' | 'c' | 'X' | 'Y' | 'Z') => rule("q₃", symbol, L),
        ("q₃", BLANK) => rule("q₀", BLANK, R),

        ("q₄", 'Y' | 'Z') => rule("q₄", symbol, R),
        ("q₄", BLANK) => rule("qₐ", BLANK, R),

        _ => None,
    }
}

/// Marks '0' as 'X' and '1' as 'Y', pairing one of each per pass.
fn equal_01(state: &str, symbol: char) -> Option<Rule> {
    match (state, symbol) {
        ("q₀", '0') => rule("q₁", 'X', R),
        ("q₀", '1') => rule("q₂", 'Y', R),
        ("q₀", 'X' | 'Y') => rule("q₀", symbol, R),
        ("q₀", BLANK) => rule("qₐ", BLANK, R),

        // Marked a '0', looking for a '1'.
        ("q₁", '0' | 'X' | 'Y') => rule("q₁", symbol, R),
        ("q₁", '1') => rule("q₃", 'Y', L),

        // Marked a '1', looking for a '0'.
        ("q₂", '1' | 'X' | 'Y') => rule("q₂", symbol, R),
        ("q₂", '0') => rule("q₃", 'X', L),

        ("q₃", '0' | '1' | 'X' | 'Y') => rule("q₃", symbol, L),
        ("q₃", BLANK) => rule("q₀", BLANK, R),

        _ => None,
    }
}
