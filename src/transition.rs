//! Transition functions: the pluggable rule set that drives a machine.
//!
//! The engine only ever asks one question, "what happens in `state` reading
//! `symbol`?", and treats the answer as opaque. Any `Fn(&str, char) -> Option<Rule>`
//! works, and [`TransitionTable`] covers the common case of a finite lookup table.

use crate::types::{Direction, MachineError, Rule};
use std::collections::HashMap;
use std::fmt;

/// A deterministic mapping from `(state, symbol)` to an optional [`Rule`].
///
/// Returning `None` means no rule is defined; the engine then routes the
/// machine to a reject state. Implementations must be free of side effects
/// so that runs are reproducible.
pub trait TransitionFunction: Send + Sync {
    fn transition(&self, state: &str, symbol: char) -> Option<Rule>;
}

impl<F> TransitionFunction for F
where
    F: Fn(&str, char) -> Option<Rule> + Send + Sync,
{
    fn transition(&self, state: &str, symbol: char) -> Option<Rule> {
        self(state, symbol)
    }
}

/// A finite transition table keyed by `(state, symbol)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    rules: HashMap<String, HashMap<char, Rule>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, replacing any previous rule for the same `(state, read)` pair.
    pub fn insert(
        &mut self,
        state: impl Into<String>,
        read: char,
        next_state: impl Into<String>,
        write: char,
        direction: Direction,
    ) -> Option<Rule> {
        self.rules
            .entry(state.into())
            .or_default()
            .insert(read, Rule::new(next_state, write, direction))
    }

    /// Builder-style variant of [`TransitionTable::insert`].
    pub fn rule(
        mut self,
        state: impl Into<String>,
        read: char,
        next_state: impl Into<String>,
        write: char,
        direction: Direction,
    ) -> Self {
        self.insert(state, read, next_state, write, direction);
        self
    }

    /// Builds a table from `(state, read, next_state, write, direction)` rows where
    /// the direction is given as a token such as `"L"` or `"R"`.
    ///
    /// Fails on the first row whose direction token is not recognised.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self, MachineError>
    where
        I: IntoIterator<Item = (&'a str, char, &'a str, char, &'a str)>,
    {
        let mut table = Self::new();
        for (state, read, next_state, write, direction) in rows {
            table.insert(state, read, next_state, write, direction.parse()?);
        }
        Ok(table)
    }

    /// Returns the rule for `(state, symbol)`, if one is defined.
    pub fn get(&self, state: &str, symbol: char) -> Option<&Rule> {
        self.rules.get(state)?.get(&symbol)
    }

    /// Returns the number of `(state, symbol)` pairs with a rule.
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> impl Iterator<Item = (&String, &char, &Rule)> {
        self.rules.iter().flat_map(|(state, by_symbol)| {
            by_symbol
                .iter()
                .map(move |(read, rule)| (state, read, rule))
        })
    }

    /// Returns all states mentioned by the table, either as a source or a target.
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self
            .rows()
            .flat_map(|(state, _, rule)| [state.clone(), rule.next_state.clone()])
            .collect();
        states.sort();
        states.dedup();
        states
    }
}

impl TransitionFunction for TransitionTable {
    fn transition(&self, state: &str, symbol: char) -> Option<Rule> {
        self.get(state, symbol).cloned()
    }
}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: Vec<_> = self.rows().collect();
        rows.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        for (state, read, rule) in rows {
            writeln!(
                f,
                "{state}, {read} -> {}, {}, {}",
                rule.next_state, rule.write, rule.direction
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_transition_function() {
        let delta = |state: &str, symbol: char| match (state, symbol) {
            ("q₀", 'a') => Some(Rule::new("qₐ", 'a', Direction::Right)),
            _ => None,
        };

        assert_eq!(
            delta.transition("q₀", 'a'),
            Some(Rule::new("qₐ", 'a', Direction::Right))
        );
        assert_eq!(delta.transition("q₀", 'b'), None);
    }

    #[test]
    fn test_fn_pointer_is_a_transition_function() {
        fn always_right(_: &str, symbol: char) -> Option<Rule> {
            Some(Rule::new("q₀", symbol, Direction::Right))
        }

        let boxed: Box<dyn TransitionFunction> = Box::new(always_right);
        assert_eq!(
            boxed.transition("anything", 'x'),
            Some(Rule::new("q₀", 'x', Direction::Right))
        );
    }

    #[test]
    fn test_table_lookup() {
        let table = TransitionTable::new()
            .rule("q₀", 'a', "q₁", 'X', Direction::Right)
            .rule("q₁", 'b', "qₐ", 'Y', Direction::Left);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.transition("q₀", 'a'),
            Some(Rule::new("q₁", 'X', Direction::Right))
        );
        assert_eq!(table.transition("q₀", 'b'), None);
        assert_eq!(table.states(), vec!["q₀", "q₁", "qₐ"]);
    }

    #[test]
    fn test_insert_replaces_existing_rule() {
        let mut table = TransitionTable::new();
        assert!(table.insert("q₀", 'a', "q₁", 'a', Direction::Right).is_none());

        let previous = table.insert("q₀", 'a', "q₂", 'b', Direction::Left);
        assert_eq!(previous, Some(Rule::new("q₁", 'a', Direction::Right)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_rows_rejects_unknown_direction() {
        let result = TransitionTable::from_rows([
            ("q₀", 'a', "q₁", 'a', "R"),
            ("q₁", 'b', "qₐ", 'b', "S"),
        ]);

        assert_eq!(result, Err(MachineError::UnknownDirection("S".to_string())));
    }

    #[test]
    fn test_display_is_sorted() {
        let table = TransitionTable::from_rows([
            ("q₁", 'b', "qₐ", 'b', "L"),
            ("q₀", 'a', "q₁", 'a', "R"),
        ])
        .unwrap();

        assert_eq!(table.to_string(), "q₀, a -> q₁, a, R\nq₁, b -> qₐ, b, L\n");
    }
}
