//! This module defines `Configuration`, the immutable snapshot of a single-tape
//! Turing Machine at one instant: tape contents, head position, control state,
//! step count, and the transition function that drives it.

use crate::transition::TransitionFunction;
use crate::types::{MachineError, MachineOptions, TAPE_GROWTH};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A complete machine configuration.
///
/// Configurations are values: nothing exposes mutable access, and every
/// transition produces a fresh `Configuration`. Cloning is cheap apart from the
/// tape buffer; the transition function is shared.
#[derive(Clone)]
pub struct Configuration {
    pub(crate) tape: Vec<char>,
    pub(crate) head: usize,
    pub(crate) state: String,
    pub(crate) steps: usize,
    pub(crate) blank: char,
    pub(crate) delta: Arc<dyn TransitionFunction>,
    pub(crate) accept_states: Arc<BTreeSet<String>>,
    pub(crate) reject_states: Arc<BTreeSet<String>>,
}

impl Configuration {
    /// Creates the initial configuration for `input`.
    ///
    /// The tape is laid out as one leading blank, the input characters, and
    /// `TAPE_GROWTH` trailing blanks. The head starts on the first input
    /// character (or the first trailing blank for empty input).
    ///
    /// Input symbols are not checked against the transition function; an
    /// unexpected symbol simply has no rule and leads to rejection.
    ///
    /// # Errors
    ///
    /// * `MachineError::OverlappingStates` if a state is both accepting and rejecting.
    pub fn new(
        input: &str,
        delta: Arc<dyn TransitionFunction>,
        options: &MachineOptions,
    ) -> Result<Self, MachineError> {
        options.validate()?;
        Ok(Self::build(input, delta, options.clone()))
    }

    /// Creates the initial configuration using `MachineOptions::default()`.
    ///
    /// The default options never overlap, so this cannot fail.
    pub fn with_defaults(input: &str, delta: Arc<dyn TransitionFunction>) -> Self {
        Self::build(input, delta, MachineOptions::default())
    }

    fn build(input: &str, delta: Arc<dyn TransitionFunction>, options: MachineOptions) -> Self {
        let blank = options.blank;
        let mut tape = Vec::with_capacity(input.chars().count() + TAPE_GROWTH + 1);
        tape.push(blank);
        tape.extend(input.chars());
        tape.extend(std::iter::repeat(blank).take(TAPE_GROWTH));

        Self {
            tape,
            head: 1,
            state: options.initial_state,
            steps: 0,
            blank,
            delta,
            accept_states: Arc::new(options.accept_states),
            reject_states: Arc::new(options.reject_states),
        }
    }

    /// Returns `true` if the current state is accepting or rejecting.
    pub fn is_halted(&self) -> bool {
        self.is_accepted() || self.is_rejected()
    }

    /// Returns `true` if the current state is accepting.
    pub fn is_accepted(&self) -> bool {
        self.accept_states.contains(&self.state)
    }

    /// Returns `true` if the current state is rejecting.
    pub fn is_rejected(&self) -> bool {
        self.reject_states.contains(&self.state)
    }

    /// Returns the symbol under the head.
    pub fn current_symbol(&self) -> char {
        self.tape[self.head]
    }

    pub fn tape(&self) -> &[char] {
        &self.tape
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the number of transitions applied to reach this configuration.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn blank(&self) -> char {
        self.blank
    }

    pub fn accept_states(&self) -> &BTreeSet<String> {
        &self.accept_states
    }

    pub fn reject_states(&self) -> &BTreeSet<String> {
        &self.reject_states
    }

    /// Returns the shared transition function.
    pub fn transition_function(&self) -> &Arc<dyn TransitionFunction> {
        &self.delta
    }

    /// Returns the tape contents with leading and trailing blanks removed.
    pub fn tape_string(&self) -> String {
        let blank = self.blank;
        let start = self.tape.iter().position(|&c| c != blank);
        let end = self.tape.iter().rposition(|&c| c != blank);

        match (start, end) {
            (Some(start), Some(end)) => self.tape[start..=end].iter().collect(),
            _ => String::new(),
        }
    }

    /// Returns a serializable view of this configuration.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tape: self.tape.iter().collect(),
            head: self.head,
            state: self.state.clone(),
            steps: self.steps,
            halted: self.is_halted(),
            accepted: self.is_accepted(),
        }
    }
}

impl PartialEq for Configuration {
    /// Compares the observable machine state. The transition function is not
    /// compared, since function values have no meaningful equality.
    fn eq(&self, other: &Self) -> bool {
        self.tape == other.tape
            && self.head == other.head
            && self.state == other.state
            && self.steps == other.steps
            && self.blank == other.blank
            && self.accept_states == other.accept_states
            && self.reject_states == other.reject_states
    }
}

impl Eq for Configuration {}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("tape", &self.tape.iter().collect::<String>())
            .field("head", &self.head)
            .field("state", &self.state)
            .field("steps", &self.steps)
            .field("blank", &self.blank)
            .field("accept_states", &self.accept_states)
            .field("reject_states", &self.reject_states)
            .finish_non_exhaustive()
    }
}

/// A plain-data copy of a configuration, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tape: String,
    pub head: usize,
    pub state: String,
    pub steps: usize,
    pub halted: bool,
    pub accepted: bool,
}

/// Serializes a run history as a JSON array of snapshots.
pub fn history_to_json(history: &[Configuration]) -> Result<String, MachineError> {
    let snapshots: Vec<Snapshot> = history.iter().map(Configuration::snapshot).collect();
    Ok(serde_json::to_string_pretty(&snapshots)?)
}
