//! This module defines the core data structures and types used throughout the Turing Machine
//! engine, including transition rules, head directions, construction options, and error types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The default blank symbol used on the Turing Machine tape.
pub const DEFAULT_BLANK_SYMBOL: char = '□';
/// The default initial control state.
pub const DEFAULT_INITIAL_STATE: &str = "q₀";
/// The default accepting state.
pub const DEFAULT_ACCEPT_STATE: &str = "qₐ";
/// The default rejecting state.
pub const DEFAULT_REJECT_STATE: &str = "qᵣ";
/// Number of blank cells added whenever the head leaves the represented tape,
/// and the amount of trailing slack allocated for a fresh tape.
pub const TAPE_GROWTH: usize = 10;

/// Represents the possible directions the Turing Machine head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
}

impl Direction {
    /// Returns the short token for this direction (`L` or `R`).
    pub fn token(&self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl TryFrom<char> for Direction {
    type Error = MachineError;

    fn try_from(token: char) -> Result<Self, Self::Error> {
        match token {
            'L' | 'l' | '<' => Ok(Direction::Left),
            'R' | 'r' | '>' => Ok(Direction::Right),
            other => Err(MachineError::UnknownDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = MachineError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "L" | "l" | "<" | "left" | "Left" => Ok(Direction::Left),
            "R" | "r" | ">" | "right" | "Right" => Ok(Direction::Right),
            other => Err(MachineError::UnknownDirection(other.to_string())),
        }
    }
}

/// The right-hand side of a transition: the state to enter, the symbol to write
/// under the head, and the direction to move afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// The next state the machine transitions to.
    pub next_state: String,
    /// The symbol written at the current head position.
    pub write: char,
    /// The direction the head moves after writing.
    pub direction: Direction,
}

impl Rule {
    pub fn new(next_state: impl Into<String>, write: char, direction: Direction) -> Self {
        Self {
            next_state: next_state.into(),
            write,
            direction,
        }
    }

    /// Builds a rule from a direction token such as `"L"` or `"R"`.
    ///
    /// Returns `MachineError::UnknownDirection` if the token is not recognised.
    pub fn parse(
        next_state: impl Into<String>,
        write: char,
        direction: &str,
    ) -> Result<Self, MachineError> {
        Ok(Self::new(next_state, write, direction.parse()?))
    }
}

/// Construction options for a fresh configuration.
///
/// Every field has a named default, so call sites only override what differs
/// from the conventional `q₀` / `qₐ` / `qᵣ` / `□` machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// The state the machine starts in.
    pub initial_state: String,
    /// States that halt the machine and accept the input.
    pub accept_states: BTreeSet<String>,
    /// States that halt the machine and reject the input.
    pub reject_states: BTreeSet<String>,
    /// The blank symbol used to pad the tape.
    pub blank: char,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            initial_state: DEFAULT_INITIAL_STATE.to_string(),
            accept_states: BTreeSet::from([DEFAULT_ACCEPT_STATE.to_string()]),
            reject_states: BTreeSet::from([DEFAULT_REJECT_STATE.to_string()]),
            blank: DEFAULT_BLANK_SYMBOL,
        }
    }
}

impl MachineOptions {
    pub fn with_initial_state(mut self, state: impl Into<String>) -> Self {
        self.initial_state = state.into();
        self
    }

    pub fn with_accept_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept_states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reject_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reject_states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_blank(mut self, blank: char) -> Self {
        self.blank = blank;
        self
    }

    /// Checks that no state is both accepting and rejecting.
    pub fn validate(&self) -> Result<(), MachineError> {
        let overlap: Vec<String> = self
            .accept_states
            .intersection(&self.reject_states)
            .cloned()
            .collect();

        if overlap.is_empty() {
            Ok(())
        } else {
            Err(MachineError::OverlappingStates(overlap))
        }
    }
}

/// Represents the errors that can occur while building or driving a machine.
///
/// Rejection of an input is never an error; it is a normal halting outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A state appears in both the accept and the reject set.
    #[error("States are both accepting and rejecting: {0:?}")]
    OverlappingStates(Vec<String>),
    /// A direction token other than left or right was supplied.
    #[error("Unknown direction: {0:?}")]
    UnknownDirection(String),
    /// No built-in machine is registered under the given name.
    #[error("Unknown machine: {0}")]
    UnknownMachine(String),
    /// A configuration or history could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MachineError {
    fn from(error: serde_json::Error) -> Self {
        MachineError::Serialization(error.to_string())
    }
}
