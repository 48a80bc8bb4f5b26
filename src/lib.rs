//! This crate provides a deterministic single-tape Turing Machine execution engine.
//! It includes the immutable configuration model, the one-step transition engine with
//! tape growth, drivers that run a machine to completion (optionally recording history
//! or animating each step), and a small collection of built-in example machines.

pub mod configuration;
pub mod machine;
pub mod programs;
pub mod runner;
pub mod transition;
pub mod types;

/// Re-exports the `Configuration` entity, its serializable `Snapshot`, and JSON export.
pub use configuration::{history_to_json, Configuration, Snapshot};
/// Re-exports the free-function form of the step engine.
pub use machine::step;
/// Re-exports the built-in machine registry.
pub use programs::{Machine, MACHINES};
/// Re-exports the run and animation drivers.
pub use runner::{run_animated, run_until_halt, run_with_history};
/// Re-exports the transition function abstraction and its table implementation.
pub use transition::{TransitionFunction, TransitionTable};
/// Re-exports the shared types and defaults.
pub use types::{
    Direction, MachineError, MachineOptions, Rule, DEFAULT_ACCEPT_STATE, DEFAULT_BLANK_SYMBOL,
    DEFAULT_INITIAL_STATE, DEFAULT_REJECT_STATE, TAPE_GROWTH,
};
