//! Drivers that iterate the step engine: run to halt, run with full history,
//! and animated playback with a per-configuration hook and inter-step delay.
//!
//! All drivers stop when the configuration halts, when `max_steps` transitions
//! have been applied, or when a step makes no progress (an undefined transition
//! with no reject state configured). Reaching the step bound is not an error;
//! check [`Configuration::is_halted`] on the result.

use crate::configuration::Configuration;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Iterates configurations produced by repeated steps, starting after `config`.
struct Run {
    current: Configuration,
    remaining: Option<usize>,
}

impl Run {
    fn new(config: &Configuration, max_steps: Option<usize>) -> Self {
        Self {
            current: config.clone(),
            remaining: max_steps,
        }
    }

    fn is_finished(&self) -> bool {
        self.current.is_halted() || self.remaining == Some(0)
    }
}

impl Iterator for Run {
    type Item = Configuration;

    fn next(&mut self) -> Option<Configuration> {
        if self.is_finished() {
            return None;
        }

        let next = self.current.step();
        if next == self.current {
            // Stuck: nothing will change on further steps.
            return None;
        }

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        self.current = next.clone();
        Some(next)
    }
}

fn log_outcome(config: &Configuration) {
    let outcome = if config.is_accepted() {
        "accepted"
    } else if config.is_halted() {
        "rejected"
    } else {
        "stopped"
    };
    debug!(steps = config.steps(), state = %config.state(), outcome, "run finished");
}

/// Runs the machine until it halts or `max_steps` transitions have been applied.
pub fn run_until_halt(config: &Configuration, max_steps: Option<usize>) -> Configuration {
    let last = Run::new(config, max_steps)
        .last()
        .unwrap_or_else(|| config.clone());
    log_outcome(&last);
    last
}

/// Runs the machine like [`run_until_halt`], returning every configuration visited.
///
/// The first element is `config` itself, so the length is the number of
/// transitions applied plus one.
pub fn run_with_history(config: &Configuration, max_steps: Option<usize>) -> Vec<Configuration> {
    let mut history = vec![config.clone()];
    history.extend(Run::new(config, max_steps));
    if let Some(last) = history.last() {
        log_outcome(last);
    }
    history
}

/// Runs the machine with a hook invoked on every configuration.
///
/// `on_each` sees the initial configuration first; before each subsequent
/// transition the calling thread sleeps for `delay` (no sleep when zero).
/// There is no way to interrupt a run other than `max_steps`.
pub fn run_animated<F>(
    config: &Configuration,
    mut on_each: F,
    delay: Duration,
    max_steps: Option<usize>,
) -> Configuration
where
    F: FnMut(&Configuration),
{
    on_each(config);

    let mut run = Run::new(config, max_steps);
    while !run.is_finished() {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        match run.next() {
            Some(next) => on_each(&next),
            None => break,
        }
    }

    log_outcome(&run.current);
    run.current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{TransitionFunction, TransitionTable};
    use crate::types::{Direction, MachineOptions, Rule};
    use std::sync::Arc;
    use std::time::Instant;

    /// Moves right over `a`s and accepts on the first blank.
    fn skip_as() -> Arc<dyn TransitionFunction> {
        Arc::new(
            TransitionTable::new()
                .rule("q₀", 'a', "q₀", 'a', Direction::Right)
                .rule("q₀", '□', "qₐ", '□', Direction::Right),
        )
    }

    fn forever_right() -> Arc<dyn TransitionFunction> {
        Arc::new(|_: &str, symbol: char| Some(Rule::new("q₀", symbol, Direction::Right)))
    }

    #[test]
    fn test_run_until_halt_accepts() {
        let config = Configuration::with_defaults("aaa", skip_as());

        let result = run_until_halt(&config, None);

        assert!(result.is_accepted());
        assert_eq!(result.steps(), 4);
    }

    #[test]
    fn test_run_until_halt_respects_step_bound() {
        let config = Configuration::with_defaults("", forever_right());

        let result = run_until_halt(&config, Some(5));

        assert_eq!(result.steps(), 5);
        assert!(!result.is_halted());
    }

    #[test]
    fn test_zero_step_bound_returns_input() {
        let config = Configuration::with_defaults("aaa", skip_as());

        assert_eq!(run_until_halt(&config, Some(0)), config);
        assert_eq!(run_with_history(&config, Some(0)), vec![config]);
    }

    #[test]
    fn test_run_on_halted_configuration() {
        let options = MachineOptions::default().with_initial_state("qᵣ");
        let config = Configuration::new("a", forever_right(), &options).unwrap();

        assert_eq!(run_until_halt(&config, None), config);
        assert_eq!(run_with_history(&config, None).len(), 1);
    }

    #[test]
    fn test_history_starts_with_initial_and_ends_halted() {
        let config = Configuration::with_defaults("aa", skip_as());

        let history = run_with_history(&config, None);

        assert_eq!(history.len(), 4);
        assert_eq!(history[0], config);
        assert!(history[3].is_accepted());
        for (i, c) in history.iter().enumerate() {
            assert_eq!(c.steps(), i);
        }
    }

    #[test]
    fn test_history_length_with_bound() {
        let config = Configuration::with_defaults("", forever_right());

        let history = run_with_history(&config, Some(7));

        assert_eq!(history.len(), 8);
        assert_eq!(history.last().unwrap().steps(), 7);
    }

    #[test]
    fn test_stuck_machine_terminates() {
        let options = MachineOptions::default().with_reject_states(Vec::<String>::new());
        let config = Configuration::new("a", Arc::new(TransitionTable::new()), &options).unwrap();

        let result = run_until_halt(&config, None);

        assert_eq!(result, config);
        assert!(!result.is_halted());
        assert_eq!(run_with_history(&config, None).len(), 1);
    }

    #[test]
    fn test_run_animated_invokes_hook_per_configuration() {
        let config = Configuration::with_defaults("aa", skip_as());
        let mut seen = Vec::new();

        let result = run_animated(&config, |c| seen.push(c.clone()), Duration::ZERO, None);

        assert!(result.is_accepted());
        assert_eq!(seen, run_with_history(&config, None));
        assert_eq!(seen.last(), Some(&result));
    }

    #[test]
    fn test_run_animated_respects_step_bound() {
        let config = Configuration::with_defaults("", forever_right());
        let mut calls = 0;

        let result = run_animated(&config, |_| calls += 1, Duration::ZERO, Some(5));

        assert_eq!(result.steps(), 5);
        assert!(!result.is_halted());
        assert_eq!(calls, 6);
    }

    #[test]
    fn test_run_animated_sleeps_between_steps() {
        let config = Configuration::with_defaults("", forever_right());
        let delay = Duration::from_millis(5);

        let started = Instant::now();
        run_animated(&config, |_| {}, delay, Some(3));

        assert!(started.elapsed() >= delay * 3);
    }
}
