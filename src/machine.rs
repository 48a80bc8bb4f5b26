//! This module implements the step engine: applying the transition function once
//! to a configuration, including tape growth at either boundary and the implicit
//! rejection of undefined transitions.

use crate::configuration::Configuration;
use crate::types::{Direction, Rule, TAPE_GROWTH};
use tracing::{debug, trace};

impl Configuration {
    /// Executes a single transition and returns the resulting configuration.
    ///
    /// * A halted configuration is returned unchanged.
    /// * If the transition function has no rule for the current state and symbol,
    ///   the machine moves to the first reject state with the tape and head untouched.
    ///   Without any reject state this is a no-op.
    /// * Otherwise the rule's symbol is written under the head, the head moves, and
    ///   the tape grows by `TAPE_GROWTH` blanks if the head would leave it.
    ///
    /// `self` is never modified.
    pub fn step(&self) -> Configuration {
        if self.is_halted() {
            return self.clone();
        }

        let symbol = self.current_symbol();
        let rule = match self.delta.transition(&self.state, symbol) {
            Some(rule) => rule,
            None => return self.reject(symbol),
        };

        trace!(
            state = %self.state,
            %symbol,
            next = %rule.next_state,
            write = %rule.write,
            direction = %rule.direction,
            "applying rule"
        );

        self.apply(rule)
    }

    fn apply(&self, rule: Rule) -> Configuration {
        let mut tape = self.tape.clone();
        tape[self.head] = rule.write;

        let head = match rule.direction {
            Direction::Left => {
                if self.head == 0 {
                    // Prepend blanks; the cell left of index 0 becomes TAPE_GROWTH - 1.
                    let mut grown = vec![self.blank; TAPE_GROWTH];
                    grown.extend_from_slice(&tape);
                    tape = grown;
                    debug!(len = tape.len(), "tape grown on the left");
                    TAPE_GROWTH - 1
                } else {
                    self.head - 1
                }
            }
            Direction::Right => {
                let head = self.head + 1;
                if head >= tape.len() {
                    tape.resize(tape.len() + TAPE_GROWTH, self.blank);
                    debug!(len = tape.len(), "tape grown on the right");
                }
                head
            }
        };

        Configuration {
            tape,
            head,
            state: rule.next_state,
            steps: self.steps + 1,
            blank: self.blank,
            delta: self.delta.clone(),
            accept_states: self.accept_states.clone(),
            reject_states: self.reject_states.clone(),
        }
    }

    fn reject(&self, symbol: char) -> Configuration {
        match self.reject_states.iter().next() {
            Some(reject_state) => {
                debug!(
                    state = %self.state,
                    %symbol,
                    reject = %reject_state,
                    "no rule defined, rejecting"
                );
                Configuration {
                    state: reject_state.clone(),
                    steps: self.steps + 1,
                    ..self.clone()
                }
            }
            None => {
                debug!(
                    state = %self.state,
                    %symbol,
                    "no rule defined and no reject state configured"
                );
                self.clone()
            }
        }
    }
}

/// Executes a single transition. Equivalent to [`Configuration::step`].
pub fn step(config: &Configuration) -> Configuration {
    config.step()
}
