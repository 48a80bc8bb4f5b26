//! Terminal rendering of configurations: one line per configuration, with the
//! head cell highlighted and symbols coloured by kind.

use crossterm::style::{StyledContent, Stylize};
use tapeware::Configuration;

/// Styles a single tape cell.
fn cell(symbol: char, blank: char, under_head: bool) -> StyledContent<String> {
    let text = format!(" {symbol} ");

    if under_head {
        text.black().on_yellow().bold()
    } else if symbol == blank {
        text.white().on_dark_grey()
    } else if symbol.is_lowercase() {
        text.white().on_blue()
    } else if symbol.is_uppercase() {
        text.black().on_green()
    } else if symbol.is_ascii_digit() {
        text.white().on_magenta()
    } else {
        text.white().on_dark_grey()
    }
}

/// Renders the tape followed by the step number and the coloured state label.
pub fn render(config: &Configuration) -> String {
    let tape: String = config
        .tape()
        .iter()
        .enumerate()
        .map(|(i, &symbol)| cell(symbol, config.blank(), i == config.head()).to_string())
        .collect();

    let state = if config.is_accepted() {
        config.state().green().bold()
    } else if config.is_halted() {
        config.state().red().bold()
    } else {
        config.state().cyan().bold()
    };

    format!("{tape} - Step {}: State = {state}", config.steps())
}

/// Renders the final verdict of a run.
pub fn verdict(config: &Configuration) -> String {
    if config.is_accepted() {
        "ACCEPTED".green().bold().to_string()
    } else if config.is_halted() {
        "REJECTED".red().bold().to_string()
    } else {
        format!("STOPPED after {} steps", config.steps())
            .yellow()
            .bold()
            .to_string()
    }
}
