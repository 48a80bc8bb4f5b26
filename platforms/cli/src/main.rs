mod render;

use clap::Parser;
use crossterm::style::Stylize;
use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;
use tapeware::{history_to_json, run_animated, run_with_history, Machine};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Runs the built-in Turing machine demos with an animated tape.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
#[clap(after_help = "EXAMPLES:
  tapeware-cli --list
  tapeware-cli anbn aabb
  tapeware-cli equal-01 --no-delay --no-wait")]
struct Cli {
    /// The built-in machine to run (see --list).
    machine: Option<String>,

    /// The input string. If omitted, every reference test case of the machine is run.
    input: Option<String>,

    /// Delay between steps in seconds.
    #[clap(long, default_value = "0.08", value_parser = parse_delay)]
    delay: Duration,

    /// Disable the delay between steps.
    #[clap(long)]
    no_delay: bool,

    /// Do not wait for Enter between test cases.
    #[clap(long)]
    no_wait: bool,

    /// Stop after this many transitions even if the machine has not halted.
    #[clap(short, long)]
    max_steps: Option<usize>,

    /// Print the run history as JSON instead of animating it.
    #[clap(long)]
    json: bool,

    /// List the built-in machines.
    #[clap(short, long)]
    list: bool,
}

fn parse_delay(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|e| format!("invalid delay '{}': {}", value, e))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("delay must be a non-negative number, got {}", value));
    }

    Ok(Duration::from_secs_f64(seconds))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if cli.list {
        for machine in Machine::all() {
            println!("{:<10} {} - {}", machine.name, machine.title, machine.description);
        }
        return Ok(());
    }

    let name = cli
        .machine
        .as_deref()
        .ok_or("no machine given; use --list to see the built-in machines")?;
    let machine = Machine::by_name(name)?;

    let cases: Vec<(String, Option<bool>)> = match &cli.input {
        Some(input) => vec![(input.clone(), None)],
        None => machine
            .test_cases
            .iter()
            .map(|&(input, expected)| (input.to_string(), Some(expected)))
            .collect(),
    };

    debug!(machine = machine.name, cases = cases.len(), json = cli.json, "running");

    if cli.json {
        for (input, _) in &cases {
            let history = run_with_history(&machine.configuration(input), cli.max_steps);
            println!("{}", history_to_json(&history)?);
        }
        return Ok(());
    }

    let delay = if cli.no_delay {
        Duration::ZERO
    } else {
        cli.delay
    };
    let interactive = !cli.no_wait && atty::is(atty::Stream::Stdin);

    println!("{}", "=".repeat(80));
    println!("{}", machine.title.cyan().bold());
    println!("{}", "=".repeat(80));
    println!();

    for (i, (input, expected)) in cases.iter().enumerate() {
        print!("Input: {}", format!("{:?}", input).yellow().bold());
        if let Some(expected) = expected {
            let label = if *expected { "ACCEPT" } else { "REJECT" };
            print!(" - Expected: {}", label.cyan());
        }
        println!();

        let result = run_animated(
            &machine.configuration(input),
            |config| println!("{}", render::render(config)),
            delay,
            cli.max_steps,
        );

        println!();
        println!("{}", render::verdict(&result));
        println!();

        if interactive && i + 1 < cases.len() {
            print!("Press Enter for next test...");
            io::stdout().flush()?;
            io::stdin().read_line(&mut String::new())?;
            println!();
        }
    }

    Ok(())
}
