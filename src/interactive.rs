//! Line-oriented interactive mode.
//!
//! The only state is the current [`ViewInput`]; each line yields a new one
//! and the view is recomputed from scratch.

use crate::models::{class_of, parse_address, AddrClass, AddrError, PrefixLength};
use crate::output::OutputFormat;
use crate::processing::{compute_view, effective_prefix, random_address, ViewInput, ViewModel};
use colored::Colorize;
use rand::Rng;
use std::error::Error;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  <address>            show a dotted-decimal address
  /N | prefix N        set the prefix length (enables classless mode)
  classless on|off     use the typed prefix or the class default
  random A|B|C         random address of a class (classless off)
  help                 this text
  quit | exit          leave";

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// New input to render.
    Update(ViewInput),
    /// Blank line.
    Skip,
    Help,
    Quit,
    /// Message for the user, state unchanged.
    Rejected(String),
}

/// Apply one line to `state`. Anything not recognised as a command is taken as an address.
pub fn apply_command<R: Rng + ?Sized>(state: &ViewInput, line: &str, rng: &mut R) -> Step {
    let line = line.trim();
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        [] => Step::Skip,
        ["quit" | "exit"] => Step::Quit,
        ["help" | "?"] => Step::Help,
        ["random", tag] => match tag.parse::<AddrClass>() {
            Ok(class) => match random_address(class, rng) {
                Some(addr) => Step::Update(ViewInput {
                    address_text: addr.to_string(),
                    classless_enabled: false,
                    ..state.clone()
                }),
                None => Step::Rejected(AddrError::UnsupportedClass(class).to_string()),
            },
            Err(e) => Step::Rejected(e),
        },
        ["classless", "on"] => Step::Update(ViewInput {
            classless_enabled: true,
            prefix_length: shown_prefix(state),
            ..state.clone()
        }),
        ["classless", "off"] => Step::Update(ViewInput {
            classless_enabled: false,
            ..state.clone()
        }),
        ["prefix", value] => with_prefix(state, value),
        [word] if word.starts_with('/') => with_prefix(state, &word[1..]),
        _ => Step::Update(ViewInput {
            address_text: line.to_string(),
            ..state.clone()
        }),
    }
}

/// Prefix currently on display: the class default while classful.
fn shown_prefix(state: &ViewInput) -> PrefixLength {
    match parse_address(&state.address_text) {
        Ok(addr) => effective_prefix(class_of(addr), state),
        Err(_) => state.prefix_length,
    }
}

/// Keep the displayed prefix in the state, as the prefix field does.
fn write_back(state: &mut ViewInput, result: &Result<ViewModel, AddrError>) {
    if let Ok(view) = result {
        state.prefix_length = view.prefix_length;
    }
}

fn with_prefix(state: &ViewInput, value: &str) -> Step {
    Step::Update(ViewInput {
        classless_enabled: true,
        prefix_length: PrefixLength::from_input(value),
        ..state.clone()
    })
}

/// Run until `quit` or end of input, rendering every state change to `writer`.
///
/// Returns the last input state.
pub fn run<B, W>(
    reader: B,
    mut writer: W,
    initial: ViewInput,
    format: OutputFormat,
) -> Result<ViewInput, Box<dyn Error>>
where
    B: BufRead,
    W: Write,
{
    log::info!("#Start interactive mode");
    let mut rng = rand::thread_rng();
    let mut state = initial;
    let result = compute_view(&state);
    write_back(&mut state, &result);
    writeln!(writer, "{}", format.render(&result)?)?;

    for line in reader.lines() {
        let line = line?;
        match apply_command(&state, &line, &mut rng) {
            Step::Update(next) => {
                state = next;
                let result = compute_view(&state);
                write_back(&mut state, &result);
                writeln!(writer, "{}", format.render(&result)?)?;
            }
            Step::Skip => {}
            Step::Help => writeln!(writer, "{HELP}")?,
            Step::Quit => break,
            Step::Rejected(msg) => {
                log::warn!("Rejected command {line:?}: {msg}");
                writeln!(writer, "{}", msg.red())?;
            }
        }
    }

    Ok(state)
}
