//! Operator prompting
//!
//! The allocation engine never touches the console directly; it goes through
//! the [`OperatorIo`] trait so a scripted provider can stand in for a real
//! operator in tests and non-interactive ports.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use crate::error::{DivvyError, DivvyResult};

/// Source of operator-supplied decimal values
pub trait OperatorIo {
    /// Print a section heading (e.g. which user is being asked)
    fn heading(&mut self, text: &str);

    /// Ask the operator for one decimal value, labeled by `label`
    ///
    /// Implementations retry on invalid input; they only fail when no valid
    /// answer can ever be produced (e.g. end of input).
    fn prompt_decimal(&mut self, label: &str) -> DivvyResult<Decimal>;
}

/// Parse one line of operator input as an exact decimal
pub fn parse_decimal(answer: &str) -> DivvyResult<Decimal> {
    let answer = answer.trim();

    answer
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(answer))
        .map_err(|_| DivvyError::invalid_input(answer))
}

/// Interactive console prompting on stdin/stdout
///
/// Displays `\t{label}? `, reads one line, and re-prompts until the answer
/// parses as a decimal. End of input fails with
/// [`DivvyError::InputExhausted`].
#[derive(Debug, Default)]
pub struct ConsoleIo;

impl ConsoleIo {
    pub fn new() -> Self {
        Self
    }
}

impl OperatorIo for ConsoleIo {
    fn heading(&mut self, text: &str) {
        println!("{}", text);
    }

    fn prompt_decimal(&mut self, label: &str) -> DivvyResult<Decimal> {
        let stdin = io::stdin();

        loop {
            print!("\t{}? ", label);
            io::stdout().flush()?;

            let mut answer = String::new();
            if stdin.lock().read_line(&mut answer)? == 0 {
                return Err(DivvyError::input_exhausted(label));
            }

            match parse_decimal(&answer) {
                Ok(value) => return Ok(value),
                Err(_) => println!("Wrong input. Try again."),
            }
        }
    }
}

/// Scripted prompting for tests and non-interactive runs
///
/// Serves answers from a fixed queue and records every heading and prompt
/// label, so tests can assert exactly what the operator would have been
/// asked.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    answers: VecDeque<Decimal>,
    /// Headings printed so far, in order
    pub headings: Vec<String>,
    /// Prompt labels served so far, in order
    pub prompts: Vec<String>,
}

impl ScriptedIo {
    /// Create a scripted source that will serve `answers` in order
    pub fn new(answers: impl IntoIterator<Item = Decimal>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            headings: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Number of scripted answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl OperatorIo for ScriptedIo {
    fn heading(&mut self, text: &str) {
        self.headings.push(text.to_string());
    }

    fn prompt_decimal(&mut self, label: &str) -> DivvyResult<Decimal> {
        self.prompts.push(label.to_string());

        self.answers
            .pop_front()
            .ok_or_else(|| DivvyError::input_exhausted(label))
    }
}
