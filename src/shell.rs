use std::io;

use crate::{
    command::{self, Signal},
    error::ShellError,
    executable::ExecutableRunner,
    prompt::Prompter,
    tokenizer,
};

pub const PROMPT: &str = "> ";

enum State {
    Prompting,
    Reading,
    Tokenizing(String),
    Dispatching(Vec<String>),
    Terminated,
}

pub struct Shell<P: Prompter, E: ExecutableRunner> {
    prompter: P,
    runner: E,
}

impl<P: Prompter, E: ExecutableRunner> Shell<P, E> {
    pub fn new(prompter: P, runner: E) -> Self {
        return Shell { prompter, runner };
    }

    /// Prompts, reads, tokenizes and dispatches until `exit` or end of input.
    ///
    /// Returns `Err` only when the terminal becomes unusable or storage runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut state = State::Prompting;

        loop {
            state = match state {
                State::Prompting => {
                    self.prompter.prompt(PROMPT)?;
                    State::Reading
                }
                State::Reading => {
                    let line = self.prompter.read()?;
                    if line.is_empty() && self.prompter.at_eof() {
                        log::debug!("end of input");
                        State::Terminated
                    } else {
                        State::Tokenizing(line)
                    }
                }
                State::Tokenizing(line) => State::Dispatching(tokenizer::tokenize(&line)?),
                State::Dispatching(tokens) => {
                    match command::dispatch(&tokens, &mut self.prompter, &self.runner)? {
                        Signal::Continue => State::Prompting,
                        Signal::Terminate => State::Terminated,
                    }
                }
                State::Terminated => return Ok(()),
            };
        }
    }
}

/// Whether a failure escaping [`Shell::run`] must bring the process down.
pub fn is_fatal(error: &anyhow::Error) -> bool {
    return error
        .downcast_ref::<ShellError>()
        .map_or(false, |e| return e.is_fatal());
}

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Reports a failure that ended the loop and picks the process exit status.
/// A diagnostics stream that cannot be written to does not change the status.
pub fn conclude(error: &anyhow::Error, error_writer: &mut impl io::Write) -> u8 {
    let _ = writeln!(error_writer, "{}: {}", crate::error::DIAGNOSTIC_PREFIX, error);

    if is_fatal(error) {
        return EXIT_FAILURE;
    }

    return EXIT_SUCCESS;
}
