use std::{io, process::ExitCode};

use executable::Runner;
use prompt::ConsolePrompter;
use shell::Shell;

mod buffer;
mod builtin;
mod command;
mod error;
mod executable;
mod prompt;
mod reader;
mod shell;
mod tokenizer;

#[cfg(test)]
mod testutil;

fn main() -> ExitCode {
    env_logger::init();

    let reader = io::stdin().lock();
    let writer = io::stdout();
    let error_writer = io::stderr();
    let prompter = ConsolePrompter::new(reader, writer, error_writer);

    let mut shell = Shell::new(prompter, Runner::new());

    if let Err(e) = shell.run() {
        return ExitCode::from(shell::conclude(&e, &mut io::stderr()));
    }

    return ExitCode::SUCCESS;
}
