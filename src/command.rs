use crate::{builtin, executable::ExecutableRunner, prompt::Prompter};

/// What the loop does after a command has finished.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Signal {
    Continue,
    Terminate,
}

/// Runs one tokenized command line: builtin when the name is registered,
/// external program otherwise. An empty line is a no-op.
///
/// Recoverable failures are reported through `prompter` and still yield
/// [`Signal::Continue`]; `Err` means the terminal itself is unusable.
pub fn dispatch(
    tokens: &[String],
    prompter: &mut impl Prompter,
    runner: &impl ExecutableRunner,
) -> anyhow::Result<Signal> {
    let Some(name) = tokens.first() else {
        return Ok(Signal::Continue);
    };

    if let Some(builtin) = builtin::lookup(name) {
        log::debug!("running builtin {}", builtin.name);
        return (builtin.handler)(tokens, prompter);
    }

    return run_external_command(name, &tokens[1..], prompter, runner);
}

fn run_external_command(
    name: &str,
    args: &[String],
    prompter: &mut impl Prompter,
    runner: &impl ExecutableRunner,
) -> anyhow::Result<Signal> {
    if let Err(e) = runner.launch(name, args) {
        log::debug!("launching {} {:?} failed: {:?}", name, args, e);
        prompter.report(&e.diagnostic())?;
    }

    return Ok(Signal::Continue);
}
