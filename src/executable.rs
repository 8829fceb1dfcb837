use std::{io, process::ExitStatus};

use crate::error::ShellError;

/// How a child process reached its terminal state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Disposition {
    Exited(i32),
    Signaled(i32),
}

impl From<ExitStatus> for Disposition {
    #[cfg(unix)]
    fn from(status: ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;

        return match status.signal() {
            Some(signal) => Disposition::Signaled(signal),
            None => Disposition::Exited(status.code().unwrap_or(-1)),
        };
    }

    #[cfg(not(unix))]
    fn from(status: ExitStatus) -> Self {
        return Disposition::Exited(status.code().unwrap_or(-1));
    }
}

pub trait ExecutableRunner {
    /// Runs `program` (argument zero) followed by `args`, inheriting environment,
    /// working directory and standard streams, and blocks until it exits or is
    /// killed. Stopped children are not terminal; the wait carries on past them.
    fn launch(&self, program: &str, args: &[String]) -> Result<Disposition, ShellError> {
        let mut child = std::process::Command::new(program)
            .args(args)
            .spawn()
            .map_err(|e| return classify_spawn_error(program, e))?;

        log::debug!("spawned {} as pid {}", program, child.id());

        let status = child.wait()?;
        let disposition = Disposition::from(status);

        log::debug!("{} finished: {:?}", program, disposition);

        return Ok(disposition);
    }
}

impl<T: ExecutableRunner + ?Sized> ExecutableRunner for &T {
    fn launch(&self, program: &str, args: &[String]) -> Result<Disposition, ShellError> {
        return (**self).launch(program, args);
    }
}

/// Resource exhaustion means no process could be created at all; anything else
/// means the program itself could not be started.
fn classify_spawn_error(program: &str, error: io::Error) -> ShellError {
    match error.kind() {
        io::ErrorKind::OutOfMemory | io::ErrorKind::WouldBlock => {
            return ShellError::Spawn(error);
        }
        _ => {
            return ShellError::Exec {
                program: program.to_string(),
                source: error,
            };
        }
    }
}

pub struct Runner {}

impl ExecutableRunner for Runner {}

impl Runner {
    pub fn new() -> Self {
        return Self {};
    }
}
