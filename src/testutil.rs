use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use crate::{error::ShellError, prompt::Prompter};

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serialises tests that read or change the process working directory.
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    return CWD_LOCK.lock().unwrap_or_else(|poisoned| return poisoned.into_inner());
}

/// In-memory terminal that records everything written to it.
#[derive(Default)]
pub struct MemoryPrompter {
    pub input: VecDeque<String>,
    pub output: String,
    pub errors: String,
    eof: bool,
}

impl MemoryPrompter {
    pub fn with_lines(lines: &[&str]) -> Self {
        return MemoryPrompter {
            input: lines.iter().map(|line| return line.to_string()).collect(),
            ..Default::default()
        };
    }
}

impl Prompter for MemoryPrompter {
    fn read(&mut self) -> Result<String, ShellError> {
        match self.input.pop_front() {
            Some(line) => return Ok(line),
            None => {
                self.eof = true;
                return Ok(String::new());
            }
        }
    }

    fn at_eof(&self) -> bool {
        return self.eof;
    }

    fn prompt(&mut self, prompt: &str) -> anyhow::Result<()> {
        self.output.push_str(prompt);
        return Ok(());
    }

    fn report(&mut self, message: &str) -> anyhow::Result<()> {
        self.errors.push_str(message);
        self.errors.push('\n');
        return Ok(());
    }
}
