use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where raw card tokens come from on a human turn. The provider only moves
/// strings; rules and parsing happen on the other side of the boundary.
pub trait InputProvider {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Interactive provider: prompt on stdout, one trimmed line from stdin.
/// Blocks until the player answers; EOF is a collaborator failure surfaced
/// to the caller.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed mid-game",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Canned responses for tests; errors once the script runs dry so a test
/// that over-prompts fails instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.lines.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }
}
