use crate::error::{Result, ShopError};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-oriented terminal I/O over any reader and writer.
///
/// The binary wires this to stdin/stdout; tests drive it with in-memory buffers.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes `prompt` without a newline and reads a whole number from the next line.
    ///
    /// End of input yields `InputClosed`; anything that is not an integer yields
    /// `InvalidInput`.
    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShopError::InputClosed);
        }
        let trimmed = line.trim();
        trimmed
            .parse()
            .map_err(|_| ShopError::InvalidInput(trimmed.to_string()))
    }

    /// Like [`Console::prompt_int`], for identifiers.
    ///
    /// An integer that cannot be an id (negative, or too large) gives `None`, since it
    /// can never match a record.
    pub fn prompt_id(&mut self, prompt: &str) -> Result<Option<u32>> {
        let value = self.prompt_int(prompt)?;
        Ok(u32::try_from(value).ok())
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
