//! Console Session State
//!
//! A session owns the cart, the EAN registry and the console it talks
//! through. Each test can build its own session over in-memory I/O.

use super::models::{Command, Flow, COMMAND_PROMPT, GOODBYE_MESSAGE, STARTED_MESSAGE};
use super::registry::EanRegistry;
use crate::cart::Cart;
use crate::config::SessionConfig;
use crate::error::{InputError, SessionError};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

// =============================================================================
// Console
// =============================================================================

/// Line-oriented prompt/response over any reader and writer.
pub struct Console<R, W> {
    /// Source of user input lines
    reader: R,

    /// Destination for prompts and results
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> Result<(), SessionError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one line, line ending
    /// stripped. End of input is reported as [`SessionError::InputClosed`].
    pub fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Re-issues `prompt` until `parse` accepts the line. Rejections are
    /// silent unless the error carries a notice for the user.
    pub fn prompt_until<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, SessionError>
    where
        F: FnMut(&str) -> Result<T, InputError>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(error = %err, "Input rejected");
                    if let Some(notice) = err.notice() {
                        self.say(notice)?;
                    }
                }
            }
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

// =============================================================================
// Session
// =============================================================================

/// One interactive run of the cart: its state plus the console it reads from.
pub struct Session<R, W> {
    /// Products entered so far
    pub(super) cart: Cart,

    /// EAN codes currently in use, owned here rather than globally
    pub(super) registry: EanRegistry,

    /// Prompting front end over the session's reader and writer
    pub(super) console: Console<R, W>,

    /// Settings fixed at construction
    pub(super) config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, config: SessionConfig) -> Self {
        Self {
            cart: Cart::new(),
            registry: EanRegistry::default(),
            console: Console::new(reader, writer),
            config,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn registry(&self) -> &EanRegistry {
        &self.registry
    }

    /// Runs the command loop until `T` is entered or input runs out.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!(totals = ?self.config.totals, "Session started");
        self.console.say(STARTED_MESSAGE)?;

        loop {
            let step = self
                .console
                .read_line(COMMAND_PROMPT)
                .and_then(|line| self.execute_command(Command::parse(&line)));

            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break,
                Err(SessionError::InputClosed) => {
                    warn!("Input closed before terminate command");
                    // Keep the farewell on its own line after a dangling prompt
                    self.console.say("")?;
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        self.console.say(GOODBYE_MESSAGE)?;
        info!(products = self.cart.len(), "Session finished");
        Ok(())
    }

    /// Everything written so far; used to inspect in-memory transcripts.
    pub fn writer(&self) -> &W {
        self.console.writer()
    }

    pub fn into_writer(self) -> W {
        self.console.into_parts().1
    }
}
