use crate::commands::{self, Context, FAREWELL, WRONG_COMMAND};
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use rolodex_core::time::local_today;
use rolodex_core::{AddressBook, Storage};
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompt/reply loop over one address book. The book is saved when the user
/// types an exit sentinel or input runs out.
pub struct Session<'a, S> {
    book: &'a mut AddressBook,
    storage: &'a S,
    prompt: &'a str,
    clock: fn() -> NaiveDate,
}

impl<'a, S> Session<'a, S>
where
    S: Storage,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(book: &'a mut AddressBook, storage: &'a S, prompt: &'a str) -> Self {
        Self {
            book,
            storage,
            prompt,
            clock: local_today,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Runs until a sentinel or end of input. The book is saved even when
    /// reading or writing fails part way, and that failure is returned after.
    pub fn run<R: BufRead, W: Write>(mut self, mut input: R, mut output: W) -> Result<()> {
        let conversation = self.converse(&mut input, &mut output);

        self.book
            .save_to(self.storage)
            .with_context(|| "save address book")?;
        conversation?;
        writeln!(output, "{}", FAREWELL)?;
        Ok(())
    }

    fn converse<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .with_context(|| "read command")?;
            if read == 0 {
                debug!("end of input");
                writeln!(output)?;
                return Ok(());
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(err) => {
                    debug!(error = %err, "command is not valid utf-8");
                    writeln!(output, "{}", WRONG_COMMAND)?;
                    continue;
                }
            };
            if commands::is_exit_sentinel(line) {
                return Ok(());
            }

            let mut ctx = Context {
                book: &mut *self.book,
                today: (self.clock)(),
            };
            let reply = commands::dispatch(&mut ctx, line);
            writeln!(output, "{}", reply)?;
        }
    }
}
