//! Interactive session over line-oriented input and output.
//!
//! The session reads one command per line, prints its result and stops on
//! `close`/`exit` or end of input, saving the directory before returning.

use crate::commands::CommandHandler;
use crate::models::Directory;
use crate::repositories::DirectoryRepository;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Greeting printed once at start-up.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before each line is read.
pub const PROMPT: &str = "Enter a command: ";

/// One run of the assistant.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    directory: Directory,
    repository: Arc<dyn DirectoryRepository>,
    handler: CommandHandler,
    clock: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a session over an already loaded directory.
    pub fn new(
        reader: R,
        writer: W,
        directory: Directory,
        repository: Arc<dyn DirectoryRepository>,
        handler: CommandHandler,
    ) -> Self {
        Self {
            reader,
            writer,
            directory,
            repository,
            handler,
            clock: local_today,
        }
    }

    /// Use `clock` instead of the local calendar date for birthday queries.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Run until `close`/`exit` or end of input, then save the directory.
    ///
    /// Command failures are printed and do not end the session. I/O errors
    /// on the streams and storage errors on save are returned.
    ///
    /// # Returns
    /// The directory as it was saved
    pub async fn run(mut self) -> Result<Directory> {
        self.write_line(WELCOME).await?;

        let mut buf = Vec::new();
        loop {
            self.writer.write_all(PROMPT.as_bytes()).await?;
            self.writer.flush().await?;

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf).await? == 0 {
                tracing::info!("End of input, closing session");
                self.write_line("").await?;
                break;
            }

            // Undecodable bytes become U+FFFD and fail validation like any other bad input.
            let line = String::from_utf8_lossy(&buf);
            let outcome = self
                .handler
                .handle_line(&mut self.directory, &line, (self.clock)());
            self.write_line(outcome.text()).await?;

            if outcome.is_exit() {
                break;
            }
        }

        self.repository.save(&self.directory).await?;
        Ok(self.directory)
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}
