//! The console: prompting, board frames, and status lines over a pair of
//! byte streams.

use crate::input::parse_move;
use anyhow::{Context, Result, bail};
use crossterm::Command;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use noughts_core::{Board, Move};
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::{debug, trace};

/// Shown when a line does not parse as a move.
const MALFORMED_INPUT: &str = "Invalid format. Please use row(1-3) + column(a-c), like 2b.";

/// Input and output for one game session.
///
/// Generic over the byte streams so tests can drive it from in-memory
/// buffers; a real session wraps the process streams via
/// [`Console::stdio`]. Dropping the console releases the streams.
pub struct Console<R, W> {
    reader: BufReader<R>,
    writer: W,
    clear_screen: bool,
}

impl Console<Stdin, Stdout> {
    /// Console over the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Wraps a reader and writer. Screen clearing starts enabled.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            clear_screen: true,
        }
    }

    /// Sets whether each frame clears the screen first.
    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Prompts until the reader yields a line that parses as a move.
    ///
    /// Malformed lines are reported and retried here, so callers only ever
    /// see a syntactically valid move; lines are decoded lossily, so bytes
    /// that are not valid UTF-8 count as malformed too. Fails when the
    /// input stream closes before one arrives.
    pub async fn request_move(&mut self, prompt: &str) -> Result<Move> {
        loop {
            self.writer.write_all(prompt.as_bytes()).await?;
            self.writer.flush().await?;

            let mut raw = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut raw)
                .await
                .context("failed to read from the console")?;
            if read == 0 {
                bail!("input closed before a move was supplied");
            }

            let line = String::from_utf8_lossy(&raw);
            match parse_move(&line) {
                Some(mov) => {
                    trace!(input = line.trim(), %mov, "parsed move");
                    return Ok(mov);
                }
                None => {
                    debug!(input = line.trim(), "malformed move input");
                    self.status(MALFORMED_INPUT).await?;
                }
            }
        }
    }

    /// Draws the board, clearing the screen first when enabled.
    pub async fn draw_board(&mut self, board: &Board) -> Result<()> {
        if self.clear_screen {
            let mut ansi = String::new();
            Clear(ClearType::All).write_ansi(&mut ansi)?;
            MoveTo(0, 0).write_ansi(&mut ansi)?;
            self.writer.write_all(ansi.as_bytes()).await?;
        }
        self.writer.write_all(b"\n").await?;
        for line in board.render() {
            self.writer.write_all(line.as_bytes()).await?;
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Writes one status line.
    pub async fn status(&mut self, message: &str) -> Result<()> {
        self.writer.write_all(message.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}
