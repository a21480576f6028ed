//! Console terminal over any buffered reader and writer.

use std::io::{BufRead, Write};

use crate::{Result, error::Error, ports::Terminal};

/// ANSI sequence: erase the display and move the cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Terminal backed by a reader/writer pair.
///
/// The binary wires it to locked stdin/stdout; tests use `&[u8]` input and a
/// `Vec<u8>` output so the transcript can be inspected afterwards.
///
/// # Examples
///
/// ```
/// use minimax_ttt::{adapters::Console, ports::Terminal};
///
/// let mut console = Console::new("5\n".as_bytes(), Vec::new());
/// let answer = console.prompt("Move: ")?;
/// assert_eq!(answer, "5");
/// assert_eq!(console.into_writer(), b"Move: ");
/// # Ok::<(), minimax_ttt::Error>(())
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console that never clears the screen
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            clear_screen: false,
        }
    }

    /// Enable or disable ANSI screen clearing
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Consume the console and hand back the writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn prompt(&mut self, text: &str) -> Result<String> {
        self.show(text)?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| Error::io("read from the console", e))?;
        if read == 0 {
            return Err(Error::InputClosed {
                prompt: text.trim().to_string(),
            });
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}").map_err(|e| Error::io("write to the console", e))
    }

    fn show(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| Error::io("write to the console", e))
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            self.show(CLEAR_SCREEN)?;
        }
        Ok(())
    }
}
