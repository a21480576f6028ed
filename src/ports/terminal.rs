//! Terminal port - line-oriented text I/O with the players

use crate::Result;

/// Line-oriented text interface to the people at the keyboard.
///
/// Everything the game shows or asks goes through this trait, which keeps the
/// session loop independent of stdin/stdout and lets tests script a whole
/// session from an in-memory buffer.
pub trait Terminal {
    /// Print `text` (without adding a newline) and read one line of input.
    ///
    /// The returned line has its trailing newline removed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InputClosed`] when the input has reached
    /// end-of-file.
    fn prompt(&mut self, text: &str) -> Result<String>;

    /// Print `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Print `text` exactly as given.
    fn show(&mut self, text: &str) -> Result<()>;

    /// Clear the screen, if the terminal supports it.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}
