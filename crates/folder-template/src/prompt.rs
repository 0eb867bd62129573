//! User interaction capability

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented conversation with the user
pub trait Prompt {
    /// Show a message
    fn say(&mut self, message: &str) -> io::Result<()>;

    /// Show `question` and read one line of answer
    ///
    /// Returns `None` once the input is exhausted. The line terminator is not
    /// part of the answer.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;

    /// Ask a yes/no question; only `a` ("ano") counts as yes
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.ask(question)?.as_deref().map_or(false, is_yes))
    }
}

/// Returns true for an affirmative answer, ignoring case and surrounding space
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("a")
}

/// [`Prompt`] reading answers from a [`BufRead`] and writing to a [`Write`]
///
/// Over stdin/stdout this is the interactive console; over in-memory buffers
/// it replays a scripted session.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.say(question)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(Some(answer.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_reads_lines() {
        let mut prompt = scripted("Projekt A\r\n  \n");
        assert_eq!(prompt.ask("Název?").unwrap().as_deref(), Some("Projekt A"));
        assert_eq!(prompt.ask("Cesta?").unwrap().as_deref(), Some("  "));
        assert_eq!(prompt.ask("Další?").unwrap(), None);

        let output = String::from_utf8(prompt.into_inner().1).unwrap();
        assert_eq!(output, "Název?\nCesta?\nDalší?\n");
    }

    #[test]
    fn test_confirm() {
        let mut prompt = scripted("A\nn\nano\n");
        assert!(prompt.confirm("Přepsat?").unwrap());
        assert!(!prompt.confirm("Přepsat?").unwrap());
        assert!(!prompt.confirm("Přepsat?").unwrap());
        assert!(!prompt.confirm("Přepsat?").unwrap());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes(" a "));
        assert!(is_yes("A"));
        assert!(!is_yes("y"));
        assert!(!is_yes(""));
    }
}
