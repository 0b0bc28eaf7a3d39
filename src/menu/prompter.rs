//! Request/response prompting
//!
//! The menu talks to the user only through [`Prompter`], so the same flow
//! runs against a terminal or a scripted transcript.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Present a prompt and receive one answer
pub trait Prompter {
    /// Ask for one line of input, trimmed. `None` means the user is gone
    /// (end of input or an unreadable terminal).
    fn ask(&mut self, prompt: &str) -> Option<String>;

    /// Show a message
    fn say(&mut self, message: &str);
}

/// Prompter over a reader/writer pair, normally stdin/stdout
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    /// Prompt on the process's terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{}", prompt).ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn say(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message);
    }
}

/// Prompter that replays canned answers and records everything shown
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and message, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any recorded line contains the text
    pub fn saw(&self, text: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(text))
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.transcript.push(prompt.to_string());
        self.answers.pop_front().map(|a| a.trim().to_string())
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_prompter_reads_trimmed_lines() {
        let input = b"  Ada  \n".as_slice();
        let mut output = Vec::new();
        let mut prompter = ConsolePrompter::new(input, &mut output);

        assert_eq!(prompter.ask("Name: ").as_deref(), Some("Ada"));
        assert_eq!(prompter.ask("Phone: "), None);
        prompter.say("done");

        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown, "Name: Phone: done\n");
    }

    #[test]
    fn test_scripted_prompter() {
        let mut prompter = ScriptedPrompter::new(["1", " two "]);
        assert_eq!(prompter.ask("a?").as_deref(), Some("1"));
        prompter.say("hello");
        assert_eq!(prompter.ask("b?").as_deref(), Some("two"));
        assert_eq!(prompter.ask("c?"), None);

        assert!(prompter.saw("hello"));
        assert_eq!(prompter.transcript().len(), 4);
        assert_eq!(prompter.remaining(), 0);
    }
}
