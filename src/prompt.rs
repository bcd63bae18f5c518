//! Interactive line input as an injected capability.
//!
//! Every operation that asks the user a question takes a `Prompt`, so
//! tests can script answers instead of driving stdin.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Prompt {
    /// Print `question` on its own line and read one line of input.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Real prompt backed by stdin/stdout.
#[derive(Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        println!("{}", question);
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read input")?;

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Scripted prompt for tests: pops pre-loaded answers in order.
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, _question: &str) -> Result<String> {
        self.answers
            .pop_front()
            .context("Scripted prompt ran out of answers")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_prompt_pops_in_order() {
        let mut prompt = ScriptedPrompt::new(["first", "second"]);
        assert_eq!(prompt.ask("q1").unwrap(), "first");
        assert_eq!(prompt.ask("q2").unwrap(), "second");
        assert!(prompt.ask("q3").is_err());
    }
}
