use crate::*;
use anyhow::Context;
use std::io::BufRead;
use std::io::Write;

/// Everything the controller says to, or asks of, the operator.
///
/// Prompts are given without trailing punctuation; implementations add
/// their own prompt suffix.
pub trait Console {
    /// Yes/no question. Only an answer starting with `y` or `Y` is a yes.
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;
    /// Whole-number answer. Malformed input is rejected and asked again.
    fn amount(&mut self, prompt: &str) -> anyhow::Result<Rupees>;
    /// First whitespace-delimited word of a non-blank answer.
    fn token(&mut self, prompt: &str) -> anyhow::Result<String>;
    /// Writes a block of output.
    fn show(&mut self, text: &str);
}

/// Interprets a yes/no answer by its first non-blank character.
pub fn affirmative(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y' | 'Y'))
}

/// Parses a whole-number amount, tolerating surrounding whitespace.
pub fn parse_amount(answer: &str) -> Option<Rupees> {
    answer.trim().parse::<Rupees>().ok()
}

/// First whitespace-delimited word, if any.
pub fn first_token(answer: &str) -> Option<&str> {
    answer.split_whitespace().next()
}

/// Line-oriented console over any buffered reader, for piped or redirected
/// input. Rejected answers are reprompted; end of input is an error.
#[derive(Debug)]
pub struct Stream<R, W>
where
    R: BufRead,
    W: Write,
{
    input: R,
    output: W,
}

impl<R, W> Stream<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn output(&self) -> &W {
        &self.output
    }
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}: ", prompt).context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let ref mut line = String::new();
        match self.input.read_line(line).context("read answer")? {
            0 => anyhow::bail!("input closed at {:?}", prompt),
            _ => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
    fn reject(&mut self, reason: &str) {
        let _ = writeln!(self.output, "{}", reason);
    }
}

impl<R, W> Console for Stream<R, W>
where
    R: BufRead,
    W: Write,
{
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        self.ask(prompt).map(|answer| affirmative(&answer))
    }
    fn amount(&mut self, prompt: &str) -> anyhow::Result<Rupees> {
        loop {
            match parse_amount(&self.ask(prompt)?) {
                Some(amount) => return Ok(amount),
                None => self.reject("Enter a whole number"),
            }
        }
    }
    fn token(&mut self, prompt: &str) -> anyhow::Result<String> {
        loop {
            match first_token(&self.ask(prompt)?) {
                Some(token) => return Ok(token.to_string()),
                None => self.reject("Enter a value"),
            }
        }
    }
    fn show(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }
}

/// Whether both ends of the session are attached to a terminal, so that
/// interactive prompts can be used.
#[cfg(feature = "cli")]
pub fn interactive() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal() && ::console::Term::stderr().is_term()
}

/// Console over stdin/stdout using interactive prompts.
#[cfg(feature = "cli")]
#[derive(Debug, Default)]
pub struct Terminal;

#[cfg(feature = "cli")]
impl Console for Terminal {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map(|answer| affirmative(&answer))
            .context("read yes/no answer")
    }
    fn amount(&mut self, prompt: &str) -> anyhow::Result<Rupees> {
        let answer = dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|i: &String| -> Result<(), &str> {
                match parse_amount(i) {
                    Some(_) => Ok(()),
                    None => Err("Enter a whole number"),
                }
            })
            .interact_text()
            .context("read amount")?;
        parse_amount(&answer).ok_or_else(|| anyhow::anyhow!("invalid amount {:?}", answer))
    }
    fn token(&mut self, prompt: &str) -> anyhow::Result<String> {
        let answer = dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|i: &String| -> Result<(), &str> {
                match first_token(i) {
                    Some(_) => Ok(()),
                    None => Err("Enter a value"),
                }
            })
            .interact_text()
            .context("read answer")?;
        first_token(&answer)
            .map(String::from)
            .ok_or_else(|| anyhow::anyhow!("blank answer"))
    }
    fn show(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Console fed from a fixed list of answers, recording everything it shows.
/// Rejected answers are skipped the same way a terminal would reprompt.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Script {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
    pub shown: Vec<String>,
}

#[cfg(test)]
impl Script {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }
    pub fn transcript(&self) -> String {
        self.shown.join("\n")
    }
    pub fn exhausted(&self) -> bool {
        self.answers.is_empty()
    }
    fn next(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of answers at {:?}", prompt))
    }
}

#[cfg(test)]
impl Console for Script {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        self.next(prompt).map(|a| affirmative(&a))
    }
    fn amount(&mut self, prompt: &str) -> anyhow::Result<Rupees> {
        loop {
            if let Some(amount) = parse_amount(&self.next(prompt)?) {
                return Ok(amount);
            }
        }
    }
    fn token(&mut self, prompt: &str) -> anyhow::Result<String> {
        loop {
            if let Some(token) = first_token(&self.next(prompt)?) {
                return Ok(token.to_string());
            }
        }
    }
    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}
