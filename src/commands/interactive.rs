use std::collections::VecDeque;
use std::io::{self, Write};
use anyhow::Result;
use rand::Rng;

use crate::commands::{prompt_input, read_password_from_stdin};
use crate::commands::testpass::report_strength;
use crate::passgen::{GenOptions, PasswordGenerator};
use crate::report::render_assessment;
use crate::strength::evaluate_password_strength;

/// Source of user input for a session. `None` means input is closed.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
    fn read_secret(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads from the terminal; secrets are read without echo.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        prompt_input(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match read_password_from_stdin(prompt) {
            Ok(secret) => Ok(Some(secret)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Replays a fixed list of answers, one per prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
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

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.answers.pop_front())
    }

    fn read_secret(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.answers.pop_front())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

const MENU: &str = "\nPassword Generator & Strength Meter
  1) Generate password
  2) Check password strength
  3) Show last generated password
  q) Quit";

/// One interactive run. The last generated password lives here and nowhere
/// else; it is dropped when the session ends.
pub struct Session<R: Rng> {
    generator: PasswordGenerator<R>,
    defaults: GenOptions,
    last_generated: Option<String>,
}

impl<R: Rng> Session<R> {
    pub fn new(generator: PasswordGenerator<R>, defaults: GenOptions) -> Self {
        Self {
            generator,
            defaults,
            last_generated: None,
        }
    }

    pub fn last_generated(&self) -> Option<&str> {
        self.last_generated.as_deref()
    }

    pub fn run<P: Prompter, W: Write>(&mut self, prompter: &mut P, out: &mut W) -> Result<()> {
        log::debug!("Interactive session started");
        loop {
            writeln!(out, "{}", MENU)?;
            let choice = match prompter.read_line("Select an option: ")? {
                Some(choice) => choice,
                None => break,
            };
            let flow = match choice.trim().to_lowercase().as_str() {
                "1" | "g" | "gen" | "generate" => self.generate_step(prompter, out)?,
                "2" | "c" | "check" => self.check_step(prompter, out)?,
                "3" | "s" | "show" => {
                    match &self.last_generated {
                        Some(password) => writeln!(out, "Last generated password: {}", password)?,
                        None => writeln!(out, "No password generated yet")?,
                    }
                    Flow::Continue
                }
                "q" | "quit" | "exit" => Flow::Quit,
                "" => Flow::Continue,
                other => {
                    writeln!(out, "Unknown option: {}", other)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        log::debug!("Interactive session ended");
        Ok(())
    }

    fn generate_step<P: Prompter, W: Write>(&mut self, prompter: &mut P, out: &mut W) -> Result<Flow> {
        let prompt = format!("Password length [{}]: ", self.defaults.length);
        let length = match prompter.read_line(&prompt)? {
            None => return Ok(Flow::Quit),
            Some(answer) if answer.trim().is_empty() => self.defaults.length,
            Some(answer) => match answer.trim().parse::<usize>() {
                Ok(length) => length,
                Err(_) => {
                    writeln!(out, "Invalid length: {}", answer.trim())?;
                    return Ok(Flow::Continue);
                }
            },
        };

        let include_digits =
            match ask_yes_no(prompter, out, "Include digits (0-9)?", self.defaults.include_digits)? {
                Some(answer) => answer,
                None => return Ok(Flow::Quit),
            };
        let include_special =
            match ask_yes_no(prompter, out, "Include special characters (!@#$)?", self.defaults.include_special)? {
                Some(answer) => answer,
                None => return Ok(Flow::Quit),
            };

        let options = GenOptions { length, include_digits, include_special };
        match self.generator.generate(&options) {
            Ok(password) => {
                writeln!(out, "Generated password: {}", password)?;
                writeln!(out, "{}", render_assessment(&evaluate_password_strength(&password)))?;
                self.last_generated = Some(password);
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn check_step<P: Prompter, W: Write>(&mut self, prompter: &mut P, out: &mut W) -> Result<Flow> {
        match prompter.read_secret("Enter a password to check its strength: ")? {
            Some(password) => {
                report_strength(&password, false, out)?;
                Ok(Flow::Continue)
            }
            None => Ok(Flow::Quit),
        }
    }
}

fn ask_yes_no<P: Prompter, W: Write>(
    prompter: &mut P,
    out: &mut W,
    question: &str,
    default: bool,
) -> Result<Option<bool>> {
    let prompt = format!("{} [{}]: ", question, if default { "Y/n" } else { "y/N" });
    loop {
        let answer = match prompter.read_line(&prompt)? {
            Some(answer) => answer,
            None => return Ok(None),
        };
        match answer.trim().to_lowercase().as_str() {
            "" => return Ok(Some(default)),
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => writeln!(out, "Please answer y or n")?,
        }
    }
}
