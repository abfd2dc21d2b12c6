use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

use dialoguer::{Confirm, Input, Select};
use log::{debug, info};
use tokio::task;

use crate::error::{Error, Result};
use crate::selector::SelectorUi;

/// Answer that cancels whichever prompt it is given to.
pub const CANCEL_ANSWER: &str = "!cancel";

/// Operator prompts used by CLI commands.
#[derive(Debug, Clone)]
pub enum Prompt {
    /// Console-based interactive prompts using dialoguer
    Console,
    /// Non-interactive mode that uses defaults or fails
    NonInteractive,
    /// Answers replayed from a script
    Scripted(ScriptedAnswers),
}

impl Prompt {
    pub fn new(interactive: bool) -> Self {
        if interactive {
            Self::Console
        } else {
            Self::NonInteractive
        }
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(self, Prompt::NonInteractive)
    }

    pub async fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        match self {
            Prompt::Console => {
                let prompt = message.to_string();
                let result = task::spawn_blocking(move || {
                    Confirm::new()
                        .with_prompt(prompt)
                        .default(default)
                        .interact()
                })
                .await
                .map_err(join_error)?;

                result.map_err(prompt_error)
            }
            Prompt::NonInteractive => Ok(default),
            Prompt::Scripted(answers) => answers.confirm(message, default),
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::Console
    }
}

impl SelectorUi for Prompt {
    async fn choose_one<T: Clone>(
        &mut self,
        labels: &[String],
        values: &[T],
        prompt: &str,
    ) -> Result<Option<T>> {
        let index = match self {
            Prompt::Console => {
                let prompt = prompt.to_string();
                let items = labels.to_vec();
                let result = task::spawn_blocking(move || {
                    Select::new()
                        .with_prompt(prompt)
                        .items(items.as_slice())
                        .default(0)
                        .interact_opt()
                })
                .await
                .map_err(join_error)?;

                result.map_err(prompt_error)?
            }
            Prompt::NonInteractive => return Err(Error::non_interactive("Selection")),
            Prompt::Scripted(answers) => answers.choose(labels, prompt)?,
        };

        Ok(index.and_then(|index| values.get(index).cloned()))
    }

    async fn prompt_text(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        match self {
            Prompt::Console => {
                let prompt = prompt.to_string();
                let initial = default.map(str::to_string);
                let result = task::spawn_blocking(move || {
                    let mut input = Input::<String>::new()
                        .with_prompt(prompt)
                        .allow_empty(true);
                    if let Some(initial) = initial {
                        input = input.with_initial_text(initial);
                    }
                    input.interact_text()
                })
                .await
                .map_err(join_error)?;

                // An empty submission stands in for cancelling the prompt.
                let value = result.map_err(prompt_error)?;
                Ok(Some(value).filter(|value| !value.trim().is_empty()))
            }
            Prompt::NonInteractive => Err(Error::non_interactive("Text entry")),
            Prompt::Scripted(answers) => Ok(answers.text(prompt)),
        }
    }

    fn notify(&mut self, message: &str) {
        info!("{message}");
        eprintln!("{message}");
    }
}

/// Answers read one per line from a file. Blank lines and lines starting with
/// `#` are skipped. Once the script is exhausted every prompt is cancelled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#')),
        )
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Option<String> {
        let answer = self.answers.pop_front();
        debug!("{prompt} -> {answer:?}");
        answer.filter(|answer| answer.trim() != CANCEL_ANSWER)
    }

    /// Resolve the next answer to a position in `labels`. `@N` picks the N-th
    /// entry; anything else must equal a label.
    fn choose(&mut self, labels: &[String], prompt: &str) -> Result<Option<usize>> {
        let Some(answer) = self.next(prompt) else {
            return Ok(None);
        };

        let by_position = answer
            .strip_prefix('@')
            .and_then(|n| n.trim().parse::<usize>().ok())
            .filter(|n| (1..=labels.len()).contains(n))
            .map(|n| n - 1);

        by_position
            .or_else(|| labels.iter().position(|label| *label == answer))
            .map(Some)
            .ok_or_else(|| Error::ScriptMismatch {
                answer,
                choices: labels.join(", "),
            })
    }

    fn text(&mut self, prompt: &str) -> Option<String> {
        self.next(prompt)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let Some(answer) = self.next(prompt) else {
            return Ok(default);
        };
        match answer.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err(Error::ScriptMismatch {
                answer,
                choices: "yes, no".to_string(),
            }),
        }
    }
}

fn join_error(err: task::JoinError) -> Error {
    Error::Io {
        source: io::Error::other(err.to_string()),
    }
}

fn prompt_error(err: dialoguer::Error) -> Error {
    Error::Prompt {
        message: err.to_string(),
    }
}
