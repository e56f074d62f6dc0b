use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
#[cfg(test)]
use std::collections::VecDeque;
use std::path::PathBuf;
use thiserror::Error;

use crate::database::daily_log::GoalSource;
use crate::database::record::DailyGoals;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("input aborted")]
    Aborted,
}

/// Source of answers to interactive questions.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Terminal input through rustyline.
pub struct TerminalReader {
    editor: Editor<(), DefaultHistory>,
}

impl TerminalReader {
    pub fn new() -> Result<Self, PromptError> {
        Ok(Self {
            editor: Editor::<(), DefaultHistory>::new()?,
        })
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(PromptError::Aborted),
            Err(e) => Err(e.into()),
        }
    }
}

/// Pre-recorded answers, handed out in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedReader {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedReader {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(PromptError::Aborted)
    }
}

/// Who is logging and which image to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRequest {
    pub user_id: String,
    pub image_path: PathBuf,
}

/// Asks for whichever of user id and image path wasn't supplied up front.
pub fn collect_entry_request(
    reader: &mut dyn LineReader,
    user_id: Option<String>,
    image_path: Option<PathBuf>,
) -> Result<EntryRequest, PromptError> {
    let user_id = match user_id.filter(|u| !u.trim().is_empty()) {
        Some(user_id) => user_id.trim().to_string(),
        None => ask_non_empty(reader, "Enter your User ID: ")?,
    };
    let image_path = match image_path {
        Some(path) => path,
        None => PathBuf::from(ask_non_empty(reader, "Enter the image path: ")?),
    };

    Ok(EntryRequest {
        user_id,
        image_path,
    })
}

pub fn collect_daily_goals(reader: &mut dyn LineReader) -> Result<DailyGoals, PromptError> {
    Ok(DailyGoals {
        calories: ask_amount(reader, "calories")?,
        fat: ask_amount(reader, "fat")?,
        protein: ask_amount(reader, "protein")?,
        carbs: ask_amount(reader, "carbs")?,
    })
}

fn ask_non_empty(reader: &mut dyn LineReader, prompt: &str) -> Result<String, PromptError> {
    loop {
        let answer = reader.read_line(prompt)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}

fn ask_amount(reader: &mut dyn LineReader, nutrient: &str) -> Result<f64, PromptError> {
    let prompt = format!("Enter your daily {} goal: ", nutrient);
    loop {
        let answer = reader.read_line(&prompt)?;
        match answer.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => return Ok(value),
            _ => println!(
                "{}",
                format!("'{}' is not a valid amount, enter a non-negative number.", answer.trim())
                    .yellow()
            ),
        }
    }
}

/// Asks for goals on the reader it wraps when a new day's record is created.
pub struct GoalPrompt<'a> {
    reader: &'a mut dyn LineReader,
}

impl<'a> GoalPrompt<'a> {
    pub fn new(reader: &'a mut dyn LineReader) -> Self {
        Self { reader }
    }
}

impl GoalSource for GoalPrompt<'_> {
    fn daily_goals(&mut self) -> Result<DailyGoals, PromptError> {
        println!("{}", "No record for today yet, let's set your daily goals.".cyan());
        collect_daily_goals(&mut *self.reader)
    }
}
