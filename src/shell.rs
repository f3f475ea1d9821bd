use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::model::MenuTable;

pub const DAY_PROMPT: &str = "Enter day: ";
pub const MEAL_PROMPT: &str = "Enter meal: ";
pub const NOT_FOUND_MESSAGE: &str = "No items found for the specified day and meal.";

/// Result of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Found {
        day: String,
        meal: String,
        items: Vec<String>,
    },
    NotFound {
        day: String,
        meal: String,
    },
}

/// Asks for one day/meal pair on `writer`, reads the answers from `reader`
/// and reports the matching items.
pub struct QueryShell<R, W> {
    reader: R,
    writer: W,
    pending: Vec<String>,
}

impl<R: BufRead, W: Write> QueryShell<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: Vec::new(),
        }
    }

    /// Runs the prompt → lookup → report cycle once.
    pub fn run(&mut self, table: &MenuTable) -> Result<QueryOutcome> {
        let day = self.prompt(DAY_PROMPT)?;
        let meal = self.prompt(MEAL_PROMPT)?;
        debug!(%day, %meal, "menu query");

        let outcome = match table.items_for(&day, &meal) {
            Some(items) => {
                writeln!(self.writer, "Items for {meal} meal on {day}:")?;
                for item in items {
                    writeln!(self.writer, "- {item}")?;
                }
                writeln!(
                    self.writer,
                    "Number of items: {}",
                    table.count_for(&day, &meal)
                )?;
                QueryOutcome::Found {
                    day,
                    meal,
                    items: items.to_vec(),
                }
            }
            None => {
                writeln!(self.writer, "{NOT_FOUND_MESSAGE}")?;
                QueryOutcome::NotFound { day, meal }
            }
        };

        self.writer.flush()?;
        Ok(outcome)
    }

    /// Hands the reader and writer back once the session is over.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;
        self.next_token()
    }

    /// Next whitespace-delimited token. Blank lines are skipped and end of
    /// input yields an empty token.
    fn next_token(&mut self) -> Result<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(String::new());
            }
            self.pending = line.split_whitespace().rev().map(str::to_string).collect();
        }
        Ok(self.pending.pop().unwrap_or_default())
    }
}
