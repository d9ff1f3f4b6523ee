//! Templated Question Module
//! Answers the one supported free-text question by regex match and table
//! lookup. No language model is involved; the grammar is exactly one
//! pattern.

use crate::data::{format_count, PopulationTable};
use crate::query::QueryEngine;
use once_cell::sync::Lazy;
use regex::Regex;
use std::num::ParseIntError;
use thiserror::Error;

/// Shown whenever the input does not match the question template.
pub const INVALID_FORMAT_MESSAGE: &str =
    "Invalid query format. Please use the format 'What was the population of [ST] in [YYYY]?'";

/// The one supported question. Case-sensitive, matched anywhere in the
/// input; whitespace is flexible only at the three token junctions.
static QUESTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"What was the population of\s*([A-Z]{2})\s*in\s*(\d{4})\?")
        .expect("question pattern is a valid regex")
});

/// Faults inside extraction/lookup. Display-only: the public surface
/// stringifies these rather than propagating them.
#[derive(Error, Debug)]
enum AnswerError {
    #[error("missing capture group {0}")]
    MissingCapture(usize),
    #[error("unparseable year: {0}")]
    Year(#[from] ParseIntError),
}

/// Answer a free-text question against the table.
///
/// Always returns a displayable string: the answer, a no-data notice, the
/// fixed invalid-format message, or a stringified internal fault. The
/// display surface has no structured error path, so nothing propagates.
pub fn answer_question(table: &PopulationTable, text: &str) -> String {
    match try_answer(table, text) {
        Ok(answer) => answer,
        Err(fault) => format!("Error: {}", fault),
    }
}

/// The narrow fallible core: capture extraction and lookup only.
fn try_answer(table: &PopulationTable, text: &str) -> Result<String, AnswerError> {
    let Some(captures) = QUESTION_PATTERN.captures(text) else {
        return Ok(INVALID_FORMAT_MESSAGE.to_string());
    };

    let state = captures
        .get(1)
        .ok_or(AnswerError::MissingCapture(1))?
        .as_str();
    let year: u32 = captures
        .get(2)
        .ok_or(AnswerError::MissingCapture(2))?
        .as_str()
        .parse()?;

    Ok(match QueryEngine::lookup(table, state, year) {
        Some(population) => format!(
            "A: The population of {} in {} was {}",
            state,
            year,
            format_count(population)
        ),
        None => format!("No data found for {} in {}.", state, year),
    })
}
