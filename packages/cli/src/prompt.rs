// ABOUTME: Interactive prompt helpers built on inquire
// ABOUTME: Delete confirmation, list selection by index and comma-separated tag parsing

use std::fmt::Display;

use colored::*;
use inquire::{Confirm as ConfirmPrompt, Select};

use cms_core::{ContentForm, ValidationError};
use cms_resources::Confirm;

use crate::error::CliResult;

/// Asks on the terminal; an interrupted prompt counts as "no"
pub struct InquireConfirm;

impl Confirm for InquireConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        ConfirmPrompt::new(prompt)
            .with_default(false)
            .prompt()
            .unwrap_or(false)
    }
}

/// Pick one of `options`, returning its index
pub fn select_index<T: Display>(
    message: &str,
    options: Vec<T>,
    starting: Option<usize>,
) -> CliResult<usize> {
    let mut select = Select::new(message, options);
    if let Some(cursor) = starting {
        select = select.with_starting_cursor(cursor);
    }
    Ok(select.raw_prompt()?.index)
}

/// Comma-separated tags, trimmed and de-duplicated in input order
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut form = ContentForm::default();
    for tag in input.split(',') {
        form.add_tag(tag);
    }
    form.tags
}

pub fn print_validation_errors(errors: &[ValidationError]) {
    for error in errors {
        eprintln!("  {} {}", "•".red(), error.message);
    }
}
