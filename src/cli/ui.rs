//! Shared UI primitives for birthdaycmd
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `first name: `
//! - Errors and warnings go to stderr with a `Error:` / `Warning:` prefix

use anyhow::Result;
use crossterm::{
    cursor, execute,
    style::Stylize,
    terminal::{self, Clear, ClearType},
};
use inquire::{
    ui::{RenderConfig, Styled},
    InquireError, Select, Text,
};
use std::io;

// ============================================================================
// Message Functions
// ============================================================================

/// Print an error message to stderr
#[inline]
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

/// Print a warning message to stderr
#[inline]
pub fn warning(msg: &str) {
    eprintln!("Warning: {}", msg);
}

/// Bold text, or plain when color is off.
pub fn emphasis(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

// ============================================================================
// Terminal
// ============================================================================

/// Wipe the screen before redrawing the filter view.
pub fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    Ok(())
}

const PROMPT_ROWS: u16 = 4;
const MIN_PAGE: usize = 5;

/// Menu page size for a terminal of the given height.
fn page_size(option_count: usize, height: u16) -> usize {
    let rows = usize::from(height.saturating_sub(PROMPT_ROWS)).max(MIN_PAGE);
    option_count.min(rows)
}

// ============================================================================
// Prompts
// ============================================================================

fn plain_prompt() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new(""))
        .with_answered_prompt_prefix(Styled::new(""))
}

/// Outcome of a prompt that the user may cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult<T> {
    Value(T),
    /// Esc: back out of this prompt only
    Skipped,
    /// Ctrl+C: leave the screen
    Quit,
}

impl<T> PromptResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PromptResult<U> {
        match self {
            Self::Value(v) => PromptResult::Value(f(v)),
            Self::Skipped => PromptResult::Skipped,
            Self::Quit => PromptResult::Quit,
        }
    }
}

/// Display a selection menu and return the chosen index
pub fn select_index(prompt: &str, options: Vec<String>, start: usize) -> Result<PromptResult<usize>> {
    if options.is_empty() {
        return Ok(PromptResult::Skipped);
    }
    let height = terminal::size().map(|(_, h)| h).unwrap_or(24);
    let page = page_size(options.len(), height);
    let result = Select::new(prompt, options)
        .with_render_config(plain_prompt())
        .with_page_size(page)
        .with_starting_cursor(start)
        .with_vim_mode(true)
        .raw_prompt_skippable();

    match result {
        Ok(Some(choice)) => Ok(PromptResult::Value(choice.index)),
        Ok(None) => Ok(PromptResult::Skipped),
        Err(InquireError::OperationInterrupted) => Ok(PromptResult::Quit),
        Err(e) => Err(e.into()),
    }
}

/// Free-text prompt prefilled with the current value.
pub fn text_input(prompt: &str, current: &str) -> Result<PromptResult<String>> {
    let result = Text::new(prompt)
        .with_render_config(plain_prompt())
        .with_initial_value(current)
        .prompt_skippable();

    match result {
        Ok(Some(value)) => Ok(PromptResult::Value(value)),
        Ok(None) => Ok(PromptResult::Skipped),
        Err(InquireError::OperationInterrupted) => Ok(PromptResult::Quit),
        Err(e) => Err(e.into()),
    }
}
