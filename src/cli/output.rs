use std::io::Write;

use console::style;
use serde::Serialize;

use crate::error::{KbError, Result};

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sectioned text for people reading a terminal or an agent transcript
    Human,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Pretty JSON followed by a newline. Write failures surface as
/// [`KbError::Io`].
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    writeln!(out, "{payload}")?;
    Ok(())
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    write_json(&mut std::io::stdout().lock(), value)
}

/// Robot-mode error object printed by `main` for hard failures.
#[derive(Debug, Serialize)]
pub struct RobotError<'a> {
    pub error: bool,
    pub code: &'a str,
    pub message: String,
}

impl<'a> From<&'a KbError> for RobotError<'a> {
    fn from(err: &'a KbError) -> Self {
        Self {
            error: true,
            code: err.code(),
            message: err.to_string(),
        }
    }
}

pub struct HumanLayout {
    lines: Vec<String>,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(format!("## {text}")).bold().to_string());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(format!("### {text}")).bold().to_string());
        self
    }

    /// `- **key:** value` entry.
    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        self.lines.push(format!("- **{key}:** {value}"));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) -> Result<()> {
    writeln!(std::io::stdout().lock(), "{}", layout.build())?;
    Ok(())
}

/// Keep the first `max_chars` characters of `value`, marking the cut with
/// a trailing `...`.
pub fn preview(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}
