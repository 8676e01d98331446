use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};

use crate::booking::FieldValue;
use crate::cli::render::field_prompt;
use crate::cli::test_mode::{self, ScriptedInput};
use crate::cli::CliError;
use crate::forms::{FieldDescriptor, FieldKind};

/// Answer to a single field prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// Raw text typed by the user; checkboxes answer `yes`/`no`.
    Value(String),
    /// Leave the current value as it is.
    Keep,
    /// Abandon the booking.
    Cancel,
}

/// Everything needed to render one field prompt.
pub struct PromptContext<'a> {
    pub field: &'a FieldDescriptor,
    pub current: &'a FieldValue,
    pub error: Option<&'a str>,
    pub index: usize,
    pub total: usize,
}

/// Source of answers for the booking prompts.
pub trait BookingInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> Result<PromptResponse, CliError>;
}

/// Interprets a checkbox answer.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "x" => Some(true),
        "n" | "no" | "false" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Interactive prompts backed by dialoguer.
pub struct TerminalInteraction {
    theme: ColorfulTheme,
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn prompt_text(&self, context: &PromptContext<'_>) -> Result<PromptResponse, CliError> {
        let prompt = field_prompt(context.field);
        let current = context.current.to_text();
        let value = match context.field.kind {
            FieldKind::Password => Password::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()?,
            _ => Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .with_initial_text(current.clone())
                .allow_empty(true)
                .interact_text()?,
        };
        if value == current && !current.is_empty() {
            Ok(PromptResponse::Keep)
        } else {
            Ok(PromptResponse::Value(value))
        }
    }

    fn prompt_checkbox(&self, context: &PromptContext<'_>) -> Result<PromptResponse, CliError> {
        let agreed = Confirm::with_theme(&self.theme)
            .with_prompt(field_prompt(context.field))
            .default(context.current.as_flag())
            .interact()?;
        Ok(PromptResponse::Value(if agreed { "yes" } else { "no" }.into()))
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingInteraction for TerminalInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> Result<PromptResponse, CliError> {
        let result = if context.field.is_checkbox() {
            self.prompt_checkbox(context)
        } else {
            self.prompt_text(context)
        };
        match result {
            // Ctrl-C inside a prompt surfaces as an interrupted read.
            Err(CliError::Prompt(dialoguer::Error::IO(err)))
                if err.kind() == std::io::ErrorKind::Interrupted =>
            {
                Ok(PromptResponse::Cancel)
            }
            other => other,
        }
    }
}

/// Answers taken from `SPA_BOOKING_TEST_INPUTS`; cancels once exhausted.
pub struct ScriptedInteraction;

impl BookingInteraction for ScriptedInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> Result<PromptResponse, CliError> {
        println!("> {}", field_prompt(context.field));
        Ok(match test_mode::next_input() {
            Some(ScriptedInput::Value(value)) => PromptResponse::Value(value),
            Some(ScriptedInput::Keep) => PromptResponse::Keep,
            Some(ScriptedInput::Cancel) | None => PromptResponse::Cancel,
        })
    }
}
