use std::path::PathBuf;

use crate::booking::{BookingReceipt, BookingStep, BookingWizard, FieldKey, StepView};
use crate::cli::interaction::{
    parse_flag, BookingInteraction, PromptContext, PromptResponse, ScriptedInteraction,
    TerminalInteraction,
};
use crate::cli::output::{self, current_preferences, set_preferences, OutputPreferences};
use crate::cli::{render, test_mode, CliError};
use crate::config::ConfigManager;
use crate::forms::{FieldErrors, FormSession};

const FORM_STEPS: usize = 2;

const USAGE: &str = "Usage: spa_booking_cli [--config <path>] [--plain] [--json]

  --config <path>  Read the business profile from <path>
  --plain          Disable colours and symbols
  --json           Print the booking receipt as JSON when done
  --help           Show this message";

/// Command-line switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub plain: bool,
    pub json: bool,
    pub help: bool,
}

impl CliOptions {
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--config needs a path".into()))?;
                    options.config_path = Some(PathBuf::from(path));
                }
                "--plain" => options.plain = true,
                "--json" => options.json = true,
                "--help" | "-h" => options.help = true,
                other => return Err(CliError::Usage(format!("unknown argument `{other}`"))),
            }
        }
        Ok(options)
    }
}

/// How a booking session ended.
#[derive(Debug)]
pub enum BookingOutcome {
    Booked(BookingReceipt),
    Cancelled,
}

/// Entry point used by the `spa_booking_cli` binary.
pub fn run_cli() -> Result<(), CliError> {
    let options = CliOptions::parse(std::env::args().skip(1))?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let manager = match &options.config_path {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = manager.load()?;
    set_preferences(OutputPreferences {
        plain_mode: options.plain || config.plain_mode,
        high_contrast_mode: config.high_contrast_mode,
    });
    tracing::debug!(business = %config.business.name, "starting booking session");

    let wizard = BookingWizard::new(config.business);
    let outcome = if test_mode::is_enabled() {
        run_booking(wizard, &mut ScriptedInteraction)?
    } else {
        run_booking(wizard, &mut TerminalInteraction::new())?
    };

    match outcome {
        BookingOutcome::Booked(receipt) => {
            if options.json {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            }
        }
        BookingOutcome::Cancelled => output::warning("Booking cancelled."),
    }
    Ok(())
}

/// Drives `wizard` to confirmation using `interaction` for every answer.
pub fn run_booking<I: BookingInteraction>(
    mut wizard: BookingWizard,
    interaction: &mut I,
) -> Result<BookingOutcome, CliError> {
    let prefs = current_preferences();
    loop {
        let (business, mut form) = match wizard.view() {
            StepView::Contact { business, form } | StepView::Payment { business, form } => {
                (business.clone(), form)
            }
            StepView::Confirmation { business, receipt } => {
                print_lines(render::confirmation(business, receipt, &prefs));
                return Ok(match wizard.receipt() {
                    Some(receipt) => BookingOutcome::Booked(receipt.clone()),
                    None => BookingOutcome::Cancelled,
                });
            }
        };

        let position = match wizard.step() {
            BookingStep::Contact => 1,
            _ => 2,
        };
        print_lines(render::business_card(&business, &prefs));
        println!("{}", render::rule(terminal_width(), &prefs));
        print_lines(render::step_header(form.descriptor(), position, FORM_STEPS, &prefs));

        let mut pending: Vec<FieldKey> = form.fields().iter().map(|field| field.key).collect();
        let mut errors = FieldErrors::default();
        loop {
            if !fill_fields(&mut form, &pending, &errors, interaction)? {
                return Ok(BookingOutcome::Cancelled);
            }
            match wizard.submit(&form) {
                Ok(_) => break,
                Err(err) => match err.field_errors() {
                    Some(failed) => {
                        output::warning("Please correct the highlighted fields.");
                        pending = failed.keys().collect();
                        errors = failed.clone();
                    }
                    None => return Err(CliError::Wizard(err)),
                },
            }
        }
    }
}

/// Prompts every key in `keys`; returns `false` when the user cancels.
fn fill_fields<I: BookingInteraction>(
    form: &mut FormSession,
    keys: &[FieldKey],
    errors: &FieldErrors,
    interaction: &mut I,
) -> Result<bool, CliError> {
    let fields = form.fields().to_vec();
    let total = fields.len();
    let mut index = 0;
    while index < keys.len() {
        let key = keys[index];
        let Some(position) = fields.iter().position(|field| field.key == key) else {
            index += 1;
            continue;
        };
        let field = &fields[position];
        let current = form.value(key);
        let error = errors.message(key);
        if let Some(message) = error {
            output::field_error(message);
        }
        let context = PromptContext {
            field,
            current: &current,
            error,
            index: position,
            total,
        };
        match interaction.prompt_field(&context)? {
            PromptResponse::Cancel => return Ok(false),
            PromptResponse::Keep => {}
            PromptResponse::Value(raw) if field.is_checkbox() => match parse_flag(&raw) {
                Some(checked) => {
                    form.set_flag(key, checked);
                }
                None => {
                    output::field_error("Answer yes or no");
                    continue;
                }
            },
            PromptResponse::Value(raw) => {
                if let Some(display) = form.input(key, &raw) {
                    if field.transform.is_some() && display != raw {
                        output::detail(format!("→ {}", render::display_value(field, &display)));
                    }
                }
            }
        }
        index += 1;
    }
    Ok(true)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _)| usize::from(columns))
        .unwrap_or(40)
}
